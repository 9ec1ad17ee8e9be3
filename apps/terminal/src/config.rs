//! Terminal configuration loaded from the environment.

use flashcard_collection::WidgetSettings;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// How events are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub settings: WidgetSettings,
    pub output: OutputFormat,
}

impl Config {
    /// Read configuration from process environment variables.
    ///
    /// Recognised variables:
    /// - FLASHCARDS_SEED: shuffle seed (u64)
    /// - FLASHCARDS_CONFIRM_DELETE: ask before deleting all cards (true/false)
    /// - FLASHCARDS_PRESET_NOTICES: announce preset additions (true/false)
    /// - FLASHCARDS_OUTPUT: `text` or `json`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = WidgetSettings::default();

        if let Some(value) = lookup("FLASHCARDS_SEED") {
            let seed = value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "FLASHCARDS_SEED",
                expected: "an unsigned integer",
                value: value.clone(),
            })?;
            settings.shuffle_seed = Some(seed);
        }
        if let Some(value) = lookup("FLASHCARDS_CONFIRM_DELETE") {
            settings.confirm_delete_all = parse_bool("FLASHCARDS_CONFIRM_DELETE", &value)?;
        }
        if let Some(value) = lookup("FLASHCARDS_PRESET_NOTICES") {
            settings.notify_on_preset = parse_bool("FLASHCARDS_PRESET_NOTICES", &value)?;
        }

        let output = match lookup("FLASHCARDS_OUTPUT").as_deref().map(str::trim) {
            None | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "FLASHCARDS_OUTPUT",
                    expected: "`text` or `json`",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self { settings, output })
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            expected: "true or false",
            value: value.to_string(),
        }),
    }
}
