//! Line-oriented terminal front-end for the kana flashcard widget.

pub mod command;
pub mod config;
pub mod view;

use std::io::{self, BufRead, Write};

use flashcard_collection::{CollectionController, CollectionError, KanaPresets, PresetLookup};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::command::{Command, HELP};
use crate::config::Config;
use crate::view::{HostMessage, PresetEntry, TerminalSink};

type Controller = CollectionController<KanaPresets, TerminalSink>;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!(?config, "starting terminal session");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(stdin.lock(), &mut stdout, &config)
}

/// Drive a controller from `input` until it ends or the user quits.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &Config,
) -> anyhow::Result<()> {
    let sink = TerminalSink::new(config.output);
    let settings = config.settings.clone();
    let mut controller = Controller::with_settings(KanaPresets::new(), sink, settings);

    for line in input.lines() {
        let line = line?;
        let message = match Command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(&mut controller, command),
            Ok(None) => None,
            Err(e) => Some(HostMessage::Error(e.to_string())),
        };

        let sink = controller.sink_mut();
        if let Some(message) = message {
            sink.host(message);
        }
        for text in sink.take_lines() {
            writeln!(output, "{text}")?;
        }
        output.flush()?;
    }

    Ok(())
}

/// Apply one command. Returns the terminal's own reply, if any; controller
/// events reach the sink directly.
fn execute(controller: &mut Controller, command: Command) -> Option<HostMessage> {
    let result = match command {
        Command::Preset(key) => Ok(preset_outcome(controller.add_from_preset_category(&key), &key)),
        Command::Row(key) => Ok(preset_outcome(controller.add_from_preset_row(&key), &key)),
        Command::Group(name) => match KanaPresets::group(&name) {
            Some(keys) => {
                controller.add_preset_group(keys);
                Ok(None)
            }
            None => Ok(Some(HostMessage::Error(format!("unknown group: {name}")))),
        },
        Command::Add { questions, answers } => controller
            .add_from_user_text(&questions, &answers)
            .map(|added| Some(HostMessage::Message(format!("{added} cards added")))),
        Command::Flip(id) => controller.flip_card(id).map(|_| None),
        Command::Remove(id) => controller.remove_card(id).map(|()| None),
        Command::Shuffle => {
            controller.shuffle_all();
            Ok(None)
        }
        Command::Close => {
            controller.close_all_open();
            Ok(None)
        }
        Command::Delete => controller.request_delete_all().map(|_| None),
        Command::Confirm => controller.confirm_delete_all().map(|_| None),
        Command::Cancel => controller
            .cancel_delete_all()
            .map(|()| Some(HostMessage::Message("delete cancelled".to_string()))),
        Command::List => Ok(Some(HostMessage::Cards(controller.store().cards().to_vec()))),
        Command::Presets => Ok(Some(HostMessage::Presets(preset_entries(controller.presets())))),
        Command::Help => Ok(Some(HostMessage::Message(HELP.to_string()))),
        Command::Quit => Ok(None),
    };

    match result {
        Ok(message) => message,
        // Already reported through the sink as notices.
        Err(CollectionError::Parse(_) | CollectionError::NothingToDelete) => None,
        Err(e) => Some(HostMessage::Error(e.to_string())),
    }
}

fn preset_outcome(added: Option<usize>, key: &str) -> Option<HostMessage> {
    match added {
        Some(_) => None,
        None => Some(HostMessage::Error(format!("unknown preset: {key}"))),
    }
}

fn preset_entries(presets: &KanaPresets) -> Vec<PresetEntry> {
    let groups = ["allHiragana", "allKatakana"].map(|group| PresetEntry {
        key: group.to_string(),
        label: "group".to_string(),
    });
    KanaPresets::category_keys()
        .into_iter()
        .chain(KanaPresets::row_keys())
        .map(|key| PresetEntry {
            label: presets.label_for(&key),
            key,
        })
        .chain(groups)
        .collect()
}
