//! Commands typed at the terminal prompt.

use flashcard_collection::CardId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Preset(String),
    Row(String),
    Group(String),
    Add { questions: String, answers: String },
    Flip(CardId),
    Remove(CardId),
    Shuffle,
    Close,
    Delete,
    Confirm,
    Cancel,
    List,
    Presets,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("invalid card id: {0}")]
    InvalidId(String),

    #[error("usage: add <questions> | <answers>")]
    AddUsage,
}

pub const HELP: &str = "\
commands:
  preset <key>            add a category preset (e.g. hiraganaBasic)
  row <key>               add a single row preset (e.g. katakana-ka)
  group <name>            add allHiragana or allKatakana
  add <q1,q2> | <a1,a2>   add cards from comma-separated text
  flip <id>               turn one card over
  remove <id>             delete one card
  shuffle                 shuffle all cards
  close                   turn every card face down
  delete                  delete every card (asks for yes/no)
  list                    show the cards in order
  presets                 list preset keys
  quit                    leave";

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "preset" => Self::Preset(required("preset", rest)?.to_string()),
            "row" => Self::Row(required("row", rest)?.to_string()),
            "group" => Self::Group(required("group", rest)?.to_string()),
            "add" => {
                let (questions, answers) = rest.split_once('|').ok_or(CommandError::AddUsage)?;
                Self::Add {
                    questions: questions.to_string(),
                    answers: answers.to_string(),
                }
            }
            "flip" => Self::Flip(card_id(required("flip", rest)?)?),
            "remove" | "rm" => Self::Remove(card_id(required("remove", rest)?)?),
            "shuffle" => Self::Shuffle,
            "close" => Self::Close,
            "delete" => Self::Delete,
            "yes" | "y" => Self::Confirm,
            "no" | "n" => Self::Cancel,
            "list" | "ls" => Self::List,
            "presets" => Self::Presets,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(Some(command))
    }
}

fn required<'a>(name: &'static str, rest: &'a str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(name))
    } else {
        Ok(rest)
    }
}

fn card_id(value: &str) -> Result<CardId, CommandError> {
    value
        .trim_start_matches('#')
        .parse::<u64>()
        .map(CardId)
        .map_err(|_| CommandError::InvalidId(value.to_string()))
}
