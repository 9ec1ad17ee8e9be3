//! Flashcard collection shared by every front-end of the study widget.
//!
//! Provides:
//! - Parser for comma-separated question/answer text
//! - Ordered card store with flip state and Fisher-Yates shuffle
//! - Built-in hiragana/katakana presets behind the `PresetLookup` trait
//! - Controller that applies user actions and emits render events and notices

pub mod controller;
pub mod error;
pub mod events;
pub mod parser;
pub mod presets;
pub mod store;
pub mod types;

pub use controller::CollectionController;
pub use error::{CollectionError, CollectionResult, ParseError, Result};
pub use events::{EventLog, EventSink, Notice, NoticeError, RenderEvent};
pub use parser::parse;
pub use presets::{KanaPresets, PresetLookup, PresetTable};
pub use store::CardStore;
pub use types::{Card, CardId, CardPair, DeleteState, WidgetSettings};
