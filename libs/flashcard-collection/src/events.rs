//! Events emitted by the controller.
//!
//! The controller never draws anything. Render events tell a view what to
//! create, destroy or reorder; notices are advisory messages for whatever
//! shows toasts and dialogs.

use crate::error::ParseError;
use crate::types::{Card, CardId};
use serde::Serialize;

/// Change to the projected card view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "data")]
pub enum RenderEvent {
    CardAdded(Card),
    CardRemoved(CardId),
    /// Full order after a shuffle. Ids are unchanged.
    OrderChanged(Vec<CardId>),
    CardFlipStateChanged { id: CardId, flipped: bool },
    AllCleared,
}

/// Recoverable problem worth showing to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum NoticeError {
    EmptyInput,
    CountMismatch { questions: usize, answers: usize },
    NothingToDelete,
}

impl From<&ParseError> for NoticeError {
    fn from(error: &ParseError) -> Self {
        match *error {
            ParseError::EmptyInput => Self::EmptyInput,
            ParseError::CountMismatch { questions, answers } => {
                Self::CountMismatch { questions, answers }
            }
        }
    }
}

/// Advisory message for the notification surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "data")]
pub enum Notice {
    PresetAdded {
        key: String,
        label: String,
        count: usize,
    },
    /// A delete-all request is waiting for the user to confirm.
    ConfirmDeleteAll { count: usize },
    Error(NoticeError),
}

/// Receiver of controller output.
pub trait EventSink {
    fn render(&mut self, event: RenderEvent);
    fn notify(&mut self, notice: Notice);
}

/// Sink that records everything it receives.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    renders: Vec<RenderEvent>,
    notices: Vec<Notice>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn renders(&self) -> &[RenderEvent] {
        &self.renders
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Take recorded render events, leaving the log empty.
    pub fn take_renders(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.renders)
    }

    /// Take recorded notices, leaving the log empty.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl EventSink for EventLog {
    fn render(&mut self, event: RenderEvent) {
        self.renders.push(event);
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn render(&mut self, event: RenderEvent) {
        (**self).render(event);
    }

    fn notify(&mut self, notice: Notice) {
        (**self).notify(notice);
    }
}
