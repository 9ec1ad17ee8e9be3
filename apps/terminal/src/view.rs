//! Terminal projection of controller events.

use crate::config::OutputFormat;
use flashcard_collection::{Card, EventSink, Notice, NoticeError, RenderEvent};
use serde::Serialize;

/// Output produced by the terminal itself rather than by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "data")]
pub enum HostMessage {
    Message(String),
    Error(String),
    /// Snapshot of the cards in display order.
    Cards(Vec<Card>),
    Presets(Vec<PresetEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetEntry {
    pub key: String,
    pub label: String,
}

/// Formats events into lines; the session writes them out after each command.
#[derive(Debug, Default)]
pub struct TerminalSink {
    format: OutputFormat,
    lines: Vec<String>,
}

impl TerminalSink {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            lines: Vec::new(),
        }
    }

    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// Queue a host message in the active output format.
    pub fn host(&mut self, message: HostMessage) {
        if self.format == OutputFormat::Json {
            self.push_json(&message);
            return;
        }
        match message {
            HostMessage::Message(text) => self.lines.push(text),
            HostMessage::Error(text) => self.lines.push(format!("error: {text}")),
            HostMessage::Cards(cards) if cards.is_empty() => {
                self.lines.push("no cards".to_string());
            }
            HostMessage::Cards(cards) => self.lines.extend(cards.iter().map(card_line)),
            HostMessage::Presets(entries) => self.lines.extend(
                entries
                    .iter()
                    .map(|entry| format!("{:<20} {}", entry.key, entry.label)),
            ),
        }
    }

    fn push_json<T: Serialize>(&mut self, value: &T) {
        match serde_json::to_string(value) {
            Ok(line) => self.lines.push(line),
            Err(e) => tracing::warn!(error = %e, "failed to encode event"),
        }
    }
}

impl EventSink for TerminalSink {
    fn render(&mut self, event: RenderEvent) {
        if self.format == OutputFormat::Json {
            self.push_json(&event);
            return;
        }
        let line = match event {
            RenderEvent::CardAdded(card) => format!("+ {}", card_line(&card)),
            RenderEvent::CardRemoved(id) => format!("- {id}"),
            RenderEvent::OrderChanged(order) => {
                let ids: Vec<String> = order.iter().map(ToString::to_string).collect();
                format!("order: {}", ids.join(" "))
            }
            RenderEvent::CardFlipStateChanged { id, flipped } => {
                format!("{id} {}", if flipped { "flipped" } else { "closed" })
            }
            RenderEvent::AllCleared => "all cards deleted".to_string(),
        };
        self.lines.push(line);
    }

    fn notify(&mut self, notice: Notice) {
        if self.format == OutputFormat::Json {
            self.push_json(&notice);
            return;
        }
        let line = match notice {
            Notice::PresetAdded { label, count, .. } => format!("{count} cards of {label} added"),
            Notice::ConfirmDeleteAll { count } => {
                format!("delete all {count} cards? (yes/no)")
            }
            Notice::Error(NoticeError::EmptyInput) => {
                "error: questions and answers must not be empty".to_string()
            }
            Notice::Error(NoticeError::CountMismatch { questions, answers }) => format!(
                "error: {questions} questions but {answers} answers"
            ),
            Notice::Error(NoticeError::NothingToDelete) => "no cards to delete".to_string(),
        };
        self.lines.push(line);
    }
}

/// One card as shown by `list` and on insertion. Face-down cards hide the answer.
pub fn card_line(card: &Card) -> String {
    if card.flipped {
        format!("{} [{}] {}", card.id, card.question, card.answer)
    } else {
        format!("{} [{}]", card.id, card.question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashcard_collection::CardId;
    use pretty_assertions::assert_eq;

    fn card(flipped: bool) -> Card {
        Card {
            id: CardId(4),
            question: "か".to_string(),
            answer: "ka".to_string(),
            flipped,
        }
    }

    #[test]
    fn text_lines() {
        let mut sink = TerminalSink::new(OutputFormat::Text);
        sink.render(RenderEvent::CardAdded(card(false)));
        sink.render(RenderEvent::OrderChanged(vec![CardId(2), CardId(1)]));
        sink.render(RenderEvent::CardFlipStateChanged { id: CardId(4), flipped: true });
        sink.notify(Notice::PresetAdded {
            key: "hiragana-ka".to_string(),
            label: "Hiragana Row KA".to_string(),
            count: 5,
        });
        sink.notify(Notice::Error(NoticeError::CountMismatch { questions: 2, answers: 1 }));

        assert_eq!(
            sink.take_lines(),
            vec![
                "+ #4 [か]",
                "order: #2 #1",
                "#4 flipped",
                "5 cards of Hiragana Row KA added",
                "error: 2 questions but 1 answers",
            ]
        );
        assert!(sink.take_lines().is_empty());
    }

    #[test]
    fn json_lines() {
        let mut sink = TerminalSink::new(OutputFormat::Json);
        sink.render(RenderEvent::CardRemoved(CardId(9)));
        assert_eq!(sink.take_lines(), vec![r#"{"type":"card_removed","data":9}"#]);
    }

    #[test]
    fn host_messages_as_text() {
        let mut sink = TerminalSink::new(OutputFormat::Text);
        sink.host(HostMessage::Error("card not found: #9".to_string()));
        sink.host(HostMessage::Cards(Vec::new()));
        sink.host(HostMessage::Cards(vec![card(true)]));
        sink.host(HostMessage::Presets(vec![PresetEntry {
            key: "hiragana-ka".to_string(),
            label: "Hiragana Row KA".to_string(),
        }]));

        assert_eq!(
            sink.take_lines(),
            vec![
                "error: card not found: #9",
                "no cards",
                "#4 [か] ka",
                "hiragana-ka          Hiragana Row KA",
            ]
        );
    }

    #[test]
    fn host_messages_as_json() {
        let mut sink = TerminalSink::new(OutputFormat::Json);
        sink.host(HostMessage::Message("delete cancelled".to_string()));
        sink.host(HostMessage::Cards(vec![card(false)]));

        assert_eq!(
            sink.take_lines(),
            vec![
                r#"{"type":"message","data":"delete cancelled"}"#,
                r#"{"type":"cards","data":[{"id":4,"question":"か","answer":"ka","flipped":false}]}"#,
            ]
        );
    }

    #[test]
    fn flipped_cards_show_answer() {
        assert_eq!(card_line(&card(true)), "#4 [か] ka");
    }
}
