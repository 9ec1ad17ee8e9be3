//! End-to-end flows through the collection controller.

use std::collections::HashSet;

use flashcard_collection::{
    CardId, CardPair, CollectionController, CollectionError, DeleteState, EventLog, KanaPresets,
    Notice, ParseError, PresetTable, RenderEvent, WidgetSettings,
};
use pretty_assertions::assert_eq;

fn seeded() -> WidgetSettings {
    WidgetSettings {
        shuffle_seed: Some(2024),
        ..WidgetSettings::default()
    }
}

fn id_set(
    ctl: &CollectionController<impl flashcard_collection::PresetLookup, EventLog>,
) -> HashSet<CardId> {
    ctl.store().ordered_ids().into_iter().collect()
}

/// Add a preset, reject a bad submission, shuffle, then delete everything.
#[test]
fn preset_reject_shuffle_delete() {
    let pairs = ["a", "i", "u", "e", "o"]
        .iter()
        .map(|r| CardPair::new(format!("kana-{r}"), *r).unwrap())
        .collect();
    let presets = PresetTable::new().with("vowels", "Vowels", pairs);
    let mut ctl = CollectionController::with_settings(presets, EventLog::new(), seeded());

    assert_eq!(ctl.add_from_preset_category("vowels"), Some(5));
    assert_eq!(ctl.store().count(), 5);
    let ids = id_set(&ctl);

    assert_eq!(
        ctl.add_from_user_text("q1,q2", "a1"),
        Err(CollectionError::Parse(ParseError::CountMismatch {
            questions: 2,
            answers: 1
        }))
    );
    assert_eq!(ctl.store().count(), 5);

    ctl.shuffle_all();
    assert_eq!(ctl.store().count(), 5);
    assert_eq!(id_set(&ctl), ids);

    assert_eq!(ctl.request_delete_all(), Ok(5));
    assert_eq!(ctl.confirm_delete_all(), Ok(5));
    assert_eq!(ctl.store().count(), 0);
    assert_eq!(ctl.delete_state(), DeleteState::Idle);
    assert_eq!(ctl.sink().renders().last(), Some(&RenderEvent::AllCleared));
}

/// The kana group buttons add each category with its own notice.
#[test]
fn all_hiragana_group() {
    let mut ctl =
        CollectionController::with_settings(KanaPresets::new(), EventLog::new(), seeded());
    let group = KanaPresets::group("allHiragana").unwrap();

    let added = ctl.add_preset_group(group);

    assert_eq!(added, 46 + 20 + 5 + 33);
    assert_eq!(ctl.store().count(), added);
    let labels: Vec<&str> = ctl
        .sink()
        .notices()
        .iter()
        .filter_map(|n| match n {
            Notice::PresetAdded { label, .. } => Some(label.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        labels,
        vec!["Hiragana Basic", "Hiragana Tenten", "Hiragana Handakuten", "Hiragana Yoon"]
    );
    assert_eq!(ctl.store().cards()[0].question, "あ");
    assert_eq!(ctl.store().cards()[added - 1].answer, "pyo");
}

/// Rendering the event stream reproduces the store exactly.
#[test]
fn event_stream_projects_store() {
    let mut ctl =
        CollectionController::with_settings(KanaPresets::new(), EventLog::new(), seeded());
    ctl.add_from_preset_row("katakana-ka");
    ctl.add_from_user_text("犬, 猫", "dog, cat").unwrap();
    let first = ctl.store().ordered_ids()[0];
    ctl.remove_card(first).unwrap();
    let second = ctl.store().ordered_ids()[0];
    ctl.flip_card(second).unwrap();
    ctl.shuffle_all();

    let mut view: Vec<(CardId, bool)> = Vec::new();
    for event in ctl.sink().renders() {
        match event {
            RenderEvent::CardAdded(card) => view.push((card.id, card.flipped)),
            RenderEvent::CardRemoved(id) => view.retain(|(v, _)| v != id),
            RenderEvent::CardFlipStateChanged { id, flipped } => {
                if let Some(entry) = view.iter_mut().find(|(v, _)| v == id) {
                    entry.1 = *flipped;
                }
            }
            RenderEvent::OrderChanged(order) => {
                view.sort_by_key(|(v, _)| order.iter().position(|o| o == v));
            }
            RenderEvent::AllCleared => view.clear(),
        }
    }

    let expected: Vec<(CardId, bool)> = ctl
        .store()
        .cards()
        .iter()
        .map(|c| (c.id, c.flipped))
        .collect();
    assert_eq!(view, expected);
}
