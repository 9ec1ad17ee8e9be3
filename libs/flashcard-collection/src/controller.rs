//! Orchestrates user actions against the card store.

use crate::error::{CollectionError, CollectionResult};
use crate::events::{EventSink, Notice, NoticeError, RenderEvent};
use crate::parser;
use crate::presets::PresetLookup;
use crate::store::CardStore;
use crate::types::{CardId, CardPair, DeleteState, WidgetSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Single owner of the card collection for one session.
///
/// Every mutation runs to completion and reports its effects through the
/// [`EventSink`]; nothing else holds cards.
pub struct CollectionController<P, S> {
    store: CardStore,
    presets: P,
    sink: S,
    rng: StdRng,
    settings: WidgetSettings,
    delete_state: DeleteState,
}

impl<P: PresetLookup, S: EventSink> CollectionController<P, S> {
    pub fn new(presets: P, sink: S) -> Self {
        Self::with_settings(presets, sink, WidgetSettings::default())
    }

    pub fn with_settings(presets: P, sink: S, settings: WidgetSettings) -> Self {
        let rng = match settings.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            store: CardStore::new(),
            presets,
            sink,
            rng,
            settings,
            delete_state: DeleteState::Idle,
        }
    }

    /// Add every card of a category preset. Returns `None` for unknown keys.
    pub fn add_from_preset_category(&mut self, key: &str) -> Option<usize> {
        self.add_preset(key, "category")
    }

    /// Add every card of a single-row preset. Returns `None` for unknown keys.
    pub fn add_from_preset_row(&mut self, key: &str) -> Option<usize> {
        self.add_preset(key, "row")
    }

    /// Add several category presets in order, as if each were added on its
    /// own. Returns the total number of cards added.
    pub fn add_preset_group(&mut self, keys: &[&str]) -> usize {
        keys.iter()
            .filter_map(|key| self.add_from_preset_category(key))
            .sum()
    }

    /// Parse user-typed text and add the resulting cards.
    ///
    /// Parse failures are reported to the sink and returned; the store is
    /// left untouched. A submission where every pair was blank adds nothing
    /// and still succeeds.
    pub fn add_from_user_text(
        &mut self,
        questions_raw: &str,
        answers_raw: &str,
    ) -> CollectionResult<usize> {
        let pairs = match parser::parse(questions_raw, answers_raw) {
            Ok(pairs) => pairs,
            Err(e) => {
                debug!(error = %e, "rejected user card text");
                self.sink.notify(Notice::Error(NoticeError::from(&e)));
                return Err(e.into());
            }
        };

        let added = self.insert(pairs);
        debug!(added, total = self.store.count(), "added cards from user text");
        Ok(added)
    }

    /// Toggle one card. Returns its new flip state.
    pub fn flip_card(&mut self, id: CardId) -> CollectionResult<bool> {
        let flipped = self
            .store
            .toggle_flip(id)
            .ok_or(CollectionError::CardNotFound(id))?;
        debug!(%id, flipped, "flipped card");
        self.sink
            .render(RenderEvent::CardFlipStateChanged { id, flipped });
        Ok(flipped)
    }

    /// Remove a single card.
    pub fn remove_card(&mut self, id: CardId) -> CollectionResult<()> {
        if !self.store.remove_by_id(id) {
            return Err(CollectionError::CardNotFound(id));
        }
        debug!(%id, remaining = self.store.count(), "removed card");
        self.sink.render(RenderEvent::CardRemoved(id));
        Ok(())
    }

    /// Reorder all cards at random and publish the new order.
    pub fn shuffle_all(&mut self) {
        self.store.shuffle(&mut self.rng);
        info!(count = self.store.count(), "shuffled cards");
        self.sink
            .render(RenderEvent::OrderChanged(self.store.ordered_ids()));
    }

    /// Turn every open card face down. Returns how many were open.
    pub fn close_all_open(&mut self) -> usize {
        let closed = self.store.close_all();
        debug!(closed = closed.len(), "closed open cards");
        for &id in &closed {
            self.sink
                .render(RenderEvent::CardFlipStateChanged { id, flipped: false });
        }
        closed.len()
    }

    /// First step of deleting every card.
    ///
    /// Returns the card count at request time. On an empty store this fails
    /// with [`CollectionError::NothingToDelete`] and stays idle. When
    /// confirmation is disabled in the settings the cards are removed at once.
    pub fn request_delete_all(&mut self) -> CollectionResult<usize> {
        let count = self.store.count();
        if count == 0 {
            self.delete_state = DeleteState::Idle;
            self.sink
                .notify(Notice::Error(NoticeError::NothingToDelete));
            return Err(CollectionError::NothingToDelete);
        }

        if !self.settings.confirm_delete_all {
            return Ok(self.clear_all());
        }

        self.delete_state = DeleteState::PendingConfirmation { card_count: count };
        self.sink.notify(Notice::ConfirmDeleteAll { count });
        Ok(count)
    }

    /// Second step of deleting every card. Returns how many were removed.
    ///
    /// Cards removed one by one while the request was pending may leave the
    /// store empty; that case fails with [`CollectionError::NothingToDelete`].
    pub fn confirm_delete_all(&mut self) -> CollectionResult<usize> {
        match self.delete_state {
            DeleteState::PendingConfirmation { .. } => {
                self.delete_state = DeleteState::Idle;
                if self.store.is_empty() {
                    self.sink
                        .notify(Notice::Error(NoticeError::NothingToDelete));
                    return Err(CollectionError::NothingToDelete);
                }
                Ok(self.clear_all())
            }
            DeleteState::Idle => Err(CollectionError::NoPendingDelete),
        }
    }

    /// Abandon a pending delete-all request without touching any card.
    pub fn cancel_delete_all(&mut self) -> CollectionResult<()> {
        match self.delete_state {
            DeleteState::PendingConfirmation { card_count } => {
                debug!(card_count, "delete-all cancelled");
                self.delete_state = DeleteState::Idle;
                Ok(())
            }
            DeleteState::Idle => Err(CollectionError::NoPendingDelete),
        }
    }

    pub fn delete_state(&self) -> DeleteState {
        self.delete_state
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn presets(&self) -> &P {
        &self.presets
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn add_preset(&mut self, key: &str, family: &str) -> Option<usize> {
        let Some(pairs) = self.presets.lookup(key) else {
            debug!(key, family, "unknown preset key");
            return None;
        };

        let count = self.insert(pairs);
        info!(key, family, count, "added preset cards");

        if self.settings.notify_on_preset {
            let label = self.presets.label_for(key);
            self.sink.notify(Notice::PresetAdded {
                key: key.to_string(),
                label,
                count,
            });
        }
        Some(count)
    }

    fn insert(&mut self, pairs: Vec<CardPair>) -> usize {
        let created = self.store.insert_many(pairs);
        let count = created.len();
        for card in created {
            self.sink.render(RenderEvent::CardAdded(card));
        }
        count
    }

    fn clear_all(&mut self) -> usize {
        let removed = self.store.clear();
        info!(removed, "deleted all cards");
        self.sink.render(RenderEvent::AllCleared);
        removed
    }
}
