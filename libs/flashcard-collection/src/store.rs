//! Ordered in-memory card collection.

use crate::types::{Card, CardId, CardPair};
use rand::Rng;

/// Owns every card of the session, in display order.
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Vec<Card>,
    next_id: u64,
}

impl CardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one card per pair, in input order. Returns the created cards.
    pub fn insert_many(&mut self, pairs: Vec<CardPair>) -> Vec<Card> {
        let start = self.cards.len();
        for pair in pairs {
            let id = self.allocate_id();
            self.cards.push(Card::from_pair(id, pair));
        }
        self.cards[start..].to_vec()
    }

    /// Remove the card with `id`. Returns whether a card was removed.
    pub fn remove_by_id(&mut self, id: CardId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Reorder every card uniformly at random (Durstenfeld's Fisher-Yates).
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Toggle one card's flip state. Returns the new state, or `None` if
    /// no card has `id`.
    pub fn toggle_flip(&mut self, id: CardId) -> Option<bool> {
        let idx = self.position(id)?;
        let card = &mut self.cards[idx];
        card.flipped = !card.flipped;
        Some(card.flipped)
    }

    /// Turn every card face down. Returns the ids that were flipped.
    pub fn close_all(&mut self) -> Vec<CardId> {
        self.cards
            .iter_mut()
            .filter(|card| card.flipped)
            .map(|card| {
                card.flipped = false;
                card.id
            })
            .collect()
    }

    /// Remove every card. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.cards.len();
        self.cards.clear();
        removed
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Cards in display order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn ordered_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|card| card.id).collect()
    }

    fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    // Ids are never reused, even after clear().
    fn allocate_id(&mut self) -> CardId {
        self.next_id += 1;
        CardId(self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn pairs(n: usize) -> Vec<CardPair> {
        (0..n)
            .map(|i| CardPair::new(format!("q{i}"), format!("a{i}")).unwrap())
            .collect()
    }

    fn questions(store: &CardStore) -> Vec<String> {
        store.cards().iter().map(|c| c.question.clone()).collect()
    }

    #[test]
    fn insert_many_appends_in_order() {
        let mut store = CardStore::new();
        store.insert_many(pairs(2));
        let created = store.insert_many(vec![
            CardPair::new("x", "1").unwrap(),
            CardPair::new("y", "2").unwrap(),
            CardPair::new("z", "3").unwrap(),
        ]);

        assert_eq!(created.len(), 3);
        assert_eq!(store.count(), 5);
        assert_eq!(questions(&store), vec!["q0", "q1", "x", "y", "z"]);
        assert_eq!(store.cards().last().unwrap().id, created[2].id);
        assert!(created.iter().all(|c| !c.flipped));
    }

    #[test]
    fn insert_many_with_no_pairs_is_noop() {
        let mut store = CardStore::new();
        assert!(store.insert_many(Vec::new()).is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn ids_are_unique_across_clear() {
        let mut store = CardStore::new();
        let first: Vec<CardId> = store.insert_many(pairs(3)).iter().map(|c| c.id).collect();
        store.clear();
        let second: Vec<CardId> = store.insert_many(pairs(3)).iter().map(|c| c.id).collect();

        let all: HashSet<CardId> = first.iter().chain(&second).copied().collect();
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn remove_by_id_reports_outcome() {
        let mut store = CardStore::new();
        let created = store.insert_many(pairs(3));

        assert!(store.remove_by_id(created[1].id));
        assert!(!store.remove_by_id(created[1].id));
        assert_eq!(questions(&store), vec!["q0", "q2"]);
    }

    #[test]
    fn toggle_flip_affects_one_card() {
        let mut store = CardStore::new();
        let created = store.insert_many(pairs(2));

        assert_eq!(store.toggle_flip(created[0].id), Some(true));
        assert!(!store.get(created[1].id).unwrap().flipped);
        assert_eq!(store.toggle_flip(created[0].id), Some(false));
        assert_eq!(store.toggle_flip(CardId(999)), None);
    }

    #[test]
    fn close_all_resets_only_flipped_cards() {
        let mut store = CardStore::new();
        let created = store.insert_many(pairs(4));
        store.toggle_flip(created[1].id);
        store.toggle_flip(created[3].id);
        let order_before = store.ordered_ids();

        let closed = store.close_all();

        assert_eq!(closed, vec![created[1].id, created[3].id]);
        assert!(store.cards().iter().all(|c| !c.flipped));
        assert_eq!(store.ordered_ids(), order_before);
    }

    #[test]
    fn clear_returns_removed_count() {
        let mut store = CardStore::new();
        store.insert_many(pairs(4));
        assert_eq!(store.clear(), 4);
        assert_eq!(store.count(), 0);
        assert_eq!(store.clear(), 0);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut store = CardStore::new();
        store.insert_many(pairs(20));
        let before: HashSet<CardId> = store.ordered_ids().into_iter().collect();
        let mut rng = StdRng::seed_from_u64(42);

        store.shuffle(&mut rng);

        let after: HashSet<CardId> = store.ordered_ids().into_iter().collect();
        assert_eq!(store.count(), 20);
        assert_eq!(before, after);
    }

    #[test]
    fn shuffle_handles_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut store = CardStore::new();
        store.shuffle(&mut rng);
        assert!(store.is_empty());

        store.insert_many(pairs(1));
        let only = store.ordered_ids();
        store.shuffle(&mut rng);
        assert_eq!(store.ordered_ids(), only);
    }

    #[test]
    fn shuffle_usually_changes_order() {
        let mut store = CardStore::new();
        store.insert_many(pairs(8));
        let mut rng = StdRng::seed_from_u64(7);

        let mut changed = 0;
        for _ in 0..100 {
            let before = store.ordered_ids();
            store.shuffle(&mut rng);
            if store.ordered_ids() != before {
                changed += 1;
            }
        }
        // 8! permutations: an unchanged order has probability 1/40320.
        assert!(changed >= 99, "order changed only {changed} times");
    }

    #[test]
    fn same_seed_gives_same_order() {
        let order_for = |seed: u64| {
            let mut store = CardStore::new();
            store.insert_many(pairs(10));
            store.shuffle(&mut StdRng::seed_from_u64(seed));
            questions(&store)
        };
        assert_eq!(order_for(5), order_for(5));
    }

    #[test]
    fn shuffle_is_uniform_over_three_cards() {
        const TRIALS: usize = 60_000;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<Vec<String>, usize> = HashMap::new();

        for _ in 0..TRIALS {
            // Fresh store each trial so every run starts from the same order.
            let mut store = CardStore::new();
            store.insert_many(pairs(3));
            store.shuffle(&mut rng);
            *counts.entry(questions(&store)).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = TRIALS as f64 / 6.0;
        let chi_square: f64 = counts
            .values()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        // Critical value for 5 degrees of freedom at p = 0.001.
        assert!(chi_square < 20.515, "chi-square {chi_square} too large");
    }
}
