//! Card Visibility Cache
//!
//! Derived card -> visible mapping consumed by rendering. It is only ever
//! rebuilt as a whole, never patched per card.

use std::collections::HashMap;

use crate::filter::CardFilter;
use crate::models::{Card, CardKey};

/// Per-card visibility derived from the current filter
#[derive(Debug, Clone, Default)]
pub struct VisibilityCache {
    entries: HashMap<CardKey, bool>,
}

impl VisibilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute visibility for every card; returns the number of visible cards
    pub fn rebuild(&mut self, cards: &[Card], filter: &CardFilter) -> usize {
        self.entries.clear();
        self.entries.reserve(cards.len());

        let mut visible = 0;
        for card in cards {
            let shown = filter.matches(card);
            if shown {
                visible += 1;
            }
            self.entries.insert(card.key(), shown);
        }
        visible
    }

    /// Cached visibility, `None` if the card has no entry
    pub fn get(&self, key: CardKey) -> Option<bool> {
        self.entries.get(&key).copied()
    }

    /// Cached visibility, treating missing entries as hidden
    pub fn is_visible(&self, key: CardKey) -> bool {
        self.get(key).unwrap_or(false)
    }

    pub fn entries(&self) -> &HashMap<CardKey, bool> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop entries for keys where `keep` is false; returns how many were dropped
    pub fn retain(&mut self, mut keep: impl FnMut(CardKey) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| keep(*key));
        before - self.entries.len()
    }
}
