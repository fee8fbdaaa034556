//! Card Selection Tracker

use std::collections::HashSet;

use crate::models::CardKey;

/// Set of selected cards, keyed by identity
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    selected: HashSet<CardKey>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark or unmark a card; returns whether the set changed
    pub fn set(&mut self, key: CardKey, selected: bool) -> bool {
        if selected {
            self.selected.insert(key)
        } else {
            self.selected.remove(&key)
        }
    }

    pub fn contains(&self, key: CardKey) -> bool {
        self.selected.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn keys(&self) -> &HashSet<CardKey> {
        &self.selected
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Keep only keys for which `keep` returns true; returns how many were dropped
    pub fn retain(&mut self, mut keep: impl FnMut(CardKey) -> bool) -> usize {
        let before = self.selected.len();
        self.selected.retain(|key| keep(*key));
        before - self.selected.len()
    }
}
