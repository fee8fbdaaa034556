//! Card Pane State
//!
//! Single source of truth for the card list component. The pane composes
//! four parts over one ordered card collection:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                CardPane                  │
//! │                                          │
//! │  OrderManager      cards (display order) │
//! │  CardFilter        search + type filters │
//! │  VisibilityCache   card -> visible       │
//! │  SelectionTracker  selected cards        │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Every operation is synchronous and completes before the next one starts.
//! Operations on a card that is not in the collection are no-ops and report
//! `false`.
//!
//! ## Derived state after structural changes
//!
//! By default `add_card`, `delete_card` and `set_cards` leave the visibility
//! cache and the selection alone; callers refresh with `update_filters` or
//! `refresh_visibility`. With `sync_on_structural_change` enabled the pane
//! prunes stale entries and recomputes visibility after each such change.

pub mod order;
pub mod selection;
pub mod visibility;

pub use order::OrderManager;
pub use selection::SelectionTracker;
pub use visibility::VisibilityCache;

use std::collections::{HashMap, HashSet};

use crate::config::Config;
use crate::events::{FilterUpdate, MoveDirection, PaneEvent};
use crate::filter::CardFilter;
use crate::models::{Card, CardKey, TypeFilters};

/// State of the card list component
#[derive(Debug, Clone, Default)]
pub struct CardPane {
    order: OrderManager,
    selection: SelectionTracker,
    visibility: VisibilityCache,
    filter: CardFilter,
    sync_on_structural_change: bool,
}

impl CardPane {
    /// Create an empty pane with an empty query and all type filters enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pane using configured defaults
    pub fn from_config(config: &Config) -> Self {
        debug!(
            "Creating card pane (search: '{}', sync on structural change: {})",
            config.filters.search_query, config.pane.sync_on_structural_change
        );
        Self {
            filter: CardFilter::new(&config.filters.search_query, config.filters.type_filters),
            sync_on_structural_change: config.pane.sync_on_structural_change,
            ..Self::default()
        }
    }

    /// Create a pane holding the given cards, in order
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            order: OrderManager::with_cards(cards),
            ..Self::default()
        }
    }

    // Read access

    /// Cards in display order
    pub fn cards(&self) -> &[Card] {
        self.order.cards()
    }

    pub fn selected_cards(&self) -> &HashSet<CardKey> {
        self.selection.keys()
    }

    pub fn visible_cards(&self) -> &HashMap<CardKey, bool> {
        self.visibility.entries()
    }

    pub fn search_query(&self) -> &str {
        self.filter.search_query()
    }

    pub fn type_filters(&self) -> TypeFilters {
        self.filter.type_filters()
    }

    pub fn filter(&self) -> &CardFilter {
        &self.filter
    }

    pub fn sync_on_structural_change(&self) -> bool {
        self.sync_on_structural_change
    }

    pub fn set_sync_on_structural_change(&mut self, enabled: bool) {
        self.sync_on_structural_change = enabled;
    }

    pub fn card(&self, key: CardKey) -> Option<&Card> {
        self.order.get(key)
    }

    /// Display index of the card
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.order.position(card.key())
    }

    pub fn is_selected(&self, card: &Card) -> bool {
        self.selection.contains(card.key())
    }

    /// Cached visibility, `None` if the cache has no entry for the card
    pub fn is_visible(&self, card: &Card) -> Option<bool> {
        self.visibility.get(card.key())
    }

    /// Cards the cache marks visible, in display order
    pub fn visible_cards_in_order(&self) -> Vec<&Card> {
        self.cards()
            .iter()
            .filter(|card| self.visibility.is_visible(card.key()))
            .collect()
    }

    /// Selected cards still in the collection, in display order
    pub fn selected_cards_in_order(&self) -> Vec<&Card> {
        self.cards()
            .iter()
            .filter(|card| self.selection.contains(card.key()))
            .collect()
    }

    // Filter engine

    /// Check the card against the current search query
    pub fn card_matches_search_query(&self, card: &Card) -> bool {
        self.filter.card_matches_search_query(card)
    }

    /// Check the card against the current type filters
    pub fn card_matches_filter(&self, card: &Card) -> bool {
        self.filter.card_matches_filter(card)
    }

    /// Assign the search query without recomputing visibility
    pub fn set_search_query(&mut self, search: &str) {
        self.filter.set_search_query(search);
    }

    /// Assign the type filters without recomputing visibility
    pub fn set_type_filters(&mut self, type_filters: TypeFilters) {
        self.filter.set_type_filters(type_filters);
    }

    // Visibility cache

    /// Apply a new search query and type filters, then recompute visibility
    /// for every card
    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.filter.set_search_query(&update.search);
        self.filter.set_type_filters(update.filters);
        self.refresh_visibility();
    }

    /// Recompute visibility with the current query and filters
    pub fn refresh_visibility(&mut self) {
        let visible = self.visibility.rebuild(self.order.cards(), &self.filter);
        debug!(
            "Visibility recomputed: {}/{} cards visible (query: '{}')",
            visible,
            self.order.len(),
            self.filter.search_query()
        );
    }

    // Selection tracker

    /// Add the card to or remove it from the selection
    ///
    /// Returns whether the selection changed. Membership in the collection
    /// is not checked.
    pub fn card_selected(&mut self, card: &Card, selected: bool) -> bool {
        self.select_key(card.key(), selected)
    }

    fn select_key(&mut self, key: CardKey, selected: bool) -> bool {
        self.selection.set(key, selected)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // Order manager

    /// Move the card one step in the given direction
    pub fn card_moved(&mut self, card: &Card, direction: MoveDirection) -> bool {
        self.order.move_card(card.key(), direction)
    }

    /// Swap the card with the one before it; no-op when first
    pub fn move_up(&mut self, card: &Card) -> bool {
        self.order.move_up(card.key())
    }

    /// Swap the card with the one after it; no-op when last
    pub fn move_down(&mut self, card: &Card) -> bool {
        self.order.move_down(card.key())
    }

    /// Append the card to the end of the collection
    pub fn add_card(&mut self, card: Card) {
        self.order.add(card);
        self.after_structural_change();
    }

    /// Remove the first occurrence of the card
    pub fn delete_card(&mut self, card: &Card) -> bool {
        self.delete_key(card.key())
    }

    fn delete_key(&mut self, key: CardKey) -> bool {
        let removed = self.order.remove(key).is_some();
        if removed {
            self.after_structural_change();
        }
        removed
    }

    /// Replace the whole collection
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.order.replace(cards);
        self.after_structural_change();
    }

    /// Drop selection and visibility entries for cards no longer present
    ///
    /// Returns the number of entries removed.
    pub fn prune_stale(&mut self) -> usize {
        let order = &self.order;
        let dropped = self.selection.retain(|key| order.contains(key))
            + self.visibility.retain(|key| order.contains(key));
        if dropped > 0 {
            trace!("Pruned {} stale selection/visibility entries", dropped);
        }
        dropped
    }

    fn after_structural_change(&mut self) {
        if self.sync_on_structural_change {
            self.prune_stale();
            self.refresh_visibility();
        }
    }

    // Events

    /// Apply a host event; returns whether pane state changed
    pub fn handle_event(&mut self, event: PaneEvent) -> bool {
        trace!("Handling pane event '{}'", event.name());
        match event {
            PaneEvent::UpdateFilters(update) => {
                self.update_filters(update);
                true
            }
            PaneEvent::Select { card, selected } => self.select_key(card, selected),
            PaneEvent::Move { card, direction } => self.order.move_card(card, direction),
            PaneEvent::Add { card } => {
                self.add_card(card);
                true
            }
            PaneEvent::Delete { card } => self.delete_key(card),
        }
    }
}
