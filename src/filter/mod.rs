//! Card Filter Engine
//!
//! Two pure predicates over a card: does it match the search query, and does
//! one of its output categories pass the type filters. A card is shown only
//! when both hold.

pub mod query;

pub use query::{SearchMatcher, SearchQuery};

use crate::models::{Card, TypeFilters};

/// Search query and type filters, compiled for repeated use
#[derive(Debug, Clone, Default)]
pub struct CardFilter {
    matcher: SearchMatcher,
    type_filters: TypeFilters,
}

impl CardFilter {
    /// Create a filter from a raw search string and type filters
    pub fn new(search: &str, type_filters: TypeFilters) -> Self {
        Self {
            matcher: SearchMatcher::new(search),
            type_filters,
        }
    }

    /// The raw search query
    pub fn search_query(&self) -> &str {
        self.matcher.raw()
    }

    pub fn matcher(&self) -> &SearchMatcher {
        &self.matcher
    }

    pub fn type_filters(&self) -> TypeFilters {
        self.type_filters
    }

    /// Replace the search query, recompiling it if it changed
    pub fn set_search_query(&mut self, search: &str) {
        if self.matcher.raw() != search {
            self.matcher = SearchMatcher::new(search);
        }
    }

    pub fn set_type_filters(&mut self, type_filters: TypeFilters) {
        self.type_filters = type_filters;
    }

    /// Check if the card's title or source code matches the search query
    ///
    /// An empty query matches every card.
    pub fn card_matches_search_query(&self, card: &Card) -> bool {
        if self.matcher.is_empty() {
            return true;
        }
        self.matcher.is_match(card.title()) || self.matcher.is_match(card.source_code())
    }

    /// Check if any of the card's output categories is enabled
    ///
    /// A card without outputs is treated as plain text.
    pub fn card_matches_filter(&self, card: &Card) -> bool {
        card.categories()
            .into_iter()
            .any(|category| self.type_filters.allows(category))
    }

    /// Both predicates
    pub fn matches(&self, card: &Card) -> bool {
        self.card_matches_search_query(card) && self.card_matches_filter(card)
    }
}
