//! Unit tests for the card predicates
//!
//! Search matching against title and source, and output-type filtering.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use cardpane::filter::{CardFilter, SearchQuery};
use cardpane::models::TypeFilters;
use cardpane::CardPane;
use test_utils::fixtures::*;

#[cfg(test)]
mod search_query_tests {
    use super::*;

    #[test]
    fn test_empty_query_matches() {
        let pane = CardPane::new();
        assert!(pane.card_matches_search_query(&sample_card()));
    }

    #[test]
    fn test_literal_queries() {
        let card = sample_card();
        let mut pane = CardPane::new();

        pane.set_search_query("card");
        assert!(pane.card_matches_search_query(&card), "title only");

        pane.set_search_query("print(\"Hello, World!\")");
        assert!(pane.card_matches_search_query(&card), "source only");

        pane.set_search_query("h");
        assert!(pane.card_matches_search_query(&card), "both, case-insensitive");

        pane.set_search_query("Earth");
        assert!(!pane.card_matches_search_query(&card), "neither");
    }

    #[test]
    fn test_regex_queries() {
        let card = sample_card();
        let mut pane = CardPane::new();

        pane.set_search_query("/c/gi");
        assert!(pane.card_matches_search_query(&card), "title only");

        pane.set_search_query("/!/gi");
        assert!(pane.card_matches_search_query(&card), "source only");

        pane.set_search_query(r"/([A-Z])\w+/gi");
        assert!(pane.card_matches_search_query(&card), "both");

        pane.set_search_query("/earth/i");
        assert!(!pane.card_matches_search_query(&card), "neither");
    }

    #[test]
    fn test_regex_flags_affect_case() {
        let card = sample_card();
        let mut pane = CardPane::new();

        pane.set_search_query("/HELLO/");
        assert!(!pane.card_matches_search_query(&card));

        pane.set_search_query("/HELLO/i");
        assert!(pane.card_matches_search_query(&card));
    }

    #[test]
    fn test_broken_regex_fails_closed_to_literal() {
        let card = sample_card();
        let filter = CardFilter::new("/(hello/", TypeFilters::all());

        assert!(matches!(filter.matcher().query(), SearchQuery::Regex { .. }));
        assert!(filter.matcher().is_fallback());
        assert!(!filter.card_matches_search_query(&card));
    }
}

#[cfg(test)]
mod type_filter_tests {
    use super::*;

    #[test]
    fn test_all_enabled() {
        let pane = CardPane::new();
        for card in [no_output_card(), stdout_card(), text_plain_card(), error_card(), rich_card()] {
            assert!(pane.card_matches_filter(&card), "{}", card.title());
        }
    }

    #[test]
    fn test_none_enabled() {
        let mut pane = CardPane::new();
        pane.set_type_filters(TypeFilters::none());
        for card in [no_output_card(), stdout_card(), text_plain_card(), error_card(), rich_card()] {
            assert!(!pane.card_matches_filter(&card), "{}", card.title());
        }
    }

    #[test]
    fn test_partially_enabled() {
        let mut pane = CardPane::new();
        pane.set_type_filters(TypeFilters::new(false, true, true));

        assert!(!pane.card_matches_filter(&no_output_card()), "empty cards are plain");
        assert!(!pane.card_matches_filter(&stdout_card()));
        assert!(!pane.card_matches_filter(&text_plain_card()));
        assert!(pane.card_matches_filter(&error_card()));
        assert!(pane.card_matches_filter(&rich_card()));
    }

    #[test]
    fn test_setters_do_not_touch_visibility() {
        let card = error_card();
        let mut pane = CardPane::with_cards(vec![card.clone()]);
        pane.refresh_visibility();

        pane.set_type_filters(TypeFilters::none());
        pane.set_search_query("nothing matches this");
        assert_eq!(pane.is_visible(&card), Some(true));
    }
}
