//! Property-based tests for the filter engine

use cardpane::events::FilterUpdate;
use cardpane::filter::CardFilter;
use cardpane::models::{Card, CardOutput, TypeFilters};
use cardpane::CardPane;
use proptest::prelude::*;

fn mime_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("stdout".to_string()),
        Just("text/plain".to_string()),
        Just("error".to_string()),
        Just("text/html".to_string()),
        "[a-z]{1,8}/[a-z]{1,8}",
    ]
}

fn card() -> impl Strategy<Value = Card> {
    (
        "\\PC{0,30}",
        "\\PC{0,30}",
        prop::collection::vec(mime_type(), 0..4),
    )
        .prop_map(|(title, source, mimes)| {
            let outputs = mimes.into_iter().map(|m| CardOutput::new(m, "v")).collect();
            Card::new(0, title, source, outputs)
        })
}

fn type_filters() -> impl Strategy<Value = TypeFilters> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(t, r, e)| TypeFilters::new(t, r, e))
}

proptest! {
    #[test]
    fn test_empty_query_always_matches(card in card()) {
        prop_assert!(CardFilter::default().card_matches_search_query(&card));
    }

    #[test]
    fn test_literal_search_ignores_case(title in "[a-zA-Z ]{1,20}", start in 0usize..20, len in 1usize..5) {
        let start = start.min(title.len() - 1);
        let end = (start + len).min(title.len());
        let needle = title[start..end].to_uppercase();
        prop_assume!(!needle.starts_with('/'));

        let card = Card::new(0, title.to_lowercase(), "", vec![]);
        let filter = CardFilter::new(&needle, TypeFilters::all());
        prop_assert!(filter.card_matches_search_query(&card));
    }

    #[test]
    fn test_no_filters_hide_everything(card in card()) {
        let filter = CardFilter::new("", TypeFilters::none());
        prop_assert!(!filter.card_matches_filter(&card));
    }

    #[test]
    fn test_output_less_card_filters_like_text(filters in type_filters()) {
        let filter = CardFilter::new("", filters);
        let empty = Card::new(0, "empty", "", vec![]);
        let text = Card::new(0, "text", "", vec![CardOutput::new("stdout", "x")]);
        prop_assert_eq!(filter.card_matches_filter(&empty), filter.card_matches_filter(&text));
    }

    #[test]
    fn test_arbitrary_queries_never_panic(query in "\\PC{0,20}", card in card()) {
        let _ = CardFilter::new(&query, TypeFilters::all()).card_matches_search_query(&card);
    }

    #[test]
    fn test_visibility_is_conjunction(
        cards in prop::collection::vec(card(), 0..10),
        query in "[a-z]{0,3}",
        filters in type_filters(),
    ) {
        let mut pane = CardPane::with_cards(cards.clone());
        pane.update_filters(FilterUpdate::new(query, filters));

        prop_assert_eq!(pane.visible_cards().len(), cards.len());
        for card in &cards {
            let expected = pane.card_matches_search_query(card) && pane.card_matches_filter(card);
            prop_assert_eq!(pane.is_visible(card), Some(expected));
        }
    }
}
