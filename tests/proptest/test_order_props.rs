//! Property-based tests for ordering and selection

#[path = "../test_utils/mod.rs"]
mod test_utils;

use cardpane::models::CardKey;
use cardpane::CardPane;
use proptest::prelude::*;
use test_utils::fixtures::create_cards;

fn keys(pane: &CardPane) -> Vec<CardKey> {
    pane.cards().iter().map(|card| card.key()).collect()
}

proptest! {
    #[test]
    fn test_moves_preserve_membership(
        len in 1usize..12,
        moves in prop::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 0..40),
    ) {
        let cards = create_cards(len);
        let mut pane = CardPane::with_cards(cards.clone());

        for (index, up) in moves {
            let card = &cards[index.index(len)];
            if up {
                pane.move_up(card);
            } else {
                pane.move_down(card);
            }
        }

        let mut before: Vec<CardKey> = cards.iter().map(|c| c.key()).collect();
        let mut after = keys(&pane);
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn test_repeated_move_up_reaches_front(len in 1usize..12, pick in any::<prop::sample::Index>()) {
        let cards = create_cards(len);
        let card = &cards[pick.index(len)];
        let mut pane = CardPane::with_cards(cards.clone());

        for _ in 0..len {
            pane.move_up(card);
        }
        prop_assert_eq!(pane.position(card), Some(0));

        // The others keep their relative order
        let rest: Vec<CardKey> = cards.iter().filter(|c| *c != card).map(|c| c.key()).collect();
        prop_assert_eq!(&keys(&pane)[1..], rest.as_slice());
    }

    #[test]
    fn test_repeated_move_down_reaches_back(len in 1usize..12, pick in any::<prop::sample::Index>()) {
        let cards = create_cards(len);
        let card = &cards[pick.index(len)];
        let mut pane = CardPane::with_cards(cards.clone());

        for _ in 0..len {
            pane.move_down(card);
        }
        prop_assert_eq!(pane.position(card), Some(len - 1));
    }

    #[test]
    fn test_delete_removes_exactly_one(len in 1usize..12, pick in any::<prop::sample::Index>()) {
        let cards = create_cards(len);
        let victim = cards[pick.index(len)].clone();
        let mut pane = CardPane::with_cards(cards.clone());

        prop_assert!(pane.delete_card(&victim));
        let expected: Vec<CardKey> = cards.iter().filter(|c| **c != victim).map(|c| c.key()).collect();
        prop_assert_eq!(keys(&pane), expected);
    }

    #[test]
    fn test_add_appends(len in 0usize..12) {
        let cards = create_cards(len + 1);
        let (last, initial) = cards.split_last().unwrap();
        let mut pane = CardPane::with_cards(initial.to_vec());

        pane.add_card(last.clone());
        prop_assert_eq!(pane.position(last), Some(len));
    }

    #[test]
    fn test_select_then_deselect_restores(
        len in 1usize..8,
        preselected in prop::collection::vec(any::<bool>(), 8),
        pick in any::<prop::sample::Index>(),
    ) {
        let cards = create_cards(len);
        let mut pane = CardPane::with_cards(cards.clone());
        for (card, selected) in cards.iter().zip(preselected) {
            pane.card_selected(card, selected);
        }

        let card = &cards[pick.index(len)];
        let before = pane.selected_cards().clone();
        if !before.contains(&card.key()) {
            pane.card_selected(card, true);
            pane.card_selected(card, false);
            prop_assert_eq!(pane.selected_cards(), &before);
        }
    }
}
