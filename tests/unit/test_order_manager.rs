//! Unit tests for card ordering

#[path = "../test_utils/mod.rs"]
mod test_utils;

use cardpane::events::MoveDirection;
use cardpane::pane::OrderManager;
use test_utils::fixtures::*;

#[cfg(test)]
mod order_manager_tests {
    use super::*;

    #[test]
    fn test_move_card_dispatch() {
        let cards = create_cards(4);
        let mut order = OrderManager::with_cards(cards.clone());

        assert!(order.move_card(cards[2].key(), MoveDirection::Up));
        assert_eq!(order.position(cards[2].key()), Some(1));
        assert!(order.move_card(cards[2].key(), MoveDirection::Down));
        assert_eq!(order.cards(), cards.as_slice());
    }

    #[test]
    fn test_moves_on_empty_collection() {
        let mut order = OrderManager::new();
        let stray = sample_card();
        assert!(!order.move_up(stray.key()));
        assert!(!order.move_down(stray.key()));
        assert!(order.is_empty());
    }

    #[test]
    fn test_remove_middle_preserves_order() {
        let cards = create_cards(5);
        let mut order = OrderManager::with_cards(cards.clone());

        order.remove(cards[2].key());
        let expected: Vec<_> = cards
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 2)
            .map(|(_, c)| c.clone())
            .collect();
        assert_eq!(order.cards(), expected.as_slice());
    }

    #[test]
    fn test_replace() {
        let mut order = OrderManager::with_cards(create_cards(3));
        let replacement = create_cards(2);
        order.replace(replacement.clone());
        assert_eq!(order.cards(), replacement.as_slice());
        assert_eq!(order.len(), 2);
    }
}
