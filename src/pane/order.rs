//! Card Order Manager
//!
//! Owns the ordered card collection. Display order is exactly the order of
//! this vector; every operation is positional and leaves the relative order
//! of untouched cards alone.

use crate::events::MoveDirection;
use crate::models::{Card, CardKey};

/// Ordered card collection
#[derive(Debug, Clone, Default)]
pub struct OrderManager {
    cards: Vec<Card>,
}

impl OrderManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing ordered collection
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of the card, if present
    pub fn position(&self, key: CardKey) -> Option<usize> {
        self.cards.iter().position(|card| card.key() == key)
    }

    pub fn contains(&self, key: CardKey) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: CardKey) -> Option<&Card> {
        self.cards.iter().find(|card| card.key() == key)
    }

    /// Swap the card with its predecessor
    ///
    /// Returns false when the card is already first or not present.
    pub fn move_up(&mut self, key: CardKey) -> bool {
        match self.position(key) {
            Some(index) if index > 0 => {
                self.cards.swap(index - 1, index);
                true
            }
            Some(_) => false,
            None => {
                trace!("move_up: card {} not in collection", key);
                false
            }
        }
    }

    /// Swap the card with its successor
    ///
    /// Returns false when the card is already last or not present.
    pub fn move_down(&mut self, key: CardKey) -> bool {
        match self.position(key) {
            Some(index) if index + 1 < self.cards.len() => {
                self.cards.swap(index, index + 1);
                true
            }
            Some(_) => false,
            None => {
                trace!("move_down: card {} not in collection", key);
                false
            }
        }
    }

    /// Move one step in the given direction
    pub fn move_card(&mut self, key: CardKey, direction: MoveDirection) -> bool {
        match direction {
            MoveDirection::Up => self.move_up(key),
            MoveDirection::Down => self.move_down(key),
        }
    }

    /// Append to the end
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the first occurrence of the card
    pub fn remove(&mut self, key: CardKey) -> Option<Card> {
        match self.position(key) {
            Some(index) => Some(self.cards.remove(index)),
            None => {
                trace!("remove: card {} not in collection", key);
                None
            }
        }
    }

    /// Replace the whole collection
    pub fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}
