//! Draw and discard piles.

use serde::{Deserialize, Serialize};

use super::instance::DealtCard;
use crate::core::rng::GameRng;

/// How the deck is ordered at the start and on recycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckOrder {
    /// Shuffle with the session RNG.
    #[default]
    Shuffled,
    /// Deal in listed order; recycled discards keep discard order.
    AsListed,
}

/// Draw pile plus discard pile.
///
/// The draw pile's top is the end of the vector.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    draw_pile: Vec<DealtCard>,
    discard_pile: Vec<DealtCard>,
    order: DeckOrder,
    recycle: bool,
}

impl Deck {
    /// Build a deck whose first card in `cards` is drawn first
    /// (before any shuffle).
    pub fn new(cards: Vec<DealtCard>, order: DeckOrder, recycle: bool, rng: &mut GameRng) -> Self {
        let mut draw_pile = cards;
        draw_pile.reverse();
        if order == DeckOrder::Shuffled {
            rng.shuffle(&mut draw_pile);
        }
        Self {
            draw_pile,
            discard_pile: Vec::new(),
            order,
            recycle,
        }
    }

    /// Take the top card.
    ///
    /// When the draw pile is empty and recycling is on, the discard
    /// pile becomes the new draw pile first.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<DealtCard> {
        if self.draw_pile.is_empty() && self.recycle && !self.discard_pile.is_empty() {
            self.recycle_discards(rng);
        }
        self.draw_pile.pop()
    }

    fn recycle_discards(&mut self, rng: &mut GameRng) {
        let mut pile = std::mem::take(&mut self.discard_pile);
        pile.reverse();
        if self.order == DeckOrder::Shuffled {
            rng.shuffle(&mut pile);
        }
        tracing::trace!(cards = pile.len(), "recycling discard pile");
        self.draw_pile = pile;
    }

    pub fn discard(&mut self, card: DealtCard) {
        self.discard_pile.push(card);
    }

    /// Cards left to draw (not counting recyclable discards).
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.discard_pile.len()
    }

    /// Nothing left to draw, even after recycling.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.draw_pile.is_empty() && (!self.recycle || self.discard_pile.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, InstanceAllocator};

    fn dealt(ids: &[u32]) -> Vec<DealtCard> {
        let mut alloc = InstanceAllocator::new();
        ids.iter().map(|&id| alloc.deal(CardId::new(id))).collect()
    }

    #[test]
    fn test_as_listed_order() {
        let mut rng = GameRng::new(1);
        let mut deck = Deck::new(dealt(&[1, 2, 3]), DeckOrder::AsListed, false, &mut rng);

        let drawn: Vec<_> = std::iter::from_fn(|| deck.draw(&mut rng)).map(|c| c.card.raw()).collect();
        assert_eq!(drawn, vec![1, 2, 3]);
        assert!(deck.is_exhausted());
    }

    #[test]
    fn test_shuffled_is_deterministic() {
        let cards = dealt(&[1, 2, 3, 4, 5, 6, 7, 8]);

        let mut rng1 = GameRng::new(9);
        let mut rng2 = GameRng::new(9);
        let mut deck1 = Deck::new(cards.clone(), DeckOrder::Shuffled, false, &mut rng1);
        let mut deck2 = Deck::new(cards, DeckOrder::Shuffled, false, &mut rng2);

        for _ in 0..8 {
            assert_eq!(deck1.draw(&mut rng1), deck2.draw(&mut rng2));
        }
    }

    #[test]
    fn test_recycle_discards() {
        let mut rng = GameRng::new(1);
        let mut deck = Deck::new(dealt(&[1, 2]), DeckOrder::AsListed, true, &mut rng);

        let a = deck.draw(&mut rng).unwrap();
        let b = deck.draw(&mut rng).unwrap();
        deck.discard(a);
        deck.discard(b);

        assert_eq!(deck.draw_count(), 0);
        assert!(!deck.is_exhausted());

        // Discard order: a first
        assert_eq!(deck.draw(&mut rng), Some(a));
        assert_eq!(deck.draw(&mut rng), Some(b));
        assert_eq!(deck.discard_count(), 0);
    }

    #[test]
    fn test_no_recycle() {
        let mut rng = GameRng::new(1);
        let mut deck = Deck::new(dealt(&[1]), DeckOrder::AsListed, false, &mut rng);

        let a = deck.draw(&mut rng).unwrap();
        deck.discard(a);

        assert!(deck.draw(&mut rng).is_none());
        assert!(deck.is_exhausted());
        assert_eq!(deck.discard_count(), 1);
    }
}
