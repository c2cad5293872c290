//! The player's hand: an ordered row of card stacks.
//!
//! Only the top card of each stack is playable. Playing or discarding
//! a top card replaces it with the next deck card on the same stack.

use serde::{Deserialize, Serialize};

use super::instance::DealtCard;

/// Position of a stack in the hand, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StackId(pub usize);

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stack({})", self.0)
    }
}

/// One hand slot. The top card is the end of the vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandStack {
    cards: Vec<DealtCard>,
}

impl HandStack {
    #[must_use]
    pub fn top(&self) -> Option<&DealtCard> {
        self.cards.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Ordered sequence of stacks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    stacks: Vec<HandStack>,
}

impl Hand {
    /// A hand with `size` empty stacks.
    #[must_use]
    pub fn with_stacks(size: usize) -> Self {
        Self {
            stacks: vec![HandStack::default(); size],
        }
    }

    #[must_use]
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    #[must_use]
    pub fn stack(&self, id: StackId) -> Option<&HandStack> {
        self.stacks.get(id.0)
    }

    /// All stacks, left to right, including empty ones.
    pub fn stacks(&self) -> impl Iterator<Item = (StackId, &HandStack)> {
        self.stacks.iter().enumerate().map(|(i, s)| (StackId(i), s))
    }

    /// Top card of a stack; `None` for empty or unknown stacks.
    #[must_use]
    pub fn top(&self, id: StackId) -> Option<&DealtCard> {
        self.stacks.get(id.0).and_then(HandStack::top)
    }

    /// Every stack with a playable top card, left to right.
    pub fn tops(&self) -> impl Iterator<Item = (StackId, &DealtCard)> {
        self.stacks
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.top().map(|c| (StackId(i), c)))
    }

    /// Remove and return the top card of a stack.
    pub fn take_top(&mut self, id: StackId) -> Option<DealtCard> {
        self.stacks.get_mut(id.0).and_then(|s| s.cards.pop())
    }

    /// Put a card on top of a stack. Ignored for unknown stacks.
    pub fn push(&mut self, id: StackId, card: DealtCard) {
        if let Some(stack) = self.stacks.get_mut(id.0) {
            stack.cards.push(card);
        }
    }

    /// Empty every stack, returning the removed cards bottom-up, left to right.
    pub fn clear(&mut self) -> Vec<DealtCard> {
        self.stacks
            .iter_mut()
            .flat_map(|s| std::mem::take(&mut s.cards))
            .collect()
    }

    /// No playable card anywhere.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.iter().all(HandStack::is_empty)
    }

    /// Total cards across all stacks.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stacks.iter().map(HandStack::len).sum()
    }
}
