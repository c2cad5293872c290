//! Dealt cards - a specific copy of a card in play.
//!
//! The same `CardId` can appear several times in a deck. `DealtCard`
//! tags each copy with a `CardInstanceId` so the presentation layer can
//! follow one physical card from deck to hand to discard.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// Per-session card copy identifier. Allocated sequentially, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardInstanceId(pub u32);

impl std::fmt::Display for CardInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A card identity plus its instance tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DealtCard {
    pub instance: CardInstanceId,
    pub card: CardId,
}

impl DealtCard {
    #[must_use]
    pub const fn new(instance: CardInstanceId, card: CardId) -> Self {
        Self { instance, card }
    }
}

/// Hands out instance ids for one session.
#[derive(Clone, Debug, Default)]
pub struct InstanceAllocator {
    next: u32,
}

impl InstanceAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a card identity in a fresh instance.
    pub fn deal(&mut self, card: CardId) -> DealtCard {
        let instance = CardInstanceId(self.next);
        self.next += 1;
        DealtCard::new(instance, card)
    }
}
