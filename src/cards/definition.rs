//! Card definitions - which vectors a card identity can apply.
//!
//! A `CardDefinition` is static: "step north" always means `(0, -1)`.
//! Which copy of it sits in the hand is tracked by `DealtCard`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::coord::MoveVector;

/// Identifier for a card definition.
///
/// This identifies the kind of card ("knight east"), not a specific
/// copy dealt into a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Movement vectors for one card. Inline up to four.
pub type CardVectors = SmallVec<[MoveVector; 4]>;

/// Static card definition.
///
/// A card with one vector is an ordinary card; with several it is a
/// choice card and the player picks the destination.
///
/// ## Example
///
/// ```
/// use rust_cardwalk::cards::{CardDefinition, CardId};
/// use rust_cardwalk::core::MoveVector;
///
/// let sideways = CardDefinition::new(CardId::new(1), "Sideways")
///     .with_vector(MoveVector::new(-1, 0))
///     .with_vector(MoveVector::new(1, 0));
///
/// assert!(sideways.is_choice());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Vectors this card can apply. Order is presentation order.
    pub vectors: CardVectors,
}

impl CardDefinition {
    /// Create a definition with no vectors yet.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            vectors: SmallVec::new(),
        }
    }

    /// Shorthand for a one-vector card.
    #[must_use]
    pub fn single(id: CardId, name: impl Into<String>, vector: MoveVector) -> Self {
        Self::new(id, name).with_vector(vector)
    }

    /// Add a vector (builder pattern). Duplicates are dropped.
    #[must_use]
    pub fn with_vector(mut self, vector: MoveVector) -> Self {
        if !self.vectors.contains(&vector) {
            self.vectors.push(vector);
        }
        self
    }

    /// More than one vector?
    #[must_use]
    pub fn is_choice(&self) -> bool {
        self.vectors.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_single_card() {
        let card = CardDefinition::single(CardId::new(1), "North", MoveVector::new(0, -1));
        assert_eq!(card.vectors.as_slice(), &[MoveVector::new(0, -1)]);
        assert!(!card.is_choice());
    }

    #[test]
    fn test_duplicate_vectors_dropped() {
        let card = CardDefinition::new(CardId::new(2), "Twice")
            .with_vector(MoveVector::new(1, 0))
            .with_vector(MoveVector::new(1, 0));
        assert_eq!(card.vectors.len(), 1);
    }

    #[test]
    fn test_serialization() {
        let card = CardDefinition::new(CardId::new(1), "Knight East")
            .with_vector(MoveVector::new(2, -1))
            .with_vector(MoveVector::new(2, 1));

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, card);
        assert!(deserialized.is_choice());
    }
}
