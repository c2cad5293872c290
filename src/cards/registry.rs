//! Move catalog: card identity to movement vectors.
//!
//! The `MoveCatalog` stores all card definitions for a session and
//! answers "which vectors can this card apply". Unknown cards have no
//! vectors, so they never produce candidates.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::coord::MoveVector;
use crate::core::error::ConfigError;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use rust_cardwalk::cards::{CardDefinition, CardId, MoveCatalog};
/// use rust_cardwalk::core::MoveVector;
///
/// let mut catalog = MoveCatalog::new();
/// catalog
///     .register(CardDefinition::single(CardId::new(1), "South", MoveVector::new(0, 1)))
///     .unwrap();
///
/// assert_eq!(catalog.vectors(CardId::new(1)), &[MoveVector::new(0, 1)]);
/// assert!(catalog.vectors(CardId::new(99)).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MoveCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl MoveCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Fails if a card with the same ID already exists, or if any of its
    /// vectors leaves the piece where it is.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), ConfigError> {
        if self.cards.contains_key(&card.id) {
            return Err(ConfigError::DuplicateCard { card: card.id });
        }
        if card.vectors.iter().any(|v| v.is_zero()) {
            return Err(ConfigError::ZeroVector { card: card.id });
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Register a card, builder style.
    pub fn with_card(mut self, card: CardDefinition) -> Result<Self, ConfigError> {
        self.register(card)?;
        Ok(self)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Vectors for a card; empty if unknown.
    #[must_use]
    pub fn vectors(&self, id: CardId) -> &[MoveVector] {
        self.cards
            .get(&id)
            .map(|c| c.vectors.as_slice())
            .unwrap_or(&[])
    }

    /// Does this card offer more than one vector?
    #[must_use]
    pub fn is_choice(&self, id: CardId) -> bool {
        self.cards.get(&id).is_some_and(CardDefinition::is_choice)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions, ordered by ID.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        let mut cards: Vec<_> = self.cards.values().collect();
        cards.sort_by_key(|c| c.id);
        cards.into_iter()
    }

    /// The built-in card set.
    ///
    /// | ids   | cards                                                  |
    /// |-------|--------------------------------------------------------|
    /// | 1-4   | orthogonal steps: north, east, south, west             |
    /// | 5-8   | diagonal steps: NE, SE, SW, NW                         |
    /// | 9-12  | orthogonal jumps of two: north, east, south, west      |
    /// | 13-16 | knight pairs (choice): north, east, south, west        |
    /// | 17    | horizontal (choice): one step west or east             |
    /// | 18    | vertical (choice): one step north or south             |
    ///
    /// North is `-y`.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = FxHashMap::default();
        let mut add = |card: CardDefinition| {
            cards.insert(card.id, card);
        };

        let steps = [
            ("North", MoveVector::new(0, -1)),
            ("East", MoveVector::new(1, 0)),
            ("South", MoveVector::new(0, 1)),
            ("West", MoveVector::new(-1, 0)),
        ];
        let diagonals = [
            ("Northeast", MoveVector::new(1, -1)),
            ("Southeast", MoveVector::new(1, 1)),
            ("Southwest", MoveVector::new(-1, 1)),
            ("Northwest", MoveVector::new(-1, -1)),
        ];

        let mut next = 1u32;
        for (name, v) in steps {
            add(CardDefinition::single(CardId::new(next), name, v));
            next += 1;
        }
        for (name, v) in diagonals {
            add(CardDefinition::single(CardId::new(next), name, v));
            next += 1;
        }
        for (name, v) in steps {
            let jump = MoveVector::new(v.dx * 2, v.dy * 2);
            add(CardDefinition::single(CardId::new(next), format!("Jump {}", name), jump));
            next += 1;
        }
        for (name, v) in steps {
            // Two forward, one to either side
            let forward = MoveVector::new(v.dx * 2, v.dy * 2);
            let side = MoveVector::new(v.dy, v.dx);
            let card = CardDefinition::new(CardId::new(next), format!("Knight {}", name))
                .with_vector(MoveVector::new(forward.dx - side.dx, forward.dy - side.dy))
                .with_vector(MoveVector::new(forward.dx + side.dx, forward.dy + side.dy));
            add(card);
            next += 1;
        }

        add(CardDefinition::new(CardId::new(next), "Horizontal")
            .with_vector(MoveVector::new(-1, 0))
            .with_vector(MoveVector::new(1, 0)));
        add(CardDefinition::new(CardId::new(next + 1), "Vertical")
            .with_vector(MoveVector::new(0, -1))
            .with_vector(MoveVector::new(0, 1)));

        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = MoveCatalog::new();
        catalog
            .register(CardDefinition::single(CardId::new(1), "East", MoveVector::new(1, 0)))
            .unwrap();

        assert!(catalog.contains(CardId::new(1)));
        assert_eq!(catalog.get(CardId::new(1)).map(|c| c.name.as_str()), Some("East"));
        assert!(catalog.get(CardId::new(99)).is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = MoveCatalog::new();
        catalog
            .register(CardDefinition::single(CardId::new(1), "A", MoveVector::new(1, 0)))
            .unwrap();

        let err = catalog
            .register(CardDefinition::single(CardId::new(1), "B", MoveVector::new(0, 1)))
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateCard { card: CardId::new(1) });
    }

    #[test]
    fn test_zero_vector_rejected() {
        let mut catalog = MoveCatalog::new();
        let stay = CardDefinition::new(CardId::new(2), "Stay")
            .with_vector(MoveVector::new(1, 0))
            .with_vector(MoveVector::new(0, 0));

        let err = catalog.register(stay).unwrap_err();

        assert_eq!(err, ConfigError::ZeroVector { card: CardId::new(2) });
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_standard_set_has_no_zero_vectors() {
        let catalog = MoveCatalog::standard();
        assert!(catalog.iter().flat_map(|c| c.vectors.iter()).all(|v| !v.is_zero()));
    }

    #[test]
    fn test_unknown_card_has_no_vectors() {
        let catalog = MoveCatalog::new();
        assert!(catalog.vectors(CardId::new(5)).is_empty());
        assert!(!catalog.is_choice(CardId::new(5)));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_standard_set() {
        let catalog = MoveCatalog::standard();

        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.vectors(CardId::new(1)), &[MoveVector::new(0, -1)]);
        assert_eq!(catalog.vectors(CardId::new(6)), &[MoveVector::new(1, 1)]);
        assert_eq!(catalog.vectors(CardId::new(10)), &[MoveVector::new(2, 0)]);

        // Knight east: two right, one up or down
        assert_eq!(
            catalog.vectors(CardId::new(14)),
            &[MoveVector::new(2, -1), MoveVector::new(2, 1)]
        );
        assert!(catalog.is_choice(CardId::new(14)));
        assert!(catalog.is_choice(CardId::new(17)));
        assert!(!catalog.is_choice(CardId::new(4)));
    }

    #[test]
    fn test_iter_ordered() {
        let catalog = MoveCatalog::standard();
        let ids: Vec<_> = catalog.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, (1..=18).collect::<Vec<_>>());
    }
}
