//! Error types for the construction and persistence edges.
//!
//! Gameplay itself never fails: invalid input is ignored and reported
//! through outcome enums. Only building a session from a stage
//! configuration and encoding/decoding persisted records can error.

use derive_more::{Display, Error};

use super::coord::Point;
use crate::cards::CardId;

/// A stage configuration that cannot produce a playable session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Board size of zero.
    #[display("board size must be at least 1")]
    EmptyBoard,

    /// Board too large to allocate as a puzzle grid.
    #[display("board size {size} exceeds the maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },

    /// Hand size of zero.
    #[display("hand size must be at least 1")]
    EmptyHand,

    /// No cards to deal.
    #[display("deck has no cards")]
    EmptyDeck,

    /// Fixed spawn outside the board.
    #[display("spawn point {point} is outside a board of size {size}")]
    SpawnOutOfBounds { point: Point, size: usize },

    /// Fixed spawn on an obstacle.
    #[display("spawn point {point} is impassable")]
    SpawnImpassable { point: Point },

    /// A multi-visit override that asks for zero visits.
    #[display("required visit count at {point} must be positive")]
    ZeroRequiredVisits { point: Point },

    /// More star conditions than a stage can award.
    #[display("a stage declares at most 3 star conditions, got {count}")]
    TooManyStarConditions { count: usize },

    /// Same card id registered twice.
    #[display("card {card} already registered")]
    DuplicateCard { card: CardId },

    /// A card vector that doesn't move the piece.
    #[display("card {card} has a zero movement vector")]
    ZeroVector { card: CardId },

    /// Deck references a card the catalog doesn't know.
    #[display("deck card {card} is not in the move catalog")]
    UnknownCard { card: CardId },
}

/// Failure to encode or decode a persisted record.
#[derive(Debug, Display, Error)]
pub enum PersistError {
    #[display("failed to encode record: {source}")]
    Encode { source: bincode::Error },

    #[display("failed to decode record: {source}")]
    Decode { source: bincode::Error },
}
