//! Stage configuration.
//!
//! A session is built from one `StageConfig`:
//! - `BoardLayout`: size and per-point tile overrides
//! - hand size and deck composition
//! - `SpawnRule`: fixed start or chosen by the player
//! - `PenaltySettings`: the four penalty costs
//! - `StageThresholds`: star conditions for the clear evaluation
//!
//! Everything is passed in explicitly. Nothing is read from the
//! environment.

use serde::{Deserialize, Serialize};

use super::coord::Point;
use super::error::ConfigError;
use crate::board::{Board, BoardLayout};
use crate::cards::{CardId, DeckOrder, MoveCatalog};
use crate::scoring::StageThresholds;

/// Largest accepted board side.
pub const MAX_BOARD_SIZE: usize = 64;

/// Costs added to the penalty counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltySettings {
    /// Applied on entering deadlock.
    pub deadlock: u32,
    pub manual_redraw: u32,
    pub manual_discard: u32,
    /// Applied when landing on an already-completed tile.
    pub revisit: u32,
}

impl PenaltySettings {
    /// No penalties at all.
    #[must_use]
    pub const fn free() -> Self {
        Self {
            deadlock: 0,
            manual_redraw: 0,
            manual_discard: 0,
            revisit: 0,
        }
    }

    #[must_use]
    pub fn with_deadlock(mut self, cost: u32) -> Self {
        self.deadlock = cost;
        self
    }

    #[must_use]
    pub fn with_manual_redraw(mut self, cost: u32) -> Self {
        self.manual_redraw = cost;
        self
    }

    #[must_use]
    pub fn with_manual_discard(mut self, cost: u32) -> Self {
        self.manual_discard = cost;
        self
    }

    #[must_use]
    pub fn with_revisit(mut self, cost: u32) -> Self {
        self.revisit = cost;
        self
    }
}

impl Default for PenaltySettings {
    fn default() -> Self {
        Self {
            deadlock: 1,
            manual_redraw: 1,
            manual_discard: 1,
            revisit: 1,
        }
    }
}

/// Where the piece starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnRule {
    /// Start here; play begins immediately.
    Fixed(Point),
    /// Show the board, let the player tap a starting tile.
    ChooseAfterPreview,
}

/// Complete stage configuration.
///
/// ## Example
///
/// ```
/// use rust_cardwalk::board::BoardLayout;
/// use rust_cardwalk::cards::{CardId, DeckOrder, MoveCatalog};
/// use rust_cardwalk::core::{Point, SpawnRule, StageConfig};
///
/// let config = StageConfig::new(BoardLayout::new(5))
///     .with_hand_size(3)
///     .with_deck((1..=4).map(CardId::new).collect())
///     .with_deck_order(DeckOrder::AsListed)
///     .with_spawn(SpawnRule::Fixed(Point::new(2, 2)));
///
/// assert!(config.validate(&MoveCatalog::standard()).is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    pub layout: BoardLayout,

    /// Number of hand stacks.
    pub hand_size: usize,

    /// Card identities, in listed order.
    pub deck: Vec<CardId>,

    #[serde(default)]
    pub deck_order: DeckOrder,

    /// Reuse the discard pile when the draw pile runs out.
    #[serde(default = "default_recycle")]
    pub recycle_discards: bool,

    pub spawn: SpawnRule,

    #[serde(default)]
    pub penalties: PenaltySettings,

    #[serde(default)]
    pub seed: u64,

    #[serde(default)]
    pub thresholds: StageThresholds,
}

fn default_recycle() -> bool {
    true
}

impl StageConfig {
    /// Defaults: hand of 3, empty deck, shuffled, recycling, spawn chosen
    /// by the player, default penalties, seed 0, clear-only thresholds.
    #[must_use]
    pub fn new(layout: BoardLayout) -> Self {
        Self {
            layout,
            hand_size: 3,
            deck: Vec::new(),
            deck_order: DeckOrder::Shuffled,
            recycle_discards: true,
            spawn: SpawnRule::ChooseAfterPreview,
            penalties: PenaltySettings::default(),
            seed: 0,
            thresholds: StageThresholds::default(),
        }
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_deck(mut self, deck: Vec<CardId>) -> Self {
        self.deck = deck;
        self
    }

    #[must_use]
    pub fn with_deck_order(mut self, order: DeckOrder) -> Self {
        self.deck_order = order;
        self
    }

    #[must_use]
    pub fn with_recycle(mut self, recycle: bool) -> Self {
        self.recycle_discards = recycle;
        self
    }

    #[must_use]
    pub fn with_spawn(mut self, spawn: SpawnRule) -> Self {
        self.spawn = spawn;
        self
    }

    #[must_use]
    pub fn with_penalties(mut self, penalties: PenaltySettings) -> Self {
        self.penalties = penalties;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: StageThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Check that this configuration can produce a playable session.
    pub fn validate(&self, catalog: &MoveCatalog) -> Result<(), ConfigError> {
        if self.layout.size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.layout.size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.layout.size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        if self.deck.is_empty() {
            return Err(ConfigError::EmptyDeck);
        }
        if let Some(&card) = self.deck.iter().find(|c| !catalog.contains(**c)) {
            return Err(ConfigError::UnknownCard { card });
        }
        if let Some(&(point, _)) = self.layout.required_visits.iter().find(|(_, r)| *r == 0) {
            return Err(ConfigError::ZeroRequiredVisits { point });
        }
        if let SpawnRule::Fixed(point) = self.spawn {
            if !point.is_within(self.layout.size) {
                return Err(ConfigError::SpawnOutOfBounds {
                    point,
                    size: self.layout.size,
                });
            }
            if Board::new(&self.layout).is_impassable(point) {
                return Err(ConfigError::SpawnImpassable { point });
            }
        }
        Ok(())
    }
}
