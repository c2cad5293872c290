//! Per-cell visit state.
//!
//! A `Tile` pairs a `TileBehavior` with a remaining-visit counter. The
//! counter is normalized on construction so that `is_visited` is always
//! `remaining_visits() == 0` for traversable tiles.

use serde::{Deserialize, Serialize};

/// How a tile responds to being visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileBehavior {
    /// One visit completes it.
    Single,
    /// Must be visited `required` times.
    Multi { required: u32 },
    /// Each visit flips completed and incomplete.
    Toggle,
    /// Never entered, never counted.
    Impassable,
}

impl TileBehavior {
    /// Visits needed to complete a fresh tile of this kind.
    #[must_use]
    pub const fn required_visits(self) -> u32 {
        match self {
            TileBehavior::Single | TileBehavior::Toggle => 1,
            TileBehavior::Multi { required } => {
                if required == 0 {
                    1
                } else {
                    required
                }
            }
            TileBehavior::Impassable => 0,
        }
    }

    /// Can the piece land here?
    #[must_use]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, TileBehavior::Impassable)
    }

    /// `Multi { required: 0 }` becomes `Multi { required: 1 }`.
    #[must_use]
    const fn normalized(self) -> Self {
        match self {
            TileBehavior::Multi { required: 0 } => TileBehavior::Multi { required: 1 },
            other => other,
        }
    }
}

/// One board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    behavior: TileBehavior,
    remaining: u32,
}

impl Tile {
    /// A fresh, unvisited tile.
    #[must_use]
    pub const fn new(behavior: TileBehavior) -> Self {
        let behavior = behavior.normalized();
        Self {
            behavior,
            remaining: behavior.required_visits(),
        }
    }

    /// A tile that has already been completed.
    #[must_use]
    pub const fn completed(behavior: TileBehavior) -> Self {
        Self {
            behavior: behavior.normalized(),
            remaining: 0,
        }
    }

    /// A tile with an explicit remaining count, clamped to its valid range.
    #[must_use]
    pub fn with_remaining(behavior: TileBehavior, remaining: u32) -> Self {
        let behavior = behavior.normalized();
        Self {
            behavior,
            remaining: remaining.min(behavior.required_visits()),
        }
    }

    #[must_use]
    pub const fn behavior(&self) -> TileBehavior {
        self.behavior
    }

    #[must_use]
    pub const fn required_visits(&self) -> u32 {
        self.behavior.required_visits()
    }

    #[must_use]
    pub const fn remaining_visits(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn is_traversable(&self) -> bool {
        self.behavior.is_traversable()
    }

    #[must_use]
    pub const fn is_impassable(&self) -> bool {
        !self.behavior.is_traversable()
    }

    /// Completed? Always `false` for impassable tiles.
    #[must_use]
    pub const fn is_visited(&self) -> bool {
        self.is_traversable() && self.remaining == 0
    }

    /// Apply one visit.
    ///
    /// `Single`/`Multi` count down and stop at zero, `Toggle` flips,
    /// `Impassable` ignores the call.
    pub fn mark_visited(&mut self) {
        match self.behavior {
            TileBehavior::Single | TileBehavior::Multi { .. } => {
                self.remaining = self.remaining.saturating_sub(1);
            }
            TileBehavior::Toggle => {
                self.remaining = if self.remaining == 0 { 1 } else { 0 };
            }
            TileBehavior::Impassable => {}
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(TileBehavior::Single)
    }
}
