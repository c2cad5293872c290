//! Progress states and running counters.

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
///
/// `AwaitingSpawn -> Playing -> {Cleared, Deadlock}`, with
/// `Deadlock -> Playing` once the hand offers a legal move again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Progress {
    /// Start tile not chosen yet.
    #[default]
    AwaitingSpawn,
    Playing,
    /// Every traversable tile completed. Terminal.
    Cleared,
    /// No legal move with the current hand; waiting for a hand change.
    Deadlock,
}

impl Progress {
    /// Can hand-changing actions be taken?
    #[must_use]
    pub const fn accepts_hand_actions(self) -> bool {
        matches!(self, Progress::Playing | Progress::Deadlock)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Progress::Cleared)
    }
}

/// Running totals for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Cards played.
    pub moves: u32,
    /// Sum of penalty costs applied.
    pub penalties: u32,
    /// Landings on already-completed tiles.
    pub revisits: u32,
}

impl Counters {
    /// Moves plus penalties.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.moves.saturating_add(self.penalties)
    }

    pub(crate) fn add_penalty(&mut self, cost: u32) {
        self.penalties = self.penalties.saturating_add(cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_actions() {
        assert!(Progress::Playing.accepts_hand_actions());
        assert!(Progress::Deadlock.accepts_hand_actions());
        assert!(!Progress::AwaitingSpawn.accepts_hand_actions());
        assert!(!Progress::Cleared.accepts_hand_actions());
        assert!(Progress::Cleared.is_terminal());
        assert!(!Progress::Deadlock.is_terminal());
    }

    #[test]
    fn test_score() {
        let mut counters = Counters {
            moves: 7,
            ..Counters::default()
        };
        counters.add_penalty(3);
        counters.add_penalty(u32::MAX);

        assert_eq!(counters.penalties, u32::MAX);
        assert_eq!(counters.score(), u32::MAX);
    }
}
