//! What a session reports back to the presentation layer.

use smallvec::SmallVec;

use super::progress::{Counters, Progress};
use crate::board::Board;
use crate::cards::{Hand, StackId};
use crate::core::coord::Point;
use crate::resolver::{ConflictWarning, ResolvedCardMove};

/// Result of one player input (`select_stack` or `tap`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// No legal action matched. Nothing changed.
    Ignored,
    /// The start tile was chosen and visited.
    SpawnChosen(Point),
    /// A choice card is selected; tap one of these.
    AwaitingDestination {
        stack: StackId,
        destinations: SmallVec<[Point; 4]>,
    },
    /// The pending card selection was abandoned.
    SelectionCleared,
    /// A move is pending; call `commit` to apply it.
    Resolved(ResolvedCardMove),
    /// Several choice cards reach the tapped tile.
    Conflict(ConflictWarning),
}

/// Result of applying a pending move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub played: ResolvedCardMove,
    /// Landed on an already-completed tile.
    pub revisit: bool,
    /// Penalty added by this move (revisit plus any deadlock entry).
    pub penalty_applied: u32,
    pub progress: Progress,
    /// Traversable tiles still unvisited.
    pub remaining: usize,
}

/// Read-only view of a session at one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: Board,
    pub hand: Hand,
    pub position: Option<Point>,
    pub progress: Progress,
    pub counters: Counters,
}
