//! Disambiguation: turning a tap or a card selection into one move.
//!
//! ## Tap rules
//!
//! Given every candidate whose destination equals the tapped point:
//!
//! - none: nothing happens
//! - all from one stack: play that stack (the destination fixes the vector)
//! - several stacks, at least one of which has a single surviving
//!   vector: play the leftmost such stack
//! - several stacks, all with several surviving vectors: conflict, the
//!   player must pick a card first
//!
//! ## Selection rules
//!
//! Selecting a stack with one surviving vector plays it immediately.
//! With several, the player must tap one of that stack's destinations.

use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

use super::candidates::{MoveCandidate, ResolvedCardMove};
use crate::cards::{DealtCard, StackId};
use crate::core::coord::Point;

/// Advisory shown when a tap can't be resolved.
pub const CONFLICT_MESSAGE: &str = "More than one card can reach this tile. Select a card first.";

/// A tap that matched several choice cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConflictWarning {
    pub destination: Point,
    /// Stacks that could have reached `destination`.
    pub stacks: SmallVec<[StackId; 4]>,
    pub message: &'static str,
}

/// Outcome of a board tap with no card selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TapResolution {
    NoMatch,
    Resolved(ResolvedCardMove),
    Conflict(ConflictWarning),
}

/// A selected choice card waiting for its destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForcedSelection {
    pub stack: StackId,
    pub card: DealtCard,
    options: SmallVec<[MoveCandidate; 4]>,
}

impl ForcedSelection {
    /// Destinations the next tap may pick from.
    pub fn destinations(&self) -> impl Iterator<Item = Point> + '_ {
        self.options.iter().map(|c| c.destination)
    }

    /// Resolve a tap; `None` if it isn't one of this card's destinations.
    #[must_use]
    pub fn resolve(&self, tapped: Point) -> Option<ResolvedCardMove> {
        self.options
            .iter()
            .find(|c| c.destination == tapped)
            .map(MoveCandidate::resolve)
    }
}

/// Outcome of selecting a hand stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionResolution {
    /// The stack is empty or none of its vectors is legal.
    Unavailable,
    Resolved(ResolvedCardMove),
    ChooseDestination(ForcedSelection),
}

/// Arbitrate a board tap against the current candidates.
#[must_use]
pub fn resolve_tap(candidates: &[MoveCandidate], tapped: Point) -> TapResolution {
    let matching: SmallVec<[&MoveCandidate; 4]> =
        candidates.iter().filter(|c| c.destination == tapped).collect();

    let Some(first) = matching.first() else {
        return TapResolution::NoMatch;
    };

    let mut stacks: SmallVec<[StackId; 4]> = SmallVec::new();
    for c in &matching {
        if !stacks.contains(&c.stack) {
            stacks.push(c.stack);
        }
    }

    if stacks.len() == 1 {
        return TapResolution::Resolved(first.resolve());
    }

    let mut surviving: FxHashMap<StackId, usize> = FxHashMap::default();
    for c in candidates {
        *surviving.entry(c.stack).or_insert(0) += 1;
    }

    // Candidates are in stack order, so the first hit is the leftmost.
    let unambiguous = matching
        .iter()
        .find(|c| surviving.get(&c.stack).copied() == Some(1));

    match unambiguous {
        Some(c) => TapResolution::Resolved(c.resolve()),
        None => TapResolution::Conflict(ConflictWarning {
            destination: tapped,
            stacks,
            message: CONFLICT_MESSAGE,
        }),
    }
}

/// Arbitrate an explicit stack selection.
#[must_use]
pub fn resolve_selection(candidates: &[MoveCandidate], stack: StackId) -> SelectionResolution {
    let options: SmallVec<[MoveCandidate; 4]> =
        candidates.iter().filter(|c| c.stack == stack).copied().collect();

    match options.as_slice() {
        [] => SelectionResolution::Unavailable,
        [only] => SelectionResolution::Resolved(only.resolve()),
        [first, ..] => SelectionResolution::ChooseDestination(ForcedSelection {
            stack,
            card: first.card,
            options,
        }),
    }
}
