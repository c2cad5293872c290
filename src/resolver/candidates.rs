//! Legal-move enumeration.
//!
//! A candidate is a `(stack, card, vector, destination)` tuple whose
//! destination is on the board and traversable. This half of the
//! resolver is a pure function of board, origin, hand and catalog.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::{DealtCard, Hand, MoveCatalog, StackId};
use crate::core::coord::{MoveVector, Point};

/// One legal way to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveCandidate {
    /// Hand stack whose top card would be played.
    pub stack: StackId,
    /// The card snapshot at enumeration time.
    pub card: DealtCard,
    pub vector: MoveVector,
    pub origin: Point,
    pub destination: Point,
}

impl MoveCandidate {
    /// Commit to this candidate.
    #[must_use]
    pub fn resolve(&self) -> ResolvedCardMove {
        ResolvedCardMove {
            stack: self.stack,
            card: self.card,
            vector: self.vector,
            origin: self.origin,
            destination: self.destination,
        }
    }
}

/// A decided, unambiguous move.
///
/// This is the only artifact that drives a board mutation. The session
/// applies it completely (visit, counters, hand replenishment) or not at
/// all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedCardMove {
    pub stack: StackId,
    pub card: DealtCard,
    pub vector: MoveVector,
    pub origin: Point,
    pub destination: Point,
}

/// Enumerate every legal candidate from `origin`.
///
/// Candidates come out grouped by stack (left to right), and within a
/// stack in catalog vector order.
#[must_use]
pub fn available_moves(board: &Board, origin: Point, hand: &Hand, catalog: &MoveCatalog) -> Vec<MoveCandidate> {
    let mut out = Vec::new();

    for (stack, card) in hand.tops() {
        for &vector in catalog.vectors(card.card) {
            let destination = origin.translate(vector);
            if !board.is_traversable(destination) {
                continue;
            }
            out.push(MoveCandidate {
                stack,
                card: *card,
                vector,
                origin,
                destination,
            });
        }
    }

    tracing::trace!(%origin, candidates = out.len(), "enumerated moves");
    out
}

/// Is there at least one legal candidate?
#[must_use]
pub fn has_legal_move(board: &Board, origin: Point, hand: &Hand, catalog: &MoveCatalog) -> bool {
    hand.tops().any(|(_, card)| {
        catalog
            .vectors(card.card)
            .iter()
            .any(|&v| board.is_traversable(origin.translate(v)))
    })
}

/// Candidates belonging to one stack.
pub fn stack_candidates(candidates: &[MoveCandidate], stack: StackId) -> impl Iterator<Item = &MoveCandidate> {
    candidates.iter().filter(move |c| c.stack == stack)
}
