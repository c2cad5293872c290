//! Move candidate resolution.
//!
//! Two phases, kept separate so the legality half can be tested alone:
//!
//! 1. `available_moves`: every legal `(stack, card, vector, destination)`
//!    from the current position (pure function of board, hand, catalog).
//! 2. `resolve_tap` / `resolve_selection`: decide which candidate the
//!    player meant, or report a conflict.
//!
//! The resolver never mutates the board. It only emits a
//! `ResolvedCardMove` for the session to apply.

pub mod candidates;
pub mod selection;

pub use candidates::{available_moves, has_legal_move, stack_candidates, MoveCandidate, ResolvedCardMove};
pub use selection::{
    resolve_selection, resolve_tap, ConflictWarning, ForcedSelection, SelectionResolution, TapResolution,
    CONFLICT_MESSAGE,
};
