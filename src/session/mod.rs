//! Game session: the state machine that turns player input into moves.
//!
//! ## Lifecycle
//!
//! `AwaitingSpawn -> Playing -> {Cleared, Deadlock}` and back from
//! `Deadlock` to `Playing` when the hand changes.
//!
//! ## Input flow
//!
//! 1. `select_stack` / `tap` resolve a move (or report a conflict)
//! 2. the resolved move is held as the pending move
//! 3. `commit` applies it atomically and re-evaluates progress

pub mod game;
pub mod outcome;
pub mod progress;

pub use game::GameSession;
pub use outcome::{SessionSnapshot, TurnOutcome, TurnReport};
pub use progress::{Counters, Progress};
