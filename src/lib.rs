//! # rust-cardwalk
//!
//! Grid movement puzzle engine: a piece walks an N×N board by playing
//! movement cards from a small hand, and the stage is cleared once every
//! traversable tile is completed.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: No rendering, clocks, storage or services. The host
//!    feeds in taps and selections and reads back outcomes.
//!
//! 2. **Resolve, then apply**: The resolver only ever produces a
//!    `ResolvedCardMove`. The session applies that one move atomically,
//!    so the board can't change under a stale decision.
//!
//! 3. **Configuration Over Convention**: Stages describe their board,
//!    deck, spawn rule, penalties and star conditions via `StageConfig`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: The board is an `im::Vector`, so
//!   snapshots for the presentation layer are O(1).
//!
//! - **Deterministic**: Shuffles come from a seeded ChaCha RNG. Same
//!   seed and same inputs give the same game.
//!
//! ## Modules
//!
//! - `core`: Coordinates, RNG, configuration, errors
//! - `board`: Tile behaviors and the grid
//! - `cards`: Card definitions, move catalog, deck and hand
//! - `resolver`: Legal-move enumeration and tap/selection arbitration
//! - `session`: The progress state machine driving one game
//! - `scoring`: Star evaluation, best-so-far records, unlocks
//! - `persist`: Daily attempt policy and the record codec

pub mod board;
pub mod cards;
pub mod core;
pub mod persist;
pub mod resolver;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameRng, MoveVector, PenaltySettings, PersistError, Point, SpawnRule, StageConfig};

pub use crate::board::{Board, BoardLayout, Tile, TileBehavior};

pub use crate::cards::{CardDefinition, CardId, DealtCard, Deck, DeckOrder, Hand, MoveCatalog, StackId};

pub use crate::resolver::{available_moves, ConflictWarning, MoveCandidate, ResolvedCardMove};

pub use crate::session::{Counters, GameSession, Progress, SessionSnapshot, TurnOutcome, TurnReport};

pub use crate::scoring::{evaluate, Campaign, ClearMetrics, Evaluation, StageId, StageRecord, StageThresholds, StarCondition};

pub use crate::persist::{DailyAttempts, DayKey};
