//! Core engine types: coordinates, RNG, configuration, errors.
//!
//! These are the building blocks every other module depends on. Stages
//! configure the engine through `StageConfig` rather than by modifying
//! the core.

pub mod config;
pub mod coord;
pub mod error;
pub mod rng;

pub use config::{PenaltySettings, SpawnRule, StageConfig, MAX_BOARD_SIZE};
pub use coord::{MoveVector, Point};
pub use error::{ConfigError, PersistError};
pub use rng::GameRng;
