//! What gets persisted between sessions, and how.
//!
//! The storage medium belongs to the host. This module only defines the
//! records (`DailyAttempts` here, `Campaign` in `scoring`) and the
//! bincode codec used to turn them into bytes.

pub mod codec;
pub mod daily;

pub use codec::{decode, decode_or_default, encode};
pub use daily::{DailyAttempts, DayKey, VariantAttempts, DEFAULT_BONUS_CAP, DEFAULT_FREE_PER_DAY};
