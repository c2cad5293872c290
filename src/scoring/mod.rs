//! Clear evaluation and campaign bookkeeping.
//!
//! - `evaluate`: terminal metrics + stage thresholds -> stars
//! - `StageRecord`: best-so-far per stage (max stars, min costs)
//! - `Campaign`: records for all stages plus unlock predicates

pub mod evaluator;
pub mod record;

pub use evaluator::{evaluate, ClearMetrics, Evaluation, StageThresholds, StarCondition, MAX_STARS};
pub use record::{Campaign, StageId, StageRecord, UnlockRule};
