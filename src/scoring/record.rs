//! Best-so-far records and stage unlocking.
//!
//! A `StageRecord` only ever improves: stars take the max, cost metrics
//! take the min. A worse attempt never regresses it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::evaluator::{evaluate, ClearMetrics, Evaluation, StageThresholds};

/// Campaign stage identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StageId(pub u32);

/// Best values recorded for one stage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRecord {
    pub stars: u8,
    pub best_moves: Option<u32>,
    pub best_penalties: Option<u32>,
    pub best_seconds: Option<u64>,
    pub best_score: Option<u32>,
    /// Some clear happened without a revisit.
    pub no_revisit_clear: bool,
    /// Some clear met the second star condition.
    pub secondary_met: bool,
    /// Some clear met the third star condition.
    pub score_met: bool,
    pub clears: u32,
}

fn keep_min<T: Ord + Copy>(slot: &mut Option<T>, value: T) {
    *slot = Some(slot.map_or(value, |old| old.min(value)));
}

impl StageRecord {
    /// Fold one cleared attempt into the record.
    pub fn merge(&mut self, metrics: &ClearMetrics, evaluation: &Evaluation) {
        self.stars = self.stars.max(evaluation.stars);
        keep_min(&mut self.best_moves, metrics.move_count);
        keep_min(&mut self.best_penalties, metrics.penalty_count);
        keep_min(&mut self.best_seconds, metrics.elapsed_seconds);
        keep_min(&mut self.best_score, metrics.score);
        self.no_revisit_clear |= !metrics.revisited;
        self.secondary_met |= evaluation.secondary_met();
        self.score_met |= evaluation.score_met();
        self.clears = self.clears.saturating_add(1);
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.clears > 0
    }
}

/// When a stage becomes playable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnlockRule {
    Always,
    /// After clearing another stage.
    AfterStage(StageId),
    /// After collecting this many stars across the campaign.
    TotalStars(u32),
}

/// Records for every stage played so far.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    records: FxHashMap<StageId, StageRecord>,
}

impl Campaign {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn record(&self, stage: StageId) -> Option<&StageRecord> {
        self.records.get(&stage)
    }

    /// Evaluate a clear and merge it into the stage's record.
    pub fn record_clear(&mut self, stage: StageId, metrics: &ClearMetrics, thresholds: &StageThresholds) -> Evaluation {
        let evaluation = evaluate(metrics, thresholds);
        let record = self.records.entry(stage).or_default();
        record.merge(metrics, &evaluation);

        tracing::debug!(
            stage = stage.0,
            stars = evaluation.stars,
            best_stars = record.stars,
            "stage clear recorded"
        );
        evaluation
    }

    #[must_use]
    pub fn total_stars(&self) -> u32 {
        self.records.values().map(|r| u32::from(r.stars)).sum()
    }

    #[must_use]
    pub fn is_cleared(&self, stage: StageId) -> bool {
        self.records.get(&stage).is_some_and(StageRecord::is_cleared)
    }

    #[must_use]
    pub fn is_unlocked(&self, rule: UnlockRule) -> bool {
        match rule {
            UnlockRule::Always => true,
            UnlockRule::AfterStage(stage) => self.is_cleared(stage),
            UnlockRule::TotalStars(needed) => self.total_stars() >= needed,
        }
    }
}
