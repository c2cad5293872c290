//! Star evaluation of a cleared attempt.
//!
//! A stage declares one to three independent `StarCondition`s. Each one
//! the attempt meets is worth a star. Evaluation is a pure function of
//! the attempt's `ClearMetrics` and the stage's `StageThresholds`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::ConfigError;

/// Most conditions (and stars) a stage can declare.
pub const MAX_STARS: usize = 3;

/// Terminal numbers of one cleared attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearMetrics {
    /// Cards played.
    pub move_count: u32,
    /// Sum of penalty costs applied.
    pub penalty_count: u32,
    /// Supplied by the caller; the engine keeps no clock.
    pub elapsed_seconds: u64,
    /// Moves across every attempt at this stage, retries included.
    pub total_move_count: u32,
    /// `move_count + penalty_count`. Lower is better.
    pub score: u32,
    /// Landed on an already-completed tile at least once.
    pub revisited: bool,
}

/// One way to earn a star.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarCondition {
    /// Awarded for clearing at all.
    Clear,
    MaxMoves(u32),
    NoRevisit,
    MaxScore(u32),
    MaxPenalties(u32),
    MaxSeconds(u64),
}

impl StarCondition {
    #[must_use]
    pub fn is_met(&self, metrics: &ClearMetrics) -> bool {
        match *self {
            StarCondition::Clear => true,
            StarCondition::MaxMoves(limit) => metrics.move_count <= limit,
            StarCondition::NoRevisit => !metrics.revisited,
            StarCondition::MaxScore(limit) => metrics.score <= limit,
            StarCondition::MaxPenalties(limit) => metrics.penalty_count <= limit,
            StarCondition::MaxSeconds(limit) => metrics.elapsed_seconds <= limit,
        }
    }
}

/// A stage's star conditions, in star order.
///
/// Holds at most `MAX_STARS` conditions; deserialization enforces it too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<StarCondition>", into = "Vec<StarCondition>")]
pub struct StageThresholds {
    conditions: SmallVec<[StarCondition; MAX_STARS]>,
}

impl StageThresholds {
    pub fn new(conditions: impl IntoIterator<Item = StarCondition>) -> Result<Self, ConfigError> {
        let conditions: SmallVec<[StarCondition; MAX_STARS]> = conditions.into_iter().collect();
        if conditions.len() > MAX_STARS {
            return Err(ConfigError::TooManyStarConditions {
                count: conditions.len(),
            });
        }
        Ok(Self { conditions })
    }

    /// Clear, then a move ceiling, then a score ceiling.
    #[must_use]
    pub fn with_ceilings(max_moves: u32, max_score: u32) -> Self {
        Self {
            conditions: SmallVec::from_buf([
                StarCondition::Clear,
                StarCondition::MaxMoves(max_moves),
                StarCondition::MaxScore(max_score),
            ]),
        }
    }

    #[must_use]
    pub fn conditions(&self) -> &[StarCondition] {
        &self.conditions
    }
}

impl Default for StageThresholds {
    fn default() -> Self {
        Self {
            conditions: SmallVec::from_slice(&[StarCondition::Clear]),
        }
    }
}

impl TryFrom<Vec<StarCondition>> for StageThresholds {
    type Error = ConfigError;

    fn try_from(conditions: Vec<StarCondition>) -> Result<Self, Self::Error> {
        Self::new(conditions)
    }
}

impl From<StageThresholds> for Vec<StarCondition> {
    fn from(thresholds: StageThresholds) -> Self {
        thresholds.conditions.into_vec()
    }
}

/// Result of evaluating one attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub stars: u8,
    /// One flag per declared condition, in order.
    pub conditions_met: SmallVec<[bool; MAX_STARS]>,
}

impl Evaluation {
    /// Second condition met (usually the move objective).
    #[must_use]
    pub fn secondary_met(&self) -> bool {
        self.conditions_met.get(1).copied().unwrap_or(false)
    }

    /// Third condition met (usually the score objective).
    #[must_use]
    pub fn score_met(&self) -> bool {
        self.conditions_met.get(2).copied().unwrap_or(false)
    }
}

/// Score an attempt against a stage's thresholds.
#[must_use]
pub fn evaluate(metrics: &ClearMetrics, thresholds: &StageThresholds) -> Evaluation {
    let conditions_met: SmallVec<[bool; MAX_STARS]> =
        thresholds.conditions().iter().map(|c| c.is_met(metrics)).collect();
    let earned = conditions_met.iter().filter(|&&met| met).count().min(MAX_STARS);

    Evaluation {
        stars: u8::try_from(earned).unwrap_or(u8::MAX),
        conditions_met,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(moves: u32, penalties: u32, revisited: bool) -> ClearMetrics {
        ClearMetrics {
            move_count: moves,
            penalty_count: penalties,
            elapsed_seconds: 60,
            total_move_count: moves,
            score: moves + penalties,
            revisited,
        }
    }

    #[test]
    fn test_default_is_clear_only() {
        let eval = evaluate(&metrics(100, 50, true), &StageThresholds::default());
        assert_eq!(eval.stars, 1);
        assert!(!eval.secondary_met());
    }

    #[test]
    fn test_conditions_are_independent() {
        let thresholds = StageThresholds::new([
            StarCondition::Clear,
            StarCondition::MaxMoves(15),
            StarCondition::NoRevisit,
        ])
        .unwrap();

        // Moves too high, but no revisit
        let eval = evaluate(&metrics(16, 0, false), &thresholds);
        assert_eq!(eval.stars, 2);
        assert_eq!(eval.conditions_met.as_slice(), &[true, false, true]);
        assert!(!eval.secondary_met());
        assert!(eval.score_met());

        let eval = evaluate(&metrics(15, 0, false), &thresholds);
        assert_eq!(eval.stars, 3);
    }

    #[test]
    fn test_with_ceilings() {
        let thresholds = StageThresholds::with_ceilings(10, 12);

        let eval = evaluate(&metrics(10, 3, false), &thresholds);
        assert_eq!(eval.conditions_met.as_slice(), &[true, true, false]);
        assert_eq!(eval.stars, 2);
    }

    #[test]
    fn test_zero_stars_possible() {
        let thresholds = StageThresholds::new([StarCondition::MaxSeconds(30)]).unwrap();
        assert_eq!(evaluate(&metrics(5, 0, false), &thresholds).stars, 0);
    }

    #[test]
    fn test_too_many_conditions() {
        let err = StageThresholds::new([StarCondition::Clear; 4]).unwrap_err();
        assert_eq!(err, ConfigError::TooManyStarConditions { count: 4 });
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&StageThresholds::with_ceilings(8, 9)).unwrap();
        let back: StageThresholds = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StageThresholds::with_ceilings(8, 9));

        let too_many = r#"["Clear","Clear","Clear","NoRevisit"]"#;
        assert!(serde_json::from_str::<StageThresholds>(too_many).is_err());
    }
}
