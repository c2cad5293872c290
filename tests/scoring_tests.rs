//! Star evaluation and best-so-far persistence across attempts.

use rust_cardwalk::scoring::{
    evaluate, Campaign, ClearMetrics, StageId, StageThresholds, StarCondition, UnlockRule, MAX_STARS,
};

fn attempt(moves: u32) -> ClearMetrics {
    ClearMetrics {
        move_count: moves,
        penalty_count: 0,
        elapsed_seconds: 60,
        total_move_count: moves,
        score: moves,
        revisited: false,
    }
}

#[test]
fn test_star_persistence() {
    let thresholds = StageThresholds::new([StarCondition::Clear, StarCondition::MaxMoves(15)]).unwrap();
    let stage = StageId(1);
    let mut campaign = Campaign::new();

    let first = campaign.record_clear(stage, &attempt(16), &thresholds);
    assert_eq!(first.stars, 1);
    assert!(!first.secondary_met());

    let second = campaign.record_clear(stage, &attempt(14), &thresholds);
    assert_eq!(second.stars, 2);
    assert!(second.secondary_met());

    let third = campaign.record_clear(stage, &attempt(20), &thresholds);
    assert_eq!(third.stars, 1);

    let record = campaign.record(stage).unwrap();
    assert_eq!(record.stars, 2);
    assert_eq!(record.best_moves, Some(14));
    assert_eq!(record.clears, 3);
    assert!(record.secondary_met);
    assert!(!record.score_met);
}

#[test]
fn test_three_condition_stage() {
    let thresholds = StageThresholds::with_ceilings(10, 12);

    let perfect = ClearMetrics {
        penalty_count: 2,
        score: 12,
        ..attempt(10)
    };
    let evaluation = evaluate(&perfect, &thresholds);
    assert_eq!(usize::from(evaluation.stars), MAX_STARS);
    assert!(evaluation.secondary_met());
    assert!(evaluation.score_met());

    let over_score = ClearMetrics {
        penalty_count: 5,
        score: 15,
        ..attempt(10)
    };
    let evaluation = evaluate(&over_score, &thresholds);
    assert_eq!(evaluation.stars, 2);
    assert!(!evaluation.score_met());
}

#[test]
fn test_conditions_are_independent() {
    // Missing the second condition does not block the third
    let thresholds =
        StageThresholds::new([StarCondition::Clear, StarCondition::NoRevisit, StarCondition::MaxSeconds(90)]).unwrap();
    let metrics = ClearMetrics {
        revisited: true,
        ..attempt(30)
    };

    let evaluation = evaluate(&metrics, &thresholds);

    assert_eq!(evaluation.stars, 2);
    assert_eq!(evaluation.conditions_met.as_slice(), &[true, false, true]);
}

#[test]
fn test_too_many_conditions_rejected() {
    let result = StageThresholds::new([
        StarCondition::Clear,
        StarCondition::NoRevisit,
        StarCondition::MaxMoves(5),
        StarCondition::MaxScore(5),
    ]);
    assert!(result.is_err());
}

#[test]
fn test_unlock_chain() {
    let mut campaign = Campaign::new();
    let thresholds = StageThresholds::default();

    assert!(!campaign.is_unlocked(UnlockRule::AfterStage(StageId(1))));
    campaign.record_clear(StageId(1), &attempt(5), &thresholds);
    assert!(campaign.is_unlocked(UnlockRule::AfterStage(StageId(1))));
    assert!(!campaign.is_unlocked(UnlockRule::AfterStage(StageId(2))));

    campaign.record_clear(StageId(2), &attempt(5), &thresholds);
    assert!(campaign.is_unlocked(UnlockRule::TotalStars(2)));
}

#[test]
fn test_thresholds_from_json() {
    let thresholds: StageThresholds = serde_json::from_str(r#"["Clear", {"MaxMoves": 15}]"#).unwrap();
    assert_eq!(thresholds.conditions(), &[StarCondition::Clear, StarCondition::MaxMoves(15)]);

    let too_many = r#"["Clear", "NoRevisit", {"MaxMoves": 1}, {"MaxScore": 1}]"#;
    assert!(serde_json::from_str::<StageThresholds>(too_many).is_err());
}
