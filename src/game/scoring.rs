//! Answer scoring.
//!
//! A validated answer earns 100 points per stage sitting in its correct slot,
//! plus a time bonus that starts at 300 and drops by 10 for every full ten
//! seconds of play, reaching zero at the five minute mark.

use crate::game::events::MessageCategory;
use crate::models::{Placements, StageDefinition, STAGE_COUNT};
use chrono::Duration;
use serde::Serialize;

pub const POINTS_PER_STAGE: u32 = 100;
/// Seconds after which no time bonus is awarded
pub const TIME_BONUS_WINDOW_SECS: f64 = 300.0;
const TIME_BONUS_STEP_SECS: f64 = 10.0;
const TIME_BONUS_STEP_POINTS: u32 = 10;

/// Coarse accuracy classification, used only to pick the result message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyTier {
    Perfect,
    Good,
    NeedsImprovement,
}

impl AccuracyTier {
    pub fn from_accuracy(accuracy: u32) -> Self {
        if accuracy == 100 {
            AccuracyTier::Perfect
        } else if accuracy >= 70 {
            AccuracyTier::Good
        } else {
            AccuracyTier::NeedsImprovement
        }
    }

    pub fn category(&self) -> MessageCategory {
        match self {
            AccuracyTier::Perfect | AccuracyTier::Good => MessageCategory::Success,
            AccuracyTier::NeedsImprovement => MessageCategory::Info,
        }
    }
}

/// Outcome of scoring one answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub correct_count: usize,
    pub base_score: u32,
    pub time_bonus: u32,
    pub total_score: u32,
    pub accuracy: u32,
    pub tier: AccuracyTier,
}

impl ScoreReport {
    /// Build a report from a correctness count and elapsed play time
    pub fn new(correct_count: usize, elapsed: Duration) -> Self {
        let correct_count = correct_count.min(STAGE_COUNT);
        let base_score = correct_count as u32 * POINTS_PER_STAGE;
        let time_bonus = time_bonus(elapsed);
        let accuracy = accuracy_percent(correct_count);
        Self {
            correct_count,
            base_score,
            time_bonus,
            total_score: base_score + time_bonus,
            accuracy,
            tier: AccuracyTier::from_accuracy(accuracy),
        }
    }

    /// Player-facing result text for this report's tier
    pub fn message(&self) -> String {
        match self.tier {
            AccuracyTier::Perfect => format!(
                "Perfect! You got all {} components correct! Final Score: {} ({} time bonus)",
                self.correct_count, self.total_score, self.time_bonus
            ),
            AccuracyTier::Good => format!(
                "Good job! You got {}/{} correct. Final Score: {} ({} time bonus)",
                self.correct_count, STAGE_COUNT, self.total_score, self.time_bonus
            ),
            AccuracyTier::NeedsImprovement => format!(
                "Keep learning! You got {}/{} correct. Final Score: {} ({} time bonus)",
                self.correct_count, STAGE_COUNT, self.total_score, self.time_bonus
            ),
        }
    }
}

/// Score the current placements.
/// Unplaced stages simply fail to match, so partial answers score normally.
pub fn score(catalog: &[StageDefinition], placements: &Placements, elapsed: Duration) -> ScoreReport {
    ScoreReport::new(count_correct(catalog, placements), elapsed)
}

/// Number of stages placed at their correct position
pub fn count_correct(catalog: &[StageDefinition], placements: &Placements) -> usize {
    catalog
        .iter()
        .filter(|stage| placements.slot_of(stage.id) == Some(stage.correct_position))
        .count()
}

/// Time bonus for a given elapsed duration (millisecond precision)
pub fn time_bonus(elapsed: Duration) -> u32 {
    let secs = (elapsed.num_milliseconds() as f64 / 1000.0).max(0.0);
    if secs > TIME_BONUS_WINDOW_SECS {
        return 0;
    }
    let steps = ((TIME_BONUS_WINDOW_SECS - secs) / TIME_BONUS_STEP_SECS).floor().max(0.0);
    steps as u32 * TIME_BONUS_STEP_POINTS
}

/// Percentage of stages correct, rounded to the nearest integer
pub fn accuracy_percent(correct_count: usize) -> u32 {
    (correct_count as f64 / STAGE_COUNT as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::{find_stage, CATALOG};
    use crate::models::Slot;

    fn all_correct() -> Placements {
        let mut p = Placements::new();
        for stage in CATALOG.iter() {
            p.insert(stage, stage.correct_position).unwrap();
        }
        p
    }

    #[test]
    fn test_all_correct_at_45_seconds() {
        let report = score(&CATALOG, &all_correct(), Duration::seconds(45));
        assert_eq!(report.correct_count, 7);
        assert_eq!(report.base_score, 700);
        assert_eq!(report.time_bonus, 250);
        assert_eq!(report.total_score, 950);
        assert_eq!(report.accuracy, 100);
        assert_eq!(report.tier, AccuracyTier::Perfect);
        assert_eq!(report.tier.category(), MessageCategory::Success);
    }

    #[test]
    fn test_no_bonus_at_or_after_cap() {
        let at_cap = score(&CATALOG, &all_correct(), Duration::seconds(300));
        assert_eq!(at_cap.time_bonus, 0);
        assert_eq!(at_cap.total_score, 700);

        let after_cap = score(&CATALOG, &all_correct(), Duration::seconds(301));
        assert_eq!(after_cap.time_bonus, 0);
        assert_eq!(after_cap.total_score, 700);
    }

    #[test]
    fn test_partial_correctness() {
        // Four correct, the remaining three rotated among slots 5-7
        let mut p = Placements::new();
        for id in ["ingestion", "storage", "bronze", "silver"] {
            let stage = find_stage(id).unwrap();
            p.insert(stage, stage.correct_position).unwrap();
        }
        p.insert(find_stage("gold").unwrap(), Slot::new(6).unwrap()).unwrap();
        p.insert(find_stage("query").unwrap(), Slot::new(7).unwrap()).unwrap();
        p.insert(find_stage("visualization").unwrap(), Slot::new(5).unwrap()).unwrap();

        let report = score(&CATALOG, &p, Duration::zero());
        assert_eq!(report.correct_count, 4);
        assert_eq!(report.base_score, 400);
        assert_eq!(report.time_bonus, 300);
        assert_eq!(report.total_score, 700);
        assert_eq!(report.accuracy, 57);
        assert_eq!(report.tier, AccuracyTier::NeedsImprovement);
        assert_eq!(report.tier.category(), MessageCategory::Info);
    }

    #[test]
    fn test_incomplete_placements_score_what_is_there() {
        let mut p = Placements::new();
        let gold = find_stage("gold").unwrap();
        p.insert(gold, gold.correct_position).unwrap();

        let report = score(&CATALOG, &p, Duration::seconds(400));
        assert_eq!(report.correct_count, 1);
        assert_eq!(report.total_score, 100);

        let empty = score(&CATALOG, &Placements::new(), Duration::seconds(400));
        assert_eq!(empty.correct_count, 0);
        assert_eq!(empty.total_score, 0);
    }

    #[test]
    fn test_time_bonus_steps() {
        assert_eq!(time_bonus(Duration::zero()), 300);
        assert_eq!(time_bonus(Duration::milliseconds(50)), 290);
        assert_eq!(time_bonus(Duration::seconds(10)), 290);
        assert_eq!(time_bonus(Duration::milliseconds(10_001)), 280);
        assert_eq!(time_bonus(Duration::seconds(295)), 0);
        assert_eq!(time_bonus(Duration::seconds(-5)), 300);
    }

    #[test]
    fn test_accuracy_tiers() {
        assert_eq!(accuracy_percent(5), 71);
        assert_eq!(AccuracyTier::from_accuracy(accuracy_percent(5)), AccuracyTier::Good);
        assert_eq!(AccuracyTier::from_accuracy(accuracy_percent(6)), AccuracyTier::Good);
        assert_eq!(AccuracyTier::from_accuracy(accuracy_percent(4)), AccuracyTier::NeedsImprovement);
        assert_eq!(AccuracyTier::from_accuracy(100), AccuracyTier::Perfect);
    }

    #[test]
    fn test_messages() {
        let perfect = ScoreReport::new(7, Duration::seconds(45));
        assert_eq!(
            perfect.message(),
            "Perfect! You got all 7 components correct! Final Score: 950 (250 time bonus)"
        );
        let good = ScoreReport::new(5, Duration::seconds(400));
        assert_eq!(good.message(), "Good job! You got 5/7 correct. Final Score: 500 (0 time bonus)");
        let low = ScoreReport::new(2, Duration::seconds(400));
        assert!(low.message().starts_with("Keep learning! You got 2/7 correct."));
    }
}
