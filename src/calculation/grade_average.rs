//! Final average calculation functionality.
//!
//! This module turns a student's raw scores into a [`FinalAverage`]:
//! the mean of the graded partials, averaged with the final exam when one was
//! taken, rounded half-up to one decimal place.

use rust_decimal::Decimal;

use crate::error::{AggregationError, EngineResult};
use crate::models::{AuditStep, FinalAverage, ScoreField, StudentScore};

use super::rounding::{AVERAGE_DECIMAL_PLACES, round_half_up};

/// Lowest valid raw score.
pub const SCORE_MIN: Decimal = Decimal::ZERO;

/// Highest valid raw score.
pub const SCORE_MAX: Decimal = Decimal::TEN;

/// The result of aggregating one student, including the audit step.
#[derive(Debug, Clone)]
pub struct AggregationResult {
    /// The computed final average.
    pub final_average: FinalAverage,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Checks that a raw score lies in [0.0, 10.0].
///
/// Out-of-range values are rejected, never clamped.
pub fn validate_score(field: ScoreField, value: Decimal) -> Result<Decimal, AggregationError> {
    if value < SCORE_MIN || value > SCORE_MAX {
        return Err(AggregationError::InvalidScore { field, value });
    }
    Ok(value)
}

/// Computes a student's final average.
///
/// # Formula
///
/// - Both partials graded: `(partial1 + partial2) / 2`
/// - One partial graded: that partial alone (the other does not count as zero)
/// - Final exam present: `(base + final_exam) / 2`
///
/// Only the final value is rounded, half-up to one decimal place.
///
/// # Errors
///
/// - `EngineError::InvalidScore` for the first present score outside
///   [0.0, 10.0], checked in the order partial1, partial2, final exam
/// - `EngineError::IncompleteData` when neither partial is graded
///
/// # Examples
///
/// ```
/// use roster_ranking::calculation::compute_average;
/// use roster_ranking::models::StudentScore;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let score = StudentScore {
///     student_id: 4,
///     score_partial1: Some(Decimal::from_str("4.0").unwrap()),
///     score_partial2: Some(Decimal::from_str("5.0").unwrap()),
///     score_final_exam: Some(Decimal::from_str("6.0").unwrap()),
/// };
///
/// let average = compute_average(&score).unwrap();
/// assert_eq!(average.average.to_string(), "5.3");
/// assert!(average.has_final_exam);
/// ```
pub fn compute_average(score: &StudentScore) -> EngineResult<FinalAverage> {
    let result = aggregate_student(score, 1)?;
    Ok(result.final_average)
}

/// Computes a student's final average and records an audit step for it.
///
/// Same semantics as [`compute_average`], with the errors narrowed to
/// [`AggregationError`].
pub fn aggregate_student(
    score: &StudentScore,
    step_number: u32,
) -> Result<AggregationResult, AggregationError> {
    for (field, value) in score.present_scores() {
        validate_score(field, value)?;
    }

    let (base_average, base_reasoning) = match (score.score_partial1, score.score_partial2) {
        (Some(p1), Some(p2)) => {
            let base = (p1 + p2) / Decimal::TWO;
            (
                base,
                format!("({} + {}) / 2 = {}", p1, p2, base.normalize()),
            )
        }
        (Some(p1), None) => (p1, format!("only partial1 graded = {}", p1)),
        (None, Some(p2)) => (p2, format!("only partial2 graded = {}", p2)),
        (None, None) => {
            return Err(AggregationError::IncompleteData {
                student_id: score.student_id,
            });
        }
    };

    let (raw_average, reasoning) = match score.score_final_exam {
        Some(exam) => {
            let raw = (base_average + exam) / Decimal::TWO;
            (
                raw,
                format!(
                    "{}; with final exam ({} + {}) / 2 = {}",
                    base_reasoning,
                    base_average.normalize(),
                    exam,
                    raw.normalize()
                ),
            )
        }
        None => (base_average, base_reasoning),
    };

    let average = round_half_up(raw_average, AVERAGE_DECIMAL_PLACES);
    let has_final_exam = score.score_final_exam.is_some();

    let audit_step = AuditStep {
        step_number,
        rule_id: "final_average".to_string(),
        rule_name: "Final Average".to_string(),
        input: serde_json::json!({
            "student_id": score.student_id,
            "partial1": score.score_partial1.map(|v| v.to_string()),
            "partial2": score.score_partial2.map(|v| v.to_string()),
            "final_exam": score.score_final_exam.map(|v| v.to_string()),
        }),
        output: serde_json::json!({
            "base_average": base_average.normalize().to_string(),
            "raw_average": raw_average.normalize().to_string(),
            "average": average.to_string(),
            "has_final_exam": has_final_exam,
        }),
        reasoning: format!("{}; rounded half-up to {}", reasoning, average),
    };

    Ok(AggregationResult {
        final_average: FinalAverage {
            student_id: score.student_id,
            average,
            has_final_exam,
        },
        audit_step,
    })
}
