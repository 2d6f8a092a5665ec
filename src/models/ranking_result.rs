//! Ranking result models for the Roster Ranking Engine.
//!
//! This module contains the [`RankingResult`] type and its associated structures
//! that capture all outputs from ranking a roster, including ranked entries,
//! aggregation failures, the class summary, and the audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{RankedEntry, ScoreField};
use crate::error::AggregationError;

/// Why a student could not be aggregated.
///
/// # Example
///
/// ```
/// use roster_ranking::models::FailureReason;
///
/// let json = serde_json::to_value(FailureReason::IncompleteData).unwrap();
/// assert_eq!(json["kind"], "incomplete_data");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// A score lay outside the allowed range or was not a number.
    InvalidScore {
        /// The offending field.
        field: ScoreField,
        /// The offending value as received.
        value: String,
    },
    /// No partial score had been graded, or the record had no usable
    /// student id.
    IncompleteData,
}

/// A student dropped from the ranking because aggregation failed.
///
/// Failed students are rendered as "not available" rows and never occupy a
/// rank slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationFailure {
    /// Identifier of the dropped student, `None` when the record carried no
    /// usable id.
    pub student_id: Option<i64>,
    /// The machine-readable failure reason.
    pub reason: FailureReason,
    /// Human-readable description of the failure.
    pub message: String,
}

impl AggregationFailure {
    /// Builds a failure row for `student_id` from an aggregation error.
    pub fn from_error(student_id: i64, error: &AggregationError) -> Self {
        let reason = match error {
            AggregationError::InvalidScore { field, value } => FailureReason::InvalidScore {
                field: *field,
                value: value.to_string(),
            },
            AggregationError::IncompleteData { .. } => FailureReason::IncompleteData,
        };

        Self {
            student_id: Some(student_id),
            reason,
            message: error.to_string(),
        }
    }

    /// Builds a failure row for a score that could not be read as a number.
    pub fn unreadable_score(student_id: i64, field: ScoreField, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let message = format!("Invalid score for '{}': {:?} is not a number", field, raw);

        Self {
            student_id: Some(student_id),
            reason: FailureReason::InvalidScore { field, value: raw },
            message,
        }
    }

    /// Builds a failure row for the roster record at `position` (zero-based)
    /// when it has no usable student id.
    pub fn unidentified(position: usize) -> Self {
        Self {
            student_id: None,
            reason: FailureReason::IncompleteData,
            message: format!(
                "Incomplete data for roster record {}: no usable student id",
                position
            ),
        }
    }

    /// Returns the audit warning code for this failure.
    pub fn warning_code(&self) -> &'static str {
        match self.reason {
            FailureReason::InvalidScore { .. } => "INVALID_SCORE",
            FailureReason::IncompleteData => "INCOMPLETE_DATA",
        }
    }
}

/// Aggregated statistics for a ranked roster.
///
/// # Example
///
/// ```
/// use roster_ranking::models::ClassSummary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let summary = ClassSummary {
///     student_count: 2,
///     failure_count: 1,
///     class_average: Some(Decimal::from_str("7.30").unwrap()),
///     pass_count: 1,
///     borderline_count: 1,
///     fail_count: 0,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Number of ranked students.
    pub student_count: usize,
    /// Number of students dropped because aggregation failed.
    pub failure_count: usize,
    /// Mean of the ranked averages to two decimals, `None` if nobody was ranked.
    pub class_average: Option<Decimal>,
    /// Number of ranked students in the PASS band.
    pub pass_count: usize,
    /// Number of ranked students in the BORDERLINE band.
    pub borderline_count: usize,
    /// Number of ranked students in the FAIL band.
    pub fail_count: usize,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while ranking.
///
/// Warnings flag students that were left out of the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a ranking.
///
/// # Example
///
/// ```
/// use roster_ranking::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during ranking.
    pub warnings: Vec<AuditWarning>,
    /// The total ranking duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of ranking one class+subject roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingResult {
    /// Unique identifier for this ranking.
    pub ranking_id: Uuid,
    /// When the ranking was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the ranking.
    pub engine_version: String,
    /// Ranked students, best average first.
    pub entries: Vec<RankedEntry>,
    /// Students that could not be aggregated, in input order.
    pub failures: Vec<AggregationFailure>,
    /// Aggregated statistics over the ranked students.
    pub summary: ClassSummary,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
