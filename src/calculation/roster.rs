//! Roster ranking pipeline.
//!
//! This module runs grade aggregation over every student of a batch, keeps
//! the students that fail aggregation aside, ranks the rest and assembles
//! the [`RankingResult`].

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::GradingPolicy;
use crate::models::{
    AggregationFailure, AuditStep, AuditTrace, AuditWarning, FinalAverage, RankingResult,
    RawScore, RosterRecord, ScoreField, StudentScore,
};

use super::class_summary::summarize_class;
use super::grade_average::{aggregate_student, validate_score};
use super::ranking::rank_batch_with_policy;

/// Version string stamped on every ranking result.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Aggregates and ranks one class+subject roster.
///
/// A student whose scores cannot be aggregated is reported in
/// `failures` (in input order) and takes no rank slot; the remaining students
/// are ranked as if the dropped ones were never in the batch. An empty roster
/// produces an empty ranking, not an error.
///
/// # Examples
///
/// ```
/// use roster_ranking::calculation::rank_roster;
/// use roster_ranking::config::GradingPolicy;
/// use roster_ranking::models::{Band, FailureReason, StudentScore};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let d = |s: &str| Some(Decimal::from_str(s).unwrap());
/// let roster = vec![
///     StudentScore::with_partials(1, d("8.0"), d("7.5")),
///     StudentScore::with_partials(2, d("6.5"), d("7.0")),
///     StudentScore::with_partials(3, None, None),
/// ];
///
/// let result = rank_roster(&roster, &GradingPolicy::default());
/// assert_eq!(result.entries.len(), 2);
/// assert_eq!(result.entries[0].average.to_string(), "7.8");
/// assert_eq!(result.entries[1].band, Band::Borderline);
/// assert_eq!(result.failures[0].student_id, Some(3));
/// assert_eq!(result.failures[0].reason, FailureReason::IncompleteData);
/// ```
pub fn rank_roster(scores: &[StudentScore], policy: &GradingPolicy) -> RankingResult {
    let parsed = scores
        .iter()
        .map(|score| Ok::<_, AggregationFailure>(score.clone()));
    rank_records_with(parsed, scores.len(), policy)
}

/// Reads, aggregates and ranks a roster of raw upstream records.
///
/// Same as [`rank_roster`], except that a record which cannot be read (no
/// usable student id, or a score that is not a number) becomes a failure row
/// of its own instead of rejecting the roster.
///
/// # Examples
///
/// ```
/// use roster_ranking::calculation::rank_records;
/// use roster_ranking::config::GradingPolicy;
/// use roster_ranking::models::{FailureReason, RosterRecord};
///
/// let roster: Vec<RosterRecord> = serde_json::from_str(r#"[
///     {"aluno_id": 1, "nota_np1": 8.0, "nota_np2": 7.5},
///     {"aluno_id": 2, "nota_np1": "abc", "nota_np2": 7.0},
///     {"aluno_id": 3, "nota_np1": 6.5, "nota_np2": 7.0}
/// ]"#).unwrap();
///
/// let result = rank_records(&roster, &GradingPolicy::default());
/// assert_eq!(result.entries.len(), 2);
/// assert_eq!(result.failures[0].student_id, Some(2));
/// assert!(matches!(result.failures[0].reason, FailureReason::InvalidScore { .. }));
/// ```
pub fn rank_records(records: &[RosterRecord], policy: &GradingPolicy) -> RankingResult {
    let parsed = records
        .iter()
        .enumerate()
        .map(|(position, record)| read_record(position, record));
    rank_records_with(parsed, records.len(), policy)
}

/// Reads a raw roster record into a [`StudentScore`].
///
/// Scores are read in field order (partial1, partial2, final exam) and the
/// first one that is not a number or lies outside [0.0, 10.0] is reported.
/// `position` is the record's zero-based index, used to name records that
/// have no usable student id.
pub fn read_record(
    position: usize,
    record: &RosterRecord,
) -> Result<StudentScore, AggregationFailure> {
    let student_id = record
        .student_id()
        .ok_or_else(|| AggregationFailure::unidentified(position))?;

    let read = |field: ScoreField| -> Result<Option<Decimal>, AggregationFailure> {
        match record.score(field) {
            RawScore::Missing => Ok(None),
            RawScore::Number(value) => validate_score(field, value)
                .map(Some)
                .map_err(|err| AggregationFailure::from_error(student_id, &err)),
            RawScore::Unreadable(raw) => Err(AggregationFailure::unreadable_score(
                student_id, field, raw,
            )),
        }
    };

    Ok(StudentScore {
        student_id,
        score_partial1: read(ScoreField::Partial1)?,
        score_partial2: read(ScoreField::Partial2)?,
        score_final_exam: read(ScoreField::FinalExam)?,
    })
}

fn rank_records_with<I>(records: I, roster_size: usize, policy: &GradingPolicy) -> RankingResult
where
    I: IntoIterator<Item = Result<StudentScore, AggregationFailure>>,
{
    let start_time = Instant::now();
    let mut averages: Vec<FinalAverage> = Vec::with_capacity(roster_size);
    let mut failures: Vec<AggregationFailure> = Vec::new();
    let mut audit_steps: Vec<AuditStep> = Vec::with_capacity(roster_size + 1);
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    for record in records {
        let aggregated = record.and_then(|score| {
            aggregate_student(&score, step_number)
                .map_err(|err| AggregationFailure::from_error(score.student_id, &err))
        });

        match aggregated {
            Ok(result) => {
                averages.push(result.final_average);
                audit_steps.push(result.audit_step);
                step_number += 1;
            }
            Err(failure) => {
                debug!(
                    student_id = ?failure.student_id,
                    reason = failure.warning_code(),
                    "Student dropped from ranking"
                );
                warnings.push(failure_warning(&failure));
                failures.push(failure);
            }
        }
    }

    if !failures.is_empty() {
        warn!(
            dropped = failures.len(),
            roster_size,
            "Some students could not be aggregated"
        );
    }

    let entries = rank_batch_with_policy(&averages, policy);
    let summary = summarize_class(&entries, failures.len());

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "performance_ranking".to_string(),
        rule_name: "Performance Ranking".to_string(),
        input: serde_json::json!({
            "roster_size": roster_size,
            "aggregated": averages.len(),
            "pass_threshold": policy.pass_threshold.to_string(),
            "borderline_threshold": policy.borderline_threshold.to_string(),
            "final_exam_promotes": policy.final_exam_promotes,
        }),
        output: serde_json::json!({
            "ranked": entries.len(),
            "dropped": failures.len(),
            "pass_count": summary.pass_count,
            "borderline_count": summary.borderline_count,
            "fail_count": summary.fail_count,
            "class_average": summary.class_average.map(|a| a.to_string()),
        }),
        reasoning: format!(
            "Ranked {} of {} students by average descending; ties keep roster order",
            entries.len(),
            roster_size
        ),
    });

    RankingResult {
        ranking_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        entries,
        failures,
        summary,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

fn failure_warning(failure: &AggregationFailure) -> AuditWarning {
    let subject = match failure.student_id {
        Some(student_id) => format!("Student {}", student_id),
        None => "Unidentified record".to_string(),
    };

    AuditWarning {
        code: failure.warning_code().to_string(),
        message: format!("{} not ranked: {}", subject, failure.message),
        severity: "medium".to_string(),
    }
}
