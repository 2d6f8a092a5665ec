//! Student score model and related types.
//!
//! This module defines the [`StudentScore`] struct, the raw per-student input
//! to grade aggregation, and the [`ScoreField`] enum naming its score fields.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies one of the score fields of a [`StudentScore`].
///
/// # Example
///
/// ```
/// use roster_ranking::models::ScoreField;
///
/// assert_eq!(ScoreField::FinalExam.to_string(), "final_exam");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreField {
    /// The first partial assessment.
    Partial1,
    /// The second partial assessment.
    Partial2,
    /// The make-up / final exam.
    FinalExam,
}

impl ScoreField {
    /// Returns the snake_case name used in error messages and audit output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreField::Partial1 => "partial1",
            ScoreField::Partial2 => "partial2",
            ScoreField::FinalExam => "final_exam",
        }
    }
}

impl fmt::Display for ScoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One student's raw scores for a class/subject pairing.
///
/// Every score is optional: `None` means the assessment has not been graded
/// yet, which is different from a graded zero. Field aliases accept the
/// record shape returned by the upstream grades API (`aluno_id`, `nota_np1`,
/// `nota_np2`, `nota_exame`).
///
/// # Example
///
/// ```
/// use roster_ranking::models::StudentScore;
///
/// let json = r#"{"aluno_id": 7, "nota_np1": "8.0", "nota_np2": null}"#;
/// let score: StudentScore = serde_json::from_str(json).unwrap();
/// assert_eq!(score.student_id, 7);
/// assert!(score.score_partial2.is_none());
/// assert!(score.score_final_exam.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentScore {
    /// Identifier of the student, unique within the roster.
    #[serde(alias = "aluno_id")]
    pub student_id: i64,
    /// First partial score.
    #[serde(default, alias = "nota_np1")]
    pub score_partial1: Option<Decimal>,
    /// Second partial score.
    #[serde(default, alias = "nota_np2")]
    pub score_partial2: Option<Decimal>,
    /// Final exam score, present only if the student sat the exam.
    #[serde(default, alias = "nota_exame")]
    pub score_final_exam: Option<Decimal>,
}

impl StudentScore {
    /// Creates a score record with only the two partials set.
    pub fn with_partials(
        student_id: i64,
        partial1: Option<Decimal>,
        partial2: Option<Decimal>,
    ) -> Self {
        Self {
            student_id,
            score_partial1: partial1,
            score_partial2: partial2,
            score_final_exam: None,
        }
    }

    /// Returns the present scores paired with their field, in field order.
    pub fn present_scores(&self) -> impl Iterator<Item = (ScoreField, Decimal)> + '_ {
        [
            (ScoreField::Partial1, self.score_partial1),
            (ScoreField::Partial2, self.score_partial2),
            (ScoreField::FinalExam, self.score_final_exam),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}
