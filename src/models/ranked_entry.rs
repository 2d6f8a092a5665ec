//! Ranked entry and pass band models.
//!
//! This module defines the [`RankedEntry`] produced by the performance ranker
//! and the [`Band`] classification attached to each entry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The pass band a student falls into after ranking.
///
/// # Example
///
/// ```
/// use roster_ranking::models::Band;
///
/// let json = serde_json::to_string(&Band::Borderline).unwrap();
/// assert_eq!(json, "\"BORDERLINE\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Band {
    /// Average at or above the pass threshold, or promoted by a final exam.
    Pass,
    /// Average between the borderline and pass thresholds, no final exam.
    Borderline,
    /// Average below the borderline threshold.
    Fail,
}

/// One student's position in a ranked roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Identifier of the student.
    pub student_id: i64,
    /// The rounded final average, copied from aggregation.
    pub average: Decimal,
    /// Whether a final exam was used for this average.
    pub has_final_exam: bool,
    /// 1-based position after sorting by average descending.
    pub rank: u32,
    /// The pass band assigned to this student.
    pub band: Band,
}
