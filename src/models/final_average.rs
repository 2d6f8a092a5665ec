//! Final average model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A student's final average for one subject.
///
/// Produced by grade aggregation. The `average` is always rounded to exactly
/// one decimal place using round-half-up.
///
/// # Example
///
/// ```
/// use roster_ranking::models::FinalAverage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let average = FinalAverage {
///     student_id: 1,
///     average: Decimal::from_str("7.8").unwrap(),
///     has_final_exam: false,
/// };
/// assert_eq!(average.average.to_string(), "7.8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalAverage {
    /// Identifier of the student, carried through from the score record.
    pub student_id: i64,
    /// The rounded final average.
    pub average: Decimal,
    /// Whether a final exam score was used in the computation.
    pub has_final_exam: bool,
}
