//! Weighted average calculation.
//!
//! Used where assessments carry different weights (e.g. partials weighted 2
//! and 3, exam weighted 5) instead of the fixed final-average formula.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A score paired with its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedScore {
    /// The raw score.
    pub score: Decimal,
    /// The weight of the score.
    pub weight: Decimal,
}

/// Computes `Σ(score × weight) / Σweight` in decimal arithmetic.
///
/// The result is not rounded. An empty list, or weights summing to zero,
/// yields zero. Returns `None` when the sums overflow `Decimal`.
///
/// # Examples
///
/// ```
/// use roster_ranking::calculation::{WeightedScore, weighted_average};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let d = |s: &str| Decimal::from_str(s).unwrap();
/// let scores = [
///     WeightedScore { score: d("7.5"), weight: d("2") },
///     WeightedScore { score: d("9.0"), weight: d("3") },
///     WeightedScore { score: d("6.0"), weight: d("5") },
/// ];
///
/// assert_eq!(weighted_average(&scores), Some(d("7.2")));
/// ```
pub fn weighted_average(scores: &[WeightedScore]) -> Option<Decimal> {
    let total_weight = scores
        .iter()
        .try_fold(Decimal::ZERO, |total, s| total.checked_add(s.weight))?;
    if total_weight.is_zero() {
        return Some(Decimal::ZERO);
    }

    let weighted_sum = scores.iter().try_fold(Decimal::ZERO, |total, s| {
        total.checked_add(s.score.checked_mul(s.weight)?)
    })?;
    weighted_sum.checked_div(total_weight)
}
