//! Class summary calculation.
//!
//! Computes the class average and band counts shown above a ranked roster.

use rust_decimal::Decimal;

use crate::models::{Band, ClassSummary, RankedEntry};

use super::rounding::{SUMMARY_DECIMAL_PLACES, round_half_up};

/// Summarizes a ranked roster.
///
/// The class average is the mean of the ranked averages, rounded half-up to
/// two decimal places, or `None` when nobody was ranked. Band counts use the
/// bands already assigned to the entries, so final-exam promotions count as
/// passes.
///
/// # Examples
///
/// ```
/// use roster_ranking::calculation::{rank_batch, summarize_class};
/// use roster_ranking::models::FinalAverage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ranked = rank_batch(&[
///     FinalAverage {
///         student_id: 1,
///         average: Decimal::from_str("7.8").unwrap(),
///         has_final_exam: false,
///     },
///     FinalAverage {
///         student_id: 2,
///         average: Decimal::from_str("6.8").unwrap(),
///         has_final_exam: false,
///     },
/// ]);
///
/// let summary = summarize_class(&ranked, 1);
/// assert_eq!(summary.class_average.unwrap().to_string(), "7.30");
/// assert_eq!(summary.pass_count, 1);
/// assert_eq!(summary.borderline_count, 1);
/// assert_eq!(summary.failure_count, 1);
/// ```
pub fn summarize_class(entries: &[RankedEntry], failure_count: usize) -> ClassSummary {
    let class_average = if entries.is_empty() {
        None
    } else {
        let total: Decimal = entries.iter().map(|e| e.average).sum();
        let mean = total / Decimal::from(entries.len());
        Some(round_half_up(mean, SUMMARY_DECIMAL_PLACES))
    };

    let count_band = |band: Band| entries.iter().filter(|e| e.band == band).count();

    ClassSummary {
        student_count: entries.len(),
        failure_count,
        class_average,
        pass_count: count_band(Band::Pass),
        borderline_count: count_band(Band::Borderline),
        fail_count: count_band(Band::Fail),
    }
}
