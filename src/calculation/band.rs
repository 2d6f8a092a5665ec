//! Pass band classification.
//!
//! This module classifies a rounded final average into PASS, BORDERLINE or
//! FAIL under the standard thresholds.

use rust_decimal::Decimal;

use crate::config::GradingPolicy;
use crate::models::Band;

/// Averages at or above 7.0 pass outright.
pub const PASS_THRESHOLD: Decimal = Decimal::from_parts(70, 0, 0, false, 1);

/// Averages below 5.0 fail, final exam or not.
pub const BORDERLINE_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 1);

/// Classifies an average under the default grading policy.
///
/// - `PASS` when `average >= 7.0`
/// - `BORDERLINE` when `5.0 <= average < 7.0`
/// - `FAIL` when `average < 5.0`
///
/// A final exam promotes a borderline average to `PASS`; it never rescues an
/// average below 5.0.
///
/// # Examples
///
/// ```
/// use roster_ranking::calculation::classify_band;
/// use roster_ranking::models::Band;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let five = Decimal::from_str("5.0").unwrap();
/// assert_eq!(classify_band(five, false), Band::Borderline);
/// assert_eq!(classify_band(five, true), Band::Pass);
/// ```
pub fn classify_band(average: Decimal, has_final_exam: bool) -> Band {
    GradingPolicy::default().classify(average, has_final_exam)
}
