//! Decimal rounding helpers.
//!
//! Grades are rounded with round-half-up on base-10 decimals, never on binary
//! floats, so a value such as 7.15 always becomes 7.2.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits in a final average.
pub const AVERAGE_DECIMAL_PLACES: u32 = 1;

/// Number of fractional digits in a class average.
pub const SUMMARY_DECIMAL_PLACES: u32 = 2;

/// Rounds `value` half-up to exactly `decimal_places` fractional digits.
///
/// Midpoints round away from zero (0.05 → 0.1, 0.15 → 0.2). The result always
/// carries `decimal_places` digits, so `7` rounds to `7.0` at one place.
///
/// # Examples
///
/// ```
/// use roster_ranking::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_half_up(Decimal::from_str("7.25").unwrap(), 1);
/// assert_eq!(rounded.to_string(), "7.3");
///
/// let whole = round_half_up(Decimal::from(7), 1);
/// assert_eq!(whole.to_string(), "7.0");
/// ```
pub fn round_half_up(value: Decimal, decimal_places: u32) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    // round_dp never widens the scale; pad so the digit count is fixed
    rounded.rescale(decimal_places);
    rounded
}
