//! Overall (report card) average across subjects.

use rust_decimal::Decimal;

use super::rounding::{AVERAGE_DECIMAL_PLACES, round_half_up};

/// Computes a student's general average across subjects.
///
/// Subjects without a final average yet (`None`) are skipped. Returns `None`
/// when no subject has an average, which the report card shows as "N/D".
///
/// # Examples
///
/// ```
/// use roster_ranking::calculation::overall_average;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let subjects = [
///     Some(Decimal::from_str("7.8").unwrap()),
///     None,
///     Some(Decimal::from_str("6.5").unwrap()),
/// ];
///
/// assert_eq!(overall_average(&subjects).unwrap().to_string(), "7.2");
/// assert_eq!(overall_average(&[None, None]), None);
/// ```
pub fn overall_average(subject_averages: &[Option<Decimal>]) -> Option<Decimal> {
    let graded: Vec<Decimal> = subject_averages.iter().flatten().copied().collect();
    if graded.is_empty() {
        return None;
    }

    let total: Decimal = graded.iter().sum();
    let mean = total / Decimal::from(graded.len());
    Some(round_half_up(mean, AVERAGE_DECIMAL_PLACES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_no_subjects_is_none() {
        assert_eq!(overall_average(&[]), None);
    }

    #[test]
    fn test_all_ungraded_is_none() {
        assert_eq!(overall_average(&[None, None, None]), None);
    }

    #[test]
    fn test_mean_of_graded_subjects() {
        let subjects = [Some(dec("8.0")), Some(dec("6.0")), Some(dec("7.0"))];
        assert_eq!(overall_average(&subjects).unwrap().to_string(), "7.0");
    }

    #[test]
    fn test_ungraded_subjects_do_not_count_as_zero() {
        let subjects = [Some(dec("9.0")), None];
        assert_eq!(overall_average(&subjects), Some(dec("9.0")));
    }

    #[test]
    fn test_midpoint_rounds_up() {
        // 14.3 / 2 = 7.15
        let subjects = [Some(dec("7.1")), Some(dec("7.2"))];
        assert_eq!(overall_average(&subjects).unwrap().to_string(), "7.2");
    }
}
