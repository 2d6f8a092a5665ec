//! Performance ranking functionality.
//!
//! This module orders a batch of final averages from best to worst, assigns
//! dense 1-based ranks and classifies each student into a pass band.

use crate::config::GradingPolicy;
use crate::models::{FinalAverage, RankedEntry};

/// Ranks a batch of final averages under the default grading policy.
///
/// See [`rank_batch_with_policy`].
///
/// # Examples
///
/// ```
/// use roster_ranking::calculation::rank_batch;
/// use roster_ranking::models::{Band, FinalAverage};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let averages = vec![
///     FinalAverage {
///         student_id: 2,
///         average: Decimal::from_str("6.8").unwrap(),
///         has_final_exam: false,
///     },
///     FinalAverage {
///         student_id: 1,
///         average: Decimal::from_str("7.8").unwrap(),
///         has_final_exam: false,
///     },
/// ];
///
/// let ranked = rank_batch(&averages);
/// assert_eq!(ranked[0].student_id, 1);
/// assert_eq!(ranked[0].rank, 1);
/// assert_eq!(ranked[0].band, Band::Pass);
/// assert_eq!(ranked[1].band, Band::Borderline);
/// ```
pub fn rank_batch(averages: &[FinalAverage]) -> Vec<RankedEntry> {
    rank_batch_with_policy(averages, &GradingPolicy::default())
}

/// Ranks a batch of final averages.
///
/// Entries are ordered by `average` descending. The sort is stable: students
/// with equal averages keep their relative input order. Ranks are positions
/// 1..=N with no gaps and no shared ranks, so tied students still get
/// consecutive distinct ranks. An empty batch yields an empty vector.
///
/// The input is only borrowed; a new vector is returned.
pub fn rank_batch_with_policy(
    averages: &[FinalAverage],
    policy: &GradingPolicy,
) -> Vec<RankedEntry> {
    let mut ordered: Vec<&FinalAverage> = averages.iter().collect();
    ordered.sort_by(|a, b| b.average.cmp(&a.average));

    ordered
        .into_iter()
        .zip(1u32..)
        .map(|(final_average, rank)| RankedEntry {
            student_id: final_average.student_id,
            average: final_average.average,
            has_final_exam: final_average.has_final_exam,
            rank,
            band: policy.classify(final_average.average, final_average.has_final_exam),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Band;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn avg(id: i64, average: &str, has_final_exam: bool) -> FinalAverage {
        FinalAverage {
            student_id: id,
            average: dec(average),
            has_final_exam,
        }
    }

    fn ids(entries: &[RankedEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.student_id).collect()
    }

    /// RK-001: empty batch
    #[test]
    fn test_empty_batch_returns_empty() {
        assert!(rank_batch(&[]).is_empty());
    }

    /// RK-002: descending order
    #[test]
    fn test_sorted_descending_by_average() {
        let averages = vec![
            avg(101, "8.5", false),
            avg(102, "6.2", false),
            avg(103, "9.8", false),
            avg(104, "7.5", false),
        ];

        let ranked = rank_batch(&averages);
        assert_eq!(ids(&ranked), vec![103, 101, 104, 102]);
        assert_eq!(
            ranked.iter().map(|e| e.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    /// RK-003: ties keep input order and get distinct ranks
    #[test]
    fn test_ties_are_stable_with_distinct_ranks() {
        let averages = vec![
            avg(1, "7.0", false),
            avg(2, "8.0", false),
            avg(3, "7.0", false),
            avg(4, "7.0", false),
        ];

        let ranked = rank_batch(&averages);
        assert_eq!(ids(&ranked), vec![2, 1, 3, 4]);
        assert_eq!(
            ranked.iter().map(|e| e.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_equal_values_with_different_scale_are_ties() {
        let averages = vec![avg(1, "7.0", false), avg(2, "7", false), avg(3, "7.00", false)];

        let ranked = rank_batch(&averages);
        assert_eq!(ids(&ranked), vec![1, 2, 3]);
    }

    /// RK-004: bands are attached
    #[test]
    fn test_bands_are_assigned() {
        let averages = vec![
            avg(1, "4.9", true),
            avg(2, "5.0", true),
            avg(3, "6.9", false),
            avg(4, "7.0", false),
        ];

        let ranked = rank_batch(&averages);
        let bands: Vec<(i64, Band)> = ranked.iter().map(|e| (e.student_id, e.band)).collect();
        assert_eq!(
            bands,
            vec![
                (4, Band::Pass),
                (3, Band::Borderline),
                (2, Band::Pass),
                (1, Band::Fail),
            ]
        );
    }

    #[test]
    fn test_custom_policy_thresholds() {
        let policy = GradingPolicy {
            pass_threshold: dec("6.0"),
            borderline_threshold: dec("4.0"),
            final_exam_promotes: false,
        };
        let averages = vec![avg(1, "6.0", false), avg(2, "4.5", true), avg(3, "3.9", false)];

        let ranked = rank_batch_with_policy(&averages, &policy);
        assert_eq!(ranked[0].band, Band::Pass);
        assert_eq!(ranked[1].band, Band::Borderline);
        assert_eq!(ranked[2].band, Band::Fail);
    }

    #[test]
    fn test_input_is_left_untouched() {
        let averages = vec![avg(1, "5.0", false), avg(2, "9.0", false)];
        let before = averages.clone();

        let _ = rank_batch(&averages);
        assert_eq!(averages, before);
    }

    #[test]
    fn test_fields_are_copied_from_final_average() {
        let ranked = rank_batch(&[avg(9, "5.3", true)]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].student_id, 9);
        assert_eq!(ranked[0].average.to_string(), "5.3");
        assert!(ranked[0].has_final_exam);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].band, Band::Pass);
    }

    fn arb_final_average() -> impl Strategy<Value = FinalAverage> {
        (0i64..1000, 0i64..=100, any::<bool>()).prop_map(|(id, tenths, has_final_exam)| {
            FinalAverage {
                student_id: id,
                average: Decimal::new(tenths, 1),
                has_final_exam,
            }
        })
    }

    proptest! {
        #[test]
        fn prop_ranks_are_dense(averages in prop::collection::vec(arb_final_average(), 0..200)) {
            let ranked = rank_batch(&averages);
            prop_assert_eq!(ranked.len(), averages.len());
            for (index, entry) in ranked.iter().enumerate() {
                prop_assert_eq!(entry.rank as usize, index + 1);
            }
        }

        #[test]
        fn prop_order_is_non_increasing(
            averages in prop::collection::vec(arb_final_average(), 0..200)
        ) {
            let ranked = rank_batch(&averages);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].average >= pair[1].average);
            }
        }

        #[test]
        fn prop_ranking_is_idempotent(
            averages in prop::collection::vec(arb_final_average(), 0..200)
        ) {
            prop_assert_eq!(rank_batch(&averages), rank_batch(&averages));
        }

        #[test]
        fn prop_ties_preserve_input_order(tenths in prop::collection::vec(0i64..=100, 0..200)) {
            // student_id doubles as the input position
            let averages: Vec<FinalAverage> = tenths
                .iter()
                .enumerate()
                .map(|(index, t)| FinalAverage {
                    student_id: index as i64,
                    average: Decimal::new(*t, 1),
                    has_final_exam: false,
                })
                .collect();

            let ranked = rank_batch(&averages);
            for pair in ranked.windows(2) {
                if pair[0].average == pair[1].average {
                    prop_assert!(pair[0].student_id < pair[1].student_id);
                }
            }
        }
    }
}
