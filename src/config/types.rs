//! Configuration types for roster ranking.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the `grading.yaml` configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{BORDERLINE_THRESHOLD, PASS_THRESHOLD, SCORE_MAX, SCORE_MIN};
use crate::error::{EngineError, EngineResult};
use crate::models::Band;

/// Metadata about the grading configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GradingMetadata {
    /// The institution the policy belongs to.
    pub institution: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// Thresholds used to classify students into pass bands.
///
/// The default policy passes at 7.0, treats 5.0 up to 7.0 as borderline, and
/// promotes borderline students who sat the final exam.
///
/// # Example
///
/// ```
/// use roster_ranking::config::GradingPolicy;
/// use roster_ranking::models::Band;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = GradingPolicy::default();
/// let average = Decimal::from_str("6.5").unwrap();
/// assert_eq!(policy.classify(average, false), Band::Borderline);
/// assert_eq!(policy.classify(average, true), Band::Pass);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GradingPolicy {
    /// Averages at or above this value pass outright.
    pub pass_threshold: Decimal,
    /// Averages below this value fail, final exam or not.
    pub borderline_threshold: Decimal,
    /// Whether a final exam promotes a borderline average to a pass.
    #[serde(default = "default_final_exam_promotes")]
    pub final_exam_promotes: bool,
}

fn default_final_exam_promotes() -> bool {
    true
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self {
            pass_threshold: PASS_THRESHOLD,
            borderline_threshold: BORDERLINE_THRESHOLD,
            final_exam_promotes: default_final_exam_promotes(),
        }
    }
}

impl GradingPolicy {
    /// Checks that both thresholds lie on the score scale and are ordered.
    pub fn validate(&self) -> EngineResult<()> {
        if self.borderline_threshold > self.pass_threshold {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "borderline_threshold {} must not exceed pass_threshold {}",
                    self.borderline_threshold, self.pass_threshold
                ),
            });
        }

        let in_range = |v: Decimal| (SCORE_MIN..=SCORE_MAX).contains(&v);
        if !in_range(self.pass_threshold) || !in_range(self.borderline_threshold) {
            return Err(EngineError::InvalidPolicy {
                message: "thresholds must lie within the score range".to_string(),
            });
        }

        Ok(())
    }

    /// Assigns the pass band for a rounded average.
    pub fn classify(&self, average: Decimal, has_final_exam: bool) -> Band {
        if average < self.borderline_threshold {
            Band::Fail
        } else if average >= self.pass_threshold || (has_final_exam && self.final_exam_promotes) {
            Band::Pass
        } else {
            Band::Borderline
        }
    }
}

/// Grading configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct GradingConfig {
    /// Policy metadata.
    pub metadata: GradingMetadata,
    /// The grading policy itself.
    pub policy: GradingPolicy,
}
