//! Error types for the Roster Ranking Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while aggregating grades or
//! loading the grading policy.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::ScoreField;

/// The main error type for the Roster Ranking Engine.
///
/// Aggregation errors (`InvalidScore`, `IncompleteData`) are local to a single
/// student: the roster pipeline turns them into failure rows instead of
/// aborting the batch. The configuration variants only surface at startup.
///
/// # Example
///
/// ```
/// use roster_ranking::error::EngineError;
///
/// let error = EngineError::IncompleteData { student_id: 3 };
/// assert_eq!(error.to_string(), "Incomplete data for student 3: no partial scores graded");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A raw score lies outside the allowed range.
    #[error("Invalid score for '{field}': {value} is outside [0.0, 10.0]")]
    InvalidScore {
        /// The score field holding the offending value.
        field: ScoreField,
        /// The offending value.
        value: Decimal,
    },

    /// Neither partial score has been graded.
    #[error("Incomplete data for student {student_id}: no partial scores graded")]
    IncompleteData {
        /// The student whose record has nothing to aggregate.
        student_id: i64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The grading policy is internally inconsistent.
    #[error("Invalid grading policy: {message}")]
    InvalidPolicy {
        /// A description of the inconsistency.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Why one student's scores could not be aggregated.
///
/// This is the subset of [`EngineError`] that grade aggregation can produce.
/// It converts into `EngineError` with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// A raw score lies outside the allowed range.
    #[error("Invalid score for '{field}': {value} is outside [0.0, 10.0]")]
    InvalidScore {
        /// The score field holding the offending value.
        field: ScoreField,
        /// The offending value.
        value: Decimal,
    },

    /// Neither partial score has been graded.
    #[error("Incomplete data for student {student_id}: no partial scores graded")]
    IncompleteData {
        /// The student whose record has nothing to aggregate.
        student_id: i64,
    },
}

impl From<AggregationError> for EngineError {
    fn from(error: AggregationError) -> Self {
        match error {
            AggregationError::InvalidScore { field, value } => {
                EngineError::InvalidScore { field, value }
            }
            AggregationError::IncompleteData { student_id } => {
                EngineError::IncompleteData { student_id }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_invalid_score_displays_field_and_value() {
        let error = EngineError::InvalidScore {
            field: ScoreField::Partial2,
            value: Decimal::from_str("10.5").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid score for 'partial2': 10.5 is outside [0.0, 10.0]"
        );
    }

    #[test]
    fn test_incomplete_data_displays_student_id() {
        let error = EngineError::IncompleteData { student_id: 42 };
        assert_eq!(
            error.to_string(),
            "Incomplete data for student 42: no partial scores graded"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/grading.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/grading.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_policy_displays_message() {
        let error = EngineError::InvalidPolicy {
            message: "pass_threshold below borderline_threshold".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid grading policy: pass_threshold below borderline_threshold"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
        assert_error::<AggregationError>();
    }

    #[test]
    fn test_aggregation_error_converts_with_same_message() {
        let error = AggregationError::InvalidScore {
            field: ScoreField::FinalExam,
            value: Decimal::from_str("-1").unwrap(),
        };
        let message = error.to_string();

        let converted = EngineError::from(error);
        assert_eq!(converted.to_string(), message);
        assert_eq!(
            EngineError::from(AggregationError::IncompleteData { student_id: 8 }),
            EngineError::IncompleteData { student_id: 8 }
        );
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_incomplete() -> EngineResult<()> {
            Err(EngineError::IncompleteData { student_id: 1 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_incomplete()?;
            Ok(())
        }

        assert_eq!(
            propagates_error(),
            Err(EngineError::IncompleteData { student_id: 1 })
        );
    }
}
