//! Core data models for the Roster Ranking Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod final_average;
mod ranked_entry;
mod ranking_result;
mod roster_record;
mod student_score;

pub use final_average::FinalAverage;
pub use ranked_entry::{Band, RankedEntry};
pub use ranking_result::{
    AggregationFailure, AuditStep, AuditTrace, AuditWarning, ClassSummary, FailureReason,
    RankingResult,
};
pub use roster_record::{RawScore, RosterRecord};
pub use student_score::{ScoreField, StudentScore};
