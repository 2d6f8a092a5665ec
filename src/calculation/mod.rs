//! Calculation logic for the Roster Ranking Engine.
//!
//! This module contains the grade calculations: half-up decimal rounding,
//! final average aggregation, pass band classification, performance ranking,
//! the roster pipeline tying them together, class summaries, weighted
//! averages and the report card overall average.

mod band;
mod class_summary;
mod grade_average;
mod overall_average;
mod ranking;
mod roster;
mod rounding;
mod weighted_average;

pub use band::{BORDERLINE_THRESHOLD, PASS_THRESHOLD, classify_band};
pub use class_summary::summarize_class;
pub use grade_average::{
    AggregationResult, SCORE_MAX, SCORE_MIN, aggregate_student, compute_average, validate_score,
};
pub use overall_average::overall_average;
pub use ranking::{rank_batch, rank_batch_with_policy};
pub use roster::{ENGINE_VERSION, rank_records, rank_roster, read_record};
pub use rounding::{AVERAGE_DECIMAL_PLACES, SUMMARY_DECIMAL_PLACES, round_half_up};
pub use weighted_average::{WeightedScore, weighted_average};
