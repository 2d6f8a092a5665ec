//! Roster Ranking Engine
//!
//! This crate computes students' final averages from partial and final exam
//! scores using decimal round-half-up arithmetic, ranks class rosters by
//! those averages, and classifies each student into a pass band.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
