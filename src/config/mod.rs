//! Configuration loading and management for the Roster Ranking Engine.
//!
//! This module loads the grading policy (band thresholds and final exam
//! promotion) from YAML. The raw score range is fixed at [0.0, 10.0].
//!
//! # Example
//!
//! ```no_run
//! use roster_ranking::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy for: {}", config.metadata().institution);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, GRADING_FILE};
pub use types::{GradingConfig, GradingMetadata, GradingPolicy};
