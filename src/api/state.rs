//! Application state for the Roster Ranking Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, GradingPolicy};

/// Shared application state.
///
/// Holds the grading configuration loaded at startup. It is never mutated,
/// so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded grading configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the grading policy used for ranking.
    pub fn policy(&self) -> &GradingPolicy {
        self.config.policy()
    }
}
