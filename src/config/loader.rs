//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the grading
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{GradingConfig, GradingMetadata, GradingPolicy};

/// Name of the grading configuration file inside a configuration directory.
pub const GRADING_FILE: &str = "grading.yaml";

/// Loads and provides access to the grading configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── grading.yaml   # Metadata and grading policy
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_ranking::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Pass threshold: {}", loader.policy().pass_threshold);
/// # Ok::<(), roster_ranking::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: GradingMetadata,
    policy: GradingPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `grading.yaml` is missing
    /// - the file contains invalid YAML or is missing a required field
    /// - the policy thresholds are inconsistent
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let grading_path = path.as_ref().join(GRADING_FILE);
        let config = Self::load_yaml::<GradingConfig>(&grading_path)?;
        config.policy.validate()?;

        debug!(
            path = %grading_path.display(),
            institution = %config.metadata.institution,
            version = %config.metadata.version,
            "Loaded grading configuration"
        );

        Ok(Self {
            metadata: config.metadata,
            policy: config.policy,
        })
    }

    /// Builds a loader around an in-memory policy, validating it first.
    pub fn from_policy(metadata: GradingMetadata, policy: GradingPolicy) -> EngineResult<Self> {
        policy.validate()?;
        Ok(Self { metadata, policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &GradingMetadata {
        &self.metadata
    }

    /// Returns the grading policy.
    pub fn policy(&self) -> &GradingPolicy {
        &self.policy
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            metadata: GradingMetadata {
                institution: "default".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            policy: GradingPolicy::default(),
        }
    }
}
