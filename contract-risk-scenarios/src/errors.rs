//! Error types for the scenario system.

use thiserror::Error;

/// Errors that can occur while loading scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario text is not valid TOML or does not match the schema.
    #[error("failed to parse scenario {path}: {message}")]
    Parse { path: String, message: String },

    /// The scenario file or directory could not be read.
    #[error("failed to load scenario: {path}: {message}")]
    Load { path: String, message: String },
}

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;
