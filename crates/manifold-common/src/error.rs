//! Unified error types for the Manifold workspace.
//!
//! A render pass surfaces exactly one of these. Disabled or absent features
//! are not errors and never produce one.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ManifoldError {
    /// Reading a configuration document failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration document is malformed.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Underlying YAML error.
        #[from]
        source: serde_yaml::Error,
    },

    /// A top-level configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A component could not produce valid objects.
    #[error("failed to render {component}: {message}")]
    Render {
        /// Name of the component that failed.
        component: &'static str,
        /// Description of the failure.
        message: String,
    },

    /// A body field would shadow one of the object's identity fields.
    #[error("field \"{key}\" is reserved and cannot be set in an object body")]
    ReservedField {
        /// The rejected key.
        key: String,
    },

    /// A generated payload could not be serialized.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

impl ManifoldError {
    /// Builds a [`ManifoldError::Render`] for the given component.
    pub fn render(component: &'static str, message: impl Into<String>) -> Self {
        Self::Render {
            component,
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ManifoldError>;
