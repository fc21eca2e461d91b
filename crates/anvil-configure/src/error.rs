//! Configuration error types.

use std::path::PathBuf;

use anvil_descriptor::{DescriptorError, ValidationIssue};

/// Errors that can occur during module configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigureError {
    /// A required runtime artifact is missing from disk.
    ///
    /// This is the single hard-failure path: configuration aborts rather than
    /// deferring the failure to link or run time.
    #[error("runtime dependency not found: {}", path.display())]
    MissingRuntimeDependency {
        /// The resolved path that does not exist.
        path: PathBuf,
    },

    /// The descriptor failed structural validation.
    #[error("descriptor for module '{module}' is invalid: {}", summarize(issues))]
    InvalidRules {
        /// The module name.
        module: String,
        /// Error-severity validation issues.
        issues: Vec<ValidationIssue>,
    },

    /// Descriptor loading/parsing error.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// I/O error probing the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigureError>;
