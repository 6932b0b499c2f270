//! Application layer errors.
//!
//! These represent failures while getting a scaffold onto disk, not
//! configuration problems — those are `ConfigError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while emitting a scaffold.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The destination directory does not exist. Checked before any write.
    #[error("destination {path} does not exist")]
    DestinationMissing { path: PathBuf },

    /// The target project directory already exists. Checked before any write;
    /// the emitter never merges into an existing tree.
    #[error("{path} already exists")]
    ProjectExists { path: PathBuf },

    /// A filesystem operation failed mid-write. No rollback is attempted, so
    /// a partially-written tree may remain.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DestinationMissing { path } => vec![
                format!("Create the destination first: mkdir -p {}", path.display()),
                "Or pass a different --destination".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project_name, or remove the existing directory".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check write permissions and available disk space".into(),
                "A partial tree may remain; remove it before retrying".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DestinationMissing { .. } | Self::ProjectExists { .. } => {
                ErrorCategory::Precondition
            }
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
