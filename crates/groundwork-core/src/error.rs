//! Unified error handling for Groundwork Core.
//!
//! This module provides a single error type wrapping the two failure families
//! of the pipeline: configuration resolution and scaffold emission.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::ConfigError;

/// Root error type for Groundwork Core operations.
///
/// Both variants are transparent: the wrapped error already carries a
/// complete, user-facing message.
#[derive(Debug, Error, Clone)]
pub enum GroundworkError {
    /// The configuration document is missing a field or has the wrong shape.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Emission failed: destination preconditions or filesystem trouble.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl GroundworkError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The configuration document failed validation.
    Validation,
    /// A filesystem precondition was not met (destination missing, target taken).
    Precondition,
    /// An I/O operation failed mid-write.
    Internal,
}

/// Convenient result type alias.
pub type GroundworkResult<T> = Result<T, GroundworkError>;
