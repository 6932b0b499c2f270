//! Configuration errors raised during resolution.
//!
//! All errors are:
//! - Cloneable and comparable (assertable in tests)
//! - Categorizable (for CLI display and exit codes)
//! - Actionable (provide suggestions)
//!
//! Resolution stops at the first failing field, so every variant identifies
//! exactly one field or constraint.

use thiserror::Error;

use crate::error::ErrorCategory;

/// A configuration document failed validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("configuration is empty")]
    EmptyDocument,

    #[error("configuration must define a mapping at the top level")]
    NotAMapping,

    #[error("missing '{field}' in configuration")]
    MissingField { field: &'static str },

    #[error("'{field}' must be {expected}")]
    WrongShape {
        field: &'static str,
        expected: &'static str,
    },

    #[error("'authors' must contain at least one entry")]
    EmptyAuthors,

    #[error("each author entry must be a mapping with name and email")]
    AuthorNotMapping,

    #[error("author entries require '{field}'")]
    AuthorFieldMissing { field: &'static str },

    #[error("dependency group '{group}' must be a sequence")]
    GroupNotSequence { group: String },
}

impl ConfigError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyDocument => vec![
                "The configuration file has no content".into(),
                "See the documentation for a complete example blueprint".into(),
            ],
            Self::NotAMapping => vec![
                "The top level of the file must be key: value pairs".into(),
                "Check for a stray leading '-' turning the document into a list".into(),
            ],
            Self::MissingField { field } => vec![
                format!("Add a '{field}' entry to the configuration"),
                "Required fields: project_name, description, project_url, \
                 authors, dependencies, dependency_groups, dev_extras"
                    .into(),
            ],
            Self::WrongShape { field, expected } => {
                vec![format!("'{field}' is present but must be {expected}")]
            }
            Self::EmptyAuthors => vec![
                "List at least one author".into(),
                "Example: authors: [{name: Mo, email: mo@example.com}]".into(),
            ],
            Self::AuthorNotMapping | Self::AuthorFieldMissing { .. } => vec![
                "Each author entry needs both 'name' and 'email' keys".into(),
                "Example: - name: Mo\n           email: mo@example.com".into(),
            ],
            Self::GroupNotSequence { group } => vec![
                format!("Write group '{group}' as a list of requirement strings"),
                "Example: test: [\"pytest >=7\"]".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
