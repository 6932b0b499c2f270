//! Configuration source loading: the external parse step.
//!
//! Reads configuration text and hands it to the YAML parser, producing the
//! generic value tree the core resolver consumes. Nothing here interprets
//! the document — shape validation is the resolver's job.

use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;
use thiserror::Error;
use tracing::debug;

/// The configuration file could not be read or parsed.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// Load a configuration file into a generic YAML value tree.
///
/// An empty file parses to `Value::Null`; the resolver turns that into its
/// "configuration is empty" error.
pub fn load_document(path: &Path) -> Result<Value, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty document is Null, same as a lone `---`; the resolver owns the
    // "configuration is empty" diagnostic.
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    let value = serde_yaml_ng::from_str(&text).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "configuration document loaded");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn loads_a_mapping_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "project_name: demo").unwrap();

        let value = load_document(file.path()).unwrap();
        assert!(value.is_mapping());
    }

    #[test]
    fn empty_file_parses_to_null() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let value = load_document(file.path()).unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_document(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "project_name: [unclosed").unwrap();

        let err = load_document(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }
}
