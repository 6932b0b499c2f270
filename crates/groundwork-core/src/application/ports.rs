//! Driven ports - implemented by infrastructure.
//!
//! The application layer needs exactly one capability from the outside
//! world: a filesystem. `groundwork-adapters` provides the implementations.

use std::path::Path;

use crate::error::GroundworkResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `groundwork_adapters::filesystem::LocalFilesystem` (production)
/// - `groundwork_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GroundworkResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> GroundworkResult<()>;

    /// Read a file's content. Used to probe the environment's `.gitignore`.
    fn read_to_string(&self, path: &Path) -> GroundworkResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
