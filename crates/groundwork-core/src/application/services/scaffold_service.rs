//! Scaffold Service - the emit workflow.
//!
//! Given a validated descriptor, the service:
//! 1. Checks the filesystem preconditions (destination exists, target does not)
//! 2. Sources the `.gitignore` content from the environment
//! 3. Renders the full plan
//! 4. Writes directories then files in deterministic order
//!
//! No file is written before the precondition checks pass; after that there
//! is no rollback — a mid-write failure propagates and may leave a partial
//! tree. This is a one-shot tool and the caller is expected to remove the
//! partial tree and re-run.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ScaffoldPlan, ports::Filesystem},
    domain::{ProjectDescriptor, templates},
    error::GroundworkResult,
};

/// Emits a scaffold through a [`Filesystem`] port.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Emit the scaffold for `descriptor` under `destination`.
    ///
    /// Returns the created project root
    /// (`<destination>/<project_name>`).
    #[instrument(
        skip_all,
        fields(
            project = %descriptor.project_name,
            destination = %destination.as_ref().display()
        )
    )]
    pub fn emit(
        &self,
        descriptor: &ProjectDescriptor,
        destination: impl AsRef<Path>,
    ) -> GroundworkResult<PathBuf> {
        let destination = destination.as_ref();

        if !self.filesystem.exists(destination) {
            return Err(ApplicationError::DestinationMissing {
                path: destination.to_path_buf(),
            }
            .into());
        }

        let project_root = destination.join(&descriptor.project_name);
        if self.filesystem.exists(&project_root) {
            return Err(ApplicationError::ProjectExists { path: project_root }.into());
        }

        let plan = self.plan(descriptor)?;

        self.filesystem.create_dir_all(&project_root)?;
        for directory in &plan.directories {
            self.filesystem.create_dir_all(&project_root.join(directory))?;
        }
        for file in &plan.files {
            self.filesystem
                .write_file(&project_root.join(&file.path), &normalize(&file.content))?;
        }

        info!(
            files = plan.files.len(),
            directories = plan.directories.len(),
            "scaffold written"
        );
        Ok(project_root)
    }

    /// Render the plan without writing anything (dry-run support).
    ///
    /// Still reads the environment's `.gitignore`, so the preview matches
    /// what [`emit`](Self::emit) would produce.
    pub fn plan(&self, descriptor: &ProjectDescriptor) -> GroundworkResult<ScaffoldPlan> {
        let gitignore = self.gitignore_content()?;
        Ok(ScaffoldPlan::for_descriptor(descriptor, &gitignore))
    }

    /// `.gitignore` content for the generated project: the copy in the
    /// process CWD when present, else the built-in default.
    fn gitignore_content(&self) -> GroundworkResult<String> {
        let local = Path::new(".gitignore");
        if self.filesystem.exists(local) {
            debug!("copying .gitignore from current directory");
            return self.filesystem.read_to_string(local);
        }
        Ok(templates::DEFAULT_GITIGNORE.to_string())
    }
}

/// Write-time normalization: trailing whitespace trimmed, exactly one
/// trailing newline, regardless of template formatting.
fn normalize(content: &str) -> String {
    let mut normalized = content.trim_end().to_string();
    normalized.push('\n');
    normalized
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn normalize_adds_single_trailing_newline() {
        assert_eq!(normalize("hello"), "hello\n");
        assert_eq!(normalize("hello\n"), "hello\n");
        assert_eq!(normalize("hello\n\n\n"), "hello\n");
    }

    #[test]
    fn normalize_trims_trailing_whitespace() {
        assert_eq!(normalize("hello  \t \n"), "hello\n");
    }

    #[test]
    fn normalize_empty_content_is_one_newline() {
        assert_eq!(normalize(""), "\n");
    }

    #[test]
    fn normalize_preserves_interior_blank_lines() {
        assert_eq!(normalize("a\n\nb\n"), "a\n\nb\n");
    }
}
