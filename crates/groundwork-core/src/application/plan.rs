//! The scaffold plan: every directory and file one emission produces.
//!
//! The plan is built in full, in deterministic order, before anything is
//! written. Paths are relative to the project root; the service joins them
//! with `<destination>/<project_name>` at write time.

use std::path::{Path, PathBuf};

use crate::domain::{ProjectDescriptor, manifest, templates};

/// One file to be written, path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub content: String,
}

/// The complete, ordered set of directories and files for one emission.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PlannedFile>,
}

impl ScaffoldPlan {
    /// Render the fixed catalog against a descriptor.
    ///
    /// `gitignore` is the environment-sourced content for the generated
    /// `.gitignore` (the caller's CWD copy, or the built-in default).
    pub fn for_descriptor(descriptor: &ProjectDescriptor, gitignore: &str) -> Self {
        let package_name = descriptor.package_name();
        let author_label = descriptor.author_label();

        let directories = vec![
            Path::new("src").join(&package_name),
            PathBuf::from("tests"),
            Path::new("docs").join("_static"),
            Path::new("docs").join("_templates"),
            Path::new("docs").join("api"),
            Path::new(".github").join("workflows"),
            PathBuf::from("examples"),
        ];

        let mut files: Vec<PlannedFile> = Vec::new();
        let mut file = |path: PathBuf, content: String| {
            files.push(PlannedFile { path, content });
        };

        file(
            PathBuf::from("pyproject.toml"),
            manifest::build_manifest(descriptor),
        );
        file(
            PathBuf::from(".pre-commit-config.yaml"),
            templates::PRE_COMMIT_CONFIG.to_string(),
        );
        file(
            PathBuf::from(".readthedocs.yaml"),
            templates::READTHEDOCS_CONFIG.to_string(),
        );
        file(
            PathBuf::from("LICENSE"),
            templates::render(templates::LICENSE_TEXT, &[("AUTHOR_LABEL", &author_label)]),
        );
        file(
            PathBuf::from("README.md"),
            templates::render(
                templates::README_STUB,
                &[("PROJECT_NAME", &descriptor.project_name)],
            ),
        );
        file(PathBuf::from(".gitignore"), gitignore.to_string());
        file(
            Path::new(".github").join("workflows").join("ci.yml"),
            templates::CI_WORKFLOW.to_string(),
        );

        file(
            Path::new("docs").join("index.md"),
            templates::render(
                templates::DOC_INDEX,
                &[("PROJECT_NAME", &descriptor.project_name)],
            ),
        );
        file(
            Path::new("docs").join("conf.py"),
            templates::render(
                templates::DOC_CONF,
                &[
                    ("PROJECT_NAME", descriptor.project_name.as_str()),
                    ("AUTHOR_LABEL", &author_label),
                    ("REPOSITORY_URL", &descriptor.project_url),
                ],
            ),
        );
        for (name, title) in [
            ("introduction.md", "Introduction"),
            ("quickstart.md", "Quickstart"),
            ("concepts.md", "Core Concepts"),
            ("tutorials.md", "Tutorials"),
            ("architecture.md", "Architecture"),
            ("contributing.md", "Contributing Guide"),
        ] {
            file(Path::new("docs").join(name), templates::doc_stub(title));
        }
        file(
            Path::new("docs").join("api").join("index.md"),
            templates::DOC_API_INDEX.to_string(),
        );
        for (name, title) in [
            ("inference.md", "Inference API"),
            ("parameters.md", "Parameters API"),
            ("statelib.md", "Statelib API"),
        ] {
            file(
                Path::new("docs").join("api").join(name),
                templates::doc_stub(title),
            );
        }
        file(
            Path::new("docs").join("_static").join("custom.css"),
            templates::DOCS_CUSTOM_CSS.to_string(),
        );
        file(
            Path::new("docs").join("_templates").join(".gitkeep"),
            String::new(),
        );
        file(
            Path::new("docs").join("Makefile"),
            templates::DOCS_MAKEFILE.to_string(),
        );

        file(
            Path::new("src").join(&package_name).join("__init__.py"),
            templates::render(
                templates::MODULE_INIT,
                &[
                    ("PROJECT_NAME", descriptor.project_name.as_str()),
                    ("DESCRIPTION", descriptor.description.as_str()),
                    ("PACKAGE_NAME", &package_name),
                    ("AUTHOR_LABEL", &author_label),
                ],
            ),
        );
        file(
            Path::new("tests").join("test_placeholder.py"),
            templates::PLACEHOLDER_TEST.to_string(),
        );
        file(Path::new("examples").join(".gitkeep"), String::new());

        Self { directories, files }
    }

    /// Relative paths of every planned file, in write order.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }
}
