//! The validated project descriptor and its derived naming artifacts.
//!
//! A [`ProjectDescriptor`] is only ever constructed by
//! [`resolver::resolve`](super::resolver::resolve); once built it is
//! immutable for the rest of the run. Derived quantities (package
//! identifier, author label, URL variants) are pure methods recomputed on
//! demand, never stored alongside the source fields.

use serde::Serialize;

/// A single author entry: both fields are required by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// A named, ordered list of dependency specifiers.
///
/// Groups other than `dev` are caller-defined or defaulted; `dev` is never
/// stored — it is synthesized at render time from the other groups, the
/// [`DEV_BASELINE`] toolset, and the descriptor's `dev_extras`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyGroup {
    pub name: String,
    pub requirements: Vec<String>,
}

/// Fixed developer toolset appended to the synthesized `dev` group.
pub const DEV_BASELINE: [&str; 4] = ["ipython", "ruff", "pre_commit", "mypy"];

/// Built-in dependency groups the caller's `dependency_groups` overlays.
///
/// Any group the caller supplies replaces the default for that name
/// wholesale; unspecified groups pass through unchanged.
pub(crate) fn default_dependency_groups() -> Vec<DependencyGroup> {
    let group = |name: &str, requirements: &[&str]| DependencyGroup {
        name: name.to_string(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
    };

    vec![
        group("test", &["pytest >=7", "pytest-cov >=3", "coverage[toml]"]),
        group(
            "docs",
            &[
                "sphinx>=7",
                "furo",
                "myst-parser<5",
                "sphinx-design",
                "sphinx-togglebutton",
                "sphinx-copybutton",
                "sphinx-autodoc-typehints",
                "myst-nb",
                "sphinxcontrib-mermaid",
            ],
        ),
        group("examples", &["rich", "matplotlib>=3.10.7"]),
    ]
}

/// Validated, fully-typed scaffolding parameters for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    /// Published project identifier, used verbatim as the directory name.
    pub project_name: String,
    pub description: String,
    /// Homepage URL, trailing slashes already stripped.
    pub project_url: String,
    /// Non-empty after resolution.
    pub authors: Vec<Author>,
    pub dependencies: Vec<String>,
    /// Overlay of the built-in defaults; always contains at least the three
    /// default group names, in encounter order.
    pub dependency_groups: Vec<DependencyGroup>,
    pub dev_extras: Vec<String>,
}

impl ProjectDescriptor {
    /// Project name normalized into a source-tree/module identifier:
    /// `-` and spaces become `_`.
    pub fn package_name(&self) -> String {
        self.project_name.replace(['-', ' '], "_")
    }

    /// Copyright holder / documentation author string.
    ///
    /// Comma-joined author names; falls back to `<name> developers` for an
    /// empty author list, which the resolver never produces.
    pub fn author_label(&self) -> String {
        if self.authors.is_empty() {
            return format!("{} developers", self.project_name);
        }
        self.authors
            .iter()
            .map(|author| author.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn issues_url(&self) -> String {
        format!("{}/issues", self.project_url)
    }

    pub fn discussions_url(&self) -> String {
        format!("{}/discussions", self.project_url)
    }

    pub fn releases_url(&self) -> String {
        format!("{}/releases", self.project_url)
    }
}
