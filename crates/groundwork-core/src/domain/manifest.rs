//! Build-manifest (`pyproject.toml`) rendering.
//!
//! The manifest is the one template whose blocks depend on descriptor
//! contents: the author records, the dependency list, and the dependency
//! groups (including the synthesized `dev` group) are rendered here and
//! substituted into [`PYPROJECT_TEMPLATE`] together with the scalar fields.
//! Values interpolated into quoted TOML fields pass through
//! [`escape_toml_string`] first.

use super::descriptor::{Author, DEV_BASELINE, DependencyGroup, ProjectDescriptor};
use super::templates::render;

/// Keys: `PROJECT_NAME`, `DESCRIPTION`, `AUTHORS_BLOCK`, `DEPENDENCIES_BLOCK`,
/// `DEPENDENCY_GROUPS_BLOCK`, `HOMEPAGE_URL`, `ISSUES_URL`, `DISCUSSIONS_URL`,
/// `RELEASES_URL`, `PACKAGE_NAME`.
const PYPROJECT_TEMPLATE: &str = r#"[build-system]
requires = ["hatchling"]
build-backend = "hatchling.build"


[project]
name = "{{PROJECT_NAME}}"
description = "{{DESCRIPTION}}"
license = "MIT"
license-files = ["LICENSE"]
readme = "README.md"
requires-python = ">=3.11"
classifiers = [
    "Development Status :: 1 - Planning",
    "Intended Audience :: Science/Research",
    "Intended Audience :: Developers",
    "Operating System :: OS Independent",
    "Programming Language :: Python",
    "Programming Language :: Python :: 3",
    "Programming Language :: Python :: 3 :: Only",
    "Programming Language :: Python :: 3.11",
    "Programming Language :: Python :: 3.12",
    "Programming Language :: Python :: 3.13",
    "Topic :: Scientific/Engineering",
    "Typing :: Typed",
]
dynamic = ["version"]
authors = [
{{AUTHORS_BLOCK}}
]
dependencies = [
{{DEPENDENCIES_BLOCK}}
]


[dependency-groups]
{{DEPENDENCY_GROUPS_BLOCK}}


[project.urls]
Homepage = "{{HOMEPAGE_URL}}"
"Bug Tracker" = "{{ISSUES_URL}}"
Discussions = "{{DISCUSSIONS_URL}}"
Changelog = "{{RELEASES_URL}}"


[tool.hatch]
version.path = "src/{{PACKAGE_NAME}}/__init__.py"


[tool.pytest.ini_options]
minversion = "7"
xfail_strict = true
addopts = ["-ra", "--strict-config", "--strict-markers"]
pythonpath = ["src"]
filterwarnings = [
    "error",
]
log_cli_level = "INFO"
testpaths = ["tests"]


[tool.coverage]
run.source = ["{{PACKAGE_NAME}}"]
port.exclude_lines = ['pragma: no cover', '\.\.\.', 'if typing.TYPE_CHECKING:']


[tool.mypy]
files = ["src", "tests"]
python_version = "3.13"
warn_unreachable = true
disallow_untyped_defs = false
disallow_incomplete_defs = false
check_untyped_defs = true
enable_error_code = ["ignore-without-code", "redundant-expr", "truthy-bool"]
strict = false
ignore_missing_imports = true


[tool.ruff.lint]
preview = true
ignore = [
    "PLR",
    "E501",
    "I002",
    "ISC001",
    "PLC0415",
    "PLW3201",
    "RUF052",
    "F722",
]
select = [
    "E",
    "F",
    "W",
    "B",
    "I",
    "C4",
    "EM",
    "ICN",
    "ISC",
    "G",
    "PGH",
    "PIE",
    "PL",
    "PT",
    "PTH",
    "RET",
    "RUF",
    "SIM",
    "UP",
    "YTT",
    "EXE",
    "E303",
]
unfixable = [
    "F841",
]
flake8-unused-arguments.ignore-variadic-names = true
isort.required-imports = ["from __future__ import annotations"]
"#;

/// Render the complete build manifest for a descriptor.
pub fn build_manifest(descriptor: &ProjectDescriptor) -> String {
    let package_name = descriptor.package_name();
    let authors_block = format_authors(&descriptor.authors);
    let dependencies_block = format_string_array(&descriptor.dependencies, 4);
    let groups_block =
        format_dependency_groups(&descriptor.dependency_groups, &descriptor.dev_extras);

    render(
        PYPROJECT_TEMPLATE,
        &[
            ("PROJECT_NAME", descriptor.project_name.as_str()),
            ("DESCRIPTION", &escape_toml_string(&descriptor.description)),
            ("AUTHORS_BLOCK", &authors_block),
            ("DEPENDENCIES_BLOCK", &dependencies_block),
            ("DEPENDENCY_GROUPS_BLOCK", &groups_block),
            ("HOMEPAGE_URL", &escape_toml_string(&descriptor.project_url)),
            ("ISSUES_URL", &escape_toml_string(&descriptor.issues_url())),
            (
                "DISCUSSIONS_URL",
                &escape_toml_string(&descriptor.discussions_url()),
            ),
            (
                "RELEASES_URL",
                &escape_toml_string(&descriptor.releases_url()),
            ),
            ("PACKAGE_NAME", &package_name),
        ],
    )
}

/// Escape a value for interpolation into a quoted TOML field.
pub fn escape_toml_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render author entries as literal TOML records, one per line.
///
/// The placeholder record for an empty list is unreachable after resolution
/// (the resolver requires at least one author); it keeps the renderer total.
fn format_authors(authors: &[Author]) -> String {
    if authors.is_empty() {
        return r#"    { name = "author", email = "todo@example.com" },"#.to_string();
    }
    authors
        .iter()
        .map(|author| {
            format!(
                r#"    {{ name = "{}", email = "{}" }},"#,
                escape_toml_string(&author.name),
                escape_toml_string(&author.email)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a list of values as quoted TOML array entries, one per line.
fn format_string_array(values: &[String], indent: usize) -> String {
    if values.is_empty() {
        return format!("{}# Add entries here", " ".repeat(indent));
    }
    values
        .iter()
        .map(|value| {
            format!(
                "{}\"{}\",",
                " ".repeat(indent),
                escape_toml_string(value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render every group as its own list block, then synthesize the `dev` group
/// last: an `include-group` reference per other group (in encounter order),
/// the fixed baseline toolset, then the caller's extras.
fn format_dependency_groups(groups: &[DependencyGroup], dev_extras: &[String]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for group in groups.iter().filter(|group| group.name != "dev") {
        lines.push(format!("{} = [", group.name));
        lines.push(format_string_array(&group.requirements, 4));
        lines.push("]\n".to_string());
    }

    lines.push("dev = [".to_string());
    for group in groups.iter().filter(|group| group.name != "dev") {
        lines.push(format!(r#"    {{ include-group = "{}" }},"#, group.name));
    }
    for requirement in DEV_BASELINE
        .iter()
        .copied()
        .chain(dev_extras.iter().map(String::as_str))
    {
        lines.push(format!("    \"{requirement}\","));
    }
    lines.push("]".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::descriptor::default_dependency_groups;

    fn descriptor() -> ProjectDescriptor {
        ProjectDescriptor {
            project_name: "sample-project".into(),
            description: "Sample description.".into(),
            project_url: "https://github.com/mo/sample-project".into(),
            authors: vec![Author {
                name: "Mo".into(),
                email: "mo@example.com".into(),
            }],
            dependencies: vec!["numpy".into(), "scipy".into()],
            dependency_groups: default_dependency_groups(),
            dev_extras: vec!["pytest-xdist".into()],
        }
    }

    #[test]
    fn manifest_contains_quoted_dependencies_one_per_line() {
        let manifest = build_manifest(&descriptor());
        assert!(manifest.contains("dependencies = [\n    \"numpy\",\n    \"scipy\",\n]"));
    }

    #[test]
    fn manifest_carries_name_and_urls() {
        let manifest = build_manifest(&descriptor());
        assert!(manifest.contains(r#"name = "sample-project""#));
        assert!(manifest.contains(r#"Homepage = "https://github.com/mo/sample-project""#));
        assert!(
            manifest.contains(r#""Bug Tracker" = "https://github.com/mo/sample-project/issues""#)
        );
        assert!(manifest.contains(r#"Changelog = "https://github.com/mo/sample-project/releases""#));
    }

    #[test]
    fn manifest_author_record_is_literal_toml() {
        let manifest = build_manifest(&descriptor());
        assert!(manifest.contains(r#"{ name = "Mo", email = "mo@example.com" },"#));
    }

    #[test]
    fn version_path_uses_package_identifier() {
        let manifest = build_manifest(&descriptor());
        assert!(manifest.contains("version.path = \"src/sample_project/__init__.py\""));
    }

    #[test]
    fn dev_group_includes_other_groups_baseline_and_extras() {
        let manifest = build_manifest(&descriptor());

        let dev_start = manifest.find("dev = [").unwrap();
        let dev_block = &manifest[dev_start..];
        assert!(dev_block.contains(r#"{ include-group = "test" },"#));
        assert!(dev_block.contains(r#"{ include-group = "docs" },"#));
        assert!(dev_block.contains(r#"{ include-group = "examples" },"#));
        for tool in DEV_BASELINE {
            assert!(dev_block.contains(&format!("\"{tool}\",")), "missing {tool}");
        }
        assert!(dev_block.contains("\"pytest-xdist\","));
    }

    #[test]
    fn include_groups_follow_encounter_order() {
        let mut d = descriptor();
        d.dependency_groups.push(DependencyGroup {
            name: "bench".into(),
            requirements: vec!["asv".into()],
        });
        let manifest = build_manifest(&d);

        let dev_block = &manifest[manifest.find("dev = [").unwrap()..];
        let test_at = dev_block.find(r#"include-group = "test""#).unwrap();
        let bench_at = dev_block.find(r#"include-group = "bench""#).unwrap();
        assert!(test_at < bench_at);
    }

    #[test]
    fn empty_dependencies_render_a_comment() {
        let mut d = descriptor();
        d.dependencies.clear();
        let manifest = build_manifest(&d);
        assert!(manifest.contains("dependencies = [\n    # Add entries here\n]"));
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        let mut d = descriptor();
        d.description = r#"Says "hi" via C:\tools"#.into();
        let manifest = build_manifest(&d);
        assert!(manifest.contains(r#"description = "Says \"hi\" via C:\\tools""#));
    }

    #[test]
    fn empty_author_list_renders_placeholder_record() {
        let mut d = descriptor();
        d.authors.clear();
        let manifest = build_manifest(&d);
        assert!(manifest.contains(r#"{ name = "author", email = "todo@example.com" },"#));
    }
}
