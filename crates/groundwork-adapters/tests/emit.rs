//! End-to-end emitter tests: resolve a configuration, emit the scaffold,
//! inspect the resulting tree.

use std::path::{Path, PathBuf};

use groundwork_adapters::{LocalFilesystem, MemoryFilesystem};
use groundwork_core::{
    application::{ScaffoldService, ports::Filesystem},
    domain::resolver,
    error::{ErrorCategory, GroundworkError},
};

const CONFIG: &str = r#"
project_name: sample-project
description: Sample description of the project.
project_url: https://github.com/mo/sample-project
authors:
  - name: Mo
    email: mo@example.com
dependencies:
  - numpy
  - scipy
dependency_groups:
  test:
    - pytest
dev_extras:
  - pytest-xdist
"#;

fn descriptor() -> groundwork_core::domain::ProjectDescriptor {
    let raw = serde_yaml_ng::from_str(CONFIG).unwrap();
    resolver::resolve(&raw).unwrap()
}

fn memory_service() -> (ScaffoldService, MemoryFilesystem) {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));
    (service, fs)
}

const EXPECTED_FILES: [&str; 25] = [
    "pyproject.toml",
    ".pre-commit-config.yaml",
    ".readthedocs.yaml",
    "LICENSE",
    "README.md",
    ".gitignore",
    ".github/workflows/ci.yml",
    "docs/index.md",
    "docs/conf.py",
    "docs/introduction.md",
    "docs/quickstart.md",
    "docs/concepts.md",
    "docs/tutorials.md",
    "docs/architecture.md",
    "docs/contributing.md",
    "docs/api/index.md",
    "docs/api/inference.md",
    "docs/api/parameters.md",
    "docs/api/statelib.md",
    "docs/_static/custom.css",
    "docs/_templates/.gitkeep",
    "docs/Makefile",
    "src/sample_project/__init__.py",
    "tests/test_placeholder.py",
    "examples/.gitkeep",
];

#[test]
fn emit_produces_every_file_in_the_fixed_layout_and_no_others() {
    let (service, fs) = memory_service();
    fs.create_dir_all(Path::new("dest")).unwrap();

    let root = service.emit(&descriptor(), "dest").unwrap();
    assert_eq!(root, PathBuf::from("dest/sample-project"));

    let written = fs.list_files();
    assert_eq!(written.len(), EXPECTED_FILES.len());
    for rel in EXPECTED_FILES {
        assert!(
            written.contains(&root.join(rel)),
            "missing {rel} in emitted tree"
        );
    }
}

#[test]
fn every_written_file_is_normalized() {
    let (service, fs) = memory_service();
    fs.create_dir_all(Path::new("dest")).unwrap();

    let root = service.emit(&descriptor(), "dest").unwrap();
    for path in fs.list_files() {
        let content = fs.file_content(&path).unwrap();
        assert!(
            content.ends_with('\n'),
            "{} lacks trailing newline",
            path.display()
        );
        assert_eq!(
            content,
            format!("{}\n", content.trim_end()),
            "{} has trailing whitespace or extra newlines",
            path.display()
        );
    }
    // .gitkeep files collapse to a single newline.
    let gitkeep = fs
        .file_content(&root.join("examples").join(".gitkeep"))
        .unwrap();
    assert_eq!(gitkeep, "\n");
}

#[test]
fn second_emit_fails_and_leaves_first_tree_untouched() {
    let (service, fs) = memory_service();
    fs.create_dir_all(Path::new("dest")).unwrap();

    service.emit(&descriptor(), "dest").unwrap();
    let before = fs.list_files();

    let err = service.emit(&descriptor(), "dest").unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(err.category(), ErrorCategory::Precondition);
    assert_eq!(fs.list_files(), before);
}

#[test]
fn missing_destination_fails_before_any_write() {
    let (service, fs) = memory_service();

    let err = service.emit(&descriptor(), "nowhere").unwrap_err();
    assert!(err.to_string().contains("does not exist"));
    assert!(matches!(err, GroundworkError::Application(_)));
    assert!(fs.list_files().is_empty());
}

#[test]
fn gitignore_is_copied_from_cwd_when_present() {
    let (service, fs) = memory_service();
    fs.create_dir_all(Path::new("dest")).unwrap();
    fs.seed_file(".gitignore", "node_modules/\n.cache/\n");

    let root = service.emit(&descriptor(), "dest").unwrap();
    let generated = fs.file_content(&root.join(".gitignore")).unwrap();
    assert_eq!(generated, "node_modules/\n.cache/\n");
}

#[test]
fn gitignore_falls_back_to_builtin_default() {
    let (service, fs) = memory_service();
    fs.create_dir_all(Path::new("dest")).unwrap();

    let root = service.emit(&descriptor(), "dest").unwrap();
    let generated = fs.file_content(&root.join(".gitignore")).unwrap();
    assert_eq!(generated, "__pycache__/\n*.pyc\n");
}

#[test]
fn manifest_reflects_descriptor_contents() {
    let (service, fs) = memory_service();
    fs.create_dir_all(Path::new("dest")).unwrap();

    let root = service.emit(&descriptor(), "dest").unwrap();
    let manifest = fs.file_content(&root.join("pyproject.toml")).unwrap();

    assert!(manifest.contains(r#"name = "sample-project""#));
    assert!(manifest.contains("    \"numpy\","));
    assert!(manifest.contains("    \"scipy\","));
    // The supplied test group replaced the default wholesale.
    assert!(manifest.contains("test = [\n    \"pytest\",\n]"));
    assert!(manifest.contains(r#"{ include-group = "test" },"#));
    assert!(manifest.contains("    \"pytest-xdist\","));
}

#[test]
fn spaced_project_name_maps_to_underscored_package_dir() {
    let (service, fs) = memory_service();
    fs.create_dir_all(Path::new("dest")).unwrap();

    let mut d = descriptor();
    d.project_name = "My Project".into();
    let root = service.emit(&d, "dest").unwrap();

    assert_eq!(root, PathBuf::from("dest/My Project"));
    assert!(
        fs.list_files()
            .contains(&root.join("src").join("My_Project").join("__init__.py"))
    );
}

// ── LocalFilesystem ───────────────────────────────────────────────────────────

#[test]
fn emit_writes_a_real_tree_with_local_filesystem() {
    let dest = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    let root = service.emit(&descriptor(), dest.path()).unwrap();
    assert_eq!(root, dest.path().join("sample-project"));

    for rel in EXPECTED_FILES {
        assert!(root.join(rel).exists(), "missing {rel} on disk");
    }

    let license = std::fs::read_to_string(root.join("LICENSE")).unwrap();
    assert!(license.contains("MIT License"));
    assert!(license.contains("Mo"));

    let conf = std::fs::read_to_string(root.join("docs/conf.py")).unwrap();
    assert!(conf.contains(r#""source_repository": "https://github.com/mo/sample-project""#));
}

#[test]
fn emit_twice_on_disk_reports_existing_project() {
    let dest = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    service.emit(&descriptor(), dest.path()).unwrap();
    let err = service.emit(&descriptor(), dest.path()).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}
