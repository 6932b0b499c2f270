//! Config Resolver: raw document → validated [`ProjectDescriptor`].
//!
//! The raw document is the generic value tree the YAML parser produced.
//! Validation is strict and stops at the first error, field by field, in a
//! fixed checking order: `project_name`, `description`, `project_url`,
//! `authors`, `dependencies`, `dependency_groups`, `dev_extras`. No partial
//! descriptor is ever produced.

use serde_yaml_ng::{Mapping, Value};
use tracing::debug;

use super::descriptor::{Author, DependencyGroup, ProjectDescriptor, default_dependency_groups};
use super::error::ConfigError;

/// Resolve a raw configuration document into a [`ProjectDescriptor`].
pub fn resolve(raw: &Value) -> Result<ProjectDescriptor, ConfigError> {
    let root = match raw {
        Value::Null => return Err(ConfigError::EmptyDocument),
        Value::Mapping(mapping) => mapping,
        _ => return Err(ConfigError::NotAMapping),
    };

    let project_name = require_string(root, "project_name")?;
    let description = require_string(root, "description")?;
    let project_url = require_string(root, "project_url")?;
    let authors = resolve_authors(root)?;
    let dependencies = require_string_sequence(root, "dependencies")?;
    let dependency_groups = resolve_dependency_groups(root)?;
    let dev_extras = require_string_sequence(root, "dev_extras")?;

    debug!(
        project = %project_name,
        authors = authors.len(),
        groups = dependency_groups.len(),
        "configuration resolved"
    );

    Ok(ProjectDescriptor {
        project_name,
        description,
        project_url: project_url.trim_end_matches('/').to_string(),
        authors,
        dependencies,
        dependency_groups,
        dev_extras,
    })
}

// ── Field helpers ─────────────────────────────────────────────────────────────

fn require<'a>(root: &'a Mapping, field: &'static str) -> Result<&'a Value, ConfigError> {
    root.get(field).ok_or(ConfigError::MissingField { field })
}

fn require_string(root: &Mapping, field: &'static str) -> Result<String, ConfigError> {
    scalar_to_string(require(root, field)?).ok_or(ConfigError::WrongShape {
        field,
        expected: "a string",
    })
}

fn require_string_sequence(
    root: &Mapping,
    field: &'static str,
) -> Result<Vec<String>, ConfigError> {
    let sequence = require(root, field)?
        .as_sequence()
        .ok_or(ConfigError::WrongShape {
            field,
            expected: "a sequence",
        })?;

    sequence
        .iter()
        .map(|entry| {
            scalar_to_string(entry).ok_or(ConfigError::WrongShape {
                field,
                expected: "a sequence of strings",
            })
        })
        .collect()
}

/// Coerce a scalar value to its string form. Sequences and mappings have no
/// string form and fail the shape check at the call site.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

// ── Structured fields ─────────────────────────────────────────────────────────

fn resolve_authors(root: &Mapping) -> Result<Vec<Author>, ConfigError> {
    let sequence = require(root, "authors")?
        .as_sequence()
        .ok_or(ConfigError::WrongShape {
            field: "authors",
            expected: "a sequence",
        })?;

    if sequence.is_empty() {
        return Err(ConfigError::EmptyAuthors);
    }

    sequence
        .iter()
        .map(|entry| {
            let mapping = entry.as_mapping().ok_or(ConfigError::AuthorNotMapping)?;
            Ok(Author {
                name: author_field(mapping, "name")?,
                email: author_field(mapping, "email")?,
            })
        })
        .collect()
}

fn author_field(mapping: &Mapping, field: &'static str) -> Result<String, ConfigError> {
    mapping
        .get(field)
        .and_then(scalar_to_string)
        .ok_or(ConfigError::AuthorFieldMissing { field })
}

/// Overlay caller-supplied groups onto the built-in defaults.
///
/// A supplied name replaces that group's contents wholesale (never a deep
/// merge); unknown names are appended in encounter order.
fn resolve_dependency_groups(root: &Mapping) -> Result<Vec<DependencyGroup>, ConfigError> {
    let supplied = require(root, "dependency_groups")?
        .as_mapping()
        .ok_or(ConfigError::WrongShape {
            field: "dependency_groups",
            expected: "a mapping",
        })?;

    let mut groups = default_dependency_groups();
    for (key, value) in supplied {
        let name = scalar_to_string(key).ok_or(ConfigError::WrongShape {
            field: "dependency_groups",
            expected: "a mapping with string keys",
        })?;

        let sequence = value
            .as_sequence()
            .ok_or_else(|| ConfigError::GroupNotSequence {
                group: name.clone(),
            })?;
        let requirements = sequence
            .iter()
            .map(|entry| {
                scalar_to_string(entry).ok_or_else(|| ConfigError::GroupNotSequence {
                    group: name.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match groups.iter_mut().find(|group| group.name == name) {
            Some(existing) => existing.requirements = requirements,
            None => groups.push(DependencyGroup { name, requirements }),
        }
    }

    Ok(groups)
}
