//! Core domain layer for Groundwork.
//!
//! Pure logic only: resolving a raw configuration document into a
//! [`ProjectDescriptor`] and rendering the template catalog against it.
//! No filesystem, network, or subscriber concerns live here — I/O is
//! handled through ports defined in the application layer.

pub mod descriptor;
pub mod error;
pub mod manifest;
pub mod resolver;
pub mod templates;

// Re-exports for convenience
pub use descriptor::{Author, DEV_BASELINE, DependencyGroup, ProjectDescriptor};
pub use error::ConfigError;
