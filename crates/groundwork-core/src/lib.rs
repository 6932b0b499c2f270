//! Groundwork Core - configuration resolution and scaffold emission.
//!
//! This crate provides the domain and application layers for the Groundwork
//! project scaffolding tool. The pipeline is linear:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          groundwork-cli (CLI)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      domain::resolver::resolve          │
//! │   raw YAML value → ProjectDescriptor    │
//! └──────────────────┬──────────────────────┘
//!                    │ feeds
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     application::ScaffoldService        │
//! │  descriptor → rendered plan → on disk   │
//! └──────────────────┬──────────────────────┘
//!                    │ writes through
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Filesystem port (groundwork-adapters) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer is pure: descriptor validation and template rendering
//! never touch the filesystem. All I/O goes through the [`Filesystem`] port
//! implemented in `groundwork-adapters`.
//!
//! [`Filesystem`]: application::ports::Filesystem

// Domain layer (descriptor, resolver, templates)
pub mod domain;

// Application layer (ports, scaffold service)
pub mod application;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ScaffoldService, ports::Filesystem};
    pub use crate::domain::{
        Author, ConfigError, DependencyGroup, ProjectDescriptor, resolver::resolve,
    };
    pub use crate::error::{GroundworkError, GroundworkResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
