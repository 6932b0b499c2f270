//! Application layer: orchestration of the emit workflow.
//!
//! The domain layer decides *what* the scaffold contains; this layer decides
//! *how* it reaches the filesystem — precondition checks, deterministic write
//! order, and write-time normalization — through the [`ports::Filesystem`]
//! trait implemented in `groundwork-adapters`.

pub mod error;
pub mod plan;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use plan::{PlannedFile, ScaffoldPlan};
pub use services::ScaffoldService;
