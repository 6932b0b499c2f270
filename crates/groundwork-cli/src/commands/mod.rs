//! Command handlers. Each module owns one subcommand and nothing else.

pub mod check;
pub mod completions;
pub mod generate;
