//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "groundwork",
    bin_name = "groundwork",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3d7} Project scaffolding from a declarative blueprint",
    long_about = "Groundwork reads a YAML blueprint describing a project \
                  (name, authors, dependencies) and materializes a complete \
                  boilerplate tree: build manifest, license, CI workflow, \
                  documentation skeleton, and package entry point.",
    after_help = "EXAMPLES:\n\
        \x20 groundwork generate blueprint.yml\n\
        \x20 groundwork generate blueprint.yml --destination ~/work\n\
        \x20 groundwork check blueprint.yml\n\
        \x20 groundwork completions bash > /usr/share/bash-completion/completions/groundwork",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a project scaffold from a blueprint.
    #[command(
        visible_alias = "gen",
        about = "Generate a project scaffold",
        after_help = "EXAMPLES:\n\
            \x20 groundwork generate blueprint.yml\n\
            \x20 groundwork generate blueprint.yml --destination ~/work\n\
            \x20 groundwork generate blueprint.yml --dry-run"
    )]
    Generate(GenerateArgs),

    /// Validate a blueprint without writing anything.
    #[command(
        about = "Validate a blueprint",
        after_help = "EXAMPLES:\n\
            \x20 groundwork check blueprint.yml\n\
            \x20 groundwork check blueprint.yml --output-format json"
    )]
    Check(CheckArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 groundwork completions bash > ~/.local/share/bash-completion/completions/groundwork\n\
            \x20 groundwork completions zsh  > ~/.zfunc/_groundwork\n\
            \x20 groundwork completions fish > ~/.config/fish/completions/groundwork.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `groundwork generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the YAML blueprint.
    #[arg(value_name = "CONFIG", help = "Path to the blueprint file")]
    pub config: PathBuf,

    /// Directory the project is created under. Must already exist.
    #[arg(
        short = 'd',
        long = "destination",
        value_name = "DIR",
        default_value = ".",
        help = "Directory to create the project in (defaults to current directory)"
    )]
    pub destination: PathBuf,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `groundwork check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the YAML blueprint.
    #[arg(value_name = "CONFIG", help = "Path to the blueprint file")]
    pub config: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `groundwork completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from(["groundwork", "generate", "blueprint.yml"]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.config, PathBuf::from("blueprint.yml"));
                assert_eq!(args.destination, PathBuf::from("."));
                assert!(!args.dry_run);
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn generate_accepts_destination_and_dry_run() {
        let cli = Cli::parse_from([
            "groundwork",
            "generate",
            "blueprint.yml",
            "--destination",
            "/tmp/work",
            "--dry-run",
        ]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.destination, PathBuf::from("/tmp/work"));
                assert!(args.dry_run);
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn gen_alias_works() {
        let cli = Cli::parse_from(["groundwork", "gen", "blueprint.yml"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn parse_check_command() {
        let cli = Cli::parse_from(["groundwork", "check", "blueprint.yml"]);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["groundwork", "--quiet", "--verbose", "check", "c.yml"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_config_is_a_parse_error() {
        let result = Cli::try_parse_from(["groundwork", "generate"]);
        assert!(result.is_err());
    }
}
