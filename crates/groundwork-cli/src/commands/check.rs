//! Implementation of the `groundwork check` command.
//!
//! Runs the blueprint through the resolver and reports the outcome without
//! touching the filesystem.

use tracing::instrument;

use groundwork_adapters::load_document;
use groundwork_core::domain::resolver;

use crate::{
    cli::{CheckArgs, OutputFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `groundwork check` command.
#[instrument(skip_all, fields(config = %args.config.display()))]
pub fn execute(args: CheckArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let document = load_document(&args.config).map_err(|e| CliError::ConfigDocument {
        message: e.to_string(),
        source: Some(Box::new(e)),
    })?;

    let descriptor = resolver::resolve(&document).map_err(|e| CliError::Core(e.into()))?;

    match output.format() {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&descriptor).unwrap_or_else(|_| "{}".into());
            output.print(&json)?;
        }
        _ => {
            output.success("Blueprint is valid")?;
            output.print(&format!("  Project:       {}", descriptor.project_name))?;
            output.print(&format!("  Package:       {}", descriptor.package_name()))?;
            output.print(&format!("  Authors:       {}", descriptor.author_label()))?;
            output.print(&format!("  Homepage:      {}", descriptor.project_url))?;
            output.print(&format!(
                "  Dependencies:  {}",
                descriptor.dependencies.len()
            ))?;
            let group_names: Vec<&str> = descriptor
                .dependency_groups
                .iter()
                .map(|g| g.name.as_str())
                .collect();
            output.print(&format!("  Groups:        {}", group_names.join(", ")))?;
        }
    }

    Ok(())
}
