//! Implementation of the `groundwork generate` command.
//!
//! Responsibility: load the blueprint, run it through the core
//! resolve → emit pipeline, and display results. No business logic lives
//! here.

use tracing::{info, instrument};

use groundwork_adapters::{LocalFilesystem, load_document};
use groundwork_core::{application::ScaffoldService, domain::resolver};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Execute the `groundwork generate` command.
///
/// Dispatch sequence:
/// 1. Load and parse the blueprint file
/// 2. Resolve it into a validated descriptor
/// 3. Early-exit with the planned file list if `--dry-run`
/// 4. Emit the scaffold
/// 5. Print the resolved project path
#[instrument(skip_all, fields(config = %args.config.display()))]
pub fn execute(args: GenerateArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    // 1. Blueprint → raw document
    let document = load_document(&args.config).map_err(|e| CliError::ConfigDocument {
        message: e.to_string(),
        source: Some(Box::new(e)),
    })?;

    // 2. Raw document → validated descriptor
    let descriptor = resolver::resolve(&document).map_err(|e| CliError::Core(e.into()))?;
    info!(project = %descriptor.project_name, "blueprint resolved");

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(&descriptor).with_cli_context(|| "planning")?;
        return describe_plan(&descriptor.project_name, &plan, &output);
    }

    // 4. Emit
    output.header(&format!("Creating '{}'...", descriptor.project_name))?;
    let project_root = service
        .emit(&descriptor, &args.destination)
        .map_err(CliError::Core)?;

    info!(path = %project_root.display(), "scaffold emitted");

    // 5. Report the resolved absolute path
    let resolved = std::fs::canonicalize(&project_root)
        .with_cli_context(|| format!("resolving {}", project_root.display()))?;
    output.success(&format!("Created project at {}", resolved.display()))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", descriptor.project_name))?;
        output.print("  uv sync --group dev")?;
    }

    Ok(())
}

/// Print what an emission would create, without touching the destination.
fn describe_plan(
    project_name: &str,
    plan: &groundwork_core::application::ScaffoldPlan,
    output: &OutputManager,
) -> CliResult<()> {
    let paths: Vec<String> = plan
        .file_paths()
        .iter()
        .map(|p| p.display().to_string())
        .collect();

    match output.format() {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&paths).unwrap_or_else(|_| "[]".into());
            output.print(&json)?;
        }
        _ => {
            output.info(&format!(
                "Dry run: would create '{project_name}' with {} files",
                paths.len()
            ))?;
            for path in &paths {
                output.print(&format!("  {project_name}/{path}"))?;
            }
        }
    }

    Ok(())
}
