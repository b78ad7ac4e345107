//! Command handlers.
//!
//! Each module translates CLI arguments into an answer set, runs the
//! matching generator through [`hexgen_core::application::GeneratorService`],
//! and displays the per-step outcomes.  No business logic lives here.

pub mod feature;
pub mod init;

use std::path::PathBuf;

use hexgen_adapters::{LocalFilesystem, ShellRunner};
use hexgen_core::application::{GeneratorService, PlannedStep, RunReport, StepOutcome};

use crate::error::CliResult;
use crate::output::OutputManager;

/// Build the production service rooted at the current working directory.
pub(crate) fn production_service() -> CliResult<GeneratorService> {
    let root: PathBuf = std::env::current_dir()?;
    Ok(GeneratorService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ShellRunner::new()),
        root,
    ))
}

/// Print one line per step outcome.
pub(crate) fn report_outcomes(report: &RunReport, output: &OutputManager) -> CliResult<()> {
    for step in &report.steps {
        match &step.outcome {
            StepOutcome::Executed { detail } => {
                output.success(&format!("{}: {detail}", step.title))?;
            }
            StepOutcome::Skipped { reason } => output.skipped(reason)?,
        }
    }
    Ok(())
}

/// Print the dry-run plan without touching the filesystem.
pub(crate) fn report_plan(plan: &[PlannedStep], output: &OutputManager) -> CliResult<()> {
    output.info("Dry run: nothing will be created or executed")?;
    for step in plan {
        match &step.outcome {
            StepOutcome::Executed { detail } => {
                output.print(&format!("  {}: {detail}", step.title))?;
            }
            StepOutcome::Skipped { reason } => output.skipped(reason)?,
        }
    }
    Ok(())
}
