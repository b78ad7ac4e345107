//! Implementation of the `hexgen feature` command.

use tracing::{debug, info, instrument};

use hexgen_core::{domain::Answers, error::HexgenError, generators};

use crate::{
    cli::{FeatureArgs, GlobalArgs},
    error::CliResult,
    output::OutputManager,
    prompts,
};

/// Execute the `hexgen feature` command.
///
/// Dispatch sequence:
/// 1. Resolve the feature name (flag or prompt)
/// 2. Build the answer set
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Run the generator and report each step
#[instrument(skip_all)]
pub fn execute(args: FeatureArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let name = prompts::resolve_name(args.name, "Feature name")?;
    let answers = Answers::for_feature(&name).map_err(HexgenError::from)?;
    debug!(feature = %name, "Answers collected");

    let generator = generators::feature::generator();
    let service = super::production_service()?;

    if args.dry_run {
        let plan = service.plan(&generator, &answers)?;
        return super::report_plan(&plan, &output);
    }

    output.header(&format!("Creating feature '{name}'..."))?;
    info!(feature = %name, "Feature generation started");

    let report = service.run(&generator, &answers)?;
    super::report_outcomes(&report, &output)?;

    info!(feature = %name, "Feature generation completed");
    output.success(&format!("Feature '{name}' created!"))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {name}"))?;
        output.print("  # Fill in the hexagonal layers!")?;
    }

    Ok(())
}
