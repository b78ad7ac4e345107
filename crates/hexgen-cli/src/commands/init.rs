//! Implementation of the `hexgen init` command.

use tracing::{debug, info, instrument};

use hexgen_core::{domain::Answers, error::HexgenError, generators};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompts,
};

/// Execute the `hexgen init` command.
///
/// Dispatch sequence:
/// 1. Resolve the project name, language, and entrypoint (flags or prompts)
/// 2. Build the answer set (derives the `ext` variable)
/// 3. Early-exit with the step plan if `--dry-run`
/// 4. Run the generator and report each step, including skip reasons
#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let name = prompts::resolve_name(args.name, "Project name")?;
    let language = prompts::resolve_language(
        args.language.map(Into::into),
        config.defaults.language.as_deref(),
    )?;
    let entrypoint = prompts::resolve_entrypoint(args.entrypoint, &config.defaults.entrypoint)?;

    let answers =
        Answers::for_init(&name, language, &entrypoint).map_err(HexgenError::from)?;
    debug!(project = %name, %language, %entrypoint, "Answers collected");

    let generator = generators::init::generator();
    let service = super::production_service()?;

    if args.dry_run {
        let plan = service.plan(&generator, &answers)?;
        return super::report_plan(&plan, &output);
    }

    output.header(&format!("Initialising '{name}'..."))?;
    info!(project = %name, %language, "Init started");

    let report = service.run(&generator, &answers)?;
    super::report_outcomes(&report, &output)?;

    info!(project = %name, "Init completed");
    output.success(&format!("Project '{name}' initialised!"))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  # Review .gitignore and commit the initial structure")?;
        output.print("  git add -A && git commit -m 'chore: bootstrap project'")?;
    }

    Ok(())
}
