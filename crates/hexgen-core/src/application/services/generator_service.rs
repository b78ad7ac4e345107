//! Generator service - the step execution loop.
//!
//! This service runs a generator's steps in order against the injected
//! ports:
//! 1. Evaluate the step's skip predicate (if any)
//! 2. Dispatch on the action kind (folders / file / command)
//! 3. Record the outcome for reporting
//!
//! Execution is strictly sequential; a failing step aborts the remainder
//! of the run and already-applied steps are left in place.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::ports::{CommandRunner, Filesystem},
    domain::{Action, Answers, Content, Generator},
    error::HexgenResult,
};

/// What happened to one step during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step ran; `detail` is the rendered command, file path, or
    /// comma-joined folder list.
    Executed { detail: String },
    /// The skip predicate bypassed the step.
    Skipped { reason: String },
}

/// Per-step record in a [`RunReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub title: &'static str,
    pub outcome: StepOutcome,
}

/// Ordered outcomes of a completed generator run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub steps: Vec<StepReport>,
}

impl RunReport {
    /// Steps that actually executed.
    pub fn executed(&self) -> impl Iterator<Item = &StepReport> {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Executed { .. }))
    }

    /// Steps bypassed by their skip predicate.
    pub fn skipped(&self) -> impl Iterator<Item = &StepReport> {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Skipped { .. }))
    }
}

/// One entry of a dry-run plan: same evaluation as a real run, but the
/// detail describes what *would* happen.
pub type PlannedStep = StepReport;

/// Executes generators against the filesystem and command ports.
pub struct GeneratorService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    root: PathBuf,
}

impl GeneratorService {
    /// Create a service that operates under `root` (normally the current
    /// working directory).
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            runner,
            root: root.into(),
        }
    }

    /// The directory all step paths and commands resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run every step of `generator` in order.
    ///
    /// Returns the per-step report on full completion. The first failing
    /// step aborts the run; there is no rollback of applied steps.
    #[instrument(skip_all, fields(generator = generator.name))]
    pub fn run(&self, generator: &Generator, answers: &Answers) -> HexgenResult<RunReport> {
        info!("Generator started");
        self.filesystem.create_dir_all(&self.root)?;

        let mut report = RunReport::default();
        for step in &generator.steps {
            if let Some(reason) = evaluate_skip(step.skip, answers, &self.root) {
                info!(step = step.title, %reason, "Step skipped");
                report.steps.push(StepReport {
                    title: step.title,
                    outcome: StepOutcome::Skipped { reason },
                });
                continue;
            }

            let detail = self.execute(&step.action, answers)?;
            info!(step = step.title, %detail, "Step completed");
            report.steps.push(StepReport {
                title: step.title,
                outcome: StepOutcome::Executed { detail },
            });
        }

        info!("Generator completed");
        Ok(report)
    }

    /// Evaluate skips and render every action without touching the
    /// filesystem or spawning processes.
    pub fn plan(&self, generator: &Generator, answers: &Answers) -> HexgenResult<Vec<PlannedStep>> {
        let mut planned = Vec::with_capacity(generator.steps.len());
        for step in &generator.steps {
            let outcome = match evaluate_skip(step.skip, answers, &self.root) {
                Some(reason) => StepOutcome::Skipped { reason },
                None => StepOutcome::Executed {
                    detail: self.describe(&step.action, answers)?,
                },
            };
            planned.push(StepReport {
                title: step.title,
                outcome,
            });
        }
        Ok(planned)
    }

    fn execute(&self, action: &Action, answers: &Answers) -> HexgenResult<String> {
        match action {
            Action::AddFolders { base, paths } => {
                let folders = self.folder_paths(*base, paths, answers);
                for folder in &folders {
                    self.filesystem.create_dir_all(folder)?;
                }
                Ok(join_paths(&folders))
            }
            Action::AddFile { path, content } => {
                let dest = self.root.join(answers.render(path));
                let body = render_content(content, answers)?;
                // Parent may not exist yet (.husky/commit-msg).
                if let Some(parent) = dest.parent() {
                    if !parent.as_os_str().is_empty() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                }
                self.filesystem.write_file(&dest, &body)?;
                Ok(dest.display().to_string())
            }
            Action::Run { command } => {
                let rendered = answers.render(command);
                self.runner.run(&rendered, &self.root)?;
                Ok(rendered)
            }
        }
    }

    fn describe(&self, action: &Action, answers: &Answers) -> HexgenResult<String> {
        match action {
            Action::AddFolders { base, paths } => {
                Ok(join_paths(&self.folder_paths(*base, paths, answers)))
            }
            Action::AddFile { path, content } => {
                // Render the content too, so configuration errors surface
                // in a dry run exactly as they would in a real one.
                render_content(content, answers)?;
                Ok(self.root.join(answers.render(path)).display().to_string())
            }
            Action::Run { command } => Ok(answers.render(command)),
        }
    }

    fn folder_paths(
        &self,
        base: Option<&str>,
        paths: &[&str],
        answers: &Answers,
    ) -> Vec<PathBuf> {
        let base_dir = match base {
            Some(template) => self.root.join(answers.render(template)),
            None => self.root.clone(),
        };
        paths
            .iter()
            .map(|fragment| base_dir.join(answers.render(fragment)))
            .collect()
    }
}

fn evaluate_skip(
    skip: Option<crate::domain::SkipCheck>,
    answers: &Answers,
    root: &Path,
) -> Option<String> {
    skip.and_then(|check| check(answers, root))
}

fn render_content(content: &Content, answers: &Answers) -> HexgenResult<String> {
    match content {
        Content::Template(template) => Ok(answers.render(template)),
        Content::Generated(generate) => Ok(generate(answers)?),
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
