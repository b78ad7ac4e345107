//! Recording command runner for testing.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use hexgen_core::{
    application::{ApplicationError, ports::CommandRunner},
    error::HexgenResult,
};

/// Test double: records every command instead of executing it.
///
/// Optionally scripted to fail on a matching command, to exercise the
/// sequential-abort behavior of the generator service.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<RecordingRunnerInner>>,
}

#[derive(Debug, Default)]
struct RecordingRunnerInner {
    commands: Vec<(String, PathBuf)>,
    fail_on: Option<String>,
}

impl RecordingRunner {
    /// Create a runner that accepts every command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the first command containing `needle`.
    pub fn failing_on(needle: impl Into<String>) -> Self {
        let runner = Self::new();
        runner.inner.lock().unwrap().fail_on = Some(needle.into());
        runner
    }

    /// All recorded command strings, in execution order.
    pub fn commands(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        inner.commands.iter().map(|(cmd, _)| cmd.clone()).collect()
    }

    /// The working directory the n-th command ran in.
    pub fn cwd_of(&self, index: usize) -> Option<PathBuf> {
        let inner = self.inner.lock().unwrap();
        inner.commands.get(index).map(|(_, cwd)| cwd.clone())
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str, cwd: &Path) -> HexgenResult<()> {
        let mut inner = self.inner.lock().map_err(|_| {
            hexgen_core::error::HexgenError::from(ApplicationError::CommandFailed {
                command: command.to_owned(),
                reason: "Runner lock poisoned".into(),
            })
        })?;

        inner
            .commands
            .push((command.to_owned(), cwd.to_path_buf()));

        if let Some(needle) = &inner.fail_on {
            if command.contains(needle.as_str()) {
                return Err(ApplicationError::CommandFailed {
                    command: command.to_owned(),
                    reason: "exited with status 1".into(),
                }
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let runner = RecordingRunner::new();
        runner.run("first", Path::new("/p")).unwrap();
        runner.run("second", Path::new("/p")).unwrap();
        assert_eq!(runner.commands(), ["first", "second"]);
        assert_eq!(runner.cwd_of(0), Some(PathBuf::from("/p")));
    }

    #[test]
    fn scripted_failure_still_records_the_command() {
        let runner = RecordingRunner::failing_on("git init");
        assert!(
            runner
                .run("git init --initial-branch=main", Path::new("/p"))
                .is_err()
        );
        assert_eq!(runner.commands().len(), 1);
    }
}
