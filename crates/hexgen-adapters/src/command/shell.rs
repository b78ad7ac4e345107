//! Shell command runner using std::process.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::info;

use hexgen_core::{
    application::{ApplicationError, ports::CommandRunner},
    error::HexgenResult,
};

/// Production command runner: `sh -c <command>` with inherited standard
/// I/O, so interactive and credential prompts from the sub-process reach
/// the user directly. Blocks until the process exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    /// Create a new shell runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, cwd: &Path) -> HexgenResult<()> {
        info!(%command, cwd = %cwd.display(), "Running command");

        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::CommandFailed {
                command: command.to_owned(),
                reason: format!("failed to launch: {e}"),
            })?;

        if !status.success() {
            let reason = match status.code() {
                Some(code) => format!("exited with status {code}"),
                None => "terminated by signal".to_owned(),
            };
            return Err(ApplicationError::CommandFailed {
                command: command.to_owned(),
                reason,
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_succeeds() {
        let temp = tempfile::tempdir().unwrap();
        ShellRunner::new().run("true", temp.path()).unwrap();
    }

    #[test]
    fn non_zero_exit_is_fatal() {
        let temp = tempfile::tempdir().unwrap();
        let err = ShellRunner::new().run("exit 3", temp.path()).unwrap_err();
        assert!(err.to_string().contains("exited with status 3"));
    }

    #[test]
    fn runs_in_the_given_working_directory() {
        let temp = tempfile::tempdir().unwrap();
        ShellRunner::new()
            .run("pwd > where.txt", temp.path())
            .unwrap();
        let recorded = std::fs::read_to_string(temp.path().join("where.txt")).unwrap();
        // Canonicalize both sides; macOS tempdirs live behind /private.
        assert_eq!(
            std::fs::canonicalize(recorded.trim()).unwrap(),
            std::fs::canonicalize(temp.path()).unwrap()
        );
    }
}
