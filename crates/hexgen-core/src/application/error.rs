//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur while executing generator steps.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed (permissions, or a path segment collides
    /// with an existing non-directory file).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external command exited non-zero or could not be launched.
    #[error("Command failed: {command}: {reason}")]
    CommandFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that no file occupies a needed directory path".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Command was: {command}"),
                "Ensure the tool is installed and in your PATH".into(),
                "Check the command output above for details".into(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_suggests_checking_path() {
        let err = ApplicationError::CommandFailed {
            command: "bun install".into(),
            reason: "exited with status 1".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("PATH")));
        assert!(err.to_string().contains("bun install"));
    }
}
