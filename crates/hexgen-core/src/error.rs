//! Unified error handling for hexgen-core.
//!
//! Wraps domain and application errors behind one root type so callers
//! get a single error surface with categories and suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum HexgenError {
    /// Errors from the domain layer (validation, language lookup).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from step execution (filesystem, external commands).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl HexgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Check your setup and try again".into(),
            ],
        }
    }

    /// Get error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            // Filesystem and command failures are environmental, not user
            // mistakes.
            Self::Application(_) => ErrorCategory::External,
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    External,
}

/// Convenient result type alias.
pub type HexgenResult<T> = Result<T, HexgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_validation_maps_to_validation_category() {
        let err: HexgenError = DomainError::EmptyAnswer { field: "name" }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn command_failure_maps_to_external_category() {
        let err: HexgenError = ApplicationError::CommandFailed {
            command: "git init".into(),
            reason: "exited with status 128".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::External);
        assert!(!err.suggestions().is_empty());
    }
}
