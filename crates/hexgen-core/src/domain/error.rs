//! Domain-layer errors.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to hand back to the prompt loop)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A generator needs an answer the answer set never collected.
    #[error("Required answer missing: {field}")]
    MissingAnswer { field: &'static str },

    /// A required prompt field was left empty.
    ///
    /// Interactive prompting re-asks instead of surfacing this; it only
    /// escapes to the user when answers arrive via flags.
    #[error("Answer '{field}' cannot be empty")]
    EmptyAnswer { field: &'static str },

    /// The language lookup reached a value outside the closed set.
    ///
    /// Unreachable through the prompt choices; kept as a defensive check
    /// for programmatically built answer sets.
    #[error("Unsupported language: {language}")]
    UnsupportedLanguage { language: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingAnswer { field } => vec![
                format!("The '{field}' answer was never collected"),
                "Re-run the generator and answer every prompt".into(),
            ],
            Self::EmptyAnswer { field } => vec![
                format!("'{field}' is required and cannot be blank"),
                "Pass a value with the matching flag or answer the prompt".into(),
            ],
            Self::UnsupportedLanguage { language } => vec![
                format!("'{language}' is not a supported language"),
                "Supported languages:".into(),
                "  • typescript".into(),
                "  • javascript".into(),
                "  • python".into(),
                "  • go".into(),
                "  • rust".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingAnswer { .. } | Self::EmptyAnswer { .. } => ErrorCategory::Validation,
            Self::UnsupportedLanguage { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answer_is_a_validation_error() {
        let err = DomainError::EmptyAnswer { field: "name" };
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn unsupported_language_is_a_configuration_error() {
        let err = DomainError::UnsupportedLanguage {
            language: "cobol".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.suggestions().iter().any(|s| s.contains("typescript")));
    }
}
