//! Core domain layer.
//!
//! Pure business logic with no I/O: the answer set, the language table,
//! and the step/generator vocabulary. Filesystem and process concerns are
//! reached only through the ports in `crate::application::ports`.

pub mod answers;
pub mod error;
pub mod language;
pub mod step;

// Re-exports for convenience
pub use answers::Answers;
pub use error::{DomainError, ErrorCategory};
pub use language::Language;
pub use step::{Action, Content, Generator, SkipCheck, Step};
