//! Application layer.
//!
//! This layer contains:
//! - **Services**: step execution (GeneratorService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. The step tables live in `crate::generators`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GeneratorService, PlannedStep, RunReport, StepOutcome, StepReport};

pub use ports::{CommandRunner, Filesystem};

pub use error::ApplicationError;
