//! hexgen-core - prompt-driven generator runtime.
//!
//! This crate provides the domain and application layers for the hexgen
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          hexgen-cli (CLI)               │
//! │   prompts → Answers, dispatch           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        GeneratorService                 │
//! │   sequential step loop, skip checks     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Ports: Filesystem, CommandRunner      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   hexgen-adapters (Infrastructure)      │
//! │   LocalFilesystem, ShellRunner, ...     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The step tables for the two generators (`feature`, `init`) live in
//! [`generators`]; they are plain data evaluated by the service.

// Domain layer (answers, language table, step vocabulary)
pub mod domain;

// Application layer (service + ports)
pub mod application;

// Generator step tables
pub mod generators;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratorService, RunReport, StepOutcome, StepReport,
        ports::{CommandRunner, Filesystem},
    };
    pub use crate::domain::{Action, Answers, Content, Generator, Language, Step};
    pub use crate::error::{HexgenError, HexgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
