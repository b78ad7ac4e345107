//! Infrastructure adapters for hexgen.
//!
//! This crate implements the ports defined in
//! `hexgen-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod command;
pub mod filesystem;

// Re-export commonly used adapters
pub use command::{RecordingRunner, ShellRunner};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
