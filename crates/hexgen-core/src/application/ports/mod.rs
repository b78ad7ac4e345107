//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generator runtime needs from the outside
//! world. The `hexgen-adapters` crate provides implementations.

use std::path::Path;

use crate::error::HexgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `hexgen_adapters::filesystem::LocalFilesystem` (production)
/// - `hexgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Idempotent: an already-existing directory is not an error. A path
    /// segment occupied by a non-directory file is.
    fn create_dir_all(&self, path: &Path) -> HexgenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> HexgenResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for external command execution.
///
/// Implemented by:
/// - `hexgen_adapters::command::ShellRunner` (production: `sh -c`,
///   inherited stdio, blocks until exit)
/// - `hexgen_adapters::command::RecordingRunner` (testing)
///
/// The contract with every external collaborator is the same: run the
/// rendered command string in `cwd`, and treat a non-zero exit status as
/// fatal for the whole generator run.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Execute `command` with `cwd` as working directory, blocking until
    /// the process exits.
    fn run(&self, command: &str, cwd: &Path) -> HexgenResult<()>;
}
