//! Command-runner port implementations.

pub mod recording;
pub mod shell;

pub use recording::RecordingRunner;
pub use shell::ShellRunner;
