//! Steps, actions, and generator definitions.
//!
//! A generator is a named, ordered list of steps. Each step is a
//! (predicate, action) pair: the optional skip predicate decides whether
//! the step runs, and the action is a closed tagged union of the three
//! step kinds. No inheritance, no open plugin registry — the vocabulary
//! of actions is fixed here.

use std::path::Path;

use super::answers::Answers;
use super::error::DomainError;

/// Skip predicate evaluated before a step executes.
///
/// Returns `Some(reason)` to bypass the step (the reason is surfaced to
/// the user), `None` to execute it. The run root is passed so predicates
/// can consult the working tree (the version-control check); everything
/// else depends only on the answer set.
pub type SkipCheck = fn(&Answers, &Path) -> Option<String>;

/// Source of a generated file's content.
#[derive(Debug, Clone, Copy)]
pub enum Content {
    /// A `{{var}}` template rendered against the answer set.
    Template(&'static str),
    /// A content function, for lookups a flat template cannot express
    /// (the per-language starter file).
    Generated(fn(&Answers) -> Result<String, DomainError>),
}

/// The closed set of step kinds.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    /// Create a list of directories, each rendered against the answers and
    /// joined under an optional rendered base path.
    AddFolders {
        base: Option<&'static str>,
        paths: &'static [&'static str],
    },
    /// Write one file at a rendered destination path.
    AddFile {
        path: &'static str,
        content: Content,
    },
    /// Run an external command (rendered) with inherited standard I/O.
    Run { command: &'static str },
}

/// One discrete, optionally skippable generator action.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// Short label for logs and dry-run output.
    pub title: &'static str,
    pub skip: Option<SkipCheck>,
    pub action: Action,
}

/// A named, prompt-driven sequence of steps.
#[derive(Debug)]
pub struct Generator {
    pub name: &'static str,
    pub description: &'static str,
    pub steps: Vec<Step>,
}
