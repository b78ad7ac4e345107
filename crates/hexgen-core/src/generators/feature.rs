//! The `feature` generator.
//!
//! Creates the fixed hexagonal-architecture skeleton for one feature:
//! seven empty folders under a directory named after the feature. No file
//! contents are generated, folder creation is idempotent, and a failure
//! partway leaves previously created folders intact.

use crate::domain::{Action, Generator, Step};

/// Relative folders created under the feature directory, in creation order.
pub const FEATURE_FOLDERS: [&str; 7] = [
    "adapter/primary",
    "adapter/secondary",
    "application/usecase",
    "application/service",
    "domain/port",
    "domain/error",
    "domain/model",
];

/// Build the feature generator definition.
pub fn generator() -> Generator {
    Generator {
        name: "feature",
        description: "Generate a new feature",
        steps: vec![Step {
            title: "feature folders",
            skip: None,
            action: Action::AddFolders {
                base: Some("{{name}}"),
                paths: &FEATURE_FOLDERS,
            },
        }],
    }
}
