//! The `init` generator.
//!
//! Bootstraps a new project in the run root: language-specific setup
//! commands, a starter source file, a package manifest for the JS family,
//! standard folders, README, ignore file, version control, and commit-hook
//! wiring. Steps run in the fixed order below; each is independently
//! skippable but a failure aborts the remainder.
//!
//! The conditional table is deliberately asymmetric: only go, rust, and
//! python get an explicit project/environment init command, while the JS
//! family relies on the manifest file plus `bun install`.

use std::path::Path;

use crate::domain::{Action, Answers, Content, DomainError, Generator, Language, Step};

/// Fixed-shape manifest for bun-managed TypeScript/JavaScript projects.
const PACKAGE_MANIFEST: &str = r#"{
  "name": "{{name}}",
  "module": "main.{{ext}}",
  "type": "module",
  "devDependencies": {
    "@types/bun": "latest"
  },
  "peerDependencies": {
    "typescript": "^5.0.0"
  }
}"#;

/// Ignore-file template fetched for a fixed list of ecosystem tags.
const GITIGNORE_COMMAND: &str = "curl https://www.toptal.com/developers/gitignore/api/macos,visualstudiocode,git,linux,windows,node,python,rust,go,typescript,javascript > .gitignore";

const COMMIT_MSG_HOOK: &str = "bunx commitlint --edit $1\n";

/// Build the init generator definition.
pub fn generator() -> Generator {
    Generator {
        name: "init",
        description: "Initialize the project",
        steps: vec![
            Step {
                title: "go module init",
                skip: Some(skip_unless_go),
                action: Action::Run {
                    command: "go mod init {{name}}",
                },
            },
            Step {
                title: "package manifest",
                skip: Some(skip_unless_js_family_manifest),
                action: Action::AddFile {
                    path: "package.json",
                    content: Content::Template(PACKAGE_MANIFEST),
                },
            },
            Step {
                title: "cargo init",
                skip: Some(skip_unless_rust),
                action: Action::Run {
                    command: "cargo init --bin",
                },
            },
            Step {
                title: "python venv",
                skip: Some(skip_unless_python),
                action: Action::Run { command: "uv venv" },
            },
            Step {
                title: "starter file",
                skip: None,
                action: Action::AddFile {
                    path: "main.{{ext}}",
                    content: Content::Generated(starter_file),
                },
            },
            Step {
                title: "standard folders",
                skip: None,
                action: Action::AddFolders {
                    base: None,
                    paths: &["common", "entrypoint/{{entrypoint}}", "tests"],
                },
            },
            Step {
                title: "readme",
                skip: None,
                action: Action::AddFile {
                    path: "README.md",
                    content: Content::Template("# {{name}}\n"),
                },
            },
            Step {
                title: "gitignore",
                skip: None,
                action: Action::Run {
                    command: GITIGNORE_COMMAND,
                },
            },
            Step {
                title: "git init",
                skip: Some(skip_if_already_a_repo),
                action: Action::Run {
                    command: "git init --initial-branch=main",
                },
            },
            Step {
                title: "bun install",
                skip: Some(skip_unless_js_family_install),
                action: Action::Run {
                    command: "bun install",
                },
            },
            Step {
                title: "husky install",
                skip: None,
                action: Action::Run {
                    command: "bunx husky install",
                },
            },
            Step {
                title: "commit-msg hook",
                skip: None,
                action: Action::AddFile {
                    path: ".husky/commit-msg",
                    content: Content::Template(COMMIT_MSG_HOOK),
                },
            },
        ],
    }
}

// ── Skip predicates ───────────────────────────────────────────────────────────

fn skip_unless_go(answers: &Answers, _root: &Path) -> Option<String> {
    (answers.language() != Some(Language::Go))
        .then(|| "Skipping go module initialization".into())
}

fn skip_unless_js_family_manifest(answers: &Answers, _root: &Path) -> Option<String> {
    (!is_js_family(answers)).then(|| "Skipping bun initialization".into())
}

fn skip_unless_rust(answers: &Answers, _root: &Path) -> Option<String> {
    (answers.language() != Some(Language::Rust))
        .then(|| "Skipping cargo initialization".into())
}

fn skip_unless_python(answers: &Answers, _root: &Path) -> Option<String> {
    (answers.language() != Some(Language::Python))
        .then(|| "Skipping python venv initialization".into())
}

fn skip_if_already_a_repo(_answers: &Answers, root: &Path) -> Option<String> {
    root.join(".git")
        .exists()
        .then(|| "Skipping git initialization".into())
}

fn skip_unless_js_family_install(answers: &Answers, _root: &Path) -> Option<String> {
    (!is_js_family(answers)).then(|| "Skipping bun install".into())
}

fn is_js_family(answers: &Answers) -> bool {
    answers.language().is_some_and(|lang| lang.is_js_family())
}

// ── Content lookups ───────────────────────────────────────────────────────────

/// Per-language starter-file content.
///
/// An answer set whose language falls outside the closed enum is a fatal
/// configuration error here, never a silent default.
fn starter_file(answers: &Answers) -> Result<String, DomainError> {
    let raw = answers
        .get("language")
        .ok_or(DomainError::MissingAnswer { field: "language" })?;
    let language: Language = raw.parse()?;
    Ok(language.starter_file().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(language: Language) -> Answers {
        Answers::for_init("demo", language, "api").unwrap()
    }

    const NO_REPO: &str = "/nonexistent-root";

    #[test]
    fn step_order_is_fixed() {
        let titles: Vec<&str> = generator().steps.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            [
                "go module init",
                "package manifest",
                "cargo init",
                "python venv",
                "starter file",
                "standard folders",
                "readme",
                "gitignore",
                "git init",
                "bun install",
                "husky install",
                "commit-msg hook",
            ]
        );
    }

    #[test]
    fn go_module_init_runs_only_for_go() {
        let root = Path::new(NO_REPO);
        assert_eq!(skip_unless_go(&answers(Language::Go), root), None);
        for lang in [
            Language::TypeScript,
            Language::JavaScript,
            Language::Python,
            Language::Rust,
        ] {
            assert_eq!(
                skip_unless_go(&answers(lang), root).as_deref(),
                Some("Skipping go module initialization")
            );
        }
    }

    #[test]
    fn manifest_and_install_run_only_for_js_family() {
        let root = Path::new(NO_REPO);
        for lang in [Language::TypeScript, Language::JavaScript] {
            assert_eq!(skip_unless_js_family_manifest(&answers(lang), root), None);
            assert_eq!(skip_unless_js_family_install(&answers(lang), root), None);
        }
        for lang in [Language::Python, Language::Go, Language::Rust] {
            assert_eq!(
                skip_unless_js_family_manifest(&answers(lang), root).as_deref(),
                Some("Skipping bun initialization")
            );
            assert_eq!(
                skip_unless_js_family_install(&answers(lang), root).as_deref(),
                Some("Skipping bun install")
            );
        }
    }

    #[test]
    fn cargo_and_venv_are_language_exclusive() {
        let root = Path::new(NO_REPO);
        assert_eq!(skip_unless_rust(&answers(Language::Rust), root), None);
        assert_eq!(
            skip_unless_rust(&answers(Language::Go), root).as_deref(),
            Some("Skipping cargo initialization")
        );
        assert_eq!(skip_unless_python(&answers(Language::Python), root), None);
        assert_eq!(
            skip_unless_python(&answers(Language::Rust), root).as_deref(),
            Some("Skipping python venv initialization")
        );
    }

    #[test]
    fn skip_decisions_are_deterministic_for_equal_answers() {
        let root = Path::new(NO_REPO);
        let first = answers(Language::Python);
        let second = answers(Language::Python);
        assert_eq!(
            skip_unless_python(&first, root),
            skip_unless_python(&second, root)
        );
        assert_eq!(skip_unless_go(&first, root), skip_unless_go(&second, root));
    }

    #[test]
    fn starter_file_rejects_out_of_set_language() {
        let corrupted = answers(Language::Go).with_value("language", "cobol");
        assert!(matches!(
            starter_file(&corrupted),
            Err(DomainError::UnsupportedLanguage { .. })
        ));
    }

    #[test]
    fn starter_file_requires_a_language_answer() {
        let feature_answers = Answers::for_feature("demo").unwrap();
        assert!(matches!(
            starter_file(&feature_answers),
            Err(DomainError::MissingAnswer { field: "language" })
        ));
    }

    #[test]
    fn rendered_manifest_is_valid_json_with_name_and_extension() {
        let rendered = answers(Language::TypeScript).render(PACKAGE_MANIFEST);
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["name"], "demo");
        assert_eq!(parsed["module"], "main.ts");
        assert_eq!(parsed["type"], "module");
    }

    #[test]
    fn gitignore_command_covers_the_fixed_tag_list() {
        for tag in ["macos", "linux", "windows", "node", "python", "rust", "go"] {
            assert!(GITIGNORE_COMMAND.contains(tag), "missing tag: {tag}");
        }
        assert!(GITIGNORE_COMMAND.ends_with("> .gitignore"));
    }
}
