//! Interactive prompt layer.
//!
//! Every answer can be pre-filled by a CLI flag; a pre-filled answer never
//! prompts.  Missing answers are collected with `dialoguer` when the
//! `interactive` feature is enabled; without it, a missing answer is a
//! configuration error telling the user which flag to pass.

use hexgen_core::domain::Language;

use crate::error::{CliError, CliResult};

/// Resolve a required name, prompting when no flag was given.
///
/// Blank flag values are rejected rather than prompted for: an explicit
/// `--name ""` is a user mistake, not a request for interactivity.
pub fn resolve_name(flag: Option<String>, prompt: &str) -> CliResult<String> {
    match flag {
        Some(name) => {
            let name = name.trim().to_owned();
            if name.is_empty() {
                return Err(CliError::InvalidName {
                    name,
                    reason: "name cannot be empty".into(),
                });
            }
            Ok(name)
        }
        None => prompt_name(prompt),
    }
}

/// Resolve the target language, prompting with a closed menu when needed.
///
/// `preferred` is the config default used to pre-select a menu entry; it has
/// no effect when a flag was given.
pub fn resolve_language(
    flag: Option<Language>,
    preferred: Option<&str>,
) -> CliResult<Language> {
    match flag {
        Some(language) => Ok(language),
        None => prompt_language(preferred),
    }
}

/// Resolve the entrypoint folder name.
///
/// A blank or missing value falls back to `default` (the config value,
/// normally `main`), matching the prompt's pre-filled answer.
pub fn resolve_entrypoint(flag: Option<String>, default: &str) -> CliResult<String> {
    match flag {
        Some(entrypoint) => {
            let entrypoint = entrypoint.trim().to_owned();
            if entrypoint.is_empty() {
                Ok(default.to_owned())
            } else {
                Ok(entrypoint)
            }
        }
        None => prompt_entrypoint(default),
    }
}

// ── interactive implementations ───────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn prompt_name(prompt: &str) -> CliResult<String> {
    use dialoguer::{Input, theme::ColorfulTheme};

    // Empty input re-prompts instead of failing the run.
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("a name is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map(|name: String| name.trim().to_owned())
        .map_err(prompt_failed)
}

#[cfg(feature = "interactive")]
fn prompt_language(preferred: Option<&str>) -> CliResult<Language> {
    use dialoguer::{Select, theme::ColorfulTheme};

    let items: Vec<&str> = Language::ALL.iter().map(Language::as_str).collect();
    let default = preferred
        .and_then(|name| items.iter().position(|item| *item == name))
        .unwrap_or(0);

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Language")
        .items(&items)
        .default(default)
        .interact()
        .map_err(prompt_failed)?;

    Ok(Language::ALL[index])
}

#[cfg(feature = "interactive")]
fn prompt_entrypoint(default: &str) -> CliResult<String> {
    use std::io::IsTerminal as _;

    use dialoguer::{Input, theme::ColorfulTheme};

    // Flag-driven runs without a terminal get the default, not a prompt.
    if !std::io::stdin().is_terminal() {
        return Ok(default.to_owned());
    }

    Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Entrypoint folder")
        .default(default.to_owned())
        .interact_text()
        .map_err(prompt_failed)
}

#[cfg(feature = "interactive")]
fn prompt_failed(err: dialoguer::Error) -> CliError {
    CliError::PromptFailed {
        message: err.to_string(),
    }
}

// ── non-interactive fallbacks ─────────────────────────────────────────────────

#[cfg(not(feature = "interactive"))]
fn prompt_name(_prompt: &str) -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
fn prompt_language(_preferred: Option<&str>) -> CliResult<Language> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
fn prompt_entrypoint(default: &str) -> CliResult<String> {
    // The entrypoint has a sensible default, so a missing flag is not an
    // error even without interactivity.
    Ok(default.to_owned())
}

// ── tests ─────────────────────────────────────────────────────────────────────
