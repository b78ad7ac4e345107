//! The answer set collected from a generator's prompts.

use std::collections::HashMap;

use super::error::DomainError;
use super::language::Language;

/// Immutable collection of prompt answers for one generator run.
///
/// A **Value Object** mapping prompt name to user-supplied value. Collected
/// once per invocation, then used only as substitution input for templates,
/// paths, and command strings. Transformations create new instances (see
/// [`Answers::with_value`]).
///
/// ## Variables
///
/// | Variable     | Generator | Source                          |
/// |--------------|-----------|---------------------------------|
/// | `name`       | both      | User input (required, non-empty)|
/// | `language`   | init      | User selection (closed set)     |
/// | `entrypoint` | init      | User input, defaults to `main`  |
/// | `ext`        | init      | Derived from `language`         |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    values: HashMap<String, String>,
}

impl Answers {
    /// Build the answer set for the feature generator.
    ///
    /// Fails when the feature name is blank; the interactive prompt turns
    /// that failure into a re-prompt.
    pub fn for_feature(name: &str) -> Result<Self, DomainError> {
        let name = require_non_empty("name", name)?;
        let mut values = HashMap::new();
        values.insert("name".to_owned(), name);
        Ok(Self { values })
    }

    /// Build the answer set for the init generator.
    ///
    /// A blank entrypoint falls back to `main`, matching the prompt default.
    /// The `ext` variable is derived here so templates can reference it
    /// without a per-template lookup.
    pub fn for_init(
        name: &str,
        language: Language,
        entrypoint: &str,
    ) -> Result<Self, DomainError> {
        let name = require_non_empty("name", name)?;
        let entrypoint = match entrypoint.trim() {
            "" => "main".to_owned(),
            other => other.to_owned(),
        };

        let mut values = HashMap::new();
        values.insert("name".to_owned(), name);
        values.insert("language".to_owned(), language.as_str().to_owned());
        values.insert("entrypoint".to_owned(), entrypoint);
        values.insert("ext".to_owned(), language.extension().to_owned());
        Ok(Self { values })
    }

    /// Copy with one value added or replaced (testing and extension hook).
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Look up a raw answer.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The selected language, if the stored value parses.
    ///
    /// `None` covers both "never asked" (feature generator) and a value
    /// outside the closed set; skip predicates treat both as "not this
    /// language".
    pub fn language(&self) -> Option<Language> {
        self.get("language")?.parse().ok()
    }

    /// Substitute `{{var}}` references with answer values.
    ///
    /// Unknown variables are left verbatim so typos surface in the output
    /// instead of vanishing silently.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                // Unterminated marker; emit the tail as-is.
                out.push_str(&rest[start..]);
                return out;
            };
            let key = after[..end].trim();
            match self.values.get(key) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyAnswer { field });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_answers_require_a_name() {
        assert!(matches!(
            Answers::for_feature(""),
            Err(DomainError::EmptyAnswer { field: "name" })
        ));
        assert!(matches!(
            Answers::for_feature("   "),
            Err(DomainError::EmptyAnswer { field: "name" })
        ));
        assert!(Answers::for_feature("payments").is_ok());
    }

    #[test]
    fn init_answers_derive_the_extension() {
        let answers = Answers::for_init("demo", Language::Go, "api").unwrap();
        assert_eq!(answers.get("ext"), Some("go"));
        assert_eq!(answers.language(), Some(Language::Go));
    }

    #[test]
    fn blank_entrypoint_defaults_to_main() {
        let answers = Answers::for_init("demo", Language::Rust, "  ").unwrap();
        assert_eq!(answers.get("entrypoint"), Some("main"));
    }

    #[test]
    fn render_substitutes_known_variables() {
        let answers = Answers::for_init("demo", Language::Go, "api").unwrap();
        assert_eq!(answers.render("go mod init {{name}}"), "go mod init demo");
        assert_eq!(answers.render("main.{{ext}}"), "main.go");
        assert_eq!(answers.render("entrypoint/{{entrypoint}}"), "entrypoint/api");
    }

    #[test]
    fn render_leaves_unknown_variables_verbatim() {
        let answers = Answers::for_feature("payments").unwrap();
        assert_eq!(answers.render("{{name}}/{{missing}}"), "payments/{{missing}}");
    }

    #[test]
    fn render_handles_unterminated_marker() {
        let answers = Answers::for_feature("payments").unwrap();
        assert_eq!(answers.render("{{name}} and {{oops"), "payments and {{oops");
    }

    #[test]
    fn identical_answers_compare_equal() {
        // Skip decisions are pure functions of the answer set, so equality
        // of inputs guarantees identical skip/execute decisions.
        let a = Answers::for_init("demo", Language::Python, "main").unwrap();
        let b = Answers::for_init("demo", Language::Python, "main").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn with_value_overrides_existing_answer() {
        let answers = Answers::for_init("demo", Language::Go, "api")
            .unwrap()
            .with_value("language", "cobol");
        assert_eq!(answers.language(), None);
        assert_eq!(answers.get("language"), Some("cobol"));
    }
}
