//! The closed set of languages the init generator knows how to bootstrap.

use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// Supported target languages.
///
/// The variant decides the starter-file extension and content, and which
/// conditional init steps run (see `generators::init`). TypeScript and
/// JavaScript share a starter file and the bun-based tooling steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    JavaScript,
    Python,
    Go,
    Rust,
}

impl Language {
    /// Every supported language, in prompt-menu order.
    pub const ALL: [Language; 5] = [
        Language::TypeScript,
        Language::JavaScript,
        Language::Python,
        Language::Go,
        Language::Rust,
    ];

    /// Canonical lowercase name, as stored in the answer set.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Go => "go",
            Self::Rust => "rust",
        }
    }

    /// Source-file extension for the starter entrypoint.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::TypeScript => "ts",
            Self::JavaScript => "js",
            Self::Python => "py",
            Self::Go => "go",
            Self::Rust => "rs",
        }
    }

    /// Content of the generated `main.<ext>` starter file.
    pub fn starter_file(&self) -> &'static str {
        match self {
            Self::TypeScript | Self::JavaScript => {
                "#!/usr/bin/env bun\n\nfunction main() {\n\n}\n\nvoid main()\n"
            }
            Self::Python => "#!/usr/bin/env python3\n\nif __name__ == \"__main__\":\n    pass\n",
            Self::Go => "package main\n\nfunc main() {\n\n}\n",
            Self::Rust => "#!/usr/bin/env rust\n\nfn main() {\n\n}\n",
        }
    }

    /// `true` for the bun-managed JS family (shared manifest + install steps).
    pub fn is_js_family(&self) -> bool {
        matches!(self, Self::TypeScript | Self::JavaScript)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "typescript" | "ts" => Ok(Self::TypeScript),
            "javascript" | "js" => Ok(Self::JavaScript),
            "python" | "py" => Ok(Self::Python),
            "go" | "golang" => Ok(Self::Go),
            "rust" | "rs" => Ok(Self::Rust),
            other => Err(DomainError::UnsupportedLanguage {
                language: other.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names_and_aliases() {
        assert_eq!("typescript".parse::<Language>().unwrap(), Language::TypeScript);
        assert_eq!("TS".parse::<Language>().unwrap(), Language::TypeScript);
        assert_eq!("golang".parse::<Language>().unwrap(), Language::Go);
        assert!("java".parse::<Language>().is_err());
    }

    #[test]
    fn extension_table() {
        assert_eq!(Language::TypeScript.extension(), "ts");
        assert_eq!(Language::JavaScript.extension(), "js");
        assert_eq!(Language::Python.extension(), "py");
        assert_eq!(Language::Go.extension(), "go");
        assert_eq!(Language::Rust.extension(), "rs");
    }

    #[test]
    fn typescript_and_javascript_share_a_starter_file() {
        assert_eq!(
            Language::TypeScript.starter_file(),
            Language::JavaScript.starter_file()
        );
        assert!(Language::TypeScript.starter_file().starts_with("#!/usr/bin/env bun"));
    }

    #[test]
    fn go_starter_declares_package_main() {
        let content = Language::Go.starter_file();
        assert!(content.contains("package main"));
        assert!(content.contains("func main()"));
    }

    #[test]
    fn python_starter_has_main_guard() {
        assert!(
            Language::Python
                .starter_file()
                .contains("if __name__ == \"__main__\":")
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
    }
}
