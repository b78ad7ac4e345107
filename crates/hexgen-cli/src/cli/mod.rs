//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use hexgen_core::domain::Language as CoreLanguage;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "hexgen",
    bin_name = "hexgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Hexagonal project and feature scaffolding",
    long_about = "Hexgen bootstraps projects and hexagonal-architecture \
                  feature folders from a handful of prompts.",
    after_help = "EXAMPLES:\n\
        \x20 hexgen init --name my-api --lang go --entrypoint api\n\
        \x20 hexgen init --name my-tool --lang rust --dry-run\n\
        \x20 hexgen feature --name payments",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the hexagonal folder set for a feature.
    #[command(
        visible_alias = "f",
        about = "Create hexagonal feature folders",
        after_help = "EXAMPLES:\n\
            \x20 hexgen feature --name payments\n\
            \x20 hexgen feature            # prompts for the name"
    )]
    Feature(FeatureArgs),

    /// Bootstrap a new project in the current directory.
    #[command(
        visible_alias = "i",
        about = "Initialise a project",
        after_help = "EXAMPLES:\n\
            \x20 hexgen init --name demo --lang go --entrypoint api\n\
            \x20 hexgen init --name demo --lang typescript\n\
            \x20 hexgen init               # prompts for every answer"
    )]
    Init(InitArgs),
}

// ── feature ───────────────────────────────────────────────────────────────────

/// Arguments for `hexgen feature`.
#[derive(Debug, Args)]
pub struct FeatureArgs {
    /// Feature name; prompted for when omitted.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Feature name")]
    pub name: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `hexgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name; prompted for when omitted.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Programming language; prompted for when omitted.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        value_enum,
        help = "Programming language"
    )]
    pub language: Option<LanguageArg>,

    /// Entrypoint folder name (default from config: `main`).
    #[arg(
        short = 'e',
        long = "entrypoint",
        value_name = "NAME",
        help = "Entrypoint folder name"
    )]
    pub entrypoint: Option<String>,

    /// Preview the step plan without running anything.
    #[arg(long = "dry-run", help = "Show the step plan without executing")]
    pub dry_run: bool,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported languages, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LanguageArg {
    /// Also accepted as `ts`.
    #[value(alias = "ts")]
    TypeScript,
    /// Also accepted as `js`.
    #[value(alias = "js")]
    JavaScript,
    #[value(alias = "py")]
    Python,
    #[value(alias = "golang")]
    Go,
    #[value(alias = "rs")]
    Rust,
}

impl From<LanguageArg> for CoreLanguage {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::TypeScript => CoreLanguage::TypeScript,
            LanguageArg::JavaScript => CoreLanguage::JavaScript,
            LanguageArg::Python => CoreLanguage::Python,
            LanguageArg::Go => CoreLanguage::Go,
            LanguageArg::Rust => CoreLanguage::Rust,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
