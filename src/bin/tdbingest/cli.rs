use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "tdbingest",
    about = "Convert CALPHAD thermodynamic databases (TDB) into PIF chemical-system records",
    version,
    author
)]
pub struct Cli {
    /// TDB file to convert (exactly one)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Database name recorded as the "Database Name" identifier
    #[arg(short, long, value_name = "DATABASE")]
    pub name: String,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub parse: ParseOptions,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args)]
#[command(next_help_heading = "Output")]
pub struct OutputOptions {
    /// Output JSON file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write compact single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Parser options; flags override values from the configuration file.
#[derive(Args)]
#[command(next_help_heading = "Parsing")]
pub struct ParseOptions {
    /// Ingest configuration (TOML file)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How statement keywords are recognized
    #[arg(long, value_name = "MODE")]
    pub keyword_match: Option<KeywordMatch>,

    /// Which lines count as `$` comments
    #[arg(long, value_name = "MODE")]
    pub comments: Option<CommentMode>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KeywordMatch {
    /// Full keyword, singular or plural, any case (default)
    Exact,
    /// Case-insensitive abbreviation of at least three characters
    Abbreviation,
    /// Case-sensitive substring of the keyword
    Legacy,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CommentMode {
    /// `$` is the first non-blank character
    Indented,
    /// `$` is the first character of the line
    Leading,
}

pub fn parse() -> Cli {
    Cli::parse()
}
