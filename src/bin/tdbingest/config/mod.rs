use std::fs;

use anyhow::{Context, Result};

use tdb_ingester::IngestConfig;
use tdb_ingester::io::{CommentMode as LibCommentMode, KeywordMatch as LibKeywordMatch};

use crate::cli;

/// Loads the configuration file if one was given, then applies the flags.
pub fn build_ingest_config(parse: &cli::ParseOptions) -> Result<IngestConfig> {
    let mut config = match &parse.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            IngestConfig::from_toml_str(&text)
                .with_context(|| format!("Invalid config file: {}", path.display()))?
        }
        None => IngestConfig::default(),
    };

    apply_overrides(&mut config, parse);
    Ok(config)
}

fn apply_overrides(config: &mut IngestConfig, parse: &cli::ParseOptions) {
    if let Some(mode) = parse.keyword_match {
        config.parse.keyword_match = mode.into();
    }
    if let Some(mode) = parse.comments {
        config.parse.comments = mode.into();
    }
}

impl From<cli::KeywordMatch> for LibKeywordMatch {
    fn from(m: cli::KeywordMatch) -> Self {
        match m {
            cli::KeywordMatch::Exact => Self::Exact,
            cli::KeywordMatch::Abbreviation => Self::Abbreviation,
            cli::KeywordMatch::Legacy => Self::Legacy,
        }
    }
}

impl From<cli::CommentMode> for LibCommentMode {
    fn from(m: cli::CommentMode) -> Self {
        match m {
            cli::CommentMode::Indented => Self::Indented,
            cli::CommentMode::Leading => Self::Leading,
        }
    }
}
