use serde::Deserialize;

use super::error::Error;
use crate::io::ParseConfig;

/// Settings of a conversion run.
///
/// Every field has a default, so a configuration file only needs the keys it
/// changes:
///
/// ```toml
/// [parse]
/// keyword_match = "legacy"
/// comments = "leading"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub parse: ParseConfig,
}

impl IngestConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{CommentMode, KeywordMatch};

    #[test]
    fn empty_config_uses_defaults() {
        let config = IngestConfig::from_toml_str("").unwrap();
        assert_eq!(config, IngestConfig::default());
    }

    #[test]
    fn parses_parse_section() {
        let config = IngestConfig::from_toml_str(
            r#"
            [parse]
            keyword_match = "legacy"
            comments = "leading"
            "#,
        )
        .unwrap();
        assert_eq!(config.parse.keyword_match, KeywordMatch::Legacy);
        assert_eq!(config.parse.comments, CommentMode::Leading);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config =
            IngestConfig::from_toml_str("[parse]\nkeyword_match = \"abbreviation\"\n").unwrap();
        assert_eq!(config.parse.keyword_match, KeywordMatch::Abbreviation);
        assert_eq!(config.parse.comments, CommentMode::Indented);
    }

    #[test]
    fn errors_on_unknown_mode() {
        let result = IngestConfig::from_toml_str("[parse]\nkeyword_match = \"fuzzy\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn errors_on_invalid_toml() {
        assert!(IngestConfig::from_toml_str("not valid [[[toml").is_err());
    }
}
