// Configuration for conversions and validation
// Defaults follow the layout of the test-suite files

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::language::Language;
use crate::record::MetadataDialect;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("format must be either 'conll' or 'conllu', got '{0}'")]
    UnsupportedFormat(String),

    #[error("language must be either 'de' or 'nl', got '{0}'")]
    UnsupportedLanguage(String),
}

/// Token-format flavour written by the tabular conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// CoNLL-X, `order:...|props:...`
    #[default]
    Conll,
    /// CoNLL-U, `order=...|props=...`
    Conllu,
}

impl OutputFormat {
    pub fn dialect(self) -> MetadataDialect {
        match self {
            OutputFormat::Conll => MetadataDialect::Colon,
            OutputFormat::Conllu => MetadataDialect::Equals,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Conll => "conll",
            OutputFormat::Conllu => "conllu",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    /// Accepts `conll`/`x` and `conllu`/`u`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conll" | "x" => Ok(OutputFormat::Conll),
            "conllu" | "u" => Ok(OutputFormat::Conllu),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Settings for tabular → token conversion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConversionConfig {
    pub language: Language,
    pub format: OutputFormat,
}

/// Settings for the structural validator.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// File extension picked up when validating a directory.
    pub extension: String,

    /// Head and relation checks only run on files with at least this many columns.
    pub head_check_min_columns: usize,

    /// Relations that must attach to a governor token.
    pub dependent_relations: Vec<String>,

    /// Relations that make a token a valid governor.
    pub governor_relations: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            extension: "conll".to_string(),
            head_check_min_columns: 7,
            dependent_relations: ["nsubj", "obj", "obl", "mark", "advmod", "punct", "aux"]
                .into_iter()
                .map(String::from)
                .collect(),
            governor_relations: ["root", "verb"].into_iter().map(String::from).collect(),
        }
    }
}

impl ValidationConfig {
    pub fn is_dependent(&self, relation: &str) -> bool {
        self.dependent_relations.iter().any(|r| r == relation)
    }

    pub fn is_governor(&self, relation: &str) -> bool {
        self.governor_relations.iter().any(|r| r == relation)
    }
}

/// Master configuration combining all settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub conversion: ConversionConfig,
    pub validation: ValidationConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_literals() {
        assert_eq!("conll".parse::<OutputFormat>(), Ok(OutputFormat::Conll));
        assert_eq!("x".parse::<OutputFormat>(), Ok(OutputFormat::Conll));
        assert_eq!("conllu".parse::<OutputFormat>(), Ok(OutputFormat::Conllu));
        assert_eq!("u".parse::<OutputFormat>(), Ok(OutputFormat::Conllu));
    }

    #[test]
    fn test_unsupported_format() {
        let err = "CoNLL".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedFormat("CoNLL".to_string()));
        assert!(err.to_string().contains("'conll' or 'conllu'"));
    }

    #[test]
    fn test_format_dialects() {
        assert_eq!(OutputFormat::Conll.dialect(), MetadataDialect::Colon);
        assert_eq!(OutputFormat::Conllu.dialect(), MetadataDialect::Equals);
    }

    #[test]
    fn test_validation_defaults() {
        let config = ValidationConfig::default();
        assert_eq!(config.head_check_min_columns, 7);
        assert_eq!(config.extension, "conll");
        for relation in ["nsubj", "obj", "obl", "mark", "advmod", "punct", "aux"] {
            assert!(config.is_dependent(relation));
        }
        assert!(!config.is_dependent("verb"));
        assert!(config.is_governor("root"));
        assert!(config.is_governor("verb"));
        assert!(!config.is_governor("nsubj"));
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.conversion.language, Language::German);
        assert_eq!(config.conversion.format, OutputFormat::Conll);
    }
}
