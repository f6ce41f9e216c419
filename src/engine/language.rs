use std::fmt;
use std::str::FromStr;

use super::config::ConfigError;

/// Language of the test suite being converted.
///
/// Selects the lexical exception table and where the lexical verb sits in an
/// auxiliary verb cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    German,
    Dutch,
}

/// Slot of the lexical verb when an auxiliary closes or opens the verb cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterSlot {
    /// Last word before the sentence-final punctuation (`... heeft gezien .` → `gezien`; Dutch).
    LastWord,
    /// Word before that (`... gesehen hat .` → `gesehen`; German).
    PenultimateWord,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::German => "de",
            Language::Dutch => "nl",
        }
    }

    /// Verb slot for verb-final orders with an auxiliary.
    pub fn aux_cluster_slot(self) -> ClusterSlot {
        match self {
            Language::German => ClusterSlot::PenultimateWord,
            Language::Dutch => ClusterSlot::LastWord,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "de" | "german" => Ok(Language::German),
            "nl" | "dutch" => Ok(Language::Dutch),
            other => Err(ConfigError::UnsupportedLanguage(other.to_string())),
        }
    }
}
