use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which per-file quantity is ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Number of extracted pairs.
    #[default]
    PairCount,
    /// Sum of the word counts of every extracted value.
    ValueWordCount,
}

impl Mode {
    /// Report file used when no explicit output path is configured.
    #[must_use]
    pub fn default_output(self) -> PathBuf {
        match self {
            Self::PairCount => PathBuf::from("js_key_value_count.txt"),
            Self::ValueWordCount => PathBuf::from("js_value_word_count.txt"),
        }
    }

    /// Unit label printed after a metric in the text report.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::PairCount => "pairs",
            Self::ValueWordCount => "words",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}
