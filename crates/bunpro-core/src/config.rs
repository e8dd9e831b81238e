//! Conversion options, loadable from a JSON file

use crate::error::{Error, Result};
use crate::merger::BlankGrammarPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Export read when no input is given
pub const DEFAULT_INPUT: &str = "bunpro.tsv";

/// File written when no output is given
pub const DEFAULT_OUTPUT: &str = "brunpro_results.csv";

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Tab-separated Anki export to read
    pub input: PathBuf,
    /// CSV file to write
    pub output: PathBuf,
    /// Grouping of rows with a blank `Grammar` value
    pub blank_grammar: BlankGrammarPolicy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            blank_grammar: BlankGrammarPolicy::default(),
        }
    }
}

impl ConvertOptions {
    /// Options for the given input and output, everything else default
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    /// Load options from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save options as JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content).map_err(|e| Error::FileWrite {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::default();
        assert_eq!(options.input, PathBuf::from("bunpro.tsv"));
        assert_eq!(options.output, PathBuf::from("brunpro_results.csv"));
        assert_eq!(options.blank_grammar, BlankGrammarPolicy::Group);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let options: ConvertOptions = serde_json::from_str(r#"{"blank_grammar": "keep"}"#).unwrap();
        assert_eq!(options.blank_grammar, BlankGrammarPolicy::Keep);
        assert_eq!(options.input, PathBuf::from(DEFAULT_INPUT));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convert.json");

        let mut options = ConvertOptions::new("deck.tsv", "notion.csv");
        options.blank_grammar = BlankGrammarPolicy::Keep;
        options.save(&path).unwrap();

        assert_eq!(ConvertOptions::load(&path).unwrap(), options);
    }

    #[test]
    fn test_load_missing() {
        assert!(matches!(
            ConvertOptions::load("missing-config.json"),
            Err(Error::FileRead { .. })
        ));
    }
}
