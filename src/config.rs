//! Toolkit-wide configuration.
//!
//! Each engine carries its own config struct with sensible defaults;
//! [`ToolkitConfig`] bundles them so a single JSON file can tune everything.
//! Missing sections or fields fall back to their defaults.
//!
//! ```json
//! {
//!   "path": { "max_expansions": 5000 },
//!   "generator": { "seed": 42 }
//! }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::document::BenchmarkConfig;
use crate::error::{Result, WordsmithError};
use crate::spelling::{PathConfig, SuggestionConfig};
use crate::textgen::GeneratorConfig;

/// Default number of completions returned when none is requested.
pub const DEFAULT_COMPLETIONS: usize = 10;

/// Configuration for prefix completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Number of completions returned when the caller does not ask for a
    /// specific count.
    pub default_limit: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        CompletionConfig {
            default_limit: DEFAULT_COMPLETIONS,
        }
    }
}

/// All tunables of the toolkit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    pub completion: CompletionConfig,
    pub path: PathConfig,
    pub suggestion: SuggestionConfig,
    pub benchmark: BenchmarkConfig,
    pub generator: GeneratorConfig,
}

impl ToolkitConfig {
    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ToolkitConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.completion.default_limit == 0 {
            return Err(WordsmithError::config(
                "completion.default_limit must be at least 1",
            ));
        }
        self.benchmark.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ToolkitConfig::default();
        assert_eq!(config.completion.default_limit, 10);
        assert_eq!(config.path.max_expansions, 2000);
        assert_eq!(config.suggestion.max_visited, 1000);
        assert_eq!(config.benchmark.trials, 100);
        assert_eq!(config.generator.seed, None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ToolkitConfig::from_json(r#"{"generator": {"seed": 42}}"#).unwrap();
        assert_eq!(config.generator.seed, Some(42));
        assert_eq!(config.path.max_expansions, 2000);

        let config = ToolkitConfig::from_json(r#"{"benchmark": {"trials": 5}}"#).unwrap();
        assert_eq!(config.benchmark.trials, 5);
        assert_eq!(config.benchmark.start, 50_000);
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"path": {{"max_expansions": 7}}}}"#).unwrap();
        temp_file.flush().unwrap();

        let config = ToolkitConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.path.max_expansions, 7);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            ToolkitConfig::from_json("{not json"),
            Err(WordsmithError::Json(_))
        ));
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        assert!(matches!(
            ToolkitConfig::from_json(r#"{"completion": {"default_limit": 0}}"#),
            Err(WordsmithError::Config(_))
        ));
    }
}
