use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How result triplets are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `pattern text offset`, space separated
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Front end configuration, read from an optional JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontEndConfig {
    /// ASCII-lowercase texts and patterns before indexing
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,

    /// Search patterns in parallel once a manifest lists at least this many
    #[serde(default = "default_parallel_search_threshold")]
    pub parallel_search_threshold: usize,

    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_lowercase() -> bool {
    true
}

fn default_parallel_search_threshold() -> usize {
    64
}

impl Default for FrontEndConfig {
    fn default() -> Self {
        Self {
            lowercase: default_lowercase(),
            parallel_search_threshold: default_parallel_search_threshold(),
            output_format: OutputFormat::default(),
        }
    }
}

impl FrontEndConfig {
    /// Load config from `path`, or return the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FrontEndConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_path() {
        let config = FrontEndConfig::load(None).unwrap();
        assert!(config.lowercase);
        assert_eq!(config.parallel_search_threshold, 64);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"lowercase": false, "output_format": "json"}"#).unwrap();

        let config = FrontEndConfig::load(Some(&path)).unwrap();
        assert!(!config.lowercase);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.parallel_search_threshold, 64);
    }

    #[test]
    fn test_malformed_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FrontEndConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
