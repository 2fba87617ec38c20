//! Pipeline configuration.
//!
//! Paths are explicit parameters rather than process-wide constants. A config
//! can be loaded from JSON, and every field falls back to its default when
//! omitted:
//!
//! ```json
//! { "source_path": "exports/march.csv", "preview_rows": 10 }
//! ```

use crate::error::{CleanError, Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_PATH: &str = "data/raw/sales_data_raw.csv";
pub const DEFAULT_SINK_PATH: &str = "data/processed/sales_data_clean.csv";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Raw input table
    pub source_path: PathBuf,
    /// Where the cleaned table is written
    pub sink_path: PathBuf,
    /// Number of leading rows kept for the preview (0 disables it)
    pub preview_rows: usize,
    /// Create the sink's parent directory instead of failing when it is missing
    pub create_sink_dir: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            sink_path: PathBuf::from(DEFAULT_SINK_PATH),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            create_sink_dir: false,
        }
    }
}

impl PipelineConfig {
    pub fn new(source_path: impl Into<PathBuf>, sink_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            sink_path: sink_path.into(),
            ..Default::default()
        }
    }

    /// Load a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CleanError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content)
    }

    /// # Errors
    ///
    /// Returns [`CleanError::Config`] on malformed JSON or unknown value types.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs where reading and writing would target the same file.
    ///
    /// # Errors
    ///
    /// Returns [`CleanError::Config`] when source and sink are identical.
    pub fn validate(&self) -> Result<()> {
        if self.source_path == self.sink_path {
            return Err(CleanError::Config(format!(
                "source and sink are the same file: {}",
                self.source_path.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.source_path, PathBuf::from(DEFAULT_SOURCE_PATH));
        assert_eq!(config.sink_path, PathBuf::from(DEFAULT_SINK_PATH));
        assert_eq!(config.preview_rows, 5);
        assert!(!config.create_sink_dir);
    }

    #[test]
    fn test_partial_json_keeps_defaults() -> anyhow::Result<()> {
        let config = PipelineConfig::from_json(r#"{"source_path": "in.csv", "preview_rows": 2}"#)?;
        assert_eq!(config.source_path, PathBuf::from("in.csv"));
        assert_eq!(config.sink_path, PathBuf::from(DEFAULT_SINK_PATH));
        assert_eq!(config.preview_rows, 2);
        Ok(())
    }

    #[test]
    fn test_same_source_and_sink_rejected() {
        let result = PipelineConfig::from_json(r#"{"source_path": "a.csv", "sink_path": "a.csv"}"#);
        assert!(matches!(result, Err(CleanError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = PipelineConfig::from_json("{ not json");
        assert!(matches!(result, Err(CleanError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = PipelineConfig::from_file("definitely/not/here.json");
        let err = result.expect_err("missing config file should fail");
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
