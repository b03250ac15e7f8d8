//! Report configuration, loadable from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::render::SpliceMode;
use crate::types::{IndexError, IndexResult, OccurrencePolicy};

/// Default extension of the documents read from the input folder.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Default HTML report title.
pub const DEFAULT_TITLE: &str = "Word Index";

/// Settings for one indexing run.
///
/// ```toml
/// sort_order = "iaf"
/// splice = "exact"
/// occurrences = "keep_all"
/// extension = "txt"
/// title = "Speeches"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// `iaf`, `fai` or `f`. Anything else keeps insertion order.
    pub sort_order: Option<String>,
    pub splice: SpliceMode,
    pub occurrences: OccurrencePolicy,
    /// Only files with this extension are read from the input folder.
    pub extension: String,
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sort_order: None,
            splice: SpliceMode::default(),
            occurrences: OccurrencePolicy::default(),
            extension: DEFAULT_EXTENSION.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ReportConfig {
    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> IndexResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| IndexError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> IndexResult<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> IndexResult<()> {
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(IndexError::Config("extension must not be empty".to_string()));
        }
        Ok(())
    }

    /// Extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(ReportConfig::from_toml_str("").unwrap(), ReportConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = ReportConfig::from_toml_str(
            r#"
            sort_order = "fai"
            splice = "legacy"
            occurrences = "drop_identical"
            extension = ".md"
            title = "Speeches"
            "#,
        )
        .unwrap();
        assert_eq!(config.sort_order.as_deref(), Some("fai"));
        assert_eq!(config.splice, SpliceMode::Legacy);
        assert_eq!(config.occurrences, OccurrencePolicy::DropIdentical);
        assert_eq!(config.extension(), "md");
        assert_eq!(config.title, "Speeches");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            ReportConfig::from_toml_str("splice = \"sideways\""),
            Err(IndexError::Config(_))
        ));
        assert!(matches!(
            ReportConfig::from_toml_str("extension = \".\""),
            Err(IndexError::Config(_))
        ));
    }
}
