//! # Configuration
//!
//! Settings persisted as JSON in `<runtime>/config.json`. Every field in the
//! file is optional; anything left out falls back to the defaults below, and
//! command-line flags are merged on top.

use crate::io;
use crate::loader::LoaderConfig;
use crate::render::{RenderFormat, RenderOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipbookConfig {
    /// Catalog to load when no source is given (file or directory)
    pub source: PathBuf,
    /// Output format when none is requested
    pub default_format: RenderFormat,
    /// Document title for plain and Markdown output
    pub title: Option<String>,
    /// Markdown fence info string
    pub code_language: Option<String>,
    /// Glob patterns selecting files when `source` is a directory
    pub include: Vec<String>,
}

impl Default for TipbookConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("tips.json"),
            default_format: RenderFormat::Markdown,
            title: None,
            code_language: None,
            include: LoaderConfig::default().include,
        }
    }
}

/// Sparse settings, as stored on disk or given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<RenderFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
}

impl TipbookConfig {
    /// Path of the config file inside the runtime directory
    pub fn default_path() -> PathBuf {
        io::get_runtime_path().join(CONFIG_FILE)
    }

    /// Load from the runtime directory, or defaults when no file exists
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    /// Load from a specific file, or defaults when it does not exist
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::default();

        if path.exists() {
            let content = io::read_file(path)?;
            let stored: PartialConfig = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            config.merge(stored);
            tracing::debug!(path = %path.display(), "Loaded config");
        }

        Ok(config)
    }

    /// Write the full settings as JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to encode config")?;
        io::write_file(path, &content)
    }

    /// Apply every field that `other` sets
    pub fn merge(&mut self, other: PartialConfig) {
        if let Some(source) = other.source {
            self.source = source;
        }
        if let Some(format) = other.default_format {
            self.default_format = format;
        }
        if other.title.is_some() {
            self.title = other.title;
        }
        if other.code_language.is_some() {
            self.code_language = other.code_language;
        }
        if let Some(include) = other.include {
            self.include = include;
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self.title.clone(),
            code_language: self.code_language.clone(),
        }
    }

    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            include: self.include.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TipbookConfig::load_from(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, TipbookConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        io::write_file(&path, r#"{"default_format": "plain", "code_language": "csharp"}"#).unwrap();

        let config = TipbookConfig::load_from(&path).unwrap();
        assert_eq!(config.default_format, RenderFormat::Plain);
        assert_eq!(config.code_language.as_deref(), Some("csharp"));
        assert_eq!(config.source, PathBuf::from("tips.json"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        io::write_file(&path, r#"{"default_format": "xml"}"#).unwrap();

        assert!(TipbookConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = TipbookConfig::default();
        config.title = Some("C# Tips".into());

        config.save_to(&path).unwrap();
        assert_eq!(TipbookConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_merge_only_overrides_set_fields() {
        let mut config = TipbookConfig {
            title: Some("Old".into()),
            ..TipbookConfig::default()
        };
        config.merge(PartialConfig {
            default_format: Some(RenderFormat::Json),
            ..PartialConfig::default()
        });

        assert_eq!(config.default_format, RenderFormat::Json);
        assert_eq!(config.title.as_deref(), Some("Old"));
    }
}
