//! # Loader
//!
//! Supplies catalog entries from files. A source is a JSON array of entry
//! records, a Markdown tip document, or a directory holding any mix of them.
//! The loader only decodes; ordering and validation belong to `CatalogStore`.

mod dir;
mod json;
mod markdown;

pub use json::parse_json;
pub use markdown::parse_markdown;

use crate::io;
use crate::models::TipEntry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for directory sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Glob patterns, matched against paths relative to the source directory
    pub include: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            include: vec!["*.json".into(), "*.md".into(), "*.markdown".into()],
        }
    }
}

/// Kind of input a file holds, from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Json,
    Markdown,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// Load entries from a file or directory
pub fn load_path(path: &Path, config: &LoaderConfig) -> Result<Vec<TipEntry>> {
    if path.is_dir() {
        return dir::load_dir(path, config);
    }
    load_file(path)
}

/// Load entries from a single file
pub fn load_file(path: &Path) -> Result<Vec<TipEntry>> {
    let kind = SourceKind::from_path(path)
        .with_context(|| format!("Unrecognized tip source (expected .json or .md): {:?}", path))?;
    let content = io::read_file(path)?;

    let entries = match kind {
        SourceKind::Json => parse_json(&content),
        SourceKind::Markdown => parse_markdown(&content),
    }
    .with_context(|| format!("Failed to load tips from {:?}", path))?;

    tracing::debug!(path = %path.display(), count = entries.len(), "Loaded tip source");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use crate::render::{render_all, RenderFormat};

    #[test]
    fn test_source_kind_from_extension() {
        assert_eq!(SourceKind::from_path(Path::new("tips.json")), Some(SourceKind::Json));
        assert_eq!(SourceKind::from_path(Path::new("TIPS.MD")), Some(SourceKind::Markdown));
        assert_eq!(SourceKind::from_path(Path::new("a.markdown")), Some(SourceKind::Markdown));
        assert_eq!(SourceKind::from_path(Path::new("tips.yaml")), None);
        assert_eq!(SourceKind::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_unknown_extension_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tips.yaml");
        io::write_file(&path, "- 1").unwrap();

        let err = load_path(&path, &LoaderConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Unrecognized tip source"));
    }

    #[test]
    fn test_rendered_json_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::load(vec![
            TipEntry::new(1, "Use LINQ", "Declarative queries.", "var x = a.Where(...)"),
            TipEntry::new(2, "Use using", "Deterministic disposal.", "using(...){}"),
        ])
        .unwrap();
        let path = dir.path().join("out.json");
        io::write_file(&path, &render_all(&store, RenderFormat::Json).unwrap()).unwrap();

        let loaded = load_path(&path, &LoaderConfig::default()).unwrap();
        assert_eq!(loaded, store.all());
    }

    #[test]
    fn test_rendered_markdown_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::load(vec![
            TipEntry::new(1, "Use LINQ", "Declarative queries.", "var x = a.Where(...)"),
            TipEntry::new(2, "Use using", "Deterministic disposal.", "using (var f = Open())\n{\n}"),
        ])
        .unwrap();
        let path = dir.path().join("out.md");
        io::write_file(&path, &render_all(&store, RenderFormat::Markdown).unwrap()).unwrap();

        let loaded = load_path(&path, &LoaderConfig::default()).unwrap();
        assert_eq!(loaded, store.all());
    }

    #[test]
    fn test_markdown_round_trip_keeps_text_exact() {
        let store = CatalogStore::load(vec![
            TipEntry::new(
                1,
                "Use LINQ",
                "Instead of:\n```\nforeach (var p in people) { }\n```\nwrite:",
                "var x = a.Where(...)",
            ),
            TipEntry::new(2, "Steps", "Steps:\n## 3. Not a tip\n\\# literal\nend", "step();\n"),
            TipEntry::new(4, "Windows endings", "CRLF sample.", "a();\r\nb();\r\n"),
            TipEntry::new(5, "Empty sample", "Nothing to run.", ""),
        ])
        .unwrap();
        let text = render_all(&store, RenderFormat::Markdown).unwrap();

        let loaded = parse_markdown(&text).unwrap();
        assert_eq!(loaded, store.all());
    }
}
