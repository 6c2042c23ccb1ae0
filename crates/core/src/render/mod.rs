//! # Renderer
//!
//! Turns a catalog, or a single entry, into text. Every format emits the same
//! three parts per entry in ordinal order: a heading with ordinal and title,
//! the explanation, and the code sample.
//!
//! Rendering is pure: it borrows the store, returns a `String`, and performs
//! no I/O. Writing the text somewhere is the caller's job.

mod json;
pub(crate) mod markdown;
mod plain;

use crate::catalog::CatalogStore;
use crate::error::{CatalogError, Result};
use crate::models::TipEntry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output styles understood by the renderer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// Numbered headings and indented samples, no markup
    Plain,
    /// `##` headings and fenced code blocks
    #[default]
    Markdown,
    /// Array of entry objects
    Json,
}

impl RenderFormat {
    pub fn all() -> Vec<RenderFormat> {
        vec![RenderFormat::Plain, RenderFormat::Markdown, RenderFormat::Json]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }

    /// Conventional file extension for output written in this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Plain => "txt",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

impl FromStr for RenderFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" | "txt" => Ok(Self::Plain),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(CatalogError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation settings for the text formats
///
/// JSON output ignores both fields so that it always parses back into the
/// exact entries it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Document title emitted once before the first entry
    #[serde(default)]
    pub title: Option<String>,
    /// Info string for Markdown code fences (e.g. `csharp`)
    #[serde(default)]
    pub code_language: Option<String>,
}

/// Render the whole catalog with default options
pub fn render_all(store: &CatalogStore, format: RenderFormat) -> Result<String> {
    render_all_with(store, format, &RenderOptions::default())
}

/// Render the whole catalog
pub fn render_all_with(
    store: &CatalogStore,
    format: RenderFormat,
    options: &RenderOptions,
) -> Result<String> {
    tracing::debug!(format = %format, entries = store.len(), "Rendering catalog");

    match format {
        RenderFormat::Plain => Ok(plain::render_document(store.all(), options)),
        RenderFormat::Markdown => Ok(markdown::render_document(store.all(), options)),
        RenderFormat::Json => json::render_document(store.all()),
    }
}

/// Render the whole catalog, naming the format as text
///
/// Unknown names fail with `UnsupportedFormat` before any output is built.
pub fn render_all_named(store: &CatalogStore, format: &str) -> Result<String> {
    render_all(store, format.parse()?)
}

/// Render a single entry with default options
pub fn render_one(entry: &TipEntry, format: RenderFormat) -> Result<String> {
    render_one_with(entry, format, &RenderOptions::default())
}

/// Render a single entry; the per-entry step `render_all_with` builds on
pub fn render_one_with(
    entry: &TipEntry,
    format: RenderFormat,
    options: &RenderOptions,
) -> Result<String> {
    match format {
        RenderFormat::Plain => Ok(plain::render_entry(entry)),
        RenderFormat::Markdown => Ok(markdown::render_entry(entry, options)),
        RenderFormat::Json => json::render_entry(entry),
    }
}
