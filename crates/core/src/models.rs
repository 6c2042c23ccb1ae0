//! # Tip Models
//!
//! The record every other module passes around. Fields are private so an
//! entry cannot change once built; the serialized form is the same flat
//! object for input files and JSON output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One catalog item: a numbered idiom with its explanation and code sample
///
/// ## Example
/// ```rust,ignore
/// use tipbook_core::TipEntry;
///
/// let tip = TipEntry::new(1, "Use LINQ", "Query collections declaratively.", "var x = a.Where(...)");
/// assert_eq!(tip.heading(), "1. Use LINQ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TipEntry {
    /// Display position, unique within a catalog, starting at 1
    ordinal: u32,
    /// Short label
    title: String,
    /// Free-form description of the idiom
    explanation: String,
    /// Example code, kept verbatim and never interpreted
    sample: String,
}

impl TipEntry {
    pub fn new(
        ordinal: u32,
        title: impl Into<String>,
        explanation: impl Into<String>,
        sample: impl Into<String>,
    ) -> Self {
        Self {
            ordinal,
            title: title.into(),
            explanation: explanation.into(),
            sample: sample.into(),
        }
    }

    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn sample(&self) -> &str {
        &self.sample
    }

    /// `"{ordinal}. {title}"`, the heading shared by every output format
    pub fn heading(&self) -> String {
        format!("{}. {}", self.ordinal, self.title.trim())
    }
}
