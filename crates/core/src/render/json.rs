//! JSON: the entries as an array of flat objects, the same shape the loader
//! reads back in.

use crate::error::{CatalogError, Result};
use crate::models::TipEntry;

pub(super) fn render_document(entries: &[TipEntry]) -> Result<String> {
    let mut out =
        serde_json::to_string_pretty(entries).map_err(|e| CatalogError::Encode(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

pub(super) fn render_entry(entry: &TipEntry) -> Result<String> {
    let mut out =
        serde_json::to_string_pretty(entry).map_err(|e| CatalogError::Encode(e.to_string()))?;
    out.push('\n');
    Ok(out)
}
