//! # Catalog Errors
//!
//! Typed failures raised by the catalog and the renderer. File and config
//! handling report through `anyhow` and wrap these where they apply.

use thiserror::Error;

/// Errors surfaced by catalog construction, lookup and rendering
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Input entries were rejected while building a store
    #[error("invalid catalog: {0}")]
    Validation(#[from] ValidationError),
    /// No entry carries the requested ordinal
    #[error("no tip with ordinal {0}")]
    NotFound(u32),
    /// The requested output format is not recognized
    #[error("unsupported render format `{0}` (expected one of: plain, markdown, json)")]
    UnsupportedFormat(String),
    /// Input records could not be decoded
    #[error("malformed tip records: {0}")]
    Parse(String),
    /// Rendered output could not be produced
    #[error("failed to encode output: {0}")]
    Encode(String),
}

/// Reasons a sequence of entries cannot become a catalog
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("catalog has no entries")]
    Empty,
    #[error("ordinal {0} appears more than once")]
    DuplicateOrdinal(u32),
    #[error("ordinals start at 1, found 0")]
    ZeroOrdinal,
    #[error("tip {0} has an empty title")]
    BlankTitle(u32),
    #[error("tip {0} has a title spanning more than one line")]
    MultiLineTitle(u32),
    #[error("record {position} is missing required field `{field}`")]
    MissingField { position: usize, field: &'static str },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
