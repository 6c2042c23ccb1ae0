//! # Tipbook Core
//!
//! Storage, loading and rendering for catalogs of numbered tips: a title,
//! a short explanation and a code sample per entry.
//!
//! ## Architecture
//!
//! - `models` - The immutable `TipEntry` record
//! - `catalog` - `CatalogStore`, the ordered read-only collection
//! - `render` - Plain text, Markdown and JSON output
//! - `loader` - Reads entries from JSON files, Markdown documents and directories
//! - `config` - Persisted settings in the `.tipbook` runtime directory
//! - `io` - Runtime directory helpers
//! - `seed` - Starter config and catalog for new projects
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tipbook_core::catalog::CatalogStore;
//! use tipbook_core::render::{render_all, RenderFormat};
//!
//! let entries = tipbook_core::loader::load_path("tips.json".as_ref(), &Default::default())?;
//! let store = CatalogStore::load(entries)?;
//! println!("{}", render_all(&store, RenderFormat::Markdown)?);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod io;
pub mod loader;
pub mod models;
pub mod render;
pub mod seed;

pub use catalog::CatalogStore;
pub use error::{CatalogError, ValidationError};
pub use models::TipEntry;
pub use render::{RenderFormat, RenderOptions};
