//! # Seeding
//!
//! Writes a starter config and a small example catalog so a fresh project
//! renders something straight away. Existing files are never overwritten.

use crate::config::TipbookConfig;
use crate::io;
use anyhow::Result;
use std::path::Path;

/// What `seed_defaults` created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub config_written: bool,
    pub catalog_written: bool,
}

/// Create the config file at `config_path` and the catalog at
/// `config.source` (relative to `project_dir`) when they do not exist yet
pub fn seed_defaults(config_path: &Path, project_dir: &Path) -> Result<SeedReport> {
    let config = TipbookConfig::load_from(config_path)?;

    let config_written = if config_path.exists() {
        false
    } else {
        config.save_to(config_path)?;
        true
    };

    let catalog_path = project_dir.join(&config.source);
    let catalog_written = io::write_if_absent(&catalog_path, DEFAULT_TIPS)?;

    let report = SeedReport {
        config_written,
        catalog_written,
    };
    tracing::info!(
        config = report.config_written,
        catalog = report.catalog_written,
        "Seeded project defaults"
    );
    Ok(report)
}

// ============================================================================
// Default Catalog Content
// ============================================================================

const DEFAULT_TIPS: &str = r#"[
  {
    "ordinal": 1,
    "title": "Use LINQ for collection queries",
    "explanation": "Filtering, projecting and ordering with LINQ states what you want instead of how to loop for it.",
    "sample": "var adults = people\n    .Where(p => p.Age >= 18)\n    .OrderBy(p => p.Name)\n    .ToList();"
  },
  {
    "ordinal": 2,
    "title": "Dispose resources with using",
    "explanation": "A using declaration releases the resource when the scope ends, even if an exception is thrown.",
    "sample": "using var reader = new StreamReader(path);\nvar text = reader.ReadToEnd();"
  },
  {
    "ordinal": 3,
    "title": "Prefer string interpolation",
    "explanation": "Interpolated strings keep values next to the text they appear in.",
    "sample": "var greeting = $\"Hello, {user.Name}! You have {count} new messages.\";"
  }
]
"#;
