//! # Catalog Store
//!
//! Holds the ordered, read-only sequence of tips. Built once from whatever
//! the loader produced; there is no way to add, change or remove entries
//! afterwards.

use crate::error::{CatalogError, Result, ValidationError};
use crate::models::TipEntry;
use std::collections::HashSet;

/// Immutable catalog of tips, kept in ordinal order
#[derive(Debug, Clone)]
pub struct CatalogStore {
    entries: Vec<TipEntry>,
}

impl CatalogStore {
    /// Build a store from loader output
    ///
    /// Entries are ordered by ordinal without being renumbered. Fails when the
    /// input is empty, an ordinal repeats or is zero, or a title is blank.
    pub fn load(entries: impl IntoIterator<Item = TipEntry>) -> Result<Self> {
        let mut entries: Vec<TipEntry> = entries.into_iter().collect();
        validate(&entries)?;

        entries.sort_by_key(TipEntry::ordinal);
        tracing::debug!(count = entries.len(), "Catalog loaded");

        Ok(Self { entries })
    }

    /// All entries in ordinal order
    pub fn all(&self) -> &[TipEntry] {
        &self.entries
    }

    /// Look up a single entry by ordinal
    pub fn get(&self, ordinal: u32) -> Result<&TipEntry> {
        self.entries
            .binary_search_by_key(&ordinal, TipEntry::ordinal)
            .map(|idx| &self.entries[idx])
            .map_err(|_| CatalogError::NotFound(ordinal))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a loaded store
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ordinals in display order
    pub fn ordinals(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(TipEntry::ordinal)
    }
}

impl<'a> IntoIterator for &'a CatalogStore {
    type Item = &'a TipEntry;
    type IntoIter = std::slice::Iter<'a, TipEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn validate(entries: &[TipEntry]) -> std::result::Result<(), ValidationError> {
    if entries.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if entry.ordinal() == 0 {
            return Err(ValidationError::ZeroOrdinal);
        }
        if !seen.insert(entry.ordinal()) {
            return Err(ValidationError::DuplicateOrdinal(entry.ordinal()));
        }
        if entry.title().trim().is_empty() {
            return Err(ValidationError::BlankTitle(entry.ordinal()));
        }
        if entry.title().contains(['\n', '\r']) {
            return Err(ValidationError::MultiLineTitle(entry.ordinal()));
        }
    }

    Ok(())
}
