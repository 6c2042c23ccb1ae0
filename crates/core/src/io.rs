//! # IO Utilities
//!
//! File system operations for the `.tipbook` runtime directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that relocates the runtime directory
pub const RUNTIME_PATH_ENV: &str = "TIPBOOK_HOME";

/// Get the runtime directory path (.tipbook)
pub fn get_runtime_path() -> PathBuf {
    if let Ok(path) = std::env::var(RUNTIME_PATH_ENV) {
        return PathBuf::from(path);
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".tipbook")
}

/// Ensure the runtime directory exists
pub fn ensure_runtime_dir() -> Result<PathBuf> {
    let path = get_runtime_path();
    fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create runtime directory: {:?}", path))?;
    Ok(path)
}

/// Read a whole file as UTF-8
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
}

/// Write a file, creating parent directories as needed
pub fn write_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write file: {:?}", path))
}

/// Write a file only when nothing exists at `path`; returns whether it wrote
pub fn write_if_absent(path: impl AsRef<Path>, content: &str) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }
    write_file(path, content)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parents_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/tips.json");

        write_file(&path, "[]").unwrap();
        assert_eq!(read_file(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_if_absent_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert!(write_if_absent(&path, "first").unwrap());
        assert!(!write_if_absent(&path, "second").unwrap());
        assert_eq!(read_file(&path).unwrap(), "first");
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path().join("absent.md")).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.md"));
    }
}
