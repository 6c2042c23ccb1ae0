//! Directory sources: every file whose path relative to the directory matches
//! an include glob, loaded in sorted path order and concatenated. `*` also
//! crosses `/`, so `*.md` picks up nested files. Respects `.gitignore`.

use super::{load_file, LoaderConfig, SourceKind};
use crate::models::TipEntry;
use anyhow::{Context, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};

pub(super) fn load_dir(dir: &Path, config: &LoaderConfig) -> Result<Vec<TipEntry>> {
    let patterns = config
        .include
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid include pattern: {}", p)))
        .collect::<Result<Vec<_>>>()?;

    let mut files = collect_files(dir, &patterns)?;
    files.sort();

    let mut entries = Vec::new();
    for path in &files {
        if SourceKind::from_path(path).is_none() {
            tracing::warn!(path = %path.display(), "Skipping file with unrecognized extension");
            continue;
        }
        entries.extend(load_file(path)?);
    }

    tracing::debug!(dir = %dir.display(), files = files.len(), count = entries.len(), "Loaded tip directory");
    Ok(entries)
}

fn collect_files(dir: &Path, patterns: &[Pattern]) -> Result<Vec<PathBuf>> {
    let walker = ignore::WalkBuilder::new(dir)
        .hidden(true)
        .git_ignore(true)
        .require_git(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk directory: {:?}", dir))?;
        let path = entry.path();

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let relative = path.strip_prefix(dir).unwrap_or(path);
        if patterns.iter().any(|p| p.matches_path(relative)) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io;

    #[test]
    fn test_mixed_sources_in_path_order() {
        let dir = tempfile::tempdir().unwrap();
        io::write_file(
            dir.path().join("b_more.md"),
            "## 3. Third\n\nc\n\n```\nthree\n```\n",
        )
        .unwrap();
        io::write_file(
            dir.path().join("a_first.json"),
            r#"[
                {"ordinal": 1, "title": "First", "explanation": "", "sample": ""},
                {"ordinal": 2, "title": "Second", "explanation": "", "sample": ""}
            ]"#,
        )
        .unwrap();
        io::write_file(dir.path().join("notes.txt"), "ignored").unwrap();

        let entries = load_dir(dir.path(), &LoaderConfig::default()).unwrap();
        let titles: Vec<&str> = entries.iter().map(TipEntry::title).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_include_patterns_filter_files() {
        let dir = tempfile::tempdir().unwrap();
        io::write_file(
            dir.path().join("tips.json"),
            r#"[{"ordinal": 1, "title": "Json", "explanation": "", "sample": ""}]"#,
        )
        .unwrap();
        io::write_file(dir.path().join("sub/tips.md"), "## 2. Markdown\n").unwrap();

        let config = LoaderConfig {
            include: vec!["*.md".into()],
        };
        let entries = load_dir(dir.path(), &config).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title(), "Markdown");
    }

    #[test]
    fn test_include_patterns_match_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        io::write_file(dir.path().join("chapters/one.md"), "## 1. Chapter\n").unwrap();
        io::write_file(dir.path().join("drafts/two.md"), "## 2. Draft\n").unwrap();

        let config = LoaderConfig {
            include: vec!["chapters/*.md".into()],
        };
        let entries = load_dir(dir.path(), &config).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title(), "Chapter");
    }

    #[test]
    fn test_gitignored_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        io::write_file(dir.path().join(".gitignore"), "drafts/\n").unwrap();
        io::write_file(dir.path().join("drafts/wip.md"), "## 9. Draft\n").unwrap();
        io::write_file(dir.path().join("tips.md"), "## 1. Kept\n").unwrap();

        let entries = load_dir(dir.path(), &LoaderConfig::default()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].ordinal(), 1);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoaderConfig {
            include: vec!["[".into()],
        };
        assert!(load_dir(dir.path(), &config).is_err());
    }

    #[test]
    fn test_broken_file_names_its_path() {
        let dir = tempfile::tempdir().unwrap();
        io::write_file(dir.path().join("broken.json"), "{not json").unwrap();

        let err = load_dir(dir.path(), &LoaderConfig::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));
    }
}
