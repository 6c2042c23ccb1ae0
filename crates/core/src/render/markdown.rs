//! Markdown: `##` headings per entry, samples in fenced code blocks.
//!
//! Explanation lines that would read back as structure (an entry heading or
//! a fence) get a backslash in front; the Markdown loader removes it again.

use super::RenderOptions;
use crate::models::TipEntry;
use once_cell::sync::Lazy;
use regex::Regex;

const MIN_FENCE: usize = 3;

static RE_NEEDS_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]{0,3})(\\*[`~#])").expect("valid regex"));
static RE_ESCAPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]{0,3})\\(\\*[`~#])").expect("valid regex"));

pub(super) fn render_document(entries: &[TipEntry], options: &RenderOptions) -> String {
    let mut out = String::new();

    if let Some(title) = options.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        out.push_str("# ");
        out.push_str(title);
        out.push_str("\n\n");
    }

    let blocks: Vec<String> = entries
        .iter()
        .map(|entry| render_entry(entry, options))
        .collect();
    out.push_str(&blocks.join("\n"));
    out
}

pub(super) fn render_entry(entry: &TipEntry, options: &RenderOptions) -> String {
    let mut out = format!("## {}\n\n", entry.heading());

    let explanation = entry.explanation().trim();
    if !explanation.is_empty() {
        for line in explanation.split('\n') {
            out.push_str(&escape_line(line));
            out.push('\n');
        }
        out.push('\n');
    }

    // The sample is always followed by exactly one newline before the
    // closing fence; the loader strips that one back off.
    let fence = fence_for(entry.sample());
    out.push_str(&fence);
    if let Some(lang) = options.code_language.as_deref() {
        out.push_str(lang.trim());
    }
    out.push('\n');
    out.push_str(entry.sample());
    out.push('\n');
    out.push_str(&fence);
    out.push('\n');

    out
}

/// Backslash-escape a line that starts with `#`, a backtick or `~`
pub(crate) fn escape_line(line: &str) -> std::borrow::Cow<'_, str> {
    RE_NEEDS_ESCAPE.replace(line, "${1}\\${2}")
}

/// Undo `escape_line`
pub(crate) fn unescape_line(line: &str) -> std::borrow::Cow<'_, str> {
    RE_ESCAPED.replace(line, "${1}${2}")
}

/// A backtick fence longer than any backtick run inside `sample`
fn fence_for(sample: &str) -> String {
    let longest_run = sample
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat((longest_run + 1).max(MIN_FENCE))
}
