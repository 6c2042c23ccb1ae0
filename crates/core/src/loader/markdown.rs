//! Markdown tip documents.
//!
//! An entry opens at a heading of the form `## 3. Title` (any level, `.` or
//! `)` after the number). Everything up to the next entry heading is its
//! explanation, except the first fenced code block, which becomes the sample.
//! Headings inside fenced blocks are ignored, and text before the first entry
//! is skipped. Backslash escapes written by the Markdown renderer are removed
//! from explanation lines.

use crate::error::{CatalogError, Result};
use crate::models::TipEntry;
use crate::render::markdown::unescape_line;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_ENTRY_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t]{0,3}#{1,6}\s+(\d+)[.)]\s+(.+?)(?:\s+#+)?\s*$").expect("valid regex")
});
static RE_FENCE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]{0,3}(`{3,}|~{3,})").expect("valid regex"));

/// Decode a Markdown tip document into entries, in document order
pub fn parse_markdown(text: &str) -> Result<Vec<TipEntry>> {
    let mut entries = Vec::new();
    let mut current: Option<Draft> = None;
    let mut fence: Option<OpenFence> = None;

    for raw in text.split_inclusive('\n') {
        let line = strip_line_ending(raw);

        if let Some(mut open) = fence.take() {
            open.lines.push(raw);
            if open.closes_on(line) {
                if let Some(draft) = current.as_mut() {
                    draft.take_block(open, true);
                }
            } else {
                fence = Some(open);
            }
            continue;
        }

        if let Some(caps) = RE_FENCE_OPEN.captures(line) {
            let marker = &caps[1];
            fence = Some(OpenFence {
                marker_char: marker.chars().next().unwrap_or('`'),
                marker_len: marker.len(),
                lines: vec![raw],
            });
            continue;
        }

        if let Some(caps) = RE_ENTRY_HEADING.captures(line) {
            if let Some(draft) = current.take() {
                entries.push(draft.finish());
            }
            let ordinal = caps[1]
                .parse::<u32>()
                .map_err(|e| CatalogError::Parse(format!("bad ordinal `{}`: {}", &caps[1], e)))?;
            current = Some(Draft::new(ordinal, caps[2].to_string()));
            continue;
        }

        if let Some(draft) = current.as_mut() {
            draft.text.push(unescape_line(line).into_owned());
        }
    }

    // An unterminated fence runs to the end of the document
    if let (Some(open), Some(draft)) = (fence, current.as_mut()) {
        draft.take_block(open, false);
    }
    if let Some(draft) = current {
        entries.push(draft.finish());
    }

    Ok(entries)
}

fn strip_line_ending(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

struct OpenFence<'a> {
    marker_char: char,
    marker_len: usize,
    /// Raw lines with their endings: opening, body, and closing once seen
    lines: Vec<&'a str>,
}

impl OpenFence<'_> {
    fn closes_on(&self, line: &str) -> bool {
        let trimmed = line.trim();
        let run = trimmed.chars().take_while(|&c| c == self.marker_char).count();
        run >= self.marker_len && run == trimmed.chars().count()
    }

    /// Body text exactly as written, minus the one line ending that precedes
    /// the closing fence
    fn body(&self, closed: bool) -> String {
        let end = if closed { self.lines.len() - 1 } else { self.lines.len() };
        let mut body: String = self.lines[1..end].concat();
        if closed {
            if body.ends_with("\r\n") {
                body.truncate(body.len() - 2);
            } else if body.ends_with('\n') {
                body.pop();
            }
        }
        body
    }
}

struct Draft {
    ordinal: u32,
    title: String,
    text: Vec<String>,
    sample: Option<String>,
}

impl Draft {
    fn new(ordinal: u32, title: String) -> Self {
        Self {
            ordinal,
            title,
            text: Vec::new(),
            sample: None,
        }
    }

    /// The first block is the sample; later ones stay in the explanation
    fn take_block(&mut self, fence: OpenFence<'_>, closed: bool) {
        if self.sample.is_none() {
            self.sample = Some(fence.body(closed));
        } else {
            self.text
                .extend(fence.lines.iter().map(|l| strip_line_ending(l).to_string()));
        }
    }

    fn finish(self) -> TipEntry {
        let explanation = self.text.join("\n").trim().to_string();
        TipEntry::new(
            self.ordinal,
            self.title,
            explanation,
            self.sample.unwrap_or_default(),
        )
    }
}
