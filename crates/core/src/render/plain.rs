//! Plain text: no markup, samples set off by indentation.

use super::RenderOptions;
use crate::models::TipEntry;

const SAMPLE_INDENT: &str = "    ";

pub(super) fn render_document(entries: &[TipEntry], options: &RenderOptions) -> String {
    let mut out = String::new();

    if let Some(title) = options.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        out.push_str(title);
        out.push('\n');
        out.push_str(&"=".repeat(title.chars().count()));
        out.push_str("\n\n");
    }

    let blocks: Vec<String> = entries.iter().map(render_entry).collect();
    out.push_str(&blocks.join("\n"));
    out
}

pub(super) fn render_entry(entry: &TipEntry) -> String {
    let mut out = entry.heading();
    out.push('\n');

    let explanation = entry.explanation().trim();
    if !explanation.is_empty() {
        out.push('\n');
        out.push_str(explanation);
        out.push('\n');
    }

    if !entry.sample().is_empty() {
        out.push('\n');
        // Line endings, `\r` included, are copied through untouched
        for line in entry.sample().split_inclusive('\n') {
            if !line.trim_end_matches(['\n', '\r']).is_empty() {
                out.push_str(SAMPLE_INDENT);
            }
            out.push_str(line);
        }
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_layout() {
        let tip = TipEntry::new(
            3,
            "Prefer string interpolation",
            "Reads better than concatenation.",
            "var s = $\"{a} {b}\";\n\nConsole.WriteLine(s);",
        );
        assert_eq!(
            render_entry(&tip),
            "3. Prefer string interpolation\n\
             \n\
             Reads better than concatenation.\n\
             \n    var s = $\"{a} {b}\";\n\
             \n    Console.WriteLine(s);\n"
        );
    }

    #[test]
    fn test_carriage_returns_are_kept() {
        let tip = TipEntry::new(1, "Windows sample", "", "a();\r\n\r\nb();\r\n");
        assert_eq!(render_entry(&tip), "1. Windows sample\n\n    a();\r\n\r\n    b();\r\n");
    }

    #[test]
    fn test_title_is_underlined() {
        let options = RenderOptions {
            title: Some("C# Tips".into()),
            code_language: None,
        };
        let text = render_document(&[TipEntry::new(1, "a", "", "")], &options);
        assert!(text.starts_with("C# Tips\n=======\n\n1. a\n"));
    }

    #[test]
    fn test_no_markup() {
        let text = render_entry(&TipEntry::new(1, "Use LINQ", "Why.", "var x = a.Where(...)"));
        assert!(!text.contains("```"));
        assert!(!text.contains('#'));
    }
}
