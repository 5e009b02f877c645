use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());

/// Cleans text pulled out of a PDF text layer.
///
/// Applies NFKC (so ligatures like "ﬁ" become "fi"), joins words hyphenated
/// across line breaks, turns form feeds into paragraph breaks, drops other
/// control characters and collapses runs of blank lines and spaces.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .replace('\u{c}', "\n\n")
        .nfkc()
        .filter(|ch| !ch.is_control() || *ch == '\n' || *ch == '\t')
        .collect();
    let joined = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in joined.lines() {
        let collapsed = collapse_whitespace(line);
        if collapsed.is_empty() {
            flush_paragraph(&mut current, &mut paragraphs);
        } else {
            current.push(collapsed);
        }
    }
    flush_paragraph(&mut current, &mut paragraphs);

    paragraphs.join("\n\n")
}

fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn flush_paragraph(lines: &mut Vec<String>, paragraphs: &mut Vec<String>) {
    if !lines.is_empty() {
        paragraphs.push(lines.join("\n"));
        lines.clear();
    }
}
