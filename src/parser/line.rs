//! Per-line helpers: strip comment decoration, then detect `@key` openers.

use regex::Regex;
use std::sync::LazyLock;

// Optional indentation, optional `/`, a run of `*`, whitespace, content.
static RE_LEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*/?\*+\s*(.*)$").unwrap());

static RE_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@(\w+)(.*)$").unwrap());

/// Strip the `/**`, `*` or `*/` leader from one physical line.
///
/// Returns `None` for lines without a leader and for the closing `*/`
/// (whose remainder is a lone `/`). Otherwise the trimmed remainder, which
/// may be empty.
pub fn normalize(line: &str) -> Option<&str> {
    let caps = RE_LEADER.captures(line)?;
    let content = caps.get(1).map_or("", |m| m.as_str()).trim();
    if content == "/" {
        return None;
    }
    Some(content)
}

/// Split normalized content into `(key, value)` when it opens an annotation.
///
/// The value is the trimmed rest of the line and may be empty.
pub fn match_annotation(content: &str) -> Option<(&str, &str)> {
    let caps = RE_ANNOTATION.captures(content)?;
    let key = caps.get(1)?.as_str();
    let value = caps.get(2).map_or("", |m| m.as_str()).trim();
    Some((key, value))
}
