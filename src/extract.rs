//! Locate `/** ... */` doc comments in source text.
//!
//! Stands in for a language runtime's reflection API: each comment is handed
//! to the parser verbatim, delimiters included.

use crate::docblock::DocSource;
use tracing::debug;

/// A doc comment found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// 1-based line of the opening `/**`
    pub line: usize,
    /// Comment text from `/**` through `*/`. A `*/` sharing its line with
    /// content is moved onto a line of its own.
    pub text: String,
    /// First non-blank line after the comment, usually the documented declaration
    pub target: Option<String>,
}

impl DocSource for Comment {
    fn doc_comment(&self) -> Option<&str> {
        Some(&self.text)
    }
}

/// Collect every doc comment in `source`, in order.
///
/// `/**/` is an empty ordinary comment and is skipped. Scanning stops at an
/// unterminated `/**`.
pub fn comments(source: &str) -> Vec<Comment> {
    let mut found = Vec::new();
    let mut offset = 0;
    let mut line = 1;

    while let Some(pos) = source[offset..].find("/**") {
        let start = offset + pos;
        let body = start + 3;
        line += source[offset..start].matches('\n').count();

        if source[body..].starts_with('/') {
            offset = body + 1;
            continue;
        }

        let Some(close) = source[body..].find("*/") else {
            debug!(line, "unterminated doc comment");
            break;
        };
        let end = body + close + 2;

        found.push(Comment {
            line,
            text: split_closing(&source[start..end]),
            target: find_target(&source[end..]),
        });

        line += source[start..end].matches('\n').count();
        offset = end;
    }

    debug!(comments = found.len(), "extracted doc comments");
    found
}

/// `/** @var int */` → `/** @var int\n */`, so the parser sees a terminator line.
fn split_closing(raw: &str) -> String {
    let body = &raw[..raw.len() - 2];
    let last = body.rsplit('\n').next().unwrap_or(body);
    if last.trim().chars().all(|c| c == '*') {
        return raw.to_string();
    }
    format!("{}\n */", body.trim_end())
}

fn find_target(rest: &str) -> Option<String> {
    let next = rest.lines().map(str::trim).find(|l| !l.is_empty())?;
    if next.starts_with("/*") || next.starts_with("//") {
        return None;
    }
    Some(next.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DocBlock, Parameter};

    #[test]
    fn finds_comments_with_lines_and_targets() {
        let src = "<?php\n\n/**\n * Foo\n */\nclass Foo\n{\n    /** @var int */\n    private $x;\n}\n";
        let found = comments(src);
        assert_eq!(found.len(), 2);

        assert_eq!(found[0].line, 3);
        assert_eq!(found[0].text, "/**\n * Foo\n */");
        assert_eq!(found[0].target.as_deref(), Some("class Foo"));

        assert_eq!(found[1].line, 8);
        assert_eq!(found[1].text, "/** @var int\n */");
        assert_eq!(found[1].target.as_deref(), Some("private $x;"));
    }

    #[test]
    fn skips_empty_block_comment() {
        let found = comments("a /**/ b\n/** real */\nfn x() {}\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "/** real\n */");
        assert_eq!(found[0].line, 2);
    }

    #[test]
    fn ignores_plain_block_comments() {
        assert!(comments("/* not docs */\nint x;\n").is_empty());
    }

    #[test]
    fn unterminated_comment_is_dropped() {
        let found = comments("/** ok */\nx\n/** never closed\n");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn closing_delimiter_moves_to_own_line() {
        assert_eq!(split_closing("/** @since 1 */"), "/** @since 1\n */");
        assert_eq!(split_closing("/**\n * Text\n * @x 1 */"), "/**\n * Text\n * @x 1\n */");
        assert_eq!(split_closing("/**\n * Text\n */"), "/**\n * Text\n */");
        assert_eq!(split_closing("/**\n * Text\n **/"), "/**\n * Text\n **/");
    }

    #[test]
    fn single_line_comment_parses_without_delimiter() {
        let found = comments("/** @var int */\nprivate $x;\n/**\n * @return bool */\n");
        let first = DocBlock::from_source(&found[0]);
        assert_eq!(first.all(), &[Parameter::annotation("var", Some("int"))]);
        let second = DocBlock::from_source(&found[1]);
        assert_eq!(second.first_value("return"), Some("bool"));
        assert_eq!(found[1].line, 3);
    }

    #[test]
    fn target_on_same_line_as_close() {
        let found = comments("/** Docs */ function f() {}\n");
        assert_eq!(found[0].target.as_deref(), Some("function f() {}"));
    }

    #[test]
    fn no_target_before_another_comment_or_eof() {
        let found = comments("/** a */\n/** b */\n");
        assert_eq!(found[0].target, None);
        assert_eq!(found[1].target, None);
    }
}
