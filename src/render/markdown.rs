//! GitHub-flavored markdown renderer.

use crate::model::*;
use crate::parameter::Parameter;
use crate::render::Renderer;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &SourceDoc) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", doc.source));

        for block in &doc.blocks {
            output.push_str(&render_block(block));
            output.push('\n');
        }

        output
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_block(block: &BlockDoc) -> String {
    let doc = &block.docblock;
    let mut lines: Vec<String> = Vec::new();

    match block.target {
        Some(ref target) => lines.push(format!("## {}\n", code_span(target))),
        None => lines.push(format!("## Line {}\n", block.line)),
    }

    if let Some(header) = doc.header() {
        lines.push(header);
        lines.push(String::new());
    }

    // Prose that follows the first annotation
    for text in doc
        .iter()
        .skip_while(|kv| kv.is_text())
        .filter(|kv| kv.is_text())
        .filter_map(Parameter::value)
    {
        lines.push(text.to_string());
        lines.push(String::new());
    }

    let attributes = doc.attributes();
    if !attributes.is_empty() {
        lines.push("#### Annotations\n".to_string());
        for kv in attributes {
            lines.push(render_annotation(kv));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Inline code whose fence is longer than any backtick run in `text`.
fn code_span(text: &str) -> String {
    let longest = text
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{} {} {}", fence, text, fence)
    } else {
        format!("{}{}{}", fence, text, fence)
    }
}

fn render_annotation(kv: &Parameter) -> String {
    let key = kv.key().unwrap_or_default();
    match kv.value() {
        // Continuation lines stay inside the list item
        Some(value) => format!("* **@{}** {}", key, value.replace('\n', "\n  ")),
        None => format!("* **@{}**", key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_heading_header_and_annotations() {
        let doc = SourceDoc::extract(
            "lib.php",
            "/**\n * Title\n *\n * Intro\n *\n * @param int $a\n *        the a\n * @internal\n *\n * Later prose\n */\nfunction f($a) {}\n",
        );
        let out = MarkdownRenderer.render(&doc);

        assert!(out.starts_with("# lib.php\n\n## `function f($a) {}`\n"));
        assert!(out.contains("Title\n\nIntro\n"));
        assert!(out.contains("Later prose\n"));
        assert!(out.contains("#### Annotations\n"));
        assert!(out.contains("* **@param** int $a\n  the a\n"));
        assert!(out.contains("* **@internal**\n"));
    }

    #[test]
    fn heading_fence_outgrows_backticks_in_target() {
        assert_eq!(code_span("class A {}"), "`class A {}`");
        assert_eq!(code_span("const T = `x`;"), "``const T = `x`;``");
        assert_eq!(code_span("s = ``raw``"), "``` s = ``raw`` ```");
        assert_eq!(code_span("`tpl`"), "`` `tpl` ``");

        let doc = SourceDoc::extract("t.js", "/** Tag */\nconst t = `a`;\n");
        assert!(MarkdownRenderer.render(&doc).contains("## ``const t = `a`;``\n"));
    }

    #[test]
    fn falls_back_to_line_heading() {
        let doc = SourceDoc::raw("stdin", "/**\n * @since 2.0\n */");
        let out = MarkdownRenderer.render(&doc);
        assert!(out.contains("## Line 1\n"));
        assert!(!out.contains("Title"));
    }
}
