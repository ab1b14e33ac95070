//! Plain-text renderer: one record per entry, blocks separated by a blank line.

use crate::model::*;
use crate::render::Renderer;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, doc: &SourceDoc) -> String {
        let mut out = String::new();

        for block in &doc.blocks {
            out.push_str(&format!("{}:{}\n", doc.source, block.line));
            for kv in &block.docblock {
                let line = match (kv.key(), kv.value()) {
                    (Some(key), Some(value)) => format!("@{} {}", key, value),
                    (Some(key), None) => format!("@{}", key),
                    (None, value) => value.unwrap_or_default().to_string(),
                };
                out.push_str(&line);
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_record() {
        let doc = SourceDoc::raw("stdin", "/**\n * Title\n *\n * @foo\n * @bar baz\n */");
        assert_eq!(
            TextRenderer.render(&doc),
            "stdin:1\nTitle\n@foo\n@bar baz\n\n"
        );
    }
}
