//! JSON renderer — structured output for tooling integration.

use crate::model::*;
use crate::render::Renderer;
use serde_json::{json, Value};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &SourceDoc) -> String {
        let blocks: Vec<Value> = doc.blocks.iter().map(render_block).collect();
        let out = json!({
            "source": doc.source,
            "blocks": blocks,
        });
        format!("{:#}\n", out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

fn render_block(block: &BlockDoc) -> Value {
    let doc = &block.docblock;
    json!({
        "line": block.line,
        "target": block.target,
        "title": doc.title(),
        "header": doc.header(),
        "parameters": doc.all(),
    })
}
