//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;
pub mod text;

use crate::model::SourceDoc;
use anyhow::{anyhow, Result};

/// Trait for rendering a SourceDoc into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &SourceDoc) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown, json, or text",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        assert_eq!(create_renderer("md").unwrap().file_extension(), "md");
        assert_eq!(create_renderer("json").unwrap().file_extension(), "json");
        assert_eq!(create_renderer("text").unwrap().file_extension(), "txt");
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("xml").err().unwrap();
        assert!(err.to_string().contains("unknown format: xml"));
    }
}
