//! Docblocks grouped by the source they came from — format-agnostic.

use crate::docblock::DocBlock;
use crate::extract;

/// All docblocks found in one input.
#[derive(Debug, Default)]
pub struct SourceDoc {
    /// File path, or `stdin`
    pub source: String,
    pub blocks: Vec<BlockDoc>,
}

/// One parsed comment and where it sits.
#[derive(Debug)]
pub struct BlockDoc {
    pub line: usize,
    /// Declaration following the comment, if any
    pub target: Option<String>,
    pub docblock: DocBlock,
}

impl SourceDoc {
    /// Extract and parse every `/** ... */` comment in a source file.
    pub fn extract(source: impl Into<String>, content: &str) -> Self {
        let blocks = extract::comments(content)
            .into_iter()
            .map(|comment| BlockDoc {
                line: comment.line,
                docblock: DocBlock::from_source(&comment),
                target: comment.target,
            })
            .collect();

        Self {
            source: source.into(),
            blocks,
        }
    }

    /// Treat the whole input as a single raw docblock.
    pub fn raw(source: impl Into<String>, raw: &str) -> Self {
        Self {
            source: source.into(),
            blocks: vec![BlockDoc {
                line: 1,
                target: None,
                docblock: DocBlock::new(raw),
            }],
        }
    }
}
