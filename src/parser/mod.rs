//! Docblock parser — line-by-line state machine.
//!
//! Every physical line is normalized, checked for an `@key` opener and fed
//! into [`ParserState`]. A new annotation or a blank line finalizes the
//! record being accumulated; any other content is appended to it.

pub mod line;

use crate::parameter::Parameter;
use tracing::{debug, trace};

/// Parse raw comment text into records, in order of appearance.
///
/// Never fails: empty or malformed input yields an empty or partial list.
pub fn parse(raw: &str) -> Vec<Parameter> {
    let mut state = ParserState::default();

    for line in raw.lines() {
        state.process_line(line);
    }

    let records = state.finish();
    debug!(records = records.len(), "parsed docblock");
    records
}

/// Accumulator for the record currently being built.
#[derive(Debug, Default)]
pub struct ParserState {
    /// Key of the pending record, `None` while collecting a text block
    key: Option<String>,
    /// Value lines collected so far
    values: Vec<String>,
    results: Vec<Parameter>,
}

impl ParserState {
    pub fn process_line(&mut self, line: &str) {
        let content = line::normalize(line);
        let annotation = content.and_then(line::match_annotation);
        let value = match annotation {
            Some((_, rest)) => rest,
            None => content.unwrap_or(""),
        };

        // New key or blank/terminator line: finalize prior and reset
        if annotation.is_some() || value.is_empty() {
            self.flush();
        }

        if let Some((key, _)) = annotation {
            self.key = Some(key.to_string());
        }

        if !value.is_empty() {
            self.values.push(value.to_string());
        }
    }

    /// Records emitted so far.
    pub fn records(&self) -> &[Parameter] {
        &self.results
    }

    /// Whether a key or value lines are waiting for a terminator.
    pub fn is_pending(&self) -> bool {
        self.key.is_some() || !self.values.is_empty()
    }

    /// Flush whatever is still pending and return all records.
    ///
    /// Input that ends without a blank or `*/` line keeps its last record.
    pub fn finish(mut self) -> Vec<Parameter> {
        self.flush();
        self.results
    }

    fn flush(&mut self) {
        if !self.is_pending() {
            return;
        }

        let value = if self.values.is_empty() {
            None
        } else {
            Some(self.values.join("\n"))
        };
        let record = Parameter::new(self.key.take().as_deref(), value.as_deref());
        trace!(key = ?record.key(), "emit record");

        self.results.push(record);
        self.values.clear();
    }
}
