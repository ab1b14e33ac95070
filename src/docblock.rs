//! Query layer over a parsed docblock.
//!
//! A [`DocBlock`] is built once from raw comment text and never changes
//! afterwards; every query is a read over the ordered record list.

use crate::error::{Error, Result};
use crate::parameter::Parameter;
use crate::parser;
use std::convert::Infallible;
use std::str::FromStr;

/// Anything that can hand out raw doc-comment text.
///
/// Returning `None` means the source carries no comment; it parses to an
/// empty [`DocBlock`].
pub trait DocSource {
    fn doc_comment(&self) -> Option<&str>;
}

impl DocSource for str {
    fn doc_comment(&self) -> Option<&str> {
        Some(self)
    }
}

impl DocSource for String {
    fn doc_comment(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: DocSource + ?Sized> DocSource for &T {
    fn doc_comment(&self) -> Option<&str> {
        (**self).doc_comment()
    }
}

/// Parsed documentation comment.
///
/// Key-taking queries accept either a `&str` (annotations with that key) or
/// `None` (text blocks):
///
/// ```
/// use docblock::DocBlock;
///
/// let doc = DocBlock::new("/**\n * Title\n *\n * @since 1.2\n */");
/// assert_eq!(doc.title(), Some("Title"));
/// assert_eq!(doc.first_value("since"), Some("1.2"));
/// assert_eq!(doc.find(None).len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    raw: String,
    results: Vec<Parameter>,
}

impl DocBlock {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let results = parser::parse(&raw);
        Self { raw, results }
    }

    pub fn from_source<S: DocSource + ?Sized>(source: &S) -> Self {
        Self::new(source.doc_comment().unwrap_or_default())
    }

    /// Parse raw text into records without keeping a `DocBlock` around.
    pub fn parse(raw: &str) -> Vec<Parameter> {
        parser::parse(raw)
    }

    /// The text this block was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// All records in source order.
    pub fn all(&self) -> &[Parameter] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.results.iter()
    }

    pub fn into_parameters(self) -> Vec<Parameter> {
        self.results
    }

    /// Value of the first record, provided it is a text block.
    ///
    /// An annotation ahead of any prose means there is no title.
    pub fn title(&self) -> Option<&str> {
        self.results
            .first()
            .filter(|kv| kv.is_text())
            .and_then(Parameter::value)
    }

    /// Leading text blocks joined by a blank line, up to the first annotation.
    pub fn header(&self) -> Option<String> {
        let blocks: Vec<&str> = self
            .results
            .iter()
            .take_while(|kv| kv.is_text())
            .filter_map(Parameter::value)
            .collect();

        if blocks.is_empty() {
            None
        } else {
            Some(blocks.join("\n\n"))
        }
    }

    /// Values of every text block.
    pub fn texts(&self) -> Vec<&str> {
        self.find(None)
            .into_iter()
            .filter_map(Parameter::value)
            .collect()
    }

    /// Every keyed record.
    pub fn attributes(&self) -> Vec<&Parameter> {
        self.results.iter().filter(|kv| kv.is_annotation()).collect()
    }

    pub fn find<'k>(&self, key: impl Into<Option<&'k str>>) -> Vec<&Parameter> {
        let key = key.into();
        self.results.iter().filter(|kv| kv.key() == key).collect()
    }

    /// Values of [`find`](Self::find), index for index.
    pub fn find_values<'k>(&self, key: impl Into<Option<&'k str>>) -> Vec<Option<&str>> {
        self.find(key).into_iter().map(Parameter::value).collect()
    }

    pub fn first<'k>(&self, key: impl Into<Option<&'k str>>) -> Option<&Parameter> {
        let key = key.into();
        self.results.iter().find(|kv| kv.key() == key)
    }

    pub fn first_value<'k>(&self, key: impl Into<Option<&'k str>>) -> Option<&str> {
        self.first(key).and_then(Parameter::value)
    }

    pub fn find_or_fail<'k>(&self, key: impl Into<Option<&'k str>>) -> Result<Vec<&Parameter>> {
        let key = key.into();
        let results = self.find(key);
        if results.is_empty() {
            return Err(Error::not_found(key));
        }
        Ok(results)
    }

    pub fn first_or_fail<'k>(&self, key: impl Into<Option<&'k str>>) -> Result<&Parameter> {
        let key = key.into();
        self.first(key).ok_or_else(|| Error::not_found(key))
    }

    /// Value of the first record with `key`.
    ///
    /// Fails when there is no such record and when that record has no value.
    pub fn first_value_or_fail<'k>(&self, key: impl Into<Option<&'k str>>) -> Result<&str> {
        let key = key.into();
        self.first_value(key).ok_or_else(|| Error::not_found(key))
    }
}

impl From<&str> for DocBlock {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for DocBlock {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl FromStr for DocBlock {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl<'a> IntoIterator for &'a DocBlock {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl IntoIterator for DocBlock {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}
