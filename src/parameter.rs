//! Key/value record produced for every annotation or text block.

use serde::Serialize;

/// A single parsed record.
///
/// An absent key marks a free-text block, a present key an `@annotation`.
/// Keys and values are stored trimmed; whitespace-only input collapses to
/// `None`, never to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Parameter {
    key: Option<String>,
    value: Option<String>,
}

impl Parameter {
    pub fn new(key: Option<&str>, value: Option<&str>) -> Self {
        Self {
            key: non_blank(key),
            value: non_blank(value),
        }
    }

    /// Text block (no key).
    pub fn text(value: &str) -> Self {
        Self::new(None, Some(value))
    }

    pub fn annotation(key: &str, value: Option<&str>) -> Self {
        Self::new(Some(key), value)
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_text(&self) -> bool {
        self.key.is_none()
    }

    pub fn is_annotation(&self) -> bool {
        self.key.is_some()
    }
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_trimmed() {
        assert_eq!(Parameter::new(Some("peach"), None).key(), Some("peach"));
        assert_eq!(Parameter::new(Some("  apple"), None).key(), Some("apple"));
        assert_eq!(Parameter::new(Some("pie  "), None).key(), Some("pie"));
        assert_eq!(Parameter::new(None, None).key(), None);
    }

    #[test]
    fn value_is_trimmed() {
        assert_eq!(Parameter::new(None, Some("  apple")).value(), Some("apple"));
        assert_eq!(Parameter::new(None, Some("pie  ")).value(), Some("pie"));
        assert_eq!(Parameter::new(None, None).value(), None);
    }

    #[test]
    fn whitespace_collapses_to_absent() {
        let p = Parameter::new(Some(" \t "), Some("\n  "));
        assert_eq!(p.key(), None);
        assert_eq!(p.value(), None);
        assert!(p.is_text());

        assert_eq!(Parameter::new(Some(""), Some("")), Parameter::default());
    }

    #[test]
    fn inner_newlines_are_kept() {
        let p = Parameter::annotation("peach", Some(" first\nsecond "));
        assert_eq!(p.value(), Some("first\nsecond"));
        assert!(p.is_annotation());
    }

    #[test]
    fn serializes_absent_as_null() {
        let json = serde_json::to_string(&Parameter::annotation("foo", None)).unwrap();
        assert_eq!(json, r#"{"key":"foo","value":null}"#);
    }
}
