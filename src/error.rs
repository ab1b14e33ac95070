/// Errors raised by the fail-fast queries on [`DocBlock`](crate::DocBlock).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No record carries the requested key (`None` = text blocks)
    #[error("docblock key '{}' not found", .key.as_deref().unwrap_or("<text>"))]
    NotFound { key: Option<String> },
}

impl Error {
    pub fn not_found(key: Option<&str>) -> Self {
        Error::NotFound {
            key: key.map(str::to_string),
        }
    }

    /// The key that was looked up.
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::NotFound { key } => key.as_deref(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_key() {
        assert_eq!(
            Error::not_found(Some("does-not-exist")).to_string(),
            "docblock key 'does-not-exist' not found"
        );
        assert_eq!(
            Error::not_found(None).to_string(),
            "docblock key '<text>' not found"
        );
    }

    #[test]
    fn carries_the_key() {
        assert_eq!(Error::not_found(Some("apple")).key(), Some("apple"));
        assert_eq!(Error::not_found(None).key(), None);
    }
}
