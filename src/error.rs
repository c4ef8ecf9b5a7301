//! Error types shared by the parsers and value types

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while parsing or constructing values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed coin-spec or roll-spec text
    #[error("{message} at '{fragment}'")]
    Parse { message: String, fragment: String },

    /// Well-formed input that is semantically invalid
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Recognized but not implemented
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

impl Error {
    pub(crate) fn parse(message: impl Into<String>, fragment: impl Into<String>) -> Self {
        Error::Parse {
            message: message.into(),
            fragment: fragment.into(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Whether this is a parse failure
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Whether this is a semantic (invalid argument) failure
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Whether this marks an unimplemented path
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_includes_fragment() {
        let err = Error::parse("unknown coin type", "dollar");
        assert_eq!(err.to_string(), "unknown coin type at 'dollar'");
        assert!(err.is_parse());
    }

    #[test]
    fn test_kinds() {
        assert!(Error::invalid("x").is_invalid_argument());
        assert!(Error::Unsupported("weapons".into()).is_unsupported());
        assert!(!Error::invalid("x").is_parse());
    }
}
