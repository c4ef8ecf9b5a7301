//! Item key validation and utilities
//!
//! Item keys are dot-delimited paths such as `gear.adventuring.rope`:
//! - Must not be empty
//! - Segments separated by `.`, none of them empty
//! - Segments may not contain whitespace
//!
//! Every segment but the last names a category; the last is the item's
//! short key.

use std::fmt;

use crate::error::Error;

/// Separator between key segments
pub const KEY_SEPARATOR: char = '.';

/// Validation errors for item keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValidationError {
    /// Key is empty
    Empty,
    /// Key contains an empty segment (leading, trailing or doubled dot)
    EmptySegment,
    /// Segment contains whitespace
    Whitespace(String),
}

impl fmt::Display for KeyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValidationError::Empty => write!(f, "item key cannot be empty"),
            KeyValidationError::EmptySegment => {
                write!(f, "item key cannot contain empty segments")
            }
            KeyValidationError::Whitespace(seg) => {
                write!(f, "key segment '{}' contains whitespace", seg)
            }
        }
    }
}

impl std::error::Error for KeyValidationError {}

impl From<KeyValidationError> for Error {
    fn from(err: KeyValidationError) -> Self {
        Error::InvalidArgument(err.to_string())
    }
}

/// Validate an item key.
///
/// # Examples
/// ```
/// use tabletop::items::validate_item_key;
///
/// assert!(validate_item_key("gear.adventuring.rope").is_ok());
/// assert!(validate_item_key("torch").is_ok());
///
/// assert!(validate_item_key("").is_err());
/// assert!(validate_item_key("gear..rope").is_err());
/// assert!(validate_item_key("gear.hempen rope").is_err());
/// ```
pub fn validate_item_key(key: &str) -> Result<(), KeyValidationError> {
    if key.is_empty() {
        return Err(KeyValidationError::Empty);
    }

    for segment in key.split(KEY_SEPARATOR) {
        if segment.is_empty() {
            return Err(KeyValidationError::EmptySegment);
        }
        if segment.contains(char::is_whitespace) {
            return Err(KeyValidationError::Whitespace(segment.to_string()));
        }
    }

    Ok(())
}

/// Category path of a key: every segment but the last.
///
/// # Examples
/// ```
/// use tabletop::items::key_categories;
///
/// assert_eq!(key_categories("gear.adventuring.rope"), vec!["gear", "adventuring"]);
/// assert!(key_categories("torch").is_empty());
/// ```
pub fn key_categories(key: &str) -> Vec<String> {
    match parent_key(key) {
        Some(parent) => parent.split(KEY_SEPARATOR).map(str::to_string).collect(),
        None => Vec::new(),
    }
}

/// Everything before the final segment, if there is more than one.
pub fn parent_key(key: &str) -> Option<&str> {
    key.rfind(KEY_SEPARATOR).map(|idx| &key[..idx])
}

/// Final segment of a key.
///
/// # Examples
/// ```
/// use tabletop::items::key_name;
///
/// assert_eq!(key_name("gear.adventuring.rope"), "rope");
/// assert_eq!(key_name("torch"), "torch");
/// ```
pub fn key_name(key: &str) -> &str {
    key.rsplit(KEY_SEPARATOR).next().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        assert!(validate_item_key("rope").is_ok());
        assert!(validate_item_key("gear.rope").is_ok());
        assert!(validate_item_key("Weapons.Martial.Long-Sword").is_ok());
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(validate_item_key(""), Err(KeyValidationError::Empty));
    }

    #[test]
    fn test_empty_segment() {
        assert_eq!(validate_item_key(".rope"), Err(KeyValidationError::EmptySegment));
        assert_eq!(validate_item_key("gear."), Err(KeyValidationError::EmptySegment));
        assert_eq!(validate_item_key("gear..rope"), Err(KeyValidationError::EmptySegment));
    }

    #[test]
    fn test_whitespace_segment() {
        assert_eq!(
            validate_item_key("gear.silk rope"),
            Err(KeyValidationError::Whitespace("silk rope".to_string()))
        );
    }

    #[test]
    fn test_into_crate_error() {
        let err: Error = KeyValidationError::Empty.into();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_parent_key() {
        assert_eq!(parent_key("a.b.c"), Some("a.b"));
        assert_eq!(parent_key("a"), None);
    }
}
