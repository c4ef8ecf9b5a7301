//! Minimal lexical cursor over a text buffer
//!
//! Splits on whitespace, reads unsigned integers and peeks single
//! characters. Used by the coin-spec parser.

use crate::error::{Error, Result};

/// Cursor over an immutable string
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    data: &'a str,
    idx: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `data`
    pub fn new(data: &'a str) -> Self {
        Self { data, idx: 0 }
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.idx
    }

    /// Unconsumed input
    pub fn remaining(&self) -> &'a str {
        &self.data[self.idx..]
    }

    /// Character under the cursor, or `None` at end of input
    pub fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Skip over consecutive whitespace
    pub fn discard_spaces(&mut self) {
        while let Some(c) = self.current_char() {
            if !c.is_whitespace() {
                break;
            }
            self.idx += c.len_utf8();
        }
    }

    /// Next run of non-whitespace characters, or `None` at end of input
    pub fn next_token(&mut self) -> Option<&'a str> {
        self.discard_spaces();
        let start = self.idx;
        while let Some(c) = self.current_char() {
            if c.is_whitespace() {
                break;
            }
            self.idx += c.len_utf8();
        }

        if self.idx == start {
            None
        } else {
            Some(&self.data[start..self.idx])
        }
    }

    /// Read an unsigned decimal integer.
    ///
    /// Returns `Ok(None)` at end of input. With `require_space`, the digits
    /// must be followed by whitespace or end of input. On any failure the
    /// cursor is left where it was before the call (after leading spaces).
    ///
    /// # Examples
    /// ```
    /// use tabletop::Scanner;
    ///
    /// let mut s = Scanner::new("12gp");
    /// assert_eq!(s.next_int(false).unwrap(), Some(12));
    /// assert_eq!(s.next_token(), Some("gp"));
    ///
    /// let mut s = Scanner::new("12gp");
    /// assert!(s.next_int(true).is_err());
    /// ```
    pub fn next_int(&mut self, require_space: bool) -> Result<Option<u64>> {
        self.discard_spaces();
        let start = self.idx;

        match self.current_char() {
            None => return Ok(None),
            Some(c) if !c.is_ascii_digit() => {
                return Err(Error::parse("next token is not numeric", self.fragment_at(start)));
            }
            Some(_) => {}
        }

        // ASCII digits are one byte each
        let digits = self.remaining().bytes().take_while(|b| b.is_ascii_digit()).count();
        let end = start + digits;

        if require_space {
            if let Some(c) = self.data[end..].chars().next() {
                if !c.is_whitespace() {
                    return Err(Error::parse("next token is not numeric", self.fragment_at(start)));
                }
            }
        }

        let value = self.data[start..end]
            .parse::<u64>()
            .map_err(|_| Error::parse("integer out of range", &self.data[start..end]))?;
        self.idx = end;
        Ok(Some(value))
    }

    /// The whitespace-delimited fragment beginning at `offset`, for error messages
    fn fragment_at(&self, offset: usize) -> &'a str {
        let rest = &self.data[offset..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        &rest[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_spaces() {
        let mut scanner = Scanner::new("    asdf");
        scanner.discard_spaces();
        assert_eq!(scanner.current_char(), Some('a'));
        assert_eq!(scanner.position(), 4);

        // Idempotent at a non-space character
        scanner.discard_spaces();
        assert_eq!(scanner.position(), 4);
    }

    #[test]
    fn test_discard_spaces_at_end() {
        let mut scanner = Scanner::new(" \t\n");
        scanner.discard_spaces();
        assert_eq!(scanner.current_char(), None);
    }

    #[test]
    fn test_next_token() {
        let mut scanner = Scanner::new(" one two three ");
        assert_eq!(scanner.next_token(), Some("one"));
        assert_eq!(scanner.next_token(), Some("two"));
        assert_eq!(scanner.next_token(), Some("three"));
        assert_eq!(scanner.next_token(), None);

        let mut scanner = Scanner::new("one");
        assert_eq!(scanner.next_token(), Some("one"));
        assert_eq!(scanner.next_token(), None);
    }

    #[test]
    fn test_next_int() {
        let mut scanner = Scanner::new("1 2 3");
        assert_eq!(scanner.next_int(true).unwrap(), Some(1));
        assert_eq!(scanner.next_int(true).unwrap(), Some(2));
        assert_eq!(scanner.next_int(true).unwrap(), Some(3));
        assert_eq!(scanner.next_int(true).unwrap(), None);
    }

    #[test]
    fn test_next_int_without_space() {
        let mut scanner = Scanner::new("1a 2b 3c");
        assert_eq!(scanner.next_int(false).unwrap(), Some(1));
        assert_eq!(scanner.next_token(), Some("a"));
        assert_eq!(scanner.next_int(false).unwrap(), Some(2));
        assert_eq!(scanner.next_token(), Some("b"));
        assert_eq!(scanner.next_int(false).unwrap(), Some(3));
        assert_eq!(scanner.next_token(), Some("c"));
        assert_eq!(scanner.next_int(true).unwrap(), None);
    }

    #[test]
    fn test_next_int_requires_space_rolls_back() {
        let mut scanner = Scanner::new("1b");
        let err = scanner.next_int(true).unwrap_err();
        assert!(err.is_parse());
        assert_eq!(scanner.position(), 0);
        assert_eq!(scanner.next_token(), Some("1b"));
    }

    #[test]
    fn test_next_int_not_numeric() {
        let mut scanner = Scanner::new("  -5 cp");
        assert!(scanner.next_int(false).is_err());
        assert_eq!(scanner.current_char(), Some('-'));
    }

    #[test]
    fn test_next_int_overflow() {
        let mut scanner = Scanner::new("99999999999999999999999 cp");
        assert!(scanner.next_int(false).is_err());
        assert_eq!(scanner.current_char(), Some('9'));
    }
}
