//! Roll-spec parser
//!
//! Grammar:
//!
//! ```text
//! <count> 'd' <sides> [ 'H' <n> [ 'L' <n> ] | 'L' <n> [ 'H' <n> ] ] [ '+' <n> | '-' <n> ]
//! ```

use crate::error::{Error, Result};

use super::Roll;

/// Character cursor over a roll-spec
struct Cursor<'a> {
    data: &'a str,
    index: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a str) -> Self {
        Self { data, index: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.data[self.index..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                return;
            }
            self.index += c.len_utf8();
        }
    }

    fn number(&mut self) -> Result<u32> {
        match self.peek() {
            None => return Err(Error::parse("no more characters to parse", self.data)),
            Some(c) if !c.is_ascii_digit() => {
                return Err(Error::parse(format!("invalid character '{}'", c), self.rest()));
            }
            Some(_) => {}
        }

        let len = self.rest().bytes().take_while(|b| b.is_ascii_digit()).count();
        let digits = &self.rest()[..len];
        let value = digits
            .parse::<u32>()
            .map_err(|_| Error::parse("number out of range", digits))?;
        self.index += len;
        Ok(value)
    }

    fn consume(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.index += ch.len_utf8();
            true
        } else {
            false
        }
    }
}

/// Parse a roll-spec like "4d6H1+2" into a validated [`Roll`]
pub fn parse_roll(data: &str) -> Result<Roll> {
    let mut cursor = Cursor::new(data);
    cursor.skip_whitespace();

    let num = cursor.number()?;
    if !cursor.consume('d') && !cursor.consume('D') {
        return Err(Error::parse("missing 'd' in roll string", cursor.rest()));
    }
    let sides = cursor.number()?;

    let mut drop_highest = 0;
    let mut drop_lowest = 0;
    if cursor.consume('H') {
        drop_highest = cursor.number()?;
        if cursor.consume('L') {
            drop_lowest = cursor.number()?;
        }
    } else if cursor.consume('L') {
        drop_lowest = cursor.number()?;
        if cursor.consume('H') {
            drop_highest = cursor.number()?;
        }
    }

    let mut add = 0i32;
    if cursor.consume('+') {
        let start = cursor.rest();
        add = i32::try_from(cursor.number()?)
            .map_err(|_| Error::parse("modifier out of range", start))?;
    } else if cursor.consume('-') {
        let start = cursor.rest();
        add = -i32::try_from(cursor.number()?)
            .map_err(|_| Error::parse("modifier out of range", start))?;
    }

    cursor.skip_whitespace();
    if cursor.peek().is_some() {
        return Err(Error::parse("unexpected trailing input", cursor.rest()));
    }

    Roll::with_modifiers(num, sides, drop_highest, drop_lowest, add)
}
