//! Reader for JSON numbers

use crate::json_number::{parse_number, ParsedNumber};
use crate::reader::{pull, ReadError};
use crate::source::{CharSource, Cursor};
use crate::value::Value;

/// What the number state machine does with one body character
#[derive(PartialEq, Clone, Copy, Debug)]
enum Step {
    /// The character is part of the number text
    Emit(char),
    /// The character terminates the number and is not part of its text
    Conclude { terminator: char },
}

/// Feeds one character into the number body state machine
///
/// `dot_valid` is the remaining decimal-point budget; the returned bool is the
/// new budget. `None` means the character is illegal in a number. Whitespace
/// and `,` `)` `}` terminate the number (`)` has no grammatical meaning in
/// JSON but is accepted as a harmless terminator). Everything else, including
/// `e`/`E` and a sign after the first character, is illegal.
fn step(dot_valid: bool, c: char) -> Option<(bool, Step)> {
    if c.is_whitespace() || matches!(c, ',' | ')' | '}') {
        Some((dot_valid, Step::Conclude { terminator: c }))
    } else if c.is_ascii_digit() {
        Some((dot_valid, Step::Emit(c)))
    } else if c == '.' && dot_valid {
        Some((false, Step::Emit(c)))
    } else {
        None
    }
}

/// A lazy, single-pass reader over one JSON number
///
/// Yields the characters of the number text one at a time; [`value`](Self::value)
/// drains them and parses the text. The first character was already consumed
/// by whoever dispatched to this reader and is re-emitted first.
pub struct NumberReader<'c, S: CharSource> {
    cursor: &'c mut Cursor<S>,
    first: Option<char>,
    dot_valid: bool,
    // Nested readers push the terminator back for the parent's separator
    // state; the root reader discards it
    report_terminator: bool,
    concluded: bool,
}

impl<'c, S: CharSource> NumberReader<'c, S> {
    pub(crate) fn new(cursor: &'c mut Cursor<S>, first: char, report_terminator: bool) -> Self {
        NumberReader {
            cursor,
            first: Some(first),
            dot_valid: true,
            report_terminator,
            concluded: false,
        }
    }

    /// Next character of the number text, `None` once the number has concluded
    ///
    /// After conclusion every call returns `None`; the terminating character
    /// is never part of the number text.
    pub fn next_char(&mut self) -> Result<Option<char>, ReadError> {
        if self.concluded {
            return Ok(None);
        }
        if let Some(first) = self.first.take() {
            // Validated by the dispatching parent; only the dot budget matters
            if first == '.' {
                self.dot_valid = false;
            }
            return Ok(Some(first));
        }
        match pull(self.cursor)? {
            None => {
                self.concluded = true;
                Ok(None)
            }
            Some(c) => match step(self.dot_valid, c) {
                Some((dot_valid, Step::Emit(emitted))) => {
                    self.dot_valid = dot_valid;
                    Ok(Some(emitted))
                }
                Some((_, Step::Conclude { terminator })) => {
                    self.concluded = true;
                    if self.report_terminator {
                        self.cursor.push_back(terminator);
                    }
                    Ok(None)
                }
                None => {
                    self.concluded = true;
                    Err(ReadError::IllegalCharacter {
                        character: c,
                        position: self.cursor.position(),
                    })
                }
            },
        }
    }

    /// Drains the number text and parses it
    ///
    /// The result is [`Value::Integer`] when the text has no decimal point and
    /// [`Value::Float`] otherwise. Fails with [`ReadError::MalformedNumber`]
    /// when the drained text is not a valid number, for example a lone sign.
    pub fn value(&mut self) -> Result<Value, ReadError> {
        let mut text = String::new();
        while let Some(c) = self.next_char()? {
            text.push(c);
        }
        match parse_number(&text) {
            Some(ParsedNumber::Integer(value)) => Ok(Value::Integer(value)),
            Some(ParsedNumber::Float(value)) => Ok(Value::Float(value)),
            None => Err(ReadError::MalformedNumber { text }),
        }
    }
}
