//! Reader for JSON strings
//!
//! The content state machine in this module is shared with
//! [`DictionaryReader`](crate::reader::DictionaryReader), which decodes entry
//! keys with the same escape rules.

use crate::escape;
use crate::reader::{pull, EscapeErrorKind, ReadError};
use crate::source::{CharSource, Cursor};

/// State of string content decoding, between two pulled characters
#[derive(PartialEq, Clone, Copy, Debug)]
pub(crate) enum ContentState {
    /// Plain content
    Default,
    /// A backslash has been read, the next character is the escape code
    AfterBackslash,
    /// Inside the four hex digits of a `\uXXXX` escape
    UnicodeEscape {
        /// Value of the hex digits read so far
        value: u32,
        /// Number of hex digits still missing
        remaining: u8,
    },
}

impl ContentState {
    /// Whether the stream must not end in this state
    pub(crate) fn in_escape(&self) -> bool {
        !matches!(self, ContentState::Default)
    }
}

/// What string content decoding does with one character
#[derive(PartialEq, Clone, Copy, Debug)]
pub(crate) enum ContentStep {
    /// A decoded content character
    Emit(char),
    /// The character was consumed without producing content yet
    Ignore,
    /// An unescaped `"`: the content is complete
    Conclude,
}

/// Feeds one character into the string content state machine
pub(crate) fn content_step(
    state: ContentState,
    c: char,
) -> Result<(ContentState, ContentStep), EscapeErrorKind> {
    match state {
        ContentState::Default => match c {
            '\\' => Ok((ContentState::AfterBackslash, ContentStep::Ignore)),
            '"' => Ok((ContentState::Default, ContentStep::Conclude)),
            c => Ok((ContentState::Default, ContentStep::Emit(c))),
        },
        ContentState::AfterBackslash => {
            if c == 'u' {
                Ok((
                    ContentState::UnicodeEscape {
                        value: 0,
                        remaining: 4,
                    },
                    ContentStep::Ignore,
                ))
            } else {
                match escape::decode_code(c) {
                    Some(decoded) => Ok((ContentState::Default, ContentStep::Emit(decoded))),
                    None => Err(EscapeErrorKind::UnknownEscapeCode),
                }
            }
        }
        ContentState::UnicodeEscape { value, remaining } => {
            let digit =
                escape::hex_digit_value(c).ok_or(EscapeErrorKind::InvalidHexDigit)?;
            let value = value << 4 | digit;
            if remaining == 1 {
                match char::from_u32(value) {
                    Some(decoded) => Ok((ContentState::Default, ContentStep::Emit(decoded))),
                    None => Err(EscapeErrorKind::InvalidCodePoint),
                }
            } else {
                Ok((
                    ContentState::UnicodeEscape {
                        value,
                        remaining: remaining - 1,
                    },
                    ContentStep::Ignore,
                ))
            }
        }
    }
}

/// A lazy, single-pass reader over one JSON string
///
/// Yields decoded content characters; the enclosing quotes and all escape
/// sequences have already been resolved. The opening quote was consumed by
/// whoever dispatched to this reader.
pub struct StringReader<'c, S: CharSource> {
    cursor: &'c mut Cursor<S>,
    state: ContentState,
    concluded: bool,
}

impl<'c, S: CharSource> StringReader<'c, S> {
    pub(crate) fn new(cursor: &'c mut Cursor<S>) -> Self {
        StringReader {
            cursor,
            state: ContentState::Default,
            concluded: false,
        }
    }

    /// Next decoded content character, `None` once the string has concluded
    pub fn next_char(&mut self) -> Result<Option<char>, ReadError> {
        loop {
            if self.concluded {
                return Ok(None);
            }
            match pull(self.cursor)? {
                None => {
                    self.concluded = true;
                    if self.state.in_escape() {
                        return Err(ReadError::MalformedEscape {
                            kind: EscapeErrorKind::IncompleteEscape,
                            position: self.cursor.position(),
                        });
                    }
                    return Ok(None);
                }
                Some(c) => match content_step(self.state, c) {
                    Ok((state, step)) => {
                        self.state = state;
                        match step {
                            ContentStep::Emit(emitted) => return Ok(Some(emitted)),
                            ContentStep::Ignore => continue,
                            ContentStep::Conclude => {
                                self.concluded = true;
                                return Ok(None);
                            }
                        }
                    }
                    Err(kind) => {
                        self.concluded = true;
                        return Err(ReadError::MalformedEscape {
                            kind,
                            position: self.cursor.position(),
                        });
                    }
                },
            }
        }
    }

    /// Drains the decoded content into a `String`
    pub fn value(&mut self) -> Result<String, ReadError> {
        let mut value = String::new();
        while let Some(c) = self.next_char()? {
            value.push(c);
        }
        Ok(value)
    }
}
