//! Module for reading JSON data
//!
//! [`read`] inspects the start of a document and returns the root
//! [`ValueReader`], a lazy handle over one JSON value. Composite readers hand
//! out nested `ValueReader`s one at a time; every reader pulls characters from
//! the shared [`Cursor`] only while it is being traversed.
//!
//! Readers are single-pass and non-restartable: once a reader has observed the
//! terminating character of its value it refuses further reads and only
//! returns "no more items". A nested reader must be fully drained before its
//! parent is advanced; the borrow checker enforces that only one reader along
//! the nesting chain can be used at a time, but *dropping* a half-drained
//! child and then advancing the parent leaves the shared cursor in the middle
//! of the child's text and corrupts all subsequent reads.
//!
//! The supported grammar has no `true`, `false` or `null` literals; a document
//! starting with one of them fails with an illegal-character error.

use thiserror::Error;

use crate::source::{CharSource, Cursor, LinePosition};
use crate::value::Value;

mod dictionary;
mod list;
mod number;
mod string;

pub use dictionary::DictionaryReader;
pub use list::ListReader;
pub use number::NumberReader;
pub use string::StringReader;

type IoError = std::io::Error;

/// Kind of a JSON value
#[derive(PartialEq, Eq, Clone, Copy, strum::Display, Debug)]
pub enum ValueKind {
    /// JSON number, for example `123.4`
    Number,
    /// JSON string, for example `"text in \"quotes\""`
    String,
    /// JSON list: `[ ... ]`
    List,
    /// JSON dictionary: `{ ... }`
    Dictionary,
}

/// Describes why an escape sequence could not be decoded
#[non_exhaustive]
#[derive(PartialEq, Eq, Clone, Copy, strum::Display, Debug)]
pub enum EscapeErrorKind {
    /// The character after the backslash does not name a known escape
    UnknownEscapeCode,
    /// The stream ended inside an escape sequence
    IncompleteEscape,
    /// A `\u` escape contains a character which is not a hex digit
    InvalidHexDigit,
    /// A `\u` escape names a code point which is not a Unicode scalar value,
    /// for example an unpaired surrogate half
    InvalidCodePoint,
}

/// Error which occurred while reading a JSON document
///
/// All read errors are unrecoverable: the reader does not resynchronize, the
/// caller has to abandon the in-flight document.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ReadError {
    /// A character was encountered which is not legal in the current reader state
    #[error("illegal character {character:?} at {position}")]
    IllegalCharacter {
        /// The offending character
        character: char,
        /// Position of the offending character
        position: LinePosition,
    },
    /// An escape sequence in a string or dictionary key could not be decoded
    #[error("malformed escape sequence ({kind}) at {position}")]
    MalformedEscape {
        /// Why the escape sequence is malformed
        kind: EscapeErrorKind,
        /// Position of the character at which decoding failed
        position: LinePosition,
    },
    /// Drained number text does not form a valid number, for example a lone sign
    #[error("malformed number {text:?}")]
    MalformedNumber {
        /// The complete drained number text
        text: String,
    },
    /// An IO error occurred while reading from the underlying source
    #[error("IO error '{error}' at (roughly) {position}")]
    Io {
        /// The IO error which occurred
        error: IoError,
        /// Rough position; the error may have occurred while fetching data ahead of it
        position: LinePosition,
    },
}

/// Pulls one character from the cursor, wrapping IO errors
pub(crate) fn pull<S: CharSource>(cursor: &mut Cursor<S>) -> Result<Option<char>, ReadError> {
    let position = cursor.position();
    cursor
        .next_char()
        .map_err(|error| ReadError::Io { error, position })
}

/// The reader variant selected by a value-start character
pub(crate) enum Dispatch {
    Number(char),
    String,
    List,
    Dictionary,
}

/// Maps a character to the reader variant it starts, `None` if it starts none
///
/// This is the complete value dispatch of the grammar; notably `t`, `f` and
/// `n` start nothing.
pub(crate) fn value_start(c: char) -> Option<Dispatch> {
    if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') {
        Some(Dispatch::Number(c))
    } else {
        match c {
            '"' => Some(Dispatch::String),
            '[' => Some(Dispatch::List),
            '{' => Some(Dispatch::Dictionary),
            _ => None,
        }
    }
}

/// A lazy handle over one JSON value
///
/// Obtained from [`read`] for the document root, from
/// [`ListReader::next_item`] for list items and from
/// [`DictionaryReader::next_entry`] for entry values.
pub enum ValueReader<'c, S: CharSource> {
    /// Handle over a number
    Number(NumberReader<'c, S>),
    /// Handle over a string
    String(StringReader<'c, S>),
    /// Handle over a list
    List(ListReader<'c, S>),
    /// Handle over a dictionary
    Dictionary(DictionaryReader<'c, S>),
}

impl<'c, S: CharSource> ValueReader<'c, S> {
    pub(crate) fn dispatch(cursor: &'c mut Cursor<S>, dispatch: Dispatch, nested: bool) -> Self {
        match dispatch {
            Dispatch::Number(first) => {
                ValueReader::Number(NumberReader::new(cursor, first, nested))
            }
            Dispatch::String => ValueReader::String(StringReader::new(cursor)),
            Dispatch::List => ValueReader::List(ListReader::new(cursor)),
            Dispatch::Dictionary => ValueReader::Dictionary(DictionaryReader::new(cursor)),
        }
    }

    /// Kind of the value this reader is a handle over
    pub fn kind(&self) -> ValueKind {
        match self {
            ValueReader::Number(_) => ValueKind::Number,
            ValueReader::String(_) => ValueKind::String,
            ValueReader::List(_) => ValueKind::List,
            ValueReader::Dictionary(_) => ValueKind::Dictionary,
        }
    }

    /// Whether this is a number reader
    pub fn is_number(&self) -> bool {
        matches!(self, ValueReader::Number(_))
    }

    /// Whether this is a string reader
    pub fn is_string(&self) -> bool {
        matches!(self, ValueReader::String(_))
    }

    /// Whether this is a list reader
    pub fn is_list(&self) -> bool {
        matches!(self, ValueReader::List(_))
    }

    /// Whether this is a dictionary reader
    pub fn is_dictionary(&self) -> bool {
        matches!(self, ValueReader::Dictionary(_))
    }

    /// Drains the reader and materializes the value
    pub fn value(&mut self) -> Result<Value, ReadError> {
        match self {
            ValueReader::Number(reader) => reader.value(),
            ValueReader::String(reader) => Ok(Value::Text(reader.value()?)),
            ValueReader::List(reader) => Ok(Value::List(reader.value()?)),
            ValueReader::Dictionary(reader) => Ok(Value::Dictionary(reader.value()?)),
        }
    }
}

/// Reads the root value of a JSON document
///
/// Skips leading whitespace and returns the undrained root reader. Returns
/// `Ok(None)` for a document without content (only whitespace, or nothing at
/// all), and [`ReadError::IllegalCharacter`] when the first non-whitespace
/// character starts no value.
///
/// # Examples
/// ```
/// # use jotson::reader;
/// # use jotson::source::{Cursor, StrSource};
/// # use jotson::value::Value;
/// let mut cursor = Cursor::new(StrSource::new("  176"));
/// let mut root = reader::read(&mut cursor)?.expect("document has content");
/// assert_eq!(true, root.is_number());
/// assert_eq!(Value::Integer(176), root.value()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn read<S: CharSource>(
    cursor: &mut Cursor<S>,
) -> Result<Option<ValueReader<'_, S>>, ReadError> {
    loop {
        match pull(cursor)? {
            None => return Ok(None),
            Some(c) if c.is_whitespace() => continue,
            Some(c) => {
                return match value_start(c) {
                    Some(dispatch) => Ok(Some(ValueReader::dispatch(cursor, dispatch, false))),
                    None => Err(ReadError::IllegalCharacter {
                        character: c,
                        position: cursor.position(),
                    }),
                };
            }
        }
    }
}
