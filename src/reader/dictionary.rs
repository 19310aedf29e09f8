//! Reader for JSON dictionaries

use crate::reader::string::{content_step, ContentState, ContentStep};
use crate::reader::{pull, value_start, Dispatch, EscapeErrorKind, ReadError, ValueReader};
use crate::source::{CharSource, Cursor};
use crate::value::{Dictionary, Value};

#[derive(PartialEq, Clone, Debug, Default)]
enum State {
    #[default]
    AwaitingKey,
    /// Between the quotes of a key; decoded with the string content rules
    InKey {
        key: String,
        content: ContentState,
    },
    AwaitingColon {
        key: String,
    },
    AwaitingValue {
        key: String,
    },
    AwaitingSeparatorOrEnd,
}

impl State {
    /// Whether the stream must not end in this state
    fn in_escape(&self) -> bool {
        matches!(self, State::InKey { content, .. } if content.in_escape())
    }
}

enum Step {
    /// The character was consumed without completing an entry
    Skip,
    /// A value starts: the next entry is `key` plus the dispatched child reader
    Entry(String, Dispatch),
    /// The closing `}`
    Conclude,
}

enum StepError {
    Illegal,
    Escape(EscapeErrorKind),
}

/// Feeds one character into the dictionary state machine
fn step(state: State, c: char) -> Result<(State, Step), StepError> {
    match state {
        State::AwaitingKey => {
            if c.is_whitespace() {
                Ok((State::AwaitingKey, Step::Skip))
            } else if c == '"' {
                Ok((
                    State::InKey {
                        key: String::new(),
                        content: ContentState::Default,
                    },
                    Step::Skip,
                ))
            } else if c == '}' {
                Ok((State::AwaitingKey, Step::Conclude))
            } else {
                Err(StepError::Illegal)
            }
        }
        State::InKey { mut key, content } => {
            match content_step(content, c).map_err(StepError::Escape)? {
                (content, ContentStep::Emit(decoded)) => {
                    key.push(decoded);
                    Ok((State::InKey { key, content }, Step::Skip))
                }
                (content, ContentStep::Ignore) => {
                    Ok((State::InKey { key, content }, Step::Skip))
                }
                // Closing quote of the key
                (_, ContentStep::Conclude) => Ok((State::AwaitingColon { key }, Step::Skip)),
            }
        }
        State::AwaitingColon { key } => {
            if c.is_whitespace() {
                Ok((State::AwaitingColon { key }, Step::Skip))
            } else if c == ':' {
                Ok((State::AwaitingValue { key }, Step::Skip))
            } else {
                Err(StepError::Illegal)
            }
        }
        State::AwaitingValue { key } => {
            if c.is_whitespace() {
                Ok((State::AwaitingValue { key }, Step::Skip))
            } else {
                match value_start(c) {
                    Some(dispatch) => {
                        Ok((State::AwaitingSeparatorOrEnd, Step::Entry(key, dispatch)))
                    }
                    None => Err(StepError::Illegal),
                }
            }
        }
        State::AwaitingSeparatorOrEnd => {
            if c.is_whitespace() {
                Ok((State::AwaitingSeparatorOrEnd, Step::Skip))
            } else if c == ',' {
                Ok((State::AwaitingKey, Step::Skip))
            } else if c == '}' {
                Ok((State::AwaitingSeparatorOrEnd, Step::Conclude))
            } else {
                Err(StepError::Illegal)
            }
        }
    }
}

/// A lazy, single-pass reader over one JSON dictionary
///
/// [`next_entry`](Self::next_entry) yields `(key, value reader)` pairs in
/// document order. Keys are decoded with the same escape rules as string
/// content. Like with lists, a yielded child reader has to be fully drained
/// before this reader is advanced again. The opening `{` was consumed by
/// whoever dispatched to this reader.
pub struct DictionaryReader<'c, S: CharSource> {
    cursor: &'c mut Cursor<S>,
    state: State,
    concluded: bool,
}

impl<'c, S: CharSource> DictionaryReader<'c, S> {
    pub(crate) fn new(cursor: &'c mut Cursor<S>) -> Self {
        DictionaryReader {
            cursor,
            state: State::AwaitingKey,
            concluded: false,
        }
    }

    /// Key and value reader of the next entry, `None` once the dictionary has concluded
    pub fn next_entry(&mut self) -> Result<Option<(String, ValueReader<'_, S>)>, ReadError> {
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
                Some(c) => match step(std::mem::take(&mut self.state), c) {
                    Err(StepError::Illegal) => {
                        self.concluded = true;
                        return Err(ReadError::IllegalCharacter {
                            character: c,
                            position: self.cursor.position(),
                        });
                    }
                    Err(StepError::Escape(kind)) => {
                        self.concluded = true;
                        return Err(ReadError::MalformedEscape {
                            kind,
                            position: self.cursor.position(),
                        });
                    }
                    Ok((state, step)) => {
                        self.state = state;
                        match step {
                            Step::Skip => continue,
                            Step::Conclude => {
                                self.concluded = true;
                                return Ok(None);
                            }
                            Step::Entry(key, dispatch) => {
                                return Ok(Some((
                                    key,
                                    ValueReader::dispatch(&mut *self.cursor, dispatch, true),
                                )));
                            }
                        }
                    }
                },
            }
        }
    }

    /// Drains the dictionary, materializing every entry in document order
    ///
    /// When a key appears more than once the later occurrence overwrites the
    /// earlier one (last write wins).
    pub fn value(&mut self) -> Result<Dictionary, ReadError> {
        let mut dictionary = Dictionary::new();
        while let Some((key, mut entry)) = self.next_entry()? {
            dictionary.insert(key, entry.value()?);
        }
        Ok(dictionary)
    }
}
