//! Reader for JSON lists

use crate::reader::{pull, value_start, Dispatch, ReadError, ValueReader};
use crate::source::{CharSource, Cursor};
use crate::value::Value;

#[derive(PartialEq, Clone, Copy, Debug)]
enum State {
    AwaitingValue,
    AwaitingSeparatorOrEnd,
}

enum Step {
    /// The character was whitespace or a separator, keep pulling
    Skip,
    /// A value starts, dispatch to the matching child reader
    Child(Dispatch),
    /// The closing `]`
    Conclude,
}

/// Feeds one character into the list state machine, `None` for an illegal character
fn step(state: State, c: char) -> Option<(State, Step)> {
    match state {
        State::AwaitingValue => {
            if c.is_whitespace() {
                Some((state, Step::Skip))
            } else if c == ']' {
                Some((state, Step::Conclude))
            } else {
                value_start(c).map(|dispatch| (State::AwaitingSeparatorOrEnd, Step::Child(dispatch)))
            }
        }
        State::AwaitingSeparatorOrEnd => {
            if c.is_whitespace() {
                Some((state, Step::Skip))
            } else if c == ',' {
                Some((State::AwaitingValue, Step::Skip))
            } else if c == ']' {
                Some((state, Step::Conclude))
            } else {
                None
            }
        }
    }
}

/// A lazy, single-pass reader over one JSON list
///
/// [`next_item`](Self::next_item) yields one child reader per list item. A
/// yielded child has to be fully drained before this reader is advanced
/// again; advancing after dropping a half-drained child corrupts the shared
/// cursor. The opening `[` was consumed by whoever dispatched to this reader.
pub struct ListReader<'c, S: CharSource> {
    cursor: &'c mut Cursor<S>,
    state: State,
    concluded: bool,
}

impl<'c, S: CharSource> ListReader<'c, S> {
    pub(crate) fn new(cursor: &'c mut Cursor<S>) -> Self {
        ListReader {
            cursor,
            state: State::AwaitingValue,
            concluded: false,
        }
    }

    /// Reader for the next list item, `None` once the list has concluded
    pub fn next_item(&mut self) -> Result<Option<ValueReader<'_, S>>, ReadError> {
        loop {
            if self.concluded {
                return Ok(None);
            }
            match pull(self.cursor)? {
                None => {
                    self.concluded = true;
                    return Ok(None);
                }
                Some(c) => match step(self.state, c) {
                    None => {
                        self.concluded = true;
                        return Err(ReadError::IllegalCharacter {
                            character: c,
                            position: self.cursor.position(),
                        });
                    }
                    Some((state, step)) => {
                        self.state = state;
                        match step {
                            Step::Skip => continue,
                            Step::Conclude => {
                                self.concluded = true;
                                return Ok(None);
                            }
                            Step::Child(dispatch) => {
                                return Ok(Some(ValueReader::dispatch(
                                    &mut *self.cursor,
                                    dispatch,
                                    true,
                                )));
                            }
                        }
                    }
                },
            }
        }
    }

    /// Drains the list into a `Vec`, materializing every item in order
    pub fn value(&mut self) -> Result<Vec<Value>, ReadError> {
        let mut items = Vec::new();
        while let Some(mut item) = self.next_item()? {
            items.push(item.value()?);
        }
        Ok(items)
    }
}
