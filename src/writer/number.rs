//! Writer for JSON numbers

use crate::sink::CharSink;
use crate::writer::WriteError;

/// Text representation of a float
///
/// A decimal point is appended when the `Display` form has none, so that the
/// text reads back as a float. NaN and infinite values have no JSON
/// representation and fail.
pub(crate) fn float_text(value: f64) -> Result<String, WriteError> {
    if !value.is_finite() {
        return Err(WriteError::UnsupportedNumber { value });
    }
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    Ok(text)
}

/// An incremental writer for one JSON number
///
/// The number text is written through [`write`](Self::write); no validation
/// is performed on it. Numbers have no closing delimiter, so
/// [`close`](Self::close) only ends the lifecycle.
pub struct NumberWriter<'k, K: CharSink> {
    sink: &'k mut K,
    closed: bool,
}

impl<'k, K: CharSink> NumberWriter<'k, K> {
    pub(crate) fn new(sink: &'k mut K) -> Self {
        NumberWriter {
            sink,
            closed: false,
        }
    }

    /// Writes raw number text, returns the number of characters written
    pub fn write(&mut self, text: &str) -> Result<usize, WriteError> {
        if self.closed {
            return Err(WriteError::Closed);
        }
        Ok(self.sink.write(text)?)
    }

    /// Closes this writer; all further operations fail with [`WriteError::Closed`]
    pub fn close(&mut self) -> Result<(), WriteError> {
        if self.closed {
            return Err(WriteError::Closed);
        }
        self.closed = true;
        Ok(())
    }
}
