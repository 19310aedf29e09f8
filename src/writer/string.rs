//! Writer for JSON strings

use crate::escape;
use crate::sink::CharSink;
use crate::writer::WriteError;

/// An incremental writer for one JSON string
///
/// Content passed to [`write`](Self::write) is escaped as needed; the caller
/// provides plain text, not JSON source. The opening quote was emitted by
/// whoever created this writer, the closing quote is emitted by
/// [`close`](Self::close).
pub struct StringWriter<'k, K: CharSink> {
    sink: &'k mut K,
    closed: bool,
}

impl<'k, K: CharSink> StringWriter<'k, K> {
    pub(crate) fn new(sink: &'k mut K) -> Self {
        StringWriter {
            sink,
            closed: false,
        }
    }

    /// Writes string content, escaping `"`, `\` and control characters
    ///
    /// Returns the number of characters written to the sink, which can be
    /// larger than the length of `text` when characters had to be escaped.
    pub fn write(&mut self, text: &str) -> Result<usize, WriteError> {
        if self.closed {
            return Err(WriteError::Closed);
        }
        let mut escaped = String::new();
        escape::push_escaped(&mut escaped, text);
        Ok(self.sink.write(&escaped)?)
    }

    /// Emits the closing quote and closes this writer
    pub fn close(&mut self) -> Result<(), WriteError> {
        if self.closed {
            return Err(WriteError::Closed);
        }
        self.sink.write("\"")?;
        self.closed = true;
        Ok(())
    }
}
