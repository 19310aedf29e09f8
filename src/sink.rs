//! Module for character sinks
//!
//! [`CharSink`] is the capability a JSON document is written to. A writer and
//! all writers nested inside it push text through the same sink by mutable
//! reference, mirroring the shared read cursor on the [source](crate::source)
//! side.

use std::io::Write;

use duplicate::duplicate_item;

type IoError = std::io::Error;

/// A sink accepting appended text
pub trait CharSink {
    /// Appends `text`, returns the number of characters written
    fn write(&mut self, text: &str) -> Result<usize, IoError>;
}

#[duplicate_item(sink_type; [&mut K]; [Box<K>])]
impl<K: CharSink + ?Sized> CharSink for sink_type {
    fn write(&mut self, text: &str) -> Result<usize, IoError> {
        (**self).write(text)
    }
}

/// Collects written text in memory
impl CharSink for String {
    fn write(&mut self, text: &str) -> Result<usize, IoError> {
        self.push_str(text);
        Ok(text.chars().count())
    }
}

/// A sink encoding characters as UTF-8 into a [`Write`]
///
/// # Examples
/// ```
/// # use jotson::sink::{CharSink, Utf8Sink};
/// let mut bytes = Vec::<u8>::new();
/// let mut sink = Utf8Sink::new(&mut bytes);
/// sink.write("[1]")?;
/// assert_eq!(b"[1]", bytes.as_slice());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Utf8Sink<W: Write> {
    writer: W,
}

impl<W: Write> Utf8Sink<W> {
    /// Creates a sink encoding into `writer`
    pub fn new(writer: W) -> Self {
        Utf8Sink { writer }
    }

    /// Flushes the underlying writer
    pub fn flush(&mut self) -> Result<(), IoError> {
        self.writer.flush()
    }
}

impl<W: Write> CharSink for Utf8Sink<W> {
    fn write(&mut self, text: &str) -> Result<usize, IoError> {
        self.writer.write_all(text.as_bytes())?;
        Ok(text.chars().count())
    }
}
