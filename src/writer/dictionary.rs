//! Writer for JSON dictionaries

use crate::escape;
use crate::sink::CharSink;
use crate::value::Value;
use crate::writer::{write_value, ListWriter, NumberWriter, StringWriter, WriteError};

/// An incremental writer for one JSON dictionary
///
/// Entries are added either fully materialized with [`put`](Self::put) or
/// incrementally through the scoped `put_*` operations, which emit the key
/// and return an open child writer for the value. The two modes can be mixed
/// freely; a scoped child has to be closed before the next entry is added or
/// the dictionary is closed. Duplicate keys are not detected. The opening `{`
/// was emitted by whoever created this writer.
///
/// # Examples
/// ```
/// # use jotson::writer;
/// let mut sink = String::new();
/// let mut dictionary = writer::write_dict(&mut sink, None)?;
/// dictionary.put("a", &1.into())?;
/// let mut items = dictionary.put_list("b")?;
/// items.append(&2.into())?;
/// items.close()?;
/// dictionary.close()?;
/// assert_eq!(r#"{"a":1,"b":[2]}"#, sink);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct DictionaryWriter<'k, K: CharSink> {
    sink: &'k mut K,
    depth: Option<usize>,
    has_prior: bool,
    closed: bool,
}

impl<'k, K: CharSink> DictionaryWriter<'k, K> {
    pub(crate) fn new(sink: &'k mut K, depth: Option<usize>) -> Self {
        DictionaryWriter {
            sink,
            depth,
            has_prior: false,
            closed: false,
        }
    }

    fn next_depth(&self) -> Option<usize> {
        self.depth.map(|depth| depth + 1)
    }

    fn emit(&mut self, text: &str) -> Result<(), WriteError> {
        self.sink.write(text)?;
        Ok(())
    }

    fn emit_next_line(&mut self, extra: usize) -> Result<(), WriteError> {
        if let Some(depth) = self.depth {
            self.emit("\n")?;
            for _ in 0..depth + extra {
                self.emit("\t")?;
            }
        }
        Ok(())
    }

    /// Separator, indentation and quoted key in front of a new entry value
    ///
    /// The key is escaped like string content. Pretty mode puts a space
    /// behind the `:`.
    fn before_entry(&mut self, key: &str) -> Result<(), WriteError> {
        if self.closed {
            return Err(WriteError::Closed);
        }
        if self.has_prior {
            self.emit(",")?;
        } else {
            self.has_prior = true;
        }
        self.emit_next_line(1)?;

        let mut prefix = String::from("\"");
        escape::push_escaped(&mut prefix, key);
        prefix.push_str("\":");
        if self.depth.is_some() {
            prefix.push(' ');
        }
        self.emit(&prefix)
    }

    /// Writes raw text to the sink while open
    ///
    /// This is the low-level escape hatch; it performs no separator or key
    /// bookkeeping and normally is not needed on a dictionary writer.
    pub fn write(&mut self, text: &str) -> Result<usize, WriteError> {
        if self.closed {
            return Err(WriteError::Closed);
        }
        Ok(self.sink.write(text)?)
    }

    /// Puts an entry with a fully materialized value
    pub fn put(&mut self, key: &str, value: &Value) -> Result<(), WriteError> {
        self.before_entry(key)?;
        let depth = self.next_depth();
        write_value(&mut *self.sink, value, depth)
    }

    /// Puts an entry with a number value, returning the open child writer
    pub fn put_number(&mut self, key: &str) -> Result<NumberWriter<'_, K>, WriteError> {
        self.before_entry(key)?;
        Ok(NumberWriter::new(&mut *self.sink))
    }

    /// Puts an entry with a string value, returning the open child writer
    pub fn put_str(&mut self, key: &str) -> Result<StringWriter<'_, K>, WriteError> {
        self.before_entry(key)?;
        self.emit("\"")?;
        Ok(StringWriter::new(&mut *self.sink))
    }

    /// Puts an entry with a list value, returning the open child writer
    pub fn put_list(&mut self, key: &str) -> Result<ListWriter<'_, K>, WriteError> {
        self.before_entry(key)?;
        self.emit("[")?;
        let depth = self.next_depth();
        Ok(ListWriter::new(&mut *self.sink, depth))
    }

    /// Puts an entry with a dictionary value, returning the open child writer
    pub fn put_dict(&mut self, key: &str) -> Result<DictionaryWriter<'_, K>, WriteError> {
        self.before_entry(key)?;
        self.emit("{")?;
        let depth = self.next_depth();
        Ok(DictionaryWriter::new(&mut *self.sink, depth))
    }

    /// Emits the closing `}` and closes this writer
    pub fn close(&mut self) -> Result<(), WriteError> {
        if self.closed {
            return Err(WriteError::Closed);
        }
        self.emit_next_line(0)?;
        self.emit("}")?;
        self.closed = true;
        Ok(())
    }
}
