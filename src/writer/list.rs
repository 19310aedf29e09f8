//! Writer for JSON lists

use crate::sink::CharSink;
use crate::value::Value;
use crate::writer::{write_value, DictionaryWriter, NumberWriter, StringWriter, WriteError};

/// An incremental writer for one JSON list
///
/// Items are added either fully materialized with [`append`](Self::append) or
/// incrementally through the scoped `append_*` operations, which return an
/// open child writer. The two modes can be mixed freely; a scoped child has
/// to be closed before the next sibling is requested or the list is closed.
/// The opening `[` was emitted by whoever created this writer.
///
/// # Examples
/// ```
/// # use jotson::writer;
/// let mut sink = String::new();
/// let mut list = writer::write_list(&mut sink, None)?;
/// list.append(&1.into())?;
/// let mut text = list.append_str()?;
/// text.write("ab")?;
/// text.close()?;
/// list.close()?;
/// assert_eq!(r#"[1,"ab"]"#, sink);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ListWriter<'k, K: CharSink> {
    sink: &'k mut K,
    depth: Option<usize>,
    has_prior: bool,
    closed: bool,
}

impl<'k, K: CharSink> ListWriter<'k, K> {
    pub(crate) fn new(sink: &'k mut K, depth: Option<usize>) -> Self {
        ListWriter {
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

    /// Indentation in front of the next item (`extra = 1`) or the closing
    /// delimiter (`extra = 0`); nothing in compact mode
    fn emit_next_line(&mut self, extra: usize) -> Result<(), WriteError> {
        if let Some(depth) = self.depth {
            self.emit("\n")?;
            for _ in 0..depth + extra {
                self.emit("\t")?;
            }
        }
        Ok(())
    }

    /// Separator and indentation in front of a new item
    fn before_item(&mut self) -> Result<(), WriteError> {
        if self.closed {
            return Err(WriteError::Closed);
        }
        if self.has_prior {
            self.emit(",")?;
        } else {
            self.has_prior = true;
        }
        self.emit_next_line(1)
    }

    /// Writes raw text to the sink while open
    ///
    /// This is the low-level escape hatch; it performs no separator
    /// bookkeeping and normally is not needed on a list writer.
    pub fn write(&mut self, text: &str) -> Result<usize, WriteError> {
        if self.closed {
            return Err(WriteError::Closed);
        }
        Ok(self.sink.write(text)?)
    }

    /// Appends a fully materialized value
    pub fn append(&mut self, value: &Value) -> Result<(), WriteError> {
        self.before_item()?;
        let depth = self.next_depth();
        write_value(&mut *self.sink, value, depth)
    }

    /// Appends a number, returning the open child writer
    pub fn append_number(&mut self) -> Result<NumberWriter<'_, K>, WriteError> {
        self.before_item()?;
        Ok(NumberWriter::new(&mut *self.sink))
    }

    /// Appends a string, returning the open child writer
    pub fn append_str(&mut self) -> Result<StringWriter<'_, K>, WriteError> {
        self.before_item()?;
        self.emit("\"")?;
        Ok(StringWriter::new(&mut *self.sink))
    }

    /// Appends a list, returning the open child writer
    pub fn append_list(&mut self) -> Result<ListWriter<'_, K>, WriteError> {
        self.before_item()?;
        self.emit("[")?;
        let depth = self.next_depth();
        Ok(ListWriter::new(&mut *self.sink, depth))
    }

    /// Appends a dictionary, returning the open child writer
    pub fn append_dict(&mut self) -> Result<DictionaryWriter<'_, K>, WriteError> {
        self.before_item()?;
        self.emit("{")?;
        let depth = self.next_depth();
        Ok(DictionaryWriter::new(&mut *self.sink, depth))
    }

    /// Emits the closing `]` and closes this writer
    pub fn close(&mut self) -> Result<(), WriteError> {
        if self.closed {
            return Err(WriteError::Closed);
        }
        self.emit_next_line(0)?;
        self.emit("]")?;
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn separator_counts() -> TestResult {
        // N items produce exactly N-1 commas, none leading or trailing
        for count in 0..4_i64 {
            let mut sink = String::new();
            let mut writer = ListWriter::new(&mut sink, None);
            for i in 0..count {
                writer.append(&Value::Integer(i))?;
            }
            writer.close()?;
            let commas = sink.matches(',').count();
            assert_eq!((count - 1).max(0) as usize, commas);
            assert_eq!(false, sink.contains("[,"));
            assert_eq!(false, sink.contains(",]"));
        }
        Ok(())
    }

    #[test]
    fn compact_output() -> TestResult {
        let mut sink = String::new();
        let mut writer = ListWriter::new(&mut sink, None);
        writer.append(&1.into())?;
        writer.append(&"a b".into())?;
        writer.append(&Value::List(vec![]))?;
        writer.close()?;
        assert_eq!(r#"[1,"a b",[]]"#, sink);
        Ok(())
    }

    #[test]
    fn pretty_output() -> TestResult {
        let mut sink = String::new();
        let mut writer = ListWriter::new(&mut sink, Some(0));
        writer.append(&1.into())?;
        writer.append(&2.into())?;
        writer.close()?;
        assert_eq!("[\n\t1,\n\t2\n]", sink);
        Ok(())
    }

    #[test]
    fn pretty_nested_indentation() -> TestResult {
        let mut sink = String::new();
        let mut writer = ListWriter::new(&mut sink, Some(0));
        writer.append(&Value::List(vec![Value::Integer(1)]))?;
        writer.close()?;
        assert_eq!("[\n\t[\n\t\t1\n\t]\n]", sink);
        Ok(())
    }

    #[test]
    fn scoped_children() -> TestResult {
        let mut sink = String::new();
        let mut writer = ListWriter::new(&mut sink, None);

        let mut number = writer.append_number()?;
        number.write("176")?;
        number.close()?;

        let mut nested = writer.append_list()?;
        nested.append(&1.into())?;
        nested.close()?;

        let mut dictionary = writer.append_dict()?;
        dictionary.put("a", &2.into())?;
        dictionary.close()?;

        writer.close()?;
        assert_eq!(r#"[176,[1],{"a":2}]"#, sink);
        Ok(())
    }

    #[test]
    fn closed_writer_fails() -> TestResult {
        let mut sink = String::new();
        let mut writer = ListWriter::new(&mut sink, None);
        writer.close()?;
        assert!(matches!(writer.append(&1.into()), Err(WriteError::Closed)));
        assert!(matches!(writer.append_number(), Err(WriteError::Closed)));
        assert!(matches!(writer.write("x"), Err(WriteError::Closed)));
        assert!(matches!(writer.close(), Err(WriteError::Closed)));
        assert_eq!("[]", sink);
        Ok(())
    }

    #[test]
    fn pretty_empty_list() -> TestResult {
        let mut sink = String::new();
        let mut writer = ListWriter::new(&mut sink, Some(0));
        writer.close()?;
        // The closing delimiter gets its indentation even without items
        assert_eq!("[\n]", sink);
        Ok(())
    }
}
