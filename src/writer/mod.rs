//! Module for writing JSON data
//!
//! [`write`] emits a complete, already materialized [`Value`] in one call.
//! The scoped functions [`write_number`], [`write_str`], [`write_list`] and
//! [`write_dict`] return an *open* writer instead, which the caller fills
//! incrementally and then has to [`close`](ListWriter::close); text is pushed
//! to the shared sink immediately, so the document is valid JSON at every
//! call boundary.
//!
//! Composite writers offer both modes interchangeably: value-dispatching
//! [`append`](ListWriter::append) / [`put`](DictionaryWriter::put), and the
//! scoped `append_*` / `put_*` operations which return an open child writer.
//! A child writer borrows the parent, so the parent cannot be used again
//! until the child is dropped; the child must be *closed* before that, or
//! the punctuation of the shared sink ends up corrupted.
//!
//! With a pretty-print depth of `Some(d)` the output is indented with tab
//! characters and a space follows each `:`; with `None` the output is compact
//! and contains no whitespace outside of string content.

use thiserror::Error;

use crate::sink::CharSink;
use crate::value::Value;

mod dictionary;
mod list;
mod number;
mod string;

pub use dictionary::DictionaryWriter;
pub use list::ListWriter;
pub use number::NumberWriter;
pub use string::StringWriter;

use number::float_text;

type IoError = std::io::Error;

/// Error which occurred while writing a JSON document
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum WriteError {
    /// A write was attempted on a writer whose `close()` has already been called
    #[error("writer is already closed")]
    Closed,
    /// A number value which has no JSON text representation, that means a NaN
    /// or infinite float
    #[error("number value {value} cannot be represented in JSON text")]
    UnsupportedNumber {
        /// The offending value
        value: f64,
    },
    /// An IO error occurred while writing to the underlying sink
    #[error("IO error: {0}")]
    Io(#[from] IoError),
}

/// Emits `depth` leading tabs in pretty-print mode
fn leading_indent<K: CharSink>(sink: &mut K, depth: Option<usize>) -> Result<(), WriteError> {
    if let Some(depth) = depth {
        for _ in 0..depth {
            sink.write("\t")?;
        }
    }
    Ok(())
}

/// Dispatches on the native type of `value` and emits it completely
///
/// `depth` is the pretty-print depth of the emitted value itself; nested
/// containers indent one level deeper. Both the module-level [`write`] and
/// the value-dispatching `append`/`put` operations funnel through this, which
/// keeps their output byte-identical to the scoped streaming mode.
pub(crate) fn write_value<K: CharSink>(
    sink: &mut K,
    value: &Value,
    depth: Option<usize>,
) -> Result<(), WriteError> {
    match value {
        Value::Integer(v) => {
            let mut writer = NumberWriter::new(&mut *sink);
            writer.write(&v.to_string())?;
            writer.close()
        }
        Value::Float(v) => {
            let mut writer = NumberWriter::new(&mut *sink);
            writer.write(&float_text(*v)?)?;
            writer.close()
        }
        Value::Text(v) => {
            sink.write("\"")?;
            let mut writer = StringWriter::new(&mut *sink);
            writer.write(v)?;
            writer.close()
        }
        Value::List(items) => {
            sink.write("[")?;
            let mut writer = ListWriter::new(&mut *sink, depth);
            for item in items {
                writer.append(item)?;
            }
            writer.close()
        }
        Value::Dictionary(entries) => {
            sink.write("{")?;
            let mut writer = DictionaryWriter::new(&mut *sink, depth);
            for (key, item) in entries.iter() {
                writer.put(key, item)?;
            }
            writer.close()
        }
    }
}

/// Writes a complete value and closes it
///
/// With `depth: Some(d)` the value is pretty printed: `d` leading tabs, tab
/// indentation inside containers and a space after each `:`. No trailing
/// newline is emitted; appending one is up to the caller.
///
/// # Examples
/// ```
/// # use jotson::writer;
/// # use jotson::value::Value;
/// let mut sink = String::new();
/// writer::write(
///     &mut sink,
///     &Value::List(vec![Value::Integer(1), "a".into()]),
///     None,
/// )?;
/// assert_eq!(r#"[1,"a"]"#, sink);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write<K: CharSink>(
    sink: &mut K,
    value: &Value,
    depth: Option<usize>,
) -> Result<(), WriteError> {
    leading_indent(sink, depth)?;
    write_value(sink, value, depth)
}

/// Starts a number at the document root, returning the open writer
///
/// The caller writes the number text and then closes the writer.
pub fn write_number<K: CharSink>(
    sink: &mut K,
    depth: Option<usize>,
) -> Result<NumberWriter<'_, K>, WriteError> {
    leading_indent(sink, depth)?;
    Ok(NumberWriter::new(sink))
}

/// Starts a string at the document root, returning the open writer
///
/// The opening quote is emitted here; the closing quote is emitted by
/// [`StringWriter::close`].
pub fn write_str<K: CharSink>(
    sink: &mut K,
    depth: Option<usize>,
) -> Result<StringWriter<'_, K>, WriteError> {
    leading_indent(sink, depth)?;
    sink.write("\"")?;
    Ok(StringWriter::new(sink))
}

/// Starts a list at the document root, returning the open writer
pub fn write_list<K: CharSink>(
    sink: &mut K,
    depth: Option<usize>,
) -> Result<ListWriter<'_, K>, WriteError> {
    leading_indent(sink, depth)?;
    sink.write("[")?;
    Ok(ListWriter::new(sink, depth))
}

/// Starts a dictionary at the document root, returning the open writer
///
/// # Examples
/// ```
/// # use jotson::writer;
/// let mut sink = String::new();
/// let mut dictionary = writer::write_dict(&mut sink, Some(0))?;
/// dictionary.put("key1", &"value1".into())?;
/// dictionary.put("key2", &2.into())?;
/// dictionary.close()?;
/// assert_eq!("{\n\t\"key1\": \"value1\",\n\t\"key2\": 2\n}", sink);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_dict<K: CharSink>(
    sink: &mut K,
    depth: Option<usize>,
) -> Result<DictionaryWriter<'_, K>, WriteError> {
    leading_indent(sink, depth)?;
    sink.write("{")?;
    Ok(DictionaryWriter::new(sink, depth))
}
