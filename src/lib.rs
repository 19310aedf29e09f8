#![warn(missing_docs)]
#![forbid(unsafe_code)]
// Allow needless `return` because that makes it sometimes more obvious that
// an expression is the result of the function
#![allow(clippy::needless_return)]
// Allow `assert_eq!(true, ...)` because in some cases it is used to check a bool
// value and not a 'flag' / 'state', and `assert_eq!` makes that more explicit
#![allow(clippy::bool_assert_comparison)]
// Enable 'unused' warnings for doc tests (are disabled by default)
#![doc(test(no_crate_inject))]
#![doc(test(attr(warn(unused))))]
// Fail on warnings in doc tests
#![doc(test(attr(deny(warnings))))]

//! Jotson is an incremental streaming JSON reader and writer.
//!
//! Its main purpose is allowing to read and write JSON data without having to
//! store the complete document structure in memory. The reader hands out lazy,
//! single-pass *value handles* which pull characters from a shared source only
//! while being traversed; the writer hands out open child writers which push
//! correctly punctuated text to a shared sink as soon as values are appended.
//!
//! The supported grammar is deliberately restricted: dictionaries, lists,
//! strings and numbers without exponent notation. The `true`, `false` and
//! `null` literals are not part of the grammar, and numbers are parsed into
//! either an `i64` or an `f64`. Jotson is *not* an object mapper; a dedicated
//! library such as [Serde](https://github.com/serde-rs/json) should be used
//! for that.
//!
//! # Terminology
//!
//! - *dictionary*: `{ ... }`, an ordered mapping of string keys to values
//!   - *entry*: `"key": value` pair of a dictionary
//! - *list*: `[ ... ]`
//! - *string*: string value, for example `"text in \"quotes\""`
//! - *number*: number value, for example `123.4` (no exponent notation)
//!
//! # Usage examples
//!
//! ## Reading
//!
//! ```
//! # use jotson::reader::{self, ValueReader};
//! # use jotson::source::{Cursor, StrSource};
//! # use jotson::value::Value;
//! // In this example JSON data comes from a string;
//! // normally it would come from a file or a network connection
//! let mut cursor = Cursor::new(StrSource::new(r#"{"a": [1, 2.5]}"#));
//!
//! let mut root = reader::read(&mut cursor)?.expect("document has content");
//! assert_eq!(true, root.is_dictionary());
//!
//! if let ValueReader::Dictionary(dictionary) = &mut root {
//!     let (key, mut item) = dictionary.next_entry()?.expect("has an entry");
//!     assert_eq!("a", key);
//!     assert_eq!(
//!         Value::List(vec![Value::Integer(1), Value::Float(2.5)]),
//!         item.value()?
//!     );
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Writing
//! ```
//! # use jotson::writer;
//! // In this example JSON text is stored in a String;
//! // normally it would be written to a file or network connection
//! let mut sink = String::new();
//!
//! let mut dictionary = writer::write_dict(&mut sink, None)?;
//! dictionary.put("name", &"example".into())?;
//! let mut items = dictionary.put_list("items")?;
//! items.append(&1.into())?;
//! items.append(&2.into())?;
//! items.close()?;
//! dictionary.close()?;
//!
//! assert_eq!(r#"{"name":"example","items":[1,2]}"#, sink);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod reader;
pub mod sink;
pub mod source;
pub mod value;
pub mod writer;

mod escape;
mod json_number;
mod utf8;
