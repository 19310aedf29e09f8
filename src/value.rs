//! Module for materialized JSON values
//!
//! [`Value`] is the result of fully draining a [reader](crate::reader) and the
//! input of the value-dispatching [writer](crate::writer) operations. It only
//! covers the supported grammar: there are no boolean or null variants.

/// A materialized JSON value
///
/// Numbers are split into [`Integer`](Value::Integer) and
/// [`Float`](Value::Float) depending on whether the number text contained a
/// decimal point. Dictionaries preserve insertion order, see [`Dictionary`].
#[derive(PartialEq, Clone, Debug)]
pub enum Value {
    /// Number without a decimal point, for example `176`
    Integer(i64),
    /// Number with a decimal point, for example `12.5`
    Float(f64),
    /// String value
    Text(String),
    /// List of values: `[ ... ]`
    List(Vec<Value>),
    /// Ordered mapping of string keys to values: `{ ... }`
    Dictionary(Dictionary),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<Dictionary> for Value {
    fn from(v: Dictionary) -> Self {
        Value::Dictionary(v)
    }
}

/// An ordered mapping of string keys to [`Value`]s
///
/// Entries keep their insertion order. Keys are unique: inserting a key which
/// is already present replaces the value but keeps the position at which the
/// key was first inserted ("last write wins").
///
/// # Examples
/// ```
/// # use jotson::value::{Dictionary, Value};
/// let mut dictionary = Dictionary::new();
/// dictionary.insert("a", Value::Integer(1));
/// dictionary.insert("b", Value::Integer(2));
/// dictionary.insert("a", Value::Integer(3));
///
/// assert_eq!(Some(&Value::Integer(3)), dictionary.get("a"));
/// let keys: Vec<&str> = dictionary.iter().map(|(k, _)| k.as_str()).collect();
/// assert_eq!(vec!["a", "b"], keys);
/// ```
#[derive(PartialEq, Clone, Debug, Default)]
pub struct Dictionary {
    entries: Vec<(String, Value)>,
}

impl Dictionary {
    /// Creates an empty dictionary
    pub fn new() -> Self {
        Dictionary {
            entries: Vec::new(),
        }
    }

    /// Inserts an entry, replacing the value in place if the key exists
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value for `key`, or `None` if the key is absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.entries.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut dictionary = Dictionary::new();
        for (key, value) in iter {
            dictionary.insert(key, value);
        }
        dictionary
    }
}

impl IntoIterator for Dictionary {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_preserved() {
        let dictionary: Dictionary = [
            ("key1", Value::Integer(1)),
            ("key2", Value::Integer(2)),
            ("key3", Value::Integer(3)),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = dictionary.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(vec!["key1", "key2", "key3"], keys);
    }

    #[test]
    fn last_write_wins() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("a", Value::Integer(1));
        dictionary.insert("b", Value::Integer(2));
        dictionary.insert("a", Value::Text("replaced".to_owned()));

        assert_eq!(2, dictionary.len());
        assert_eq!(Some(&Value::Text("replaced".to_owned())), dictionary.get("a"));
        // Position of the replaced key is kept
        let keys: Vec<&str> = dictionary.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(vec!["a", "b"], keys);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let first: Dictionary = [("a", Value::Integer(1)), ("b", Value::Integer(2))]
            .into_iter()
            .collect();
        let second: Dictionary = [("b", Value::Integer(2)), ("a", Value::Integer(1))]
            .into_iter()
            .collect();
        assert_ne!(first, second);
    }
}
