use std::error::Error;

use jotson::reader::{self, ValueReader};
use jotson::source::{Cursor, StrSource};
use jotson::value::{Dictionary, Value};

type TestResult = Result<(), Box<dyn Error>>;

const STREAM_COMPLEX: &str = "{\n\t\"name\": \"complex\",\n\t\"complexity\": 1,\n\t\"items\": [\n\t\t\"item1\",\n\t\t\"item2\",\n\t\t\"item3\"\n\t],\n\t\"properties\": {\n\t\t\"type\": \"stream\",\n\t\t\"depth\": 2\n\t}\n}\n";

fn new_cursor(json: &str) -> Cursor<StrSource<'_>> {
    Cursor::new(StrSource::new(json))
}

#[test]
fn value_number() -> TestResult {
    let mut cursor = new_cursor("176\n");
    let mut root = reader::read(&mut cursor)?.expect("document has content");
    assert_eq!(true, root.is_number());
    assert_eq!(Value::Integer(176), root.value()?);
    Ok(())
}

#[test]
fn value_str() -> TestResult {
    let mut cursor = new_cursor("\"abcD123\\\"aaa\"\n");
    let mut root = reader::read(&mut cursor)?.expect("document has content");
    assert_eq!(true, root.is_string());
    assert_eq!(Value::Text("abcD123\"aaa".to_owned()), root.value()?);
    Ok(())
}

#[test]
fn value_list() -> TestResult {
    let json = "[\n\t\"value1\",\n\t\"value2\",\n\t\"value3\"\n]\n";
    let mut cursor = new_cursor(json);
    let mut root = reader::read(&mut cursor)?.expect("document has content");
    assert_eq!(true, root.is_list());
    assert_eq!(
        Value::List(vec![
            Value::Text("value1".to_owned()),
            Value::Text("value2".to_owned()),
            Value::Text("value3".to_owned()),
        ]),
        root.value()?
    );
    Ok(())
}

#[test]
fn value_dict() -> TestResult {
    let json = "{\n\t\"key1\": \"value1\",\n\t\"key2\": \"value2\",\n\t\"key3\": \"value3\"\n}\n";
    let mut cursor = new_cursor(json);
    let mut root = reader::read(&mut cursor)?.expect("document has content");
    assert_eq!(true, root.is_dictionary());
    let value = root.value()?;

    let expected: Dictionary = [
        ("key1", Value::Text("value1".to_owned())),
        ("key2", Value::Text("value2".to_owned())),
        ("key3", Value::Text("value3".to_owned())),
    ]
    .into_iter()
    .collect();
    assert_eq!(Value::Dictionary(expected), value);
    Ok(())
}

/// Streams through a nested document, checking kinds, keys and values of
/// every entry in document order
#[test]
fn stream_complex() -> TestResult {
    let mut cursor = new_cursor(STREAM_COMPLEX);
    let root = reader::read(&mut cursor)?.expect("document has content");
    assert_eq!(true, root.is_dictionary());

    let mut dictionary = match root {
        ValueReader::Dictionary(dictionary) => dictionary,
        _ => unreachable!(),
    };

    let (key, mut entry) = dictionary.next_entry()?.expect("has entry");
    assert_eq!("name", key);
    assert_eq!(true, entry.is_string());
    assert_eq!(Value::Text("complex".to_owned()), entry.value()?);

    let (key, mut entry) = dictionary.next_entry()?.expect("has entry");
    assert_eq!("complexity", key);
    assert_eq!(true, entry.is_number());
    assert_eq!(Value::Integer(1), entry.value()?);

    let (key, entry) = dictionary.next_entry()?.expect("has entry");
    assert_eq!("items", key);
    assert_eq!(true, entry.is_list());
    let mut items = match entry {
        ValueReader::List(items) => items,
        _ => unreachable!(),
    };
    let mut index = 0;
    while let Some(mut item) = items.next_item()? {
        index += 1;
        assert_eq!(true, item.is_string());
        assert_eq!(Value::Text(format!("item{index}")), item.value()?);
    }
    assert_eq!(3, index);

    let (key, entry) = dictionary.next_entry()?.expect("has entry");
    assert_eq!("properties", key);
    assert_eq!(true, entry.is_dictionary());
    let mut properties = match entry {
        ValueReader::Dictionary(properties) => properties,
        _ => unreachable!(),
    };
    let (key, mut entry) = properties.next_entry()?.expect("has entry");
    assert_eq!("type", key);
    assert_eq!(Value::Text("stream".to_owned()), entry.value()?);
    let (key, mut entry) = properties.next_entry()?.expect("has entry");
    assert_eq!("depth", key);
    assert_eq!(Value::Integer(2), entry.value()?);
    assert!(properties.next_entry()?.is_none());

    assert!(dictionary.next_entry()?.is_none());
    Ok(())
}

#[test]
fn malformed_number_in_dictionary() {
    let mut cursor = new_cursor("{\"key\": 12.3.4}");
    let mut root = reader::read(&mut cursor).unwrap().expect("document has content");
    match root.value() {
        Err(reader::ReadError::IllegalCharacter { character, .. }) => {
            assert_eq!('.', character);
        }
        other => panic!("Expected illegal character error (got ok: {})", other.is_ok()),
    }
}

#[test]
fn error_position() {
    let mut cursor = new_cursor("[\n1,\nx]");
    let mut root = reader::read(&mut cursor).unwrap().expect("document has content");
    match root.value() {
        Err(reader::ReadError::IllegalCharacter {
            character,
            position,
        }) => {
            assert_eq!('x', character);
            assert_eq!(2, position.line);
            assert_eq!(0, position.column);
        }
        other => panic!("Expected illegal character error (got ok: {})", other.is_ok()),
    }
}

/// The source is only advanced while a reader is traversed; whatever follows
/// the document stays unread
#[test]
fn trailing_data_stays_unread() -> TestResult {
    let mut cursor = new_cursor("[1] trailing");
    let mut root = reader::read(&mut cursor)?.expect("document has content");
    assert_eq!(Value::List(vec![Value::Integer(1)]), root.value()?);
    assert_eq!(Some(' '), cursor.next_char()?);
    assert_eq!(Some('t'), cursor.next_char()?);
    Ok(())
}
