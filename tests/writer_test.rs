use std::error::Error;

use jotson::value::{Dictionary, Value};
use jotson::writer::{self, WriteError};

type TestResult = Result<(), Box<dyn Error>>;

const STREAM_COMPLEX: &str = "{\n\t\"name\": \"complex\",\n\t\"complexity\": 1,\n\t\"items\": [\n\t\t\"item1\",\n\t\t\"item2\",\n\t\t\"item3\"\n\t],\n\t\"properties\": {\n\t\t\"type\": \"stream\",\n\t\t\"depth\": 2\n\t}\n}\n";

#[test]
fn value_number() -> TestResult {
    let mut sink = String::new();
    writer::write(&mut sink, &Value::Integer(176), None)?;
    assert_eq!("176", sink);
    Ok(())
}

#[test]
fn value_str() -> TestResult {
    let mut sink = String::new();
    writer::write(&mut sink, &"abcD123\"aaa".into(), None)?;
    assert_eq!("\"abcD123\\\"aaa\"", sink);
    Ok(())
}

#[test]
fn value_list_pretty() -> TestResult {
    let mut sink = String::new();
    writer::write(
        &mut sink,
        &Value::List(vec!["value1".into(), "value2".into(), "value3".into()]),
        Some(0),
    )?;
    assert_eq!("[\n\t\"value1\",\n\t\"value2\",\n\t\"value3\"\n]", sink);
    Ok(())
}

#[test]
fn value_dict_pretty() -> TestResult {
    let mut sink = String::new();
    let mut dictionary = writer::write_dict(&mut sink, Some(0))?;
    dictionary.put("key1", &"value1".into())?;
    dictionary.put("key2", &"value2".into())?;
    dictionary.put("key3", &"value3".into())?;
    dictionary.close()?;
    assert_eq!(
        "{\n\t\"key1\": \"value1\",\n\t\"key2\": \"value2\",\n\t\"key3\": \"value3\"\n}",
        sink
    );
    Ok(())
}

/// Builds the nested document of the reading tests with mixed dispatching and
/// scoped operations; the writer emits no trailing newline itself
#[test]
fn stream_complex() -> TestResult {
    let mut sink = String::new();

    let mut dictionary = writer::write_dict(&mut sink, Some(0))?;
    dictionary.put("name", &"complex".into())?;
    dictionary.put("complexity", &1.into())?;

    let mut items = dictionary.put_list("items")?;
    items.append(&"item1".into())?;
    items.append(&"item2".into())?;
    items.append(&"item3".into())?;
    items.close()?;

    let mut properties = dictionary.put_dict("properties")?;
    properties.put("type", &"stream".into())?;
    properties.put("depth", &2.into())?;
    properties.close()?;

    dictionary.close()?;
    sink.push('\n');

    assert_eq!(STREAM_COMPLEX, sink);
    Ok(())
}

/// Compact output contains no whitespace outside of string content
#[test]
fn compact_has_no_whitespace() -> TestResult {
    let mut sink = String::new();
    let dictionary: Dictionary = [
        ("name", Value::Text("complex".to_owned())),
        ("complexity", Value::Integer(1)),
        (
            "items",
            Value::List(vec!["item1".into(), "item2".into(), "item3".into()]),
        ),
    ]
    .into_iter()
    .collect();
    writer::write(&mut sink, &dictionary.into(), None)?;
    assert_eq!(
        r#"{"name":"complex","complexity":1,"items":["item1","item2","item3"]}"#,
        sink
    );
    assert_eq!(false, sink.contains('\n'));
    assert_eq!(false, sink.contains('\t'));
    assert_eq!(false, sink.contains(": "));
    Ok(())
}

/// Value-dispatching and scoped streaming produce byte-identical output
#[test]
fn streaming_equivalence() -> TestResult {
    let value = Value::Dictionary(
        [
            ("a", Value::Integer(1)),
            ("b", Value::List(vec![Value::Float(2.5), "x".into()])),
        ]
        .into_iter()
        .collect(),
    );

    for depth in [None, Some(0), Some(2)] {
        let mut dispatched = String::new();
        writer::write(&mut dispatched, &value, depth)?;

        let mut streamed = String::new();
        let mut dictionary = writer::write_dict(&mut streamed, depth)?;
        let mut number = dictionary.put_number("a")?;
        number.write("1")?;
        number.close()?;
        let mut items = dictionary.put_list("b")?;
        let mut item = items.append_number()?;
        item.write("2.5")?;
        item.close()?;
        let mut item = items.append_str()?;
        item.write("x")?;
        item.close()?;
        items.close()?;
        dictionary.close()?;

        // write() emits `depth` leading tabs which the scoped path also does
        assert_eq!(dispatched, streamed, "depth {depth:?}");
    }
    Ok(())
}

#[test]
fn closed_root_writer_fails() -> TestResult {
    let mut sink = String::new();
    let mut writer = writer::write_list(&mut sink, None)?;
    writer.append(&1.into())?;
    writer.close()?;
    assert!(matches!(writer.append(&2.into()), Err(WriteError::Closed)));
    assert!(matches!(writer.close(), Err(WriteError::Closed)));
    assert_eq!("[1]", sink);
    Ok(())
}
