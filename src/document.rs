//! Document builders
//!
//! Analysis definitions never produce JSON directly. They write fields into
//! a `DocumentBuilder`, which decides what to do with them. Two builders are
//! provided: `JsonTreeBuilder` assembles a `serde_json::Value` and
//! `JsonWriter` streams compact JSON text.

use serde_json::{Map, Value};


/// A value that can be written into a document field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    String(&'a str),
    Boolean(bool),
    Integer(i64),
    Strings(Vec<&'a str>),
}


impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> FieldValue<'a> {
        FieldValue::String(value)
    }
}


impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> FieldValue<'a> {
        FieldValue::String(value)
    }
}


impl<'a> From<bool> for FieldValue<'a> {
    fn from(value: bool) -> FieldValue<'a> {
        FieldValue::Boolean(value)
    }
}


impl<'a> From<i32> for FieldValue<'a> {
    fn from(value: i32) -> FieldValue<'a> {
        FieldValue::Integer(value as i64)
    }
}


impl<'a> From<i64> for FieldValue<'a> {
    fn from(value: i64) -> FieldValue<'a> {
        FieldValue::Integer(value)
    }
}


impl<'a> From<&'a [String]> for FieldValue<'a> {
    fn from(values: &'a [String]) -> FieldValue<'a> {
        FieldValue::Strings(values.iter().map(|value| value.as_str()).collect())
    }
}


impl<'a> From<Vec<&'a str>> for FieldValue<'a> {
    fn from(values: Vec<&'a str>) -> FieldValue<'a> {
        FieldValue::Strings(values)
    }
}


impl<'a> From<FieldValue<'a>> for Value {
    fn from(value: FieldValue<'a>) -> Value {
        match value {
            FieldValue::String(string) => Value::String(string.to_owned()),
            FieldValue::Boolean(boolean) => Value::Bool(boolean),
            FieldValue::Integer(integer) => Value::from(integer),
            FieldValue::Strings(strings) => {
                Value::Array(strings.into_iter().map(|string| Value::String(string.to_owned())).collect())
            }
        }
    }
}


/// Accumulates nested key/value output
pub trait DocumentBuilder {
    /// Opens an object. `None` opens an anonymous object, normally the
    /// document root.
    fn start_object(&mut self, name: Option<&str>);

    /// Closes the innermost open object
    fn end_object(&mut self);

    /// Appends a field to the innermost open object
    fn field(&mut self, key: &str, value: FieldValue);
}


/// A document has exactly one root. Once it is closed, further output is
/// dropped.
fn root_closed_warning() {
    warn!("document root already closed, ignoring further output");
}


/// Builds an in-memory `serde_json::Value` tree
#[derive(Debug, Default)]
pub struct JsonTreeBuilder {
    stack: Vec<(Option<String>, Map<String, Value>)>,
    root: Option<Value>,
}


impl JsonTreeBuilder {
    pub fn new() -> JsonTreeBuilder {
        JsonTreeBuilder::default()
    }

    /// Closes any objects still open and returns the document
    ///
    /// An empty object is returned when nothing was written.
    pub fn finish(mut self) -> Value {
        while !self.stack.is_empty() {
            self.end_object();
        }

        self.root.unwrap_or_else(|| Value::Object(Map::new()))
    }
}


impl DocumentBuilder for JsonTreeBuilder {
    fn start_object(&mut self, name: Option<&str>) {
        if self.stack.is_empty() && self.root.is_some() {
            root_closed_warning();
            return;
        }

        self.stack.push((name.map(|name| name.to_owned()), Map::new()));
    }

    fn end_object(&mut self) {
        let (name, object) = match self.stack.pop() {
            Some(entry) => entry,
            None => {
                warn!("end_object() called with no open object");
                return;
            }
        };

        match self.stack.last_mut() {
            Some(&mut (_, ref mut parent)) => {
                // Anonymous objects only make sense at the root
                let key = name.unwrap_or_default();
                parent.insert(key, Value::Object(object));
            }
            None => {
                self.root = Some(Value::Object(object));
            }
        }
    }

    fn field(&mut self, key: &str, value: FieldValue) {
        if self.stack.is_empty() {
            if self.root.is_some() {
                root_closed_warning();
                return;
            }

            self.start_object(None);
        }

        if let Some(&mut (_, ref mut object)) = self.stack.last_mut() {
            object.insert(key.to_owned(), value.into());
        }
    }
}


/// Streams compact JSON text into a `String`
///
/// Given the same calls, the output is the text `serde_json::to_string`
/// produces for the tree built by `JsonTreeBuilder`, as long as keys within
/// each object are unique. The writer does not look back at earlier keys, so
/// a repeated key is written twice, while the tree keeps one entry holding
/// the last value.
#[derive(Debug, Default)]
pub struct JsonWriter {
    output: String,

    // One entry per open object, true once the object has a member
    open: Vec<bool>,

    root_closed: bool,
}


impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter::default()
    }

    /// Closes any objects still open and returns the text
    pub fn finish(mut self) -> String {
        while !self.open.is_empty() {
            self.end_object();
        }

        if self.output.is_empty() {
            self.output.push_str("{}");
        }

        self.output
    }

    fn write_key(&mut self, key: &str) {
        if self.open.is_empty() {
            self.output.push('{');
            self.open.push(false);
        }

        if let Some(has_members) = self.open.last_mut() {
            if *has_members {
                self.output.push(',');
            }
            *has_members = true;
        }

        self.output.push_str(&Value::String(key.to_owned()).to_string());
        self.output.push(':');
    }
}


impl DocumentBuilder for JsonWriter {
    fn start_object(&mut self, name: Option<&str>) {
        if self.open.is_empty() && self.root_closed {
            root_closed_warning();
            return;
        }

        match name {
            Some(name) => self.write_key(name),
            None => {
                if !self.open.is_empty() {
                    self.write_key("");
                }
            }
        }

        self.output.push('{');
        self.open.push(false);
    }

    fn end_object(&mut self) {
        if self.open.pop().is_none() {
            warn!("end_object() called with no open object");
            return;
        }

        self.output.push('}');

        if self.open.is_empty() {
            self.root_closed = true;
        }
    }

    fn field(&mut self, key: &str, value: FieldValue) {
        if self.open.is_empty() && self.root_closed {
            root_closed_warning();
            return;
        }

        self.write_key(key);
        self.output.push_str(&Value::from(value).to_string());
    }
}


#[cfg(test)]
mod tests {
    use serde_json::{self, Value};

    use super::{DocumentBuilder, FieldValue, JsonTreeBuilder, JsonWriter};

    fn write_sample(doc: &mut dyn DocumentBuilder) {
        doc.start_object(None);
        doc.start_object(Some("analysis"));
        doc.field("type", "custom".into());
        doc.field("lowercase", false.into());
        doc.field("max_token_length", 10i32.into());
        doc.field("filter", vec!["lowercase", "asciifolding"].into());
        doc.end_object();
        doc.field("quote", "say \"hi\"".into());
        doc.end_object();
    }

    #[test]
    fn test_tree_builder() {
        let mut doc = JsonTreeBuilder::new();
        write_sample(&mut doc);

        assert_eq!(doc.finish(), json!({
            "analysis": {
                "type": "custom",
                "lowercase": false,
                "max_token_length": 10,
                "filter": ["lowercase", "asciifolding"],
            },
            "quote": "say \"hi\"",
        }));
    }

    #[test]
    fn test_writer_matches_tree_builder() {
        let mut tree = JsonTreeBuilder::new();
        write_sample(&mut tree);

        let mut writer = JsonWriter::new();
        write_sample(&mut writer);

        assert_eq!(writer.finish(), serde_json::to_string(&tree.finish()).unwrap());
    }

    #[test]
    fn test_writer_output() {
        let mut writer = JsonWriter::new();
        write_sample(&mut writer);

        assert_eq!(
            writer.finish(),
            r#"{"analysis":{"type":"custom","lowercase":false,"max_token_length":10,"filter":["lowercase","asciifolding"]},"quote":"say \"hi\""}"#
        );
    }

    #[test]
    fn test_empty_documents() {
        assert_eq!(JsonTreeBuilder::new().finish(), json!({}));
        assert_eq!(JsonWriter::new().finish(), "{}");
    }

    #[test]
    fn test_unclosed_objects_are_closed_on_finish() {
        let mut tree = JsonTreeBuilder::new();
        tree.start_object(None);
        tree.start_object(Some("a"));
        tree.field("b", true.into());
        assert_eq!(tree.finish(), json!({"a": {"b": true}}));

        let mut writer = JsonWriter::new();
        writer.start_object(None);
        writer.start_object(Some("a"));
        writer.field("b", true.into());
        assert_eq!(writer.finish(), r#"{"a":{"b":true}}"#);
    }

    #[test]
    fn test_field_without_open_object() {
        let mut tree = JsonTreeBuilder::new();
        tree.field("type", "stop".into());
        assert_eq!(tree.finish(), json!({"type": "stop"}));

        let mut writer = JsonWriter::new();
        writer.field("type", "stop".into());
        assert_eq!(writer.finish(), r#"{"type":"stop"}"#);
    }

    #[test]
    fn test_unbalanced_end_object_is_ignored() {
        let mut tree = JsonTreeBuilder::new();
        tree.start_object(None);
        tree.end_object();
        tree.end_object();
        assert_eq!(tree.finish(), json!({}));

        let mut writer = JsonWriter::new();
        writer.start_object(None);
        writer.end_object();
        writer.end_object();
        assert_eq!(writer.finish(), "{}");
    }

    #[test]
    fn test_output_after_root_closed_is_ignored() {
        fn write_after_close(doc: &mut dyn DocumentBuilder) {
            doc.start_object(None);
            doc.field("a", true.into());
            doc.end_object();
            doc.field("b", false.into());
            doc.start_object(Some("c"));
            doc.field("d", 1i32.into());
            doc.end_object();
        }

        let mut tree = JsonTreeBuilder::new();
        write_after_close(&mut tree);

        let mut writer = JsonWriter::new();
        write_after_close(&mut writer);

        let tree = tree.finish();
        assert_eq!(tree, json!({"a": true}));
        assert_eq!(writer.finish(), serde_json::to_string(&tree).unwrap());
    }

    #[test]
    fn test_implicit_root_closes_like_explicit_root() {
        let mut tree = JsonTreeBuilder::new();
        tree.field("a", true.into());
        tree.end_object();
        tree.field("b", false.into());

        let mut writer = JsonWriter::new();
        writer.field("a", true.into());
        writer.end_object();
        writer.field("b", false.into());

        assert_eq!(tree.finish(), json!({"a": true}));
        assert_eq!(writer.finish(), r#"{"a":true}"#);
    }

    #[test]
    fn test_repeated_key() {
        fn write_repeated(doc: &mut dyn DocumentBuilder) {
            doc.start_object(None);
            doc.start_object(Some("dup"));
            doc.field("type", "stop".into());
            doc.end_object();
            doc.start_object(Some("dup"));
            doc.field("type", "standard".into());
            doc.end_object();
            doc.end_object();
        }

        let mut tree = JsonTreeBuilder::new();
        write_repeated(&mut tree);
        assert_eq!(tree.finish(), json!({"dup": {"type": "standard"}}));

        let mut writer = JsonWriter::new();
        write_repeated(&mut writer);
        assert_eq!(writer.finish(), r#"{"dup":{"type":"stop"},"dup":{"type":"standard"}}"#);
    }

    #[test]
    fn test_string_list_from_owned_strings() {
        let words = vec!["the".to_string(), "a".to_string()];
        let value: Value = FieldValue::from(&words[..]).into();

        assert_eq!(value, json!(["the", "a"]));
    }
}
