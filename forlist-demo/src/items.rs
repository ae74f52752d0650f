//! Turning JSON values into item nodes and keys.

use keydom::{Key, Node, Tag};
use serde_json::Value;

/// How one JSON item becomes a node.
#[derive(Debug, Clone)]
pub struct ItemView {
    pub tag: Tag,
    pub field: Option<String>,
    pub key_field: Option<String>,
}

impl ItemView {
    pub fn render(&self, item: &Value) -> Node {
        let shown = match &self.field {
            Some(field) => item.get(field).unwrap_or(&Value::Null),
            None => item,
        };
        Node::element(self.tag.clone()).child(Node::text(display(shown)))
    }

    /// Key for `item`, or its position when the key field is missing or not
    /// a string or integer.
    pub fn key(&self, item: &Value, index: usize) -> Key {
        let Some(field) = &self.key_field else {
            return Key::Index(index);
        };
        match item.get(field) {
            Some(Value::String(s)) => Key::from(s),
            Some(Value::Number(n)) if n.is_i64() => n.as_i64().map_or(Key::Index(index), Key::Num),
            other => {
                log::warn!("item {index}: key field {field:?} unusable ({other:?}), using position");
                Key::Index(index)
            }
        }
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
