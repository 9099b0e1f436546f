//! Projection of the free-form `quick_links` configuration value.
//!
//! - a string is an item
//! - an array is its elements, in order
//! - an object with `title` is an item, or a group when it has `items`
//! - any other object maps each key to a link, submenu or group

use ohmybar_types::{GroupNode, LeafItem, MenuNode};
use serde_json::{Map, Value};

pub fn quick_links(value: &Value) -> Vec<MenuNode> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(values) => values.iter().flat_map(quick_links).collect(),
        Value::Object(fields) if fields.contains_key("title") => vec![titled(fields)],
        Value::Object(fields) => fields
            .iter()
            .filter(|(key, _)| key.as_str() != "pad")
            .map(|(key, value)| keyed(key, value))
            .collect(),
        scalar => vec![LeafItem::new(text(scalar)).into()],
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    fields.get(name).filter(|value| !value.is_null()).map(text)
}

fn pad_field(fields: &Map<String, Value>) -> Option<usize> {
    fields
        .get("pad")
        .and_then(Value::as_u64)
        .and_then(|pad| usize::try_from(pad).ok())
}

fn titled(fields: &Map<String, Value>) -> MenuNode {
    let mut node = GroupNode::new(string_field(fields, "title").unwrap_or_default())
        .href(string_field(fields, "href"))
        .color(string_field(fields, "color"));
    node.image = string_field(fields, "image");
    node.size = fields
        .get("size")
        .and_then(Value::as_u64)
        .and_then(|size| u32::try_from(size).ok());
    node.pad = pad_field(fields);

    match fields.get("items") {
        Some(items) if !items.is_null() => {
            node.children = quick_links(items);
            node.into()
        }
        _ => LeafItem {
            title: node.title,
            href: node.href,
            color: node.color,
            size: node.size,
            image: node.image,
            pad: node.pad,
        }
        .into(),
    }
}

fn keyed(key: &str, value: &Value) -> MenuNode {
    match value {
        Value::Object(fields) => {
            let mut node = GroupNode::new(key);
            node.pad = pad_field(fields);
            node.children = quick_links(value);
            node.into()
        }
        Value::Array(_) => {
            let mut node = GroupNode::new(key);
            node.children = quick_links(value);
            node.into()
        }
        Value::Null => LeafItem::new(key).into(),
        link => LeafItem::new(key).href(text(link)).into(),
    }
}
