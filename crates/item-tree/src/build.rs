//! Building item trees from JSON values, and back.
//!
//! [`build`] walks a [`serde_json::Value`] once and produces a fully
//! populated snapshot; [`to_value`] is its inverse, reconstructing a value
//! deep-equal to the original. `Value` is a closed union of exactly the
//! shapes the model supports, so building cannot fail.

use serde_json::{Map, Value};

use item_tree_pointer::child_pointer;

use crate::types::{ItemData, ItemKind, Scalar};

/// Build an item tree describing `value`.
///
/// The root node has an empty `key`, the root pointer `""`, and depth 0.
/// Each child's pointer is derived by appending its key or index to the
/// parent's pointer, and its depth is the parent's plus one. Object
/// children appear in key insertion order, array children in index order.
///
/// # Example
///
/// ```
/// use item_tree::{build, ItemType};
/// use serde_json::json;
///
/// let tree = build(&json!({"x": 1, "y": [true, null]}));
/// assert_eq!(tree.item_type(), ItemType::Object);
/// assert_eq!(tree.len(), Some(2));
///
/// let y = &tree.children().unwrap()[1];
/// assert_eq!(y.key, "y");
/// assert_eq!(y.path, "/y");
/// assert_eq!(y.depth, 1);
/// ```
pub fn build(value: &Value) -> ItemData {
    build_node(value, String::new(), String::new(), 0)
}

fn build_node(value: &Value, key: String, path: String, depth: usize) -> ItemData {
    let kind = match value {
        Value::Object(map) => ItemKind::Object(
            map.iter()
                .map(|(k, v)| build_node(v, k.clone(), child_pointer(&path, k), depth + 1))
                .collect(),
        ),
        Value::Array(arr) => ItemKind::Array(
            arr.iter()
                .enumerate()
                .map(|(i, v)| {
                    let index = i.to_string();
                    let child_path = child_pointer(&path, &index);
                    build_node(v, index, child_path, depth + 1)
                })
                .collect(),
        ),
        Value::String(s) => ItemKind::Value(Scalar::String(s.clone())),
        Value::Number(n) => ItemKind::Value(Scalar::Number(n.clone())),
        Value::Bool(b) => ItemKind::Value(Scalar::Bool(*b)),
        Value::Null => ItemKind::Value(Scalar::Null),
    };
    ItemData {
        key,
        path,
        depth,
        kind,
    }
}

/// Reconstruct the JSON value an item tree was built from.
///
/// # Example
///
/// ```
/// use item_tree::{build, to_value};
/// use serde_json::json;
///
/// let doc = json!({"x": 1, "y": [true, null]});
/// assert_eq!(to_value(&build(&doc)), doc);
/// ```
pub fn to_value(item: &ItemData) -> Value {
    match &item.kind {
        ItemKind::Object(children) => Value::Object(
            children
                .iter()
                .map(|child| (child.key.clone(), to_value(child)))
                .collect::<Map<String, Value>>(),
        ),
        ItemKind::Array(children) => Value::Array(children.iter().map(to_value).collect()),
        ItemKind::Value(scalar) => scalar.to_value(),
    }
}
