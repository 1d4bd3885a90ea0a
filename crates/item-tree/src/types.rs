//! Type definitions for the item data model.
//!
//! The upstream component described tree nodes as a flat record with
//! mutually exclusive optional fields (`children`/`length` for containers,
//! `value` for leaves). Here that becomes the [`ItemKind`] tagged union, so
//! an invalid combination such as a leaf with children cannot be
//! constructed. The record view survives as accessors and in the
//! `Serialize` output, which reproduces the original flat shape.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

/// The three shapes a tree node can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// A key-value mapping (JSON object).
    Object,
    /// An ordered sequence (JSON array).
    Array,
    /// A terminal scalar.
    Value,
}

/// A JSON leaf value.
///
/// `Null` is a member in its own right, never "field absent", and numbers
/// keep [`serde_json::Number`] precision exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl Scalar {
    /// Convert back to the JSON value this scalar was built from.
    pub fn to_value(&self) -> Value {
        match self {
            Scalar::String(s) => Value::String(s.clone()),
            Scalar::Number(n) => Value::Number(n.clone()),
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Null => Value::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::String(s) => serializer.serialize_str(s),
            Scalar::Number(n) => n.serialize(serializer),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Null => serializer.serialize_unit(),
        }
    }
}

/// The payload of a tree node, keyed on [`ItemType`].
///
/// Containers own their children by value; object children keep key
/// insertion order, array children keep index order.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Object(Vec<ItemData>),
    Array(Vec<ItemData>),
    Value(Scalar),
}

/// One node of an item tree.
///
/// Instances come from [`build`](crate::build) and are not mutated
/// afterwards; `path` and `depth` are derived from the node's position and
/// stay consistent with the actual nesting.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemData {
    /// The object key or array index (as text) under which this node is
    /// stored in its parent. Empty for the root.
    pub key: String,
    /// JSON Pointer address of this node, unique within its tree.
    pub path: String,
    /// Edge count from the root; the root is 0.
    pub depth: usize,
    /// The node's payload.
    pub kind: ItemKind,
}

impl ItemData {
    /// Classify this node.
    pub fn item_type(&self) -> ItemType {
        match self.kind {
            ItemKind::Object(_) => ItemType::Object,
            ItemKind::Array(_) => ItemType::Array,
            ItemKind::Value(_) => ItemType::Value,
        }
    }

    /// Number of direct children. `None` for leaves.
    pub fn len(&self) -> Option<usize> {
        self.children().map(<[ItemData]>::len)
    }

    /// Direct children in source order. `None` for leaves.
    pub fn children(&self) -> Option<&[ItemData]> {
        match &self.kind {
            ItemKind::Object(children) | ItemKind::Array(children) => Some(children),
            ItemKind::Value(_) => None,
        }
    }

    /// The scalar payload. `None` for containers.
    pub fn value(&self) -> Option<&Scalar> {
        match &self.kind {
            ItemKind::Value(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, ItemKind::Value(_))
    }
}

impl Serialize for ItemData {
    /// Serializes as the upstream flat record: `length`/`children` only on
    /// containers, `value` only on leaves.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = if self.is_leaf() { 5 } else { 6 };
        let mut record = serializer.serialize_struct("ItemData", fields)?;
        record.serialize_field("key", &self.key)?;
        record.serialize_field("type", &self.item_type())?;
        record.serialize_field("path", &self.path)?;
        record.serialize_field("depth", &self.depth)?;
        match &self.kind {
            ItemKind::Object(children) | ItemKind::Array(children) => {
                record.serialize_field("length", &children.len())?;
                record.serialize_field("children", children)?;
            }
            ItemKind::Value(scalar) => {
                record.serialize_field("value", scalar)?;
            }
        }
        record.end()
    }
}

/// A single leaf selection: the leaf's key, scalar payload, and address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedData {
    pub key: String,
    pub value: Scalar,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(key: &str, path: &str, depth: usize, scalar: Scalar) -> ItemData {
        ItemData {
            key: key.to_string(),
            path: path.to_string(),
            depth,
            kind: ItemKind::Value(scalar),
        }
    }

    #[test]
    fn test_item_type_classification() {
        let node = ItemData {
            key: String::new(),
            path: String::new(),
            depth: 0,
            kind: ItemKind::Array(vec![]),
        };
        assert_eq!(node.item_type(), ItemType::Array);
        assert_eq!(node.len(), Some(0));
        assert!(node.value().is_none());
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_leaf_accessors() {
        let node = leaf("x", "/x", 1, Scalar::Bool(true));
        assert_eq!(node.item_type(), ItemType::Value);
        assert_eq!(node.len(), None);
        assert!(node.children().is_none());
        assert_eq!(node.value(), Some(&Scalar::Bool(true)));
        assert!(node.is_leaf());
    }

    #[test]
    fn test_scalar_to_value() {
        assert_eq!(Scalar::String("hi".to_string()).to_value(), json!("hi"));
        assert_eq!(Scalar::Bool(false).to_value(), json!(false));
        assert_eq!(Scalar::Null.to_value(), Value::Null);
        assert!(Scalar::Null.is_null());

        let n = Scalar::Number(Number::from(7));
        assert_eq!(n.to_value(), json!(7));
    }

    #[test]
    fn test_serialize_leaf_record() {
        let node = leaf("x", "/x", 1, Scalar::Null);
        let out = serde_json::to_value(&node).unwrap();
        assert_eq!(
            out,
            json!({"key": "x", "type": "value", "path": "/x", "depth": 1, "value": null})
        );
    }

    #[test]
    fn test_serialize_container_record() {
        let node = ItemData {
            key: String::new(),
            path: String::new(),
            depth: 0,
            kind: ItemKind::Object(vec![leaf("a", "/a", 1, Scalar::Bool(true))]),
        };
        let out = serde_json::to_value(&node).unwrap();
        assert_eq!(
            out,
            json!({
                "key": "",
                "type": "object",
                "path": "",
                "depth": 0,
                "length": 1,
                "children": [
                    {"key": "a", "type": "value", "path": "/a", "depth": 1, "value": true}
                ]
            })
        );
    }

    #[test]
    fn test_serialize_selected_data() {
        let selected = SelectedData {
            key: "1".to_string(),
            value: Scalar::Null,
            path: "/y/1".to_string(),
        };
        let out = serde_json::to_value(&selected).unwrap();
        assert_eq!(out, json!({"key": "1", "value": null, "path": "/y/1"}));
    }
}
