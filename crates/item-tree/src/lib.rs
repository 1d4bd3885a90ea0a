//! Item data model for JSON tree views.
//!
//! A Rust port of the item model behind a JSON tree-viewer component: an
//! immutable snapshot of an arbitrary JSON value as a tree of
//! [`ItemData`] nodes, each carrying its key, its JSON Pointer address,
//! its depth, and either children (objects and arrays) or a [`Scalar`]
//! payload (leaves). Trees are built once with [`build`] and queried with
//! [`get`] and [`select`]; a new value means rebuilding.
//!
//! # Example
//!
//! ```
//! use item_tree::{build, select, to_value, ItemType, Scalar};
//! use serde_json::json;
//!
//! let doc = json!({"x": 1, "y": [true, null]});
//! let tree = build(&doc);
//!
//! assert_eq!(tree.item_type(), ItemType::Object);
//! assert_eq!(tree.len(), Some(2));
//!
//! // Leaves are addressed by JSON Pointer.
//! let hit = select(&tree, "/y/1").unwrap();
//! assert_eq!(hit.key, "1");
//! assert_eq!(hit.value, Scalar::Null);
//!
//! // The tree reconstructs the value it was built from.
//! assert_eq!(to_value(&tree), doc);
//! ```

pub mod build;
pub mod select;
pub mod types;

pub use build::{build, to_value};
pub use select::{get, select, SelectError};
pub use types::{ItemData, ItemKind, ItemType, Scalar, SelectedData};
