//! Resolving pointers against a built tree and selecting leaves.

use thiserror::Error;

use item_tree_pointer::{is_valid_index, parse_pointer};

use crate::types::{ItemData, ItemKind, SelectedData};

/// Resolve a JSON Pointer to a node of the tree.
///
/// Object steps match a child's key, array steps must be canonical indices,
/// and descending through a leaf misses. Returns `None` when the pointer
/// addresses no node.
///
/// # Example
///
/// ```
/// use item_tree::{build, get};
/// use serde_json::json;
///
/// let tree = build(&json!({"x": 1, "y": [true, null]}));
/// assert_eq!(get(&tree, "/y/0").unwrap().path, "/y/0");
/// assert!(get(&tree, "/y/2").is_none());
/// assert!(get(&tree, "/x/deeper").is_none());
/// ```
pub fn get<'a>(root: &'a ItemData, pointer: &str) -> Option<&'a ItemData> {
    let mut current = root;
    for step in parse_pointer(pointer) {
        current = match &current.kind {
            ItemKind::Object(children) => children.iter().find(|child| child.key == step)?,
            ItemKind::Array(children) => {
                if !is_valid_index(&step) {
                    return None;
                }
                let index: usize = step.parse().ok()?;
                children.get(index)?
            }
            ItemKind::Value(_) => return None,
        };
    }
    Some(current)
}

/// Select the leaf a pointer addresses.
///
/// # Errors
///
/// - [`SelectError::NotFound`] when the pointer resolves to no node.
/// - [`SelectError::NotLeaf`] when it resolves to an object or array.
///
/// A miss is always reported; no default value is fabricated.
///
/// # Example
///
/// ```
/// use item_tree::{build, select, Scalar};
/// use serde_json::json;
///
/// let tree = build(&json!({"x": 1, "y": [true, null]}));
///
/// let hit = select(&tree, "/y/1").unwrap();
/// assert_eq!(hit.key, "1");
/// assert_eq!(hit.value, Scalar::Null);
/// assert_eq!(hit.path, "/y/1");
///
/// assert!(select(&tree, "/missing").is_err());
/// assert!(select(&tree, "/y").is_err());
/// ```
pub fn select(root: &ItemData, pointer: &str) -> Result<SelectedData, SelectError> {
    let node = get(root, pointer).ok_or_else(|| SelectError::NotFound {
        pointer: pointer.to_string(),
    })?;
    match &node.kind {
        ItemKind::Value(scalar) => Ok(SelectedData {
            key: node.key.clone(),
            value: scalar.clone(),
            path: node.path.clone(),
        }),
        _ => Err(SelectError::NotLeaf {
            pointer: pointer.to_string(),
        }),
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("no node at pointer {pointer:?}")]
    NotFound { pointer: String },
    #[error("node at pointer {pointer:?} is not a leaf")]
    NotLeaf { pointer: String },
}
