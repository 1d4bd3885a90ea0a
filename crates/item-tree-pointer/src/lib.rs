//! JSON Pointer (RFC 6901) path strings for item trees.
//!
//! Every node in an item tree carries its location as a
//! [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901) string:
//! the root is `""`, and each level appends `/` plus the escaped object key
//! or array index. This crate implements that grammar on pointer strings
//! directly, since tree nodes store their pointer as plain data.
//!
//! # Example
//!
//! ```
//! use item_tree_pointer::{child_pointer, parse_pointer, format_pointer};
//!
//! // The builder derives each node's pointer from its parent's.
//! let root = "";
//! let y = child_pointer(root, "y");
//! let y1 = child_pointer(&y, "1");
//! assert_eq!(y1, "/y/1");
//!
//! // Pointers split into unescaped steps and format back unchanged.
//! let steps = parse_pointer(&y1);
//! assert_eq!(steps, vec!["y".to_string(), "1".to_string()]);
//! assert_eq!(format_pointer(&steps), y1);
//! ```

use thiserror::Error;

/// Escapes one pointer step.
///
/// Per RFC 6901, `~` becomes `~0` and `/` becomes `~1`.
///
/// # Example
///
/// ```
/// use item_tree_pointer::escape_step;
///
/// assert_eq!(escape_step("plain"), "plain");
/// assert_eq!(escape_step("a~b"), "a~0b");
/// assert_eq!(escape_step("c/d"), "c~1d");
/// ```
pub fn escape_step(step: &str) -> String {
    if !step.contains('~') && !step.contains('/') {
        return step.to_string();
    }
    // Order matters: ~ must be escaped before /
    step.replace('~', "~0").replace('/', "~1")
}

/// Unescapes one pointer step.
///
/// Per RFC 6901, `~1` becomes `/` and `~0` becomes `~`.
///
/// # Example
///
/// ```
/// use item_tree_pointer::unescape_step;
///
/// assert_eq!(unescape_step("a~0b"), "a~b");
/// assert_eq!(unescape_step("c~1d"), "c/d");
/// ```
pub fn unescape_step(step: &str) -> String {
    if !step.contains('~') {
        return step.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    step.replace("~1", "/").replace("~0", "~")
}

/// Splits a pointer into its unescaped steps.
///
/// The empty pointer is the root and has no steps.
///
/// # Example
///
/// ```
/// use item_tree_pointer::parse_pointer;
///
/// assert_eq!(parse_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_pointer("/"), vec![""]);
/// assert_eq!(parse_pointer("/x/0"), vec!["x", "0"]);
/// assert_eq!(parse_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// ```
pub fn parse_pointer(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer[1..].split('/').map(unescape_step).collect()
}

/// Joins steps back into a pointer string.
///
/// Inverse of [`parse_pointer`]; no steps formats as the root pointer `""`.
///
/// # Example
///
/// ```
/// use item_tree_pointer::format_pointer;
///
/// assert_eq!(format_pointer(&[]), "");
/// assert_eq!(format_pointer(&["x".to_string(), "0".to_string()]), "/x/0");
/// assert_eq!(format_pointer(&["a~b".to_string()]), "/a~0b");
/// ```
pub fn format_pointer(steps: &[String]) -> String {
    let mut out = String::new();
    for step in steps {
        out.push('/');
        out.push_str(&escape_step(step));
    }
    out
}

/// Derives the pointer of a child reached by `step` from its parent's
/// pointer.
///
/// This is how a tree builder computes every node's address: start from the
/// root's `""` and append one escaped step per level.
///
/// # Example
///
/// ```
/// use item_tree_pointer::child_pointer;
///
/// assert_eq!(child_pointer("", "x"), "/x");
/// assert_eq!(child_pointer("/x", "0"), "/x/0");
/// assert_eq!(child_pointer("", "a/b"), "/a~1b");
/// ```
pub fn child_pointer(parent: &str, step: &str) -> String {
    let escaped = escape_step(step);
    let mut out = String::with_capacity(parent.len() + 1 + escaped.len());
    out.push_str(parent);
    out.push('/');
    out.push_str(&escaped);
    out
}

/// Returns the pointer of a node's parent.
///
/// # Errors
///
/// Returns [`PointerError::NoParent`] for the root pointer.
///
/// # Example
///
/// ```
/// use item_tree_pointer::parent_pointer;
///
/// assert_eq!(parent_pointer("/x/0").unwrap(), "/x");
/// assert_eq!(parent_pointer("/x").unwrap(), "");
/// assert!(parent_pointer("").is_err());
/// ```
pub fn parent_pointer(pointer: &str) -> Result<&str, PointerError> {
    match pointer.rfind('/') {
        Some(idx) => Ok(&pointer[..idx]),
        None => Err(PointerError::NoParent),
    }
}

/// Returns the final, unescaped step of a pointer.
///
/// The root pointer has no steps and yields `None`.
///
/// # Example
///
/// ```
/// use item_tree_pointer::last_step;
///
/// assert_eq!(last_step("/x/0"), Some("0".to_string()));
/// assert_eq!(last_step("/a~1b"), Some("a/b".to_string()));
/// assert_eq!(last_step(""), None);
/// ```
pub fn last_step(pointer: &str) -> Option<String> {
    pointer
        .rfind('/')
        .map(|idx| unescape_step(&pointer[idx + 1..]))
}

/// Check if a pointer addresses the root.
pub fn is_root(pointer: &str) -> bool {
    pointer.is_empty()
}

/// Check if a step is a canonical array index.
///
/// Canonical means a non-negative decimal integer with no leading zeros
/// (except `"0"` itself), so every array slot has exactly one address.
///
/// # Example
///
/// ```
/// use item_tree_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("42"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index(""));
/// ```
pub fn is_valid_index(step: &str) -> bool {
    let bytes = step.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("NO_PARENT")]
    NoParent,
}
