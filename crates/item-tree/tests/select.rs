use item_tree::{build, select, Scalar, SelectError};
use serde_json::{json, Number};

#[test]
fn select_hit_matrix() {
    let tree = build(&json!({
        "x": 1,
        "y": [true, null],
        "s": "text",
        "f": 2.5,
        "a/b": {"c~d": "escaped"}
    }));

    let cases: Vec<(&str, &str, Scalar)> = vec![
        ("/x", "x", Scalar::Number(Number::from(1))),
        ("/y/0", "0", Scalar::Bool(true)),
        ("/y/1", "1", Scalar::Null),
        ("/s", "s", Scalar::String("text".to_string())),
        (
            "/f",
            "f",
            Scalar::Number(Number::from_f64(2.5).unwrap()),
        ),
        (
            "/a~1b/c~0d",
            "c~d",
            Scalar::String("escaped".to_string()),
        ),
    ];

    for (pointer, key, value) in cases {
        let hit = select(&tree, pointer).unwrap_or_else(|e| panic!("{pointer}: {e}"));
        assert_eq!(hit.key, key);
        assert_eq!(hit.value, value);
        assert_eq!(hit.path, pointer);
    }
}

#[test]
fn select_miss_matrix() {
    let tree = build(&json!({"x": 1, "y": [true, null]}));

    let not_found = ["/z", "/y/2", "/y/01", "/y/-", "/x/deeper", "/X"];
    for pointer in not_found {
        assert_eq!(
            select(&tree, pointer),
            Err(SelectError::NotFound {
                pointer: pointer.to_string()
            }),
            "{pointer}"
        );
    }

    let not_leaf = ["", "/y"];
    for pointer in not_leaf {
        assert_eq!(
            select(&tree, pointer),
            Err(SelectError::NotLeaf {
                pointer: pointer.to_string()
            }),
            "{pointer}"
        );
    }
}

#[test]
fn select_error_messages_name_the_pointer() {
    let tree = build(&json!({"y": []}));

    let err = select(&tree, "/nope").unwrap_err();
    assert!(err.to_string().contains("/nope"));

    let err = select(&tree, "/y").unwrap_err();
    assert!(err.to_string().contains("not a leaf"));
}
