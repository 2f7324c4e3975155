use super::*;

// =============================================================
// Category
// =============================================================

#[test]
fn category_parses_wire_spelling() {
    assert_eq!("PHP".parse::<Category>(), Ok(Category::Php));
    assert_eq!("HTML".parse::<Category>(), Ok(Category::Html));
    assert_eq!("CSS".parse::<Category>(), Ok(Category::Css));
}

#[test]
fn category_requires_exact_select_value() {
    assert!(" CSS ".parse::<Category>().is_err());
    assert!("PHP\n".parse::<Category>().is_err());
}

#[test]
fn category_rejects_empty_and_unknown() {
    assert!("".parse::<Category>().is_err());
    assert!("php".parse::<Category>().is_err());
    assert!("Rust".parse::<Category>().is_err());
}

#[test]
fn category_serializes_as_uppercase_string() {
    assert_eq!(serde_json::to_value(Category::Html).unwrap(), serde_json::json!("HTML"));
}

#[test]
fn category_all_is_filter_bar_order() {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(labels, ["PHP", "HTML", "CSS"]);
}

// =============================================================
// Snippet
// =============================================================

#[test]
fn snippet_deserializes_integer_id() {
    let raw = serde_json::json!({
        "id": 42,
        "title": "Hello",
        "description": "prints hello",
        "category": "PHP",
        "code": "<?php echo 'hello';"
    });
    let snippet: Snippet = serde_json::from_value(raw).unwrap();
    assert_eq!(snippet.id, SnippetId::Number(42));
    assert_eq!(snippet.id.to_string(), "42");
    assert_eq!(snippet.category, Category::Php);
}

#[test]
fn snippet_deserializes_string_id() {
    let raw = serde_json::json!({
        "id": "abc-1",
        "title": "Flex",
        "description": "center",
        "category": "CSS",
        "code": ".x { display: flex; }"
    });
    let snippet: Snippet = serde_json::from_value(raw).unwrap();
    assert_eq!(snippet.id, SnippetId::Text("abc-1".to_owned()));
}

#[test]
fn snippet_code_whitespace_is_preserved() {
    let raw = r#"{"id":1,"title":"t","description":"d","category":"HTML","code":"  <div>\n\t</div>\n"}"#;
    let snippet: Snippet = serde_json::from_str(raw).unwrap();
    assert_eq!(snippet.code, "  <div>\n\t</div>\n");
}

#[test]
fn snippet_rejects_unknown_category() {
    let raw = r#"{"id":1,"title":"t","description":"d","category":"JS","code":"x"}"#;
    assert!(serde_json::from_str::<Snippet>(raw).is_err());
}

// =============================================================
// NewSnippet
// =============================================================

#[test]
fn new_snippet_payload_has_exactly_four_fields() {
    let payload = NewSnippet {
        title: "t".to_owned(),
        description: "d".to_owned(),
        category: Category::Css,
        code: "c".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "title": "t", "description": "d", "category": "CSS", "code": "c" })
    );
}
