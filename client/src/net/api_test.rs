use super::*;

#[test]
fn snippets_url_without_filter_is_bare_endpoint() {
    assert_eq!(snippets_url(None), "/api/snippets");
}

#[test]
fn snippets_url_with_filter_adds_category_query() {
    assert_eq!(snippets_url(Some(Category::Php)), "/api/snippets?category=PHP");
    assert_eq!(snippets_url(Some(Category::Html)), "/api/snippets?category=HTML");
    assert_eq!(snippets_url(Some(Category::Css)), "/api/snippets?category=CSS");
}

#[test]
fn list_failed_message_formats_status() {
    assert_eq!(list_failed_message(500), "snippet list failed: 500");
}

#[test]
fn create_failed_message_formats_status() {
    assert_eq!(create_failed_message(422), "snippet create failed: 422");
}
