use super::*;

#[test]
fn page_label_formats_position() {
    assert_eq!(page_label(2, 3), "Page 2 / 3");
}

#[test]
fn page_label_never_shows_zero_pages() {
    assert_eq!(page_label(1, 0), "Page 1 / 1");
}
