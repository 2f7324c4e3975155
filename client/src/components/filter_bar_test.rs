use super::*;

#[test]
fn filter_options_start_with_all() {
    assert_eq!(
        filter_options(),
        vec![None, Some(Category::Php), Some(Category::Html), Some(Category::Css)]
    );
}

#[test]
fn filter_label_uses_tous_for_all() {
    assert_eq!(filter_label(None), "Tous");
    assert_eq!(filter_label(Some(Category::Css)), "CSS");
}

#[test]
fn filter_button_class_marks_active() {
    assert!(filter_button_class(true).ends_with("--active"));
    assert_eq!(filter_button_class(false), "filter-bar__button");
}
