use super::*;

#[test]
fn notification_kind_default_is_success() {
    assert_eq!(NotificationKind::default(), NotificationKind::Success);
}

#[test]
fn notification_ttl_is_three_seconds() {
    assert_eq!(NOTIFICATION_TTL, Duration::from_millis(3000));
}

#[test]
fn css_class_follows_kind() {
    let ok = Notification { id: 1, message: CODE_COPIED.to_owned(), kind: NotificationKind::Success };
    let err = Notification { id: 2, message: COPY_FAILED.to_owned(), kind: NotificationKind::Error };
    assert_eq!(ok.css_class(), "notification notification--success");
    assert_eq!(err.css_class(), "notification notification--error");
    assert!(!ok.is_error());
    assert!(err.is_error());
}
