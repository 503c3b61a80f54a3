use super::*;

#[test]
fn label_full_width() {
    assert_eq!(social_label(Provider::Google, false, false), "Continue with Google");
}

#[test]
fn label_compact() {
    assert_eq!(social_label(Provider::GitHub, true, false), "GitHub");
}

#[test]
fn label_connecting_wins() {
    assert_eq!(social_label(Provider::GitHub, true, true), "Connecting to GitHub...");
    assert_eq!(social_label(Provider::Google, false, true), "Connecting to Google...");
}
