#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_href_is_fallback_in_non_hydrate_tests() {
    assert_eq!(current_href(), FALLBACK_BASE_URL);
}

#[test]
fn fallback_base_is_absolute() {
    assert!(url::Url::parse(FALLBACK_BASE_URL).is_ok());
}

#[test]
fn navigation_is_noop_but_callable() {
    set_href("/dashboard");
    set_href_after("/dashboard".to_owned(), Duration::from_millis(10));
}
