use super::*;

#[test]
fn timeout_millis_converts_duration() {
    assert_eq!(timeout_millis(Duration::from_secs(15)), 15_000);
    assert_eq!(timeout_millis(Duration::from_millis(250)), 250);
}

#[test]
fn timeout_millis_saturates_instead_of_wrapping() {
    assert_eq!(timeout_millis(Duration::from_secs(u64::MAX / 1000)), u32::MAX);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn login_without_browser_reports_transport_failure() {
    let config = AuthConfig::default();
    let request = LoginRequest { email: "a@b.com".to_owned(), password: "secret1".to_owned() };
    let outcome = futures::executor::block_on(login(&config, &request));
    assert!(matches!(outcome, AuthOutcome::Failed(TransportError::Network { .. })));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn signup_without_browser_reports_transport_failure() {
    let config = AuthConfig::default();
    let request = SignupRequest {
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        password: "hunter22".to_owned(),
    };
    let outcome = futures::executor::block_on(signup(&config, &request));
    assert!(matches!(outcome, AuthOutcome::Failed(TransportError::Network { .. })));
}
