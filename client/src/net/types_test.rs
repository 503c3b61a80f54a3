use super::*;

// =============================================================
// Request bodies
// =============================================================

#[test]
fn login_request_serializes_email_and_password() {
    let body = LoginRequest { email: "a@b.com".to_owned(), password: "secret1".to_owned() };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "a@b.com", "password": "secret1" }));
}

#[test]
fn signup_request_serializes_name_email_password() {
    let body = SignupRequest {
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        password: "hunter22".to_owned(),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "name": "Asha", "email": "asha@example.com", "password": "hunter22" })
    );
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn response_body_reads_token_and_redirect() {
    let body = AuthResponseBody::from_text(r#"{"token":"abc","redirect":"/home"}"#);
    assert_eq!(body.token(), Some("abc"));
    assert_eq!(body.redirect(), Some("/home"));
    assert_eq!(body.message(), None);
}

#[test]
fn response_body_ignores_unknown_fields() {
    let body = AuthResponseBody::from_text(r#"{"token":"abc","user":{"id":1}}"#);
    assert_eq!(body.token(), Some("abc"));
}

#[test]
fn response_body_malformed_json_is_empty() {
    assert_eq!(AuthResponseBody::from_text("<html>502</html>"), AuthResponseBody::default());
    assert_eq!(AuthResponseBody::from_text(""), AuthResponseBody::default());
}

#[test]
fn response_body_blank_fields_count_as_missing() {
    let body = AuthResponseBody::from_text(r#"{"token":"  ","message":""}"#);
    assert_eq!(body.token(), None);
    assert_eq!(body.message(), None);
}

#[test]
fn response_body_message_falls_back_to_error_field() {
    let body = AuthResponseBody::from_text(r#"{"error":"Invalid credentials"}"#);
    assert_eq!(body.message(), Some("Invalid credentials"));

    let both = AuthResponseBody::from_text(r#"{"message":"Nope","error":"ignored"}"#);
    assert_eq!(both.message(), Some("Nope"));
}

// =============================================================
// Status + transport errors
// =============================================================

#[test]
fn success_status_is_2xx_only() {
    assert!(is_success_status(200));
    assert!(is_success_status(201));
    assert!(is_success_status(299));
    assert!(!is_success_status(199));
    assert!(!is_success_status(302));
    assert!(!is_success_status(401));
    assert!(!is_success_status(500));
}

#[test]
fn transport_errors_display_user_facing_text() {
    let network = TransportError::Network { detail: "connection refused".to_owned() };
    assert_eq!(network.to_string(), "Network error. Please try again.");
    assert_eq!(TransportError::Timeout.to_string(), "Request timed out. Please try again.");
}

// =============================================================
// Provider
// =============================================================

#[test]
fn provider_auth_url_uses_key() {
    assert_eq!(Provider::Google.auth_url("http://localhost:3000"), "http://localhost:3000/auth/google");
    assert_eq!(Provider::GitHub.auth_url("http://localhost:3000/"), "http://localhost:3000/auth/github");
}

#[test]
fn provider_from_key_is_case_insensitive() {
    assert_eq!(Provider::from_key("google"), Some(Provider::Google));
    assert_eq!(Provider::from_key(" GitHub "), Some(Provider::GitHub));
    assert_eq!(Provider::from_key("facebook"), None);
}

#[test]
fn provider_keys_round_trip() {
    for provider in Provider::ALL {
        assert_eq!(Provider::from_key(provider.key()), Some(provider));
    }
}
