use super::*;

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn email_accepts_simple_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["not-an-email", "@b.com", "a@", "a@b", "a@.com", "a@b.", "a@b..com", "a@@b.com", "a b@c.com", "a@b@c.com"] {
        assert!(!is_valid_email(bad), "expected {bad:?} to be rejected");
    }
}

// =============================================================
// validate_login
// =============================================================

#[test]
fn login_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login("  a@b.com ", " secret1"),
        Ok(LoginRequest { email: "a@b.com".to_owned(), password: " secret1".to_owned() })
    );
}

#[test]
fn login_requires_email() {
    assert_eq!(validate_login("   ", "secret1"), Err(ValidationError::MissingEmail));
}

#[test]
fn login_rejects_malformed_email() {
    assert_eq!(validate_login("not-an-email", "secret1"), Err(ValidationError::InvalidEmail));
}

#[test]
fn login_requires_password() {
    assert_eq!(validate_login("a@b.com", ""), Err(ValidationError::MissingPassword));
}

#[test]
fn login_rejects_short_password() {
    assert_eq!(
        validate_login("a@b.com", "12345"),
        Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN })
    );
    assert!(validate_login("a@b.com", "123456").is_ok());
}

#[test]
fn password_length_counts_characters_not_bytes() {
    // Five characters, ten bytes.
    assert!(validate_login("a@b.com", "ééééé").is_err());
    assert!(validate_login("a@b.com", "éééééé").is_ok());
}

#[test]
fn too_short_message_names_minimum() {
    assert_eq!(
        ValidationError::PasswordTooShort { min: 6 }.to_string(),
        "Password must be at least 6 characters."
    );
}

// =============================================================
// validate_signup
// =============================================================

#[test]
fn signup_builds_request() {
    assert_eq!(
        validate_signup(" Asha ", "asha@example.com", "hunter22", "hunter22"),
        Ok(SignupRequest {
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            password: "hunter22".to_owned(),
        })
    );
}

#[test]
fn signup_requires_name_first() {
    assert_eq!(validate_signup(" ", "", "", ""), Err(ValidationError::MissingName));
}

#[test]
fn signup_checks_email_then_password() {
    assert_eq!(validate_signup("Asha", "asha", "x", "x"), Err(ValidationError::InvalidEmail));
    assert_eq!(
        validate_signup("Asha", "asha@example.com", "x", "x"),
        Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN })
    );
}

#[test]
fn signup_requires_matching_confirmation() {
    assert_eq!(
        validate_signup("Asha", "asha@example.com", "hunter22", "hunter23"),
        Err(ValidationError::PasswordMismatch)
    );
}
