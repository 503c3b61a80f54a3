//! Client-side credential validation.
//!
//! Runs before any request is built: a form that fails here never reaches
//! the network.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::config::MIN_PASSWORD_LEN;
use crate::net::types::{LoginRequest, SignupRequest};

/// Local input problems that block submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter your password.")]
    MissingPassword,
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
    #[error("Please enter your name.")]
    MissingName,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// `local@domain.tld` shape: one `@`, no whitespace, a dot inside the domain.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.') && !domain.contains("..")
}

fn check_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email.to_owned())
}

fn check_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    Ok(())
}

/// Validate the sign-in form. The email is trimmed; the password is not.
///
/// # Errors
///
/// Returns the first problem found, checking the email before the password.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    let email = check_email(email)?;
    check_password(password)?;
    Ok(LoginRequest { email, password: password.to_owned() })
}

/// Validate the sign-up form.
///
/// # Errors
///
/// Returns the first problem found, in field order: name, email, password,
/// confirmation.
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<SignupRequest, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    let email = check_email(email)?;
    check_password(password)?;
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(SignupRequest { name: name.to_owned(), email, password: password.to_owned() })
}
