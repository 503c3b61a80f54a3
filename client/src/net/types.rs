//! Request and response bodies for the auth backend.
//!
//! DESIGN
//! ======
//! Response bodies are decoded leniently: every field is optional because the
//! backend variants disagree on which of `token`, `redirect`, `message`, and
//! `error` they send. A body that is not JSON at all decodes as empty.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::config::endpoint;

/// `POST /login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /signup` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Any JSON body returned by `/login` or `/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponseBody {
    /// Opaque session token.
    #[serde(default)]
    pub token: Option<String>,
    /// Server-chosen destination after login.
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AuthResponseBody {
    /// Decode a raw body, treating malformed JSON as an empty body.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }

    /// Token if present and non-empty.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        non_empty(self.token.as_deref())
    }

    /// Redirect target if present and non-empty.
    #[must_use]
    pub fn redirect(&self) -> Option<&str> {
        non_empty(self.redirect.as_deref())
    }

    /// Human-readable message from the backend, preferring `message` over `error`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        non_empty(self.message.as_deref()).or_else(|| non_empty(self.error.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Failure to obtain any response from the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the connection dropped.
    #[error("Network error. Please try again.")]
    Network { detail: String },
    /// No response arrived within the configured timeout.
    #[error("Request timed out. Please try again.")]
    Timeout,
}

/// Result of one credential request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The backend answered; `status` may still be an error.
    Responded { status: u16, body: AuthResponseBody },
    Failed(TransportError),
}

impl AuthOutcome {
    #[must_use]
    pub fn responded(status: u16, body: AuthResponseBody) -> Self {
        Self::Responded { status, body }
    }
}

/// `true` for 2xx statuses.
#[must_use]
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Social-login vendor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Google,
    GitHub,
}

impl Provider {
    pub const ALL: [Self; 2] = [Self::Google, Self::GitHub];

    /// Short key used in `/auth/{provider}`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::GitHub => "github",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::GitHub => "GitHub",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key().eq_ignore_ascii_case(key.trim()))
    }

    /// Backend URL that starts this provider's OAuth flow.
    #[must_use]
    pub fn auth_url(self, origin: &str) -> String {
        endpoint(origin, &format!("/auth/{}", self.key()))
    }
}
