//! Client configuration for the auth backend and UI timings.
//!
//! DESIGN
//! ======
//! The backend origin and login path are baked in at compile time from
//! `VANDANAHUB_BACKEND_ORIGIN` / `VANDANAHUB_LOGIN_PATH` so the WASM bundle
//! needs no runtime config fetch. `AuthConfig` is provided as Leptos context
//! and passed explicitly to the controller so tests can build their own.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Backend origin used when no build-time override is given.
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:3000";

const BACKEND_ORIGIN: &str = match option_env!("VANDANAHUB_BACKEND_ORIGIN") {
    Some(origin) => origin,
    None => DEFAULT_BACKEND_ORIGIN,
};

const LOGIN_PATH: &str = match option_env!("VANDANAHUB_LOGIN_PATH") {
    Some(path) => path,
    None => "/login",
};

const SIGNUP_PATH: &str = "/signup";

/// Page the browser lands on after a login that names no redirect.
pub const POST_LOGIN_PAGE: &str = "preferences.html";

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// `localStorage` key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// How long an alert stays visible.
pub const ALERT_DISMISS: Duration = Duration::from_secs(5);

/// Interval between promotional slides on the auth background.
pub const CAROUSEL_INTERVAL: Duration = Duration::from_secs(5);

/// Endpoints and timings for credential submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub backend_origin: String,
    pub login_path: String,
    pub signup_path: String,
    pub post_login_page: String,
    /// Pause between a successful login and the redirect.
    pub redirect_delay: Duration,
    /// Upper bound on a single credential request.
    pub request_timeout: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            backend_origin: BACKEND_ORIGIN.to_owned(),
            login_path: LOGIN_PATH.to_owned(),
            signup_path: SIGNUP_PATH.to_owned(),
            post_login_page: POST_LOGIN_PAGE.to_owned(),
            redirect_delay: Duration::from_millis(1000),
            request_timeout: Duration::from_secs(15),
        }
    }
}

impl AuthConfig {
    #[must_use]
    pub fn login_url(&self) -> String {
        endpoint(&self.backend_origin, &self.login_path)
    }

    #[must_use]
    pub fn signup_url(&self) -> String {
        endpoint(&self.backend_origin, &self.signup_path)
    }
}

/// Join an origin and a path with exactly one slash between them.
#[must_use]
pub fn endpoint(origin: &str, path: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), path.trim_start_matches('/'))
}
