//! REST helpers for the external auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! a `gloo-timers` timeout so a hung backend cannot leave a form disabled.
//! Server-side (SSR): stubs reporting a transport failure, since credential
//! requests are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to an `AuthOutcome` instead of panicking or returning
//! early; the controller decides what the user sees.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use serde::Serialize;

use super::types::{AuthOutcome, LoginRequest, SignupRequest, TransportError};
use crate::config::AuthConfig;

/// `POST {origin}{login_path}` with `{email, password}`.
pub async fn login(config: &AuthConfig, request: &LoginRequest) -> AuthOutcome {
    post_json(&config.login_url(), request, config.request_timeout).await
}

/// `POST {origin}/signup` with `{name, email, password}`.
pub async fn signup(config: &AuthConfig, request: &SignupRequest) -> AuthOutcome {
    post_json(&config.signup_url(), request, config.request_timeout).await
}

fn timeout_millis(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

async fn post_json<T: Serialize>(url: &str, body: &T, timeout: Duration) -> AuthOutcome {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        use super::types::AuthResponseBody;

        let request = match gloo_net::http::Request::post(url).json(body) {
            Ok(request) => request,
            Err(e) => return AuthOutcome::Failed(TransportError::Network { detail: e.to_string() }),
        };
        let send = Box::pin(request.send());
        let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_millis(timeout)));

        match select(send, timer).await {
            Either::Left((Ok(resp), _)) => {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                log::debug!("auth request to {url} answered {status}");
                AuthOutcome::responded(status, AuthResponseBody::from_text(&text))
            }
            Either::Left((Err(e), _)) => {
                log::warn!("auth request to {url} failed: {e}");
                AuthOutcome::Failed(TransportError::Network { detail: e.to_string() })
            }
            Either::Right(((), _)) => {
                log::warn!("auth request to {url} timed out after {}ms", timeout_millis(timeout));
                AuthOutcome::Failed(TransportError::Timeout)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body, timeout_millis(timeout));
        AuthOutcome::Failed(TransportError::Network { detail: "not available on server".to_owned() })
    }
}
