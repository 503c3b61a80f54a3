//! Window location helpers.
//!
//! TRADE-OFFS
//! ==========
//! Navigation is browser-only behavior; SSR paths return a fixed base URL or
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::time::Duration;

/// Base used to resolve relative destinations when no window is available.
pub const FALLBACK_BASE_URL: &str = "http://localhost/";

/// Current page URL, or [`FALLBACK_BASE_URL`] outside the browser.
pub fn current_href() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_else(|| FALLBACK_BASE_URL.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_BASE_URL.to_owned()
    }
}

/// Full-page navigation to `url`.
pub fn set_href(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::error!("navigation to {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Navigate to `url` once `delay` has elapsed.
pub fn set_href_after(url: String, delay: Duration) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if !delay.is_zero() {
            gloo_timers::future::sleep(delay).await;
        }
        set_href(&url);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, delay);
    }
}
