//! Social-login button.
//!
//! Clicking performs an unconditional full-page navigation to the backend's
//! `/auth/{provider}` route; nothing can be inspected after that, so there is
//! no error path.

#[cfg(test)]
#[path = "social_button_test.rs"]
mod social_button_test;

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::net::types::Provider;
use crate::util::browser::set_href;

fn social_label(provider: Provider, compact: bool, connecting: bool) -> String {
    if connecting {
        format!("Connecting to {}...", provider.display_name())
    } else if compact {
        provider.display_name().to_owned()
    } else {
        format!("Continue with {}", provider.display_name())
    }
}

#[component]
pub fn SocialButton(provider: Provider, #[prop(optional)] compact: bool) -> impl IntoView {
    let config = expect_context::<AuthConfig>();
    let href = provider.auth_url(&config.backend_origin);
    let connecting = RwSignal::new(false);

    let on_click = {
        let href = href.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            connecting.set(true);
            set_href(&href);
        }
    };

    view! {
        <a
            href=href
            class="social-auth-button"
            class:social-auth-button--compact=compact
            class:social-auth-button--connecting=move || connecting.get()
            data-provider=provider.key()
            on:click=on_click
        >
            {move || social_label(provider, compact, connecting.get())}
        </a>
    }
}
