//! Avatar button with the profile dropdown.
//!
//! Logout clears the session through the shared `Session` and returns to
//! the auth page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{BrowserStorage, Session};
use crate::state::ui::UiState;

#[component]
pub fn ProfileMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<Session<BrowserStorage>>();
    let navigate = use_navigate();

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        session.clear();
        ui.update(UiState::close_menu);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="profile-menu-wrapper">
            <button
                class="avatar-button"
                type="button"
                aria-haspopup="menu"
                aria-expanded=move || ui.with(|s| s.menu_open).to_string()
                on:click=move |_| ui.update(UiState::toggle_menu)
            >
                <span class="avatar-image">"U"</span>
            </button>
            <div class="profile-menu" role="menu" hidden=move || !ui.with(|s| s.menu_open)>
                <a href="#" class="profile-menu-item" on:click=|ev: leptos::ev::MouseEvent| ev.prevent_default()>
                    "Settings"
                </a>
                <a href="/" class="profile-menu-item profile-menu-logout" on:click=on_logout>
                    "Logout"
                </a>
            </div>
        </div>
    }
}
