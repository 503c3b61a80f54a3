//! Navigation card on the dashboard.

use leptos::prelude::*;

/// Static content for one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSpec {
    pub title: &'static str,
    pub description: &'static str,
    /// Stylesheet theme suffix (`theme-{theme}`).
    pub theme: &'static str,
    pub button_text: &'static str,
}

#[component]
pub fn DashboardCard(card: CardSpec, index: usize) -> impl IntoView {
    let style = format!("animation-delay: {}ms", index * 150);

    view! {
        <div class=format!("dashboard-card theme-{}", card.theme) style=style>
            <div class="card-content-wrapper">
                <h3 class="card-title">{card.title}</h3>
                <p class="card-description">{card.description}</p>
            </div>
            <button class="card-button" type="button">
                {card.button_text}
            </button>
        </div>
    }
}
