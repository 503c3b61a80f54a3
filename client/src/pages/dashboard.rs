//! Dashboard shell: header with profile menu and three navigation cards.

use leptos::prelude::*;

use crate::components::dashboard_card::{CardSpec, DashboardCard};
use crate::components::profile_menu::ProfileMenu;

pub const CARDS: [CardSpec; 3] = [
    CardSpec {
        title: "Explore Patients",
        description: "Access and manage patient records, appointments, and medical history with ease.",
        theme: "blue",
        button_text: "View Patients",
    },
    CardSpec {
        title: "Doctor Portal",
        description: "Collaborate with medical staff, manage schedules, and access clinical tools.",
        theme: "green",
        button_text: "Access Portal",
    },
    CardSpec {
        title: "Hospital Management",
        description: "Oversee operations, resource allocation, and facility administration.",
        theme: "purple",
        button_text: "Manage Facility",
    },
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-wrapper">
            <div class="container">
                <header class="dashboard-header">
                    <div class="header-logo">
                        <span class="header-title">"VandanaHub"</span>
                    </div>
                    <ProfileMenu/>
                </header>
                <main class="main-content">
                    <div class="cards-grid">
                        {CARDS
                            .into_iter()
                            .enumerate()
                            .map(|(index, card)| view! { <DashboardCard card=card index=index/> })
                            .collect_view()}
                    </div>
                </main>
            </div>
        </div>
    }
}
