//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render auth and dashboard chrome while reading/writing shared
//! state from Leptos context providers or signals passed in by the page.

pub mod alert_banner;
pub mod dashboard_card;
pub mod profile_menu;
pub mod social_button;
