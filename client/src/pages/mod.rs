//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (signals, timers, spawned
//! requests) and delegates rendering details to `components`.

pub mod auth;
pub mod dashboard;
