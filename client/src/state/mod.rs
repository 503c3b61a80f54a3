//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `session`, `alert`, etc.) so individual
//! components can depend on small focused models. Everything here is plain
//! data; pages wrap it in `RwSignal`s.

pub mod alert;
pub mod auth;
pub mod carousel;
pub mod session;
pub mod ui;
