//! Networking modules for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the credential requests and `types` defines the JSON bodies
//! exchanged with the backend.

pub mod api;
pub mod types;
