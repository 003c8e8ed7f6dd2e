//! Networking modules for the POS backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the auth calls, `types` defines the JSON wire schema, and
//! `error` wraps transport failures for callers.

pub mod api;
pub mod error;
pub mod types;
