//! Role dashboards, one per navigable module.
//!
//! ARCHITECTURE
//! ============
//! Each page owns a fixed dataset and a pure projection into `CardModel`s;
//! rendering details live in `components`.

pub mod admin;
pub mod cashier;
pub mod kitchen;
pub mod waiter;
