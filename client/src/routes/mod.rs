//! Route registry, application catalog, and navigation state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `registry` is the generic path -> deferred view table, `catalog` fills it
//! with the POS dashboards, and `outlet` is the pure state machine the
//! composition root drives on every path change.

pub mod catalog;
pub mod outlet;
pub mod registry;
