//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting concerns from page and component logic
//! so they can be tested without a browser.

pub mod format;
