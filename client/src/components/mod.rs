//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `layout` is the persistent frame, `module_outlet` is the composition root
//! rendered inside it, and the card/frame components give every dashboard
//! the same presentation.

pub mod dashboard_frame;
pub mod layout;
pub mod module_outlet;
pub mod summary_card;
