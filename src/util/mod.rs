//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure functions for the rules that gate UI affordances (filters, bid
//! validation, timer urgency, guarded routes). Keeping them out of view code
//! lets the tests pin the behavior without a browser.

pub mod bid;
pub mod filter;
pub mod guard;
pub mod time_left;
