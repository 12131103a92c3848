//! Shared signal-backed state owned by the app root.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `catalog`, etc.) so individual components
//! can depend on small focused models. Each struct carries the logic and stays
//! free of view code, so every transition here is unit-testable without a
//! browser.

pub mod auth;
pub mod catalog;
pub mod evolution;
pub mod toast;
