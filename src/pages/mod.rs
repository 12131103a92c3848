//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod auctions;
pub mod auth;
pub mod collection;
pub mod landing;
pub mod marketplace;
