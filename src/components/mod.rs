//! Reusable UI components shared across pages.

pub mod evolve_modal;
pub mod navbar;
pub mod nft_card;
pub mod toast_host;
