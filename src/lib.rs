//! # evonft
//!
//! Leptos + WASM frontend for the EvoNFT evolution marketplace demo.
//!
//! This crate contains pages, components, application state, the mock image
//! generation client, and small view-model helpers. Everything runs
//! client-side against seeded in-memory data; there is no backend, so state
//! lives exactly as long as the tab.

pub mod ai;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
