//! Route guards — keep wallet-only pages behind sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route components should apply identical unauthenticated redirect
//! behavior, and the auth page needs one rule for where to send the user
//! back afterwards.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Where unauthenticated visitors are sent.
pub const AUTH_ROUTE: &str = "/auth";
/// Where a successful sign-in lands without a recorded origin.
pub const DEFAULT_AFTER_LOGIN: &str = "/marketplace";

/// Auth route carrying the page to return to after sign-in.
#[must_use]
pub fn login_redirect(return_to: &str) -> String {
    format!("{AUTH_ROUTE}?redirect={return_to}")
}

/// Resolve the `redirect` query parameter into a safe in-app path.
///
/// Only same-app absolute paths are honored; anything else (missing,
/// relative, or scheme-like) falls back to the marketplace.
#[must_use]
pub fn redirect_target(raw: Option<&str>) -> String {
    match raw {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => DEFAULT_AFTER_LOGIN.to_owned(),
    }
}

/// Redirect to the auth page whenever no user is signed in, remembering
/// `return_to` so sign-in comes back here.
pub fn install_guest_redirect<F>(auth: RwSignal<AuthState>, return_to: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.get().user.is_none() {
            navigate(&login_redirect(return_to), NavigateOptions::default());
        }
    });
}
