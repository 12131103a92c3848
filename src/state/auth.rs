//! Auth state — mock sign-in backed by a session-scoped account registry.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no identity backend. Accounts created through the signup form
//! live in this struct for the lifetime of the page, and a built-in demo
//! account works on a fresh load. Passwords are compared in plaintext and
//! nothing persists across reloads; this layer exists to exercise the
//! guarded routes and the signed-in chrome, not to protect anything.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Credentials that always work, so the app is usable on first load.
pub const DEMO_EMAIL: &str = "demo@evonft.io";
pub const DEMO_PASSWORD: &str = "evolve";
pub const DEMO_NAME: &str = "Demo Collector";

/// Simulated backend latency for the auth forms.
pub const AUTH_LATENCY: Duration = Duration::from_millis(500);

/// The signed-in identity shown in the navbar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// A registered account. Mock registry only; plaintext, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Who is signed in, plus every account registered this session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub accounts: Vec<Account>,
}

/// Why a sign-in or signup attempt was rejected. The display text feeds the
/// error toast directly.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("an account with this email already exists")]
    EmailTaken,
}

impl AuthState {
    /// Sign in against the demo account or the session registry.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = normalize_email(email);
        let matched = if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            Some(User {
                name: DEMO_NAME.to_owned(),
                email,
            })
        } else {
            self.accounts
                .iter()
                .find(|a| a.email == email && a.password == password)
                .map(|a| User {
                    name: a.name.clone(),
                    email: a.email.clone(),
                })
        };

        let user = matched.ok_or(AuthError::InvalidCredentials)?;
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Register a new account and sign it in.
    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let email = normalize_email(email);
        if email == DEMO_EMAIL || self.accounts.iter().any(|a| a.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let name = name.trim().to_owned();
        self.accounts.push(Account {
            name: name.clone(),
            email: email.clone(),
            password: password.to_owned(),
        });
        let user = User { name, email };
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Drop the signed-in identity. The registry survives, so the same
    /// credentials work again.
    pub fn logout(&mut self) {
        self.user = None;
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Submit the login form against the mock backend.
///
/// Adds form latency in the browser so the busy state is visible, then
/// applies the attempt to the shared auth signal.
pub async fn submit_login(
    auth: RwSignal<AuthState>,
    email: String,
    password: String,
) -> Result<User, AuthError> {
    simulate_latency().await;
    let mut result = Err(AuthError::InvalidCredentials);
    auth.update(|state| result = state.login(&email, &password));
    result
}

/// Submit the signup form against the mock backend.
pub async fn submit_signup(
    auth: RwSignal<AuthState>,
    name: String,
    email: String,
    password: String,
) -> Result<User, AuthError> {
    simulate_latency().await;
    let mut result = Err(AuthError::EmailTaken);
    auth.update(|state| result = state.signup(&name, &email, &password));
    result
}

#[allow(clippy::unused_async)] // native builds skip the delay
async fn simulate_latency() {
    #[cfg(feature = "csr")]
    gloo_timers::future::sleep(AUTH_LATENCY).await;
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
