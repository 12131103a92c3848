//! Toast state — transient notification stack rendered above every page.
//!
//! The stack is bounded and oldest-first: pushing past the cap evicts the
//! oldest toast. Auto-dismiss runs per toast by id, so a toast closed by hand
//! does not make the timer remove its successor.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

use leptos::prelude::*;

/// Most toasts kept on screen at once.
pub const TOAST_CAP: usize = 5;
/// How long a toast stays up before auto-dismissing.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastLevel {
    /// CSS modifier class for the toast card.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

/// One notification card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub description: String,
    pub level: ToastLevel,
}

/// The live toast stack, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast, evicting the oldest when the cap is reached.
    /// Returns the new toast's id for targeted dismissal.
    pub fn push(&mut self, level: ToastLevel, title: &str, description: &str) -> String {
        if self.toasts.len() >= TOAST_CAP {
            self.toasts.remove(0);
        }
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            title: title.to_owned(),
            description: description.to_owned(),
            level,
        });
        id
    }

    /// Remove the toast with `id`. Returns `false` when it is already gone.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() < before
    }
}

/// Push a toast onto the shared stack and schedule its auto-dismiss.
///
/// The dismiss task targets the toast's id, so a manual close beats the
/// timer without side effects.
pub fn notify(toasts: RwSignal<ToastState>, level: ToastLevel, title: &str, description: &str) {
    let mut id = String::new();
    toasts.update(|state| id = state.push(level, title, description));

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(TOAST_TTL).await;
            toasts.update(|state| {
                state.dismiss(&id);
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = id;
}
