//! Toast overlay — renders the shared notification stack above every page.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// Fixed-position stack of live toasts with manual dismiss.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast: &Toast| toast.id.clone()
                children=move |toast: Toast| {
                    let id = toast.id;
                    let description = (!toast.description.is_empty()).then_some(toast.description);
                    view! {
                        <div class=format!("toast {}", toast.level.class())>
                            <div class="toast__copy">
                                <span class="toast__title">{toast.title}</span>
                                {description.map(|d| view! { <p class="toast__description">{d}</p> })}
                            </div>
                            <button
                                class="toast__close"
                                on:click=move |_| {
                                    toasts.update(|state| {
                                        state.dismiss(&id);
                                    });
                                }
                                aria-label="Dismiss"
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
