//! Auth page with login and signup tabs against the mock registry.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::{AuthState, DEMO_EMAIL, DEMO_PASSWORD};
#[cfg(feature = "csr")]
use crate::state::auth::{submit_login, submit_signup};
use crate::state::toast::{ToastLevel, ToastState, notify};
use crate::util::guard::redirect_target;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AuthTab {
    #[default]
    Login,
    Signup,
}

fn validate_login_input(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Please fill in all fields");
    }
    Ok(())
}

fn validate_signup_input(name: &str, email: &str, password: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err("Please fill in all fields");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let tab = RwSignal::new(AuthTab::Login);
    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());
    let signup_name = RwSignal::new(String::new());
    let signup_email = RwSignal::new(String::new());
    let signup_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in? Bounce straight back to where the visitor came from.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if auth.get().user.is_some() {
                let target = redirect_target(query.get_untracked().get("redirect").as_deref());
                navigate(
                    &target,
                    NavigateOptions {
                        replace: true,
                        ..NavigateOptions::default()
                    },
                );
            }
        });
    }

    let on_login = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let email = login_email.get();
            let password = login_password.get();
            if let Err(message) = validate_login_input(&email, &password) {
                notify(toasts, ToastLevel::Error, "Error", message);
                return;
            }
            busy.set(true);

            #[cfg(feature = "csr")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match submit_login(auth, email, password).await {
                        Ok(_) => {
                            notify(
                                toasts,
                                ToastLevel::Success,
                                "Welcome back!",
                                "Successfully logged in",
                            );
                            let target =
                                redirect_target(query.get_untracked().get("redirect").as_deref());
                            navigate(
                                &target,
                                NavigateOptions {
                                    replace: true,
                                    ..NavigateOptions::default()
                                },
                            );
                        }
                        Err(err) => {
                            notify(toasts, ToastLevel::Error, "Error", &err.to_string());
                            // Navigation unmounts this page on success, so the
                            // busy flag only needs resetting here.
                            busy.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = (email, password, &navigate);
        }
    };

    let on_signup = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let name = signup_name.get();
            let email = signup_email.get();
            let password = signup_password.get();
            if let Err(message) = validate_signup_input(&name, &email, &password) {
                notify(toasts, ToastLevel::Error, "Error", message);
                return;
            }
            busy.set(true);

            #[cfg(feature = "csr")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match submit_signup(auth, name, email, password).await {
                        Ok(_) => {
                            notify(
                                toasts,
                                ToastLevel::Success,
                                "Welcome!",
                                "Account created successfully",
                            );
                            let target =
                                redirect_target(query.get_untracked().get("redirect").as_deref());
                            navigate(
                                &target,
                                NavigateOptions {
                                    replace: true,
                                    ..NavigateOptions::default()
                                },
                            );
                        }
                        Err(err) => {
                            notify(toasts, ToastLevel::Error, "Error", &err.to_string());
                            busy.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = (name, email, password, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a class="auth-card__brand" href="/">
                    "◈ EvoNFT"
                </a>
                <h1 class="auth-card__title">"Welcome to EvoNFT"</h1>
                <p class="auth-card__subtitle">"Sign in to evolve your collection"</p>

                <div class="auth-card__tabs" role="tablist">
                    <button
                        class="auth-card__tab"
                        class:auth-card__tab--active=move || tab.get() == AuthTab::Login
                        on:click=move |_| tab.set(AuthTab::Login)
                    >
                        "Login"
                    </button>
                    <button
                        class="auth-card__tab"
                        class:auth-card__tab--active=move || tab.get() == AuthTab::Signup
                        on:click=move |_| tab.set(AuthTab::Signup)
                    >
                        "Sign Up"
                    </button>
                </div>

                <Show when=move || tab.get() == AuthTab::Login>
                    <form class="auth-form" on:submit=on_login.clone()>
                        <label class="field">
                            <span class="field__label">"Email"</span>
                            <input
                                class="field__input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || login_email.get()
                                on:input=move |ev| login_email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Password"</span>
                            <input
                                class="field__input"
                                type="password"
                                placeholder="Your password"
                                prop:value=move || login_password.get()
                                on:input=move |ev| login_password.set(event_target_value(&ev))
                            />
                        </label>
                        <button
                            class="btn btn--primary auth-form__submit"
                            type="submit"
                            disabled=move || busy.get()
                        >
                            {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || tab.get() == AuthTab::Signup>
                    <form class="auth-form" on:submit=on_signup.clone()>
                        <label class="field">
                            <span class="field__label">"Name"</span>
                            <input
                                class="field__input"
                                type="text"
                                placeholder="Your display name"
                                prop:value=move || signup_name.get()
                                on:input=move |ev| signup_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Email"</span>
                            <input
                                class="field__input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || signup_email.get()
                                on:input=move |ev| signup_email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Password"</span>
                            <input
                                class="field__input"
                                type="password"
                                placeholder="At least 6 characters"
                                prop:value=move || signup_password.get()
                                on:input=move |ev| signup_password.set(event_target_value(&ev))
                            />
                        </label>
                        <button
                            class="btn btn--primary auth-form__submit"
                            type="submit"
                            disabled=move || busy.get()
                        >
                            {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                        </button>
                    </form>
                </Show>

                <p class="auth-card__demo">
                    {format!("Demo account: {DEMO_EMAIL} / {DEMO_PASSWORD}")}
                </p>
            </div>
        </div>
    }
}
