//! Top navigation bar shown on every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the brand link, the route tabs, the wallet button, and the
//! signed-in chrome. Routes highlight from the live location so deep links
//! land with the right tab active.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;

const NAV_ITEMS: [(&str, &str); 3] = [
    ("Marketplace", "/marketplace"),
    ("My NFTs", "/my-nfts"),
    ("Auctions", "/auctions"),
];

/// App-wide navigation bar with auth chrome.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    // Mock surface: the button exists, the wallet does not.
    let on_wallet = move |_| {
        leptos::logging::log!("wallet connect requested");
    };
    let on_logout = move |_| {
        auth.update(|state| state.logout());
        navigate("/", NavigateOptions::default());
    };

    let user_name = move || {
        auth.get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.name.clone())
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                <span class="navbar__brand-mark">"◈"</span>
                "EvoNFT"
            </a>
            <nav class="navbar__links">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(label, route)| {
                        view! {
                            <a
                                class="navbar__link"
                                class:navbar__link--active=move || location.pathname.get() == route
                                href=route
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="navbar__actions">
                <button class="btn btn--ghost navbar__wallet" on:click=on_wallet>
                    "Connect Wallet"
                </button>
                <Show
                    when=move || auth.get().user.is_some()
                    fallback=|| view! { <a class="btn btn--primary" href="/auth">"Sign In"</a> }
                >
                    <span class="navbar__user">{user_name}</span>
                    <button class="btn btn--ghost" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </header>
    }
}
