//! Owned collection page — stats, quick actions, and the evolve entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only guarded route: guests bounce to the auth page with a redirect
//! back here. The evolve dialog mounts from this page while a session is
//! open, and leaving the route closes the session so in-flight generation
//! cannot land in a dialog that is no longer on screen.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::evolve_modal::EvolveModal;
use crate::components::nft_card::NftCard;
use crate::state::auth::AuthState;
use crate::state::catalog::CatalogState;
use crate::state::evolution::EvolutionState;
use crate::util::guard::install_guest_redirect;

/// Demo stats; the mock wallet has no pricing feed.
const COLLECTION_VALUE_ETH: &str = "12.5";
const COLLECTION_TREND: &str = "+24%";

const EVOLUTION_TIPS: [&str; 4] = [
    "Add descriptive tags to guide the AI evolution process",
    "Each evolution creates a unique, one-of-a-kind variant",
    "You can auction evolved NFTs or keep them in your collection",
    "Rare traits have higher chances of creating valuable evolutions",
];

#[component]
pub fn CollectionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let evolution = expect_context::<RwSignal<EvolutionState>>();
    let navigate = use_navigate();

    install_guest_redirect(auth, "/my-nfts", navigate);

    on_cleanup(move || {
        evolution.update(|state| state.close());
    });

    let on_evolve = Callback::new(move |id: String| {
        let nft = catalog
            .get_untracked()
            .owned
            .iter()
            .find(|n| n.id == id)
            .cloned();
        let Some(nft) = nft else { return };
        evolution.update(|state| state.open(nft));
    });

    let owned_count = move || catalog.get().owned.len();
    let total_evolutions = move || catalog.get().total_evolutions();
    let has_owned = move || owned_count() > 0;

    view! {
        <section class="collection-page">
            <Show
                when=move || auth.get().user.is_some()
                fallback=|| view! { <p class="collection-page__redirect">"Redirecting to sign in..."</p> }
            >
                <header class="page-header">
                    <h1 class="page-header__title">"My NFT Collection"</h1>
                    <p class="page-header__subtitle">"Manage and evolve your digital collectibles"</p>
                </header>

                <div class="stat-grid">
                    <div class="stat-card">
                        <span class="stat-card__value">{owned_count}</span>
                        <span class="stat-card__label">"NFTs Owned"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__value">{total_evolutions}</span>
                        <span class="stat-card__label">"Total Evolutions"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__value">{COLLECTION_VALUE_ETH}</span>
                        <span class="stat-card__label">"ETH Value"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__value">{COLLECTION_TREND}</span>
                        <span class="stat-card__label">"This Month"</span>
                    </div>
                </div>

                <div class="collection-page__actions">
                    <button
                        class="btn btn--primary"
                        on:click=|_| leptos::logging::log!("buy more requested")
                    >
                        "Buy More NFTs"
                    </button>
                    <button
                        class="btn btn--ghost"
                        on:click=|_| leptos::logging::log!("portfolio analytics requested")
                    >
                        "Portfolio Analytics"
                    </button>
                    <button
                        class="btn btn--ghost"
                        on:click=|_| leptos::logging::log!("evolution history requested")
                    >
                        "Evolution History"
                    </button>
                </div>

                <Show
                    when=has_owned
                    fallback=|| {
                        view! {
                            <div class="empty-state">
                                <p class="empty-state__title">"No NFTs Yet"</p>
                                <p class="empty-state__hint">
                                    "Start your collection by purchasing NFTs from the marketplace"
                                </p>
                                <a class="btn btn--primary" href="/marketplace">
                                    "Browse Marketplace"
                                </a>
                            </div>
                        }
                    }
                >
                    <div class="card-grid">
                        {move || {
                            catalog
                                .get()
                                .owned
                                .into_iter()
                                .map(|nft| {
                                    view! {
                                        <NftCard
                                            id=nft.id
                                            name=nft.name
                                            image=nft.image
                                            tags=nft.tags
                                            evolution_count=nft.evolution_count
                                            action_label="Evolve NFT".to_owned()
                                            on_action=on_evolve
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>

                <div class="collection-page__tips">
                    <h3 class="collection-page__tips-title">"Evolution Tips"</h3>
                    <ul class="collection-page__tips-list">
                        {EVOLUTION_TIPS
                            .into_iter()
                            .map(|tip| view! { <li>{tip}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </Show>

            <Show when=move || evolution.get().session.is_some()>
                <EvolveModal/>
            </Show>
        </section>
    }
}
