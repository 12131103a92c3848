//! Marketplace page — searchable, tag-filterable grid of listings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filter state (search text, selected tags, view mode) is page-local and
//! resets on navigation. The listings themselves come from the shared
//! catalog, so auctions minted elsewhere never touch this grid but a future
//! listing mutation would show up without extra wiring.

use leptos::prelude::*;

use crate::components::nft_card::NftCard;
use crate::state::catalog::{CatalogState, NftRecord, POPULAR_TAGS};
use crate::util::filter::{filter_listings, toggle_tag};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ViewMode {
    #[default]
    Grid,
    List,
}

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let search = RwSignal::new(String::new());
    let selected_tags = RwSignal::new(Vec::<String>::new());
    let view_mode = RwSignal::new(ViewMode::Grid);

    let filtered = move || -> Vec<NftRecord> {
        let state = catalog.get();
        let search = search.get();
        let selected = selected_tags.get();
        filter_listings(&state.listings, &search, &selected)
            .into_iter()
            .cloned()
            .collect()
    };
    let shown_count = move || filtered().len();
    let has_filters = move || !search.get().trim().is_empty() || !selected_tags.get().is_empty();

    let on_clear_tags = move |_| selected_tags.set(Vec::new());
    let on_clear_all = move |_| {
        search.set(String::new());
        selected_tags.set(Vec::new());
    };
    // Mock surface: purchases only reach the console.
    let on_buy = Callback::new(move |id: String| {
        leptos::logging::log!("buy requested for listing {id}");
    });

    view! {
        <section class="marketplace-page">
            <header class="page-header">
                <h1 class="page-header__title">"NFT Marketplace"</h1>
                <p class="page-header__subtitle">"Discover, collect, and trade evolved NFTs"</p>
            </header>

            <div class="marketplace-page__controls">
                <input
                    class="field__input marketplace-page__search"
                    type="search"
                    placeholder="Search NFTs by name..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <div class="marketplace-page__view-toggle" role="group" aria-label="Layout">
                    <button
                        class="btn btn--ghost"
                        class:btn--active=move || view_mode.get() == ViewMode::Grid
                        on:click=move |_| view_mode.set(ViewMode::Grid)
                    >
                        "Grid"
                    </button>
                    <button
                        class="btn btn--ghost"
                        class:btn--active=move || view_mode.get() == ViewMode::List
                        on:click=move |_| view_mode.set(ViewMode::List)
                    >
                        "List"
                    </button>
                </div>
            </div>

            <div class="marketplace-page__tags">
                <span class="marketplace-page__tags-label">"Popular tags"</span>
                {POPULAR_TAGS
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <button
                                class="tag-badge tag-badge--toggle"
                                class:tag-badge--selected=move || {
                                    selected_tags.get().iter().any(|t| t == tag)
                                }
                                on:click=move |_| {
                                    selected_tags.update(|selected| toggle_tag(selected, tag));
                                }
                            >
                                {tag}
                            </button>
                        }
                    })
                    .collect_view()}
                <Show when=move || !selected_tags.get().is_empty()>
                    <button class="btn btn--ghost marketplace-page__clear" on:click=on_clear_tags>
                        "Clear Filters"
                    </button>
                </Show>
            </div>

            <p class="marketplace-page__count">
                {move || {
                    let count = shown_count();
                    if count == 1 {
                        "1 NFT found".to_owned()
                    } else {
                        format!("{count} NFTs found")
                    }
                }}
            </p>

            <Show
                when=move || { shown_count() > 0 }
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <p class="empty-state__title">"No NFTs found"</p>
                            <p class="empty-state__hint">
                                "Try a different search or clear the active filters."
                            </p>
                            <Show when=has_filters>
                                <button class="btn btn--primary" on:click=on_clear_all>
                                    "Clear all filters"
                                </button>
                            </Show>
                        </div>
                    }
                }
            >
                <div
                    class="card-grid"
                    class:card-grid--list=move || view_mode.get() == ViewMode::List
                >
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|nft| {
                                view! {
                                    <NftCard
                                        id=nft.id
                                        name=nft.name
                                        image=nft.image
                                        tags=nft.tags
                                        price=nft.price
                                        owner=nft.owner
                                        action_label="Buy Now".to_owned()
                                        on_action=on_buy
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </section>
    }
}
