//! Auctions page — live auction grid with inline bid entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! One auction at a time can have its bid panel open. The submit control
//! stays disabled until the entered amount parses and beats the current bid,
//! the same rule the catalog enforces again when the bid lands.

#[cfg(test)]
#[path = "auctions_test.rs"]
mod auctions_test;

use leptos::prelude::*;

use crate::components::nft_card::NftCard;
use crate::state::catalog::CatalogState;
use crate::state::toast::{ToastLevel, ToastState, notify};
use crate::util::bid::bid_allowed;

/// Demo stat; there is no trade history to sum.
const VOLUME_24H: &str = "24.8 ETH";

/// One-decimal ETH display used for the highest-bid stat.
fn format_eth(value: f64) -> String {
    format!("{value:.1} ETH")
}

#[component]
pub fn AuctionsPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let selected = RwSignal::new(None::<String>);
    let bid_amount = RwSignal::new(String::new());

    let on_select = Callback::new(move |id: String| {
        selected.set(Some(id));
    });

    let active_count = move || catalog.get().auctions.len();
    let total_bids = move || catalog.get().total_bids();
    let highest_bid = move || {
        catalog
            .get()
            .highest_bid()
            .map_or_else(|| "—".to_owned(), format_eth)
    };

    view! {
        <section class="auctions-page">
            <header class="page-header">
                <h1 class="page-header__title">"Live Auctions"</h1>
                <p class="page-header__subtitle">"Bid on exclusive evolved NFTs"</p>
            </header>

            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-card__value">{active_count}</span>
                    <span class="stat-card__label">"Active Auctions"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{total_bids}</span>
                    <span class="stat-card__label">"Total Bids"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{highest_bid}</span>
                    <span class="stat-card__label">"Highest Bid"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{VOLUME_24H}</span>
                    <span class="stat-card__label">"Volume (24h)"</span>
                </div>
            </div>

            <div class="card-grid">
                {move || {
                    catalog
                        .get()
                        .auctions
                        .into_iter()
                        .map(|auction| {
                            let id = auction.nft.id.clone();
                            let name = auction.nft.name.clone();
                            let current = auction.current_bid.clone();

                            let panel_open = {
                                let id = id.clone();
                                move || selected.get().as_deref() == Some(id.as_str())
                            };
                            let can_submit = {
                                let current = current.clone();
                                move || bid_allowed(&bid_amount.get(), &current)
                            };
                            let on_submit = {
                                let id = id.clone();
                                let name = name.clone();
                                move |_| {
                                    let amount = bid_amount.get();
                                    let mut applied = false;
                                    catalog.update(|c| applied = c.place_bid(&id, &amount));
                                    if applied {
                                        notify(
                                            toasts,
                                            ToastLevel::Success,
                                            "Bid Placed!",
                                            &format!(
                                                "Your bid of {} ETH is leading {}",
                                                amount.trim(),
                                                name
                                            ),
                                        );
                                        bid_amount.set(String::new());
                                        selected.set(None);
                                    } else {
                                        leptos::logging::warn!("rejected bid {amount} on {id}");
                                    }
                                }
                            };
                            let on_cancel = move |_| selected.set(None);

                            view! {
                                <div class="auctions-page__item">
                                    <NftCard
                                        id=auction.nft.id
                                        name=auction.nft.name
                                        image=auction.nft.image
                                        tags=auction.nft.tags
                                        price=auction.current_bid
                                        price_label="Current Bid".to_owned()
                                        time_left=auction.time_left
                                        bid_count=auction.bid_count
                                        action_label="Place Bid".to_owned()
                                        on_action=on_select
                                    />
                                    <Show when=panel_open>
                                        <div class="bid-panel">
                                            <label class="field">
                                                <span class="field__label">
                                                    {format!("Your bid (above {current} ETH)")}
                                                </span>
                                                <input
                                                    class="field__input"
                                                    type="number"
                                                    step="0.1"
                                                    min="0"
                                                    placeholder="Enter bid amount"
                                                    prop:value=move || bid_amount.get()
                                                    on:input=move |ev| {
                                                        bid_amount.set(event_target_value(&ev));
                                                    }
                                                />
                                            </label>
                                            <div class="bid-panel__actions">
                                                <button
                                                    class="btn btn--primary"
                                                    disabled={
                                                        let can_submit = can_submit.clone();
                                                        move || !can_submit()
                                                    }
                                                    on:click=on_submit.clone()
                                                >
                                                    "Submit Bid"
                                                </button>
                                                <button class="btn btn--ghost" on:click=on_cancel>
                                                    "Cancel"
                                                </button>
                                            </div>
                                        </div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
