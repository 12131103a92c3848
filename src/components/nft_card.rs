//! Reusable card component for NFTs across marketplace, auctions, and the
//! owned collection.
//!
//! DESIGN
//! ======
//! One card serves every grid. The caller picks which facts appear (price,
//! owner, countdown, evolution badge) by passing the matching props, and the
//! action button only renders when a callback is wired in.

use leptos::prelude::*;

use crate::util::time_left::urgency;

/// Tags shown before collapsing the rest into a `+N` badge.
const MAX_TAGS_SHOWN: usize = 3;

/// A card representing one NFT.
#[component]
pub fn NftCard(
    id: String,
    name: String,
    image: String,
    #[prop(default = Vec::new())] tags: Vec<String>,
    /// Asking price or current bid in ETH.
    #[prop(optional_no_strip, into)] price: Option<String>,
    /// Label for the price row, e.g. `"Price"` or `"Current Bid"`.
    #[prop(default = "Price".to_owned())] price_label: String,
    #[prop(optional_no_strip, into)] owner: Option<String>,
    /// Countdown label; rendering picks up the urgency tier.
    #[prop(optional)] time_left: Option<String>,
    /// Number of bids so far, shown beside the price on auction cards.
    #[prop(optional)] bid_count: Option<u32>,
    /// Times evolved, shown as a badge over the art.
    #[prop(optional_no_strip, into)] evolution_count: Option<u32>,
    #[prop(default = "Buy Now".to_owned())] action_label: String,
    /// Receives the NFT id when the action button is pressed. No callback,
    /// no button.
    #[prop(optional)] on_action: Option<Callback<String>>,
) -> impl IntoView {
    let shown_tags: Vec<String> = tags.iter().take(MAX_TAGS_SHOWN).cloned().collect();
    let overflow = tags.len().saturating_sub(MAX_TAGS_SHOWN);

    let timer_badge = time_left.map(|label| {
        let tier = urgency(&label).class();
        view! { <span class=format!("nft-card__timer {tier}")>{label}</span> }
    });
    let evolution_badge = evolution_count.filter(|count| *count > 0).map(|count| {
        let label = if count == 1 {
            "1 Evolution".to_owned()
        } else {
            format!("{count} Evolutions")
        };
        view! { <span class="nft-card__evolutions">{label}</span> }
    });
    let price_row = price.map(|value| {
        let bids = bid_count.map(|count| {
            let label = if count == 1 {
                "1 bid".to_owned()
            } else {
                format!("{count} bids")
            };
            view! { <span class="nft-card__bids">{label}</span> }
        });
        view! {
            <div class="nft-card__price">
                <span class="nft-card__price-label">{price_label}</span>
                <span class="nft-card__price-value">{format!("{value} ETH")}</span>
                {bids}
            </div>
        }
    });
    let owner_row = owner.map(|address| {
        view! {
            <div class="nft-card__owner">
                <span class="nft-card__owner-label">"Owner"</span>
                <span class="nft-card__owner-value">{address}</span>
            </div>
        }
    });
    let action_button = on_action.map(|on_action| {
        let action_id = id.clone();
        view! {
            <button
                class="btn btn--primary nft-card__action"
                on:click=move |_| on_action.run(action_id.clone())
            >
                {action_label}
            </button>
        }
    });

    view! {
        <article class="nft-card">
            <div class="nft-card__media">
                <img class="nft-card__image" src=image alt=name.clone() loading="lazy"/>
                {timer_badge}
                {evolution_badge}
            </div>
            <div class="nft-card__body">
                <h3 class="nft-card__name">{name}</h3>
                <div class="nft-card__tags">
                    {shown_tags
                        .into_iter()
                        .map(|tag| view! { <span class="tag-badge">{tag}</span> })
                        .collect_view()}
                    {(overflow > 0)
                        .then(|| view! { <span class="tag-badge tag-badge--overflow">{format!("+{overflow}")}</span> })}
                </div>
                {price_row}
                {owner_row}
                {action_button}
            </div>
        </article>
    }
}
