//! Landing page — hero, feature highlights, and trending listings.

use leptos::prelude::*;

use crate::components::nft_card::NftCard;
use crate::state::catalog::{CatalogState, NftRecord};

/// Listings surfaced in the trending strip.
const TRENDING_COUNT: usize = 3;

struct Feature {
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        glyph: "⚡",
        title: "AI-Powered Evolution",
        description: "Transform your NFTs with cutting-edge AI technology that creates unique evolutionary variants.",
    },
    Feature {
        glyph: "✦",
        title: "Infinite Creativity",
        description: "Each evolution is one-of-a-kind, generated based on your NFT's characteristics and new traits.",
    },
    Feature {
        glyph: "↗",
        title: "Dynamic Marketplace",
        description: "Trade evolved NFTs in our vibrant marketplace with real-time valuation and trending insights.",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let trending = move || -> Vec<NftRecord> {
        catalog
            .get()
            .listings
            .into_iter()
            .take(TRENDING_COUNT)
            .collect()
    };
    let on_view = Callback::new(move |id: String| {
        leptos::logging::log!("view requested for listing {id}");
    });
    let on_wallet = move |_| {
        leptos::logging::log!("wallet connect requested");
    };

    view! {
        <div class="landing-page">
            <section class="hero">
                <span class="hero__badge">"✨ Next-Gen NFT Evolution"</span>
                <h1 class="hero__title">"Evolve Your NFTs with AI"</h1>
                <p class="hero__lead">
                    "Transform your digital collectibles into unique evolutionary variants using advanced AI. Create, trade, and auction one-of-a-kind NFTs that grow with your imagination."
                </p>
                <div class="hero__cta">
                    <a class="btn btn--primary btn--lg" href="/marketplace">
                        "Start Exploring"
                    </a>
                    <a class="btn btn--ghost btn--lg" href="/my-nfts">
                        "View Collection"
                    </a>
                </div>
            </section>

            <section class="landing-page__features">
                <h2 class="landing-page__section-title">"Revolutionizing Digital Ownership"</h2>
                <p class="landing-page__section-lead">
                    "Experience the future of NFTs with our innovative evolution platform"
                </p>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature-card">
                                    <span class="feature-card__glyph" aria-hidden="true">
                                        {feature.glyph}
                                    </span>
                                    <h3 class="feature-card__title">{feature.title}</h3>
                                    <p class="feature-card__description">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="landing-page__trending">
                <div class="landing-page__trending-header">
                    <div>
                        <h2 class="landing-page__section-title">"Trending Evolutions"</h2>
                        <p class="landing-page__section-lead">
                            "Discover the most popular evolved NFTs in our marketplace"
                        </p>
                    </div>
                    <a class="btn btn--ghost" href="/marketplace">
                        "View All ↗"
                    </a>
                </div>
                <div class="card-grid">
                    {move || {
                        trending()
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
                                        action_label="View Details".to_owned()
                                        on_action=on_view
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="landing-page__cta">
                <h2 class="landing-page__section-title">"Ready to Evolve Your Collection?"</h2>
                <p class="landing-page__section-lead">
                    "Connect your wallet and start creating unique evolutionary NFTs today"
                </p>
                <button class="btn btn--primary btn--lg" on:click=on_wallet>
                    "Connect Wallet"
                </button>
            </section>
        </div>
    }
}
