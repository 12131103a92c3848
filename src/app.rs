//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::ai::GeneratorClient;
use crate::components::{navbar::Navbar, toast_host::ToastHost};
use crate::pages::{
    auctions::AuctionsPage, auth::AuthPage, collection::CollectionPage, landing::LandingPage,
    marketplace::MarketplacePage,
};
use crate::state::{
    auth::AuthState, catalog::CatalogState, evolution::EvolutionState, toast::ToastState,
};

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let catalog = RwSignal::new(CatalogState::seeded());
    let evolution = RwSignal::new(EvolutionState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(catalog);
    provide_context(evolution);
    provide_context(toasts);
    provide_context(GeneratorClient::mock());

    view! {
        <Title text="EvoNFT"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("marketplace") view=MarketplacePage/>
                    <Route path=StaticSegment("auctions") view=AuctionsPage/>
                    <Route path=StaticSegment("my-nfts") view=CollectionPage/>
                    <Route path=StaticSegment("auth") view=AuthPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
