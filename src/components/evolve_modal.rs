//! Evolution dialog — drives one NFT through the evolve workflow.
//!
//! DESIGN
//! ======
//! The dialog renders whatever phase the shared evolution session is in and
//! feeds user actions back as transitions. Generation runs as a spawned task
//! holding the session epoch it started under; the state machine drops any
//! result whose epoch no longer matches, and an alive flag cleared on unmount
//! stops a finished task from touching state for a dialog that is gone.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::ai::{GenerateRequest, GeneratorClient};
use crate::state::catalog::CatalogState;
use crate::state::evolution::{EvolutionState, EvolvePhase, parse_tags};
use crate::state::toast::{ToastLevel, ToastState, notify};

/// Modal dialog for the evolve workflow. Mount it only while a session is
/// open; it reads the session from context.
#[component]
pub fn EvolveModal() -> impl IntoView {
    let evolution = expect_context::<RwSignal<EvolutionState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let generator = expect_context::<GeneratorClient>();

    // Draft tag input lives locally so keystrokes do not rebuild the dialog;
    // the session takes the final text when generation begins.
    let tags_input = RwSignal::new(String::new());

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    #[cfg(feature = "csr")]
    {
        set_body_dialog_flag(true);
        on_cleanup(|| set_body_dialog_flag(false));
    }

    let on_close = Callback::new(move |()| {
        evolution.update(|state| state.close());
    });
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let on_begin = move |_| {
        let mut started = None;
        let mut request = None;
        evolution.update(|state| {
            state.set_tags_input(tags_input.get_untracked());
            started = state.begin();
            if started.is_some() {
                request = state.session.as_ref().map(|s| GenerateRequest {
                    nft_id: s.nft.id.clone(),
                    nft_name: s.nft.name.clone(),
                    base_tags: s.nft.tags.clone(),
                    evolve_tags: parse_tags(&s.tags_input),
                });
            }
        });
        let (Some(epoch), Some(request)) = (started, request) else {
            return;
        };
        leptos::logging::log!("evolving {}", request.nft_name);

        #[cfg(feature = "csr")]
        {
            let alive = alive.clone();
            let generator = generator.clone();
            leptos::task::spawn_local(async move {
                let result = generator.generate(&request).await;
                if !alive.load(Ordering::Relaxed) {
                    leptos::logging::log!("evolve dialog gone; dropping generation result");
                    return;
                }
                evolution.update(|state| {
                    let applied = match &result {
                        Ok(image) => state.complete_generation(epoch, &image.url),
                        Err(err) => state.fail_generation(epoch, &err.to_string()),
                    };
                    if !applied {
                        leptos::logging::warn!("stale generation result ignored");
                    }
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (epoch, request, &generator);
    };

    let on_keep = move |_| {
        let mut outcome = None;
        evolution.update(|state| outcome = state.keep());
        let Some(outcome) = outcome else { return };
        catalog.update(|c| {
            c.commit_kept(&outcome.nft_id, &outcome.image, &outcome.tags);
        });
        notify(
            toasts,
            ToastLevel::Success,
            "Evolution Kept!",
            &format!("{} has been updated with its new form", outcome.nft_name),
        );
    };

    let on_auction = move |_| {
        let mut outcome = None;
        evolution.update(|state| outcome = state.auction());
        let Some(outcome) = outcome else { return };
        let mut minted = None;
        catalog.update(|c| {
            minted = c.commit_auctioned(&outcome.nft_id, &outcome.image, &outcome.tags);
        });
        if minted.is_some() {
            notify(
                toasts,
                ToastLevel::Success,
                "Sent to Auction!",
                &format!("Evolved {} is now live for bidding", outcome.nft_name),
            );
        }
    };

    let on_retry = move |_| {
        evolution.update(|state| {
            state.retry();
        });
    };

    let subject_name = move || {
        evolution
            .get()
            .session
            .map_or_else(String::new, |s| s.nft.name)
    };

    let phase_body = move || {
        let Some(session) = evolution.get().session else {
            return ().into_any();
        };
        match session.phase {
            EvolvePhase::Idle => {
                let nft = session.nft;
                view! {
                    <div class="evolve-modal__setup">
                        <div class="evolve-modal__source">
                            <img class="evolve-modal__art" src=nft.image alt=nft.name.clone()/>
                            <div class="evolve-modal__source-meta">
                                <span class="evolve-modal__source-name">{nft.name}</span>
                                <div class="evolve-modal__source-tags">
                                    {nft.tags
                                        .into_iter()
                                        .map(|tag| view! { <span class="tag-badge">{tag}</span> })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                        <label class="field">
                            <span class="field__label">"Add Evolution Tags (optional)"</span>
                            <input
                                class="field__input"
                                type="text"
                                placeholder="e.g., glowing, mechanical, ethereal..."
                                prop:value=tags_input
                                on:input=move |ev| tags_input.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary evolve-modal__begin" on:click=on_begin.clone()>
                            "Begin Evolution"
                        </button>
                    </div>
                }
                .into_any()
            }
            EvolvePhase::Generating => view! {
                <div class="evolve-modal__progress">
                    <div class="spinner" aria-hidden="true"></div>
                    <p class="evolve-modal__headline">"Evolution in Progress..."</p>
                    <p class="evolve-modal__hint">
                        "Our AI is crafting your evolved NFT. This may take a moment."
                    </p>
                </div>
            }
            .into_any(),
            EvolvePhase::Decision { image } => view! {
                <div class="evolve-modal__result">
                    <p class="evolve-modal__headline">"Evolution Complete!"</p>
                    <img class="evolve-modal__art evolve-modal__art--result" src=image alt="Evolved artwork"/>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=on_keep>
                            "Keep Evolution"
                        </button>
                        <button class="btn" on:click=on_auction>
                            "Auction It"
                        </button>
                    </div>
                </div>
            }
            .into_any(),
            EvolvePhase::Failed { message } => view! {
                <div class="evolve-modal__failed">
                    <p class="evolve-modal__headline">"Evolution Failed"</p>
                    <p class="evolve-modal__error">{message}</p>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=on_retry>
                            "Try Again"
                        </button>
                        <button class="btn" on:click=on_close_click>
                            "Close"
                        </button>
                    </div>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--evolve"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>"Evolve Your NFT"</h2>
                    <p class="evolve-modal__subject">{subject_name}</p>
                    <button class="dialog__close" on:click=on_close_click aria-label="Close">
                        "✕"
                    </button>
                </div>
                {phase_body}
            </div>
        </div>
    }
}

/// Flag the document body while a dialog is up so CSS can lock page scroll.
#[cfg(feature = "csr")]
fn set_body_dialog_flag(open: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if open {
        let _ = body.set_attribute("data-dialog-open", "true");
    } else {
        let _ = body.remove_attribute("data-dialog-open");
    }
}
