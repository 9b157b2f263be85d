//! Intro Overlay Component
//!
//! First-visit explanation of the gestures. Dismissal is remembered.

use leptos::prelude::*;

use crate::services::{log, mark_intro_seen};
use crate::store::{store_dismiss_intro, use_app_store, AppStateStoreFields};

#[component]
pub fn IntroOverlay() -> impl IntoView {
    let store = use_app_store();

    let dismiss = move |_| {
        store_dismiss_intro(&store);
        if let Err(e) = mark_intro_seen() {
            log::warn("INTRO", &format!("Could not remember dismissal: {}", e));
        }
    };

    view! {
        <Show when=move || *store.intro_open().read()>
            <div id="intro-overlay" class="intro-overlay">
                <div class="intro-card">
                    <h2>"Welcome to Cat Swipe 🐱"</h2>
                    <p>"Swipe right (or press →) to like a cat."</p>
                    <p>"Swipe left (or press ←) to pass."</p>
                    <p>"Changed your mind? Hit Undo."</p>
                    <button id="got-it-btn" on:click=dismiss>"Got it"</button>
                </div>
            </div>
        </Show>
    }
}
