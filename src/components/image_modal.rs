//! Image Modal Component
//!
//! Full-size view of a liked image. Click anywhere to close.

use leptos::prelude::*;

use crate::store::{store_close_modal, use_app_store, AppStateStoreFields};

#[component]
pub fn ImageModal() -> impl IntoView {
    let store = use_app_store();

    let src = move || {
        store.enlarged().read().as_ref().map(|image| image.url().to_string()).unwrap_or_default()
    };

    view! {
        <Show when=move || store.enlarged().read().is_some()>
            <div id="modal" class="modal" on:click=move |_| store_close_modal(&store)>
                <img src=src alt="Liked cat, enlarged" />
            </div>
        </Show>
    }
}
