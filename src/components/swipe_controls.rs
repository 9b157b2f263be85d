//! Swipe Controls Component
//!
//! Nope / Undo / Like buttons under the stack.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Decision;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SwipeControls() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let can_undo = move || store.session().read().can_undo();

    view! {
        <div class="swipe-controls">
            <button class="control-btn nope" title="Nope (←)" on:click=move |_| ctx.decide(Decision::Dislike)>
                "❌"
            </button>
            <Show when=can_undo>
                <button id="undo-btn" class="control-btn undo" title="Undo (Z)" on:click=move |_| ctx.undo()>
                    "↩ Undo"
                </button>
            </Show>
            <button class="control-btn like" title="Like (→)" on:click=move |_| ctx.decide(Decision::Like)>
                "❤️"
            </button>
        </div>
    }
}
