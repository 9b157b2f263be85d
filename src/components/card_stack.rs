//! Card Stack Component
//!
//! The top few cards of the batch. Only the top card follows the gesture pose.

use leptos::prelude::*;
use leptos_swipe::{make_on_mousedown, make_on_touchstart};

use crate::context::use_app_context;
use crate::models::ImageRef;
use crate::store::{use_app_store, AppStateStoreFields};

/// Stack of upcoming cards, top card draggable
#[component]
pub fn CardStack() -> impl IntoView {
    let store = use_app_store();
    let depth = use_app_context().config().stack_depth;

    view! {
        <div id="cat-container" class="cat-container">
            <For
                each=move || store.session().read().visible_stack(depth)
                key=|(index, image, _)| (*index, image.clone())
                children=move |(index, image, z)| view! { <CatCard index=index image=image z_index=z /> }
            />
        </div>
        <p class="stack-progress">
            {move || {
                let session = store.session().read();
                format!("{} / {}", (session.cursor() + 1).min(session.batch_len()), session.batch_len())
            }}
        </p>
    }
}

/// One card. Becomes interactive when it reaches the top.
#[component]
fn CatCard(index: usize, image: ImageRef, z_index: usize) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let swipe = ctx.swipe;

    let is_top = move || store.session().read().cursor() == index;
    let is_top_untracked = move || store.session().read_untracked().cursor() == index;

    let on_mousedown = make_on_mousedown(swipe);
    let on_touchstart = make_on_touchstart(swipe);

    let url = image.url().to_string();
    let style = move || {
        let base = format!("background-image: url({}); z-index: {};", url, z_index);
        if is_top() {
            format!(
                "{} transform: {}; transition: {};",
                base,
                swipe.pose_read.get().transform(),
                ctx.transition_css()
            )
        } else {
            base
        }
    };
    let like_opacity = move || if is_top() { swipe.pose_read.get().right_opacity } else { 0.0 };
    let nope_opacity = move || if is_top() { swipe.pose_read.get().left_opacity } else { 0.0 };

    view! {
        <div
            class="cat-card"
            class:top=is_top
            style=style
            on:mousedown=move |ev| if is_top_untracked() { on_mousedown(ev) }
            on:touchstart=move |ev| if is_top_untracked() { on_touchstart(ev) }
            on:transitionend=move |ev: web_sys::TransitionEvent| {
                if ev.property_name() == "transform" && is_top_untracked() {
                    ctx.on_card_transition_end(index);
                }
            }
        >
            <div class="badge like-badge" style=move || format!("opacity: {};", like_opacity())>
                "LIKE ❤️"
            </div>
            <div class="badge dislike-badge" style=move || format!("opacity: {};", nope_opacity())>
                "NOPE ❌"
            </div>
        </div>
    }
}
