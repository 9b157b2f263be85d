//! Summary View Component
//!
//! Shown once the batch runs out: liked gallery, or the empty state.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Summary;
use crate::store::{store_enlarge, use_app_store, AppStateStoreFields};

const SAD_CAT_GIF: &str = "https://media.giphy.com/media/8vQSQ3cNXuDGo/giphy.gif";

#[component]
pub fn SummaryView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let summary = Memo::new(move |_| store.session().read().summary());
    let like_count = move || summary.get().map(|s| s.like_count()).unwrap_or(0);
    let total = move || summary.get().map(|s| s.total).unwrap_or(0);

    view! {
        <section id="summary" class="summary">
            <h2>"You liked " <span id="like-count">{like_count}</span> " of " {total} " cats"</h2>
            {move || match summary.get() {
                Some(summary) if !summary.is_empty() => view! { <LikedGallery summary=summary /> }.into_any(),
                _ => view! {
                    <div class="no-likes">
                        <img src=SAD_CAT_GIF alt="Sad cat" />
                        <p>"You are not a cat lover 😿"</p>
                    </div>
                }.into_any(),
            }}
            <button id="swipe-again-btn" on:click=move |_| ctx.reset()>
                "Swipe again"
            </button>
        </section>
    }
}

/// Liked images; click one to enlarge
#[component]
fn LikedGallery(summary: Summary) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="liked-cats" class="liked-cats">
            {summary.liked.into_iter().map(|image| {
                let url = image.url().to_string();
                view! {
                    <img
                        src=url
                        alt="Liked cat"
                        on:click=move |_| store_enlarge(&store, image.clone())
                    />
                }
            }).collect_view()}
        </div>
    }
}
