//! Status Views
//!
//! Loading spinner and the batch-load error panel.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::error::BatchError;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div id="loading-screen" class="loading-screen">
            <div class="spinner"></div>
            <p>"Fetching cats..."</p>
        </div>
    }
}

/// Error panel with a retry button
#[component]
pub fn LoadError(error: BatchError) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="load-error">
            <p class="load-error-title">"🙀 " {error.to_string()}</p>
            <button class="retry-btn" on:click=move |_| ctx.reset()>"Retry"</button>
        </div>
    }
}
