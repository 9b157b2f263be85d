//! Cat Swipe App
//!
//! Root component: builds the store and controller, binds global input,
//! and switches between loading, swiping, summary and error views.

use leptos::ev;
use leptos::prelude::*;
use leptos_swipe::{bind_global_release, create_swipe_signals};
use reactive_stores::Store;

use crate::components::{CardStack, ImageModal, IntroOverlay, LoadError, LoadingScreen, SummaryView, SwipeControls};
use crate::config::SwipeConfig;
use crate::context::{viewport_width, AppContext};
use crate::services::{self, log};
use crate::session::Phase;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = SwipeConfig::from_window();
    log::info("APP", &format!("Batch size {}, endpoint {}", config.batch_size, config.image_endpoint));

    // State
    let store = Store::new(AppState::new(services::intro_seen()));
    provide_context(store);

    let swipe = create_swipe_signals(config.tuning_for(viewport_width()));
    let ctx = AppContext::new(store, swipe, config);
    provide_context(ctx);

    // Global input
    bind_global_release(swipe, move |outcome| ctx.on_release(outcome));
    let _ = window_event_listener(ev::resize, move |_| ctx.refresh_tuning());
    let _ = window_event_listener(ev::keydown, move |ev| ctx.on_key(&ev.key()));

    ctx.load();

    // Only re-render the screen when the phase itself changes
    let phase = Memo::new(move |_| store.session().read().phase().clone());

    view! {
        <main class="app">
            <h1 class="app-title">"Cat Swipe 🐾"</h1>
            {move || match phase.get() {
                Phase::Loading => view! { <LoadingScreen /> }.into_any(),
                Phase::Swiping => view! {
                    <CardStack />
                    <SwipeControls />
                }.into_any(),
                Phase::Summary => view! { <SummaryView /> }.into_any(),
                Phase::Failed(error) => view! { <LoadError error=error /> }.into_any(),
            }}
            <ImageModal />
            <IntroOverlay />
        </main>
    }
}
