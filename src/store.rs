//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::ImageRef;
use crate::session::SwipeSession;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Batch, cursor, liked set and undo history
    pub session: SwipeSession,
    /// Intro overlay showing (first visit only)
    pub intro_open: bool,
    /// Liked image shown full-size in the modal
    pub enlarged: Option<ImageRef>,
}

impl AppState {
    pub fn new(intro_seen: bool) -> Self {
        Self {
            session: SwipeSession::new(),
            intro_open: !intro_seen,
            enlarged: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Open the modal on a liked image
pub fn store_enlarge(store: &AppStore, image: ImageRef) {
    *store.enlarged().write() = Some(image);
}

pub fn store_close_modal(store: &AppStore) {
    *store.enlarged().write() = None;
}

pub fn store_dismiss_intro(store: &AppStore) {
    *store.intro_open().write() = false;
}
