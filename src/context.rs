//! Application Context
//!
//! The session controller: drives `SwipeSession` in the store, and the card
//! animations that go with each transition. Provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_swipe::{CardPose, SwipeOutcome, SwipeSignals};

use crate::config::SwipeConfig;
use crate::models::Decision;
use crate::services::{self, log};
use crate::session::Phase;
use crate::store::{store_close_modal, AppStateStoreFields, AppStore};

/// Extra wait before the fallback completes an exit whose transitionend never came
const EXIT_GRACE_MS: u32 = 250;

/// What the top card's transform is doing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardMotion {
    /// Resting or snapping back to center
    Idle,
    /// Flying off after a decision
    Exiting,
    /// Placed off-screen for an undo, not yet moving
    Entering,
    /// Flying back in after an undo
    Returning,
}

/// Current viewport width in px
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

/// App-wide controller handle
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    /// Gesture state of the top card
    pub swipe: SwipeSignals,
    /// Current card motion - read
    pub motion: ReadSignal<CardMotion>,
    /// Current card motion - write
    set_motion: WriteSignal<CardMotion>,
    config: StoredValue<SwipeConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, swipe: SwipeSignals, config: SwipeConfig) -> Self {
        let (motion, set_motion) = signal(CardMotion::Idle);
        Self {
            store,
            swipe,
            motion,
            set_motion,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> SwipeConfig {
        self.config.get_value()
    }

    /// CSS `transition` for the top card right now
    pub fn transition_css(&self) -> String {
        if self.swipe.dragging_read.get() {
            return "none".to_string();
        }
        let ms = self.config.with_value(|c| match self.motion.get() {
            CardMotion::Idle => Some(c.cancel_ms),
            CardMotion::Exiting => Some(c.exit_ms),
            CardMotion::Returning => Some(c.return_ms),
            CardMotion::Entering => None,
        });
        match ms {
            Some(ms) => format!("transform {}ms ease", ms),
            None => "none".to_string(),
        }
    }

    /// Re-pick the swipe threshold after a resize
    pub fn refresh_tuning(&self) {
        let tuning = self.config.with_value(|c| c.tuning_for(viewport_width()));
        self.swipe.set_tuning(tuning);
    }

    // ========================
    // Loading
    // ========================

    /// Preload a batch for the current generation
    pub fn load(&self) {
        let store = self.store;
        let generation = store.session().read_untracked().begin_load();
        let config = self.config();
        spawn_local(async move {
            let result = services::load_batch(&config).await;
            if let Err(e) = &result {
                log::error("SESSION", &format!("Batch {} failed: {}", generation, e));
            }
            if !store.session().write().finish_load(generation, result) {
                log::info("SESSION", &format!("Dropped stale batch {}", generation));
            }
        });
    }

    /// Clear the session and load a fresh batch ("Swipe again", "Retry")
    pub fn reset(&self) {
        self.store.session().write().reset();
        self.swipe.unlock();
        self.swipe.recenter();
        self.set_motion.set(CardMotion::Idle);
        log::info("SESSION", "Reset");
        self.load();
    }

    // ========================
    // Decisions
    // ========================

    /// A drag was released
    pub fn on_release(&self, outcome: SwipeOutcome) {
        match Decision::from_outcome(outcome) {
            Some(decision) => self.decide(decision),
            None => self.set_motion.set(CardMotion::Idle),
        }
    }

    /// Decide on the top card and fling it off-screen
    pub fn decide(&self, decision: Decision) {
        let entry = self.store.session().write().decide(decision);
        let Some(entry) = entry else {
            // Refused: put a dragged card back, leave an exiting one alone
            if self.store.session().read_untracked().pending_exit().is_none() {
                self.swipe.recenter();
            }
            return;
        };
        log::info("SESSION", &format!("{} #{} {}", decision.as_str(), entry.index, entry.image));

        let tuning = self.swipe.tuning();
        self.swipe.lock();
        self.set_motion.set(CardMotion::Exiting);
        self.swipe.pose_write.set(CardPose::flung(decision.side(), viewport_width(), &tuning));

        // transitionend is the normal completion signal; this covers it never firing
        let ctx = *self;
        let index = entry.index;
        let wait = self.config.with_value(|c| c.exit_ms) + EXIT_GRACE_MS;
        Timeout::new(wait, move || ctx.complete_exit(index)).forget();
    }

    /// The exiting card at `index` finished its animation
    pub fn complete_exit(&self, index: usize) {
        let pending = self.store.session().read_untracked().pending_exit();
        let phase = self.store.session().write().complete_exit(index).cloned();
        let (Some(phase), Some(pending)) = (phase, pending) else {
            return;
        };
        log::info("SESSION", &format!("#{} off the stack ({})", pending.index, pending.decision.as_str()));
        self.set_motion.set(CardMotion::Idle);
        self.swipe.recenter();
        self.swipe.unlock();
        if phase == Phase::Summary {
            let liked = self.store.session().read_untracked().liked().len();
            log::info("SESSION", &format!("Batch done, {} liked", liked));
        }
    }

    /// Undo the last decision; the card flies back in from where it left
    pub fn undo(&self) {
        let entry = self.store.session().write().undo();
        let Some(entry) = entry else {
            return;
        };
        log::info("SESSION", &format!("Undo {} #{}", entry.decision.as_str(), entry.index));

        let tuning = self.swipe.tuning();
        self.set_motion.set(CardMotion::Entering);
        self.swipe.pose_write.set(CardPose::flung(entry.decision.side(), viewport_width(), &tuning));

        // Two frames so the off-screen pose is painted before moving back
        let ctx = *self;
        request_animation_frame(move || {
            request_animation_frame(move || {
                if ctx.motion.get_untracked() == CardMotion::Entering {
                    ctx.set_motion.set(CardMotion::Returning);
                    ctx.swipe.recenter();
                }
            });
        });
    }

    /// transitionend on the top card
    pub fn on_card_transition_end(&self, index: usize) {
        match self.motion.get_untracked() {
            CardMotion::Exiting => self.complete_exit(index),
            CardMotion::Returning => self.set_motion.set(CardMotion::Idle),
            _ => {}
        }
    }

    /// Keyboard shortcuts
    pub fn on_key(&self, key: &str) {
        let intro_open = *self.store.intro_open().read_untracked();
        match key_action(key, intro_open) {
            Some(KeyAction::Decide(decision)) => self.decide(decision),
            Some(KeyAction::Undo) => self.undo(),
            Some(KeyAction::CloseModal) => store_close_modal(&self.store),
            None => {}
        }
    }
}

/// What a key press does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Decide(Decision),
    Undo,
    CloseModal,
}

/// Map a key to its action. Cards stay untouched while the intro covers them.
pub fn key_action(key: &str, intro_open: bool) -> Option<KeyAction> {
    let action = match key {
        "ArrowRight" => KeyAction::Decide(Decision::Like),
        "ArrowLeft" => KeyAction::Decide(Decision::Dislike),
        "z" | "Backspace" => KeyAction::Undo,
        "Escape" => KeyAction::CloseModal,
        _ => return None,
    };
    match action {
        KeyAction::Decide(_) | KeyAction::Undo if intro_open => None,
        _ => Some(action),
    }
}

/// Get the controller from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
