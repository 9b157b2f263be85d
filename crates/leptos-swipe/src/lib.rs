//! Leptos Swipe Utilities
//!
//! Horizontal swipe gestures for Leptos using mouse and touch events.
//! Press on the card, move/release tracked on the document so a drag
//! survives leaving the card.

mod tracker;

pub use tracker::{classify, threshold_for_width, CardPose, DragInput, SwipeOutcome, SwipeTracker, SwipeTuning};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Swipe state signals
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    tracker: StoredValue<SwipeTracker>,
    /// Current pose of the active card
    pub pose_read: ReadSignal<CardPose>,
    pub pose_write: WriteSignal<CardPose>,
    /// True between press and release
    pub dragging_read: ReadSignal<bool>,
    dragging_write: WriteSignal<bool>,
    /// When true, drag input is ignored (e.g. while a card is animating out)
    pub locked_read: ReadSignal<bool>,
    locked_write: WriteSignal<bool>,
}

impl SwipeSignals {
    pub fn set_tuning(&self, tuning: SwipeTuning) {
        self.tracker.update_value(|t| t.set_tuning(tuning));
    }

    pub fn tuning(&self) -> SwipeTuning {
        self.tracker.with_value(|t| *t.tuning())
    }

    /// Snap pose back to center without ending anything
    pub fn recenter(&self) {
        self.pose_write.set(CardPose::CENTER);
    }

    /// Refuse drag input and drop any drag in progress, keeping the pose
    /// so the caller can animate the card from where it is.
    pub fn lock(&self) {
        self.tracker.update_value(|t| t.abort());
        self.dragging_write.set(false);
        self.locked_write.set(true);
    }

    pub fn unlock(&self) {
        self.locked_write.set(false);
    }
}

pub fn create_swipe_signals(tuning: SwipeTuning) -> SwipeSignals {
    let (pose_read, pose_write) = signal(CardPose::CENTER);
    let (dragging_read, dragging_write) = signal(false);
    let (locked_read, locked_write) = signal(false);
    SwipeSignals {
        tracker: StoredValue::new(SwipeTracker::new(tuning)),
        pose_read,
        pose_write,
        dragging_read,
        dragging_write,
        locked_read,
        locked_write,
    }
}

/// Begin a drag at `x` unless locked
pub fn start_drag(sw: &SwipeSignals, x: f64) {
    if sw.locked_read.get_untracked() {
        return;
    }
    sw.tracker.update_value(|t| t.on_drag_start(x));
    sw.dragging_write.set(true);
}

/// Feed a move; updates the pose while an unlocked drag is active
pub fn move_drag(sw: &SwipeSignals, x: f64) {
    if sw.locked_read.get_untracked() {
        return;
    }
    let mut pose = None;
    sw.tracker.update_value(|t| pose = t.on_drag_move(x));
    if let Some(pose) = pose {
        sw.pose_write.set(pose);
    }
}

/// Finish a drag at `x`. A cancel snaps the pose back to center.
/// Releases while locked report nothing.
pub fn end_drag(sw: &SwipeSignals, x: f64) -> Option<SwipeOutcome> {
    if sw.locked_read.get_untracked() {
        sw.tracker.update_value(|t| t.abort());
        sw.dragging_write.set(false);
        return None;
    }
    let mut outcome = None;
    sw.tracker.update_value(|t| outcome = t.on_drag_end(x));
    if outcome.is_some() {
        sw.dragging_write.set(false);
    }
    if outcome == Some(SwipeOutcome::Cancel) {
        sw.recenter();
    }
    outcome
}

/// Drop the active drag (touchcancel, lost focus)
pub fn abort_drag(sw: &SwipeSignals) {
    let was_dragging = sw.tracker.with_value(|t| t.is_dragging());
    sw.tracker.update_value(|t| t.abort());
    if was_dragging {
        sw.dragging_write.set(false);
        sw.recenter();
    }
}

/// First touch point's x, from `touches` or, on release, `changedTouches`
pub fn touch_x(ev: &web_sys::TouchEvent, released: bool) -> Option<f64> {
    let list = if released { ev.changed_touches() } else { ev.touches() };
    list.get(0).map(|t| t.client_x() as f64)
}

fn is_control_target(ev: &web_sys::Event) -> bool {
    match ev.target() {
        Some(target) => {
            target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        }
        None => false,
    }
}

/// Create mousedown handler for the swipeable card
pub fn make_on_mousedown(sw: SwipeSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_control_target(&ev) {
            return;
        }
        // Stops the browser's native image drag
        ev.prevent_default();
        start_drag(&sw, ev.client_x() as f64);
    }
}

/// Create touchstart handler for the swipeable card
pub fn make_on_touchstart(sw: SwipeSignals) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if is_control_target(&ev) {
            return;
        }
        if let Some(x) = touch_x(&ev, false) {
            start_drag(&sw, x);
        }
    }
}

/// Bind document-level move/release listeners.
///
/// `on_release` receives every completed drag's outcome, cancels included.
pub fn bind_global_release<F>(sw: SwipeSignals, on_release: F)
where
    F: Fn(SwipeOutcome) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        move_drag(&sw, ev.client_x() as f64);
    });

    let release = on_release.clone();
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if let Some(outcome) = end_drag(&sw, ev.client_x() as f64) {
            release(outcome);
        }
    });

    let on_touchmove = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        if let Some(x) = touch_x(&ev, false) {
            move_drag(&sw, x);
        }
    });

    let release = on_release;
    let on_touchend = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        if let Some(x) = touch_x(&ev, true) {
            if let Some(outcome) = end_drag(&sw, x) {
                release(outcome);
            }
        }
    });

    let on_touchcancel = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
        abort_drag(&sw);
    });

    let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("touchmove", on_touchmove.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("touchend", on_touchend.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("touchcancel", on_touchcancel.as_ref().unchecked_ref());

    on_mousemove.forget();
    on_mouseup.forget();
    on_touchmove.forget();
    on_touchend.forget();
    on_touchcancel.forget();
}
