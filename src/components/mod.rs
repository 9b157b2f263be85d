//! UI Components
//!
//! Leptos components for the swipe screens.

mod card_stack;
mod swipe_controls;
mod summary_view;
mod image_modal;
mod intro_overlay;
mod status_views;

pub use card_stack::CardStack;
pub use swipe_controls::SwipeControls;
pub use summary_view::SummaryView;
pub use image_modal::ImageModal;
pub use intro_overlay::IntroOverlay;
pub use status_views::{LoadError, LoadingScreen};
