//! Browser Services
//!
//! Thin wrappers over browser APIs: image preloading, local storage, console.

pub mod images;
pub mod intro;
pub mod log;

pub use images::load_batch;
pub use intro::{intro_seen, mark_intro_seen};
