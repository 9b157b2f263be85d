//! Intro Overlay Flag
//!
//! Remembers in localStorage that the intro overlay was dismissed. No expiry.

const INTRO_KEY: &str = "seenIntro";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Whether the intro was dismissed before. Unreadable storage counts as not seen.
pub fn intro_seen() -> bool {
    storage()
        .and_then(|s| s.get_item(INTRO_KEY).ok().flatten())
        .map(|v| !v.is_empty())
        .unwrap_or(false)
}

pub fn mark_intro_seen() -> Result<(), String> {
    let storage = storage().ok_or_else(|| "localStorage unavailable".to_string())?;
    storage
        .set_item(INTRO_KEY, "true")
        .map_err(|e| format!("{:?}", e))
}
