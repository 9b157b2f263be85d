//! Swipe Configuration
//!
//! Compiled-in defaults, optionally overridden by a `window.CAT_SWIPE_CONFIG`
//! object set before the wasm bundle starts.

use serde::Deserialize;
use wasm_bindgen::JsValue;
use leptos_swipe::{threshold_for_width, SwipeTuning};

/// Global the page may define to override defaults
pub const CONFIG_GLOBAL: &str = "CAT_SWIPE_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Images per batch
    pub batch_size: usize,
    /// Returns a fresh random image per request
    pub image_endpoint: String,
    /// Swipe threshold below the breakpoint (px)
    pub narrow_threshold_px: f64,
    /// Swipe threshold at or above the breakpoint (px)
    pub wide_threshold_px: f64,
    pub breakpoint_px: f64,
    pub rotation_divisor: f64,
    pub indicator_full_px: f64,
    pub fling_rotation_deg: f64,
    /// Cards drawn at once, top included
    pub stack_depth: usize,
    pub cancel_ms: u32,
    pub exit_ms: u32,
    pub return_ms: u32,
    /// Whole-batch preload deadline
    pub load_timeout_ms: u32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            batch_size: 10,
            image_endpoint: "https://cataas.com/cat".to_string(),
            narrow_threshold_px: 80.0,
            wide_threshold_px: 100.0,
            breakpoint_px: 768.0,
            rotation_divisor: 20.0,
            indicator_full_px: 100.0,
            fling_rotation_deg: 20.0,
            stack_depth: 3,
            cancel_ms: 300,
            exit_ms: 400,
            return_ms: 500,
            load_timeout_ms: 20_000,
        }
    }
}

impl SwipeConfig {
    /// Defaults merged with `window.CAT_SWIPE_CONFIG`, if present and valid
    pub fn from_window() -> Self {
        let Some(win) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value::<SwipeConfig>(raw) {
            Ok(config) => {
                crate::services::log::info("CONFIG", &format!("Loaded overrides from window.{}", CONFIG_GLOBAL));
                config.sanitized()
            }
            Err(e) => {
                crate::services::log::warn("CONFIG", &format!("Ignoring window.{}: {}", CONFIG_GLOBAL, e));
                Self::default()
            }
        }
    }

    /// Replace nonsensical values with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.batch_size == 0 {
            self.batch_size = defaults.batch_size;
        }
        if self.stack_depth == 0 {
            self.stack_depth = 1;
        }
        if self.image_endpoint.trim().is_empty() {
            self.image_endpoint = defaults.image_endpoint;
        }
        if !(self.rotation_divisor > 0.0) {
            self.rotation_divisor = defaults.rotation_divisor;
        }
        if !(self.indicator_full_px > 0.0) {
            self.indicator_full_px = defaults.indicator_full_px;
        }
        if !(self.narrow_threshold_px >= 0.0) {
            self.narrow_threshold_px = defaults.narrow_threshold_px;
        }
        if !(self.wide_threshold_px >= 0.0) {
            self.wide_threshold_px = defaults.wide_threshold_px;
        }
        self
    }

    pub fn threshold_for(&self, viewport_width: f64) -> f64 {
        threshold_for_width(viewport_width, self.breakpoint_px, self.narrow_threshold_px, self.wide_threshold_px)
    }

    /// Gesture tuning for a viewport width
    pub fn tuning_for(&self, viewport_width: f64) -> SwipeTuning {
        SwipeTuning {
            threshold_px: self.threshold_for(viewport_width),
            rotation_divisor: self.rotation_divisor,
            indicator_full_px: self.indicator_full_px,
            fling_rotation_deg: self.fling_rotation_deg,
        }
    }

    /// Image URL made unique by `nonce` so each request yields a new cat
    pub fn image_url(&self, nonce: f64) -> String {
        let sep = if self.image_endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}random={}", self.image_endpoint, sep, nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config: SwipeConfig = serde_json::from_str(r#"{"batch_size": 4, "exit_ms": 250}"#).unwrap();
        assert_eq!(config.batch_size, 4);
        assert_eq!(config.exit_ms, 250);
        assert_eq!(config.stack_depth, 3);
        assert_eq!(config.image_endpoint, "https://cataas.com/cat");
    }

    #[test]
    fn test_sanitized() {
        let config = SwipeConfig {
            batch_size: 0,
            stack_depth: 0,
            image_endpoint: " ".to_string(),
            rotation_divisor: 0.0,
            indicator_full_px: f64::NAN,
            narrow_threshold_px: -5.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.stack_depth, 1);
        assert_eq!(config.image_endpoint, "https://cataas.com/cat");
        assert_eq!(config.rotation_divisor, 20.0);
        assert_eq!(config.indicator_full_px, 100.0);
        assert_eq!(config.narrow_threshold_px, 80.0);
    }

    #[test]
    fn test_wide_viewport_gets_larger_threshold() {
        let config = SwipeConfig::default();
        assert_eq!(config.threshold_for(390.0), 80.0);
        assert_eq!(config.threshold_for(1280.0), 100.0);
        assert_eq!(config.tuning_for(1280.0).threshold_px, 100.0);
    }

    #[test]
    fn test_image_url() {
        let config = SwipeConfig::default();
        assert_eq!(config.image_url(0.25), "https://cataas.com/cat?random=0.25");

        let tagged = SwipeConfig { image_endpoint: "https://cataas.com/cat?type=square".to_string(), ..Default::default() };
        assert_eq!(tagged.image_url(0.5), "https://cataas.com/cat?type=square&random=0.5");
    }
}
