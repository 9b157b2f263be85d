//! Console Logging
//!
//! Tagged console output, e.g. `[SESSION] Liked 3/10`.

fn line(tag: &str, msg: &str) -> wasm_bindgen::JsValue {
    format!("[{}] {}", tag, msg).into()
}

pub fn info(tag: &str, msg: &str) {
    web_sys::console::log_1(&line(tag, msg));
}

pub fn warn(tag: &str, msg: &str) {
    web_sys::console::warn_1(&line(tag, msg));
}

pub fn error(tag: &str, msg: &str) {
    web_sys::console::error_1(&line(tag, msg));
}
