//! Image Preloading
//!
//! Fetches a batch by preloading every image in parallel. The batch is
//! all-or-nothing: one failed image, or the deadline passing, fails it.

use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config::SwipeConfig;
use crate::error::{BatchError, BatchResult};
use crate::models::ImageRef;
use super::log;

/// Promise resolving once `url` is loaded, rejecting with the url on error
fn preload_image(url: String) -> Promise {
    Promise::new(&mut |resolve: Function, reject: Function| {
        let img = match web_sys::HtmlImageElement::new() {
            Ok(img) => img,
            Err(e) => {
                let _ = reject.call1(&JsValue::NULL, &e);
                return;
            }
        };
        let failed = JsValue::from_str(&format!("image failed to load: {}", url));
        let on_load = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let on_error = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &failed);
        });
        img.set_onload(Some(on_load.unchecked_ref()));
        img.set_onerror(Some(on_error.unchecked_ref()));
        img.set_src(&url);
    })
}

/// Promise rejecting after `ms`
fn deadline(ms: u32) -> Promise {
    Promise::new(&mut |_resolve: Function, reject: Function| {
        Timeout::new(ms, move || {
            let reason = JsValue::from_str(&format!("timed out after {} ms", ms));
            let _ = reject.call1(&JsValue::NULL, &reason);
        })
        .forget();
    })
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Load a fresh batch of `config.batch_size` random images
pub async fn load_batch(config: &SwipeConfig) -> BatchResult<Vec<ImageRef>> {
    if config.batch_size == 0 {
        return Err(BatchError::EmptyBatch);
    }

    let batch: Vec<ImageRef> = (0..config.batch_size)
        .map(|_| ImageRef::new(config.image_url(js_sys::Math::random())))
        .collect();
    log::info("LOADER", &format!("Preloading {} images", batch.len()));

    let loads = Array::new();
    for image in &batch {
        loads.push(&preload_image(image.url().to_string()));
    }
    let all = Promise::all(&loads);
    let raced = Promise::race(&Array::of2(&all, &deadline(config.load_timeout_ms)));

    JsFuture::from(raced).await.map_err(|e| {
        let reason = describe(&e);
        log::error("LOADER", &reason);
        BatchError::FetchFailure(reason)
    })?;

    log::info("LOADER", "Batch ready");
    Ok(batch)
}
