use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::counter::FrameScheduler;

/// `window.requestAnimationFrame` as a [`FrameScheduler`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<i32> {
        let window = web_sys::window()?;
        // Frees itself after it runs. A cancelled frame leaks one closure.
        let js_callback = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        match window.request_animation_frame(js_callback.unchecked_ref()) {
            Ok(id) => Some(id),
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel(&self, handle: i32) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.cancel_animation_frame(handle) {
                log::warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
    }
}

/// Milliseconds on the same clock `requestAnimationFrame` hands to callbacks.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
