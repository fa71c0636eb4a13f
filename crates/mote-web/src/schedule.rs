//! requestAnimationFrame-backed frame scheduler.

use mote_engine::{FrameHandle, FrameScheduler};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Scheduler over the browser's animation-frame API.
///
/// Holds the persistent frame callback; each `request` arms one invocation
/// of it. The handle wraps the browser's rAF id so a pending frame can be
/// cancelled at teardown.
pub struct RafScheduler {
    callback: Rc<Closure<dyn FnMut()>>,
}

impl RafScheduler {
    pub fn new(callback: Rc<Closure<dyn FnMut()>>) -> Self {
        RafScheduler { callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request(&mut self) -> FrameHandle {
        let id = web_sys::window()
            .and_then(|w| {
                w.request_animation_frame(self.callback.as_ref().as_ref().unchecked_ref())
                    .ok()
            })
            .unwrap_or(0);
        FrameHandle(id as u64)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if let Some(w) = web_sys::window() {
            let _ = w.cancel_animation_frame(handle.0 as i32);
        }
    }
}
