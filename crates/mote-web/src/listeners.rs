//! DOM event wiring: translates browser events into engine input events.

use mote_engine::InputEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, HtmlCanvasElement, MouseEvent, TouchEvent};

/// Attached DOM listeners. `detach` unhooks everything; the closures stay
/// alive as long as this struct does.
pub struct EventHooks {
    canvas: HtmlCanvasElement,
    mouse_move: Closure<dyn FnMut(MouseEvent)>,
    mouse_leave: Closure<dyn FnMut(MouseEvent)>,
    touch_move: Closure<dyn FnMut(TouchEvent)>,
    touch_start: Closure<dyn FnMut(TouchEvent)>,
    touch_end: Closure<dyn FnMut(TouchEvent)>,
    resize: Closure<dyn FnMut()>,
}

impl EventHooks {
    /// Wire up the canvas and window listeners. Every browser event is
    /// translated into an [`InputEvent`] and handed to `push`.
    ///
    /// The touchmove listener registers non-passive so it can suppress the
    /// browser's default scrolling while a touch drags across the canvas.
    pub fn attach(canvas: &HtmlCanvasElement, push: fn(InputEvent)) -> Result<Self, JsValue> {
        let mouse_move = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            push(InputEvent::PointerMove {
                x: e.client_x() as f32,
                y: e.client_y() as f32,
            });
        });
        let mouse_leave = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
            push(InputEvent::PointerLeave);
        });
        let touch_move = Closure::<dyn FnMut(TouchEvent)>::new(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                e.prevent_default();
                push(InputEvent::TouchMove {
                    x: touch.client_x() as f32,
                    y: touch.client_y() as f32,
                });
            }
        });
        let touch_start = Closure::<dyn FnMut(TouchEvent)>::new(move |_: TouchEvent| {
            push(InputEvent::TouchStart);
        });
        let touch_end = Closure::<dyn FnMut(TouchEvent)>::new(move |_: TouchEvent| {
            push(InputEvent::TouchEnd);
        });
        let resize = Closure::<dyn FnMut()>::new(move || {
            let (width, height) = window_size();
            push(InputEvent::Resize { width, height });
        });

        canvas.add_event_listener_with_callback("mousemove", mouse_move.as_ref().unchecked_ref())?;
        canvas
            .add_event_listener_with_callback("mouseleave", mouse_leave.as_ref().unchecked_ref())?;

        let touch_opts = AddEventListenerOptions::new();
        touch_opts.set_passive(false);
        canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            touch_move.as_ref().unchecked_ref(),
            &touch_opts,
        )?;
        canvas
            .add_event_listener_with_callback("touchstart", touch_start.as_ref().unchecked_ref())?;
        canvas.add_event_listener_with_callback("touchend", touch_end.as_ref().unchecked_ref())?;

        if let Some(window) = web_sys::window() {
            window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
        }

        Ok(EventHooks {
            canvas: canvas.clone(),
            mouse_move,
            mouse_leave,
            touch_move,
            touch_start,
            touch_end,
            resize,
        })
    }

    /// Remove every listener added by [`attach`](Self::attach).
    pub fn detach(&self) {
        let c = &self.canvas;
        let _ = c.remove_event_listener_with_callback(
            "mousemove",
            self.mouse_move.as_ref().unchecked_ref(),
        );
        let _ = c.remove_event_listener_with_callback(
            "mouseleave",
            self.mouse_leave.as_ref().unchecked_ref(),
        );
        let _ = c.remove_event_listener_with_callback(
            "touchmove",
            self.touch_move.as_ref().unchecked_ref(),
        );
        let _ = c.remove_event_listener_with_callback(
            "touchstart",
            self.touch_start.as_ref().unchecked_ref(),
        );
        let _ = c.remove_event_listener_with_callback(
            "touchend",
            self.touch_end.as_ref().unchecked_ref(),
        );
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        }
    }
}

/// Current window inner size in pixels.
pub(crate) fn window_size() -> (u32, u32) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return (0, 0),
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width as u32, height as u32)
}
