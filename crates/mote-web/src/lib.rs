//! WASM bridge for the mote particle field.
//!
//! The engine core stays browser-free; this crate adapts the canvas, DOM
//! events and the animation-frame loop to the engine's traits and exposes a
//! small `field_*` API to the page script:
//!
//! ```js
//! import init, { field_init, field_destroy } from "mote-web";
//! await init();
//! field_init("particle-canvas");
//! ```

mod canvas;
mod listeners;
mod schedule;

pub use canvas::CanvasSurface;
pub use listeners::EventHooks;
pub use schedule::RafScheduler;

use mote_engine::{Capabilities, DrawSurface, FieldConfig, InputEvent, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

type WebField = ParticleField<CanvasSurface, RafScheduler>;

thread_local! {
    static FIELD: RefCell<Option<WebField>> = RefCell::new(None);
    static HOOKS: RefCell<Option<EventHooks>> = RefCell::new(None);
}

fn push_event(event: InputEvent) {
    FIELD.with(|cell| {
        if let Some(field) = cell.borrow_mut().as_mut() {
            field.handle_input(event);
        }
    });
}

fn run_frame() {
    FIELD.with(|cell| {
        if let Some(field) = cell.borrow_mut().as_mut() {
            field.frame();
        }
    });
}

fn touch_capable() -> bool {
    web_sys::window()
        .map(|w| {
            js_sys::Reflect::has(w.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Boot a particle field on the canvas with the given config. Replaces any
/// field that is already running.
pub fn boot(canvas_id: &str, config: FieldConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    field_destroy();

    let mut surface =
        CanvasSurface::from_element_id(canvas_id).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let (width, height) = listeners::window_size();
    surface.set_size(width, height);

    let caps = Capabilities {
        touch: touch_capable(),
    };

    let frame_cb: Rc<Closure<dyn FnMut()>> = Rc::new(Closure::new(run_frame));
    let scheduler = RafScheduler::new(frame_cb);

    let hooks = EventHooks::attach(surface.canvas(), push_event)?;

    let mut field = ParticleField::new(surface, scheduler, config, caps);
    field.start();

    FIELD.with(|cell| *cell.borrow_mut() = Some(field));
    HOOKS.with(|cell| *cell.borrow_mut() = Some(hooks));
    log::info!("mote-web: field running on #{}", canvas_id);
    Ok(())
}

/// Start a field with the default config.
#[wasm_bindgen]
pub fn field_init(canvas_id: &str) -> Result<(), JsValue> {
    boot(canvas_id, FieldConfig::default())
}

/// Start a field with a JSON config override (see `FieldConfig`).
#[wasm_bindgen]
pub fn field_init_with_config(canvas_id: &str, config_json: &str) -> Result<(), JsValue> {
    let config = FieldConfig::from_json(config_json)
        .map_err(|e| JsValue::from_str(&format!("bad field config: {}", e)))?;
    boot(canvas_id, config)
}

/// Stop the running field: detach listeners, cancel the pending frame.
#[wasm_bindgen]
pub fn field_destroy() {
    HOOKS.with(|cell| {
        if let Some(hooks) = cell.borrow_mut().take() {
            hooks.detach();
        }
    });
    FIELD.with(|cell| {
        if let Some(mut field) = cell.borrow_mut().take() {
            field.destroy();
        }
    });
}

/// Live particle count, 0 when no field is running.
#[wasm_bindgen]
pub fn field_particle_count() -> u32 {
    FIELD.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|f| f.particle_count() as u32)
            .unwrap_or(0)
    })
}

/// Font scale of the current layout, 0 when no field is running.
#[wasm_bindgen]
pub fn field_text_scale() -> f32 {
    FIELD.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|f| f.text_scale())
            .unwrap_or(0.0)
    })
}
