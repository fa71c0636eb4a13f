//! Two-word name reveal: boots the particle field with demo labels.
//!
//! The page provides a fullscreen `<canvas id="particle-canvas">` and calls
//! `demo_start()` once the wasm module is loaded.

use mote_engine::{Color, FieldConfig};
use wasm_bindgen::prelude::*;

const CANVAS_ID: &str = "particle-canvas";

fn demo_config() -> FieldConfig {
    FieldConfig {
        left_label: "NAME".to_string(),
        right_label: "REVEAL".to_string(),
        left_scatter_color: Color::rgb(0x00, 0xDC, 0xFF),
        right_scatter_color: Color::rgb(0xFF, 0x99, 0x00),
        ..FieldConfig::default()
    }
}

#[wasm_bindgen]
pub fn demo_start() -> Result<(), JsValue> {
    let result = mote_web::boot(CANVAS_ID, demo_config());
    if result.is_ok() {
        log::info!("name-reveal: running");
    }
    result
}

#[wasm_bindgen]
pub fn demo_stop() {
    mote_web::field_destroy();
}
