//! Canvas 2D implementation of the engine's drawing surface.

use mote_engine::{Color, DrawSurface, FieldError, PixelBuffer, TextStyle};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A browser canvas and its 2d context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up a canvas by element id and acquire its 2d context.
    pub fn from_element_id(id: &str) -> Result<Self, FieldError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| FieldError::SurfaceNotFound(id.to_string()))?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| FieldError::SurfaceNotFound(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| FieldError::SurfaceNotFound(id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| FieldError::ContextUnavailable("2d".to_string()))?;
        Ok(CanvasSurface { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn apply_style(&self, style: &TextStyle) {
        self.ctx
            .set_font(&format!("bold {}px {}", style.size_px, style.family));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle, color: Color) {
        self.apply_style(style);
        self.ctx.set_fill_style_str(&color.css());
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> f32 {
        self.apply_style(style);
        self.ctx
            .measure_text(text)
            .map(|metrics| metrics.width() as f32)
            .unwrap_or(0.0)
    }

    fn read_pixels(&mut self) -> PixelBuffer {
        let (w, h) = self.size();
        let data = self
            .ctx
            .get_image_data(0.0, 0.0, w as f64, h as f64)
            .map(|image| image.data().0)
            .unwrap_or_default();
        PixelBuffer {
            width: w,
            height: h,
            data,
        }
    }
}
