//! Test doubles for the host-provided backends.
//!
//! `TestSurface` rasterizes text as solid blocks, which is enough for ink
//! sampling: the sampler only reads the alpha channel. `ManualScheduler`
//! hands out sequential frame handles and records requests and cancels so
//! teardown behavior can be asserted. Both are used by this crate's own
//! tests and are available to downstream hosts.

use crate::core::schedule::{FrameHandle, FrameScheduler};
use crate::renderer::color::Color;
use crate::renderer::surface::{DrawSurface, PixelBuffer, TextStyle};

/// Fraction of the font size each character advances in the block
/// rasterizer.
const TEST_ADVANCE: f32 = 0.6;

/// In-memory surface backed by an RGBA buffer.
pub struct TestSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
    /// clear() calls since construction.
    pub clears: u32,
    /// fill_rect() calls since construction.
    pub rect_fills: u32,
    /// fill_text() calls since construction.
    pub text_fills: u32,
}

impl TestSurface {
    pub fn new(width: u32, height: u32) -> Self {
        TestSurface {
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
            clears: 0,
            rect_fills: 0,
            text_fills: 0,
        }
    }

    /// Alpha at a pixel, for assertions on what a pass painted.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[(y as usize * self.width as usize + x as usize) * 4 + 3]
    }

    fn paint_span(&mut self, x0: f32, y0: f32, w: f32, h: f32, color: Color) {
        let x_start = x0.floor().max(0.0) as i64;
        let y_start = y0.floor().max(0.0) as i64;
        let x_end = ((x0 + w).ceil() as i64).min(self.width as i64);
        let y_end = ((y0 + h).ceil() as i64).min(self.height as i64);
        for y in y_start..y_end {
            for x in x_start..x_end {
                let idx = (y as usize * self.width as usize + x as usize) * 4;
                self.data[idx] = color.r;
                self.data[idx + 1] = color.g;
                self.data[idx + 2] = color.b;
                self.data[idx + 3] = 255;
            }
        }
    }
}

impl DrawSurface for TestSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data = vec![0; (width * height * 4) as usize];
    }

    fn clear(&mut self) {
        self.data.fill(0);
        self.clears += 1;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.rect_fills += 1;
        self.paint_span(x, y, w, h, color);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle, color: Color) {
        self.text_fills += 1;
        let w = text.chars().count() as f32 * style.size_px * TEST_ADVANCE;
        let h = style.size_px;
        self.paint_span(x - w / 2.0, y - h / 2.0, w, h, color);
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> f32 {
        text.chars().count() as f32 * style.size_px * TEST_ADVANCE
    }

    fn read_pixels(&mut self) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }
}

/// Scheduler that never fires on its own; tests drive frames by hand.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next: u64,
    /// Every handle handed out, in request order.
    pub requested: Vec<FrameHandle>,
    /// Every handle cancelled, in cancel order.
    pub cancelled: Vec<FrameHandle>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently requested handle.
    pub fn last_requested(&self) -> Option<FrameHandle> {
        self.requested.last().copied()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.requested.push(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}
