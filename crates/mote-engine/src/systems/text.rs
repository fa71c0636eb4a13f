//! Label layout and ink-mask sampling.
//!
//! The two labels are rendered once per layout change, snapshotted, and
//! cleared again, so the visible surface never shows the raw text. Particles
//! rejection-sample their rest positions from the snapshot's alpha channel.

use crate::api::config::FieldConfig;
use crate::api::types::LabelSide;
use crate::core::rng::Rng;
use crate::renderer::color::Color;
use crate::renderer::surface::{DrawSurface, PixelBuffer, TextStyle};

/// Alpha above which a pixel counts as part of a glyph stroke.
const INK_THRESHOLD: u8 = 128;

/// Snapshot of the rendered labels, valid until the next layout change.
#[derive(Debug, Clone)]
pub struct LabelMask {
    pixels: PixelBuffer,
    /// Font scale of this layout relative to the reference font size.
    /// Exposed for hosts; particle sizing does not consume it.
    pub scale: f32,
}

/// An accepted sample from the ink mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkSample {
    pub x: u32,
    pub y: u32,
    pub side: LabelSide,
}

impl LabelMask {
    /// Wrap an existing pixel snapshot. Mainly useful for synthetic masks in
    /// host test suites.
    pub fn from_pixels(pixels: PixelBuffer, scale: f32) -> Self {
        LabelMask { pixels, scale }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width
    }

    pub fn height(&self) -> u32 {
        self.pixels.height
    }

    /// True when the pixel at (x, y) is part of a glyph stroke.
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        self.pixels.alpha(x, y) > INK_THRESHOLD
    }

    /// Rejection-sample an ink pixel: uniform random coordinates, accepted
    /// on ink, up to `attempts` tries. `None` means the budget ran out,
    /// which is an expected outcome, not an error.
    ///
    /// The side is classified by comparing x against the horizontal surface
    /// midpoint, never by which glyph the pixel belongs to.
    pub fn sample(&self, rng: &mut Rng, attempts: u32) -> Option<InkSample> {
        if self.pixels.width == 0 || self.pixels.height == 0 {
            return None;
        }
        for _ in 0..attempts {
            let x = rng.next_int(self.pixels.width);
            let y = rng.next_int(self.pixels.height);
            if self.is_ink(x, y) {
                let side = if x > self.pixels.width / 2 {
                    LabelSide::Right
                } else {
                    LabelSide::Left
                };
                return Some(InkSample { x, y, side });
            }
        }
        None
    }
}

/// Render the two labels onto the cleared surface and snapshot them.
///
/// Both words sit on the vertical center line; each word's center is pushed
/// out from the surface center by half the inter-label spacing plus half the
/// word's measured width. Font size and spacing switch with the compact
/// layout. The surface is cleared again after the snapshot.
pub fn render_label_mask<S: DrawSurface>(surface: &mut S, config: &FieldConfig) -> LabelMask {
    let (width, height) = surface.size();
    let compact = config.is_compact(width);
    let font_size = config.font_size_for(compact);
    let spacing = config.label_spacing_for(compact);
    let style = TextStyle {
        size_px: font_size,
        family: config.font_family.clone(),
    };

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    let left_width = surface.measure_text(&config.left_label, &style);
    let right_width = surface.measure_text(&config.right_label, &style);

    let left_x = center_x - spacing / 2.0 - left_width / 2.0;
    let right_x = center_x + spacing / 2.0 + right_width / 2.0;

    surface.clear();
    surface.fill_text(&config.left_label, left_x, center_y, &style, Color::WHITE);
    surface.fill_text(&config.right_label, right_x, center_y, &style, Color::WHITE);

    let pixels = surface.read_pixels();
    surface.clear();

    LabelMask {
        pixels,
        scale: font_size / config.reference_font_size,
    }
}
