use crate::renderer::color::Color;
use serde::{Deserialize, Serialize};

/// Content and tuning configuration for a particle field.
/// Hosts can override any subset from a JSON string at boot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    /// Word drawn left of the surface center.
    pub left_label: String,
    /// Word drawn right of the surface center.
    pub right_label: String,
    /// Particle color at rest.
    pub rest_color: Color,
    /// Scatter color for particles under the left label.
    pub left_scatter_color: Color,
    /// Scatter color for particles under the right label.
    pub right_scatter_color: Color,
    /// Background painted at the start of every frame.
    pub background: Color,
    /// CSS font family list for the labels (always rendered bold).
    pub font_family: String,
    /// Label font size in px, normal layout.
    pub font_size: f32,
    /// Label font size in px, compact layout.
    pub compact_font_size: f32,
    /// Font size the reported text-scale factor is measured against.
    pub reference_font_size: f32,
    /// Surface width below which the compact layout is used.
    pub compact_width: u32,
    /// Horizontal gap between the two labels, normal layout.
    pub label_spacing: f32,
    /// Horizontal gap between the two labels, compact layout.
    pub compact_label_spacing: f32,
    /// Particle count at the reference surface area.
    pub base_count: u32,
    /// Reference surface width the particle density is tuned for.
    pub reference_width: u32,
    /// Reference surface height the particle density is tuned for.
    pub reference_height: u32,
    /// Pointer distance to a particle's base below which repulsion applies.
    pub max_distance: f32,
    /// Peak displacement of a fully repelled particle.
    pub scatter_strength: f32,
    /// Fraction of the remaining gap closed per frame while easing back.
    pub return_rate: f32,
    /// Particle footprint range [min, max).
    pub size_range: (f32, f32),
    /// Particle lifespan range in frames [min, max).
    pub life_range: (f32, f32),
    /// Rejection-sampling attempt budget per particle.
    pub sample_attempts: u32,
    /// Seed for the deterministic RNG.
    pub seed: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            left_label: "MOTE".to_string(),
            right_label: "ENGINE".to_string(),
            rest_color: Color::WHITE,
            left_scatter_color: Color::rgb(0x00, 0xDC, 0xFF),
            right_scatter_color: Color::rgb(0xFF, 0x99, 0x00),
            background: Color::BLACK,
            font_family: "Arial, sans-serif".to_string(),
            font_size: 96.0,
            compact_font_size: 48.0,
            reference_font_size: 96.0,
            compact_width: 768,
            label_spacing: 200.0,
            compact_label_spacing: 120.0,
            base_count: 7000,
            reference_width: 1920,
            reference_height: 1080,
            max_distance: 240.0,
            scatter_strength: 60.0,
            return_rate: 0.1,
            size_range: (0.5, 1.5),
            life_range: (50.0, 150.0),
            sample_attempts: 100,
            seed: 42,
        }
    }
}

impl FieldConfig {
    /// Parse a config from a JSON string. Missing fields keep their
    /// defaults; unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether a surface of the given width uses the compact layout.
    pub fn is_compact(&self, surface_width: u32) -> bool {
        surface_width < self.compact_width
    }

    /// Label font size for the given layout mode.
    pub fn font_size_for(&self, compact: bool) -> f32 {
        if compact {
            self.compact_font_size
        } else {
            self.font_size
        }
    }

    /// Inter-label spacing for the given layout mode.
    pub fn label_spacing_for(&self, compact: bool) -> f32 {
        if compact {
            self.compact_label_spacing
        } else {
            self.label_spacing
        }
    }
}
