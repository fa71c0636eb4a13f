pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;
pub mod testing;

// Re-export key types at crate root for convenience
pub use api::config::FieldConfig;
pub use api::field::ParticleField;
pub use api::types::{Capabilities, LabelSide};
pub use components::particle::{MotionBranch, MotionTuning, Particle};
pub use crate::core::error::FieldError;
pub use crate::core::rng::Rng;
pub use crate::core::schedule::{FrameHandle, FrameScheduler};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::color::Color;
pub use renderer::surface::{DrawSurface, PixelBuffer, TextStyle};
pub use systems::field::FieldState;
pub use systems::text::{render_label_mask, InkSample, LabelMask};
