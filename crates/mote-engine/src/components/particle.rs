//! The particle value type and its per-frame motion.

use crate::api::types::LabelSide;
use glam::Vec2;

/// Which motion branch a particle took this frame. Decides the draw color:
/// scattered particles use their label's scatter color, resting ones the
/// neutral rest color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionBranch {
    Scattered,
    Resting,
}

/// Motion constants shared by every particle, extracted from the field
/// config once per frame.
#[derive(Debug, Clone, Copy)]
pub struct MotionTuning {
    /// Pointer distance to the base below which repulsion applies.
    pub max_distance: f32,
    /// Peak displacement of a fully repelled particle.
    pub scatter_strength: f32,
    /// Fraction of the remaining gap closed per frame while easing back.
    pub return_rate: f32,
}

/// A single particle with its sampled rest position.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current drawn location.
    pub position: Vec2,
    /// Rest location, fixed at creation from an ink pixel.
    pub base: Vec2,
    /// Side length of the drawn square.
    pub size: f32,
    /// Label half the base position falls under.
    pub side: LabelSide,
    /// Frames left before the particle is recycled.
    pub life: f32,
}

impl Particle {
    pub fn new(base: Vec2, size: f32, side: LabelSide, life: f32) -> Self {
        Particle {
            position: base,
            base,
            size,
            side,
            life,
        }
    }

    /// Advance one frame of motion against the pointer.
    ///
    /// Inside the repulsion radius (and with an active pointer) the particle
    /// is placed `force * scatter_strength` away from its base, opposite the
    /// pointer, where `force` falls linearly from 1 at the base to 0 at the
    /// radius edge. Otherwise it eases back toward its base by `return_rate`
    /// of the remaining gap.
    pub fn step(&mut self, pointer: Vec2, pointer_active: bool, tuning: &MotionTuning) -> MotionBranch {
        let delta = pointer - self.base;
        let distance = delta.length();

        if distance < tuning.max_distance && pointer_active {
            let force = (tuning.max_distance - distance) / tuning.max_distance;
            let angle = delta.y.atan2(delta.x);
            let offset = Vec2::new(angle.cos(), angle.sin()) * force * tuning.scatter_strength;
            self.position = self.base - offset;
            MotionBranch::Scattered
        } else {
            self.position += (self.base - self.position) * tuning.return_rate;
            MotionBranch::Resting
        }
    }

    /// Burn one frame of life. Returns true once expired.
    pub fn age(&mut self) -> bool {
        self.life -= 1.0;
        self.life <= 0.0
    }
}
