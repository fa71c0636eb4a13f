//! Field state and the per-frame simulation pass.
//!
//! The pass walks the particle collection once: motion, draw, aging, and
//! in-place recycling of expired particles. Population maintenance then tops
//! the collection up toward a target derived from the surface area.

use crate::api::config::FieldConfig;
use crate::api::types::LabelSide;
use crate::components::particle::{MotionBranch, MotionTuning, Particle};
use crate::core::rng::Rng;
use crate::renderer::surface::DrawSurface;
use crate::systems::text::LabelMask;
use glam::Vec2;

/// Live simulation state. The pointer fields are written by input handling
/// and read only at the top of a frame pass.
pub struct FieldState {
    pub particles: Vec<Particle>,
    /// Last reported pointer/touch position. Rests at the origin until the
    /// host reports movement.
    pub pointer: Vec2,
    /// Whether a touch is currently held.
    pub touching: bool,
    pub rng: Rng,
}

impl FieldState {
    pub fn new(seed: u64) -> Self {
        FieldState {
            particles: Vec::new(),
            pointer: Vec2::ZERO,
            touching: false,
            rng: Rng::new(seed),
        }
    }

    /// Reset the pointer to its rest sentinel.
    pub fn reset_pointer(&mut self) {
        self.pointer = Vec2::ZERO;
    }

    /// Sample one particle from the mask. `None` when the rejection-sampling
    /// budget is exhausted.
    pub fn spawn_particle(&mut self, mask: &LabelMask, config: &FieldConfig) -> Option<Particle> {
        let sample = mask.sample(&mut self.rng, config.sample_attempts)?;
        let size = self.rng.range_f32(config.size_range.0, config.size_range.1);
        let life = self.rng.range_f32(config.life_range.0, config.life_range.1);
        Some(Particle::new(
            Vec2::new(sample.x as f32, sample.y as f32),
            size,
            sample.side,
            life,
        ))
    }

    /// Advance, draw and age every live particle, recycling expired ones.
    ///
    /// Iteration is by index so a replacement lands in the expired
    /// particle's slot. When sampling fails the slot is swap-removed and the
    /// index revisited, so every particle is processed exactly once.
    pub fn advance<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        mask: &LabelMask,
        config: &FieldConfig,
        touch_capable: bool,
    ) {
        let tuning = MotionTuning {
            max_distance: config.max_distance,
            scatter_strength: config.scatter_strength,
            return_rate: config.return_rate,
        };
        let pointer_active = self.touching || !touch_capable;
        let pointer = self.pointer;

        let mut i = 0;
        while i < self.particles.len() {
            let branch = self.particles[i].step(pointer, pointer_active, &tuning);
            let color = match (branch, self.particles[i].side) {
                (MotionBranch::Scattered, LabelSide::Left) => config.left_scatter_color,
                (MotionBranch::Scattered, LabelSide::Right) => config.right_scatter_color,
                (MotionBranch::Resting, _) => config.rest_color,
            };
            let p = &self.particles[i];
            surface.fill_rect(p.position.x, p.position.y, p.size, p.size, color);

            if self.particles[i].age() {
                match self.spawn_particle(mask, config) {
                    Some(replacement) => self.particles[i] = replacement,
                    None => {
                        // the swapped-in particle has not run this frame yet
                        self.particles.swap_remove(i);
                        continue;
                    }
                }
            }
            i += 1;
        }
    }

    /// Particle population a surface of the given size should carry.
    pub fn target_count(width: u32, height: u32, config: &FieldConfig) -> usize {
        let area = width as f32 * height as f32;
        let reference = config.reference_width as f32 * config.reference_height as f32;
        (config.base_count as f32 * (area / reference).sqrt()).floor() as usize
    }

    /// Top the population up toward `target`. Stops early on the first
    /// sampling failure: the mask is saturated, not broken.
    pub fn maintain(&mut self, mask: &LabelMask, config: &FieldConfig, target: usize) {
        while self.particles.len() < target {
            match self.spawn_particle(mask, config) {
                Some(p) => self.particles.push(p),
                None => break,
            }
        }
    }

    /// Seed an initial population after construction or a resize: one
    /// budgeted sampling attempt per slot, skipping failures. Per-frame
    /// maintenance tops up whatever this pass misses.
    pub fn populate(&mut self, mask: &LabelMask, config: &FieldConfig, target: usize) {
        for _ in 0..target {
            if let Some(p) = self.spawn_particle(mask, config) {
                self.particles.push(p);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::PixelBuffer;
    use crate::testing::TestSurface;

    /// Mask whose every pixel is ink, so sampling always succeeds.
    fn solid_mask(w: u32, h: u32) -> LabelMask {
        LabelMask::from_pixels(
            PixelBuffer {
                width: w,
                height: h,
                data: vec![255; (w * h * 4) as usize],
            },
            1.0,
        )
    }

    fn blank_mask(w: u32, h: u32) -> LabelMask {
        LabelMask::from_pixels(
            PixelBuffer {
                width: w,
                height: h,
                data: vec![0; (w * h * 4) as usize],
            },
            1.0,
        )
    }

    #[test]
    fn target_count_reference_area() {
        let config = FieldConfig::default();
        assert_eq!(FieldState::target_count(1920, 1080, &config), 7000);
    }

    #[test]
    fn target_count_quarter_area() {
        let config = FieldConfig::default();
        assert_eq!(FieldState::target_count(960, 540, &config), 3500);
    }

    #[test]
    fn spawn_particle_respects_ranges() {
        let config = FieldConfig::default();
        let mask = solid_mask(100, 100);
        let mut state = FieldState::new(1);
        for _ in 0..100 {
            let p = state.spawn_particle(&mask, &config).unwrap();
            assert!((0.5..1.5).contains(&p.size));
            assert!((50.0..150.0).contains(&p.life));
            assert_eq!(p.position, p.base);
            assert!(p.base.x < 100.0 && p.base.y < 100.0);
        }
    }

    #[test]
    fn spawn_particle_fails_on_blank_mask() {
        let config = FieldConfig::default();
        let mask = blank_mask(100, 100);
        let mut state = FieldState::new(1);
        assert!(state.spawn_particle(&mask, &config).is_none());
    }

    #[test]
    fn maintain_converges_to_target() {
        let config = FieldConfig::default();
        let mask = solid_mask(100, 100);
        let mut state = FieldState::new(1);
        state.maintain(&mask, &config, 500);
        assert_eq!(state.particles.len(), 500);
        // a second pass with nothing expiring is a no-op
        state.maintain(&mask, &config, 500);
        assert_eq!(state.particles.len(), 500);
    }

    #[test]
    fn maintain_never_overshoots() {
        let config = FieldConfig::default();
        let mask = solid_mask(100, 100);
        let mut state = FieldState::new(1);
        state.maintain(&mask, &config, 100);
        state.maintain(&mask, &config, 50);
        assert_eq!(state.particles.len(), 100);
    }

    #[test]
    fn maintain_stops_on_saturated_mask() {
        let config = FieldConfig::default();
        let mask = blank_mask(100, 100);
        let mut state = FieldState::new(1);
        state.maintain(&mask, &config, 500);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn advance_decrements_life_by_one() {
        let config = FieldConfig::default();
        let mask = solid_mask(100, 100);
        let mut state = FieldState::new(1);
        state.maintain(&mask, &config, 10);
        let lives: Vec<f32> = state.particles.iter().map(|p| p.life).collect();

        let mut surface = TestSurface::new(100, 100);
        state.advance(&mut surface, &mask, &config, false);

        for (p, before) in state.particles.iter().zip(lives) {
            assert_eq!(p.life, before - 1.0);
        }
    }

    #[test]
    fn advance_draws_every_particle_once() {
        let config = FieldConfig::default();
        let mask = solid_mask(100, 100);
        let mut state = FieldState::new(1);
        state.maintain(&mask, &config, 25);

        let mut surface = TestSurface::new(100, 100);
        state.advance(&mut surface, &mask, &config, false);
        assert_eq!(surface.rect_fills, 25);
    }

    #[test]
    fn expired_particles_are_replaced_in_slot() {
        let mut config = FieldConfig::default();
        config.life_range = (0.5, 1.0); // everything expires on the first pass
        let mask = solid_mask(100, 100);
        let mut state = FieldState::new(1);
        state.maintain(&mask, &config, 10);

        let mut surface = TestSurface::new(100, 100);
        state.advance(&mut surface, &mask, &config, false);

        assert_eq!(state.particles.len(), 10);
        for p in &state.particles {
            assert!(p.life > 0.0, "no particle carries life <= 0 into the next frame");
        }
    }

    #[test]
    fn expired_particles_are_removed_when_sampling_fails() {
        let mut config = FieldConfig::default();
        config.life_range = (0.5, 1.0);
        let solid = solid_mask(100, 100);
        let mut state = FieldState::new(1);
        state.maintain(&solid, &config, 10);

        // recycle against a blank mask: every expiry shrinks the collection
        let blank = blank_mask(100, 100);
        let mut surface = TestSurface::new(100, 100);
        state.advance(&mut surface, &blank, &config, false);

        assert!(state.particles.is_empty());
        assert_eq!(surface.rect_fills, 10, "each particle still drew once before expiring");
    }

    #[test]
    fn touch_capable_hosts_gate_on_touching() {
        let config = FieldConfig::default();
        let mask = solid_mask(200, 200);
        let mut state = FieldState::new(1);
        state.maintain(&mask, &config, 20);
        state.pointer = state.particles[0].base;

        let mut surface = TestSurface::new(200, 200);
        state.advance(&mut surface, &mask, &config, true);
        assert_eq!(
            state.particles[0].position, state.particles[0].base,
            "no scatter without a held touch"
        );

        state.touching = true;
        state.pointer = state.particles[0].base;
        state.advance(&mut surface, &mask, &config, true);
        assert_ne!(state.particles[0].position, state.particles[0].base);
    }
}
