//! The particle field facade.
//!
//! Owns the surface, the frame scheduler, the input queue and the live
//! state, and orchestrates the per-frame step: apply input, paint the
//! background, advance every particle, top the population up, reschedule.

use crate::api::config::FieldConfig;
use crate::api::types::Capabilities;
use crate::core::schedule::{FrameHandle, FrameScheduler};
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::surface::DrawSurface;
use crate::systems::field::FieldState;
use crate::systems::text::{render_label_mask, LabelMask};
use glam::Vec2;

pub struct ParticleField<S: DrawSurface, F: FrameScheduler> {
    surface: S,
    scheduler: F,
    config: FieldConfig,
    caps: Capabilities,
    state: FieldState,
    mask: LabelMask,
    input: InputQueue,
    pending_frame: Option<FrameHandle>,
    destroyed: bool,
}

impl<S: DrawSurface, F: FrameScheduler> ParticleField<S, F> {
    /// Build a field over an acquired surface: renders the label mask and
    /// seeds the initial population. Call [`start`](Self::start) to begin
    /// animating.
    pub fn new(mut surface: S, scheduler: F, config: FieldConfig, caps: Capabilities) -> Self {
        let mask = render_label_mask(&mut surface, &config);
        let mut state = FieldState::new(config.seed);
        let (width, height) = surface.size();
        let target = FieldState::target_count(width, height, &config);
        state.populate(&mask, &config, target);
        log::info!(
            "particle field up: {}x{} surface, {} of {} particles seeded",
            width,
            height,
            state.particles.len(),
            target
        );
        Self {
            surface,
            scheduler,
            config,
            caps,
            state,
            mask,
            input: InputQueue::new(),
            pending_frame: None,
            destroyed: false,
        }
    }

    /// Request the first frame. No-op if already running or torn down.
    pub fn start(&mut self) {
        if self.destroyed || self.pending_frame.is_some() {
            return;
        }
        self.pending_frame = Some(self.scheduler.request());
    }

    /// Queue an input event for the next frame. Ignored after teardown.
    pub fn handle_input(&mut self, event: InputEvent) {
        if self.destroyed {
            return;
        }
        self.input.push(event);
    }

    /// Run one frame: apply queued input, paint the background, advance
    /// every particle, top the population up, and request the next frame.
    pub fn frame(&mut self) {
        if self.destroyed {
            return;
        }
        self.pending_frame = None;

        for event in self.input.drain() {
            self.apply_input(event);
        }

        let (width, height) = self.surface.size();
        self.surface.clear();
        self.surface
            .fill_rect(0.0, 0.0, width as f32, height as f32, self.config.background);

        self.state
            .advance(&mut self.surface, &self.mask, &self.config, self.caps.touch);

        let target = FieldState::target_count(width, height, &self.config);
        self.state.maintain(&self.mask, &self.config, target);

        self.pending_frame = Some(self.scheduler.request());
    }

    fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => {
                self.state.pointer = Vec2::new(x, y);
            }
            InputEvent::TouchStart => self.state.touching = true,
            InputEvent::TouchEnd => {
                self.state.touching = false;
                self.state.reset_pointer();
            }
            InputEvent::PointerLeave => {
                if !self.caps.touch {
                    self.state.reset_pointer();
                }
            }
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Rebuild the layout for a new surface size: fresh mask, fresh
    /// population. Runs between particle passes, so a frame always sees
    /// either the old layout or the new one in full.
    fn resize(&mut self, width: u32, height: u32) {
        self.surface.set_size(width, height);
        self.mask = render_label_mask(&mut self.surface, &self.config);
        self.state.particles.clear();
        let target = FieldState::target_count(width, height, &self.config);
        self.state.populate(&self.mask, &self.config, target);
        log::debug!(
            "resized to {}x{}, reseeded {} particles",
            width,
            height,
            self.state.particles.len()
        );
    }

    /// Tear the field down: cancel any pending frame and go inert. Frame
    /// steps and input after this are no-ops.
    pub fn destroy(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel(handle);
        }
        if !self.destroyed {
            log::info!("particle field destroyed");
        }
        self.destroyed = true;
    }

    // -- Accessors --

    pub fn particle_count(&self) -> usize {
        self.state.particles.len()
    }

    /// Font scale of the current layout relative to the reference size.
    pub fn text_scale(&self) -> f32 {
        self.mask.scale
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualScheduler, TestSurface};

    fn small_config() -> FieldConfig {
        FieldConfig {
            seed: 11,
            ..FieldConfig::default()
        }
    }

    fn build_field(
        width: u32,
        height: u32,
        touch: bool,
    ) -> ParticleField<TestSurface, ManualScheduler> {
        ParticleField::new(
            TestSurface::new(width, height),
            ManualScheduler::new(),
            small_config(),
            Capabilities { touch },
        )
    }

    #[test]
    fn construction_seeds_particles_on_ink() {
        let field = build_field(480, 270, false);
        assert!(field.particle_count() > 0);
        let target = FieldState::target_count(480, 270, field.config());
        assert!(field.particle_count() <= target);
        for p in &field.state().particles {
            assert!(p.base.x >= 0.0 && p.base.x < 480.0);
            assert!(p.base.y >= 0.0 && p.base.y < 270.0);
        }
    }

    #[test]
    fn start_then_frames_keep_one_frame_pending() {
        let mut field = build_field(480, 270, false);
        assert!(!field.has_pending_frame());
        field.start();
        assert!(field.has_pending_frame());
        assert_eq!(field.scheduler().requested.len(), 1);

        field.frame();
        field.frame();
        assert!(field.has_pending_frame());
        assert_eq!(field.scheduler().requested.len(), 3);
        assert!(field.scheduler().cancelled.is_empty());
    }

    #[test]
    fn frame_converges_population_to_target() {
        let mut field = build_field(480, 270, false);
        let target = FieldState::target_count(480, 270, field.config());
        for _ in 0..5 {
            field.frame();
            assert!(field.particle_count() <= target);
        }
        // block glyphs give the sampler plenty of ink to converge on
        assert_eq!(field.particle_count(), target);
    }

    #[test]
    fn pointer_move_scatters_nearby_particles() {
        let mut field = build_field(480, 270, false);
        let base = field.state().particles[0].base;
        field.handle_input(InputEvent::PointerMove { x: base.x, y: base.y });
        field.frame();
        let p = &field.state().particles[0];
        assert_ne!(p.position, p.base);
    }

    #[test]
    fn touch_host_ignores_pointer_until_touching() {
        let mut field = build_field(480, 270, true);
        let base = field.state().particles[0].base;
        field.handle_input(InputEvent::PointerMove { x: base.x, y: base.y });
        field.frame();
        assert_eq!(field.state().particles[0].position, field.state().particles[0].base);

        let base = field.state().particles[0].base;
        field.handle_input(InputEvent::TouchStart);
        field.handle_input(InputEvent::TouchMove { x: base.x, y: base.y });
        field.frame();
        assert_ne!(field.state().particles[0].position, field.state().particles[0].base);
    }

    #[test]
    fn touch_end_resets_pointer_to_sentinel() {
        let mut field = build_field(480, 270, true);
        field.handle_input(InputEvent::TouchStart);
        field.handle_input(InputEvent::TouchMove { x: 100.0, y: 100.0 });
        field.frame();
        assert!(field.state().touching);

        field.handle_input(InputEvent::TouchEnd);
        field.frame();
        assert!(!field.state().touching);
        assert_eq!(field.state().pointer, Vec2::ZERO);
    }

    #[test]
    fn pointer_leave_resets_only_on_non_touch_hosts() {
        let mut field = build_field(480, 270, false);
        field.handle_input(InputEvent::PointerMove { x: 100.0, y: 100.0 });
        field.frame();
        field.handle_input(InputEvent::PointerLeave);
        field.frame();
        assert_eq!(field.state().pointer, Vec2::ZERO);

        let mut field = build_field(480, 270, true);
        field.handle_input(InputEvent::TouchMove { x: 100.0, y: 100.0 });
        field.frame();
        field.handle_input(InputEvent::PointerLeave);
        field.frame();
        assert_eq!(field.state().pointer, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn resize_rebuilds_layout_and_population() {
        let mut field = build_field(480, 270, false);
        assert_eq!(field.text_scale(), 0.5);

        field.handle_input(InputEvent::Resize { width: 1920, height: 1080 });
        field.frame();

        assert_eq!(field.surface().size(), (1920, 1080));
        assert_eq!(field.text_scale(), 1.0);
        let target = FieldState::target_count(1920, 1080, field.config());
        assert!(field.particle_count() > 0);
        assert!(field.particle_count() <= target);
    }

    #[test]
    fn destroy_cancels_pending_frame_and_goes_inert() {
        let mut field = build_field(480, 270, false);
        field.start();
        let handle = field.scheduler().last_requested().unwrap();

        field.destroy();
        assert!(field.is_destroyed());
        assert!(!field.has_pending_frame());
        assert_eq!(field.scheduler().cancelled, vec![handle]);

        // further frames and input leave the field untouched
        let count = field.particle_count();
        let pointer = field.state().pointer;
        field.handle_input(InputEvent::PointerMove { x: 50.0, y: 50.0 });
        field.frame();
        assert_eq!(field.particle_count(), count);
        assert_eq!(field.state().pointer, pointer);
        assert_eq!(field.scheduler().requested.len(), 1);
    }

    #[test]
    fn destroy_without_start_is_safe() {
        let mut field = build_field(480, 270, false);
        field.destroy();
        assert!(field.scheduler().cancelled.is_empty());
    }

    #[test]
    fn recycling_keeps_population_at_target_across_frames() {
        let mut config = small_config();
        config.life_range = (1.0, 3.0);
        let mut field = ParticleField::new(
            TestSurface::new(480, 270),
            ManualScheduler::new(),
            config,
            Capabilities { touch: false },
        );
        let target = FieldState::target_count(480, 270, field.config());
        for _ in 0..10 {
            field.frame();
            assert!(field.particle_count() <= target);
            for p in &field.state().particles {
                assert!(p.life > 0.0);
            }
        }
    }
}
