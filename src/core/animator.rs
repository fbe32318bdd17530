use super::config::ParticleParams;
use super::constants::{MAX_FRAME_SCALE, REFERENCE_FRAME_MS};
use super::particles::{HeartPath, Particle, ParticleField, Viewport};
use rand::Rng;

/// 2D drawing target for the particle field.
pub trait Surface {
    /// Match the backing store to the viewport. Must not touch particles.
    fn resize(&mut self, viewport: Viewport);
    fn clear(&mut self);
    fn fill_heart(&mut self, path: &HeartPath, alpha: f32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// Pool populated; the caller should register resize and schedule frames.
    Started,
    /// Started earlier in this session, whether or not it was stopped since.
    AlreadyRunning,
    ReducedMotion,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// Request another frame.
    Continue,
    Stopped,
}

/// Owned animation context: the activation flag, the particle pool and the
/// surface it draws to.
///
/// Lifecycle is `new -> start -> frame* -> (page end)`. Starting happens at
/// most once; `stop` is terminal and the page never calls it.
pub struct Animator<S: Surface, R: Rng> {
    surface: S,
    rng: R,
    params: ParticleParams,
    field: ParticleField,
    viewport: Viewport,
    reduced_motion: bool,
    started: bool,
    active: bool,
    frames: u64,
}

impl<S: Surface, R: Rng> Animator<S, R> {
    pub fn new(surface: S, rng: R, params: ParticleParams, reduced_motion: bool) -> Self {
        Self {
            surface,
            rng,
            params,
            field: ParticleField::default(),
            viewport: Viewport::default(),
            reduced_motion,
            started: false,
            active: false,
            frames: 0,
        }
    }

    pub fn start(&mut self, viewport: Viewport) -> StartOutcome {
        if self.reduced_motion {
            log::debug!("[animator] reduced motion preferred; not starting");
            return StartOutcome::ReducedMotion;
        }
        if self.started {
            return StartOutcome::AlreadyRunning;
        }
        self.started = true;
        self.active = true;
        self.resize(viewport);
        self.field.populate(&self.params, self.viewport, &mut self.rng);
        log::info!(
            "[animator] started with {} particles in {:.0}x{:.0}",
            self.field.len(),
            viewport.width,
            viewport.height
        );
        StartOutcome::Started
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Viewport changes resize the surface only; particles keep their state
    /// and recycle against the new bottom edge from then on.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.surface.resize(viewport);
    }

    /// One display frame. `scale` is the elapsed time in reference frames,
    /// see [`frame_scale`].
    pub fn frame(&mut self, scale: f32) -> FrameStatus {
        self.surface.clear();
        if !self.active {
            return FrameStatus::Stopped;
        }
        let recycled = self
            .field
            .step(&self.params, self.viewport, scale, &mut self.rng);
        for p in self.field.iter() {
            self.surface.fill_heart(&p.heart_path(), p.alpha);
        }
        self.frames += 1;
        if recycled > 0 {
            log::trace!("[animator] frame {} recycled {}", self.frames, recycled);
        }
        FrameStatus::Continue
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[inline]
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.field.iter()
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.field.len()
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// Convert wall time since the previous frame into reference frames, so drift
/// speed does not depend on the display's refresh rate.
#[inline]
pub fn frame_scale(elapsed_ms: f64) -> f32 {
    ((elapsed_ms / REFERENCE_FRAME_MS) as f32).clamp(0.0, MAX_FRAME_SCALE)
}
