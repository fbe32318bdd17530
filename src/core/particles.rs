use super::config::ParticleParams;
use super::constants::{HEART_LOBE_X, HEART_LOBE_Y, HEART_SHOULDER_X};
use glam::Vec2;
use rand::Rng;

/// Drawing area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One floating heart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub size: f32,
    /// Upward drift in px per reference frame.
    pub speed: f32,
    /// Horizontal wobble amplitude in px.
    pub wobble: f32,
    /// Wobble phase advance per px of vertical travel.
    pub wobble_frequency: f32,
    pub alpha: f32,
}

impl Particle {
    /// Fresh particle somewhere in the band just below the viewport, so a new
    /// batch enters the screen staggered rather than as a single row.
    pub fn spawn<R: Rng + ?Sized>(
        params: &ParticleParams,
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        let x = rng.gen::<f32>() * viewport.width;
        let y = viewport.height + rng.gen::<f32>() * viewport.height;
        Self {
            pos: Vec2::new(x, y),
            size: params.size.lerp(rng.gen()),
            speed: params.speed.lerp(rng.gen()),
            wobble: params.wobble.lerp(rng.gen()),
            wobble_frequency: params.wobble_frequency.lerp(rng.gen()),
            alpha: params.alpha.lerp(rng.gen()),
        }
    }

    /// Replacement for a particle that left through the top: new random
    /// attributes, placed exactly one (new) size below the bottom edge.
    pub fn reinitialize<R: Rng + ?Sized>(
        self,
        params: &ParticleParams,
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        let mut fresh = Self::spawn(params, viewport, rng);
        fresh.pos.y = viewport.height + fresh.size;
        fresh
    }

    /// Move one step upward. `scale` is the elapsed time in reference frames.
    #[inline]
    pub fn advance(self, scale: f32) -> Self {
        let y = self.pos.y - self.speed * scale;
        let x = self.pos.x + (y * self.wobble_frequency).sin() * self.wobble * scale;
        Self {
            pos: Vec2::new(x, y),
            ..self
        }
    }

    #[inline]
    pub fn is_above_top(&self) -> bool {
        self.pos.y < -self.size
    }

    pub fn heart_path(&self) -> HeartPath {
        let Vec2 { x, y } = self.pos;
        let s = self.size;
        let lobe_y = y + s * HEART_LOBE_Y;
        HeartPath {
            start: self.pos,
            curves: [
                [
                    Vec2::new(x + s * HEART_SHOULDER_X, y - s),
                    Vec2::new(x + s * HEART_LOBE_X, lobe_y),
                    Vec2::new(x, y + s),
                ],
                [
                    Vec2::new(x - s * HEART_LOBE_X, lobe_y),
                    Vec2::new(x - s * HEART_SHOULDER_X, y - s),
                    self.pos,
                ],
            ],
        }
    }
}

/// Closed heart outline: a start point and two cubic Béziers
/// (control 1, control 2, end) that return to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartPath {
    pub start: Vec2,
    pub curves: [[Vec2; 3]; 2],
}

/// Fixed-size particle pool. Only `populate` changes its length.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn populate<R: Rng + ?Sized>(
        &mut self,
        params: &ParticleParams,
        viewport: Viewport,
        rng: &mut R,
    ) {
        self.particles = (0..params.count)
            .map(|_| Particle::spawn(params, viewport, &mut *rng))
            .collect();
    }

    /// Advance every particle and recycle the ones that drifted off the top.
    /// Returns how many were recycled.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        params: &ParticleParams,
        viewport: Viewport,
        scale: f32,
        rng: &mut R,
    ) -> usize {
        let mut recycled = 0;
        for p in &mut self.particles {
            let moved = p.advance(scale);
            *p = if moved.is_above_top() {
                recycled += 1;
                moved.reinitialize(params, viewport, &mut *rng)
            } else {
                moved
            };
        }
        recycled
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

pub fn heart_fill_style(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
}
