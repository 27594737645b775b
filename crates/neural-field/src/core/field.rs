use glam::Vec2;

use super::particle::Particle;
use super::rng::Rng;
use crate::api::config::MAX_PARTICLES;

/// The full particle set for one surface size.
///
/// Particles carry no identity beyond their index. A resize throws the whole
/// set away and spawns a fresh one.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: Rng,
}

impl ParticleField {
    /// An empty, zero-sized field. Call [`regenerate`](Self::regenerate) once a size is known.
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng: Rng::new(seed),
        }
    }

    /// A field with an explicit particle layout (scripted scenes and tests).
    pub fn from_particles(width: f32, height: f32, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            width,
            height,
            rng: Rng::new(1),
        }
    }

    /// Discard every particle and spawn `count` new ones across `width × height`.
    /// `count` is capped at [`MAX_PARTICLES`].
    pub fn regenerate(&mut self, width: f32, height: f32, count: usize) {
        let count = count.min(MAX_PARTICLES);
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::random(&mut self.rng, self.width, self.height);
            self.particles.push(p);
        }
        log::debug!(
            "regenerated {} particles for {}x{}",
            count,
            self.width,
            self.height
        );
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self, pointer: Option<Vec2>, influence: f32) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.tick(pointer, influence, w, h);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// True when there is nothing to draw onto.
    pub fn has_zero_area(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
