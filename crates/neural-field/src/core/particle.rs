//! A single drifting node of the field.

use glam::Vec2;

use super::rng::Rng;

/// A point particle. Position is in logical pixels; velocity in pixels per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    /// Velocity nudge per frame at full pointer pull.
    pub const ATTRACTION: f32 = 0.02;
    /// Per-axis velocity multiplier applied every frame.
    pub const DAMPING: f32 = 0.99;
    /// Initial velocity components are drawn from ±this.
    pub const MAX_INITIAL_SPEED: f32 = 0.25;
    pub const RADIUS_RANGE: (f32, f32) = (1.0, 3.0);
    pub const OPACITY_RANGE: (f32, f32) = (0.2, 0.7);

    pub fn new(position: Vec2, velocity: Vec2, radius: f32, opacity: f32) -> Self {
        Particle {
            position,
            velocity,
            radius,
            opacity,
        }
    }

    /// Spawn at a uniformly random spot on a `width × height` surface.
    pub fn random(rng: &mut Rng, width: f32, height: f32) -> Self {
        let position = Vec2::new(rng.range(0.0, width), rng.range(0.0, height));
        let velocity = Vec2::new(
            rng.range(-Self::MAX_INITIAL_SPEED, Self::MAX_INITIAL_SPEED),
            rng.range(-Self::MAX_INITIAL_SPEED, Self::MAX_INITIAL_SPEED),
        );
        let radius = rng.range(Self::RADIUS_RANGE.0, Self::RADIUS_RANGE.1);
        let opacity = rng.range(Self::OPACITY_RANGE.0, Self::OPACITY_RANGE.1);
        Particle::new(position, velocity, radius, opacity)
    }

    /// Pull velocity toward the pointer when it is within `influence` pixels.
    /// Pull grows linearly from 0 at the edge of the radius to full strength on top.
    pub fn apply_pointer(&mut self, pointer: Vec2, influence: f32) {
        let delta = pointer - self.position;
        let dist = delta.length();
        if dist >= influence || dist <= 0.0 {
            return;
        }
        let force = (influence - dist) / influence;
        self.velocity += delta / dist * force * Self::ATTRACTION;
    }

    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    pub fn damp(&mut self) {
        self.velocity *= Self::DAMPING;
    }

    /// Toroidal wrap into `[0, width) × [0, height)`. Zero-sized axes are left alone.
    pub fn wrap(&mut self, width: f32, height: f32) {
        self.position.x = wrap_axis(self.position.x, width);
        self.position.y = wrap_axis(self.position.y, height);
    }

    /// One frame of motion: pointer pull, integrate, damp, wrap.
    pub fn tick(&mut self, pointer: Option<Vec2>, influence: f32, width: f32, height: f32) {
        if let Some(pointer) = pointer {
            self.apply_pointer(pointer, influence);
        }
        self.integrate();
        self.damp();
        self.wrap(width, height);
    }
}

fn wrap_axis(v: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !extent.is_finite() {
        return v;
    }
    let wrapped = v.rem_euclid(extent);
    // rem_euclid may round up to `extent` for tiny negative inputs.
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0, 0.5)
    }

    #[test]
    fn random_particles_respect_ranges() {
        let mut rng = Rng::new(99);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 320.0, 200.0);
            assert!(p.position.x >= 0.0 && p.position.x < 320.0);
            assert!(p.position.y >= 0.0 && p.position.y < 200.0);
            assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
            assert!(p.radius >= 1.0 && p.radius < 3.0);
            assert!(p.opacity >= 0.2 && p.opacity < 0.7);
        }
    }

    #[test]
    fn pointer_pulls_toward_itself() {
        let mut p = still(0.0, 0.0);
        p.apply_pointer(Vec2::new(50.0, 0.0), 100.0);
        // force = (100 - 50) / 100 = 0.5
        assert!((p.velocity.x - 0.5 * Particle::ATTRACTION).abs() < 1e-6);
        assert_eq!(p.velocity.y, 0.0);
    }

    #[test]
    fn closer_pointer_pulls_harder() {
        let mut near = still(0.0, 0.0);
        let mut far = still(0.0, 0.0);
        near.apply_pointer(Vec2::new(10.0, 0.0), 100.0);
        far.apply_pointer(Vec2::new(90.0, 0.0), 100.0);
        assert!(near.velocity.x > far.velocity.x);
        assert!(near.velocity.x < Particle::ATTRACTION);
    }

    #[test]
    fn pointer_outside_radius_or_on_top_is_ignored() {
        let mut p = still(0.0, 0.0);
        p.apply_pointer(Vec2::new(100.0, 0.0), 100.0);
        p.apply_pointer(Vec2::new(0.0, 0.0), 100.0);
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn damping_never_increases_speed() {
        let mut rng = Rng::new(5);
        for _ in 0..200 {
            let mut p = Particle::random(&mut rng, 100.0, 100.0);
            let before = p.velocity.length();
            p.damp();
            assert!(p.velocity.length() <= before);
        }
    }

    #[test]
    fn speed_decays_without_pointer() {
        let mut p = Particle::new(Vec2::new(5.0, 5.0), Vec2::new(0.2, -0.2), 1.0, 0.5);
        let mut last = p.velocity.length();
        for _ in 0..100 {
            p.tick(None, 100.0, 10.0, 10.0);
            let now = p.velocity.length();
            assert!(now < last);
            last = now;
        }
    }

    #[test]
    fn wrap_reenters_opposite_edge() {
        let mut p = still(-1.0, 205.0);
        p.wrap(100.0, 200.0);
        assert_eq!(p.position, Vec2::new(99.0, 5.0));
    }

    #[test]
    fn wrap_keeps_strict_upper_bound() {
        let mut p = still(100.0, -1e-9);
        p.wrap(100.0, 200.0);
        assert!(p.position.x >= 0.0 && p.position.x < 100.0);
        assert!(p.position.y >= 0.0 && p.position.y < 200.0);
    }

    #[test]
    fn wrap_ignores_zero_extent() {
        let mut p = still(-4.0, 3.0);
        p.wrap(0.0, 0.0);
        assert_eq!(p.position, Vec2::new(-4.0, 3.0));
    }
}
