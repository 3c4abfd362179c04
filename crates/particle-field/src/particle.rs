//! Particle types for the pointer-reactive background

use crate::color::Color;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::time::Duration;

/// Identifier unique among live particles of one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u64);

/// Which producer created a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Sampled from pointer movement: slow, small, fixed color
    Ambient,
    /// One of a click burst: faster, larger, random hue
    Burst,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub kind: ParticleKind,
    /// Center in logical viewport pixels
    pub position: Vec2,
    /// Pixels per tick
    pub velocity: Vec2,
    /// Diameter in logical pixels
    pub size: f32,
    pub color: Color,
    pub opacity: f32,
    /// Multiplier on `size`, growing from 0 to 1 after spawn
    pub scale: f32,
    pub created_at: Duration,
}

impl Particle {
    /// Age relative to `now`; zero if `now` predates creation
    pub fn age(&self, now: Duration) -> Duration {
        now.saturating_sub(self.created_at)
    }

    /// `max(0, 1 - age / lifetime)`
    pub fn opacity_at(&self, now: Duration, lifetime: Duration) -> f32 {
        fade(self.age(now), lifetime)
    }

    pub fn scale_at(&self, now: Duration, grow_in: Duration) -> f32 {
        grow(self.age(now), grow_in)
    }

    /// Strictly inside `(0, width) x (0, height)`
    pub fn is_inside(&self, viewport: Viewport) -> bool {
        self.position.x > 0.0
            && self.position.x < viewport.width
            && self.position.y > 0.0
            && self.position.y < viewport.height
    }

    pub fn to_instance(&self) -> ParticleInstance {
        ParticleInstance {
            position: self.position.to_array(),
            size: self.size,
            opacity: self.opacity,
            color: self.color.to_array(),
            scale: self.scale,
        }
    }
}

/// Linear fade from 1 at age zero to 0 at `lifetime`
pub fn fade(age: Duration, lifetime: Duration) -> f32 {
    if lifetime.is_zero() {
        return 0.0;
    }
    (1.0 - age.as_secs_f32() / lifetime.as_secs_f32()).max(0.0)
}

/// Linear grow-in from 0 at age zero to 1 at `grow_in`, then held at 1
pub fn grow(age: Duration, grow_in: Duration) -> f32 {
    if grow_in.is_zero() {
        return 1.0;
    }
    (age.as_secs_f32() / grow_in.as_secs_f32()).min(1.0)
}

/// Viewport size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// GPU-compatible particle snapshot
/// Aligned for WGSL struct compatibility (vertex instance attributes)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Center in logical pixels
    pub position: [f32; 2],
    /// Diameter in logical pixels
    pub size: f32,
    pub opacity: f32,
    /// Linear RGBA
    pub color: [f32; 4],
    pub scale: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle {
            id: ParticleId(0),
            kind: ParticleKind::Ambient,
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            size: 4.0,
            color: Color::transparent(),
            opacity: 1.0,
            scale: 1.0,
            created_at: Duration::from_millis(100),
        }
    }

    #[test]
    fn test_fade_endpoints() {
        let lifetime = Duration::from_millis(2000);
        assert_eq!(fade(Duration::ZERO, lifetime), 1.0);
        assert_eq!(fade(Duration::from_millis(1000), lifetime), 0.5);
        assert_eq!(fade(Duration::from_millis(2000), lifetime), 0.0);
        assert_eq!(fade(Duration::from_millis(5000), lifetime), 0.0);
    }

    #[test]
    fn test_grow_endpoints() {
        let grow_in = Duration::from_millis(200);
        assert_eq!(grow(Duration::ZERO, grow_in), 0.0);
        assert_eq!(grow(Duration::from_millis(100), grow_in), 0.5);
        assert_eq!(grow(Duration::from_millis(200), grow_in), 1.0);
        assert_eq!(grow(Duration::from_millis(1500), grow_in), 1.0);
        assert_eq!(grow(Duration::ZERO, Duration::ZERO), 1.0);
    }

    #[test]
    fn test_age_saturates_before_creation() {
        let p = particle_at(1.0, 1.0);
        assert_eq!(p.age(Duration::from_millis(50)), Duration::ZERO);
        assert_eq!(p.opacity_at(Duration::from_millis(50), Duration::from_millis(2000)), 1.0);
    }

    #[test]
    fn test_bounds_are_exclusive() {
        let viewport = Viewport::new(100.0, 50.0);
        assert!(particle_at(1.0, 1.0).is_inside(viewport));
        assert!(!particle_at(0.0, 10.0).is_inside(viewport));
        assert!(!particle_at(10.0, 0.0).is_inside(viewport));
        assert!(!particle_at(100.0, 10.0).is_inside(viewport));
        assert!(!particle_at(10.0, 50.0).is_inside(viewport));
        assert!(!particle_at(-3.0, 10.0).is_inside(viewport));
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 36);

        let instance = particle_at(3.0, 4.0).to_instance();
        assert_eq!(instance.position, [3.0, 4.0]);
        assert_eq!(instance.size, 4.0);
        assert_eq!(instance.scale, 1.0);
    }
}
