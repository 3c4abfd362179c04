//! Live particle set driven by pointer input and a fixed tick
//!
//! Everything here is synchronous and total: spawning and ticking never fail.
//! Out-of-range pointer coordinates are accepted and culled on the next tick.

use crate::clock::Clock;
use crate::color::Color;
use crate::config::{FieldConfig, KindParams};
use crate::particle::{Particle, ParticleId, ParticleInstance, ParticleKind, Viewport};
use glam::Vec2;
use rand::Rng;

/// A fully specified particle to insert, bypassing the random producers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpawn {
    pub kind: ParticleKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Color,
}

/// Running totals since the field was created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStats {
    pub ticks: u64,
    pub spawned: u64,
    pub faded: u64,
    pub offscreen: u64,
}

impl FieldStats {
    pub fn removed(&self) -> u64 {
        self.faded + self.offscreen
    }
}

pub struct ParticleField<R, C> {
    config: FieldConfig,
    particles: Vec<Particle>,
    viewport: Viewport,
    ambient_color: Color,
    rng: R,
    clock: C,
    next_id: u64,
    stats: FieldStats,
}

impl<R: Rng, C: Clock> ParticleField<R, C> {
    pub fn new(config: FieldConfig, viewport: Viewport, rng: R, clock: C) -> Self {
        let [r, g, b, a] = config.ambient_rgba;
        Self {
            ambient_color: Color::from_srgba(r, g, b, a),
            config,
            particles: Vec::new(),
            viewport,
            rng,
            clock,
            next_id: 0,
            stats: FieldStats::default(),
        }
    }

    /// Sample one pointer-move event. Returns the id of the ambient particle
    /// if this event was selected (probability `ambient_spawn_chance`).
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<ParticleId> {
        let draw: f32 = self.rng.random();
        if draw <= 1.0 - self.config.ambient_spawn_chance {
            return None;
        }
        let particle = self.create_particle(Vec2::new(x, y), ParticleKind::Ambient);
        Some(self.insert(particle))
    }

    /// Spawn a full burst at the click position. Returns how many were added.
    pub fn on_pointer_click(&mut self, x: f32, y: f32) -> usize {
        let origin = Vec2::new(x, y);
        let count = self.config.burst_count;
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = self.create_particle(origin, ParticleKind::Burst);
            self.insert(particle);
        }
        log::trace!("burst of {} at ({:.0}, {:.0})", count, x, y);
        count
    }

    pub fn emit(&mut self, spawn: ParticleSpawn) -> ParticleId {
        let particle = Particle {
            id: ParticleId(0),
            kind: spawn.kind,
            position: spawn.position,
            velocity: spawn.velocity,
            size: spawn.size,
            color: spawn.color,
            opacity: 1.0,
            scale: 0.0,
            created_at: self.clock.now(),
        };
        self.insert(particle)
    }

    /// Advance every particle by one step, refresh opacity and scale from age
    /// and drop the faded or off-screen ones. One clock reading is shared by
    /// the batch.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        let lifetime = self.config.fade_lifetime();
        let grow_in = self.config.grow_in();
        let viewport = self.viewport;

        let mut faded = 0u64;
        let mut offscreen = 0u64;
        self.particles.retain_mut(|p| {
            p.position += p.velocity;
            p.opacity = p.opacity_at(now, lifetime);
            p.scale = p.scale_at(now, grow_in);
            if p.opacity <= 0.0 {
                faded += 1;
                false
            } else if !p.is_inside(viewport) {
                offscreen += 1;
                false
            } else {
                true
            }
        });

        self.stats.ticks += 1;
        self.stats.faded += faded;
        self.stats.offscreen += offscreen;
    }

    /// Takes effect at the next cull
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn instances(&self) -> impl Iterator<Item = ParticleInstance> + '_ {
        self.particles.iter().map(Particle::to_instance)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn stats(&self) -> FieldStats {
        self.stats
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn insert(&mut self, mut particle: Particle) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        particle.id = id;
        self.particles.push(particle);
        self.stats.spawned += 1;
        id
    }

    fn create_particle(&mut self, position: Vec2, kind: ParticleKind) -> Particle {
        let params: KindParams = match kind {
            ParticleKind::Ambient => self.config.ambient,
            ParticleKind::Burst => self.config.burst,
        };

        let size = params.size_base + self.rng.random::<f32>() * params.size_spread;
        let velocity = Vec2::new(
            (self.rng.random::<f32>() - 0.5) * params.speed,
            (self.rng.random::<f32>() - 0.5) * params.speed,
        );
        let color = match kind {
            ParticleKind::Ambient => self.ambient_color,
            ParticleKind::Burst => Color::from_hsla(
                self.config.burst_hue_base + self.rng.random::<f32>() * self.config.burst_hue_spread,
                self.config.burst_saturation,
                self.config.burst_lightness,
                self.config.burst_alpha,
            ),
        };

        Particle {
            id: ParticleId(0),
            kind,
            position,
            velocity,
            size,
            color,
            opacity: 1.0,
            scale: 0.0,
            created_at: self.clock.now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};
    use std::collections::HashSet;
    use std::time::Duration;

    /// Yields the same word forever: `u32::MAX` samples as ~1.0, `0` as 0.0
    struct ConstRng(u32);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0
        }

        fn next_u64(&mut self) -> u64 {
            (u64::from(self.0) << 32) | u64::from(self.0)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(4) {
                let bytes = self.0.to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    fn field_with<R: Rng>(rng: R) -> (ParticleField<R, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let field = ParticleField::new(
            FieldConfig::default(),
            Viewport::new(1000.0, 1000.0),
            rng,
            clock.clone(),
        );
        (field, clock)
    }

    #[test]
    fn test_move_skips_low_draws() {
        let (mut field, _) = field_with(ConstRng(0));
        for _ in 0..100 {
            assert_eq!(field.on_pointer_move(10.0, 10.0), None);
        }
        assert!(field.is_empty());
    }

    #[test]
    fn test_move_spawns_on_high_draw() {
        let (mut field, _) = field_with(ConstRng(u32::MAX));
        let id = field.on_pointer_move(10.0, 20.0);

        assert!(id.is_some());
        assert_eq!(field.len(), 1);
        let p = &field.particles()[0];
        assert_eq!(p.kind, ParticleKind::Ambient);
        assert_eq!(p.position, Vec2::new(10.0, 20.0));
        assert_eq!(p.opacity, 1.0);
    }

    #[test]
    fn test_move_threshold_is_strict() {
        // 0.8 exactly, as rand maps the top 24 bits of a u32 to [0, 1)
        let (mut field, _) = field_with(ConstRng(13_421_773 << 8));
        assert_eq!(field.on_pointer_move(10.0, 10.0), None);

        let (mut field, _) = field_with(ConstRng(13_421_774 << 8));
        assert!(field.on_pointer_move(10.0, 10.0).is_some());
    }

    #[test]
    fn test_burst_color_follows_hue_band() {
        let (mut field, _) = field_with(ConstRng(0));
        field.on_pointer_click(50.0, 50.0);
        let expected = Color::from_hsla(190.0, 1.0, 0.7, 0.3);
        assert!(field.particles().iter().all(|p| p.color == expected));

        let (mut field, _) = field_with(ConstRng(u32::MAX));
        field.on_pointer_click(50.0, 50.0);
        let top = Color::from_hsla(250.0, 1.0, 0.7, 0.3);
        for p in field.particles() {
            assert!((p.color.r - top.r).abs() < 1e-4, "{:?}", p.color);
            assert!((p.color.g - top.g).abs() < 1e-4, "{:?}", p.color);
            assert!((p.color.b - top.b).abs() < 1e-4, "{:?}", p.color);
        }
    }

    #[test]
    fn test_click_always_adds_burst_count() {
        let (mut field, _) = field_with(ConstRng(0));
        assert_eq!(field.on_pointer_click(50.0, 50.0), 10);
        assert_eq!(field.on_pointer_click(50.0, 50.0), 10);
        assert_eq!(field.len(), 20);
        assert!(field.particles().iter().all(|p| p.kind == ParticleKind::Burst));
    }

    #[test]
    fn test_ids_unique_among_live() {
        let (mut field, _) = field_with(StdRng::seed_from_u64(7));
        for i in 0..20 {
            field.on_pointer_click(100.0 + i as f32, 100.0);
        }
        let ids: HashSet<_> = field.particles().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), field.len());
    }

    #[test]
    fn test_ambient_color_is_fixed() {
        let (mut field, _) = field_with(StdRng::seed_from_u64(1));
        for _ in 0..200 {
            field.on_pointer_move(200.0, 200.0);
        }
        let expected = Color::from_srgba(56, 189, 248, 51);
        assert!(field.particles().iter().all(|p| p.color == expected));
    }

    #[test]
    fn test_spawn_ranges() {
        let (mut field, _) = field_with(StdRng::seed_from_u64(42));
        for _ in 0..50 {
            field.on_pointer_click(500.0, 500.0);
        }
        for _ in 0..2000 {
            field.on_pointer_move(500.0, 500.0);
        }

        for p in field.particles() {
            match p.kind {
                ParticleKind::Ambient => {
                    assert!((4.0..12.0).contains(&p.size), "{}", p.size);
                    assert!(p.velocity.x.abs() <= 0.5 && p.velocity.y.abs() <= 0.5);
                }
                ParticleKind::Burst => {
                    assert!((4.0..24.0).contains(&p.size), "{}", p.size);
                    assert!(p.velocity.x.abs() <= 1.5 && p.velocity.y.abs() <= 1.5);
                    assert!((p.color.a - 0.3).abs() < 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_tick_moves_and_fades() {
        let (mut field, clock) = field_with(ConstRng(0));
        field.emit(ParticleSpawn {
            kind: ParticleKind::Ambient,
            position: Vec2::new(100.0, 100.0),
            velocity: Vec2::new(2.0, -1.0),
            size: 6.0,
            color: Color::transparent(),
        });

        clock.advance(Duration::from_millis(500));
        field.tick();

        let p = &field.particles()[0];
        assert_eq!(p.position, Vec2::new(102.0, 99.0));
        assert_eq!(p.opacity, 0.75);
        assert_eq!(p.velocity, Vec2::new(2.0, -1.0));
        assert_eq!(p.size, 6.0);
    }

    #[test]
    fn test_particles_grow_in_over_200ms() {
        let (mut field, clock) = field_with(ConstRng(0));
        field.emit(ParticleSpawn {
            kind: ParticleKind::Burst,
            position: Vec2::new(100.0, 100.0),
            velocity: Vec2::ZERO,
            size: 10.0,
            color: Color::transparent(),
        });
        assert_eq!(field.particles()[0].scale, 0.0);
        assert_eq!(field.instances().next().map(|i| i.scale), Some(0.0));

        clock.advance(Duration::from_millis(100));
        field.tick();
        assert_eq!(field.particles()[0].scale, 0.5);

        clock.advance(Duration::from_millis(100));
        field.tick();
        assert_eq!(field.particles()[0].scale, 1.0);

        clock.advance(Duration::from_millis(800));
        field.tick();
        assert_eq!(field.particles()[0].scale, 1.0);
        assert_eq!(field.particles()[0].size, 10.0);
    }

    #[test]
    fn test_resize_applies_on_next_cull() {
        let (mut field, _) = field_with(ConstRng(0));
        field.emit(ParticleSpawn {
            kind: ParticleKind::Ambient,
            position: Vec2::new(600.0, 100.0),
            velocity: Vec2::ZERO,
            size: 6.0,
            color: Color::transparent(),
        });

        field.resize(500.0, 500.0);
        assert_eq!(field.len(), 1);

        field.tick();
        assert!(field.is_empty());
        assert_eq!(field.stats().offscreen, 1);
    }

    #[test]
    fn test_stats_track_spawn_and_removal() {
        let (mut field, clock) = field_with(StdRng::seed_from_u64(3));
        field.on_pointer_click(500.0, 500.0);
        clock.advance(Duration::from_millis(2000));
        field.tick();

        let stats = field.stats();
        assert_eq!(stats.spawned, 10);
        assert_eq!(stats.faded, 10);
        assert_eq!(stats.removed(), 10);
        assert_eq!(stats.ticks, 1);
    }
}
