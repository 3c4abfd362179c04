//! Default tuning for the particle field
//!
//! Values are in logical pixels and milliseconds. They are the defaults of
//! [`FieldConfig`](crate::FieldConfig); a config file can override them.

/// Fixed period of the animation clock (~60Hz)
pub const TICK_INTERVAL_MS: u64 = 16;

/// Age at which a particle has fully faded out
pub const FADE_LIFETIME_MS: u64 = 2000;

/// Age at which a particle reaches full size; it spawns at scale 0
pub const GROW_IN_MS: u64 = 200;

/// Probability that a single pointer-move event spawns an ambient particle
pub const AMBIENT_SPAWN_CHANCE: f32 = 0.2;

/// Number of particles spawned per click
pub const BURST_COUNT: usize = 10;

/// Smallest particle diameter for both kinds
pub const SIZE_BASE: f32 = 4.0;

/// Random diameter added on top of [`SIZE_BASE`]
pub const AMBIENT_SIZE_SPREAD: f32 = 8.0;
pub const BURST_SIZE_SPREAD: f32 = 20.0;

/// Per-axis velocity is `(U - 0.5) * speed`, in pixels per tick
pub const AMBIENT_SPEED: f32 = 1.0;
pub const BURST_SPEED: f32 = 3.0;

/// Burst hue band in degrees: `BURST_HUE_BASE + U * BURST_HUE_SPREAD`
pub const BURST_HUE_BASE: f32 = 190.0;
pub const BURST_HUE_SPREAD: f32 = 60.0;

/// Burst saturation / lightness / alpha (CSS `hsla(h, 100%, 70%, 0.3)`)
pub const BURST_SATURATION: f32 = 1.0;
pub const BURST_LIGHTNESS: f32 = 0.7;
pub const BURST_ALPHA: f32 = 0.3;

/// Ambient particle color, CSS `rgba(56, 189, 248, 0.2)`
pub const AMBIENT_RGBA: [u8; 4] = [56, 189, 248, 51];

/// Upper bound on ticks run for a single frame after a stall
pub const MAX_CATCH_UP_TICKS: u32 = 4;
