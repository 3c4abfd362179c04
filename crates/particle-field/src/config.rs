//! Field parameters for runtime tuning

use crate::constants::*;
use serde::Deserialize;
use std::time::Duration;

/// Spawn parameters for one particle kind
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct KindParams {
    /// Diameter is `size_base + U * size_spread`
    pub size_base: f32,
    pub size_spread: f32,
    /// Per-axis velocity is `(U - 0.5) * speed`
    pub speed: f32,
}

impl KindParams {
    pub const fn ambient() -> Self {
        Self {
            size_base: SIZE_BASE,
            size_spread: AMBIENT_SIZE_SPREAD,
            speed: AMBIENT_SPEED,
        }
    }

    pub const fn burst() -> Self {
        Self {
            size_base: SIZE_BASE,
            size_spread: BURST_SIZE_SPREAD,
            speed: BURST_SPEED,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub tick_interval_ms: u64,
    pub fade_lifetime_ms: u64,
    /// Zero disables the grow-in
    pub grow_in_ms: u64,
    pub max_catch_up_ticks: u32,

    pub ambient_spawn_chance: f32,
    pub burst_count: usize,

    pub ambient: KindParams,
    pub burst: KindParams,

    // hsla(hue_base + U * hue_spread, saturation, lightness, alpha)
    pub burst_hue_base: f32,
    pub burst_hue_spread: f32,
    pub burst_saturation: f32,
    pub burst_lightness: f32,
    pub burst_alpha: f32,

    /// sRGB 0-255, alpha included
    pub ambient_rgba: [u8; 4],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            fade_lifetime_ms: FADE_LIFETIME_MS,
            grow_in_ms: GROW_IN_MS,
            max_catch_up_ticks: MAX_CATCH_UP_TICKS,
            ambient_spawn_chance: AMBIENT_SPAWN_CHANCE,
            burst_count: BURST_COUNT,
            ambient: KindParams::ambient(),
            burst: KindParams::burst(),
            burst_hue_base: BURST_HUE_BASE,
            burst_hue_spread: BURST_HUE_SPREAD,
            burst_saturation: BURST_SATURATION,
            burst_lightness: BURST_LIGHTNESS,
            burst_alpha: BURST_ALPHA,
            ambient_rgba: AMBIENT_RGBA,
        }
    }
}

impl FieldConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn fade_lifetime(&self) -> Duration {
        Duration::from_millis(self.fade_lifetime_ms)
    }

    pub fn grow_in(&self) -> Duration {
        Duration::from_millis(self.grow_in_ms)
    }

    /// Replace values the field cannot work with, logging each fix.
    pub fn validated(mut self) -> Self {
        if self.tick_interval_ms == 0 {
            log::warn!(
                "tick_interval_ms must be positive, using {}",
                TICK_INTERVAL_MS
            );
            self.tick_interval_ms = TICK_INTERVAL_MS;
        }
        if self.fade_lifetime_ms == 0 {
            log::warn!(
                "fade_lifetime_ms must be positive, using {}",
                FADE_LIFETIME_MS
            );
            self.fade_lifetime_ms = FADE_LIFETIME_MS;
        }
        if self.max_catch_up_ticks == 0 {
            log::warn!("max_catch_up_ticks must be at least 1");
            self.max_catch_up_ticks = 1;
        }
        if !(0.0..=1.0).contains(&self.ambient_spawn_chance) {
            let clamped = if self.ambient_spawn_chance.is_nan() {
                AMBIENT_SPAWN_CHANCE
            } else {
                self.ambient_spawn_chance.clamp(0.0, 1.0)
            };
            log::warn!(
                "ambient_spawn_chance {} outside [0, 1], using {}",
                self.ambient_spawn_chance,
                clamped
            );
            self.ambient_spawn_chance = clamped;
        }
        for (name, kind) in [("ambient", &mut self.ambient), ("burst", &mut self.burst)] {
            if kind.size_base < 0.0 || kind.size_spread < 0.0 || kind.speed < 0.0 {
                log::warn!("negative {name} spawn parameters, taking absolute values");
                kind.size_base = kind.size_base.abs();
                kind.size_spread = kind.size_spread.abs();
                kind.speed = kind.speed.abs();
            }
        }
        self
    }
}
