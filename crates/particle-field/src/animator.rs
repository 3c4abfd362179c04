//! Start/stop lifecycle around a [`ParticleField`]
//!
//! The animator is the only owner of the live set. While running it accepts
//! pointer input and runs due ticks; once stopped, input and clock are both
//! ignored. Dropping a running animator stops it, and [`Session`] ties a run
//! to a scope so that an early return or a panic unwind also stops it.

use crate::clock::Clock;
use crate::field::ParticleField;
use crate::ticker::Ticker;
use glam::Vec2;
use rand::Rng;
use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Running,
    Stopped,
}

pub struct Animator<R: Rng, C: Clock> {
    field: ParticleField<R, C>,
    ticker: Ticker,
    state: AnimatorState,
    pointer: Option<Vec2>,
}

impl<R: Rng, C: Clock> Animator<R, C> {
    pub fn new(field: ParticleField<R, C>) -> Self {
        let config = field.config();
        let ticker = Ticker::new(config.tick_interval(), config.max_catch_up_ticks);
        Self {
            field,
            ticker,
            state: AnimatorState::Idle,
            pointer: None,
        }
    }

    /// Subscribe to input and start the tick clock. No-op while running.
    pub fn start(&mut self) {
        if self.state == AnimatorState::Running {
            return;
        }
        self.ticker.reset(self.field.clock().now());
        self.state = AnimatorState::Running;
        log::debug!(
            "particle animator started ({}ms tick)",
            self.ticker.interval().as_millis()
        );
    }

    /// Cancel the clock, drop input subscriptions and release the live set.
    /// Safe to call any number of times.
    pub fn stop(&mut self) {
        if self.state != AnimatorState::Running {
            return;
        }
        self.state = AnimatorState::Stopped;
        self.pointer = None;
        self.field.clear();

        let stats = self.field.stats();
        log::debug!(
            "particle animator stopped after {} ticks ({} spawned, {} removed)",
            stats.ticks,
            stats.spawned,
            stats.removed()
        );
    }

    /// Start and return a guard that stops the animator when dropped.
    pub fn session(&mut self) -> Session<'_, R, C> {
        self.start();
        Session { animator: self }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    /// Returns false when the event was not delivered (animator not running).
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> bool {
        if !self.is_running() {
            return false;
        }
        self.pointer = Some(Vec2::new(x, y));
        self.field.on_pointer_move(x, y);
        true
    }

    pub fn pointer_clicked(&mut self, x: f32, y: f32) -> bool {
        if !self.is_running() {
            return false;
        }
        self.field.on_pointer_click(x, y);
        true
    }

    /// Run every tick that is due at the clock's current time.
    pub fn update(&mut self) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let ticks = self.ticker.due(self.field.clock().now());
        for _ in 0..ticks {
            self.field.tick();
        }
        ticks
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.field.resize(width, height);
    }

    /// Last pointer position seen while running
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn field(&self) -> &ParticleField<R, C> {
        &self.field
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }
}

impl<R: Rng, C: Clock> Drop for Animator<R, C> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// A running animator borrowed for the length of a scope
pub struct Session<'a, R: Rng, C: Clock> {
    animator: &'a mut Animator<R, C>,
}

impl<R: Rng, C: Clock> Deref for Session<'_, R, C> {
    type Target = Animator<R, C>;

    fn deref(&self) -> &Self::Target {
        self.animator
    }
}

impl<R: Rng, C: Clock> DerefMut for Session<'_, R, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.animator
    }
}

impl<R: Rng, C: Clock> Drop for Session<'_, R, C> {
    fn drop(&mut self) {
        self.animator.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::FieldConfig;
    use crate::particle::Viewport;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn animator() -> (Animator<StdRng, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let field = ParticleField::new(
            FieldConfig::default(),
            Viewport::new(800.0, 600.0),
            StdRng::seed_from_u64(11),
            clock.clone(),
        );
        (Animator::new(field), clock)
    }

    #[test]
    fn test_idle_ignores_input_and_clock() {
        let (mut animator, clock) = animator();
        assert_eq!(animator.state(), AnimatorState::Idle);
        assert!(!animator.pointer_clicked(10.0, 10.0));
        clock.advance(Duration::from_millis(100));
        assert_eq!(animator.update(), 0);
        assert!(animator.field().is_empty());
    }

    #[test]
    fn test_update_runs_due_ticks() {
        let (mut animator, clock) = animator();
        animator.start();

        clock.advance(Duration::from_millis(40));
        assert_eq!(animator.update(), 2);
        assert_eq!(animator.field().stats().ticks, 2);

        // 8ms carried over
        clock.advance(Duration::from_millis(8));
        assert_eq!(animator.update(), 1);
    }

    #[test]
    fn test_stop_is_idempotent_and_clears() {
        let (mut animator, _) = animator();
        animator.start();
        animator.pointer_clicked(100.0, 100.0);
        assert_eq!(animator.field().len(), 10);

        animator.stop();
        animator.stop();
        assert_eq!(animator.state(), AnimatorState::Stopped);
        assert!(animator.field().is_empty());
        assert_eq!(animator.pointer(), None);
    }

    #[test]
    fn test_restart_resets_tick_phase() {
        let (mut animator, clock) = animator();
        animator.start();
        animator.stop();

        clock.advance(Duration::from_secs(5));
        animator.start();
        // the stopped interval is not made up for
        assert_eq!(animator.update(), 0);
        clock.advance(Duration::from_millis(16));
        assert_eq!(animator.update(), 1);
    }

    #[test]
    fn test_pointer_position_tracked() {
        let (mut animator, _) = animator();
        animator.start();
        animator.pointer_moved(12.0, 34.0);
        assert_eq!(animator.pointer(), Some(Vec2::new(12.0, 34.0)));
    }

    #[test]
    fn test_session_stops_on_scope_exit() {
        let (mut animator, _) = animator();
        {
            let mut session = animator.session();
            assert!(session.is_running());
            session.pointer_clicked(50.0, 50.0);
        }
        assert_eq!(animator.state(), AnimatorState::Stopped);
        assert!(!animator.pointer_clicked(50.0, 50.0));
    }
}
