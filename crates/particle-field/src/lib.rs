//! # Particle Field
//!
//! Pointer-reactive background particles: ambient particles sampled from
//! pointer movement, bursts on click, a fixed 16ms tick that moves, fades and
//! culls them, and a start/stop lifecycle for the host view.

pub mod animator;
pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod field;
pub mod particle;
pub mod ticker;

pub use animator::*;
pub use clock::*;
pub use color::*;
pub use config::*;
pub use field::*;
pub use particle::*;
pub use ticker::*;
