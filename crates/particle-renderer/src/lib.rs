//! # Particle Renderer
//!
//! Draws the live particle set as alpha-blended circles over the page background.

pub mod renderer;

pub use renderer::*;
