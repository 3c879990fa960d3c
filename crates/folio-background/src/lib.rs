//! Decorative particle background.
//!
//! [`ParticleField`] is the pure simulation: drifting particles joined by
//! faint lines when they come close. [`Background::mount`] drives a field
//! from a tokio interval and returns a [`MountedBackground`] handle that owns
//! the animation task and the resize subscription.

mod field;
mod mount;

pub use field::{
    CONNECTION_DISTANCE, Connection, DEFAULT_PARTICLES, Frame, MAX_VELOCITY, Particle,
    ParticleField, ViewportSize,
};
pub use mount::{Background, BackgroundConfig, DEFAULT_FRAME_INTERVAL, MountedBackground};
