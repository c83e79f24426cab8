//! Encounter simulation for Lighthouse.
//!
//! Owns the hecs ECS world, runs the per-tick systems (player input, enemy AI,
//! projectiles, contact resolution, progression, floor transitions) and
//! produces `FrameSnapshot`s for the renderer.

pub mod backend;
pub mod clock;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod projectile;
pub mod systems;
pub mod weapons;
pub mod world_setup;

pub use backend::{CollisionBackend, ColliderView, ContactPair, NoContacts};
pub use clock::FrameClock;
pub use config::SimConfig;
pub use engine::{EncounterEngine, StairsOutcome};
pub use error::ConfigError;
pub use lighthouse_core as core;

#[cfg(test)]
mod tests;
