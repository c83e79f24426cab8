//! ECS systems that operate on the encounter world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! Cross-entity effects are collected first and applied afterwards.

pub mod cleanup;
pub mod contacts;
pub mod enemy_ai;
pub mod movement;
pub mod player;
pub mod progression;
pub mod projectiles;
pub mod snapshot;
