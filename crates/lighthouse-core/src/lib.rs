//! Core types and definitions for the Lighthouse gameplay simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, collision categories, state snapshots, events,
//! and constants. It has no dependency on a renderer or physics engine.

pub mod collision;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

pub use glam::Vec2;
