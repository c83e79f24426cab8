//! Enemy AI for Lighthouse.
//!
//! Implements the per-enemy behavior state machine
//! (patrol / alert / chase / attack / dead), vision-cone detection,
//! and the archetype stat table.

pub mod fsm;
pub mod profiles;

pub use lighthouse_core as core;
