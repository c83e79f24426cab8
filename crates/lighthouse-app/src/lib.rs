//! Lighthouse headless host.
//!
//! Runs the encounter engine on its own thread with a stand-in contact
//! reporter, and exposes a small command/snapshot API to whatever front end
//! drives it.

pub mod contacts;
pub mod control;
pub mod error;
pub mod game_loop;
pub mod state;

pub use lighthouse_core as core;
