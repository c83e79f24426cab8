//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKind;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Joystick direction. Expected length 0 or 1; longer vectors are normalized.
    SetMoveDirection { x: f32, y: f32 },
    /// Single shot towards a point (fire-button edge).
    FireAt { x: f32, y: f32 },
    /// Hold fire: pulse a shot towards the point at the auto-fire interval.
    StartAutoFire { x: f32, y: f32 },
    StopAutoFire,
    SwitchWeapon { weapon: WeaponKind },
    Pause,
    Resume,
}
