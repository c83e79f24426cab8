//! Frame snapshot: the visible state handed to the renderer and UI each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{GameEvent, TextEvent};
use crate::types::SimTime;

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: EncounterPhase,
    pub floor: u32,
    pub player: PlayerView,
    pub ammo: AmmoView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    /// Living enemies left on the floor.
    pub enemies_remaining: usize,
    pub messages: Vec<TextEvent>,
    pub events: Vec<GameEvent>,
}

/// Player status bar data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub hp: u32,
    pub max_hp: u32,
    pub level: u32,
    pub exp: u32,
    pub max_exp: u32,
}

/// Ammo display. `-1` in both counts means unlimited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmmoView {
    pub current: i32,
    pub max: i32,
    pub weapon: WeaponKind,
}

impl Default for AmmoView {
    fn default() -> Self {
        Self {
            current: -1,
            max: -1,
            weapon: WeaponKind::default(),
        }
    }
}

/// An enemy as drawn on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub archetype: EnemyArchetype,
    pub state: EnemyState,
    pub position: Vec2,
    pub hp: u32,
    pub max_hp: u32,
}

/// A projectile as drawn on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub direction: Vec2,
    pub owner: ProjectileOwner,
    pub behavior: ProjectileBehavior,
}
