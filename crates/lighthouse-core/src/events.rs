//! Events emitted by the simulation for rendering and UI feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Gameplay events produced during a tick, drained into the frame snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Damage landed on an entity (for floating damage numbers).
    DamageDealt {
        position: Vec2,
        amount: u32,
        to_player: bool,
    },
    /// An enemy spotted the player. Renderer shows the "!" cue.
    EnemyAlerted { position: Vec2 },
    /// Melee lunge: animate from `from` to `to` and back.
    MeleeLunge { from: Vec2, to: Vec2 },
    /// An enemy fired at the player.
    EnemyFired { position: Vec2 },
    /// The player fired `count` projectiles.
    PlayerFired { weapon: WeaponKind, count: usize },
    /// A projectile struck a wall.
    ProjectileHitWall { position: Vec2 },
    /// An enemy died. The renderer fades it over `fade_secs`.
    EnemyKilled {
        archetype: EnemyArchetype,
        position: Vec2,
        exp_reward: u32,
        fade_secs: f64,
    },
    PlayerDied,
    LevelUp { level: u32 },
    ItemCollected { kind: ItemKind, healed: u32 },
    FloorEntered { floor: u32 },
    StairsRejected { remaining: usize },
}

/// Transient on-screen message with its display duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEvent {
    pub text: String,
    pub duration_secs: f64,
}

impl TextEvent {
    pub fn new(text: impl Into<String>, duration_secs: f64) -> Self {
        Self {
            text: text.into(),
            duration_secs,
        }
    }
}
