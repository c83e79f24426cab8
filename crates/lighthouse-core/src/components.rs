//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems and in the AI crate, not in components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::collision::CollisionProfile;
use crate::enums::*;

/// Hit points. `current` stays within `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

/// Offensive and defensive stats shared by players and enemies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatStats {
    pub attack_power: u32,
    pub defense: u32,
    /// Movement speed (units/s).
    pub move_speed: f32,
}

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Player weapon and input state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerLoadout {
    pub weapon: WeaponKind,
    /// Minimum seconds between shots for the current weapon.
    pub fire_interval_secs: f64,
    /// Elapsed time of the last shot, `None` before the first.
    pub last_fire_secs: Option<f64>,
    /// Movement input (length 0 or 1).
    pub move_direction: Vec2,
}

/// Experience and level. Survives floor transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub level: u32,
    pub exp: u32,
    /// Experience needed for the next level.
    pub max_exp: u32,
}

/// Identity of an enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub archetype: EnemyArchetype,
    pub level: u32,
    pub attack_style: AttackStyle,
    /// Index of the spawn slot on the floor.
    pub slot: usize,
}

/// Ping-pong patrol path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatrolRoute {
    pub waypoints: Vec<Vec2>,
    pub index: usize,
    /// +1 walking forward, -1 walking back.
    pub direction: i32,
}

/// Enemy decision state consumed by the enemy AI state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyBrain {
    pub state: EnemyState,
    pub detection_range: f32,
    pub attack_range: f32,
    /// Full vision cone angle (radians).
    pub vision_angle: f32,
    pub last_known_player: Option<Vec2>,
    /// Seconds spent in the current alert search.
    pub alert_timer_secs: f64,
    pub patrol: PatrolRoute,
    pub attack_cooldown_secs: f64,
    /// Elapsed time of the last attack, `None` before the first.
    pub last_attack_secs: Option<f64>,
    /// Current movement target. Persists until reached or replaced.
    pub move_target: Option<Vec2>,
    pub moving: bool,
}

/// A flying projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub origin: Vec2,
    /// Unit vector (or zero for a degenerate aim).
    pub direction: Vec2,
    pub speed: f32,
    pub damage: u32,
    pub max_range: f32,
    /// Distance flown so far. Never decreases.
    pub traveled: f32,
    pub owner: ProjectileOwner,
    pub behavior: ProjectileBehavior,
    pub weapon: WeaponKind,
    /// Set once the projectile should be purged at end of tick.
    pub spent: bool,
}

/// Shape and category published to the collision engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub half_extents: Vec2,
    pub profile: CollisionProfile,
}

/// Static blocker (wall or furniture).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
}

/// The floor's stairs zone. Contact-only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StairsTrigger;

/// A pickup lying on the floor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ItemPickup {
    pub kind: ItemKind,
}
