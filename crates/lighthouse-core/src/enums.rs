//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Fixed enemy type with its own stat table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    Slime,
    Skeleton,
    Mage,
    Dragon,
    Assassin,
}

impl EnemyArchetype {
    pub const ALL: [EnemyArchetype; 5] = [
        EnemyArchetype::Slime,
        EnemyArchetype::Skeleton,
        EnemyArchetype::Mage,
        EnemyArchetype::Dragon,
        EnemyArchetype::Assassin,
    ];
}

/// Enemy behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    #[default]
    Patrol,
    /// Searching the last known player position.
    Alert,
    Chase,
    Attack,
    /// Terminal. Reached from any state when HP hits zero.
    Dead,
}

/// How an archetype delivers its attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackStyle {
    /// Lunge at the player and deal damage directly.
    Melee,
    /// Fire an enemy-owned projectile at the player.
    Ranged,
}

/// Player weapon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Pistol,
    Rifle,
    Shotgun,
    Sniper,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 4] = [
        WeaponKind::Pistol,
        WeaponKind::Rifle,
        WeaponKind::Shotgun,
        WeaponKind::Sniper,
    ];
}

/// Which side fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

/// Hit response of a projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileBehavior {
    /// Destroyed on its first damaging contact.
    #[default]
    Standard,
    /// One pellet of a spread shot. Hits like `Standard`.
    SpreadMember,
    /// Keeps flying after a hit with decayed damage.
    Piercing,
}

/// Room quadrant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// Top-left.
    Living,
    /// Top-right.
    Bedroom,
    /// Bottom-left.
    Kitchen,
    /// Bottom-right.
    Storage,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Living,
        RoomType::Bedroom,
        RoomType::Kitchen,
        RoomType::Storage,
    ];
}

/// Static blocker kinds placed by the level generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    OuterWall,
    RoomWall,
    Sofa,
    Table,
    Bed,
    Desk,
    Counter,
    Stove,
    Crate,
}

/// Pickup kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    HealthPotion,
}

/// Top-level encounter phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterPhase {
    #[default]
    Active,
    Paused,
    /// The player died. Ticks no longer advance the simulation.
    Defeated,
}
