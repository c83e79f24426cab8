//! Archetype stat table.
//!
//! Base stats per archetype plus the level scaling applied once at spawn.

use lighthouse_core::enums::{AttackStyle, EnemyArchetype};

/// Base stats for an enemy archetype at level 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeProfile {
    pub base_hp: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    /// Units per second. Not scaled by level.
    pub move_speed: f32,
    pub detection_range: f32,
    pub attack_range: f32,
    pub attack_style: AttackStyle,
}

/// Stats of a spawned enemy after level scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledStats {
    pub max_hp: u32,
    pub attack_power: u32,
    pub defense: u32,
    pub move_speed: f32,
    pub detection_range: f32,
    pub attack_range: f32,
    pub attack_style: AttackStyle,
}

/// Get the base profile for an archetype.
pub fn get_profile(archetype: EnemyArchetype) -> ArchetypeProfile {
    match archetype {
        EnemyArchetype::Slime => ArchetypeProfile {
            base_hp: 30,
            base_attack: 8,
            base_defense: 2,
            move_speed: 50.0,
            detection_range: 80.0,
            attack_range: 35.0,
            attack_style: AttackStyle::Melee,
        },
        EnemyArchetype::Skeleton => ArchetypeProfile {
            base_hp: 60,
            base_attack: 15,
            base_defense: 8,
            move_speed: 80.0,
            detection_range: 100.0,
            attack_range: 40.0,
            attack_style: AttackStyle::Melee,
        },
        EnemyArchetype::Mage => ArchetypeProfile {
            base_hp: 40,
            base_attack: 20,
            base_defense: 3,
            move_speed: 60.0,
            detection_range: 120.0,
            attack_range: 150.0,
            attack_style: AttackStyle::Ranged,
        },
        EnemyArchetype::Dragon => ArchetypeProfile {
            base_hp: 120,
            base_attack: 25,
            base_defense: 15,
            move_speed: 40.0,
            detection_range: 90.0,
            attack_range: 60.0,
            attack_style: AttackStyle::Melee,
        },
        EnemyArchetype::Assassin => ArchetypeProfile {
            base_hp: 50,
            base_attack: 18,
            base_defense: 5,
            move_speed: 120.0,
            detection_range: 150.0,
            attack_range: 45.0,
            attack_style: AttackStyle::Melee,
        },
    }
}

/// Level multiplier `1 + 0.2 * (level - 1)`. Levels below 1 count as 1.
pub fn level_multiplier(level: u32) -> f64 {
    1.0 + lighthouse_core::constants::ENEMY_LEVEL_STEP * level.saturating_sub(1) as f64
}

/// Scale `base` by the level multiplier, truncating.
///
/// `1 + 0.2 * (level - 1)` is `(level + 4) / 5`, which keeps the
/// truncation exact in integer arithmetic.
fn scale(base: u32, level: u32) -> u32 {
    let level = u64::from(level.max(1));
    let scaled = u64::from(base) * (level + 4) / 5;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Stats for an archetype spawned at `level`. HP, attack and defense scale;
/// speed and ranges do not.
pub fn scaled_stats(archetype: EnemyArchetype, level: u32) -> ScaledStats {
    let profile = get_profile(archetype);
    ScaledStats {
        max_hp: scale(profile.base_hp, level),
        attack_power: scale(profile.base_attack, level),
        defense: scale(profile.base_defense, level),
        move_speed: profile.move_speed,
        detection_range: profile.detection_range,
        attack_range: profile.attack_range,
        attack_style: profile.attack_style,
    }
}
