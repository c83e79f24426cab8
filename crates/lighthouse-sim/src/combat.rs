//! Combat resolver: damage after defense, death transitions, healing.

use hecs::{Entity, World};

use lighthouse_core::collision::{CollisionCategory, CollisionProfile};
use lighthouse_core::components::{Collider, CombatStats, EnemyBrain, Health, Player};
use lighthouse_core::constants::{DAMAGE_TEXT_SECS, MIN_DAMAGE};
use lighthouse_core::events::GameEvent;
use lighthouse_core::types::{Position, Velocity};

use lighthouse_enemy_ai::fsm;

use crate::feedback::Feedback;

/// Damage left after defense. Never below `MIN_DAMAGE`.
pub fn damage_after_defense(raw: u32, defense: u32) -> u32 {
    raw.saturating_sub(defense).max(MIN_DAMAGE)
}

/// Apply `raw` damage to `health`. Returns the damage actually dealt, or 0
/// when the target was already dead.
pub fn apply_damage(health: &mut Health, defense: u32, raw: u32) -> u32 {
    if health.current == 0 {
        return 0;
    }
    let actual = damage_after_defense(raw, defense);
    health.current = health.current.saturating_sub(actual);
    actual
}

/// Restore up to `amount` HP, capped at max. Dead targets stay dead.
/// Returns the HP actually restored.
pub fn heal(health: &mut Health, amount: u32) -> u32 {
    if health.current == 0 {
        return 0;
    }
    let before = health.current;
    health.current = health.current.saturating_add(amount).min(health.max);
    health.current - before
}

/// Result of damaging an entity in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageOutcome {
    pub actual: u32,
    /// This hit took the target to zero HP.
    pub killed: bool,
}

/// Damage an entity and run its death transition if HP reaches zero.
///
/// Enemies drop out of collision and switch to the dead state; they are
/// purged at the end of the tick. A dying player emits `PlayerDied`; the
/// engine moves the encounter to `Defeated`. Surviving enemies aggro.
pub fn damage_entity(world: &mut World, entity: Entity, raw: u32, feedback: &mut Feedback) -> DamageOutcome {
    let defense = world
        .get::<&CombatStats>(entity)
        .map(|stats| stats.defense)
        .unwrap_or(0);

    let (actual, killed) = match world.get::<&mut Health>(entity) {
        Ok(mut health) => {
            let actual = apply_damage(&mut health, defense, raw);
            (actual, actual > 0 && health.current == 0)
        }
        Err(_) => return DamageOutcome { actual: 0, killed: false },
    };
    if actual == 0 {
        return DamageOutcome { actual, killed };
    }

    let is_player = world.get::<&Player>(entity).is_ok();
    let position = world.get::<&Position>(entity).map(|p| p.0).unwrap_or_default();
    feedback.event(GameEvent::DamageDealt {
        position,
        amount: actual,
        to_player: is_player,
    });
    feedback.message(format!("-{actual}"), DAMAGE_TEXT_SECS);

    if let Ok(mut brain) = world.get::<&mut EnemyBrain>(entity) {
        if killed {
            fsm::kill(&mut brain);
        } else {
            fsm::on_damaged(&mut brain);
        }
    }

    if killed {
        if is_player {
            feedback.event(GameEvent::PlayerDied);
        } else {
            if let Ok(mut collider) = world.get::<&mut Collider>(entity) {
                collider.profile = CollisionProfile {
                    category: CollisionCategory::None,
                    contact_test_mask: 0,
                    collision_mask: 0,
                };
            }
            if let Ok(mut velocity) = world.get::<&mut Velocity>(entity) {
                velocity.0 = glam::Vec2::ZERO;
            }
        }
    }

    DamageOutcome { actual, killed }
}

/// Heal an entity in the world. Returns the HP restored.
pub fn heal_entity(world: &mut World, entity: Entity, amount: u32) -> u32 {
    match world.get::<&mut Health>(entity) {
        Ok(mut health) => heal(&mut health, amount),
        Err(_) => 0,
    }
}
