//! Cleanup system: purges spent projectiles and dead enemies.

use glam::Vec2;
use hecs::{Entity, World};

use lighthouse_core::components::{Enemy, EnemyBrain, Health, Projectile};
use lighthouse_core::constants::{EXP_MAX_HP_DIVISOR, PROJECTILE_CLEANUP_DISTANCE};
use lighthouse_core::enums::{EnemyArchetype, EnemyState};
use lighthouse_core::types::Position;

/// An enemy removed this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kill {
    pub archetype: EnemyArchetype,
    pub position: Vec2,
    pub exp_reward: u32,
}

/// Remove projectiles that are spent or strayed too far from the player.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn purge_projectiles(
    world: &mut World,
    player_position: Option<Vec2>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (pos, proj)) in world.query_mut::<(&Position, &Projectile)>() {
        let stray = player_position
            .is_some_and(|player| pos.0.distance(player) > PROJECTILE_CLEANUP_DISTANCE);
        if proj.spent || stray {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Remove dead enemies and report what they were worth.
pub fn purge_dead_enemies(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> Vec<Kill> {
    despawn_buffer.clear();
    let mut kills = Vec::new();

    for (entity, (enemy, brain, health, pos)) in
        world.query_mut::<(&Enemy, &EnemyBrain, &Health, &Position)>()
    {
        if brain.state == EnemyState::Dead {
            kills.push(Kill {
                archetype: enemy.archetype,
                position: pos.0,
                exp_reward: health.max / EXP_MAX_HP_DIVISOR,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    kills
}
