//! Entity spawn factories.
//!
//! Creates the player, the static geometry of a generated floor, enemies and
//! projectiles with the right component bundles.

use glam::Vec2;
use hecs::{Entity, World};

use lighthouse_core::collision::{profile_for, BodyKind};
use lighthouse_core::components::*;
use lighthouse_core::constants::*;
use lighthouse_core::enums::{ProjectileOwner, WeaponKind};
use lighthouse_core::types::{Position, Velocity};

use lighthouse_enemy_ai::fsm;
use lighthouse_enemy_ai::profiles::scaled_stats;
use lighthouse_procgen::layout::{EnemySpawn, FloorLayout};

use crate::projectile::ProjectileSpawn;
use crate::weapons::weapon_stats;

/// Spawn the player with base stats and the default weapon.
pub fn spawn_player(world: &mut World, position: Vec2) -> Entity {
    let weapon = WeaponKind::default();
    world.spawn((
        Player,
        Position(position),
        Velocity::default(),
        Health {
            current: PLAYER_MAX_HP,
            max: PLAYER_MAX_HP,
        },
        CombatStats {
            attack_power: PLAYER_ATTACK_POWER,
            defense: PLAYER_DEFENSE,
            move_speed: PLAYER_MOVE_SPEED,
        },
        PlayerLoadout {
            weapon,
            fire_interval_secs: weapon_stats(weapon).fire_interval_secs,
            last_fire_secs: None,
            move_direction: Vec2::ZERO,
        },
        Progression {
            level: 1,
            exp: 0,
            max_exp: INITIAL_MAX_EXP,
        },
        Collider {
            half_extents: PLAYER_SIZE * 0.5,
            profile: profile_for(BodyKind::Player),
        },
    ))
}

/// Spawn everything a floor layout describes except the player.
pub fn spawn_floor(world: &mut World, layout: &FloorLayout) {
    for obstacle in &layout.obstacles {
        world.spawn((
            Obstacle {
                kind: obstacle.kind,
            },
            Position(obstacle.rect.center),
            Collider {
                half_extents: obstacle.rect.half_extents,
                profile: profile_for(BodyKind::Wall),
            },
        ));
    }

    world.spawn((
        StairsTrigger,
        Position(layout.stairs.center),
        Collider {
            half_extents: layout.stairs.half_extents,
            profile: profile_for(BodyKind::StairsTrigger),
        },
    ));

    for item in &layout.items {
        world.spawn((
            ItemPickup { kind: item.kind },
            Position(item.position),
            Collider {
                half_extents: ITEM_SIZE * 0.5,
                profile: profile_for(BodyKind::ItemPickup),
            },
        ));
    }

    for spawn in &layout.enemies {
        spawn_enemy(world, spawn);
    }
}

/// Spawn one enemy with level-scaled stats and a fresh brain.
pub fn spawn_enemy(world: &mut World, spawn: &EnemySpawn) -> Entity {
    let stats = scaled_stats(spawn.archetype, spawn.level);
    world.spawn((
        Enemy {
            archetype: spawn.archetype,
            level: spawn.level,
            attack_style: stats.attack_style,
            slot: spawn.slot,
        },
        Position(spawn.position),
        Velocity::default(),
        Health {
            current: stats.max_hp,
            max: stats.max_hp,
        },
        CombatStats {
            attack_power: stats.attack_power,
            defense: stats.defense,
            move_speed: stats.move_speed,
        },
        fsm::new_brain(&stats),
        Collider {
            half_extents: ENEMY_SIZE * 0.5,
            profile: profile_for(BodyKind::Enemy),
        },
    ))
}

pub fn spawn_projectile(world: &mut World, spawn: ProjectileSpawn) -> Entity {
    let kind = match spawn.projectile.owner {
        ProjectileOwner::Player => BodyKind::PlayerProjectile,
        ProjectileOwner::Enemy => BodyKind::EnemyProjectile,
    };
    world.spawn((
        Position(spawn.position),
        Collider {
            half_extents: spawn.half_extents,
            profile: profile_for(kind),
        },
        spawn.projectile,
    ))
}
