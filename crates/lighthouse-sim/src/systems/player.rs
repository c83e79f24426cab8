//! Player system: movement intent and firing.

use glam::Vec2;
use hecs::{Entity, World};

use lighthouse_core::components::{CombatStats, Health, Player, PlayerLoadout};
use lighthouse_core::constants::{AUTO_FIRE_INTERVAL_SECS, PLAYER_ATTACK_POWER};
use lighthouse_core::enums::{ProjectileOwner, WeaponKind};
use lighthouse_core::events::GameEvent;
use lighthouse_core::types::{Position, Velocity};

use crate::feedback::Feedback;
use crate::projectile::{spawn_shot, ShotParams};
use crate::weapons::weapon_stats;
use crate::world_setup;

/// Held fire: pulse a shot at `target` every auto-fire interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoFire {
    pub target: Vec2,
    /// Scheduled on the first tick after auto-fire starts.
    pub next_pulse_secs: Option<f64>,
}

impl AutoFire {
    pub fn new(target: Vec2) -> Self {
        Self {
            target,
            next_pulse_secs: None,
        }
    }
}

/// Fire input accumulated from commands, consumed by [`run`].
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// One-off shot requested since the last tick.
    pub pending_shot: Option<Vec2>,
    pub auto_fire: Option<AutoFire>,
}

/// Position of the player entity, if it exists.
pub fn player_position(world: &World) -> Option<Vec2> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| pos.0)
}

pub fn run(world: &mut World, input: &mut PlayerInput, elapsed_secs: f64, feedback: &mut Feedback) {
    for (_entity, (_player, loadout, stats, health, vel)) in
        world.query_mut::<(&Player, &PlayerLoadout, &CombatStats, &Health, &mut Velocity)>()
    {
        vel.0 = if health.current > 0 {
            loadout.move_direction * stats.move_speed
        } else {
            Vec2::ZERO
        };
    }

    let mut targets = Vec::with_capacity(2);
    if let Some(target) = input.pending_shot.take() {
        targets.push(target);
    }
    if let Some(auto) = input.auto_fire.as_mut() {
        match auto.next_pulse_secs {
            None => auto.next_pulse_secs = Some(elapsed_secs + AUTO_FIRE_INTERVAL_SECS),
            Some(next) if elapsed_secs >= next => {
                targets.push(auto.target);
                // Don't burst to catch up after a long frame
                let next = next + AUTO_FIRE_INTERVAL_SECS;
                auto.next_pulse_secs = Some(if next <= elapsed_secs {
                    elapsed_secs + AUTO_FIRE_INTERVAL_SECS
                } else {
                    next
                });
            }
            Some(_) => {}
        }
    }

    for target in targets {
        fire(world, target, elapsed_secs, feedback);
    }
}

/// Fire the current weapon at `target` if it is off cooldown.
/// Returns the number of projectiles spawned.
pub fn fire(world: &mut World, target: Vec2, elapsed_secs: f64, feedback: &mut Feedback) -> usize {
    let mut spawns = Vec::new();
    let mut fired_weapon = None;

    for (_entity, (_player, pos, loadout, stats, health)) in world
        .query_mut::<(&Player, &Position, &mut PlayerLoadout, &CombatStats, &Health)>()
    {
        if health.current == 0 {
            continue;
        }
        if let Some(last) = loadout.last_fire_secs {
            if elapsed_secs - last < loadout.fire_interval_secs {
                continue;
            }
        }
        loadout.last_fire_secs = Some(elapsed_secs);

        let weapon = weapon_stats(loadout.weapon);
        // Damage and range come from the weapon table, not the player's
        // base attack power and range; level-up attack bonuses ride on top
        let damage = weapon.damage + stats.attack_power.saturating_sub(PLAYER_ATTACK_POWER);
        let shot = ShotParams {
            origin: pos.0,
            target,
            damage,
            range: weapon.range,
            owner: ProjectileOwner::Player,
            weapon: loadout.weapon,
        };
        spawns.extend(spawn_shot(weapon.behavior, &shot));
        fired_weapon = Some(loadout.weapon);
    }

    let count = spawns.len();
    for spawn in spawns {
        world_setup::spawn_projectile(world, spawn);
    }
    if let Some(weapon) = fired_weapon {
        feedback.event(GameEvent::PlayerFired { weapon, count });
    }
    count
}

/// Set the movement input. Vectors longer than 1 are normalized; garbage
/// input stops the player.
pub fn set_move_direction(world: &mut World, player: Entity, direction: Vec2) {
    let direction = if !direction.is_finite() {
        Vec2::ZERO
    } else if direction.length_squared() > 1.0 {
        direction.normalize_or_zero()
    } else {
        direction
    };
    if let Ok(mut loadout) = world.get::<&mut PlayerLoadout>(player) {
        loadout.move_direction = direction;
    }
}

/// Equip `weapon`. The fire cooldown carries over.
pub fn switch_weapon(world: &mut World, player: Entity, weapon: WeaponKind) {
    if let Ok(mut loadout) = world.get::<&mut PlayerLoadout>(player) {
        loadout.weapon = weapon;
        loadout.fire_interval_secs = weapon_stats(weapon).fire_interval_secs;
    }
}
