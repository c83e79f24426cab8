//! Snapshot system: queries the ECS world and builds a `FrameSnapshot`.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use lighthouse_core::components::*;
use lighthouse_core::enums::{EncounterPhase, EnemyState};
use lighthouse_core::events::{GameEvent, TextEvent};
use lighthouse_core::state::*;
use lighthouse_core::types::{Position, SimTime};

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: EncounterPhase,
    floor: u32,
    events: Vec<GameEvent>,
    messages: Vec<TextEvent>,
) -> FrameSnapshot {
    let enemies = build_enemies(world);
    let enemies_remaining = enemies
        .iter()
        .filter(|e| e.state != EnemyState::Dead)
        .count();

    FrameSnapshot {
        time: *time,
        phase,
        floor,
        player: build_player(world),
        ammo: build_ammo(world),
        enemies,
        projectiles: build_projectiles(world),
        enemies_remaining,
        messages,
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position, &Health, &Progression)>()
        .iter()
        .next()
        .map(|(_, (_, pos, health, progression))| PlayerView {
            position: pos.0,
            hp: health.current,
            max_hp: health.max,
            level: progression.level,
            exp: progression.exp,
            max_exp: progression.max_exp,
        })
        .unwrap_or_default()
}

/// Ammo is unlimited; only the weapon varies.
fn build_ammo(world: &World) -> AmmoView {
    world
        .query::<(&Player, &PlayerLoadout)>()
        .iter()
        .next()
        .map(|(_, (_, loadout))| AmmoView {
            weapon: loadout.weapon,
            ..AmmoView::default()
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &EnemyBrain, &Position, &Health)>()
        .iter()
        .map(|(_, (enemy, brain, pos, health))| EnemyView {
            archetype: enemy.archetype,
            state: brain.state,
            position: pos.0,
            hp: health.current,
            max_hp: health.max,
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (proj, pos))| ProjectileView {
            position: pos.0,
            direction: proj.direction,
            owner: proj.owner,
            behavior: proj.behavior,
        })
        .collect()
}
