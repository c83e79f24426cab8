//! Tests for the encounter engine, combat resolver, projectile model and floor flow.

use std::time::{Duration, Instant};

use glam::Vec2;
use hecs::Entity;
use proptest::prelude::*;

use lighthouse_core::collision::CollisionCategory;
use lighthouse_core::commands::PlayerCommand;
use lighthouse_core::components::*;
use lighthouse_core::enums::*;
use lighthouse_core::events::GameEvent;
use lighthouse_core::types::Position;

use lighthouse_procgen::layout::EnemySpawn;

use crate::backend::{ColliderView, CollisionBackend, ContactPair, NoContacts};
use crate::clock::FrameClock;
use crate::combat::{apply_damage, damage_after_defense, heal};
use crate::config::SimConfig;
use crate::engine::{EncounterEngine, StairsOutcome};
use crate::error::ConfigError;
use crate::projectile::{self, spawn_shot, HitOutcome, ShotParams};
use crate::systems::progression::add_exp;
use crate::world_setup;

const DT: f64 = 1.0 / 60.0;

/// Backend that reports a fixed batch once, then nothing.
struct Scripted(Vec<ContactPair>);

impl CollisionBackend for Scripted {
    fn detect(&mut self, _colliders: &[ColliderView]) -> Vec<ContactPair> {
        std::mem::take(&mut self.0)
    }
}

fn contact(a: Entity, b: Entity) -> Scripted {
    Scripted(vec![ContactPair { a, b }])
}

fn new_engine() -> EncounterEngine {
    EncounterEngine::new(SimConfig::default())
}

fn first<T: hecs::Component>(engine: &EncounterEngine) -> Entity {
    engine
        .world()
        .query::<&T>()
        .iter()
        .next()
        .map(|(entity, _)| entity)
        .expect("no entity with component")
}

fn all<T: hecs::Component>(engine: &EncounterEngine) -> Vec<Entity> {
    engine
        .world()
        .query::<&T>()
        .iter()
        .map(|(entity, _)| entity)
        .collect()
}

fn despawn_enemies(engine: &mut EncounterEngine) {
    for enemy in all::<Enemy>(engine) {
        engine.world_mut().despawn(enemy).unwrap();
    }
}

fn pistol_shot(origin: Vec2, target: Vec2) -> ShotParams {
    ShotParams {
        origin,
        target,
        damage: 15,
        range: 200.0,
        owner: ProjectileOwner::Player,
        weapon: WeaponKind::Pistol,
    }
}

// ---- Combat resolver ----

#[test]
fn test_damage_after_defense() {
    assert_eq!(damage_after_defense(15, 2), 13);
    assert_eq!(damage_after_defense(5, 5), 1);
    assert_eq!(damage_after_defense(3, 40), 1);
}

#[test]
fn test_apply_damage_saturates_and_dead_ignores() {
    let mut health = Health { current: 10, max: 30 };
    assert_eq!(apply_damage(&mut health, 0, 25), 25);
    assert_eq!(health.current, 0);
    // Already dead: no further damage is reported
    assert_eq!(apply_damage(&mut health, 0, 25), 0);
}

#[test]
fn test_heal_caps_at_max_and_skips_dead() {
    let mut health = Health { current: 90, max: 100 };
    assert_eq!(heal(&mut health, 30), 10);
    assert_eq!(health.current, 100);

    let mut dead = Health { current: 0, max: 100 };
    assert_eq!(heal(&mut dead, 30), 0);
    assert_eq!(dead.current, 0);
}

proptest! {
    #[test]
    fn prop_damage_never_below_one(raw in 0u32..10_000, defense in 0u32..10_000) {
        let actual = damage_after_defense(raw, defense);
        prop_assert_eq!(actual, raw.saturating_sub(defense).max(1));
        if defense >= raw {
            prop_assert_eq!(actual, 1);
        }
    }

    #[test]
    fn prop_health_stays_in_range(
        max in 1u32..1_000,
        hits in proptest::collection::vec((0u32..500, 0u32..50), 0..20),
    ) {
        let mut health = Health { current: max, max };
        let mut previous = health.current;
        for (raw, defense) in hits {
            apply_damage(&mut health, defense, raw);
            prop_assert!(health.current <= previous);
            prop_assert!(health.current <= health.max);
            previous = health.current;
        }
    }
}

// ---- Projectile model ----

#[test]
fn test_shotgun_fires_five_pellets() {
    let shot = ShotParams {
        damage: 25,
        range: 120.0,
        weapon: WeaponKind::Shotgun,
        ..pistol_shot(Vec2::ZERO, Vec2::new(100.0, 0.0))
    };
    let pellets = spawn_shot(ProjectileBehavior::SpreadMember, &shot);
    assert_eq!(pellets.len(), 5);
    for pellet in &pellets {
        assert_eq!(pellet.projectile.damage, 12);
        assert!((pellet.projectile.max_range - 96.0).abs() < 1e-4);
        assert!((pellet.projectile.direction.length() - 1.0).abs() < 1e-5);
    }
    // Centre pellet follows the aim, the outer two span the full fan
    assert!((pellets[2].projectile.direction - Vec2::X).length() < 1e-5);
    let fan = pellets[0]
        .projectile
        .direction
        .angle_to(pellets[4].projectile.direction)
        .abs();
    assert!((fan - 0.3).abs() < 1e-4);
}

#[test]
fn test_piercing_decays_then_breaks() {
    let shot = ShotParams {
        damage: 40,
        range: 400.0,
        weapon: WeaponKind::Sniper,
        ..pistol_shot(Vec2::ZERO, Vec2::new(0.0, 100.0))
    };
    let mut spawns = spawn_shot(ProjectileBehavior::Piercing, &shot);
    assert_eq!(spawns.len(), 1);
    assert_eq!(spawns[0].half_extents, Vec2::new(3.0, 6.0));

    let proj = &mut spawns[0].projectile;
    assert_eq!(proj.speed, 600.0);
    let mut seen = Vec::new();
    for _ in 0..5 {
        match projectile::on_hit_target(proj) {
            HitOutcome::Continues { damage } => seen.push(damage),
            HitOutcome::Destroyed => panic!("destroyed too early"),
        }
    }
    assert_eq!(seen, vec![28, 19, 13, 9, 6]);
    assert_eq!(projectile::on_hit_target(proj), HitOutcome::Destroyed);
    assert!(proj.spent);
}

#[test]
fn test_standard_destroyed_on_first_hit_and_by_walls() {
    let mut spawns = spawn_shot(
        ProjectileBehavior::Standard,
        &pistol_shot(Vec2::ZERO, Vec2::X),
    );
    let proj = &mut spawns[0].projectile;
    assert_eq!(projectile::on_hit_target(proj), HitOutcome::Destroyed);

    let mut spawns = spawn_shot(
        ProjectileBehavior::Piercing,
        &pistol_shot(Vec2::ZERO, Vec2::X),
    );
    let proj = &mut spawns[0].projectile;
    projectile::on_hit_wall(proj);
    assert!(proj.spent);
}

#[test]
fn test_projectile_expires_at_range() {
    let mut spawns = spawn_shot(
        ProjectileBehavior::Standard,
        &pistol_shot(Vec2::ZERO, Vec2::new(0.0, 50.0)),
    );
    let proj = &mut spawns[0].projectile;

    let step = projectile::advance(proj, 0.25);
    assert_eq!(step, Vec2::new(0.0, 100.0));
    assert!(!proj.spent);
    projectile::advance(proj, 0.25);
    assert_eq!(proj.traveled, 200.0);
    assert!(proj.spent);
}

#[test]
fn test_zero_aim_does_not_produce_nan() {
    let spawns = spawn_shot(
        ProjectileBehavior::SpreadMember,
        &pistol_shot(Vec2::ONE, Vec2::ONE),
    );
    assert!(spawns.iter().all(|s| s.projectile.direction == Vec2::ZERO));
}

// ---- Player firing ----

#[test]
fn test_fire_spawns_projectile_and_respects_cooldown() {
    let mut engine = new_engine();
    engine.queue_command(PlayerCommand::FireAt { x: 0.0, y: 0.0 });
    let snap = engine.tick(DT, &mut NoContacts);
    assert_eq!(snap.projectiles.len(), 1);
    assert_eq!(snap.projectiles[0].owner, ProjectileOwner::Player);
    assert!(snap.events.contains(&GameEvent::PlayerFired {
        weapon: WeaponKind::Pistol,
        count: 1
    }));

    // Pistol interval is 0.3 s
    engine.queue_command(PlayerCommand::FireAt { x: 0.0, y: 0.0 });
    let snap = engine.tick(DT, &mut NoContacts);
    assert_eq!(snap.projectiles.len(), 1);
}

#[test]
fn test_shotgun_through_engine() {
    let mut engine = new_engine();
    engine.queue_commands([
        PlayerCommand::SwitchWeapon {
            weapon: WeaponKind::Shotgun,
        },
        PlayerCommand::FireAt { x: 0.0, y: 0.0 },
    ]);
    let snap = engine.tick(DT, &mut NoContacts);
    assert_eq!(snap.ammo.weapon, WeaponKind::Shotgun);
    assert_eq!(snap.ammo.current, -1);
    assert_eq!(snap.projectiles.len(), 5);
    assert!(snap
        .projectiles
        .iter()
        .all(|p| p.behavior == ProjectileBehavior::SpreadMember));
}

#[test]
fn test_auto_fire_pulses_until_stopped() {
    let mut engine = new_engine();
    engine.queue_commands([
        PlayerCommand::SwitchWeapon {
            weapon: WeaponKind::Rifle,
        },
        PlayerCommand::StartAutoFire { x: 0.0, y: 0.0 },
    ]);

    let fired = |snap: &lighthouse_core::state::FrameSnapshot| {
        snap.events
            .iter()
            .any(|e| matches!(e, GameEvent::PlayerFired { .. }))
    };

    // Immediate shot, then pulses every 0.3 s
    assert!(fired(&engine.tick(0.25, &mut NoContacts)));
    assert!(!fired(&engine.tick(0.25, &mut NoContacts)));
    assert!(fired(&engine.tick(0.25, &mut NoContacts)));
    assert!(fired(&engine.tick(0.25, &mut NoContacts)));

    engine.queue_command(PlayerCommand::StopAutoFire);
    for _ in 0..4 {
        assert!(!fired(&engine.tick(0.25, &mut NoContacts)));
    }
}

#[test]
fn test_move_direction_is_normalized() {
    let mut engine = new_engine();
    let start = engine.world().get::<&Position>(engine.player()).unwrap().0;
    engine.queue_command(PlayerCommand::SetMoveDirection { x: 3.0, y: 4.0 });
    engine.tick(0.1, &mut NoContacts);

    let end = engine.world().get::<&Position>(engine.player()).unwrap().0;
    // 150 units/s for 0.1 s along (0.6, 0.8)
    assert!((end - start - Vec2::new(9.0, 12.0)).length() < 1e-3);
}

// ---- Contact dispatch ----

#[test]
fn test_player_bullet_damages_enemy_and_aggros() {
    let mut engine = new_engine();
    engine.queue_command(PlayerCommand::FireAt { x: 0.0, y: 0.0 });
    engine.tick(DT, &mut NoContacts);

    let bullet = first::<Projectile>(&engine);
    let enemy = all::<Enemy>(&engine)[0];
    let snap = engine.tick(DT, &mut contact(bullet, enemy));

    // Slime: 30 HP, 2 defense; pistol deals 15
    let health = *engine.world().get::<&Health>(enemy).unwrap();
    assert_eq!(health.current, 17);
    assert_eq!(
        engine.world().get::<&EnemyBrain>(enemy).unwrap().state,
        EnemyState::Chase
    );
    assert!(snap.projectiles.is_empty(), "standard bullet should be purged");
    assert!(snap.events.contains(&GameEvent::DamageDealt {
        position: engine.world().get::<&Position>(enemy).unwrap().0,
        amount: 13,
        to_player: false,
    }));
    assert!(snap.messages.iter().any(|m| m.text == "-13"));
}

#[test]
fn test_kill_grants_exp_and_purges_enemy() {
    let mut engine = new_engine();
    engine.queue_command(PlayerCommand::FireAt { x: 0.0, y: 0.0 });
    engine.tick(DT, &mut NoContacts);

    let bullet = first::<Projectile>(&engine);
    let enemy = all::<Enemy>(&engine)[0];
    engine.world_mut().get::<&mut Health>(enemy).unwrap().current = 1;

    let snap = engine.tick(DT, &mut contact(bullet, enemy));
    assert!(!engine.world().contains(enemy));
    assert_eq!(snap.enemies_remaining, 4);
    assert_eq!(snap.player.exp, 6);
    assert!(snap.events.iter().any(|e| matches!(
        e,
        GameEvent::EnemyKilled {
            archetype: EnemyArchetype::Slime,
            exp_reward: 6,
            ..
        }
    )));
}

#[test]
fn test_dead_enemy_drops_out_of_collision() {
    let mut engine = new_engine();
    engine.queue_command(PlayerCommand::FireAt { x: 0.0, y: 0.0 });
    engine.tick(DT, &mut NoContacts);

    let bullet = first::<Projectile>(&engine);
    let enemy = all::<Enemy>(&engine)[0];
    engine.world_mut().get::<&mut Health>(enemy).unwrap().current = 1;

    // Inspect mid-tick state through the colliders handed to the backend
    let mut seen_enemies = usize::MAX;
    let mut pairs = vec![ContactPair { a: bullet, b: enemy }];
    let mut backend = |colliders: &[ColliderView]| {
        seen_enemies = colliders
            .iter()
            .filter(|c| c.profile.category == CollisionCategory::Enemy)
            .count();
        std::mem::take(&mut pairs)
    };
    engine.tick(DT, &mut backend);
    assert_eq!(seen_enemies, 5);

    let mut backend = |colliders: &[ColliderView]| {
        assert!(colliders.iter().all(|c| c.entity != enemy));
        Vec::<ContactPair>::new()
    };
    engine.tick(DT, &mut backend);
}

#[test]
fn test_level_up_on_threshold() {
    let mut progression = Progression {
        level: 1,
        exp: 95,
        max_exp: 100,
    };
    assert!(add_exp(&mut progression, 6));
    assert_eq!(progression, Progression { level: 2, exp: 0, max_exp: 120 });
    assert!(!add_exp(&mut progression, 119));

    let mut engine = new_engine();
    let player = engine.player();
    engine.world_mut().get::<&mut Progression>(player).unwrap().exp = 95;
    engine.world_mut().get::<&mut Health>(player).unwrap().current = 40;
    engine.queue_command(PlayerCommand::FireAt { x: 0.0, y: 0.0 });
    engine.tick(DT, &mut NoContacts);

    let bullet = first::<Projectile>(&engine);
    let enemy = all::<Enemy>(&engine)[0];
    engine.world_mut().get::<&mut Health>(enemy).unwrap().current = 1;
    let snap = engine.tick(DT, &mut contact(bullet, enemy));

    assert_eq!(snap.player.level, 2);
    assert_eq!(snap.player.exp, 0);
    assert_eq!(snap.player.max_exp, 120);
    assert_eq!(snap.player.max_hp, 110);
    assert_eq!(snap.player.hp, 110, "level up restores full HP");
    let stats = *engine.world().get::<&CombatStats>(player).unwrap();
    assert_eq!(stats.attack_power, 22);
    assert_eq!(stats.defense, 6);
    assert!(snap.events.contains(&GameEvent::LevelUp { level: 2 }));
}

#[test]
fn test_level_bonus_adds_to_shot_damage() {
    let mut engine = new_engine();
    let player = engine.player();
    engine
        .world_mut()
        .get::<&mut CombatStats>(player)
        .unwrap()
        .attack_power = 24;
    engine.queue_command(PlayerCommand::FireAt { x: 0.0, y: 0.0 });
    engine.tick(DT, &mut NoContacts);

    let bullet = first::<Projectile>(&engine);
    assert_eq!(engine.world().get::<&Projectile>(bullet).unwrap().damage, 19);
}

#[test]
fn test_enemy_bullet_hits_player() {
    let mut engine = new_engine();
    let player = engine.player();
    let origin = engine.world().get::<&Position>(player).unwrap().0;
    let shot = ShotParams {
        damage: 20,
        owner: ProjectileOwner::Enemy,
        ..pistol_shot(origin + Vec2::new(50.0, 0.0), origin)
    };
    let bullet = {
        let spawn = spawn_shot(ProjectileBehavior::Standard, &shot).remove(0);
        world_setup::spawn_projectile(engine.world_mut(), spawn)
    };

    let snap = engine.tick(DT, &mut contact(player, bullet));
    // 20 raw against 5 defense
    assert_eq!(snap.player.hp, 85);
    assert!(snap.projectiles.is_empty());
}

#[test]
fn test_piercing_shot_passes_through_enemies() {
    let mut engine = new_engine();
    engine.queue_commands([
        PlayerCommand::SwitchWeapon {
            weapon: WeaponKind::Sniper,
        },
        PlayerCommand::FireAt { x: 0.0, y: 0.0 },
    ]);
    engine.tick(DT, &mut NoContacts);

    let bullet = first::<Projectile>(&engine);
    let enemies = all::<Enemy>(&engine);
    let (first_hit, second_hit) = (enemies[0], enemies[1]);
    engine.world_mut().get::<&mut Health>(first_hit).unwrap().current = 1;

    let mut batch = Scripted(vec![
        ContactPair {
            a: bullet,
            b: first_hit,
        },
        ContactPair {
            a: second_hit,
            b: bullet,
        },
    ]);
    let snap = engine.tick(DT, &mut batch);

    // 40 kills the first, the second takes 28 raw minus 2 defense
    assert!(!engine.world().contains(first_hit));
    assert_eq!(engine.world().get::<&Health>(second_hit).unwrap().current, 4);
    assert_eq!(engine.world().get::<&Projectile>(bullet).unwrap().damage, 19);
    assert_eq!(snap.projectiles.len(), 1);
    assert_eq!(snap.enemies_remaining, 4);
}

#[test]
fn test_wall_stops_projectile() {
    let mut engine = new_engine();
    engine.queue_command(PlayerCommand::FireAt { x: 0.0, y: 0.0 });
    engine.tick(DT, &mut NoContacts);

    let bullet = first::<Projectile>(&engine);
    let wall = first::<Obstacle>(&engine);
    let snap = engine.tick(DT, &mut contact(wall, bullet));
    assert!(snap.projectiles.is_empty());
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::ProjectileHitWall { .. })));
}

#[test]
fn test_far_projectiles_are_purged() {
    let mut engine = new_engine();
    let origin = engine.world().get::<&Position>(engine.player()).unwrap().0;
    let shot = ShotParams {
        range: 5000.0,
        ..pistol_shot(origin + Vec2::new(1001.0, 0.0), origin + Vec2::new(2000.0, 0.0))
    };
    let spawn = spawn_shot(ProjectileBehavior::Standard, &shot).remove(0);
    world_setup::spawn_projectile(engine.world_mut(), spawn);

    let snap = engine.tick(DT, &mut NoContacts);
    assert!(snap.projectiles.is_empty());
}

#[test]
fn test_potion_heals_once() {
    let mut engine = new_engine();
    let player = engine.player();
    engine.world_mut().get::<&mut Health>(player).unwrap().current = 50;
    let potion = first::<ItemPickup>(&engine);

    let snap = engine.tick(DT, &mut contact(player, potion));
    assert_eq!(snap.player.hp, 80);
    assert!(snap.events.contains(&GameEvent::ItemCollected {
        kind: ItemKind::HealthPotion,
        healed: 30,
    }));
    assert!(!engine.world().contains(potion));

    // A stale contact with the collected potion does nothing
    let snap = engine.tick(DT, &mut contact(potion, player));
    assert_eq!(snap.player.hp, 80);
}

// ---- Enemy attacks ----

#[test]
fn test_melee_hits_apply_after_all_enemies_decide() {
    let mut engine = new_engine();
    let player = engine.player();
    let player_pos = engine.world().get::<&Position>(player).unwrap().0;
    engine.world_mut().get::<&mut Health>(player).unwrap().current = 2;

    // Two slimes right next to the player, already attacking
    let attackers: Vec<Entity> = all::<Enemy>(&engine).into_iter().take(2).collect();
    for &enemy in &attackers {
        let world = engine.world_mut();
        world.get::<&mut Position>(enemy).unwrap().0 = player_pos - Vec2::new(20.0, 0.0);
        world.get::<&mut EnemyBrain>(enemy).unwrap().state = EnemyState::Attack;
    }

    let snap = engine.tick(DT, &mut NoContacts);
    let lunges = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::MeleeLunge { .. }))
        .count();
    let hits = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::DamageDealt { to_player: true, .. }))
        .count();
    let deaths = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::PlayerDied))
        .count();
    assert_eq!(lunges, 2, "both enemies decided against the live player");
    assert_eq!(hits, 1, "the second hit lands on a dead player");
    assert_eq!(deaths, 1);
    assert_eq!(snap.player.hp, 0);
    assert_eq!(engine.phase(), EncounterPhase::Defeated);

    // Defeated encounters no longer advance
    let tick = engine.time().tick;
    engine.tick(DT, &mut NoContacts);
    assert_eq!(engine.time().tick, tick);
}

#[test]
fn test_mage_fires_enemy_projectile() {
    let mut engine = new_engine();
    despawn_enemies(&mut engine);
    let player_pos = engine.world().get::<&Position>(engine.player()).unwrap().0;
    let mage = world_setup::spawn_enemy(
        engine.world_mut(),
        &EnemySpawn {
            slot: 0,
            archetype: EnemyArchetype::Mage,
            level: 1,
            position: player_pos - Vec2::new(100.0, 0.0),
        },
    );
    engine.world_mut().get::<&mut EnemyBrain>(mage).unwrap().state = EnemyState::Attack;

    let snap = engine.tick(DT, &mut NoContacts);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::EnemyFired { .. })));
    assert_eq!(snap.projectiles.len(), 1);
    assert_eq!(snap.projectiles[0].owner, ProjectileOwner::Enemy);
    assert!((snap.projectiles[0].direction - Vec2::X).length() < 1e-5);

    let bullet = first::<Projectile>(&engine);
    let proj = engine.world().get::<&Projectile>(bullet).unwrap().clone();
    assert_eq!(proj.damage, 20);
    assert_eq!(proj.max_range, 150.0);
}

// ---- Floor flow ----

#[test]
fn test_stairs_rejected_while_enemies_remain() {
    let mut engine = new_engine();
    let player = engine.player();
    let stairs = first::<StairsTrigger>(&engine);

    let snap = engine.tick(DT, &mut contact(player, stairs));
    assert_eq!(snap.floor, 1);
    assert!(snap
        .events
        .contains(&GameEvent::StairsRejected { remaining: 5 }));
    assert!(snap.messages.iter().any(|m| m.text.contains("5 left")));
    assert_eq!(
        engine.advance_floor(),
        StairsOutcome::Rejected { remaining: 5 }
    );
}

#[test]
fn test_stairs_advance_preserves_player() {
    let mut engine = new_engine();
    despawn_enemies(&mut engine);
    let player = engine.player();
    {
        let world = engine.world_mut();
        world.get::<&mut Health>(player).unwrap().current = 50;
        world.get::<&mut Position>(player).unwrap().0 = Vec2::ZERO;
        *world.get::<&mut Progression>(player).unwrap() = Progression {
            level: 3,
            exp: 7,
            max_exp: 144,
        };
    }
    engine.queue_commands([
        PlayerCommand::SwitchWeapon {
            weapon: WeaponKind::Sniper,
        },
        PlayerCommand::FireAt { x: 0.0, y: 100.0 },
    ]);
    engine.tick(DT, &mut NoContacts);
    let old_potion = first::<ItemPickup>(&engine);

    let stairs = first::<StairsTrigger>(&engine);
    let snap = engine.tick(DT, &mut contact(stairs, player));

    assert_eq!(snap.floor, 2);
    assert_eq!(engine.floor(), 2);
    assert!(snap.events.contains(&GameEvent::FloorEntered { floor: 2 }));
    assert!(snap.messages.iter().any(|m| m.text == "Floor 2"));
    assert_eq!(snap.player.hp, 50);
    assert_eq!(snap.player.level, 3);
    assert_eq!(snap.player.exp, 7);
    assert_eq!(snap.ammo.weapon, WeaponKind::Sniper);
    assert_eq!(snap.player.position, Vec2::new(0.0, -192.0));

    // Old floor is gone, the new one is populated
    assert!(!engine.world().contains(old_potion));
    assert!(snap.projectiles.is_empty());
    assert_eq!(snap.enemies_remaining, 5);
    for enemy in all::<Enemy>(&engine) {
        assert_eq!(engine.world().get::<&Enemy>(enemy).unwrap().level, 2);
    }
    assert_eq!(all::<StairsTrigger>(&engine).len(), 1);
    assert_eq!(all::<Player>(&engine), vec![player]);
}

#[test]
fn test_advance_floor_direct() {
    let mut engine = new_engine();
    despawn_enemies(&mut engine);
    assert_eq!(engine.advance_floor(), StairsOutcome::Advanced { floor: 2 });
    assert_eq!(engine.enemies_remaining(), 5);
}

#[test]
fn test_advance_floor_refused_unless_active() {
    let mut engine = new_engine();
    despawn_enemies(&mut engine);
    engine.queue_command(PlayerCommand::Pause);
    engine.tick(DT, &mut NoContacts);
    assert_eq!(engine.advance_floor(), StairsOutcome::Inactive);
    assert_eq!(engine.floor(), 1);

    // Defeated encounters stay on their floor too
    let player = engine.player();
    engine.queue_command(PlayerCommand::Resume);
    engine.world_mut().get::<&mut Health>(player).unwrap().current = 0;
    let snap = engine.tick(DT, &mut NoContacts);
    assert_eq!(snap.phase, EncounterPhase::Defeated);
    assert_eq!(engine.advance_floor(), StairsOutcome::Inactive);
    assert_eq!(engine.floor(), 1);
}

// ---- Engine lifecycle ----

#[test]
fn test_pause_and_resume() {
    let mut engine = new_engine();
    engine.tick(DT, &mut NoContacts);
    engine.queue_command(PlayerCommand::Pause);
    let snap = engine.tick(DT, &mut NoContacts);
    assert_eq!(snap.phase, EncounterPhase::Paused);
    assert_eq!(snap.time.tick, 1);

    engine.queue_command(PlayerCommand::Resume);
    let snap = engine.tick(DT, &mut NoContacts);
    assert_eq!(snap.phase, EncounterPhase::Active);
    assert_eq!(snap.time.tick, 2);
}

#[test]
fn test_first_snapshot_announces_floor() {
    let mut engine = new_engine();
    let snap = engine.tick(DT, &mut NoContacts);
    assert!(snap.events.contains(&GameEvent::FloorEntered { floor: 1 }));
    assert_eq!(snap.enemies.len(), 5);
    assert_eq!(snap.player.hp, 100);
    assert_eq!(snap.player.max_exp, 100);

    // Events are drained per tick
    let snap = engine.tick(DT, &mut NoContacts);
    assert!(!snap.events.contains(&GameEvent::FloorEntered { floor: 1 }));
}

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        starting_floor: 25,
        ..Default::default()
    };
    let mut engine_a = EncounterEngine::new(config);
    let mut engine_b = EncounterEngine::new(config);

    for i in 0..120 {
        if i % 20 == 0 {
            let fire = PlayerCommand::FireAt { x: 0.0, y: 300.0 };
            engine_a.queue_command(fire.clone());
            engine_b.queue_command(fire);
        }
        let json_a = serde_json::to_string(&engine_a.tick(DT, &mut NoContacts)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(DT, &mut NoContacts)).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

// ---- Config and clock ----

#[test]
fn test_config_from_json() {
    let config = SimConfig::from_json_str(r#"{ "seed": 7 }"#).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.starting_floor, 1);
    assert_eq!(config.bounds.width, 1024.0);

    let err = SimConfig::from_json_str(r#"{ "bounds": { "width": 0.0, "height": 768.0 } }"#);
    assert!(matches!(err, Err(ConfigError::InvalidBounds { .. })));
    let err = SimConfig::from_json_str(r#"{ "starting_floor": 0 }"#);
    assert!(matches!(err, Err(ConfigError::ZeroFloor)));
    let err = SimConfig::from_json_str("not json");
    assert!(matches!(err, Err(ConfigError::Parse(_))));
}

#[test]
fn test_frame_clock() {
    let mut clock = FrameClock::new();
    let start = Instant::now();
    assert_eq!(clock.tick_at(start), 0.0);

    let dt = clock.tick_at(start + Duration::from_millis(16));
    assert!((dt - 0.016).abs() < 1e-9);

    // Long stall is clamped
    let dt = clock.tick_at(start + Duration::from_secs(5));
    assert_eq!(dt, 0.25);

    clock.reset();
    assert_eq!(clock.tick_at(start + Duration::from_secs(6)), 0.0);
}
