//! Enemy AI system: runs the behavior state machine for every living enemy.
//!
//! All enemies decide against the same pre-damage player position. Their
//! attacks are buffered and applied afterwards by [`apply_attacks`].

use glam::Vec2;
use hecs::{Entity, World};

use lighthouse_core::components::{CombatStats, Enemy, EnemyBrain};
use lighthouse_core::enums::{EnemyState, ProjectileBehavior, ProjectileOwner, WeaponKind};
use lighthouse_core::events::GameEvent;
use lighthouse_core::types::{Position, Velocity};

use lighthouse_enemy_ai::fsm::{self, AttackAction, EnemyContext};

use crate::combat;
use crate::feedback::Feedback;
use crate::projectile::{spawn_shot, ShotParams};
use crate::world_setup;

/// An attack decided this tick, not yet applied.
#[derive(Debug, Clone, Copy)]
pub struct PendingAttack {
    pub attacker: Entity,
    pub position: Vec2,
    pub attack_power: u32,
    pub attack_range: f32,
    pub action: AttackAction,
}

/// Evaluate every enemy and set its velocity. Returns the attacks to apply.
pub fn run(
    world: &mut World,
    player_position: Option<Vec2>,
    elapsed_secs: f64,
    dt: f64,
    feedback: &mut Feedback,
) -> Vec<PendingAttack> {
    let mut attacks = Vec::new();

    for (entity, (enemy, brain, pos, vel, stats)) in world.query_mut::<(
        &Enemy,
        &mut EnemyBrain,
        &Position,
        &mut Velocity,
        &CombatStats,
    )>() {
        // Dead enemies wait for the purge
        if brain.state == EnemyState::Dead {
            vel.0 = Vec2::ZERO;
            continue;
        }

        let ctx = EnemyContext {
            position: pos.0,
            player_position,
            move_speed: stats.move_speed,
            attack_style: enemy.attack_style,
            elapsed_secs,
            dt,
        };
        let update = fsm::evaluate(brain, &ctx);
        vel.0 = update.velocity;

        if update.alerted {
            feedback.event(GameEvent::EnemyAlerted { position: pos.0 });
        }
        if let Some(action) = update.attack {
            attacks.push(PendingAttack {
                attacker: entity,
                position: pos.0,
                attack_power: stats.attack_power,
                attack_range: brain.attack_range,
                action,
            });
        }
    }

    attacks
}

/// Execute buffered attacks: melee hits go through the combat resolver,
/// ranged attacks spawn an enemy projectile aimed at the player.
pub fn apply_attacks(
    world: &mut World,
    player: Entity,
    attacks: Vec<PendingAttack>,
    feedback: &mut Feedback,
) {
    for attack in attacks {
        match attack.action {
            AttackAction::Melee { lunge_to } => {
                feedback.event(GameEvent::MeleeLunge {
                    from: attack.position,
                    to: lunge_to,
                });
                combat::damage_entity(world, player, attack.attack_power, feedback);
            }
            AttackAction::Ranged { target } => {
                let shot = ShotParams {
                    origin: attack.position,
                    target,
                    damage: attack.attack_power,
                    range: attack.attack_range,
                    owner: ProjectileOwner::Enemy,
                    weapon: WeaponKind::default(),
                };
                for spawn in spawn_shot(ProjectileBehavior::Standard, &shot) {
                    world_setup::spawn_projectile(world, spawn);
                }
                feedback.event(GameEvent::EnemyFired {
                    position: attack.position,
                });
            }
        }
    }
}
