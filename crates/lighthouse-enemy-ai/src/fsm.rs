//! Enemy behavior finite state machine.
//!
//! Functions here operate on an [`EnemyBrain`] plus a read-only
//! [`EnemyContext`] and report what the simulation must apply: the new
//! velocity, an attack to execute, and whether the alert cue should show.
//! No ECS dependency; operates on plain data.

use glam::Vec2;

use lighthouse_core::components::{EnemyBrain, PatrolRoute};
use lighthouse_core::constants::*;
use lighthouse_core::enums::{AttackStyle, EnemyState};

use crate::profiles::ScaledStats;

/// Input to the state machine for a single enemy.
pub struct EnemyContext {
    pub position: Vec2,
    /// Live player position. `None` when the player is missing this tick.
    pub player_position: Option<Vec2>,
    pub move_speed: f32,
    pub attack_style: AttackStyle,
    /// Simulation time at this tick (seconds).
    pub elapsed_secs: f64,
    /// Frame delta (seconds).
    pub dt: f64,
}

/// Attack chosen this tick. Executed by the simulation after all enemies
/// have been evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackAction {
    /// Lunge to `lunge_to` and hit the player directly.
    Melee { lunge_to: Vec2 },
    /// Fire a projectile at `target`.
    Ranged { target: Vec2 },
}

/// Output from the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyUpdate {
    pub new_state: EnemyState,
    pub state_changed: bool,
    pub velocity: Vec2,
    pub attack: Option<AttackAction>,
    /// The enemy just spotted the player.
    pub alerted: bool,
}

/// Fresh brain for a newly spawned enemy.
pub fn new_brain(stats: &ScaledStats) -> EnemyBrain {
    EnemyBrain {
        state: EnemyState::Patrol,
        detection_range: stats.detection_range,
        attack_range: stats.attack_range,
        vision_angle: ENEMY_VISION_ANGLE,
        last_known_player: None,
        alert_timer_secs: 0.0,
        patrol: PatrolRoute::default(),
        attack_cooldown_secs: ENEMY_ATTACK_COOLDOWN_SECS,
        last_attack_secs: None,
        move_target: None,
        moving: false,
    }
}

/// Evaluate one tick for one enemy: state behavior, detection, then movement.
pub fn evaluate(brain: &mut EnemyBrain, ctx: &EnemyContext) -> EnemyUpdate {
    let previous = brain.state;

    // Terminal state: no transitions, no movement
    if previous == EnemyState::Dead {
        return EnemyUpdate {
            new_state: previous,
            state_changed: false,
            velocity: Vec2::ZERO,
            attack: None,
            alerted: false,
        };
    }

    let attack = match brain.state {
        EnemyState::Patrol => {
            update_patrol(brain, ctx);
            None
        }
        EnemyState::Alert => {
            update_alert(brain, ctx);
            None
        }
        EnemyState::Chase => {
            update_chase(brain, ctx);
            None
        }
        EnemyState::Attack => update_attack(brain, ctx),
        EnemyState::Dead => None,
    };

    let alerted = check_detection(brain, ctx);
    let velocity = resolve_movement(brain, ctx.position, ctx.move_speed);

    EnemyUpdate {
        new_state: brain.state,
        state_changed: brain.state != previous,
        velocity,
        attack,
        alerted,
    }
}

/// Aggro-on-hit: damage taken while patrolling starts a chase.
/// Returns true when the state changed.
pub fn on_damaged(brain: &mut EnemyBrain) -> bool {
    if brain.state == EnemyState::Patrol {
        brain.state = EnemyState::Chase;
        return true;
    }
    false
}

/// Move the brain into the terminal dead state.
pub fn kill(brain: &mut EnemyBrain) {
    brain.state = EnemyState::Dead;
    brain.moving = false;
    brain.move_target = None;
}

fn update_patrol(brain: &mut EnemyBrain, ctx: &EnemyContext) {
    if brain.patrol.waypoints.is_empty() {
        brain.patrol = generate_patrol_route(ctx.position);
    }

    let Some(target) = brain.patrol.waypoints.get(brain.patrol.index).copied() else {
        brain.patrol.index = 0;
        return;
    };

    move_towards(brain, target);
    if ctx.position.distance(target) < PATROL_ARRIVAL_DISTANCE {
        advance_patrol(&mut brain.patrol);
    }
}

fn update_alert(brain: &mut EnemyBrain, ctx: &EnemyContext) {
    brain.alert_timer_secs += ctx.dt;

    if let Some(last_known) = brain.last_known_player {
        move_towards(brain, last_known);

        // Reached the last sighting and the search timed out: give up
        if ctx.position.distance(last_known) < ALERT_ARRIVAL_DISTANCE
            && brain.alert_timer_secs > MAX_ALERT_SECS
        {
            brain.state = EnemyState::Patrol;
            brain.alert_timer_secs = 0.0;
        }
    }
}

fn update_chase(brain: &mut EnemyBrain, ctx: &EnemyContext) {
    let Some(player) = ctx.player_position else {
        return;
    };

    let distance = ctx.position.distance(player);
    if distance <= brain.attack_range {
        brain.state = EnemyState::Attack;
    } else if distance > brain.detection_range * CHASE_ESCAPE_FACTOR {
        // Player escaped, search where they were last seen
        brain.last_known_player = Some(player);
        brain.state = EnemyState::Alert;
        brain.alert_timer_secs = 0.0;
    } else {
        move_towards(brain, player);
    }
}

fn update_attack(brain: &mut EnemyBrain, ctx: &EnemyContext) -> Option<AttackAction> {
    let player = ctx.player_position?;

    if ctx.position.distance(player) > brain.attack_range {
        brain.state = EnemyState::Chase;
        return None;
    }
    if !can_attack(brain, ctx.elapsed_secs) {
        return None;
    }

    brain.last_attack_secs = Some(ctx.elapsed_secs);
    Some(match ctx.attack_style {
        AttackStyle::Melee => AttackAction::Melee {
            lunge_to: melee_lunge_point(ctx.position, player),
        },
        AttackStyle::Ranged => AttackAction::Ranged { target: player },
    })
}

fn can_attack(brain: &EnemyBrain, elapsed_secs: f64) -> bool {
    match brain.last_attack_secs {
        Some(last) => elapsed_secs - last >= brain.attack_cooldown_secs,
        None => true,
    }
}

/// Detection runs after the state behavior every tick. Returns true when the
/// enemy switched into chase because it saw the player.
fn check_detection(brain: &mut EnemyBrain, ctx: &EnemyContext) -> bool {
    let Some(player) = ctx.player_position else {
        return false;
    };
    if brain.state == EnemyState::Dead {
        return false;
    }
    if ctx.position.distance(player) > brain.detection_range
        || !in_vision_cone(ctx.position, player, ENEMY_VISION_FACING, brain.vision_angle)
    {
        return false;
    }

    brain.last_known_player = Some(player);
    if matches!(brain.state, EnemyState::Patrol | EnemyState::Alert) {
        brain.state = EnemyState::Chase;
        return true;
    }
    false
}

/// True when `target` lies within `vision_angle / 2` of `facing` as seen
/// from `origin`.
pub fn in_vision_cone(origin: Vec2, target: Vec2, facing: Vec2, vision_angle: f32) -> bool {
    let to_target = target - origin;
    let angle_to_target = to_target.y.atan2(to_target.x);
    let facing_angle = facing.y.atan2(facing.x);
    let diff = wrap_angle(angle_to_target - facing_angle).abs();
    diff <= vision_angle / 2.0
}

/// Wrap an angle into `[-PI, PI]`.
fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (angle + PI).rem_euclid(TAU) - PI
}

/// Point the melee lunge travels to before returning.
pub fn melee_lunge_point(enemy: Vec2, player: Vec2) -> Vec2 {
    player + (enemy - player) * MELEE_LUNGE_FRACTION
}

/// Diamond of four waypoints around `center`: left, top, right, bottom.
pub fn generate_patrol_route(center: Vec2) -> PatrolRoute {
    PatrolRoute {
        waypoints: vec![
            center + Vec2::new(-PATROL_RADIUS, 0.0),
            center + Vec2::new(0.0, PATROL_RADIUS),
            center + Vec2::new(PATROL_RADIUS, 0.0),
            center + Vec2::new(0.0, -PATROL_RADIUS),
        ],
        index: 0,
        direction: 1,
    }
}

/// Step to the next waypoint, reversing at either end of the path.
pub fn advance_patrol(route: &mut PatrolRoute) {
    let len = route.waypoints.len();
    if len < 2 {
        route.index = 0;
        return;
    }

    let next = route.index as i64 + i64::from(route.direction);
    if next >= len as i64 {
        route.index = len - 2;
        route.direction = -1;
    } else if next < 0 {
        route.index = 1;
        route.direction = 1;
    } else {
        route.index = next as usize;
    }
}

fn move_towards(brain: &mut EnemyBrain, target: Vec2) {
    brain.move_target = Some(target);
    brain.moving = true;
}

/// Velocity toward the current movement target. Stops (and clears the moving
/// flag) within the arrival distance so enemies do not jitter on the spot.
pub fn resolve_movement(brain: &mut EnemyBrain, position: Vec2, move_speed: f32) -> Vec2 {
    let target = match brain.move_target {
        Some(target) if brain.moving => target,
        _ => return Vec2::ZERO,
    };

    let offset = target - position;
    let distance = offset.length();
    if distance > MOVE_ARRIVAL_DISTANCE {
        offset / distance * move_speed
    } else {
        brain.moving = false;
        Vec2::ZERO
    }
}
