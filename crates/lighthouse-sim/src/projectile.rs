//! Projectile model: spawn variants, travel, and hit responses.
//!
//! Functions here work on the plain `Projectile` component. Spawning into the
//! world and despawning spent projectiles happen in `world_setup` and the
//! cleanup system.

use glam::Vec2;

use lighthouse_core::components::Projectile;
use lighthouse_core::constants::*;
use lighthouse_core::enums::{ProjectileBehavior, ProjectileOwner, WeaponKind};

/// A projectile ready to be spawned at `position`.
#[derive(Debug, Clone)]
pub struct ProjectileSpawn {
    pub position: Vec2,
    pub half_extents: Vec2,
    pub projectile: Projectile,
}

/// What a damaging contact did to the projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Destroyed,
    /// Piercing projectile keeps flying with reduced damage.
    Continues { damage: u32 },
}

/// Parameters shared by every projectile of one shot.
#[derive(Debug, Clone, Copy)]
pub struct ShotParams {
    pub origin: Vec2,
    pub target: Vec2,
    pub damage: u32,
    pub range: f32,
    pub owner: ProjectileOwner,
    pub weapon: WeaponKind,
}

/// Build the projectiles of one shot. Spread shots fan out into
/// `SPREAD_PROJECTILE_COUNT` pellets; the other variants fire one.
pub fn spawn_shot(behavior: ProjectileBehavior, shot: &ShotParams) -> Vec<ProjectileSpawn> {
    let aim = (shot.target - shot.origin).normalize_or_zero();
    match behavior {
        ProjectileBehavior::Standard => vec![make(
            shot,
            aim,
            shot.damage,
            shot.range,
            STANDARD_PROJECTILE_SPEED,
            STANDARD_PROJECTILE_SIZE,
            behavior,
        )],
        ProjectileBehavior::SpreadMember => spread_directions(aim)
            .into_iter()
            .map(|direction| {
                make(
                    shot,
                    direction,
                    shot.damage / SPREAD_DAMAGE_DIVISOR,
                    shot.range * SPREAD_RANGE_FACTOR,
                    STANDARD_PROJECTILE_SPEED,
                    STANDARD_PROJECTILE_SIZE,
                    behavior,
                )
            })
            .collect(),
        ProjectileBehavior::Piercing => vec![make(
            shot,
            aim,
            shot.damage,
            shot.range,
            PIERCING_PROJECTILE_SPEED,
            PIERCING_PROJECTILE_SIZE,
            behavior,
        )],
    }
}

/// Pellet directions: offsets `(i - 2) * SPREAD_TOTAL_ANGLE / 4` about `aim`.
pub fn spread_directions(aim: Vec2) -> Vec<Vec2> {
    let count = SPREAD_PROJECTILE_COUNT;
    let center = (count / 2) as f32;
    let step = SPREAD_TOTAL_ANGLE / (count - 1) as f32;
    (0..count)
        .map(|i| Vec2::from_angle((i as f32 - center) * step).rotate(aim))
        .collect()
}

fn make(
    shot: &ShotParams,
    direction: Vec2,
    damage: u32,
    max_range: f32,
    speed: f32,
    size: Vec2,
    behavior: ProjectileBehavior,
) -> ProjectileSpawn {
    ProjectileSpawn {
        position: shot.origin,
        half_extents: size * 0.5,
        projectile: Projectile {
            origin: shot.origin,
            direction,
            speed,
            damage,
            max_range,
            traveled: 0.0,
            owner: shot.owner,
            behavior,
            weapon: shot.weapon,
            spent: false,
        },
    }
}

/// Fly for `dt` seconds. Returns the displacement to add to the position.
/// Marks the projectile spent once it has covered its range.
pub fn advance(projectile: &mut Projectile, dt: f64) -> Vec2 {
    if projectile.spent {
        return Vec2::ZERO;
    }
    let step = projectile.speed * dt as f32;
    projectile.traveled += step;
    if projectile.traveled >= projectile.max_range {
        projectile.spent = true;
    }
    projectile.direction * step
}

/// Damaging contact. Standard and spread pellets are destroyed; piercing
/// projectiles lose 30% of their damage and are destroyed once it falls
/// below the minimum.
pub fn on_hit_target(projectile: &mut Projectile) -> HitOutcome {
    match projectile.behavior {
        ProjectileBehavior::Standard | ProjectileBehavior::SpreadMember => {
            projectile.spent = true;
            HitOutcome::Destroyed
        }
        ProjectileBehavior::Piercing => {
            let decayed = (f64::from(projectile.damage) * PIERCING_DAMAGE_DECAY) as u32;
            projectile.damage = decayed;
            if decayed < PIERCING_MIN_DAMAGE {
                projectile.spent = true;
                HitOutcome::Destroyed
            } else {
                HitOutcome::Continues { damage: decayed }
            }
        }
    }
}

/// Walls stop every projectile.
pub fn on_hit_wall(projectile: &mut Projectile) {
    projectile.spent = true;
}
