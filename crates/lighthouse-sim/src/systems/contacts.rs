//! Contact dispatch: routes the collision backend's pairs to the combat
//! resolver and the projectile model.
//!
//! The whole batch is resolved before anything is purged. A stairs contact is
//! only recorded here; the engine acts on it after the batch.

use hecs::{Entity, World};

use lighthouse_core::components::{
    Enemy, Health, ItemPickup, Obstacle, Player, Projectile, StairsTrigger,
};
use lighthouse_core::constants::{EXP_TEXT_SECS, HEALTH_POTION_HEAL};
use lighthouse_core::enums::{ItemKind, ProjectileOwner};
use lighthouse_core::events::GameEvent;
use lighthouse_core::types::Position;

use crate::backend::ContactPair;
use crate::combat;
use crate::feedback::Feedback;
use crate::projectile;

/// What the batch asked of the engine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContactOutcome {
    pub stairs_requested: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    Player,
    Enemy,
    Projectile(ProjectileOwner),
    Wall,
    Stairs,
    Item(ItemKind),
}

fn classify(world: &World, entity: Entity) -> Option<Body> {
    if world.get::<&Player>(entity).is_ok() {
        return Some(Body::Player);
    }
    if world.get::<&Enemy>(entity).is_ok() {
        return Some(Body::Enemy);
    }
    if let Ok(proj) = world.get::<&Projectile>(entity) {
        return Some(Body::Projectile(proj.owner));
    }
    if world.get::<&Obstacle>(entity).is_ok() {
        return Some(Body::Wall);
    }
    if world.get::<&StairsTrigger>(entity).is_ok() {
        return Some(Body::Stairs);
    }
    world
        .get::<&ItemPickup>(entity)
        .ok()
        .map(|item| Body::Item(item.kind))
}

pub fn run(world: &mut World, pairs: &[ContactPair], feedback: &mut Feedback) -> ContactOutcome {
    let mut outcome = ContactOutcome::default();

    for pair in pairs {
        // Either side may already be gone (collected item, despawned body)
        let (Some(a), Some(b)) = (classify(world, pair.a), classify(world, pair.b)) else {
            continue;
        };

        match (a, b) {
            (Body::Projectile(owner), other) => {
                resolve_projectile(world, pair.a, owner, pair.b, other, feedback);
            }
            (other, Body::Projectile(owner)) => {
                resolve_projectile(world, pair.b, owner, pair.a, other, feedback);
            }
            (Body::Player, Body::Stairs) | (Body::Stairs, Body::Player) => {
                outcome.stairs_requested = true;
            }
            (Body::Player, Body::Item(kind)) => collect_item(world, pair.a, pair.b, kind, feedback),
            (Body::Item(kind), Body::Player) => collect_item(world, pair.b, pair.a, kind, feedback),
            _ => {}
        }
    }

    outcome
}

fn resolve_projectile(
    world: &mut World,
    bullet: Entity,
    owner: ProjectileOwner,
    other: Entity,
    body: Body,
    feedback: &mut Feedback,
) {
    let damage = match world.get::<&Projectile>(bullet) {
        Ok(proj) if !proj.spent => proj.damage,
        _ => return,
    };

    match (owner, body) {
        (ProjectileOwner::Player, Body::Enemy) | (ProjectileOwner::Enemy, Body::Player) => {
            let alive = world
                .get::<&Health>(other)
                .map(|health| health.current > 0)
                .unwrap_or(false);
            if !alive {
                return;
            }
            combat::damage_entity(world, other, damage, feedback);
            if let Ok(mut proj) = world.get::<&mut Projectile>(bullet) {
                projectile::on_hit_target(&mut proj);
            }
        }
        (_, Body::Wall) => {
            if let Ok(mut proj) = world.get::<&mut Projectile>(bullet) {
                projectile::on_hit_wall(&mut proj);
            }
            let position = world.get::<&Position>(bullet).map(|p| p.0).unwrap_or_default();
            feedback.event(GameEvent::ProjectileHitWall { position });
        }
        _ => {}
    }
}

fn collect_item(world: &mut World, player: Entity, item: Entity, kind: ItemKind, feedback: &mut Feedback) {
    let alive = world
        .get::<&Health>(player)
        .map(|health| health.current > 0)
        .unwrap_or(false);
    if !alive {
        return;
    }

    let healed = match kind {
        ItemKind::HealthPotion => combat::heal_entity(world, player, HEALTH_POTION_HEAL),
    };
    let _ = world.despawn(item);
    feedback.event(GameEvent::ItemCollected { kind, healed });
    feedback.message(format!("+{healed} HP"), EXP_TEXT_SECS);
}
