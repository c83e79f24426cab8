//! Seam to the external collision engine.
//!
//! Each tick the engine publishes one [`ColliderView`] per collidable entity
//! and the backend answers with the contact pairs that began this tick. The
//! simulation never tests overlaps itself.

use glam::Vec2;
use hecs::{Entity, World};

use lighthouse_core::collision::{CollisionCategory, CollisionProfile};
use lighthouse_core::components::Collider;
use lighthouse_core::types::{Position, Rect};

/// One collidable body as seen by the collision engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderView {
    pub entity: Entity,
    pub center: Vec2,
    pub half_extents: Vec2,
    pub profile: CollisionProfile,
}

impl ColliderView {
    pub fn rect(&self) -> Rect {
        Rect {
            center: self.center,
            half_extents: self.half_extents,
        }
    }

    /// True when either body asked to be told about the other.
    pub fn wants_contact_with(&self, other: &ColliderView) -> bool {
        other.profile.category.in_mask(self.profile.contact_test_mask)
            || self.profile.category.in_mask(other.profile.contact_test_mask)
    }
}

/// Two entities whose bodies touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactPair {
    pub a: Entity,
    pub b: Entity,
}

/// The collision engine. Returns the contact batch for this tick.
pub trait CollisionBackend {
    fn detect(&mut self, colliders: &[ColliderView]) -> Vec<ContactPair>;
}

impl<F> CollisionBackend for F
where
    F: FnMut(&[ColliderView]) -> Vec<ContactPair>,
{
    fn detect(&mut self, colliders: &[ColliderView]) -> Vec<ContactPair> {
        self(colliders)
    }
}

/// Backend that never reports contacts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoContacts;

impl CollisionBackend for NoContacts {
    fn detect(&mut self, _colliders: &[ColliderView]) -> Vec<ContactPair> {
        Vec::new()
    }
}

/// Publish every body that still takes part in collision.
pub fn collect_colliders(world: &World) -> Vec<ColliderView> {
    let mut query = world.query::<(&Position, &Collider)>();
    query
        .iter()
        .filter(|(_, (_, collider))| collider.profile.category != CollisionCategory::None)
        .map(|(entity, (pos, collider))| ColliderView {
            entity,
            center: pos.0,
            half_extents: collider.half_extents,
            profile: collider.profile,
        })
        .collect()
}
