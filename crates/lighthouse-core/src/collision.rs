//! Collision categories and the fixed mask table handed to the collision engine.
//!
//! The core never detects overlaps itself. It publishes a shape and a
//! [`CollisionProfile`] per body and consumes the contact pairs the engine
//! reports back.

use serde::{Deserialize, Serialize};

/// Collision category bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum CollisionCategory {
    /// Takes part in nothing. Dead enemies are switched to this.
    #[default]
    None = 0,
    Player = 1 << 0,
    Enemy = 1 << 1,
    PlayerProjectile = 1 << 2,
    EnemyProjectile = 1 << 3,
    Wall = 1 << 4,
    ItemTrigger = 1 << 5,
}

impl CollisionCategory {
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// True when this category is set in `mask`.
    pub const fn in_mask(self, mask: u32) -> bool {
        mask & self.bits() != 0
    }
}

/// Category plus the masks the collision engine should test against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionProfile {
    pub category: CollisionCategory,
    /// Categories that should produce contact events.
    pub contact_test_mask: u32,
    /// Categories that physically block this body.
    pub collision_mask: u32,
}

/// Kinds of bodies the core publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Player,
    Enemy,
    PlayerProjectile,
    EnemyProjectile,
    /// Outer walls, room walls and furniture.
    Wall,
    StairsTrigger,
    ItemPickup,
}

/// The mask table. Constant for the lifetime of the program.
pub const fn profile_for(kind: BodyKind) -> CollisionProfile {
    use CollisionCategory as C;
    match kind {
        BodyKind::Player => CollisionProfile {
            category: C::Player,
            contact_test_mask: C::Enemy.bits() | C::EnemyProjectile.bits() | C::ItemTrigger.bits(),
            collision_mask: C::Wall.bits(),
        },
        BodyKind::Enemy => CollisionProfile {
            category: C::Enemy,
            contact_test_mask: C::PlayerProjectile.bits(),
            collision_mask: C::Wall.bits() | C::Enemy.bits(),
        },
        BodyKind::PlayerProjectile => CollisionProfile {
            category: C::PlayerProjectile,
            contact_test_mask: C::Enemy.bits() | C::Wall.bits(),
            collision_mask: C::Wall.bits(),
        },
        BodyKind::EnemyProjectile => CollisionProfile {
            category: C::EnemyProjectile,
            contact_test_mask: C::Player.bits() | C::Wall.bits(),
            collision_mask: C::Wall.bits(),
        },
        BodyKind::Wall => CollisionProfile {
            category: C::Wall,
            contact_test_mask: 0,
            collision_mask: 0,
        },
        BodyKind::StairsTrigger | BodyKind::ItemPickup => CollisionProfile {
            category: C::ItemTrigger,
            contact_test_mask: C::Player.bits(),
            collision_mask: 0,
        },
    }
}
