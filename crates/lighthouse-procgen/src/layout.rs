//! Generated floor description, before it is spawned into the ECS world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use lighthouse_core::enums::{EnemyArchetype, ItemKind, ObstacleKind, RoomType};
use lighthouse_core::types::{Rect, ScreenBounds};

/// One quadrant room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_type: RoomType,
    /// Floor area.
    pub area: Rect,
}

/// A static blocker: wall segment or furniture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePlacement {
    pub kind: ObstacleKind,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemPlacement {
    pub kind: ItemKind,
    pub position: Vec2,
}

/// An enemy to spawn. `slot` indexes the floor's fixed spawn points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub slot: usize,
    pub archetype: EnemyArchetype,
    pub level: u32,
    pub position: Vec2,
}

/// Everything on one floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorLayout {
    pub floor: u32,
    /// Bounds after clamping.
    pub bounds: ScreenBounds,
    pub rooms: Vec<Room>,
    /// Vertical and horizontal strips through the origin.
    pub corridors: Vec<Rect>,
    /// Outer walls, room walls and furniture.
    pub obstacles: Vec<ObstaclePlacement>,
    /// Contact-only trigger zone.
    pub stairs: Rect,
    /// Decorative steps drawn over the stairs. No collision.
    pub stair_steps: Vec<Rect>,
    pub items: Vec<ItemPlacement>,
    pub enemies: Vec<EnemySpawn>,
    /// Where the player is placed on arrival.
    pub entry_point: Vec2,
}

impl FloorLayout {
    /// Obstacles of one kind.
    pub fn obstacles_of(&self, kind: ObstacleKind) -> impl Iterator<Item = &ObstaclePlacement> {
        self.obstacles.iter().filter(move |o| o.kind == kind)
    }

    pub fn room(&self, room_type: RoomType) -> Option<&Room> {
        self.rooms.iter().find(|r| r.room_type == room_type)
    }
}
