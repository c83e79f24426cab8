//! Deterministic floor generator.
//!
//! The layout is a pure function of the floor index and bounds. The only
//! randomness is the archetype draw on the highest tier, which comes from the
//! injected RNG.

use glam::Vec2;
use rand::Rng;

use lighthouse_core::constants::*;
use lighthouse_core::enums::{ItemKind, ObstacleKind, RoomType};
use lighthouse_core::types::{Rect, ScreenBounds};

use crate::layout::*;
use crate::tiers::EnemyTier;

/// Generate the layout of `floor` inside `bounds` (centred on the origin).
/// Bounds below the minimum usable extent are raised to it.
pub fn generate_floor<R: Rng + ?Sized>(floor: u32, bounds: ScreenBounds, rng: &mut R) -> FloorLayout {
    let bounds = bounds.clamped();
    let size = Vec2::new(bounds.width, bounds.height);

    let mut obstacles = outer_walls(size);
    let mut rooms = Vec::with_capacity(RoomType::ALL.len());
    for room_type in RoomType::ALL {
        let area = room_area(room_type, size);
        obstacles.extend(room_walls(room_type, &area));
        rooms.push(Room { room_type, area });
    }
    obstacles.extend(furniture(size));

    FloorLayout {
        floor,
        bounds,
        rooms,
        corridors: corridors(size),
        obstacles,
        stairs: Rect::new(Vec2::ZERO, STAIRS_SIZE),
        stair_steps: stair_steps(),
        items: ITEM_POSITIONS
            .iter()
            .map(|&position| ItemPlacement {
                kind: ItemKind::HealthPotion,
                position,
            })
            .collect(),
        enemies: enemy_roster(floor, size, rng),
        entry_point: Vec2::new(0.0, -size.y / 4.0),
    }
}

/// Sign of the room's quadrant: living is top-left, storage bottom-right.
fn quadrant(room_type: RoomType) -> Vec2 {
    match room_type {
        RoomType::Living => Vec2::new(-1.0, 1.0),
        RoomType::Bedroom => Vec2::new(1.0, 1.0),
        RoomType::Kitchen => Vec2::new(-1.0, -1.0),
        RoomType::Storage => Vec2::new(1.0, -1.0),
    }
}

fn room_area(room_type: RoomType, size: Vec2) -> Rect {
    let center = quadrant(room_type) * size / 3.0;
    let extent = (size / 3.0 - Vec2::splat(ROOM_MARGIN)).max(Vec2::splat(MIN_ROOM_EXTENT));
    Rect::new(center, extent)
}

fn outer_walls(size: Vec2) -> Vec<ObstaclePlacement> {
    let half = size * 0.5;
    let t = OUTER_WALL_THICKNESS;
    [
        // top, bottom, left, right
        Rect::from_min_size(Vec2::new(-half.x, half.y - t), Vec2::new(size.x, t)),
        Rect::from_min_size(Vec2::new(-half.x, -half.y), Vec2::new(size.x, t)),
        Rect::from_min_size(Vec2::new(-half.x, -half.y), Vec2::new(t, size.y)),
        Rect::from_min_size(Vec2::new(half.x - t, -half.y), Vec2::new(t, size.y)),
    ]
    .into_iter()
    .map(|rect| ObstaclePlacement {
        kind: ObstacleKind::OuterWall,
        rect,
    })
    .collect()
}

/// Walls along the room edges. The two sides facing the outer walls stay
/// open; the two facing the corridor are solid, inset inside the room.
fn room_walls(room_type: RoomType, area: &Rect) -> Vec<ObstaclePlacement> {
    let q = quadrant(room_type);
    let half = area.half_extents;
    let t = ROOM_WALL_THICKNESS;
    let mut walls = Vec::with_capacity(2);

    // Corridor side of each axis is opposite the quadrant sign
    let inset_y = -q.y * (half.y - t * 0.5);
    walls.push(wall_segment(
        area.center + Vec2::new(0.0, inset_y),
        Vec2::new(area.size().x, t),
    ));
    let inset_x = -q.x * (half.x - t * 0.5);
    walls.push(wall_segment(
        area.center + Vec2::new(inset_x, 0.0),
        Vec2::new(t, area.size().y),
    ));

    walls
}

fn wall_segment(center: Vec2, size: Vec2) -> ObstaclePlacement {
    ObstaclePlacement {
        kind: ObstacleKind::RoomWall,
        rect: Rect::new(center, size),
    }
}

fn corridors(size: Vec2) -> Vec<Rect> {
    let inset = OUTER_WALL_THICKNESS * 2.0;
    vec![
        Rect::new(Vec2::ZERO, Vec2::new(CORRIDOR_WIDTH, size.y - inset)),
        Rect::new(Vec2::ZERO, Vec2::new(size.x - inset, CORRIDOR_WIDTH)),
    ]
}

fn stair_steps() -> Vec<Rect> {
    let min_x = -STAIRS_SIZE.x * 0.5 + 5.0;
    let min_y = -STAIRS_SIZE.y * 0.5;
    (0..STAIR_STEP_COUNT)
        .map(|i| {
            Rect::from_min_size(
                Vec2::new(min_x, min_y + i as f32 * STAIR_STEP_SPACING),
                Vec2::new(STAIRS_SIZE.x - 10.0, 2.0),
            )
        })
        .collect()
}

fn furniture(size: Vec2) -> Vec<ObstaclePlacement> {
    let third = size / 3.0;
    let piece = |kind, x: f32, y: f32, w: f32, h: f32| ObstaclePlacement {
        kind,
        rect: Rect::new(Vec2::new(x, y), Vec2::new(w, h)),
    };

    let mut pieces = vec![
        // Living
        piece(ObstacleKind::Sofa, -third.x - 30.0, third.y + 20.0, 60.0, 30.0),
        piece(ObstacleKind::Table, -third.x + 20.0, third.y - 10.0, 50.0, 30.0),
        // Bedroom
        piece(ObstacleKind::Bed, third.x + 20.0, third.y + 30.0, 80.0, 40.0),
        piece(ObstacleKind::Desk, third.x - 30.0, third.y - 20.0, 60.0, 30.0),
        // Kitchen
        piece(ObstacleKind::Counter, -third.x + 30.0, -third.y + 30.0, 70.0, 30.0),
        piece(ObstacleKind::Stove, -third.x - 20.0, -third.y + 30.0, 40.0, 30.0),
    ];

    // Storage: a 2x2 block of crates
    for (dx, dy) in [(-40.0, 30.0), (40.0, 30.0), (-40.0, -30.0), (40.0, -30.0)] {
        pieces.push(piece(
            ObstacleKind::Crate,
            third.x + dx,
            -third.y + dy,
            30.0,
            30.0,
        ));
    }

    pieces
}

/// Fixed spawn points: one per room, then the corridor.
pub fn enemy_slots(size: Vec2) -> [Vec2; 5] {
    let third = size / 3.0;
    [
        Vec2::new(-third.x + 40.0, third.y - 40.0),
        Vec2::new(third.x - 40.0, third.y + 40.0),
        Vec2::new(-third.x - 40.0, -third.y - 40.0),
        Vec2::new(third.x + 40.0, -third.y - 40.0),
        Vec2::new(0.0, size.y / 4.0),
    ]
}

fn enemy_roster<R: Rng + ?Sized>(floor: u32, size: Vec2, rng: &mut R) -> Vec<EnemySpawn> {
    let tier = EnemyTier::from_floor(floor);
    enemy_slots(size)
        .into_iter()
        .enumerate()
        .map(|(slot, position)| EnemySpawn {
            slot,
            archetype: tier.archetype_for_slot(slot, rng),
            level: floor,
            position,
        })
        .collect()
}
