//! Simulation constants and tuning parameters.

use glam::Vec2;

// --- Frame timing ---

/// Host frame rate the game loop aims for (Hz).
pub const TARGET_FRAME_RATE: u32 = 60;

/// Largest frame delta the simulation will integrate in one tick (seconds).
pub const MAX_FRAME_DELTA_SECS: f64 = 0.25;

// --- Screen ---

pub const DEFAULT_SCREEN_WIDTH: f32 = 1024.0;
pub const DEFAULT_SCREEN_HEIGHT: f32 = 768.0;

/// Smallest screen side the level generator will lay out.
pub const MIN_SCREEN_EXTENT: f32 = 240.0;

// --- Combat ---

/// Damage floor applied after defense.
pub const MIN_DAMAGE: u32 = 1;

// --- Player ---

pub const PLAYER_MAX_HP: u32 = 100;
pub const PLAYER_ATTACK_POWER: u32 = 20;
pub const PLAYER_DEFENSE: u32 = 5;
pub const PLAYER_MOVE_SPEED: f32 = 150.0;
pub const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 32.0);

// --- Progression ---

pub const INITIAL_MAX_EXP: u32 = 100;
/// Experience threshold multiplier applied on each level up.
pub const EXP_THRESHOLD_GROWTH: f64 = 1.2;
/// Experience granted per kill is `enemy max HP / EXP_MAX_HP_DIVISOR`.
pub const EXP_MAX_HP_DIVISOR: u32 = 5;
pub const LEVEL_UP_HP_BONUS: u32 = 10;
pub const LEVEL_UP_ATTACK_BONUS: u32 = 2;
pub const LEVEL_UP_DEFENSE_BONUS: u32 = 1;

// --- Enemies ---

pub const ENEMY_SIZE: Vec2 = Vec2::new(32.0, 32.0);
pub const ENEMY_ATTACK_COOLDOWN_SECS: f64 = 1.0;
/// Full vision cone angle (60°).
pub const ENEMY_VISION_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
/// Direction every enemy's vision cone is measured against.
pub const ENEMY_VISION_FACING: Vec2 = Vec2::X;
/// Stat multiplier gained per level above 1.
pub const ENEMY_LEVEL_STEP: f64 = 0.2;
/// Fade-out time the renderer plays before a killed enemy disappears.
pub const DEATH_FADE_SECS: f64 = 0.5;

// --- Enemy AI ---

pub const PATROL_RADIUS: f32 = 60.0;
pub const PATROL_ARRIVAL_DISTANCE: f32 = 10.0;
pub const ALERT_ARRIVAL_DISTANCE: f32 = 20.0;
pub const MAX_ALERT_SECS: f64 = 3.0;
/// Chase gives up once the player is beyond `detection_range * CHASE_ESCAPE_FACTOR`.
pub const CHASE_ESCAPE_FACTOR: f32 = 1.5;
/// Below this distance to the movement target the enemy stops.
pub const MOVE_ARRIVAL_DISTANCE: f32 = 5.0;
/// Melee lunge point: `player + (enemy - player) * MELEE_LUNGE_FRACTION`.
pub const MELEE_LUNGE_FRACTION: f32 = 0.3;

// --- Projectiles ---

pub const STANDARD_PROJECTILE_SPEED: f32 = 400.0;
pub const STANDARD_PROJECTILE_SIZE: Vec2 = Vec2::new(4.0, 8.0);
pub const PIERCING_PROJECTILE_SPEED: f32 = 600.0;
pub const PIERCING_PROJECTILE_SIZE: Vec2 = Vec2::new(6.0, 12.0);
pub const SPREAD_PROJECTILE_COUNT: usize = 5;
/// Total fan angle of a spread shot (radians).
pub const SPREAD_TOTAL_ANGLE: f32 = 0.3;
pub const SPREAD_DAMAGE_DIVISOR: u32 = 2;
pub const SPREAD_RANGE_FACTOR: f32 = 0.8;
pub const PIERCING_DAMAGE_DECAY: f64 = 0.7;
/// A piercing projectile whose decayed damage falls below this is destroyed.
pub const PIERCING_MIN_DAMAGE: u32 = 5;
/// Projectiles further than this from the player are purged.
pub const PROJECTILE_CLEANUP_DISTANCE: f32 = 1000.0;

// --- Input ---

pub const AUTO_FIRE_INTERVAL_SECS: f64 = 0.3;

// --- Level layout ---

pub const OUTER_WALL_THICKNESS: f32 = 12.0;
pub const ROOM_WALL_THICKNESS: f32 = 6.0;
/// Rooms are a third of the screen minus this margin on each axis.
pub const ROOM_MARGIN: f32 = 20.0;
pub const MIN_ROOM_EXTENT: f32 = 40.0;
pub const CORRIDOR_WIDTH: f32 = 60.0;
pub const STAIRS_SIZE: Vec2 = Vec2::new(60.0, 100.0);
pub const STAIR_STEP_COUNT: usize = 8;
pub const STAIR_STEP_SPACING: f32 = 12.0;
pub const ITEM_SIZE: Vec2 = Vec2::new(16.0, 16.0);
pub const ITEM_POSITIONS: [Vec2; 3] = [
    Vec2::new(-100.0, 200.0),
    Vec2::new(100.0, -200.0),
    Vec2::new(150.0, 100.0),
];
pub const HEALTH_POTION_HEAL: u32 = 30;

// --- UI text durations (seconds) ---

pub const DAMAGE_TEXT_SECS: f64 = 0.8;
pub const EXP_TEXT_SECS: f64 = 1.5;
pub const LEVEL_UP_TEXT_SECS: f64 = 2.0;
pub const FLOOR_TEXT_SECS: f64 = 2.0;
pub const STAIRS_REJECT_TEXT_SECS: f64 = 2.0;
