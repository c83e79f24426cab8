//! Fundamental geometric and simulation types.
//!
//! Coordinates are screen units with the origin at the centre of the floor,
//! x to the right and y up.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{MIN_SCREEN_EXTENT, MAX_FRAME_DELTA_SECS};

/// World position of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Velocity intent of an entity (units/s). Integrated by the movement system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Axis-aligned rectangle stored as centre + half extents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub half_extents: Vec2,
}

/// Size of the playable screen, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated ticks.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn distance_to(&self, other: Vec2) -> f32 {
        self.0.distance(other)
    }
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half_extents: size * 0.5,
        }
    }

    /// Rectangle from its minimum corner and size.
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::new(min + size * 0.5, size)
    }

    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y
    }

    /// Overlap test for two rectangles (touching edges count).
    pub fn overlaps(&self, other: &Rect) -> bool {
        let d = (other.center - self.center).abs();
        let reach = self.half_extents + other.half_extents;
        d.x <= reach.x && d.y <= reach.y
    }
}

impl ScreenBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Bounds with each side raised to the minimum usable extent.
    pub fn clamped(&self) -> Self {
        Self {
            width: self.width.max(MIN_SCREEN_EXTENT),
            height: self.height.max(MIN_SCREEN_EXTENT),
        }
    }

    pub fn half(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_SCREEN_WIDTH,
            height: crate::constants::DEFAULT_SCREEN_HEIGHT,
        }
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds. Negative or non-finite deltas
    /// count as zero; oversized ones are clamped.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let dt = sanitize_delta(dt);
        self.tick += 1;
        self.elapsed_secs += dt;
        dt
    }
}

/// Clamp a frame delta into `[0, MAX_FRAME_DELTA_SECS]`.
pub fn sanitize_delta(dt: f64) -> f64 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DELTA_SECS)
    } else {
        0.0
    }
}
