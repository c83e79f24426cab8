//! Errors raised at the simulation's fallible edges.
//!
//! The tick itself never fails; out-of-range input is clamped instead.

/// Invalid or unreadable simulation configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid screen bounds: {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },
    #[error("Starting floor must be at least 1")]
    ZeroFloor,
}
