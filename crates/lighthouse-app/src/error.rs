//! Host-level errors.

use lighthouse_sim::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Simulation already running")]
    AlreadyRunning,
    #[error("Simulation not started")]
    NotStarted,
    #[error("Game loop channel closed")]
    ChannelClosed,
    #[error("Shared state lock poisoned")]
    LockPoisoned,
}
