//! State shared between the control API and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use lighthouse_core::commands::PlayerCommand;
use lighthouse_core::state::FrameSnapshot;

/// Messages sent from the control API to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Forward to the encounter engine.
    Player(PlayerCommand),
    /// Stop the loop thread.
    Shutdown,
}

/// Shared host state.
///
/// The sender sits behind a `Mutex` so the whole struct is `Sync`. The latest
/// snapshot is shared with the loop thread, which overwrites it every tick.
pub struct AppState {
    /// `None` until the simulation is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
