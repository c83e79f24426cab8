//! Game loop thread: runs the encounter engine at the target frame rate and
//! publishes snapshots.
//!
//! The engine is created inside the thread so it never crosses threads.
//! Commands arrive via `mpsc`. Each tick measures its real delta with a
//! `FrameClock`, so a late frame integrates a longer (clamped) step instead of
//! being dropped.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use lighthouse_core::constants::TARGET_FRAME_RATE;
use lighthouse_core::state::FrameSnapshot;
use lighthouse_sim::{EncounterEngine, FrameClock, SimConfig};

use crate::contacts::AabbContactBackend;
use crate::error::AppError;
use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FRAME_RATE as u64);

/// Spawn the game loop thread. Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    config.validate()?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("lighthouse-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until `Shutdown` or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    let mut engine = EncounterEngine::new(config);
    let mut backend = AabbContactBackend::new();
    let mut clock = FrameClock::new();
    let mut next_frame_time = Instant::now();
    let mut last_phase = engine.phase();
    tracing::info!(seed = config.seed, "game loop started");

    loop {
        // 1. Drain pending commands
        if !drain_commands(&cmd_rx, &mut engine) {
            tracing::info!(floor = engine.floor(), "game loop stopped");
            return;
        }

        // 2. Advance one frame (engine handles pause internally)
        let dt = clock.tick();
        let snapshot = engine.tick(dt, &mut backend);

        if snapshot.phase != last_phase {
            tracing::info!(phase = ?snapshot.phase, floor = snapshot.floor, "phase changed");
            last_phase = snapshot.phase;
        }

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, reset instead of spiralling
            next_frame_time = now;
        }
    }
}

/// Forward queued commands to the engine. Returns false when the loop
/// should stop.
fn drain_commands(cmd_rx: &mpsc::Receiver<GameLoopCommand>, engine: &mut EncounterEngine) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}
