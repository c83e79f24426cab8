//! Control API: start the loop, send commands, poll snapshots.
//!
//! Thin bridge from a front end to the game loop thread via channels.

use lighthouse_core::commands::PlayerCommand;
use lighthouse_core::state::FrameSnapshot;
use lighthouse_sim::SimConfig;

use crate::error::AppError;
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Fails if it is already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), AppError> {
    let mut tx_lock = state.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;
    if tx_lock.is_some() {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())?;
    *tx_lock = Some(cmd_tx);
    *state.loop_handle.lock().map_err(|_| AppError::LockPoisoned)? = Some(handle);
    Ok(())
}

/// Forward a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;
    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::Player(command))
            .map_err(|_| AppError::ChannelClosed),
        None => Err(AppError::NotStarted),
    }
}

/// Latest snapshot, if the loop has produced one.
pub fn get_snapshot(state: &AppState) -> Result<Option<FrameSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock().map_err(|_| AppError::LockPoisoned)?;
    Ok(lock.clone())
}

/// Stop the loop thread and wait for it. Stopping a stopped simulation is a no-op.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let tx = state
        .command_tx
        .lock()
        .map_err(|_| AppError::LockPoisoned)?
        .take();
    if let Some(tx) = tx {
        // The loop may already have exited on its own
        let _ = tx.send(GameLoopCommand::Shutdown);
    }

    let handle = state
        .loop_handle
        .lock()
        .map_err(|_| AppError::LockPoisoned)?
        .take();
    if let Some(handle) = handle {
        if handle.join().is_err() {
            tracing::warn!("game loop thread panicked");
        }
    }
    Ok(())
}
