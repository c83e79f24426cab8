//! Headless Lighthouse runner.
//!
//! Usage: `lighthouse-app [config.json] [seconds]`
//!
//! Starts an encounter, holds auto-fire towards the stairs and logs a status
//! line once a second until the time runs out or the player is defeated.
//! Set `RUST_LOG` to adjust verbosity.

use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

use lighthouse_app::control;
use lighthouse_app::error::AppError;
use lighthouse_app::state::AppState;
use lighthouse_core::commands::PlayerCommand;
use lighthouse_core::enums::EncounterPhase;
use lighthouse_sim::SimConfig;

const DEFAULT_RUN_SECS: u64 = 10;

fn main() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::from_json_str(&std::fs::read_to_string(&path)?)?,
        None => SimConfig::default(),
    };
    let run_for = Duration::from_secs(
        args.next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RUN_SECS),
    );

    let state = AppState::new();
    control::start_simulation(&state, config)?;
    control::send_command(&state, PlayerCommand::StartAutoFire { x: 0.0, y: 0.0 })?;

    let started = Instant::now();
    while started.elapsed() < run_for {
        std::thread::sleep(Duration::from_secs(1));
        let Some(snap) = control::get_snapshot(&state)? else {
            continue;
        };
        tracing::info!(
            floor = snap.floor,
            hp = snap.player.hp,
            level = snap.player.level,
            enemies = snap.enemies_remaining,
            projectiles = snap.projectiles.len(),
            "status"
        );
        if snap.phase == EncounterPhase::Defeated {
            break;
        }
    }

    control::stop_simulation(&state)
}
