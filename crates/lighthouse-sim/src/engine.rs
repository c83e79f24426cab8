//! Encounter engine: the core of the game.
//!
//! `EncounterEngine` owns the hecs ECS world, processes player commands, runs
//! all systems and produces `FrameSnapshot`s. Completely headless (no
//! renderer or physics dependency), enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lighthouse_core::commands::PlayerCommand;
use lighthouse_core::components::{Enemy, EnemyBrain, Health};
use lighthouse_core::constants::{FLOOR_TEXT_SECS, STAIRS_REJECT_TEXT_SECS};
use lighthouse_core::enums::{EncounterPhase, EnemyState};
use lighthouse_core::events::GameEvent;
use lighthouse_core::state::FrameSnapshot;
use lighthouse_core::types::{Position, ScreenBounds, SimTime, Velocity};

use lighthouse_procgen::generate_floor;

use crate::backend::{self, CollisionBackend};
use crate::config::SimConfig;
use crate::feedback::Feedback;
use crate::systems;
use crate::systems::player::{AutoFire, PlayerInput};
use crate::world_setup;

/// Result of trying to take the stairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StairsOutcome {
    /// Floor cleared; now on `floor`.
    Advanced { floor: u32 },
    /// Enemies still alive; nothing changed.
    Rejected { remaining: usize },
    /// Encounter is paused or defeated; nothing changed.
    Inactive,
}

/// The encounter engine. Owns the ECS world and all sim state.
pub struct EncounterEngine {
    world: World,
    time: SimTime,
    phase: EncounterPhase,
    floor: u32,
    bounds: ScreenBounds,
    rng: ChaCha8Rng,
    player: Entity,
    input: PlayerInput,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    feedback: Feedback,
}

impl EncounterEngine {
    /// Create an engine on the configured starting floor with a fresh player.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let floor = config.starting_floor.max(1);

        let layout = generate_floor(floor, config.bounds, &mut rng);
        world_setup::spawn_floor(&mut world, &layout);
        let player = world_setup::spawn_player(&mut world, layout.entry_point);

        let mut feedback = Feedback::default();
        feedback.event(GameEvent::FloorEntered { floor });
        feedback.message(format!("Floor {floor}"), FLOOR_TEXT_SECS);
        tracing::info!(floor, seed = config.seed, "encounter started");

        Self {
            world,
            time: SimTime::default(),
            phase: EncounterPhase::default(),
            floor,
            bounds: layout.bounds,
            rng,
            player,
            input: PlayerInput::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            feedback,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the encounter by `dt` seconds and return the resulting snapshot.
    /// `backend` reports the contacts that began during this tick.
    pub fn tick<B: CollisionBackend + ?Sized>(&mut self, dt: f64, backend: &mut B) -> FrameSnapshot {
        self.process_commands();

        if self.phase == EncounterPhase::Active {
            let dt = self.time.advance(dt);
            self.run_systems(dt, backend);
        }

        let (events, messages) = self.feedback.drain();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.floor,
            events,
            messages,
        )
    }

    /// Take the stairs. Only allowed while the encounter is active and once
    /// every enemy on the floor is dead; otherwise the player is told how
    /// many remain.
    pub fn advance_floor(&mut self) -> StairsOutcome {
        if self.phase != EncounterPhase::Active {
            return StairsOutcome::Inactive;
        }
        let remaining = self.enemies_remaining();
        if remaining > 0 {
            self.feedback.event(GameEvent::StairsRejected { remaining });
            self.feedback.message(
                format!("Defeat all enemies first! ({remaining} left)"),
                STAIRS_REJECT_TEXT_SECS,
            );
            tracing::debug!(remaining, floor = self.floor, "stairs rejected");
            return StairsOutcome::Rejected { remaining };
        }

        self.floor += 1;
        let layout = generate_floor(self.floor, self.bounds, &mut self.rng);

        // Discard everything from the old floor except the player
        self.despawn_buffer.clear();
        self.despawn_buffer.extend(
            self.world
                .iter()
                .map(|entity_ref| entity_ref.entity())
                .filter(|&entity| entity != self.player),
        );
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }

        world_setup::spawn_floor(&mut self.world, &layout);
        if let Ok(mut pos) = self.world.get::<&mut Position>(self.player) {
            pos.0 = layout.entry_point;
        }
        if let Ok(mut vel) = self.world.get::<&mut Velocity>(self.player) {
            vel.0 = Vec2::ZERO;
        }

        self.feedback.event(GameEvent::FloorEntered { floor: self.floor });
        self.feedback
            .message(format!("Floor {}", self.floor), FLOOR_TEXT_SECS);
        tracing::info!(floor = self.floor, "entered floor");

        StairsOutcome::Advanced { floor: self.floor }
    }

    /// Living enemies on the current floor.
    pub fn enemies_remaining(&self) -> usize {
        self.world
            .query::<(&Enemy, &EnemyBrain)>()
            .iter()
            .filter(|(_, (_, brain))| brain.state != EnemyState::Dead)
            .count()
    }

    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// The player entity.
    pub fn player(&self) -> Entity {
        self.player
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetMoveDirection { x, y } => {
                systems::player::set_move_direction(&mut self.world, self.player, Vec2::new(x, y));
            }
            PlayerCommand::FireAt { x, y } => {
                self.input.pending_shot = Some(Vec2::new(x, y));
            }
            PlayerCommand::StartAutoFire { x, y } => {
                let target = Vec2::new(x, y);
                // First shot goes out immediately, then pulses
                self.input.pending_shot = Some(target);
                self.input.auto_fire = Some(AutoFire::new(target));
            }
            PlayerCommand::StopAutoFire => {
                self.input.auto_fire = None;
            }
            PlayerCommand::SwitchWeapon { weapon } => {
                systems::player::switch_weapon(&mut self.world, self.player, weapon);
            }
            PlayerCommand::Pause => {
                if self.phase == EncounterPhase::Active {
                    self.phase = EncounterPhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == EncounterPhase::Paused {
                    self.phase = EncounterPhase::Active;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems<B: CollisionBackend + ?Sized>(&mut self, dt: f64, backend: &mut B) {
        let elapsed = self.time.elapsed_secs;

        // 1. Player movement intent and firing
        systems::player::run(&mut self.world, &mut self.input, elapsed, &mut self.feedback);
        // 2. Enemy AI against the pre-damage player position, then buffered attacks
        let player_position = systems::player::player_position(&self.world);
        let attacks = systems::enemy_ai::run(
            &mut self.world,
            player_position,
            elapsed,
            dt,
            &mut self.feedback,
        );
        systems::enemy_ai::apply_attacks(&mut self.world, self.player, attacks, &mut self.feedback);
        // 3. Projectile flight
        systems::projectiles::run(&mut self.world, dt);
        // 4. Movement integration
        systems::movement::run(&mut self.world, dt);
        // 5. Contact batch from the collision backend
        let colliders = backend::collect_colliders(&self.world);
        let pairs = backend.detect(&colliders);
        let contacts = systems::contacts::run(&mut self.world, &pairs, &mut self.feedback);
        self.check_defeat();
        // 6. Purge spent and stray projectiles
        let player_position = systems::player::player_position(&self.world);
        systems::cleanup::purge_projectiles(
            &mut self.world,
            player_position,
            &mut self.despawn_buffer,
        );
        // 7. Purge dead enemies, grant experience
        let kills = systems::cleanup::purge_dead_enemies(&mut self.world, &mut self.despawn_buffer);
        systems::progression::run(&mut self.world, self.player, &kills, &mut self.feedback);
        // 8. Stairs
        if contacts.stairs_requested {
            self.advance_floor();
        }
    }

    fn check_defeat(&mut self) {
        let dead = self
            .world
            .get::<&Health>(self.player)
            .map(|health| health.current == 0)
            .unwrap_or(false);
        if dead && self.phase != EncounterPhase::Defeated {
            self.phase = EncounterPhase::Defeated;
            tracing::info!(floor = self.floor, "player defeated");
        }
    }
}
