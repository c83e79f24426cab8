//! Experience and leveling.

use hecs::{Entity, World};

use lighthouse_core::components::{CombatStats, Health, Progression};
use lighthouse_core::constants::*;
use lighthouse_core::events::GameEvent;

use crate::feedback::Feedback;
use crate::systems::cleanup::Kill;

/// Add experience. At most one level up per gain: on reaching the threshold
/// the level rises, experience resets to zero and the threshold grows.
/// Returns true on level up.
pub fn add_exp(progression: &mut Progression, amount: u32) -> bool {
    progression.exp = progression.exp.saturating_add(amount);
    if progression.exp < progression.max_exp {
        return false;
    }
    progression.level += 1;
    progression.exp = 0;
    progression.max_exp = (f64::from(progression.max_exp) * EXP_THRESHOLD_GROWTH) as u32;
    true
}

/// Stat bonuses of a level up. A dead player gains max HP but is not healed.
pub fn apply_level_up(health: &mut Health, stats: &mut CombatStats) {
    health.max += LEVEL_UP_HP_BONUS;
    if health.current > 0 {
        health.current = health.max;
    }
    stats.attack_power += LEVEL_UP_ATTACK_BONUS;
    stats.defense += LEVEL_UP_DEFENSE_BONUS;
}

/// Grant experience for this tick's kills to the player.
pub fn run(world: &mut World, player: Entity, kills: &[Kill], feedback: &mut Feedback) {
    for kill in kills {
        feedback.event(GameEvent::EnemyKilled {
            archetype: kill.archetype,
            position: kill.position,
            exp_reward: kill.exp_reward,
            fade_secs: DEATH_FADE_SECS,
        });
        feedback.message(format!("+{} EXP", kill.exp_reward), EXP_TEXT_SECS);
        tracing::debug!(archetype = ?kill.archetype, exp = kill.exp_reward, "enemy killed");

        let Ok((progression, health, stats)) =
            world.query_one_mut::<(&mut Progression, &mut Health, &mut CombatStats)>(player)
        else {
            continue;
        };
        if add_exp(progression, kill.exp_reward) {
            apply_level_up(health, stats);
            let level = progression.level;
            feedback.event(GameEvent::LevelUp { level });
            feedback.message(format!("LEVEL UP! Lv.{level}"), LEVEL_UP_TEXT_SECS);
            tracing::debug!(level, "player leveled up");
        }
    }
}
