//! Floor tiers and the archetype-selection rule for each.

use rand::Rng;
use serde::{Deserialize, Serialize};

use lighthouse_core::enums::EnemyArchetype;

/// Floor tier determines which archetypes can appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyTier {
    /// Floors 1-5: slimes only.
    Novice,
    /// Floors 6-10: slime / skeleton alternating by slot.
    Apprentice,
    /// Floors 11-20: slime / skeleton / mage cycling by slot.
    Veteran,
    /// Floor 21 and up: any archetype, drawn from the RNG.
    Chaos,
}

impl EnemyTier {
    pub fn from_floor(floor: u32) -> Self {
        match floor {
            0..=5 => Self::Novice,
            6..=10 => Self::Apprentice,
            11..=20 => Self::Veteran,
            _ => Self::Chaos,
        }
    }

    /// Archetype for spawn slot `slot`. Only [`EnemyTier::Chaos`] consumes
    /// randomness.
    pub fn archetype_for_slot<R: Rng + ?Sized>(self, slot: usize, rng: &mut R) -> EnemyArchetype {
        match self {
            Self::Novice => EnemyArchetype::Slime,
            Self::Apprentice => {
                if slot % 2 == 0 {
                    EnemyArchetype::Slime
                } else {
                    EnemyArchetype::Skeleton
                }
            }
            Self::Veteran => match slot % 3 {
                0 => EnemyArchetype::Slime,
                1 => EnemyArchetype::Skeleton,
                _ => EnemyArchetype::Mage,
            },
            Self::Chaos => EnemyArchetype::ALL[rng.gen_range(0..EnemyArchetype::ALL.len())],
        }
    }
}
