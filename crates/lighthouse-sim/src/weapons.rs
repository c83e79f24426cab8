//! Player weapon table.

use lighthouse_core::enums::{ProjectileBehavior, WeaponKind};

/// Firing characteristics of a player weapon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponStats {
    /// Minimum seconds between shots.
    pub fire_interval_secs: f64,
    pub damage: u32,
    pub range: f32,
    /// `SpreadMember` means the weapon fires a fan of pellets.
    pub behavior: ProjectileBehavior,
}

pub fn weapon_stats(weapon: WeaponKind) -> WeaponStats {
    match weapon {
        WeaponKind::Pistol => WeaponStats {
            fire_interval_secs: 0.3,
            damage: 15,
            range: 200.0,
            behavior: ProjectileBehavior::Standard,
        },
        WeaponKind::Rifle => WeaponStats {
            fire_interval_secs: 0.15,
            damage: 12,
            range: 250.0,
            behavior: ProjectileBehavior::Standard,
        },
        WeaponKind::Shotgun => WeaponStats {
            fire_interval_secs: 0.8,
            damage: 25,
            range: 120.0,
            behavior: ProjectileBehavior::SpreadMember,
        },
        WeaponKind::Sniper => WeaponStats {
            fire_interval_secs: 1.2,
            damage: 40,
            range: 400.0,
            behavior: ProjectileBehavior::Piercing,
        },
    }
}
