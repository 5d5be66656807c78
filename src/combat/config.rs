//! Per-battle session configuration
//!
//! Tower counts and active powers for each side. The engine never reads
//! ambient state; every resolution call receives one of these explicitly,
//! which keeps the whole pipeline referentially transparent.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Officer power activation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default)]
pub enum CoPower {
    #[default]
    None,
    Power,
    SuperPower,
}

impl CoPower {
    /// One-letter tag used in prompts and summaries.
    pub fn tag(self) -> char {
        match self {
            CoPower::None => 'N',
            CoPower::Power => 'Y',
            CoPower::SuperPower => 'S',
        }
    }
}

/// Which seat a unit occupies in the current resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Attacker,
    Defender,
}

impl Role {
    pub fn opposite(self) -> Role {
        match self {
            Role::Attacker => Role::Defender,
            Role::Defender => Role::Attacker,
        }
    }
}

/// Tower counts as seen from one unit's seat, for officer formulas that
/// scale with captured towers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TowerCounts {
    pub own: u32,
    pub opposing: u32,
}

/// Session state for one battle: captured towers and active powers per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatConfig {
    pub attacker_towers: u32,
    pub defender_towers: u32,
    pub attacker_power: CoPower,
    pub defender_power: CoPower,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            attacker_towers: 1,
            defender_towers: 1,
            attacker_power: CoPower::None,
            defender_power: CoPower::None,
        }
    }
}

impl CombatConfig {
    /// Tower count for the given seat.
    pub fn towers(&self, role: Role) -> u32 {
        match role {
            Role::Attacker => self.attacker_towers,
            Role::Defender => self.defender_towers,
        }
    }

    /// Tower counts as seen from the given seat.
    pub fn tower_counts(&self, role: Role) -> TowerCounts {
        TowerCounts {
            own: self.towers(role),
            opposing: self.towers(role.opposite()),
        }
    }

    /// Default power for the given seat, used when a unit snapshot carries
    /// no explicit override.
    pub fn power(&self, role: Role) -> CoPower {
        match role {
            Role::Attacker => self.attacker_power,
            Role::Defender => self.defender_power,
        }
    }

    /// Exchange the two sides. `battle` applies this when round parity
    /// swaps roles, so an army's towers and power follow the army.
    pub fn swapped(&self) -> CombatConfig {
        CombatConfig {
            attacker_towers: self.defender_towers,
            defender_towers: self.attacker_towers,
            attacker_power: self.defender_power,
            defender_power: self.attacker_power,
        }
    }

    /// Short tag like `11NN`: towers then powers, attacker first.
    pub fn tag(&self) -> String {
        format!(
            "{}{}{}{}",
            self.attacker_towers,
            self.defender_towers,
            self.attacker_power.tag(),
            self.defender_power.tag()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = CombatConfig::default();
        assert_eq!(cfg.attacker_towers, 1);
        assert_eq!(cfg.defender_towers, 1);
        assert_eq!(cfg.power(Role::Attacker), CoPower::None);
        assert_eq!(cfg.tag(), "11NN");
    }

    #[test]
    fn test_swapped_exchanges_sides() {
        let cfg = CombatConfig {
            attacker_towers: 3,
            defender_towers: 0,
            attacker_power: CoPower::SuperPower,
            defender_power: CoPower::None,
        };
        let swapped = cfg.swapped();
        assert_eq!(swapped.attacker_towers, 0);
        assert_eq!(swapped.defender_towers, 3);
        assert_eq!(swapped.attacker_power, CoPower::None);
        assert_eq!(swapped.defender_power, CoPower::SuperPower);
        assert_eq!(swapped.swapped(), cfg);
    }

    #[test]
    fn test_tower_counts_by_role() {
        let cfg = CombatConfig {
            attacker_towers: 2,
            defender_towers: 5,
            ..CombatConfig::default()
        };
        let counts = cfg.tower_counts(Role::Defender);
        assert_eq!(counts.own, 5);
        assert_eq!(counts.opposing, 2);
    }
}
