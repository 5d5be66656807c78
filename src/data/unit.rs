//! Unit kinds and their base stats
//!
//! Static reference data consulted read-only by modifier and damage
//! resolution. The class predicates (`is_air`, `is_indirect`, ...) are what
//! officer formulas dispatch on.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a unit moves; determines its broad class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveClass {
    Treads,
    Air,
    Ship,
    Lander,
    Foot,
    Boot,
    Wheels,
    Piperunner,
}

/// Every unit kind in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum UnitKind {
    AntiAir,
    Apc,
    Artillery,
    BCopter,
    Battleship,
    BlackBoat,
    BlackBomb,
    Bomber,
    Carrier,
    Cruiser,
    Fighter,
    Infantry,
    Lander,
    MdTank,
    Mech,
    MegaTank,
    Missile,
    Neotank,
    Piperunner,
    Recon,
    Rocket,
    Stealth,
    Sub,
    TCopter,
    Tank,
}

/// Base stats for one unit kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitData {
    pub name: &'static str,
    pub movement: u8,
    pub ammo: u8,
    pub fuel: u8,
    pub fuel_use: u8,
    pub vision: u8,
    pub min_range: u8,
    pub max_range: u8,
    pub move_class: MoveClass,
    pub cost: u32,
}

/// Stat table, indexed by `UnitKind` discriminant.
pub static UNIT_DATA: [UnitData; 25] = [
    UnitData { name: "Anti-Air", movement: 6, ammo: 9, fuel: 60, fuel_use: 0, vision: 2, min_range: 0, max_range: 0, move_class: MoveClass::Treads, cost: 8000 },
    UnitData { name: "APC", movement: 6, ammo: 0, fuel: 70, fuel_use: 0, vision: 1, min_range: 0, max_range: 0, move_class: MoveClass::Treads, cost: 5000 },
    UnitData { name: "Artillery", movement: 5, ammo: 9, fuel: 50, fuel_use: 0, vision: 1, min_range: 2, max_range: 3, move_class: MoveClass::Treads, cost: 6000 },
    UnitData { name: "B-Copter", movement: 6, ammo: 6, fuel: 99, fuel_use: 2, vision: 3, min_range: 0, max_range: 0, move_class: MoveClass::Air, cost: 9000 },
    UnitData { name: "Battleship", movement: 5, ammo: 9, fuel: 99, fuel_use: 1, vision: 2, min_range: 2, max_range: 6, move_class: MoveClass::Ship, cost: 28000 },
    UnitData { name: "Black Boat", movement: 7, ammo: 0, fuel: 60, fuel_use: 1, vision: 1, min_range: 0, max_range: 0, move_class: MoveClass::Lander, cost: 7500 },
    UnitData { name: "Black Bomb", movement: 9, ammo: 0, fuel: 45, fuel_use: 5, vision: 1, min_range: 0, max_range: 0, move_class: MoveClass::Air, cost: 25000 },
    UnitData { name: "Bomber", movement: 7, ammo: 9, fuel: 99, fuel_use: 5, vision: 2, min_range: 0, max_range: 0, move_class: MoveClass::Air, cost: 22000 },
    UnitData { name: "Carrier", movement: 5, ammo: 9, fuel: 99, fuel_use: 1, vision: 4, min_range: 3, max_range: 8, move_class: MoveClass::Ship, cost: 30000 },
    UnitData { name: "Cruiser", movement: 6, ammo: 9, fuel: 99, fuel_use: 1, vision: 3, min_range: 0, max_range: 0, move_class: MoveClass::Ship, cost: 18000 },
    UnitData { name: "Fighter", movement: 9, ammo: 9, fuel: 99, fuel_use: 5, vision: 2, min_range: 0, max_range: 0, move_class: MoveClass::Air, cost: 20000 },
    UnitData { name: "Infantry", movement: 3, ammo: 0, fuel: 99, fuel_use: 0, vision: 2, min_range: 0, max_range: 0, move_class: MoveClass::Foot, cost: 1000 },
    UnitData { name: "Lander", movement: 6, ammo: 0, fuel: 99, fuel_use: 1, vision: 1, min_range: 0, max_range: 0, move_class: MoveClass::Lander, cost: 12000 },
    UnitData { name: "Md.Tank", movement: 5, ammo: 8, fuel: 50, fuel_use: 0, vision: 1, min_range: 0, max_range: 0, move_class: MoveClass::Treads, cost: 16000 },
    UnitData { name: "Mech", movement: 2, ammo: 3, fuel: 70, fuel_use: 0, vision: 2, min_range: 0, max_range: 0, move_class: MoveClass::Boot, cost: 3000 },
    UnitData { name: "Mega Tank", movement: 4, ammo: 3, fuel: 50, fuel_use: 0, vision: 1, min_range: 0, max_range: 0, move_class: MoveClass::Treads, cost: 28000 },
    UnitData { name: "Missile", movement: 4, ammo: 6, fuel: 50, fuel_use: 0, vision: 5, min_range: 3, max_range: 5, move_class: MoveClass::Wheels, cost: 12000 },
    UnitData { name: "Neotank", movement: 6, ammo: 9, fuel: 99, fuel_use: 1, vision: 1, min_range: 0, max_range: 0, move_class: MoveClass::Treads, cost: 22000 },
    UnitData { name: "Piperunner", movement: 9, ammo: 9, fuel: 99, fuel_use: 0, vision: 4, min_range: 2, max_range: 5, move_class: MoveClass::Piperunner, cost: 20000 },
    UnitData { name: "Recon", movement: 8, ammo: 0, fuel: 80, fuel_use: 0, vision: 5, min_range: 0, max_range: 0, move_class: MoveClass::Wheels, cost: 4000 },
    UnitData { name: "Rocket", movement: 5, ammo: 6, fuel: 50, fuel_use: 0, vision: 1, min_range: 3, max_range: 5, move_class: MoveClass::Wheels, cost: 15000 },
    UnitData { name: "Stealth", movement: 6, ammo: 6, fuel: 60, fuel_use: 5, vision: 4, min_range: 0, max_range: 0, move_class: MoveClass::Air, cost: 24000 },
    UnitData { name: "Sub", movement: 5, ammo: 6, fuel: 60, fuel_use: 1, vision: 5, min_range: 0, max_range: 0, move_class: MoveClass::Ship, cost: 20000 },
    UnitData { name: "T-Copter", movement: 6, ammo: 0, fuel: 99, fuel_use: 2, vision: 2, min_range: 0, max_range: 0, move_class: MoveClass::Air, cost: 5000 },
    UnitData { name: "Tank", movement: 6, ammo: 9, fuel: 70, fuel_use: 0, vision: 3, min_range: 0, max_range: 0, move_class: MoveClass::Treads, cost: 7000 },
];

impl UnitKind {
    /// All kinds in table order.
    pub const ALL: [UnitKind; 25] = [
        UnitKind::AntiAir,
        UnitKind::Apc,
        UnitKind::Artillery,
        UnitKind::BCopter,
        UnitKind::Battleship,
        UnitKind::BlackBoat,
        UnitKind::BlackBomb,
        UnitKind::Bomber,
        UnitKind::Carrier,
        UnitKind::Cruiser,
        UnitKind::Fighter,
        UnitKind::Infantry,
        UnitKind::Lander,
        UnitKind::MdTank,
        UnitKind::Mech,
        UnitKind::MegaTank,
        UnitKind::Missile,
        UnitKind::Neotank,
        UnitKind::Piperunner,
        UnitKind::Recon,
        UnitKind::Rocket,
        UnitKind::Stealth,
        UnitKind::Sub,
        UnitKind::TCopter,
        UnitKind::Tank,
    ];

    /// Base stats for this kind.
    pub fn data(self) -> &'static UnitData {
        &UNIT_DATA[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }

    pub fn is_air(self) -> bool {
        self.data().move_class == MoveClass::Air
    }

    pub fn is_sea(self) -> bool {
        matches!(self.data().move_class, MoveClass::Ship | MoveClass::Lander)
    }

    pub fn is_infantry(self) -> bool {
        matches!(self, UnitKind::Infantry | UnitKind::Mech)
    }

    pub fn is_vehicle(self) -> bool {
        matches!(
            self.data().move_class,
            MoveClass::Treads | MoveClass::Wheels | MoveClass::Piperunner
        )
    }

    pub fn is_copter(self) -> bool {
        matches!(self, UnitKind::BCopter | UnitKind::TCopter)
    }

    /// Indirect-fire units attack from range and never counterattack.
    pub fn is_indirect(self) -> bool {
        matches!(
            self,
            UnitKind::Artillery
                | UnitKind::Rocket
                | UnitKind::Missile
                | UnitKind::Piperunner
                | UnitKind::Battleship
                | UnitKind::Carrier
        )
    }

    pub fn is_direct(self) -> bool {
        !self.is_indirect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_lookup_matches_kind() {
        assert_eq!(UnitKind::Tank.data().name, "Tank");
        assert_eq!(UnitKind::Tank.data().cost, 7000);
        assert_eq!(UnitKind::Carrier.data().max_range, 8);
    }

    #[test]
    fn test_all_covers_table() {
        assert_eq!(UnitKind::ALL.len(), UNIT_DATA.len());
        for (i, kind) in UnitKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
    }

    #[test]
    fn test_class_predicates() {
        assert!(UnitKind::Bomber.is_air());
        assert!(UnitKind::Lander.is_sea());
        assert!(UnitKind::Mech.is_infantry());
        assert!(UnitKind::Piperunner.is_vehicle());
        assert!(UnitKind::TCopter.is_copter());
        assert!(UnitKind::Battleship.is_indirect());
        assert!(UnitKind::Tank.is_direct());
        assert!(!UnitKind::Infantry.is_vehicle());
    }
}
