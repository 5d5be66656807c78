//! Terrain kinds and their defensive value
//!
//! Terrain contributes `defense` points per displayed hit point to the
//! occupying unit's defense rating.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Every terrain kind a unit can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default)]
pub enum TerrainKind {
    Plains,
    Mountain,
    Forest,
    River,
    Road,
    Bridge,
    Ocean,
    #[default]
    Shoal,
    Reef,
    City,
    Base,
    Airport,
    Port,
    Hq,
    Pipe,
    Silo,
    ComTower,
    Lab,
}

/// Static facts about one terrain kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TerrainData {
    pub name: &'static str,
    pub defense: u8,
}

/// Terrain table, indexed by `TerrainKind` discriminant.
pub static TERRAIN_DATA: [TerrainData; 18] = [
    TerrainData { name: "Plains", defense: 1 },
    TerrainData { name: "Mountain", defense: 4 },
    TerrainData { name: "Forest", defense: 2 },
    TerrainData { name: "River", defense: 0 },
    TerrainData { name: "Road", defense: 0 },
    TerrainData { name: "Bridge", defense: 0 },
    TerrainData { name: "Ocean", defense: 0 },
    TerrainData { name: "Shoal", defense: 0 },
    TerrainData { name: "Reef", defense: 1 },
    TerrainData { name: "City", defense: 3 },
    TerrainData { name: "Base", defense: 3 },
    TerrainData { name: "Airport", defense: 3 },
    TerrainData { name: "Port", defense: 3 },
    TerrainData { name: "HQ", defense: 4 },
    TerrainData { name: "Pipe", defense: 0 },
    TerrainData { name: "Silo", defense: 3 },
    TerrainData { name: "Com. Tower", defense: 3 },
    TerrainData { name: "Lab", defense: 3 },
];

impl TerrainKind {
    pub fn data(self) -> &'static TerrainData {
        &TERRAIN_DATA[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }

    /// Defense points granted per displayed hit point.
    pub fn defense(self) -> u8 {
        self.data().defense
    }

    /// Built-up terrain, relevant to officers with urban-combat bonuses.
    pub fn is_urban(self) -> bool {
        matches!(
            self,
            TerrainKind::City
                | TerrainKind::Base
                | TerrainKind::Airport
                | TerrainKind::Port
                | TerrainKind::Hq
                | TerrainKind::ComTower
                | TerrainKind::Lab
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defense_values() {
        assert_eq!(TerrainKind::Mountain.defense(), 4);
        assert_eq!(TerrainKind::Road.defense(), 0);
        assert_eq!(TerrainKind::Hq.defense(), 4);
    }

    #[test]
    fn test_urban_predicate() {
        assert!(TerrainKind::City.is_urban());
        assert!(TerrainKind::Lab.is_urban());
        assert!(!TerrainKind::Silo.is_urban());
        assert!(!TerrainKind::Plains.is_urban());
    }

    #[test]
    fn test_default_is_shoal() {
        assert_eq!(TerrainKind::default(), TerrainKind::Shoal);
    }
}
