//! Static reference tables: unit stats, terrain stats, base damage

pub mod damage;
pub mod terrain;
pub mod unit;

pub use damage::base_damage;
pub use terrain::{TerrainData, TerrainKind, TERRAIN_DATA};
pub use unit::{MoveClass, UnitData, UnitKind, UNIT_DATA};
