//! Combat resolution
//!
//! Modifier resolution turns a unit pair plus session config into ratings;
//! the damage pipeline turns ratings into a damage distribution; the
//! exchange engine threads hit-point distributions through one or more
//! strikes.

pub mod config;
pub mod damage;
pub mod exchange;
pub mod officer;
pub mod rating;
pub mod roster;
pub mod unit;

pub use config::{CoPower, CombatConfig, Role, TowerCounts};
pub use damage::{damage_to, DAMAGE_ROUND_UP_THRESHOLD};
pub use exchange::battle;
pub use officer::{standard_luck, CommandingOfficer, OfficerFormula, StatPair};
pub use rating::{attack_rating, defense_rating};
pub use unit::{Unit, UnitModifier, RAW_HP_PER_DISPLAYED};
