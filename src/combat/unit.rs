//! Unit snapshots
//!
//! A `Unit` is an immutable value: kind, officer, power override, terrain,
//! and a raw hit-point distribution. Raw HP is stored at 10x the displayed
//! resolution so fractional displayed HP survives partial damage. Every
//! transform returns a new snapshot.

use std::sync::Arc;

use crate::data::{TerrainData, TerrainKind, UnitData, UnitKind};
use crate::dist::Dist;

use super::config::CoPower;
use super::officer::CommandingOfficer;

/// One displayed hit point is this many raw hit points.
pub const RAW_HP_PER_DISPLAYED: f64 = 10.0;

/// A unit in a specific combat situation.
#[derive(Debug, Clone)]
pub struct Unit {
    kind: UnitKind,
    officer: Arc<CommandingOfficer>,
    power: Option<CoPower>,
    terrain: TerrainKind,
    raw_hp: Dist,
}

/// One change to apply to a snapshot.
///
/// Tagged so a caller can stage a heterogeneous list of changes and apply
/// them in one pass with `apply_all`.
#[derive(Debug, Clone)]
pub enum UnitModifier {
    Officer(Arc<CommandingOfficer>),
    Power(CoPower),
    Terrain(TerrainKind),
    Hp(u32),
    RawHp(Dist),
}

impl Unit {
    /// Fresh full-strength unit: standard officer, no power, shoal terrain.
    pub fn new(kind: UnitKind) -> Self {
        Self {
            kind,
            officer: Arc::new(CommandingOfficer::standard()),
            power: None,
            terrain: TerrainKind::default(),
            raw_hp: Dist::exactly(100.0),
        }
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn data(&self) -> &'static UnitData {
        self.kind.data()
    }

    pub fn officer(&self) -> &Arc<CommandingOfficer> {
        &self.officer
    }

    /// Explicit power override; when `None` the session default for the
    /// unit's seat applies.
    pub fn power(&self) -> Option<CoPower> {
        self.power
    }

    pub fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    pub fn terrain_data(&self) -> &'static TerrainData {
        self.terrain.data()
    }

    /// Raw hit points at 10x display resolution.
    pub fn raw_hp(&self) -> &Dist {
        &self.raw_hp
    }

    pub fn with_officer(&self, officer: Arc<CommandingOfficer>) -> Self {
        Self {
            officer,
            ..self.clone()
        }
    }

    pub fn with_power(&self, power: CoPower) -> Self {
        Self {
            power: Some(power),
            ..self.clone()
        }
    }

    pub fn with_terrain(&self, terrain: TerrainKind) -> Self {
        Self {
            terrain,
            ..self.clone()
        }
    }

    /// Deterministic displayed HP.
    pub fn with_hp(&self, displayed: u32) -> Self {
        self.with_raw_hp(Dist::exactly(f64::from(displayed) * RAW_HP_PER_DISPLAYED))
    }

    pub fn with_raw_hp(&self, raw_hp: Dist) -> Self {
        Self {
            raw_hp,
            ..self.clone()
        }
    }

    /// Shift raw HP by a deterministic displayed amount (repairs, damage).
    pub fn add_hp(&self, displayed: i32) -> Self {
        self.with_raw_hp(&self.raw_hp + f64::from(displayed) * RAW_HP_PER_DISPLAYED)
    }

    /// Add an uncertain raw-HP amount (independent draw).
    pub fn add_raw_hp(&self, addition: &Dist) -> Self {
        self.with_raw_hp(&self.raw_hp + addition)
    }

    pub fn apply(&self, modifier: UnitModifier) -> Self {
        match modifier {
            UnitModifier::Officer(officer) => self.with_officer(officer),
            UnitModifier::Power(power) => self.with_power(power),
            UnitModifier::Terrain(terrain) => self.with_terrain(terrain),
            UnitModifier::Hp(displayed) => self.with_hp(displayed),
            UnitModifier::RawHp(raw) => self.with_raw_hp(raw),
        }
    }

    pub fn apply_all<I>(&self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = UnitModifier>,
    {
        modifiers
            .into_iter()
            .fold(self.clone(), |unit, m| unit.apply(m))
    }

    /// Displayed HP with the raw-HP weights intact: each raw value maps to
    /// the displayed step it belongs to (partial points round up).
    pub fn displayed_hp_raw(&self) -> Dist {
        (&self.raw_hp / RAW_HP_PER_DISPLAYED).ceil()
    }

    /// Normalized displayed-HP distribution.
    pub fn displayed_hp(&self) -> Dist {
        self.displayed_hp_raw().normalize()
    }

    /// Keep only the raw-HP mass belonging to one displayed-HP step.
    ///
    /// Displayed value `d` covers raw values `(d-1)*10+1 ..= d*10`. The
    /// result is an unnormalized fragment; weights are untouched so the
    /// fragments of all displayed values vector-add back to the original.
    pub fn truncate_hp(&self, displayed: i64) -> Self {
        let lo = ((displayed - 1) * 10 + 1) as f64;
        let hi = (displayed * 10) as f64;
        self.with_raw_hp(self.raw_hp.truncate(lo..=hi))
    }

    pub fn is_air(&self) -> bool {
        self.kind.is_air()
    }

    pub fn is_sea(&self) -> bool {
        self.kind.is_sea()
    }

    pub fn is_infantry(&self) -> bool {
        self.kind.is_infantry()
    }

    pub fn is_vehicle(&self) -> bool {
        self.kind.is_vehicle()
    }

    pub fn is_copter(&self) -> bool {
        self.kind.is_copter()
    }

    pub fn is_indirect(&self) -> bool {
        self.kind.is_indirect()
    }

    pub fn is_direct(&self) -> bool {
        self.kind.is_direct()
    }
}
