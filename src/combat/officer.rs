//! Commanding officers
//!
//! An officer is an immutable bundle of pure combat formulas: a luck
//! distribution added to damage, an optional base-stat override, and boost
//! formulas that apply only while the matching power is active. Officers are
//! shared by `Arc` across any number of unit snapshots.

use std::sync::Arc;

use crate::core::{CalcError, Result};
use crate::dist::Dist;

use super::config::{CoPower, TowerCounts};
use super::unit::Unit;

/// (attack%, defense%) pair produced by every officer formula.
pub type StatPair = (i32, i32);

/// The shapes an officer formula can declare.
///
/// Formula arity is part of the officer's definition, not discovered at
/// call time: a self-only formula never sees the opponent, an
/// opponent-aware one always does, and a tower-aware one additionally
/// receives the tower counts from its unit's seat. `Unimplemented` marks a
/// capability the officer is known to have but which is not modeled; it
/// only errors when actually invoked.
#[derive(Debug, Clone, Copy)]
pub enum OfficerFormula {
    SelfOnly(fn(&Unit) -> StatPair),
    VersusOpponent(fn(&Unit, &Unit) -> StatPair),
    VersusWithTowers(fn(&Unit, &Unit, TowerCounts) -> StatPair),
    Unimplemented,
}

impl OfficerFormula {
    fn eval(
        &self,
        officer: &'static str,
        capability: &'static str,
        unit: &Unit,
        opponent: &Unit,
        towers: TowerCounts,
    ) -> Result<StatPair> {
        match self {
            OfficerFormula::SelfOnly(f) => Ok(f(unit)),
            OfficerFormula::VersusOpponent(f) => Ok(f(unit, opponent)),
            OfficerFormula::VersusWithTowers(f) => Ok(f(unit, opponent, towers)),
            OfficerFormula::Unimplemented => {
                Err(CalcError::UnimplementedCapability { officer, capability })
            }
        }
    }
}

/// A named officer and their combat formulas.
#[derive(Debug, Clone)]
pub struct CommandingOfficer {
    pub name: &'static str,
    /// Overrides the session tower count for this officer when set.
    pub towers: Option<u32>,
    /// Luck damage added before defense applies. Usually `die(10) - 1`.
    pub luck: Dist,
    pub stat_override: Option<OfficerFormula>,
    pub power_boost: Option<OfficerFormula>,
    pub super_power_boost: Option<OfficerFormula>,
}

impl Default for CommandingOfficer {
    fn default() -> Self {
        Self::standard()
    }
}

impl CommandingOfficer {
    /// Neutral 100/100 officer with standard luck and standard boosts.
    pub fn standard() -> Self {
        Self {
            name: "Standard",
            towers: None,
            luck: standard_luck(),
            stat_override: None,
            power_boost: None,
            super_power_boost: None,
        }
    }

    /// Base (attack%, defense%) for `unit` against `opponent`.
    pub fn stats(&self, unit: &Unit, opponent: &Unit, towers: TowerCounts) -> Result<StatPair> {
        match &self.stat_override {
            Some(f) => f.eval(self.name, "stat override", unit, opponent, towers),
            None => Ok((100, 100)),
        }
    }

    /// Boost (attack%, defense%) for the given power level. No power, no
    /// boost. A missing super power formula falls back to the power one;
    /// with neither defined the standard (10, 10) applies.
    pub fn boost(
        &self,
        unit: &Unit,
        opponent: &Unit,
        power: CoPower,
        towers: TowerCounts,
    ) -> Result<StatPair> {
        let (formula, capability) = match power {
            CoPower::None => return Ok((0, 0)),
            CoPower::Power => (self.power_boost.as_ref(), "power boost"),
            CoPower::SuperPower => (
                self.super_power_boost.as_ref().or(self.power_boost.as_ref()),
                "super power boost",
            ),
        };
        match formula {
            Some(f) => f.eval(self.name, capability, unit, opponent, towers),
            None => Ok((10, 10)),
        }
    }

    /// Flat rating bonus from captured towers: 10 points each, using the
    /// officer's own override when one is set.
    pub fn tower_bonus(&self, side_towers: u32) -> i32 {
        10 * self.towers.unwrap_or(side_towers) as i32
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// `die(10) - 1`: uniform 0..=9 luck damage.
pub fn standard_luck() -> Dist {
    Dist::die(10) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::UnitKind;

    fn units() -> (Unit, Unit) {
        (Unit::new(UnitKind::Tank), Unit::new(UnitKind::Infantry))
    }

    fn towers() -> TowerCounts {
        TowerCounts { own: 1, opposing: 1 }
    }

    #[test]
    fn test_standard_officer_stats() {
        let co = CommandingOfficer::standard();
        let (unit, opponent) = units();
        assert_eq!(co.stats(&unit, &opponent, towers()).unwrap(), (100, 100));
        assert_eq!(
            co.boost(&unit, &opponent, CoPower::None, towers()).unwrap(),
            (0, 0)
        );
        assert_eq!(
            co.boost(&unit, &opponent, CoPower::Power, towers()).unwrap(),
            (10, 10)
        );
    }

    #[test]
    fn test_super_power_falls_back_to_power() {
        let co = CommandingOfficer {
            power_boost: Some(OfficerFormula::SelfOnly(|_| (25, 15))),
            ..CommandingOfficer::standard()
        };
        let (unit, opponent) = units();
        assert_eq!(
            co.boost(&unit, &opponent, CoPower::SuperPower, towers())
                .unwrap(),
            (25, 15)
        );
    }

    #[test]
    fn test_opponent_aware_formula_sees_opponent() {
        let co = CommandingOfficer {
            stat_override: Some(OfficerFormula::VersusOpponent(|_, other| {
                if other.is_indirect() {
                    (100, 120)
                } else {
                    (100, 100)
                }
            })),
            ..CommandingOfficer::standard()
        };
        let unit = Unit::new(UnitKind::Tank);
        let arty = Unit::new(UnitKind::Artillery);
        let inf = Unit::new(UnitKind::Infantry);
        assert_eq!(co.stats(&unit, &arty, towers()).unwrap(), (100, 120));
        assert_eq!(co.stats(&unit, &inf, towers()).unwrap(), (100, 100));
    }

    #[test]
    fn test_unimplemented_errors_lazily() {
        let co = CommandingOfficer {
            name: "Test",
            super_power_boost: Some(OfficerFormula::Unimplemented),
            ..CommandingOfficer::standard()
        };
        let (unit, opponent) = units();
        // Fine until the super power is actually asked for.
        assert!(co.boost(&unit, &opponent, CoPower::Power, towers()).is_ok());
        let err = co
            .boost(&unit, &opponent, CoPower::SuperPower, towers())
            .unwrap_err();
        assert!(err.to_string().contains("Test"));
        assert!(err.to_string().contains("super power boost"));
    }

    #[test]
    fn test_tower_bonus_override() {
        let mut co = CommandingOfficer::standard();
        assert_eq!(co.tower_bonus(3), 30);
        co.towers = Some(0);
        assert_eq!(co.tower_bonus(3), 0);
    }

    #[test]
    fn test_standard_luck_shape() {
        let luck = standard_luck();
        assert_eq!(luck.bucket_count(), 10);
        assert_eq!(luck.min_value(), Some(0.0));
        assert_eq!(luck.max_value(), Some(9.0));
    }
}
