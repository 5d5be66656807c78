//! The officer roster
//!
//! One constructor per modeled officer, carrying the formulas and luck each
//! is known for. Officers the game defines but whose formulas add nothing
//! over the neutral stat line are covered by `CommandingOfficer::standard`.

use std::sync::Arc;

use crate::core::{CalcError, Result};
use crate::data::TerrainKind;
use crate::dist::Dist;

use super::officer::{standard_luck, CommandingOfficer, OfficerFormula};

impl CommandingOfficer {
    pub fn andy() -> Self {
        Self {
            name: "Andy",
            super_power_boost: Some(OfficerFormula::SelfOnly(|_| (20, 10))),
            ..Self::standard()
        }
    }

    pub fn colin() -> Self {
        Self {
            name: "Colin",
            stat_override: Some(OfficerFormula::SelfOnly(|_| (90, 100))),
            super_power_boost: Some(OfficerFormula::Unimplemented),
            ..Self::standard()
        }
    }

    pub fn drake() -> Self {
        Self {
            name: "Drake",
            stat_override: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_air() {
                    (80, 100)
                } else if u.is_sea() {
                    (100, 125)
                } else {
                    (100, 100)
                }
            })),
            ..Self::standard()
        }
    }

    pub fn eagle() -> Self {
        Self {
            name: "Eagle",
            stat_override: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_air() {
                    (115, 110)
                } else if u.is_sea() {
                    (70, 100)
                } else {
                    (100, 100)
                }
            })),
            power_boost: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_air() {
                    (15, 20)
                } else {
                    (10, 10)
                }
            })),
            ..Self::standard()
        }
    }

    pub fn grimm() -> Self {
        Self {
            name: "Grimm",
            stat_override: Some(OfficerFormula::SelfOnly(|_| (130, 80))),
            power_boost: Some(OfficerFormula::SelfOnly(|_| (30, 10))),
            super_power_boost: Some(OfficerFormula::SelfOnly(|_| (60, 10))),
            ..Self::standard()
        }
    }

    pub fn grit() -> Self {
        Self {
            name: "Grit",
            stat_override: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_indirect() {
                    (120, 100)
                } else if u.is_infantry() {
                    (100, 100)
                } else {
                    (80, 100)
                }
            })),
            power_boost: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_indirect() {
                    (30, 10)
                } else {
                    (10, 10)
                }
            })),
            ..Self::standard()
        }
    }

    pub fn jake() -> Self {
        Self {
            name: "Jake",
            stat_override: Some(OfficerFormula::SelfOnly(|u| {
                if u.terrain() == TerrainKind::Plains {
                    (110, 100)
                } else {
                    (100, 100)
                }
            })),
            power_boost: Some(OfficerFormula::SelfOnly(|u| {
                if u.terrain() == TerrainKind::Plains {
                    (20, 10)
                } else {
                    (10, 10)
                }
            })),
            super_power_boost: Some(OfficerFormula::SelfOnly(|u| {
                if u.terrain() == TerrainKind::Plains {
                    (40, 10)
                } else {
                    (10, 10)
                }
            })),
            ..Self::standard()
        }
    }

    /// Javier's defense scales with his own towers and spikes against
    /// indirect-fire opponents.
    pub fn javier() -> Self {
        Self {
            name: "Javier",
            stat_override: Some(OfficerFormula::VersusWithTowers(|_, other, t| {
                let indirect = if other.is_indirect() { 20 } else { 0 };
                (100, 100 + 10 * t.own as i32 + indirect)
            })),
            power_boost: Some(OfficerFormula::VersusWithTowers(|_, other, t| {
                let indirect = if other.is_indirect() { 20 } else { 0 };
                (10 + 10 * t.own as i32, 10 + 10 * t.own as i32 + indirect)
            })),
            super_power_boost: Some(OfficerFormula::VersusWithTowers(|_, other, t| {
                let indirect = if other.is_indirect() { 40 } else { 0 };
                (10 + 20 * t.own as i32, 10 + 20 * t.own as i32 + indirect)
            })),
            ..Self::standard()
        }
    }

    pub fn jess() -> Self {
        Self {
            name: "Jess",
            stat_override: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_vehicle() {
                    (110, 100)
                } else {
                    (90, 100)
                }
            })),
            power_boost: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_vehicle() {
                    (20, 10)
                } else {
                    (10, 10)
                }
            })),
            super_power_boost: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_vehicle() {
                    (40, 10)
                } else {
                    (10, 10)
                }
            })),
            ..Self::standard()
        }
    }

    pub fn kanbei() -> Self {
        Self {
            name: "Kanbei",
            stat_override: Some(OfficerFormula::SelfOnly(|_| (130, 130))),
            power_boost: Some(OfficerFormula::SelfOnly(|_| (20, 10))),
            super_power_boost: Some(OfficerFormula::SelfOnly(|_| (20, 30))),
            ..Self::standard()
        }
    }

    pub fn kindle() -> Self {
        Self {
            name: "Kindle",
            stat_override: Some(OfficerFormula::SelfOnly(|u| {
                if u.terrain().is_urban() {
                    (140, 100)
                } else {
                    (100, 100)
                }
            })),
            power_boost: Some(OfficerFormula::SelfOnly(|u| {
                if u.terrain().is_urban() {
                    (50, 10)
                } else {
                    (10, 10)
                }
            })),
            super_power_boost: Some(OfficerFormula::Unimplemented),
            ..Self::standard()
        }
    }

    pub fn koal() -> Self {
        Self {
            name: "Koal",
            stat_override: Some(OfficerFormula::SelfOnly(|u| {
                if u.terrain() == TerrainKind::Road {
                    (110, 100)
                } else {
                    (100, 100)
                }
            })),
            power_boost: Some(OfficerFormula::SelfOnly(|u| {
                if u.terrain() == TerrainKind::Road {
                    (20, 10)
                } else {
                    (10, 10)
                }
            })),
            super_power_boost: Some(OfficerFormula::SelfOnly(|u| {
                if u.terrain() == TerrainKind::Road {
                    (30, 10)
                } else {
                    (10, 10)
                }
            })),
            ..Self::standard()
        }
    }

    /// Lash converts terrain stars straight into firepower.
    pub fn lash() -> Self {
        Self {
            name: "Lash",
            stat_override: Some(OfficerFormula::SelfOnly(|u| {
                (100 + 10 * i32::from(u.terrain().defense()), 100)
            })),
            super_power_boost: Some(OfficerFormula::SelfOnly(|u| {
                let stars = 10 * i32::from(u.terrain().defense());
                (10 + stars, 10 + stars)
            })),
            ..Self::standard()
        }
    }

    pub fn max() -> Self {
        Self {
            name: "Max",
            stat_override: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_infantry() {
                    (100, 100)
                } else if u.is_direct() {
                    (120, 100)
                } else {
                    (90, 100)
                }
            })),
            power_boost: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_direct() && !u.is_infantry() {
                    (20, 10)
                } else {
                    (10, 10)
                }
            })),
            super_power_boost: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_direct() && !u.is_infantry() {
                    (40, 10)
                } else {
                    (10, 10)
                }
            })),
            ..Self::standard()
        }
    }

    pub fn nell() -> Self {
        Self {
            name: "Nell",
            luck: Dist::die(20) - 1.0,
            power_boost: Some(OfficerFormula::Unimplemented),
            ..Self::standard()
        }
    }

    pub fn rachel() -> Self {
        Self {
            name: "Rachel",
            luck: Dist::die(40) - 1.0,
            ..Self::standard()
        }
    }

    pub fn sami() -> Self {
        Self {
            name: "Sami",
            stat_override: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_infantry() {
                    (130, 100)
                } else if u.is_indirect() {
                    (100, 100)
                } else {
                    (90, 100)
                }
            })),
            power_boost: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_infantry() {
                    (30, 10)
                } else {
                    (10, 10)
                }
            })),
            super_power_boost: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_infantry() {
                    (50, 10)
                } else {
                    (10, 10)
                }
            })),
            ..Self::standard()
        }
    }

    pub fn sensei() -> Self {
        Self {
            name: "Sensei",
            stat_override: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_infantry() {
                    (140, 100)
                } else if u.is_copter() {
                    (150, 100)
                } else if u.is_air() {
                    (100, 100)
                } else {
                    (90, 100)
                }
            })),
            power_boost: Some(OfficerFormula::SelfOnly(|u| {
                if u.is_copter() {
                    (25, 10)
                } else {
                    (10, 10)
                }
            })),
            ..Self::standard()
        }
    }

    /// Sonja's luck cancels in expectation but can swing either way.
    pub fn sonja() -> Self {
        let base = standard_luck();
        Self {
            name: "Sonja",
            luck: &base - &base,
            ..Self::standard()
        }
    }

    pub fn von_bolt() -> Self {
        Self {
            name: "Von Bolt",
            stat_override: Some(OfficerFormula::SelfOnly(|_| (110, 110))),
            ..Self::standard()
        }
    }
}

/// Every modeled officer, standard first.
pub fn all() -> Vec<Arc<CommandingOfficer>> {
    vec![
        CommandingOfficer::standard().shared(),
        CommandingOfficer::andy().shared(),
        CommandingOfficer::colin().shared(),
        CommandingOfficer::drake().shared(),
        CommandingOfficer::eagle().shared(),
        CommandingOfficer::grimm().shared(),
        CommandingOfficer::grit().shared(),
        CommandingOfficer::jake().shared(),
        CommandingOfficer::javier().shared(),
        CommandingOfficer::jess().shared(),
        CommandingOfficer::kanbei().shared(),
        CommandingOfficer::kindle().shared(),
        CommandingOfficer::koal().shared(),
        CommandingOfficer::lash().shared(),
        CommandingOfficer::max().shared(),
        CommandingOfficer::nell().shared(),
        CommandingOfficer::rachel().shared(),
        CommandingOfficer::sami().shared(),
        CommandingOfficer::sensei().shared(),
        CommandingOfficer::sonja().shared(),
        CommandingOfficer::von_bolt().shared(),
    ]
}

/// Lookup by officer name, ignoring case and space/underscore/hyphen
/// separators (so `von_bolt` and `Von Bolt` both resolve).
pub fn by_name(name: &str) -> Result<Arc<CommandingOfficer>> {
    fn fold(s: &str) -> String {
        s.chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
    let wanted = fold(name);
    all()
        .into_iter()
        .find(|co| fold(co.name) == wanted)
        .ok_or_else(|| CalcError::UnknownOfficer(name.to_string()))
}
