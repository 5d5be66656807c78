//! Attack exchanges and multi-round battles
//!
//! Damage is a stepwise function of the defender's displayed HP (through
//! terrain defense), so an uncertain defender cannot be resolved with one
//! combine. The engine slices the defender's raw HP by displayed value,
//! resolves each slice against a fixed displayed HP, and vector-adds the
//! disjoint fragments back together.

use crate::core::Result;
use crate::dist::Dist;

use super::config::CombatConfig;
use super::damage::damage_to;
use super::unit::Unit;

impl Unit {
    /// This unit after one strike from `attacker`.
    ///
    /// Each displayed-HP slice keeps its raw-HP weights; the damage draw is
    /// independent of the HP draw, so the subtraction inside a slice is an
    /// ordinary combinatorial combine. The per-slice results are mutually
    /// exclusive fragments and recombine by vector addition.
    pub fn attacked_by(&self, attacker: &Unit, cfg: &CombatConfig) -> Result<Unit> {
        let mut merged = Dist::empty();
        for (displayed, chance) in self.displayed_hp().iter() {
            let slice = self.truncate_hp(displayed.round() as i64);
            let damage = damage_to(attacker, &slice, cfg)?;
            let after = slice.raw_hp() - &damage;
            tracing::trace!(displayed, chance, "slice resolved: {after:?}");
            merged = merged.vector_add(&after);
        }
        Ok(self.with_raw_hp(merged))
    }

    /// Fold a sequence of strikes, each applied to the already-updated
    /// snapshot. An empty sequence is the identity.
    pub fn attacked_by_each<'a, I>(&self, attackers: I, cfg: &CombatConfig) -> Result<Unit>
    where
        I: IntoIterator<Item = &'a Unit>,
    {
        let mut unit = self.clone();
        for attacker in attackers {
            unit = unit.attacked_by(attacker, cfg)?;
        }
        Ok(unit)
    }
}

/// Resolve `rounds` alternating attack exchanges.
///
/// Each round the striking side hits first with its pre-round stats, then
/// absorbs the updated opposing unit's counter. Initiative alternates:
/// `attacker` strikes first on even (0-based) rounds, `defender` on odd
/// ones. The config's sides follow the armies across the swap. Bonus
/// counterattack damage is not modeled.
pub fn battle(
    attacker: &Unit,
    defender: &Unit,
    rounds: u32,
    cfg: &CombatConfig,
) -> Result<(Unit, Unit)> {
    let mut first = attacker.clone();
    let mut second = defender.clone();
    for round in 0..rounds {
        if round % 2 == 0 {
            let second_after = second.attacked_by(&first, cfg)?;
            let first_after = first.attacked_by(&second_after, &cfg.swapped())?;
            first = first_after;
            second = second_after;
        } else {
            let first_after = first.attacked_by(&second, &cfg.swapped())?;
            let second_after = second.attacked_by(&first_after, cfg)?;
            first = first_after;
            second = second_after;
        }
    }
    Ok((first, second))
}
