//! Attack and defense rating resolution
//!
//! Composes officer base stats, active power boosts, tower bonuses, and
//! terrain into the two ratings the damage pipeline consumes. The attack
//! rating is a plain integer; the defense rating is a distribution because
//! terrain defense scales with the defender's (possibly uncertain)
//! displayed HP.

use crate::core::Result;
use crate::dist::Dist;

use super::config::{CombatConfig, Role};
use super::unit::Unit;

/// Attack rating for `unit` striking `opponent`.
///
/// Base attack percentage (officer override, default 100) + power boost
/// (zero without an active power) + 10 points per captured tower.
pub fn attack_rating(unit: &Unit, opponent: &Unit, cfg: &CombatConfig) -> Result<i32> {
    let towers = cfg.tower_counts(Role::Attacker);
    let power = unit.power().unwrap_or(cfg.power(Role::Attacker));
    let officer = unit.officer();

    let (base_attack, _) = officer.stats(unit, opponent, towers)?;
    let (boost_attack, _) = officer.boost(unit, opponent, power, towers)?;
    let rating = base_attack + boost_attack + officer.tower_bonus(towers.own);

    tracing::debug!(
        officer = officer.name,
        base_attack,
        boost_attack,
        rating,
        "attack rating"
    );
    Ok(rating)
}

/// Defense rating for `unit` being struck by `attacker`.
///
/// The officer/power/tower composition mirrors `attack_rating`, then
/// terrain defense is added as `displayed HP x terrain defense points`,
/// which keeps the rating a distribution when HP is uncertain.
pub fn defense_rating(unit: &Unit, attacker: &Unit, cfg: &CombatConfig) -> Result<Dist> {
    let towers = cfg.tower_counts(Role::Defender);
    let power = unit.power().unwrap_or(cfg.power(Role::Defender));
    let officer = unit.officer();

    let (_, base_defense) = officer.stats(unit, attacker, towers)?;
    let (_, boost_defense) = officer.boost(unit, attacker, power, towers)?;
    let co_defense = base_defense + boost_defense + officer.tower_bonus(towers.own);

    let terrain_defense = unit
        .displayed_hp()
        .scale(f64::from(unit.terrain_data().defense));
    let total = terrain_defense + f64::from(co_defense);

    tracing::debug!(
        officer = officer.name,
        co_defense,
        terrain = unit.terrain().name(),
        "defense rating: {total:?}"
    );
    Ok(total)
}
