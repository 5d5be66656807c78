//! Damage pipeline
//!
//! Computes the full distribution of raw damage one unit inflicts on
//! another in a single strike. Luck and the defender's defense rating may
//! both be distributions, so the result usually is one too.

use crate::core::Result;
use crate::data::base_damage;
use crate::dist::Dist;

use super::config::CombatConfig;
use super::rating::{attack_rating, defense_rating};
use super::unit::Unit;

/// Fractional part at or above which raw damage rounds up instead of down.
pub const DAMAGE_ROUND_UP_THRESHOLD: f64 = 0.95;

/// Distribution of raw damage (10x displayed scale) `attacker` deals to
/// `defender` in one strike.
///
/// Pipeline: base matchup damage, scaled by attack rating, plus luck,
/// scaled by the attacker's remaining displayed HP, multiplied by the
/// defense multiplier `(200 - defense rating) / 100`, then rounded with the
/// asymmetric threshold rule. A base damage of 0 means the matchup cannot
/// deal matchup damage at all.
pub fn damage_to(attacker: &Unit, defender: &Unit, cfg: &CombatConfig) -> Result<Dist> {
    let base = f64::from(base_damage(attacker.kind(), defender.kind()));
    let rating = attack_rating(attacker, defender, cfg)?;
    tracing::debug!(base, rating, "base damage");

    let co_adjusted = Dist::exactly(base).scale(f64::from(rating) / 100.0) + attacker.officer().luck.clone();
    tracing::debug!("co adjusted damage: {co_adjusted:?}");

    // Damage dealt is proportional to the attacker's remaining strength.
    let hp_scale = attacker.displayed_hp().clamp(0.0, 10.0) / 10.0;
    let hp_adjusted = &hp_scale * &co_adjusted;
    tracing::debug!("hp adjusted damage: {hp_adjusted:?}");

    let defense_multiplier =
        defense_rating(defender, attacker, cfg)?.project(|v| (200.0 - v) / 100.0);
    tracing::debug!("defense multiplier: {defense_multiplier:?}");

    let raw = &hp_adjusted * &defense_multiplier;
    let final_damage = raw.round_up_from(DAMAGE_ROUND_UP_THRESHOLD);
    tracing::debug!("final damage: {final_damage:?}");
    Ok(final_damage)
}
