//! Read-only reporting views
//!
//! Turns distributions and unit snapshots into aligned text or serializable
//! rows. Nothing here feeds back into resolution.

use serde::Serialize;

use crate::combat::{damage_to, CombatConfig, Unit};
use crate::core::Result;
use crate::dist::Dist;

/// Right-align every column to its widest cell plus one space of padding.
pub fn format_table(rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let columns = rows[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .map(|row| row.get(c).map_or(0, String::len))
                .max()
                .unwrap_or(0)
                + 1
        })
        .collect();
    rows.iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{cell:>w$}"))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Minimum-damage comparison grid: one row per defender, one column per
/// attacker. With `prune`, defenders that any attacker cannot scratch are
/// dropped.
pub fn damage_table(
    attackers: &[Unit],
    defenders: &[Unit],
    cfg: &CombatConfig,
    prune: bool,
) -> Result<String> {
    let mut rows = Vec::new();
    let mut header = vec![String::new()];
    header.extend(attackers.iter().map(|a| a.kind().name().to_string()));
    rows.push(header);

    for defender in defenders {
        let mut row = vec![defender.kind().name().to_string()];
        let mut scratched = true;
        for attacker in attackers {
            let damage = damage_to(attacker, defender, cfg)?;
            let min = damage.nth(0)?;
            if min <= 0.0 {
                scratched = false;
            }
            row.push(format!("{min}"));
        }
        if !prune || scratched {
            rows.push(row);
        }
    }
    Ok(format_table(&rows))
}

/// Displayed-HP outcome listing, clamped to the visible 0..=10 scale, one
/// `hp: percent` line per outcome.
pub fn hp_summary(unit: &Unit) -> String {
    let displayed = unit.displayed_hp().clamp(0.0, 10.0);
    let mut lines = vec![format!(
        "{} on {}",
        unit.kind().name(),
        unit.terrain().name()
    )];
    for (hp, p) in displayed.iter() {
        lines.push(format!("  {hp:>4}: {:>6.2}%", p * 100.0));
    }
    lines.join("\n")
}

/// One bucket of a serialized distribution.
#[derive(Debug, Serialize)]
pub struct BucketRow {
    pub value: f64,
    pub probability: f64,
}

/// Serializable summary of an outcome distribution.
#[derive(Debug, Serialize)]
pub struct DistReport {
    pub mean: f64,
    pub stdev: f64,
    pub median: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub buckets: Vec<BucketRow>,
}

impl DistReport {
    pub fn new(dist: &Dist) -> Self {
        let normalized = dist.normalize();
        Self {
            mean: dist.mean(),
            stdev: dist.stdev(),
            median: dist.median(),
            min: dist.min_value(),
            max: dist.max_value(),
            buckets: normalized
                .iter()
                .map(|(value, probability)| BucketRow { value, probability })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::UnitKind;

    #[test]
    fn test_format_table_alignment() {
        let rows = vec![
            vec!["".to_string(), "Tank".to_string()],
            vec!["Infantry".to_string(), "75".to_string()],
        ];
        let table = format_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), lines[1].len());
        assert!(lines[0].ends_with("Tank"));
        assert!(lines[1].ends_with("75"));
    }

    #[test]
    fn test_damage_table_prunes_immune_defenders() {
        let tank = Unit::new(UnitKind::Tank);
        let defenders = vec![Unit::new(UnitKind::Infantry), Unit::new(UnitKind::Bomber)];
        let cfg = CombatConfig::default();
        let pruned = damage_table(&[tank.clone()], &defenders, &cfg, true).unwrap();
        assert!(pruned.contains("Infantry"));
        assert!(!pruned.contains("Bomber"));
        let full = damage_table(&[tank], &defenders, &cfg, false).unwrap();
        assert!(full.contains("Bomber"));
    }

    #[test]
    fn test_hp_summary_percentages() {
        let unit = Unit::new(UnitKind::Tank)
            .with_raw_hp(Dist::from_buckets([(100.0, 1.0), (45.0, 1.0)]));
        let summary = hp_summary(&unit);
        assert!(summary.contains("Tank"));
        assert!(summary.contains("50.00%"));
    }

    #[test]
    fn test_dist_report_normalizes_buckets() {
        let report = DistReport::new(&Dist::die(4));
        assert_eq!(report.buckets.len(), 4);
        assert!((report.buckets[0].probability - 0.25).abs() < 1e-12);
        assert_eq!(report.min, Some(1.0));
        assert_eq!(report.max, Some(4.0));
    }
}
