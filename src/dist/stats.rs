//! Order statistics and cumulative views
//!
//! Everything here works for both raw-count and normalized distributions;
//! the statistics divide by total mass where it matters.

use crate::core::{CalcError, Result};

use super::Dist;

/// Tolerance for cumulative-boundary comparisons.
const MASS_EPSILON: f64 = 1e-9;

impl Dist {
    /// Total probability mass (sum of all weights).
    pub fn total(&self) -> f64 {
        self.buckets.values().sum()
    }

    /// Total mass rounded to the nearest integer.
    ///
    /// For a raw-count distribution this is the number of equally likely
    /// outcomes; for a normalized one it is 1. A zero-mass distribution has
    /// length 0, not an error.
    pub fn len(&self) -> usize {
        self.total().round() as usize
    }

    /// True when there is no probability mass at all.
    pub fn is_empty(&self) -> bool {
        self.total() == 0.0
    }

    /// Smallest outcome value, if any bucket exists.
    pub fn min_value(&self) -> Option<f64> {
        self.buckets.keys().next().map(|v| v.into_inner())
    }

    /// Largest outcome value, if any bucket exists.
    pub fn max_value(&self) -> Option<f64> {
        self.buckets.keys().next_back().map(|v| v.into_inner())
    }

    /// Weighted mean. Zero-mass distributions yield 0.
    pub fn mean(&self) -> f64 {
        let total = self.total();
        if total == 0.0 {
            return 0.0;
        }
        self.iter().map(|(v, w)| v * w).sum::<f64>() / total
    }

    /// Weighted variance about the mean. Zero-mass distributions yield 0.
    pub fn variance(&self) -> f64 {
        let total = self.total();
        if total == 0.0 {
            return 0.0;
        }
        let mean = self.mean();
        self.iter().map(|(v, w)| w * (v - mean) * (v - mean)).sum::<f64>() / total
    }

    /// Standard deviation.
    pub fn stdev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Median by cumulative weight.
    ///
    /// When the half-mass boundary lands exactly between two buckets the two
    /// central values are averaged; otherwise the bucket containing the
    /// boundary wins. Zero-mass distributions yield 0.
    pub fn median(&self) -> f64 {
        let total = self.total();
        if total == 0.0 {
            return 0.0;
        }
        let half = total / 2.0;
        let mut cumulative = 0.0;
        let mut iter = self.iter().peekable();
        while let Some((v, w)) = iter.next() {
            cumulative += w;
            if (cumulative - half).abs() <= MASS_EPSILON {
                // Boundary sits exactly between this bucket and the next.
                return match iter.peek() {
                    Some(&(next, _)) => (v + next) / 2.0,
                    None => v,
                };
            }
            if cumulative > half {
                return v;
            }
        }
        // Unreachable for positive mass, barring float dust.
        self.max_value().unwrap_or(0.0)
    }

    /// Value at `rank` in the ascending cumulative ordering.
    ///
    /// Rank 0 is the smallest outcome; valid ranks are `[0, len())`.
    pub fn nth(&self, rank: usize) -> Result<f64> {
        let len = self.len();
        if rank >= len {
            return Err(CalcError::RankOutOfBounds { rank, len });
        }
        let target = rank as f64 + MASS_EPSILON;
        let mut cumulative = 0.0;
        for (v, w) in self.iter() {
            cumulative += w;
            if cumulative > target {
                return Ok(v);
            }
        }
        // Cumulative fell short of the rank by float dust only.
        Ok(self.max_value().expect("positive length implies a bucket"))
    }

    /// Divide every weight by the total mass.
    ///
    /// Idempotent. A zero-mass distribution is returned unchanged rather
    /// than dividing by zero.
    pub fn normalize(&self) -> Dist {
        let total = self.total();
        if total == 0.0 {
            return self.clone();
        }
        Dist {
            buckets: self
                .buckets
                .iter()
                .map(|(v, &w)| (*v, w / total))
                .collect(),
        }
    }

    /// Cumulative distribution: for each value, the normalized probability
    /// of drawing that value or less.
    pub fn cdf(&self) -> Cumulative {
        let normalized = self.normalize();
        let mut cumulative = 0.0;
        let points = normalized
            .iter()
            .map(|(v, w)| {
                cumulative += w;
                (v, cumulative)
            })
            .collect();
        Cumulative { points }
    }

    /// Reverse cumulative distribution: for each value, the normalized
    /// probability of drawing that value or more.
    pub fn rcdf(&self) -> Cumulative {
        let normalized = self.normalize();
        let mut points: Vec<(f64, f64)> = Vec::with_capacity(normalized.bucket_count());
        let mut cumulative = 0.0;
        for (v, w) in normalized.iter().collect::<Vec<_>>().into_iter().rev() {
            cumulative += w;
            points.push((v, cumulative));
        }
        points.reverse();
        Cumulative { points }
    }
}

/// Cumulative probability points derived from a distribution.
///
/// Distinct from `Dist` on purpose: the second element of each point is a
/// cumulative probability, not a bucket weight, and feeding one back into
/// the mass-function algebra would be a unit error.
#[derive(Debug, Clone, PartialEq)]
pub struct Cumulative {
    points: Vec<(f64, f64)>,
}

impl Cumulative {
    /// `(value, cumulative probability)` points in ascending value order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_and_len() {
        let d = Dist::die(6);
        assert_eq!(d.total(), 6.0);
        assert_eq!(d.len(), 6);
        assert_eq!(d.normalize().len(), 1);
        assert_eq!(Dist::empty().len(), 0);
    }

    #[test]
    fn test_mean_of_die() {
        assert!((Dist::die(6).mean() - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_mean_respects_weights() {
        let d = Dist::from_buckets([(0.0, 3.0), (10.0, 1.0)]);
        assert!((d.mean() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_variance_of_coin() {
        let coin = Dist::uniform(0..=1);
        assert!((coin.variance() - 0.25).abs() < 1e-12);
        assert!((coin.stdev() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_median_odd_mass() {
        assert_eq!(Dist::die(5).median(), 3.0);
    }

    #[test]
    fn test_median_tie_averages_central_values() {
        // Half mass falls exactly after the 3 bucket.
        assert_eq!(Dist::die(6).median(), 3.5);
    }

    #[test]
    fn test_median_boundary_inside_bucket() {
        let d = Dist::from_buckets([(1.0, 1.0), (2.0, 5.0)]);
        assert_eq!(d.median(), 2.0);
    }

    #[test]
    fn test_nth_walks_cumulative_order() {
        let d = Dist::from_buckets([(10.0, 2.0), (20.0, 3.0)]);
        assert_eq!(d.nth(0).unwrap(), 10.0);
        assert_eq!(d.nth(1).unwrap(), 10.0);
        assert_eq!(d.nth(2).unwrap(), 20.0);
        assert_eq!(d.nth(4).unwrap(), 20.0);
    }

    #[test]
    fn test_nth_out_of_bounds() {
        let d = Dist::die(4);
        assert!(matches!(
            d.nth(4),
            Err(CalcError::RankOutOfBounds { rank: 4, len: 4 })
        ));
    }

    #[test]
    fn test_normalize_divides_by_mass() {
        let d = Dist::from_buckets([(1.0, 3.0), (2.0, 1.0)]).normalize();
        assert!((d.weight_of(1.0) - 0.75).abs() < 1e-12);
        assert!((d.weight_of(2.0) - 0.25).abs() < 1e-12);
        assert!((d.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_idempotent() {
        let d = Dist::die(10).normalize();
        assert_eq!(d, d.normalize());
    }

    #[test]
    fn test_normalize_zero_mass_unchanged() {
        let empty = Dist::empty();
        assert_eq!(empty.normalize(), empty);
    }

    #[test]
    fn test_cdf_accumulates_to_one() {
        let cdf = Dist::die(4).cdf();
        let points = cdf.points();
        assert_eq!(points.len(), 4);
        assert!((points[0].1 - 0.25).abs() < 1e-12);
        assert!((points[3].1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rcdf_accumulates_from_above() {
        let rcdf = Dist::die(4).rcdf();
        let points = rcdf.points();
        assert!((points[0].1 - 1.0).abs() < 1e-12);
        assert!((points[3].1 - 0.25).abs() < 1e-12);
    }
}
