//! Exact discrete probability distributions
//!
//! A `Dist` is an immutable map from outcome value to weight. Weights may be
//! raw combinatorial counts (a d6 has six buckets of weight 1) or normalized
//! probabilities; every operation works with either. All combinators return a
//! fresh value - nothing is mutated in place.

pub mod project;
pub mod stats;

pub use stats::Cumulative;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use ordered_float::NotNan;

/// Finite probability mass function over `f64` outcomes.
///
/// Buckets are keyed by value, so equal outcomes always merge and iteration
/// runs in ascending value order regardless of construction order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dist {
    pub(crate) buckets: BTreeMap<NotNan<f64>, f64>,
}

/// Bucket key for a value. Outcome values are produced by arithmetic on
/// finite inputs; NaN can only appear through caller misuse.
pub(crate) fn key(value: f64) -> NotNan<f64> {
    NotNan::new(value).expect("distribution values must not be NaN")
}

impl Dist {
    /// Distribution with no buckets at all. Identity for `vector_add`.
    pub fn empty() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    /// Single-bucket distribution: `value` with weight 1.
    pub fn exactly(value: f64) -> Self {
        let mut buckets = BTreeMap::new();
        buckets.insert(key(value), 1.0);
        Self { buckets }
    }

    /// Uniform distribution over the given integer values, weight 1 each.
    pub fn uniform<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self::from_buckets(values.into_iter().map(|v| (v as f64, 1.0)))
    }

    /// Fair die: uniform over `1..=sides`.
    pub fn die(sides: u32) -> Self {
        Self::uniform(1..=i64::from(sides))
    }

    /// Build from (value, weight) pairs, merging duplicate values.
    ///
    /// Panics on NaN values or on negative/non-finite weights; both signal a
    /// caller bug, not a recoverable condition.
    pub fn from_buckets<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut buckets = BTreeMap::new();
        for (value, weight) in pairs {
            assert!(
                weight.is_finite() && weight >= 0.0,
                "bucket weight must be finite and non-negative, got {weight}"
            );
            *buckets.entry(key(value)).or_insert(0.0) += weight;
        }
        Self { buckets }
    }

    /// Number of distinct buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Iterate `(value, weight)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.buckets.iter().map(|(v, &w)| (v.into_inner(), w))
    }

    /// Sorted `(value, weight)` pairs as an owned view, for rendering.
    pub fn buckets(&self) -> Vec<(f64, f64)> {
        self.iter().collect()
    }

    /// Weight at an exact value, 0 if absent.
    pub fn weight_of(&self, value: f64) -> f64 {
        self.buckets.get(&key(value)).copied().unwrap_or(0.0)
    }

    /// Combinatorial combination: every bucket of `self` against every bucket
    /// of `other` through `f`, weights multiplied, collisions summed.
    ///
    /// This is the cross-product of two independent draws; total weight of
    /// the result is `self.total() * other.total()` for any `f`.
    pub fn combine<F>(&self, other: &Dist, f: F) -> Dist
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut buckets = BTreeMap::new();
        for (v1, w1) in self.iter() {
            for (v2, w2) in other.iter() {
                *buckets.entry(key(f(v1, v2))).or_insert(0.0) += w1 * w2;
            }
        }
        Dist { buckets }
    }

    /// Multiply every value by a scalar, leaving weights untouched.
    ///
    /// Scaling models deterministic multiplication of an uncertain quantity.
    /// Multiplying by another distribution is a different operation entirely
    /// (`Dist * Dist`, the combinatorial product) and is kept apart by type.
    pub fn scale(&self, factor: f64) -> Dist {
        self.project(|v| v * factor)
    }

    /// Shift every value by a scalar, leaving weights untouched.
    pub fn shift(&self, offset: f64) -> Dist {
        self.project(|v| v + offset)
    }

    /// Weight-wise union: add the two distributions' weights per value.
    ///
    /// Unlike `Dist + Dist` there is no cross product; this reassembles
    /// mutually exclusive fragments of one conceptual distribution. The
    /// caller must guarantee the fragments are disjoint in probability,
    /// otherwise mass is double counted.
    pub fn vector_add(&self, other: &Dist) -> Dist {
        let mut buckets = self.buckets.clone();
        for (v, w) in other.iter() {
            *buckets.entry(key(v)).or_insert(0.0) += w;
        }
        Dist { buckets }
    }

    /// Roll twice, keep the higher: self-combine with `max`.
    pub fn advantage(&self) -> Dist {
        self.advantage_vs(self)
    }

    /// Keep the higher of a draw from `self` and a draw from `other`.
    pub fn advantage_vs(&self, other: &Dist) -> Dist {
        self.combine(other, f64::max)
    }

    /// Roll twice, keep the lower: self-combine with `min`.
    pub fn disadvantage(&self) -> Dist {
        self.disadvantage_vs(self)
    }

    /// Keep the lower of a draw from `self` and a draw from `other`.
    pub fn disadvantage_vs(&self, other: &Dist) -> Dist {
        self.combine(other, f64::min)
    }
}

impl<'a, 'b> Add<&'b Dist> for &'a Dist {
    type Output = Dist;

    fn add(self, rhs: &'b Dist) -> Dist {
        self.combine(rhs, |a, b| a + b)
    }
}

impl<'a, 'b> Sub<&'b Dist> for &'a Dist {
    type Output = Dist;

    fn sub(self, rhs: &'b Dist) -> Dist {
        self.combine(rhs, |a, b| a - b)
    }
}

impl<'a, 'b> Mul<&'b Dist> for &'a Dist {
    type Output = Dist;

    fn mul(self, rhs: &'b Dist) -> Dist {
        self.combine(rhs, |a, b| a * b)
    }
}

impl Add<f64> for &Dist {
    type Output = Dist;

    fn add(self, rhs: f64) -> Dist {
        self.shift(rhs)
    }
}

impl Sub<f64> for &Dist {
    type Output = Dist;

    fn sub(self, rhs: f64) -> Dist {
        self.shift(-rhs)
    }
}

impl Mul<f64> for &Dist {
    type Output = Dist;

    fn mul(self, rhs: f64) -> Dist {
        self.scale(rhs)
    }
}

impl Div<f64> for &Dist {
    type Output = Dist;

    fn div(self, rhs: f64) -> Dist {
        assert!(rhs != 0.0, "cannot divide distribution values by zero");
        self.scale(1.0 / rhs)
    }
}

impl Add for Dist {
    type Output = Dist;

    fn add(self, rhs: Dist) -> Dist {
        &self + &rhs
    }
}

impl Sub for Dist {
    type Output = Dist;

    fn sub(self, rhs: Dist) -> Dist {
        &self - &rhs
    }
}

impl Mul for Dist {
    type Output = Dist;

    fn mul(self, rhs: Dist) -> Dist {
        &self * &rhs
    }
}

impl Add<f64> for Dist {
    type Output = Dist;

    fn add(self, rhs: f64) -> Dist {
        &self + rhs
    }
}

impl Sub<f64> for Dist {
    type Output = Dist;

    fn sub(self, rhs: f64) -> Dist {
        &self - rhs
    }
}

impl Mul<f64> for Dist {
    type Output = Dist;

    fn mul(self, rhs: f64) -> Dist {
        &self * rhs
    }
}

impl Div<f64> for Dist {
    type Output = Dist;

    fn div(self, rhs: f64) -> Dist {
        &self / rhs
    }
}

impl fmt::Display for Dist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (v, w)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}: {w}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_single_bucket() {
        let d = Dist::exactly(7.0);
        assert_eq!(d.buckets(), vec![(7.0, 1.0)]);
    }

    #[test]
    fn test_from_buckets_merges_duplicates() {
        let d = Dist::from_buckets([(1.0, 2.0), (3.0, 1.0), (1.0, 3.0)]);
        assert_eq!(d.buckets(), vec![(1.0, 5.0), (3.0, 1.0)]);
    }

    #[test]
    fn test_iteration_ascending_regardless_of_insertion() {
        let d = Dist::from_buckets([(5.0, 1.0), (-2.0, 1.0), (3.5, 1.0)]);
        let values: Vec<f64> = d.iter().map(|(v, _)| v).collect();
        assert_eq!(values, vec![-2.0, 3.5, 5.0]);
    }

    #[test]
    fn test_add_two_dice() {
        let sum = Dist::die(2) + Dist::die(2);
        // 1+1, 1+2, 2+1, 2+2
        assert_eq!(sum.buckets(), vec![(2.0, 1.0), (3.0, 2.0), (4.0, 1.0)]);
    }

    #[test]
    fn test_combine_collision_weights_summed() {
        let d = Dist::uniform(1..=4);
        let product = d.combine(&d, |a, b| a * b);
        // 4 = 1*4, 2*2, 4*1
        assert_eq!(product.weight_of(4.0), 3.0);
        // total mass is 4 * 4
        assert_eq!(product.total(), 16.0);
    }

    #[test]
    fn test_scalar_add_shifts_values() {
        let d = Dist::die(6) + 10.0;
        assert_eq!(d.min_value(), Some(11.0));
        assert_eq!(d.max_value(), Some(16.0));
        assert_eq!(d.total(), 6.0);
    }

    #[test]
    fn test_scale_leaves_weights() {
        let d = Dist::from_buckets([(1.0, 2.0), (2.0, 3.0)]).scale(0.5);
        assert_eq!(d.buckets(), vec![(0.5, 2.0), (1.0, 3.0)]);
    }

    #[test]
    fn test_scale_collapse_to_zero_merges() {
        let d = Dist::die(6).scale(0.0);
        assert_eq!(d.buckets(), vec![(0.0, 6.0)]);
    }

    #[test]
    fn test_vector_add_unions_weights() {
        let a = Dist::from_buckets([(1.0, 0.5), (2.0, 0.5)]);
        let b = Dist::from_buckets([(2.0, 0.25), (3.0, 0.25)]);
        let merged = a.vector_add(&b);
        assert_eq!(
            merged.buckets(),
            vec![(1.0, 0.5), (2.0, 0.75), (3.0, 0.25)]
        );
        assert!((merged.total() - (a.total() + b.total())).abs() < 1e-12);
    }

    #[test]
    fn test_advantage_favors_high_values() {
        let adv = Dist::die(2).advantage();
        // (1,1)->1, (1,2)/(2,1)/(2,2)->2
        assert_eq!(adv.buckets(), vec![(1.0, 1.0), (2.0, 3.0)]);
    }

    #[test]
    fn test_disadvantage_favors_low_values() {
        let dis = Dist::die(2).disadvantage();
        assert_eq!(dis.buckets(), vec![(1.0, 3.0), (2.0, 1.0)]);
    }

    #[test]
    fn test_subtraction_is_combinatorial() {
        let luck = Dist::die(10) - 1.0;
        let swing = &luck - &luck;
        assert_eq!(swing.min_value(), Some(-9.0));
        assert_eq!(swing.max_value(), Some(9.0));
        assert_eq!(swing.total(), 100.0);
    }

    #[test]
    #[should_panic(expected = "divide distribution values by zero")]
    fn test_divide_by_zero_panics() {
        let _ = Dist::die(6) / 0.0;
    }

    #[test]
    #[should_panic(expected = "finite and non-negative")]
    fn test_negative_weight_panics() {
        let _ = Dist::from_buckets([(1.0, -1.0)]);
    }
}
