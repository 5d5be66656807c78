//! Value projections and rounding policies
//!
//! A projection maps every bucket's value through a unary function and merges
//! buckets that collide, summing their weights. Rounding, clamping, and the
//! damage rounding rule are all projections.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use super::{key, Dist};

/// Guard for fractional-part comparisons so that a threshold like 0.95 still
/// matches when the binary representation of a value lands a hair below it.
const FRAC_EPSILON: f64 = 1e-9;

impl Dist {
    /// Map every value through `g`, merging buckets that collide.
    pub fn project<F>(&self, g: F) -> Dist
    where
        F: Fn(f64) -> f64,
    {
        let mut buckets = BTreeMap::new();
        for (v, w) in self.iter() {
            *buckets.entry(key(g(v))).or_insert(0.0) += w;
        }
        Dist { buckets }
    }

    /// Round every value down to the nearest integer.
    pub fn floor(&self) -> Dist {
        self.project(f64::floor)
    }

    /// Round every value up to the nearest integer.
    pub fn ceil(&self) -> Dist {
        self.project(f64::ceil)
    }

    /// Clamp every value into the closed range `[lo, hi]`.
    pub fn clamp(&self, lo: f64, hi: f64) -> Dist {
        assert!(lo <= hi, "clamp range is inverted: [{lo}, {hi}]");
        self.project(|v| v.clamp(lo, hi))
    }

    /// Keep only the buckets whose value lies in the closed range, weights
    /// untouched. The result is an unnormalized fragment of `self`; it may
    /// be empty.
    pub fn truncate(&self, range: RangeInclusive<f64>) -> Dist {
        Dist::from_buckets(self.iter().filter(|(v, _)| range.contains(v)))
    }

    /// Round every value down unless its fractional part is at least
    /// `threshold`, in which case round up.
    ///
    /// The comparison tolerates float error a hair below the threshold, so
    /// with threshold 0.95 a fractional part of exactly 0.95 rounds up while
    /// 0.9499 rounds down. Integer values pass through unchanged.
    pub fn round_up_from(&self, threshold: f64) -> Dist {
        self.project(|v| {
            let base = v.floor();
            if v - base >= threshold - FRAC_EPSILON {
                base + 1.0
            } else {
                base
            }
        })
    }
}
