//! Algebraic properties of the distribution type
//!
//! Property-based checks over small randomly built distributions: the
//! combinatorial combine must commute for commutative operations, conserve
//! probability mass, and respect identities; normalization must be
//! idempotent and total.

use battle_odds::dist::Dist;
use proptest::prelude::*;

/// Small distributions with integer values and integer weights, so every
/// expected equality is exact in f64.
fn arb_dist() -> impl Strategy<Value = Dist> {
    prop::collection::vec(((-20i64..=20), (1u32..=4)), 1..6).prop_map(|pairs| {
        Dist::from_buckets(pairs.into_iter().map(|(v, w)| (v as f64, f64::from(w))))
    })
}

/// Bucket-wise comparison within a tolerance.
fn approx_eq(a: &Dist, b: &Dist, tol: f64) -> bool {
    let (a, b) = (a.buckets(), b.buckets());
    a.len() == b.len()
        && a.iter()
            .zip(&b)
            .all(|((v1, w1), (v2, w2))| v1 == v2 && (w1 - w2).abs() <= tol)
}

proptest! {
    #[test]
    fn combine_add_commutes(a in arb_dist(), b in arb_dist()) {
        prop_assert_eq!(a.combine(&b, |x, y| x + y), b.combine(&a, |x, y| x + y));
    }

    #[test]
    fn combine_mul_commutes(a in arb_dist(), b in arb_dist()) {
        prop_assert_eq!(a.combine(&b, |x, y| x * y), b.combine(&a, |x, y| x * y));
    }

    #[test]
    fn combine_max_min_commute(a in arb_dist(), b in arb_dist()) {
        prop_assert_eq!(a.advantage_vs(&b), b.advantage_vs(&a));
        prop_assert_eq!(a.disadvantage_vs(&b), b.disadvantage_vs(&a));
    }

    #[test]
    fn combine_additive_identity(a in arb_dist()) {
        prop_assert_eq!(a.clone() + Dist::exactly(0.0), a);
    }

    #[test]
    fn combine_multiplicative_identity(a in arb_dist()) {
        prop_assert_eq!(a.clone() * Dist::exactly(1.0), a);
    }

    #[test]
    fn combine_conserves_mass(a in arb_dist(), b in arb_dist()) {
        // Even under a value-collapsing function, mass multiplies.
        let combined = a.combine(&b, |x, y| (x - y).abs().min(3.0));
        prop_assert!((combined.total() - a.total() * b.total()).abs() < 1e-9);
    }

    #[test]
    fn vector_add_adds_mass(a in arb_dist(), b in arb_dist()) {
        let merged = a.vector_add(&b);
        prop_assert!((merged.total() - (a.total() + b.total())).abs() < 1e-9);
    }

    #[test]
    fn scalar_ops_preserve_mass(a in arb_dist(), shift in -10i64..10, scale in 1i64..5) {
        prop_assert_eq!((a.clone() + shift as f64).total(), a.total());
        prop_assert_eq!(a.scale(scale as f64).total(), a.total());
    }

    #[test]
    fn normalize_is_idempotent(a in arb_dist()) {
        let once = a.normalize();
        prop_assert!(approx_eq(&once, &once.normalize(), 1e-12));
        prop_assert!((once.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn projection_conserves_mass(a in arb_dist()) {
        prop_assert_eq!(a.project(|v| (v / 3.0).floor()).total(), a.total());
    }

    #[test]
    fn cdf_is_monotone_and_total(a in arb_dist()) {
        let cdf = a.cdf();
        let points = cdf.points();
        for pair in points.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].1 + 1e-12);
        }
        prop_assert!((points.last().unwrap().1 - 1.0).abs() < 1e-9);
    }
}

#[test]
fn threshold_rounding_boundary() {
    let d = Dist::from_buckets([(2.95, 1.0), (2.9499, 1.0), (7.0, 1.0)]);
    let rounded = d.round_up_from(0.95);
    // Fractional part exactly 0.95 rounds up, 0.9499 rounds down,
    // integers are untouched.
    assert_eq!(rounded.weight_of(3.0), 1.0);
    assert_eq!(rounded.weight_of(2.0), 1.0);
    assert_eq!(rounded.weight_of(7.0), 1.0);
}

#[test]
fn normalize_zero_mass_is_noop() {
    let empty = Dist::empty();
    assert_eq!(empty.normalize(), empty);
    assert_eq!(empty.len(), 0);
}
