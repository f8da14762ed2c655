//! Property tests for measurement invariants

use hepkit_core::{math::float_eq, Measurement};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn measurement() -> impl Strategy<Value = Measurement> {
    (-1e6..1e6f64, 0.0..1e4f64, 0.0..1e4f64)
        .prop_map(|(c, u, d)| Measurement::new(c, u, d))
}

fn nonzero_measurement() -> impl Strategy<Value = Measurement> {
    measurement().prop_filter("central must be non-zero", |m| m.central().abs() > 1e-6)
}

fn non_negative(m: Measurement) -> bool {
    m.abs_upper_error() >= 0.0 && m.abs_lower_error() >= 0.0
}

proptest! {
    #[test]
    fn construction_identity(c in -1e6..1e6f64, u in 0.0..1e4f64, d in 0.0..1e4f64) {
        let m = Measurement::new(c, u, d);
        prop_assert_eq!(m.central(), c);
        prop_assert_eq!(m.abs_upper_error(), u);
        prop_assert_eq!(m.abs_lower_error(), d);
        prop_assert_eq!(f64::from(m), m.central());
    }

    #[test]
    fn additive_identity(m in measurement()) {
        prop_assert_eq!(m + 0.0, m);
        prop_assert_eq!(m + Measurement::ZERO, m);
    }

    #[test]
    fn scalar_shift_keeps_errors(m in measurement(), k in -1e6..1e6f64) {
        let shifted = m + k;
        prop_assert_eq!(shifted.abs_upper_error(), m.abs_upper_error());
        prop_assert_eq!(shifted.abs_lower_error(), m.abs_lower_error());
    }

    #[test]
    fn addition_commutes(a in measurement(), b in measurement()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn errors_stay_non_negative(
        a in measurement(),
        b in measurement(),
        k in -1e3..1e3f64,
    ) {
        prop_assert!(non_negative(a + b));
        prop_assert!(non_negative(a - b));
        prop_assert!(non_negative(a * b));
        prop_assert!(non_negative(a + k));
        prop_assert!(non_negative(k - a));
        prop_assert!(non_negative(a * k));
        prop_assert!(non_negative(-a));
        if k != 0.0 {
            prop_assert!(non_negative(a / k));
        }
        if a.central() != 0.0 {
            prop_assert!(non_negative(k / a));
        }
    }

    #[test]
    fn negative_scale_swaps_sides(m in measurement(), k in 0.1..100.0f64) {
        let scaled = m * -k;
        prop_assert!(float_eq(scaled.abs_upper_error(), m.abs_lower_error() * k, EPS));
        prop_assert!(float_eq(scaled.abs_lower_error(), m.abs_upper_error() * k, EPS));
    }

    #[test]
    fn normalize_keeps_relative_error(m in nonzero_measurement()) {
        let norm = m.normalize().unwrap();
        prop_assert_eq!(norm.central(), 1.0);
        prop_assert!(float_eq(
            norm.abs_upper_error(),
            m.abs_upper_error() / m.central().abs(),
            EPS,
        ));
        prop_assert!(float_eq(
            norm.abs_lower_error(),
            m.abs_lower_error() / m.central().abs(),
            EPS,
        ));
    }

    #[test]
    fn product_matches_relative_form(a in nonzero_measurement(), b in nonzero_measurement()) {
        let p = a * b;
        let ra = a.rel_upper_error().unwrap();
        let rb = b.rel_upper_error().unwrap();
        let expected = p.central().abs() * (ra * ra + rb * rb).sqrt();
        prop_assert!(float_eq(p.abs_upper_error(), expected, 1e-6));
    }
}
