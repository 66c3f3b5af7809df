//! Property-based tests for the rational field and decimal expansion.

use proptest::prelude::*;
use rref::{decimal::Termination, domains::rational::Rational, utils};

// Strategy for generating small integers
fn small_int() -> impl Strategy<Value = i64> {
    -10_000i64..10_000i64
}

// Strategy for generating non-zero integers
fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-10_000i64..=-1i64), (1i64..=10_000i64)]
}

fn rational() -> impl Strategy<Value = Rational> {
    (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_unchecked(n, d))
}

proptest! {
    #[test]
    fn simplify_is_idempotent(a in rational()) {
        let s = a.simplify();
        let t = s.simplify();
        prop_assert_eq!((s.numerator(), s.denominator()), (t.numerator(), t.denominator()));
    }

    #[test]
    fn simplified_is_reduced(a in rational()) {
        let s = a.simplify();
        if s.numerator() != 0 {
            prop_assert_eq!(utils::gcd_signed(s.numerator(), s.denominator()), 1);
        } else {
            prop_assert_eq!(s.denominator(), 1);
        }
        prop_assert!(s.denominator() > 0);
    }

    #[test]
    fn add_sub_round_trip(a in rational(), b in rational()) {
        prop_assert_eq!((a + b) - b, a.simplify());
    }

    #[test]
    fn mul_div_round_trip(a in rational(), b in rational()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!((a * b) / b, a);
    }

    #[test]
    fn dual_sign_forms_agree(n in small_int(), d in non_zero_int()) {
        let a = Rational::from_unchecked(n, d);
        let b = Rational::from_unchecked(-n, -d);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.is_negative(), b.is_negative());
        prop_assert_eq!(a.abs(), b.abs());
        prop_assert_eq!(a.is_integer(), b.is_integer());
        prop_assert_eq!(a.integer_part(), b.integer_part());
    }

    #[test]
    fn ordering_matches_floats(a in rational(), b in rational()) {
        let (x, y) = (a.to_f64(), b.to_f64());
        if x < y {
            prop_assert!(a < b);
        } else if x > y {
            prop_assert!(a > b);
        }
    }

    #[test]
    fn negative_power_inverts(a in rational(), e in 0i64..4) {
        prop_assume!(!a.is_zero());
        prop_assert_eq!(a.pow(-e), a.inv().pow(e));
        prop_assert_eq!(a.pow(e) * a.pow(-e), Rational::one());
    }

    #[test]
    fn expansion_matches_classifier(n in small_int(), d in 1i64..500) {
        let r = Rational::new(n, d);
        let e = r.to_decimal().unwrap();

        // below 500, prefix and period together stay within the default horizon
        prop_assert_ne!(e.termination, Termination::HorizonExceeded);
        prop_assert_eq!(r.is_repeating(), e.termination == Termination::Repeating);
        prop_assert_eq!(e.cycle.is_empty(), !r.is_repeating());
    }

    #[test]
    fn expansion_reconstructs_value(
        n in 0i64..1_000,
        d in prop::sample::select(vec![1i64, 3, 6, 7, 8, 9, 11, 12, 13, 14, 21, 27, 37, 41, 44, 63, 80, 99, 101, 125, 140]),
    ) {
        // x = I + (P + C / (10^c - 1)) / 10^p, with at most 15 digits for these denominators
        let r = Rational::new(n, d);
        let e = r.to_decimal().unwrap();

        let digits = |ds: &[u8]| ds.iter().fold(0i64, |acc, &x| acc * 10 + x as i64);
        let p = Rational::from(10).pow(e.prefix.len() as i64);
        let mut frac = Rational::from(digits(&e.prefix));
        if !e.cycle.is_empty() {
            let c = Rational::from(10).pow(e.cycle.len() as i64) - Rational::one();
            frac += Rational::from(digits(&e.cycle)) / c;
        }

        let value = Rational::from(e.integer_part as i64) + frac / p;
        prop_assert_eq!(value, r);
    }
}
