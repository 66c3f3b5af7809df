//! Double-precision floating-point numbers as a field.
//!
//! Zero-testing is exact: only `0.0` and `-0.0` are considered zero, so rounding
//! errors accumulate during elimination and no pivoting by magnitude is performed.

use std::fmt::{self, Display, Formatter};

use rand::Rng;

use super::{rational::Rational, Field, Ring};

/// The field of `f64` numbers.
pub type RR = FloatField;
/// The field of `f64` numbers.
pub const RR: FloatField = FloatField::new();

/// A field of IEEE double-precision numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct FloatField;

impl FloatField {
    pub const fn new() -> Self {
        FloatField
    }
}

impl Display for FloatField {
    fn fmt(&self, _: &mut Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl Ring for FloatField {
    type Element = f64;

    #[inline(always)]
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a + b
    }

    #[inline(always)]
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a - b
    }

    #[inline(always)]
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a * b
    }

    #[inline(always)]
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a += b;
    }

    #[inline(always)]
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a -= b;
    }

    #[inline(always)]
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a *= b;
    }

    #[inline(always)]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        -a
    }

    #[inline(always)]
    fn zero(&self) -> Self::Element {
        0.
    }

    #[inline(always)]
    fn one(&self) -> Self::Element {
        1.
    }

    #[inline(always)]
    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        if e <= i32::MAX as u64 {
            b.powi(e as i32)
        } else {
            b.powf(e as f64)
        }
    }

    #[inline(always)]
    fn is_zero(a: &Self::Element) -> bool {
        *a == 0.
    }

    #[inline(always)]
    fn is_one(&self, a: &Self::Element) -> bool {
        *a == 1.
    }

    #[inline(always)]
    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        rng.gen_range(range.0..range.1) as f64
    }
}

impl Field for FloatField {
    #[inline(always)]
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a / b
    }

    #[inline(always)]
    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a /= b;
    }

    #[inline(always)]
    fn inv(&self, a: &Self::Element) -> Self::Element {
        1. / a
    }
}

impl From<&Rational> for f64 {
    fn from(value: &Rational) -> Self {
        value.to_f64()
    }
}

impl From<Rational> for f64 {
    fn from(value: Rational) -> Self {
        value.to_f64()
    }
}

#[cfg(test)]
mod test {
    use crate::domains::{rational::Rational, Field, Ring};

    use super::RR;

    #[test]
    fn arithmetic() {
        assert_eq!(RR.sub(&5., &RR.mul(&2., &1.5)), 2.);
        assert_eq!(RR.div(&1., &4.), 0.25);
        assert_eq!(RR.inv(&0.5), 2.);
        assert_eq!(RR.pow(&-2., 3), -8.);
        assert!(RR::is_zero(&-0.));
        assert!(!RR::is_zero(&1e-300));
    }

    #[test]
    fn from_rational() {
        assert_eq!(f64::from(Rational::new(-3, 8)), -0.375);
        assert!(f64::from(Rational::new(1, 0)).is_infinite());
    }
}
