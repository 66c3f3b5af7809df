//! Exact fractions of machine-width integers.
//!
//! A [Rational] stores an `i64` numerator and an `i64` denominator. Every arithmetic operation
//! returns a canonical value: the numerator and denominator share no common factor, the
//! denominator is non-negative and zero is stored as `0/1`.
//!
//! A raw pair created with [Rational::from_unchecked] may carry its sign in either component.
//! Comparison, hashing and all predicates treat `-1/2` and `1/-2` as the same number.
//!
//! A zero denominator is a valid sentinel for an undefined (infinite) value, for example the
//! result of dividing by zero. It is propagated through arithmetic rather than rejected.
//! Undefined values are stored as `1/0` or `-1/0` and order as signed infinities.
//!
//! Intermediate results are computed with 128-bit integers. When a reduced result does not
//! fit in 64 bits, the `checked_*` methods return `None` and the operators panic.

use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
    num::ParseIntError,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use rand::Rng;

use crate::utils;

use super::{Field, Ring};

/// The field of rational numbers.
pub type Q = RationalField;
/// The field of rational numbers.
pub const Q: RationalField = RationalField::new();

/// The field of rational numbers with machine-width numerator and denominator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RationalField;

impl RationalField {
    pub const fn new() -> RationalField {
        RationalField
    }
}

impl Display for RationalField {
    fn fmt(&self, _: &mut Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// A rational number `numerator / denominator`.
#[derive(Clone, Copy, Debug)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

#[cold]
fn overflow(op: &str) -> ! {
    panic!("Rational overflow in {}: result does not fit in 64 bits", op)
}

impl Rational {
    /// Create the canonical rational `num / den`.
    ///
    /// # Panics
    ///
    /// Panics if the reduced value does not fit, which only happens for `i64::MIN / -1`.
    pub fn new(num: i64, den: i64) -> Rational {
        Rational::from_unchecked(num, den).simplify()
    }

    /// Store `num / den` as is, without reducing or moving the sign.
    pub const fn from_unchecked(num: i64, den: i64) -> Rational {
        Rational {
            numerator: num,
            denominator: den,
        }
    }

    /// Reduce a 128-bit fraction to canonical form, if it fits.
    fn from_i128(num: i128, den: i128) -> Option<Rational> {
        if num == 0 {
            return Some(Rational::zero());
        }

        let g = utils::gcd_signed_i128(num, den) as i128;
        let (mut n, mut d) = (num / g, den / g);
        if d < 0 {
            n = -n;
            d = -d;
        }

        Some(Rational {
            numerator: i64::try_from(n).ok()?,
            denominator: i64::try_from(d).ok()?,
        })
    }

    pub const fn zero() -> Rational {
        Rational {
            numerator: 0,
            denominator: 1,
        }
    }

    pub const fn one() -> Rational {
        Rational {
            numerator: 1,
            denominator: 1,
        }
    }

    /// The stored numerator. Only canonical values carry the sign here.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// The stored denominator. It is zero for undefined values.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// The sign-normalized components: the denominator is non-negative and zero is `0/1`.
    /// The components are not reduced.
    fn parts(&self) -> (i128, i128) {
        let (n, d) = (self.numerator as i128, self.denominator as i128);
        if n == 0 {
            (0, 1)
        } else if d < 0 {
            (-n, -d)
        } else {
            (n, d)
        }
    }

    /// The canonical components, computed without overflow.
    fn reduced_parts(&self) -> (i128, i128) {
        let (n, d) = self.parts();
        let g = utils::gcd_signed_i128(n, d) as i128;
        (n / g, d / g)
    }

    /// Reduce the fraction to lowest terms and move the sign to the numerator.
    /// A zero numerator forces the denominator to `1`.
    ///
    /// # Panics
    ///
    /// Panics if the canonical numerator is `2^63`, which cannot be represented.
    pub fn simplify(&self) -> Rational {
        let (n, d) = self.reduced_parts();
        match (i64::try_from(n), i64::try_from(d)) {
            (Ok(numerator), Ok(denominator)) => Rational {
                numerator,
                denominator,
            },
            _ => overflow("simplification"),
        }
    }

    /// Rescale the value so that its denominator is `lcm(denominator, den)`, in order to
    /// align two fractions. The result is deliberately not reduced.
    ///
    /// The value is returned unchanged if either denominator is zero, and `None` is
    /// returned if the rescaled value does not fit.
    pub fn set_denominator(&self, den: i64) -> Option<Rational> {
        if self.denominator == 0 || den == 0 {
            return Some(*self);
        }

        let (n, d) = self.parts();
        let lcm = utils::lcm_signed(self.denominator, den)? as i128;
        Some(Rational {
            numerator: i64::try_from(n * (lcm / d)).ok()?,
            denominator: i64::try_from(lcm).ok()?,
        })
    }

    /// Whether the value is the undefined sentinel with a zero denominator.
    pub fn is_undefined(&self) -> bool {
        self.denominator == 0
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_one(&self) -> bool {
        self.numerator == self.denominator && self.numerator != 0
    }

    /// The value is negative if exactly one of the components is negative.
    pub fn is_negative(&self) -> bool {
        self.numerator != 0 && (self.numerator < 0) != (self.denominator < 0)
    }

    pub fn is_integer(&self) -> bool {
        self.denominator != 0 && self.numerator.wrapping_rem(self.denominator) == 0
    }

    /// The integer part, rounded towards zero. Undefined values yield `0`.
    ///
    /// The result saturates: the raw pair `i64::MIN / -1` yields `i64::MAX`.
    pub fn integer_part(&self) -> i64 {
        if self.denominator == 0 {
            return 0;
        }

        let (n, d) = self.parts();
        i64::try_from(n / d).unwrap_or(i64::MAX)
    }

    pub fn abs(&self) -> Rational {
        let r = self.simplify();
        if r.is_negative() {
            Rational::neg(&r)
        } else {
            r
        }
    }

    pub fn checked_neg(&self) -> Option<Rational> {
        if self.denominator < 0 {
            Some(Rational {
                numerator: self.numerator,
                denominator: self.denominator.checked_neg()?,
            })
        } else {
            Some(Rational {
                numerator: self.numerator.checked_neg()?,
                denominator: self.denominator,
            })
        }
    }

    /// Flip the sign. A negative denominator is made positive, otherwise the numerator
    /// is negated, so a canonical value stays canonical.
    pub fn neg(&self) -> Rational {
        self.checked_neg().unwrap_or_else(|| overflow("negation"))
    }

    /// Compute `1 / self`. The inverse of zero is the undefined value `1/0`.
    pub fn inv(&self) -> Rational {
        Rational::from_i128(self.denominator as i128, self.numerator as i128)
            .unwrap_or_else(|| overflow("inversion"))
    }

    pub fn checked_add(&self, other: &Rational) -> Option<Rational> {
        self.checked_add_signed(other, false)
    }

    pub fn checked_sub(&self, other: &Rational) -> Option<Rational> {
        self.checked_add_signed(other, true)
    }

    /// Compute `self + other` or `self - other` over a common denominator.
    fn checked_add_signed(&self, other: &Rational, subtract: bool) -> Option<Rational> {
        let sign = if subtract { -1 } else { 1 };

        // an undefined operand absorbs the other one
        if self.is_undefined() {
            return Rational::from_i128(self.numerator as i128, 0);
        }
        if other.is_undefined() {
            return Rational::from_i128(sign * other.numerator as i128, 0);
        }

        let (n1, d1) = self.parts();
        let (n2, d2) = other.parts();

        let lcm = d1 / utils::gcd_signed_i128(d1, d2) as i128 * d2;
        Rational::from_i128(n1 * (lcm / d1) + sign * n2 * (lcm / d2), lcm)
    }

    pub fn checked_mul(&self, other: &Rational) -> Option<Rational> {
        let (n1, d1) = self.parts();
        let (n2, d2) = other.parts();
        Rational::from_i128(n1 * n2, d1 * d2)
    }

    pub fn checked_div(&self, other: &Rational) -> Option<Rational> {
        let inv = Rational::from_i128(other.denominator as i128, other.numerator as i128)?;
        self.checked_mul(&inv)
    }

    /// Raise to an integer power. A negative exponent inverts the base first.
    pub fn checked_pow(&self, e: i64) -> Option<Rational> {
        let base = if e < 0 {
            Rational::from_i128(self.denominator as i128, self.numerator as i128)?
        } else {
            Rational::from_i128(self.numerator as i128, self.denominator as i128)?
        };

        // the base is reduced, so its powers are as well
        let e = u32::try_from(e.unsigned_abs()).ok()?;
        Some(Rational {
            numerator: base.numerator.checked_pow(e)?,
            denominator: base.denominator.checked_pow(e)?,
        })
    }

    /// Raise to an integer power. A negative exponent inverts the base first.
    ///
    /// # Panics
    ///
    /// Panics when the result does not fit or the exponent exceeds `u32::MAX`.
    pub fn pow(&self, e: i64) -> Rational {
        self.checked_pow(e)
            .unwrap_or_else(|| overflow("exponentiation"))
    }

    pub fn to_f64(&self) -> f64 {
        let (n, d) = self.parts();
        n as f64 / d as f64
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational {
            numerator: value,
            denominator: 1,
        }
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Rational::from(value as i64)
    }
}

impl From<(i64, i64)> for Rational {
    fn from((num, den): (i64, i64)) -> Self {
        Rational::new(num, den)
    }
}

impl From<(i32, i32)> for Rational {
    fn from((num, den): (i32, i32)) -> Self {
        Rational::new(num as i64, den as i64)
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reduced_parts().hash(state);
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let (n1, d1) = self.parts();
        let (n2, d2) = other.parts();

        if d1 == 0 && d2 == 0 {
            return n1.signum().cmp(&n2.signum());
        }

        (n1 * d2).cmp(&(n2 * d1))
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (n, d) = self.reduced_parts();
        if d == 1 {
            write!(f, "{}", n)
        } else {
            write!(f, "{}/{}", n, d)
        }
    }
}

/// An error produced when parsing a [Rational] from a string such as `-3/4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RationalParseError {
    Numerator(ParseIntError),
    Denominator(ParseIntError),
}

impl Display for RationalParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RationalParseError::Numerator(e) => write!(f, "Invalid numerator: {}", e),
            RationalParseError::Denominator(e) => write!(f, "Invalid denominator: {}", e),
        }
    }
}

impl std::error::Error for RationalParseError {}

impl FromStr for Rational {
    type Err = RationalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, den) = match s.split_once('/') {
            Some((n, d)) => (n, Some(d)),
            None => (s, None),
        };

        let num = num
            .trim()
            .parse::<i64>()
            .map_err(RationalParseError::Numerator)?;
        let den = match den {
            Some(d) => d
                .trim()
                .parse::<i64>()
                .map_err(RationalParseError::Denominator)?,
            None => 1,
        };

        Ok(Rational::new(num, den))
    }
}

impl Ring for RationalField {
    type Element = Rational;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.checked_add(b).unwrap_or_else(|| overflow("addition"))
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.checked_sub(b).unwrap_or_else(|| overflow("subtraction"))
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.checked_mul(b)
            .unwrap_or_else(|| overflow("multiplication"))
    }

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.add(a, b);
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.sub(a, b);
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.mul(a, b);
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        a.neg()
    }

    fn zero(&self) -> Self::Element {
        Rational::zero()
    }

    fn one(&self) -> Self::Element {
        Rational::one()
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        if e > u32::MAX as u64 {
            panic!("Power of exponentation is larger than 2^32: {}", e);
        }
        b.pow(e as i64)
    }

    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        rng.gen_range(range.0..range.1).into()
    }
}

impl Field for RationalField {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.mul(a, &b.inv())
    }

    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.div(a, b);
    }

    fn inv(&self, a: &Self::Element) -> Self::Element {
        a.inv()
    }
}

macro_rules! impl_binary_op {
    ($tr:ident, $f:ident, $tr_assign:ident, $f_assign:ident) => {
        impl $tr<Rational> for Rational {
            type Output = Rational;

            fn $f(self, other: Rational) -> Self::Output {
                Q.$f(&self, &other)
            }
        }

        impl<'a> $tr<&'a Rational> for Rational {
            type Output = Rational;

            fn $f(self, other: &'a Rational) -> Self::Output {
                Q.$f(&self, other)
            }
        }

        impl<'a, 'b> $tr<&'a Rational> for &'b Rational {
            type Output = Rational;

            fn $f(self, other: &'a Rational) -> Self::Output {
                Q.$f(self, other)
            }
        }

        impl $tr_assign<Rational> for Rational {
            fn $f_assign(&mut self, other: Rational) {
                *self = Q.$f(self, &other);
            }
        }

        impl<'a> $tr_assign<&'a Rational> for Rational {
            fn $f_assign(&mut self, other: &'a Rational) {
                *self = Q.$f(self, other);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);
impl_binary_op!(Div, div, DivAssign, div_assign);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Rational::neg(&self)
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational::neg(self)
    }
}
