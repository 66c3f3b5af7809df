//! Defines the algebraic traits the solver is generic over.
//!
//! The core trait is [Ring], which has two binary operations, addition and multiplication.
//! Each ring has an associated element type, that should not be confused with the ring type itself.
//! For example:
//! - The field of rational numbers [Q](type@rational::Q) has elements of type [Rational](rational::Rational).
//! - The field of double-precision floats [RR](type@float::RR) has elements of type [f64].
//!
//! The ring elements do not need to implement operations such as addition or multiplication,
//! but rather the ring itself does. The elimination routines are generic over the ring type.
//!
//! The [`Field`] trait extends [`Ring`] with division and inversion. Together with [`Ring::is_zero`]
//! this is the full set of capabilities Gauss-Jordan elimination needs.
pub mod float;
pub mod rational;

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A ring is a set with two binary operations, addition and multiplication.
///
/// Each ring has an element type, that should not be confused with the ring type itself.
/// For example, the field of rational numbers [Q](type@rational::Q) has elements of type [Rational](rational::Rational).
pub trait Ring: Clone + PartialEq + Eq + Hash + Debug + Display {
    /// The element of a ring. For example, the elements of [Q](type@rational::Q), `Q::Element`, are [Rational](rational::Rational).
    type Element: Clone + PartialEq + Debug + Display;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element);
    /// Compute `a -= b * c`.
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        let p = self.mul(b, c);
        self.sub_assign(a, &p);
    }
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element;
    fn is_zero(a: &Self::Element) -> bool;
    fn is_one(&self, a: &Self::Element) -> bool;

    /// Sample an element whose integer representative lies in `[range.0, range.1)`.
    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element;
}

/// A field is a ring that supports division and inversion.
pub trait Field: Ring {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn inv(&self, a: &Self::Element) -> Self::Element;
}
