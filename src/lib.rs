//! Exact and floating-point solving of small linear systems.
//!
//! Systems are solved with Gauss-Jordan elimination, generically over any [Field](domains::Field).
//! The exact field of machine-width fractions [Q](type@domains::rational::Q) avoids the rounding
//! error of [RR](type@domains::float::RR), and its values can be printed as repeating decimals:
//!
//! ```
//! use rref::{domains::rational::Q, tensors::matrix::Matrix};
//!
//! let mut system = Matrix::from_nested_vec(
//!     vec![
//!         vec![2.into(), (-3).into(), 4.into(), 6.into()],
//!         vec![3.into(), 4.into(), (-5).into(), 7.into()],
//!         vec![4.into(), (-5).into(), 6.into(), 8.into()],
//!     ],
//!     Q,
//! )
//! .unwrap();
//!
//! system.gauss_jordan().unwrap();
//!
//! let x = system.solution().unwrap();
//! assert_eq!(x[0].to_decimal().unwrap().to_string(), "2.(3)");
//! ```
//!
//! Elimination works on any storage that implements
//! [MatrixAccess](tensors::elimination::MatrixAccess), see [gauss_jordan](tensors::elimination::gauss_jordan).
//! Notable events are reported through [tracing].

pub mod decimal;
pub mod domains;
pub mod tensors;
pub mod utils;
