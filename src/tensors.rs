//! Dense matrices and Gauss-Jordan elimination.
//!
//! [Matrix](matrix::Matrix) is a row-major store of ring elements. The elimination routine in
//! [elimination] does not depend on it: it works on any storage that implements
//! [MatrixAccess](elimination::MatrixAccess), such as nested vectors.

pub mod elimination;
pub mod matrix;
