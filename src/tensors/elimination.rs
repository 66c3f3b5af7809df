//! Gauss-Jordan elimination over any field and any matrix storage.
//!
//! The algorithm only needs the capabilities of a [Field] (subtraction, multiplication,
//! division and a zero test) and read/write access to the entries through [MatrixAccess].
//!
//! ```
//! use rref::{
//!     domains::rational::{Rational, Q},
//!     tensors::elimination::gauss_jordan,
//! };
//!
//! let mut system: Vec<Vec<Rational>> = vec![
//!     vec![2.into(), 0.into(), 4.into()],
//!     vec![0.into(), 2.into(), 6.into()],
//! ];
//! gauss_jordan(&Q, &mut system, 2, 3).unwrap();
//! assert_eq!(system[0][2], 2.into());
//! assert_eq!(system[1][2], 3.into());
//! ```

use std::fmt::Display;

use tracing::{debug, instrument, trace};

use super::matrix::Matrix;
use crate::domains::{Field, Ring};

/// Read and write access to a two-dimensional store of field elements.
///
/// Indices are not validated by the elimination routine; it checks the requested dimensions
/// against [MatrixAccess::shape] once, before any entry is touched.
pub trait MatrixAccess {
    type Element: Clone;

    /// The number of rows and columns that can be accessed.
    fn shape(&self) -> (u32, u32);
    fn get(&self, row: u32, col: u32) -> &Self::Element;
    fn set(&mut self, row: u32, col: u32, value: Self::Element);

    /// Swap the first `ncols` entries of rows `a` and `b`.
    fn swap_rows(&mut self, a: u32, b: u32, ncols: u32) {
        for j in 0..ncols {
            let x = self.get(a, j).clone();
            let y = self.get(b, j).clone();
            self.set(a, j, y);
            self.set(b, j, x);
        }
    }
}

impl<F: Ring> MatrixAccess for Matrix<F> {
    type Element = F::Element;

    fn shape(&self) -> (u32, u32) {
        (self.nrows, self.ncols)
    }

    #[inline]
    fn get(&self, row: u32, col: u32) -> &Self::Element {
        &self[(row, col)]
    }

    #[inline]
    fn set(&mut self, row: u32, col: u32, value: Self::Element) {
        self[(row, col)] = value;
    }

    fn swap_rows(&mut self, a: u32, b: u32, ncols: u32) {
        for l in 0..ncols {
            self.data
                .swap((self.ncols * a + l) as usize, (self.ncols * b + l) as usize);
        }
    }
}

/// A list of rows. The number of accessible columns is the length of the shortest row.
impl<T: Clone> MatrixAccess for Vec<Vec<T>> {
    type Element = T;

    fn shape(&self) -> (u32, u32) {
        let cols = self.iter().map(|r| r.len()).min().unwrap_or(0);
        (
            u32::try_from(self.len()).unwrap_or(u32::MAX),
            u32::try_from(cols).unwrap_or(u32::MAX),
        )
    }

    #[inline]
    fn get(&self, row: u32, col: u32) -> &Self::Element {
        &self[row as usize][col as usize]
    }

    #[inline]
    fn set(&mut self, row: u32, col: u32, value: Self::Element) {
        self[row as usize][col as usize] = value;
    }

    fn swap_rows(&mut self, a: u32, b: u32, ncols: u32) {
        if a == b {
            return;
        }

        let (lo, hi) = (a.min(b) as usize, a.max(b) as usize);
        let (head, tail) = self.split_at_mut(hi);
        head[lo][..ncols as usize].swap_with_slice(&mut tail[0][..ncols as usize]);
    }
}

/// Errors from Gauss-Jordan elimination. The matrix is not modified when an error is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EliminationError {
    /// The system needs at least one row, at least one column and no more rows than columns.
    InvalidDimensions { nrows: u32, ncols: u32 },
    /// The requested dimensions exceed the storage.
    OutOfBounds {
        nrows: u32,
        ncols: u32,
        shape: (u32, u32),
    },
}

impl Display for EliminationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EliminationError::InvalidDimensions { nrows, ncols } => write!(
                f,
                "Invalid dimensions for elimination: {} rows and {} columns",
                nrows, ncols
            ),
            EliminationError::OutOfBounds {
                nrows,
                ncols,
                shape,
            } => write!(
                f,
                "Cannot eliminate a {}x{} system in a {}x{} matrix",
                nrows, ncols, shape.0, shape.1
            ),
        }
    }
}

impl std::error::Error for EliminationError {}

/// Bring the first `m` rows and `n` columns of `store` into reduced row-echelon form, in-place.
///
/// For every pivot row `i`, a zero pivot at `(i, i)` is replaced by swapping in the first row below
/// it with a non-zero entry in column `i`. The pivot row is divided by the pivot, after which
/// column `i` is eliminated from all other rows.
///
/// If no row has a non-zero entry in the pivot column, the matrix is singular and row `i` is
/// left as it is. This is not an error: the other rows are still reduced and `Ok` is returned.
///
/// Rows whose entry in the pivot column is already zero are not updated. Over an exact field this
/// changes nothing. Over floating point numbers it means that an `inf` or `NaN` in the pivot row
/// does not spread into those rows, where subtracting `0 * inf` would produce `NaN`.
///
/// Returns [EliminationError::InvalidDimensions] if `m` or `n` is zero or `n < m`, and
/// [EliminationError::OutOfBounds] if `m` or `n` exceeds the shape of `store`.
#[instrument(level = "trace", skip(field, store))]
pub fn gauss_jordan<F, S>(field: &F, store: &mut S, m: u32, n: u32) -> Result<(), EliminationError>
where
    F: Field,
    S: MatrixAccess<Element = F::Element> + ?Sized,
{
    if m < 1 || n < 1 || n < m {
        return Err(EliminationError::InvalidDimensions { nrows: m, ncols: n });
    }

    let shape = store.shape();
    if m > shape.0 || n > shape.1 {
        return Err(EliminationError::OutOfBounds {
            nrows: m,
            ncols: n,
            shape,
        });
    }

    for i in 0..m {
        if F::is_zero(store.get(i, i)) {
            match (i + 1..m).find(|&k| !F::is_zero(store.get(k, i))) {
                Some(k) => {
                    trace!("Swapping rows {} and {}", i, k);
                    store.swap_rows(i, k, n);
                }
                None => {
                    debug!("No pivot in column {}: the matrix is singular", i);
                    continue;
                }
            }
        }

        let pivot = store.get(i, i).clone();
        if !field.is_one(&pivot) {
            for j in 0..n {
                let e = field.div(store.get(i, j), &pivot);
                store.set(i, j, e);
            }
        }

        for k in 0..m {
            if k == i {
                continue;
            }

            let factor = store.get(k, i).clone();
            if F::is_zero(&factor) {
                continue;
            }

            for j in 0..n {
                let mut e = store.get(k, j).clone();
                field.sub_mul_assign(&mut e, &factor, store.get(i, j));
                store.set(k, j, e);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use crate::{
        domains::{
            float::RR,
            rational::{Rational, Q},
        },
        tensors::matrix::Matrix,
    };

    use super::{gauss_jordan, EliminationError, MatrixAccess};

    fn rational_matrix(rows: &[&[i64]]) -> Matrix<crate::domains::rational::RationalField> {
        Matrix::from_nested_vec(
            rows.iter()
                .map(|r| r.iter().map(|&x| Rational::from(x)).collect())
                .collect(),
            Q,
        )
        .unwrap()
    }

    #[test]
    fn zero_factor_rows_are_untouched() {
        let mut m = Matrix::from_nested_vec(
            vec![vec![1., 0., f64::INFINITY], vec![0., 1., 2.]],
            RR,
        )
        .unwrap();
        m.gauss_jordan().unwrap();
        assert_eq!(m.data(), &[1., 0., f64::INFINITY, 0., 1., 2.]);
    }

    #[test]
    fn already_reduced() {
        let mut m = rational_matrix(&[&[1, 0, 3], &[0, 1, 5]]);
        let orig = m.clone();

        m.gauss_jordan().unwrap();
        assert_eq!(m, orig);
        assert!(m.is_identity_block());
    }

    #[test]
    fn normalize() {
        let mut m = rational_matrix(&[&[2, 0, 4], &[0, 2, 6]]);
        m.gauss_jordan().unwrap();
        assert_eq!(m, rational_matrix(&[&[1, 0, 2], &[0, 1, 3]]));
    }

    #[test]
    fn invalid_dimensions() {
        let mut m = rational_matrix(&[&[1, 2], &[3, 4], &[5, 6]]);
        let orig = m.clone();

        assert_eq!(
            m.gauss_jordan(),
            Err(EliminationError::InvalidDimensions { nrows: 3, ncols: 2 })
        );
        assert_eq!(m, orig);

        assert_eq!(
            gauss_jordan(&Q, &mut m, 0, 2),
            Err(EliminationError::InvalidDimensions { nrows: 0, ncols: 2 })
        );
        assert_eq!(
            gauss_jordan(&Q, &mut m, 1, 0),
            Err(EliminationError::InvalidDimensions { nrows: 1, ncols: 0 })
        );
    }

    #[test]
    fn out_of_bounds() {
        let mut m = rational_matrix(&[&[1, 2, 3], &[4, 5, 6]]);
        let orig = m.clone();

        assert_eq!(
            gauss_jordan(&Q, &mut m, 2, 4),
            Err(EliminationError::OutOfBounds {
                nrows: 2,
                ncols: 4,
                shape: (2, 3)
            })
        );
        assert_eq!(m, orig);

        let mut ragged = vec![vec![1., 2., 3.], vec![4., 5.]];
        assert_eq!(ragged.shape(), (2, 2));
        assert!(gauss_jordan(&RR, &mut ragged, 2, 3).is_err());
        assert_eq!(ragged, vec![vec![1., 2., 3.], vec![4., 5.]]);
    }

    #[test]
    fn pivot_swap() {
        let mut m = rational_matrix(&[&[0, 1, 2], &[1, 0, 3]]);
        m.gauss_jordan().unwrap();
        assert_eq!(m, rational_matrix(&[&[1, 0, 3], &[0, 1, 2]]));
        assert_eq!(m.solution(), Some(vec![3.into(), 2.into()]));
    }

    #[test]
    fn singular() {
        let mut m = rational_matrix(&[&[1, 2, 3], &[1, 2, 3]]);
        assert_eq!(m.gauss_jordan(), Ok(()));
        assert_eq!(m, rational_matrix(&[&[1, 2, 3], &[0, 0, 0]]));
        assert!(!m.is_identity_block());
        assert_eq!(m.solution(), None);

        // a zero column leaves its row untouched
        let mut m = rational_matrix(&[&[0, 0, 1], &[0, 1, 2]]);
        let orig = m.clone();
        assert_eq!(m.gauss_jordan(), Ok(()));
        assert_eq!(m, orig);
    }

    #[test]
    fn three_equations() {
        let mut m = rational_matrix(&[&[2, -3, 4, 6], &[3, 4, -5, 7], &[4, -5, 6, 8]]);
        m.gauss_jordan().unwrap();
        assert_eq!(
            m.solution(),
            Some(vec![(7, 3).into(), (20, 3).into(), (16, 3).into()])
        );
    }

    #[test]
    fn float() {
        let mut m = Matrix::from_nested_vec(
            vec![
                vec![2., -3., 4., 6.],
                vec![3., 4., -5., 7.],
                vec![4., -5., 6., 8.],
            ],
            RR,
        )
        .unwrap();
        m.gauss_jordan().unwrap();

        let expected = [7. / 3., 20. / 3., 16. / 3.];
        for (i, e) in expected.iter().enumerate() {
            let i = i as u32;
            assert!((m[(i, 3)] - e).abs() < 1e-12);
            assert!((m[(i, i)] - 1.).abs() < 1e-12);
        }
    }

    #[test]
    fn nested_vec_store() {
        // the fourth column lies outside the system and must not be touched
        let mut rows: Vec<Vec<Rational>> = vec![
            vec![0.into(), 2.into(), 4.into(), 9.into()],
            vec![3.into(), 0.into(), 6.into(), 8.into()],
        ];
        gauss_jordan(&Q, &mut rows, 2, 3).unwrap();

        assert_eq!(
            rows,
            vec![
                vec![1.into(), 0.into(), 2.into(), 9.into()],
                vec![0.into(), 1.into(), 2.into(), 8.into()],
            ]
        );
    }

    #[test]
    fn partial_system() {
        // only the leading 1x2 block is reduced
        let mut m = rational_matrix(&[&[4, 2, 1], &[1, 1, 1]]);
        gauss_jordan(&Q, &mut m, 1, 2).unwrap();
        assert_eq!(
            m.data(),
            &[1.into(), (1, 2).into(), 1.into(), 1.into(), 1.into(), 1.into()]
        );
    }
}
