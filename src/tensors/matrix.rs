use std::{
    fmt::{Display, Write},
    ops::{Index, IndexMut},
    slice::Chunks,
};

use super::elimination::{self, EliminationError};
use crate::domains::{Field, Ring};

/// A matrix with entries that are elements of a ring `F`, stored in row-major order.
///
/// A system of `m` linear equations in `k` unknowns is represented by its augmented
/// `m x (k + 1)` matrix.
#[derive(Clone, PartialEq, Debug)]
pub struct Matrix<F: Ring> {
    pub(crate) data: Vec<F::Element>,
    pub(crate) nrows: u32,
    pub(crate) ncols: u32,
    pub(crate) field: F,
}

impl<F: Ring> Matrix<F> {
    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    pub fn new(nrows: u32, ncols: u32, field: F) -> Matrix<F> {
        Matrix {
            data: (0..nrows as usize * ncols as usize)
                .map(|_| field.zero())
                .collect(),
            nrows,
            ncols,
            field,
        }
    }

    /// Create a new square matrix with `nrows` rows and ones on the main diagonal and zeroes elsewhere.
    pub fn identity(nrows: u32, field: F) -> Matrix<F> {
        Matrix {
            data: (0..nrows as usize * nrows as usize)
                .map(|i| {
                    if i % nrows as usize == i / nrows as usize {
                        field.one()
                    } else {
                        field.zero()
                    }
                })
                .collect(),
            nrows,
            ncols: nrows,
            field,
        }
    }

    /// Convert a linear representation of a matrix to a `Matrix`.
    pub fn from_linear(
        data: Vec<F::Element>,
        nrows: u32,
        ncols: u32,
        field: F,
    ) -> Result<Matrix<F>, MatrixError> {
        if data.len() == nrows as usize * ncols as usize {
            Ok(Matrix {
                data,
                nrows,
                ncols,
                field,
            })
        } else {
            Err(MatrixError::DataLength {
                len: data.len(),
                nrows,
                ncols,
            })
        }
    }

    /// Create a new matrix from a 2-dimensional vector of scalars.
    pub fn from_nested_vec(matrix: Vec<Vec<F::Element>>, field: F) -> Result<Matrix<F>, MatrixError> {
        let nrows = matrix.len() as u32;
        let cols = matrix.first().map(|r| r.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(nrows as usize * cols);
        for d in matrix {
            if d.len() != cols {
                return Err(MatrixError::NotRectangular);
            }

            data.extend(d);
        }

        Ok(Matrix {
            data,
            nrows,
            ncols: cols as u32,
            field,
        })
    }

    /// Create the augmented matrix `[self | rhs]`.
    pub fn augment(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        if self.nrows != rhs.nrows || self.field != rhs.field {
            return Err(MatrixError::ShapeMismatch);
        }

        let mut data = Vec::with_capacity(self.data.len() + rhs.data.len());
        for (l, r) in self.row_iter().zip(rhs.row_iter()) {
            data.extend_from_slice(l);
            data.extend_from_slice(r);
        }

        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols + rhs.ncols,
            field: self.field.clone(),
        })
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows as usize
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols as usize
    }

    /// Return the field of the matrix entries.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Return the entries in row-major order.
    pub fn data(&self) -> &[F::Element] {
        &self.data
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> Chunks<'_, F::Element> {
        self.data.chunks(self.ncols.max(1) as usize)
    }

    /// Apply a function `f` to each entry of the matrix.
    pub fn map<G: Ring>(&self, f: impl Fn(&F::Element) -> G::Element, field: G) -> Matrix<G> {
        Matrix {
            data: self.data.iter().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field,
        }
    }

    /// Check if the leading `nrows x nrows` block is the identity matrix.
    pub fn is_identity_block(&self) -> bool {
        if self.ncols < self.nrows {
            return false;
        }

        (0..self.nrows).all(|i| {
            (0..self.nrows).all(|j| {
                let e = &self[(i, j)];
                if i == j {
                    self.field.is_one(e)
                } else {
                    F::is_zero(e)
                }
            })
        })
    }

    /// Read the solution of a row-reduced augmented matrix `[A | b]` with a single right-hand side.
    /// Returns `None` if the coefficient block is not the identity.
    pub fn solution(&self) -> Option<Vec<F::Element>> {
        if self.ncols != self.nrows + 1 || !self.is_identity_block() {
            return None;
        }

        Some(self.row_iter().map(|r| r[self.nrows as usize].clone()).collect())
    }
}

impl<F: Field> Matrix<F> {
    /// Bring the matrix into reduced row-echelon form in-place, treating every row as an
    /// equation and every column as a pivot candidate or augmented column.
    ///
    /// Rows for which no pivot can be found are left unreduced, so success does not imply
    /// that the system has a unique solution. Check [Matrix::is_identity_block] or
    /// [Matrix::solution] afterwards.
    pub fn gauss_jordan(&mut self) -> Result<(), EliminationError> {
        let field = self.field.clone();
        let (m, n) = (self.nrows, self.ncols);
        elimination::gauss_jordan(&field, self, m, n)
    }
}

impl<F: Ring> Index<u32> for Matrix<F> {
    type Output = [F::Element];

    /// Get the `index`th row of the matrix.
    fn index(&self, index: u32) -> &Self::Output {
        &self.data[index as usize * self.ncols as usize..(index as usize + 1) * self.ncols as usize]
    }
}

impl<F: Ring> Index<(u32, u32)> for Matrix<F> {
    type Output = F::Element;

    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    fn index(&self, index: (u32, u32)) -> &Self::Output {
        &self.data[(index.0 * self.ncols + index.1) as usize]
    }
}

impl<F: Ring> IndexMut<(u32, u32)> for Matrix<F> {
    fn index_mut(&mut self, index: (u32, u32)) -> &mut F::Element {
        &mut self.data[(index.0 * self.ncols + index.1) as usize]
    }
}

impl<F: Ring> Display for Matrix<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('{')?;
        for (ri, r) in self.row_iter().enumerate() {
            f.write_char('{')?;
            for (ci, c) in r.iter().enumerate() {
                write!(f, "{}", c)?;
                if ci + 1 < self.ncols as usize {
                    f.write_char(',')?;
                }
            }
            f.write_char('}')?;
            if ri + 1 < self.nrows as usize {
                f.write_char(',')?;
            }
        }
        f.write_char('}')
    }
}

/// Errors that can occur when constructing matrices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    DataLength { len: usize, nrows: u32, ncols: u32 },
    NotRectangular,
    ShapeMismatch,
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::DataLength { len, nrows, ncols } => write!(
                f,
                "Data length does not match matrix dimensions: {} vs ({},{})",
                len, nrows, ncols
            ),
            MatrixError::NotRectangular => write!(f, "Matrix is not rectangular"),
            MatrixError::ShapeMismatch => write!(f, "The shape of the matrix is not compatible"),
        }
    }
}

impl std::error::Error for MatrixError {}
