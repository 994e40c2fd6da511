use core::fmt;

use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Zero};

use crate::error::CategoryError;

/// A dense matrix of rationals, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    entries: Vec<Rational64>,
}

impl Matrix {
    /// A `rows x cols` matrix from its entries in row-major order.
    pub fn new(rows: usize, cols: usize, entries: Vec<Rational64>) -> Result<Self, CategoryError> {
        if entries.len() != rows * cols {
            return Err(CategoryError::DimensionMismatch {
                expected: rows * cols,
                actual: entries.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            entries,
        })
    }

    /// A matrix with `cols` columns from a list of rows, all of length `cols`.
    pub fn from_rows(cols: usize, rows: Vec<Vec<Rational64>>) -> Result<Self, CategoryError> {
        let nrows = rows.len();
        let mut entries = Vec::with_capacity(nrows * cols);
        for row in rows {
            if row.len() != cols {
                return Err(CategoryError::DimensionMismatch {
                    expected: cols,
                    actual: row.len(),
                });
            }
            entries.extend(row);
        }
        Ok(Self {
            rows: nrows,
            cols,
            entries,
        })
    }

    pub fn zero(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: vec![Rational64::zero(); rows * cols],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zero(n, n);
        for i in 0..n {
            m.entries[i * n + i] = Rational64::one();
        }
        m
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<Rational64> {
        (i < self.rows && j < self.cols).then(|| self.entries[i * self.cols + j])
    }

    pub fn row(&self, i: usize) -> Option<&[Rational64]> {
        (i < self.rows).then(|| &self.entries[i * self.cols..(i + 1) * self.cols])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rational64]> + '_ {
        (0..self.rows).map(move |i| &self.entries[i * self.cols..(i + 1) * self.cols])
    }

    /// Is this a square identity matrix?
    pub fn is_one(&self) -> bool {
        self.rows == self.cols && *self == Self::identity(self.rows)
    }

    /// The product `v * self` of the row vector `v` with this matrix.
    pub fn vector_times(&self, v: &[Rational64]) -> Result<Vec<Rational64>, CategoryError> {
        if v.len() != self.rows {
            return Err(CategoryError::DimensionMismatch {
                expected: self.rows,
                actual: v.len(),
            });
        }
        let mut result = vec![Rational64::zero(); self.cols];
        for (coefficient, row) in v.iter().zip(self.rows()) {
            if coefficient.is_zero() {
                continue;
            }
            for (r, x) in result.iter_mut().zip(row) {
                *r = coefficient
                    .checked_mul(x)
                    .and_then(|t| r.checked_add(&t))
                    .ok_or_else(overflow)?;
            }
        }
        Ok(result)
    }

    /// The reduced row echelon form, together with the pivot columns.
    ///
    /// Fails with [`CategoryError::Overflow`] when an intermediate entry does not fit in a
    /// [`Rational64`].
    pub fn echelon_form(&self) -> Result<(Matrix, Vec<usize>), CategoryError> {
        let mut m = self.clone();
        let mut pivots = Vec::new();
        let mut r = 0;
        for c in 0..m.cols {
            if r == m.rows {
                break;
            }
            let Some(p) = (r..m.rows).find(|&i| !m.entries[i * m.cols + c].is_zero()) else {
                continue;
            };
            m.swap_rows(r, p);
            let inverse = Rational64::one()
                .checked_div(&m.entries[r * m.cols + c])
                .ok_or_else(overflow)?;
            for j in 0..m.cols {
                let entry = &mut m.entries[r * m.cols + j];
                *entry = entry.checked_mul(&inverse).ok_or_else(overflow)?;
            }
            for i in 0..m.rows {
                let factor = m.entries[i * m.cols + c];
                if i == r || factor.is_zero() {
                    continue;
                }
                for j in 0..m.cols {
                    let x = m.entries[r * m.cols + j];
                    let entry = &mut m.entries[i * m.cols + j];
                    *entry = factor
                        .checked_mul(&x)
                        .and_then(|t| entry.checked_sub(&t))
                        .ok_or_else(overflow)?;
                }
            }
            pivots.push(c);
            r += 1;
        }
        Ok((m, pivots))
    }

    pub fn rank(&self) -> Result<usize, CategoryError> {
        Ok(self.echelon_form()?.1.len())
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.entries.swap(a * self.cols + j, b * self.cols + j);
        }
    }
}

fn overflow() -> CategoryError {
    CategoryError::Overflow {
        operation: "rational matrix arithmetic",
    }
}

/// Rows are printed between brackets, with every entry right-aligned to the widest one:
///
/// ```rust
/// # use category_constructions::prelude::*;
/// # use num_rational::Rational64;
/// let q = |n, d| Rational64::new(n, d);
/// let m = Matrix::from_rows(3, vec![
///     vec![q(1, 1), q(0, 1), q(-1, 2)],
///     vec![q(0, 1), q(1, 1), q(1, 1)],
/// ]).unwrap();
/// assert_eq!(m.to_string(), "[   1    0 -1/2]\n[   0    1    1]");
/// ```
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 || self.cols == 0 {
            return write!(f, "[]");
        }
        let cells: Vec<String> = self.entries.iter().map(ToString::to_string).collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);
        for (i, row) in cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell:>width$}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
