use crate::error::{ArtError, ArtResult};

/// Dense row-major matrix backed by a flat buffer of `rows * cols` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Matrix {
    /// Allocates a zero-filled `rows x cols` matrix.
    ///
    /// If `rows * cols` overflows the buffer is left empty; such a matrix
    /// must not be indexed.
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        let len = rows.checked_mul(cols).unwrap_or(0);
        Matrix {
            rows,
            cols,
            data: vec![0.0; len],
        }
    }

    /// Wraps an existing row-major buffer. The buffer length must be `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> ArtResult<Matrix> {
        let expected = rows.checked_mul(cols).unwrap_or(0);
        if data.len() != expected {
            return Err(ArtError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Column vector of shape `(values.len(), 1)`.
    pub fn column(values: &[f64]) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn index(&self, row: usize, col: usize) -> ArtResult<usize> {
        self.cols
            .checked_mul(row)
            .and_then(|base| base.checked_add(col))
            .filter(|&ix| ix < self.data.len())
            .ok_or(ArtError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
    }

    pub fn get(&self, row: usize, col: usize) -> ArtResult<f64> {
        let ix = self.index(row, col)?;
        Ok(self.data[ix])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> ArtResult<()> {
        let ix = self.index(row, col)?;
        self.data[ix] = value;
        Ok(())
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| functor(x)).collect(),
        }
    }

    /// Dense product `self · rhs`, shape `(self.rows, rhs.cols)`.
    pub fn multiply(&self, rhs: &Matrix) -> ArtResult<Matrix> {
        if self.cols != rhs.rows {
            return Err(ArtError::DimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * rhs.data[k * rhs.cols + j];
                }

                res.data[i * res.cols + j] = sum;
            }
        }

        Ok(res)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
