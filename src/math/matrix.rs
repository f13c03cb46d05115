//! Dense matrices over Z_q
//!
//! Entries live in one flat row-major buffer indexed by (row, column). The
//! multiply kernels write into caller-provided output slices and do not
//! allocate.

use serde::{Deserialize, Serialize};

use super::ModQ;
use crate::error::{ensure_dim, invalid_param, Result};

/// Row-major matrix with entries in [0, q)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<u64>,
    rows: usize,
    cols: usize,
    q: u64,
}

impl Matrix {
    /// Build a matrix from a flat row-major buffer
    ///
    /// Fails when the buffer length is not `rows * cols` or an entry is not
    /// reduced modulo q.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<u64>, q: u64) -> Result<Self> {
        let matrix = Self {
            data,
            rows,
            cols,
            q,
        };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Build a matrix entry by entry; `f(row, col)` is reduced modulo q
    pub fn from_fn(
        rows: usize,
        cols: usize,
        q: u64,
        mut f: impl FnMut(usize, usize) -> u64,
    ) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(ModQ::reduce(f(i, j), q));
            }
        }
        Self {
            data,
            rows,
            cols,
            q,
        }
    }

    /// Check shape and range; needed for values that bypassed the
    /// constructors (e.g. deserialized ones)
    pub fn validate(&self) -> Result<()> {
        self.check_len()?;
        if let Some(&bad) = self.data.iter().find(|&&x| x >= self.q) {
            return Err(invalid_param!(
                "matrix entry {} is not reduced mod {}",
                bad,
                self.q
            ));
        }
        Ok(())
    }

    /// The buffer holds exactly rows × cols entries
    fn check_len(&self) -> Result<()> {
        let expected = self.rows.checked_mul(self.cols).ok_or_else(|| {
            invalid_param!("matrix shape {}x{} overflows", self.rows, self.cols)
        })?;
        ensure_dim(expected, self.data.len())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn modulus(&self) -> u64 {
        self.q
    }

    /// Entry at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.data[row * self.cols + col]
    }

    /// Row `i` as a slice
    #[inline]
    pub fn row(&self, i: usize) -> &[u64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// The flat row-major buffer
    pub fn as_slice(&self) -> &[u64] {
        &self.data
    }

    /// out = A·x mod q
    pub fn mul_vec_into(&self, x: &[u64], out: &mut [u64]) -> Result<()> {
        self.check_len()?;
        ensure_dim(self.cols, x.len())?;
        ensure_dim(self.rows, out.len())?;

        for (i, o) in out.iter_mut().enumerate() {
            *o = ModQ::inner_product(self.row(i), x, self.q);
        }
        Ok(())
    }

    /// out = Aᵀ·x mod q
    ///
    /// Walks A row by row so the access pattern stays sequential.
    pub fn transpose_mul_vec_into(&self, x: &[u64], out: &mut [u64]) -> Result<()> {
        self.check_len()?;
        ensure_dim(self.rows, x.len())?;
        ensure_dim(self.cols, out.len())?;

        out.fill(0);
        for (i, &xi) in x.iter().enumerate() {
            if xi == 0 {
                continue;
            }
            for (o, &a) in out.iter_mut().zip(self.row(i)) {
                *o = ModQ::add(*o, ModQ::mul(a, xi, self.q), self.q);
            }
        }
        Ok(())
    }

    /// A·x mod q
    pub fn mul_vec(&self, x: &[u64]) -> Result<Vec<u64>> {
        let mut out = vec![0u64; self.rows];
        self.mul_vec_into(x, &mut out)?;
        Ok(out)
    }

    /// Aᵀ·x mod q
    pub fn transpose_mul_vec(&self, x: &[u64]) -> Result<Vec<u64>> {
        let mut out = vec![0u64; self.cols];
        self.transpose_mul_vec_into(x, &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Q: u64 = 257;

    fn sample() -> Matrix {
        // [1 2 3]
        // [4 5 6]
        Matrix::from_flat(2, 3, vec![1, 2, 3, 4, 5, 6], Q).unwrap()
    }

    #[test]
    fn test_indexing() {
        let m = sample();
        assert_eq!(m.get(0, 2), 3);
        assert_eq!(m.get(1, 0), 4);
        assert_eq!(m.row(1), &[4, 5, 6]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
    }

    #[test]
    fn test_mul_vec() {
        let m = sample();
        assert_eq!(m.mul_vec(&[1, 1, 1]).unwrap(), vec![6, 15]);
        // -1 in the last slot: [1 + 2 - 3, 4 + 5 - 6]
        assert_eq!(m.mul_vec(&[1, 1, Q - 1]).unwrap(), vec![0, 3]);
    }

    #[test]
    fn test_transpose_mul_vec() {
        let m = sample();
        assert_eq!(m.transpose_mul_vec(&[1, 1]).unwrap(), vec![5, 7, 9]);
        assert_eq!(
            m.transpose_mul_vec(&[Q - 1, 0]).unwrap(),
            vec![Q - 1, Q - 2, Q - 3]
        );
    }

    #[test]
    fn test_transpose_agrees_with_explicit_transpose() {
        let m = Matrix::from_fn(3, 4, Q, |i, j| (i * 31 + j * 17 + 5) as u64);
        let t = Matrix::from_fn(4, 3, Q, |i, j| m.get(j, i));
        let x = [200, 3, 256];
        assert_eq!(m.transpose_mul_vec(&x).unwrap(), t.mul_vec(&x).unwrap());
    }

    #[test]
    fn test_from_fn_reduces() {
        let m = Matrix::from_fn(1, 2, Q, |_, j| Q + j as u64);
        assert_eq!(m.as_slice(), &[0, 1]);
    }

    #[test]
    fn test_shape_errors() {
        let m = sample();
        assert!(m.mul_vec(&[1, 1]).unwrap_err().is_dimension_mismatch());
        assert!(m.transpose_mul_vec(&[1, 1, 1]).unwrap_err().is_dimension_mismatch());

        let mut out = [0u64; 3];
        assert!(m.mul_vec_into(&[1, 1, 1], &mut out).is_err());

        assert!(Matrix::from_flat(2, 2, vec![1, 2, 3], Q)
            .unwrap_err()
            .is_dimension_mismatch());
    }

    #[test]
    fn test_short_buffer_rejected_by_kernels() {
        // 2x3 declared, only 4 entries stored
        let m: Matrix =
            serde_json::from_str(r#"{"data": [1, 2, 3, 4], "rows": 2, "cols": 3, "q": 257}"#)
                .unwrap();
        assert!(m.validate().unwrap_err().is_dimension_mismatch());
        assert!(m.mul_vec(&[1, 1, 1]).unwrap_err().is_dimension_mismatch());
        assert!(m.transpose_mul_vec(&[1, 1]).unwrap_err().is_dimension_mismatch());
    }

    #[test]
    fn test_unreduced_entry_rejected() {
        let err = Matrix::from_flat(1, 2, vec![1, Q], Q).unwrap_err();
        assert!(err.is_invalid_parameter());
    }
}
