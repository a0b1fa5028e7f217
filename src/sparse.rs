/*
 * // Copyright (c) Waft Contributors 8/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Sparse matrices in compressed-sparse-row storage.

use crate::err::WaftError;
use crate::err::try_vec;

/// A sparse matrix in CSR form. Row `i` occupies
/// `col_idx[row_ptr[i]..row_ptr[i + 1]]` / `values[...]`, columns in
/// ascending order with no duplicates.
pub struct CsrMatrix {
    rows: usize,
    cols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<f64>,
}

impl CsrMatrix {
    /// Builds a matrix from (row, column, value) triplets. Triplets may
    /// arrive in any order; entries naming the same position are summed.
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        triplets: &[(usize, usize, f64)],
    ) -> Result<CsrMatrix, WaftError> {
        if rows == 0 || cols == 0 {
            return Err(WaftError::ZeroLength);
        }
        for &(r, c, _) in triplets {
            if r >= rows || c >= cols {
                return Err(WaftError::Domain);
            }
        }

        let mut sorted: Vec<(usize, usize, f64)> = triplets.to_vec();
        sorted.sort_by_key(|&(r, c, _)| (r, c));

        let mut counts = try_vec![0usize; rows];
        let mut col_idx = Vec::new();
        let mut values = Vec::new();
        let mut last = None;
        for &(r, c, v) in &sorted {
            if last == Some((r, c)) {
                if let Some(tail) = values.last_mut() {
                    *tail += v;
                }
            } else {
                col_idx.push(c);
                values.push(v);
                counts[r] += 1;
                last = Some((r, c));
            }
        }

        let mut row_ptr = try_vec![0usize; rows + 1];
        for i in 0..rows {
            row_ptr[i + 1] = row_ptr[i] + counts[i];
        }

        Ok(CsrMatrix {
            rows,
            cols,
            row_ptr,
            col_idx,
            values,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// y = alpha * A * x + beta * y.
    pub fn mat_vec(
        &self,
        alpha: f64,
        x: &[f64],
        beta: f64,
        y: &mut [f64],
    ) -> Result<(), WaftError> {
        if x.len() != self.cols {
            return Err(WaftError::LengthMismatch(self.cols, x.len()));
        }
        if y.len() != self.rows {
            return Err(WaftError::LengthMismatch(self.rows, y.len()));
        }
        for i in 0..self.rows {
            let mut acc = 0.0;
            for k in self.row_ptr[i]..self.row_ptr[i + 1] {
                acc += self.values[k] * x[self.col_idx[k]];
            }
            y[i] = alpha * acc + beta * y[i];
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_summed() {
        let a = CsrMatrix::from_triplets(
            2,
            2,
            &[(0, 0, 1.0), (1, 1, 2.0), (0, 0, 3.0), (0, 1, -1.0)],
        )
        .unwrap();
        assert_eq!(a.nnz(), 3);
        let mut y = [0.0; 2];
        a.mat_vec(1.0, &[1.0, 1.0], 0.0, &mut y).unwrap();
        assert_eq!(y, [3.0, 2.0]);
    }

    #[test]
    fn empty_rows_are_allowed() {
        let a = CsrMatrix::from_triplets(3, 3, &[(0, 2, 5.0), (2, 0, 7.0)]).unwrap();
        let mut y = [1.0; 3];
        a.mat_vec(1.0, &[1.0, 1.0, 1.0], 0.0, &mut y).unwrap();
        assert_eq!(y, [5.0, 0.0, 7.0]);
    }

    #[test]
    fn alpha_beta_scaling() {
        let a = CsrMatrix::from_triplets(2, 2, &[(0, 0, 2.0), (1, 0, 1.0), (1, 1, 1.0)]).unwrap();
        let mut y = [10.0, 20.0];
        // y = 2*A*x + 3*y with x = (1, 1)
        a.mat_vec(2.0, &[1.0, 1.0], 3.0, &mut y).unwrap();
        assert_eq!(y, [34.0, 64.0]);
    }

    #[test]
    fn bounds_are_checked() {
        assert!(matches!(
            CsrMatrix::from_triplets(2, 2, &[(2, 0, 1.0)]),
            Err(WaftError::Domain)
        ));
        assert!(CsrMatrix::from_triplets(0, 2, &[]).is_err());

        let a = CsrMatrix::from_triplets(2, 3, &[(0, 0, 1.0)]).unwrap();
        let mut y = [0.0; 2];
        assert_eq!(
            a.mat_vec(1.0, &[1.0, 1.0], 0.0, &mut y),
            Err(WaftError::LengthMismatch(3, 2))
        );
    }
}
