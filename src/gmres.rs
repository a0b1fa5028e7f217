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
//! Restarted GMRES(m) for sparse square systems.
//!
//! Arnoldi with modified Gram-Schmidt and a Givens-rotation least
//! squares update, following Saad, Iterative Methods for Sparse Linear
//! Systems (2nd ed.), algorithm 6.9. The Krylov dimension m defaults to
//! min(n, 10); each restart costs m matrix-vector products.

use crate::err::WaftError;
use crate::sparse::CsrMatrix;
use crate::err::try_vec;

/// Preallocated storage for [`solve`] on n-dimensional systems.
pub struct GmresWorkspace {
    n: usize,
    m: usize,
    /// Restart budget; the solver fails with `NoConvergence` once spent.
    pub max_restarts: usize,
    r: Vec<f64>,
    /// Krylov basis, m + 1 rows of length n.
    v: Vec<f64>,
    /// Hessenberg matrix, (m + 1) x m row-major.
    h: Vec<f64>,
    givens_c: Vec<f64>,
    givens_s: Vec<f64>,
    g: Vec<f64>,
    y: Vec<f64>,
    w: Vec<f64>,
}

impl GmresWorkspace {
    /// Workspace with the default Krylov dimension min(n, 10).
    pub fn new(n: usize) -> Result<GmresWorkspace, WaftError> {
        GmresWorkspace::with_krylov(n, n.min(10))
    }

    /// Workspace with an explicit Krylov dimension m, 1 <= m <= n.
    pub fn with_krylov(n: usize, m: usize) -> Result<GmresWorkspace, WaftError> {
        if n == 0 || m == 0 {
            return Err(WaftError::ZeroLength);
        }
        let m = m.min(n);
        Ok(GmresWorkspace {
            n,
            m,
            max_restarts: 100,
            r: try_vec![0.0; n],
            v: try_vec![0.0; (m + 1) * n],
            h: try_vec![0.0; (m + 1) * m],
            givens_c: try_vec![0.0; m],
            givens_s: try_vec![0.0; m],
            g: try_vec![0.0; m + 1],
            y: try_vec![0.0; m],
            w: try_vec![0.0; n],
        })
    }

    pub fn krylov_dim(&self) -> usize {
        self.m
    }
}

fn norm2(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum::<f64>().sqrt()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(p, q)| p * q).sum()
}

/// Solves A x = b to relative residual `tol`, starting from the initial
/// guess already in `x`. On `NoConvergence` the best iterate reached is
/// still left in `x`.
pub fn solve(
    a: &CsrMatrix,
    b: &[f64],
    x: &mut [f64],
    tol: f64,
    work: &mut GmresWorkspace,
) -> Result<(), WaftError> {
    let n = a.rows();
    if n != a.cols() {
        return Err(WaftError::NotSquare(a.rows(), a.cols()));
    }
    if b.len() != n {
        return Err(WaftError::LengthMismatch(n, b.len()));
    }
    if x.len() != n {
        return Err(WaftError::LengthMismatch(n, x.len()));
    }
    if work.n != n {
        return Err(WaftError::LengthMismatch(n, work.n));
    }

    let m = work.m;
    let bnorm = norm2(b);
    let threshold = tol * bnorm;
    let mut total_iters = 0usize;

    for _restart in 0..work.max_restarts {
        // r = b - A x
        work.r.copy_from_slice(b);
        a.mat_vec(-1.0, x, 1.0, &mut work.r)?;
        let beta = norm2(&work.r);
        if beta <= threshold {
            return Ok(());
        }

        for (dst, src) in work.v[..n].iter_mut().zip(&work.r) {
            *dst = src / beta;
        }
        work.g.fill(0.0);
        work.g[0] = beta;
        work.h.fill(0.0);

        let mut k = m;
        let mut residual = beta;
        for j in 0..m {
            // w = A v_j, then orthogonalize against v_0..v_j.
            a.mat_vec(1.0, &work.v[j * n..(j + 1) * n], 0.0, &mut work.w)?;
            for i in 0..=j {
                let vi = &work.v[i * n..(i + 1) * n];
                let hij = dot(&work.w, vi);
                work.h[i * m + j] = hij;
                for (wv, vv) in work.w.iter_mut().zip(vi) {
                    *wv -= hij * vv;
                }
            }
            let hnext = norm2(&work.w);
            work.h[(j + 1) * m + j] = hnext;

            // Fold earlier rotations into the new column, then form the
            // rotation that annihilates h[j+1][j].
            for i in 0..j {
                let h0 = work.h[i * m + j];
                let h1 = work.h[(i + 1) * m + j];
                work.h[i * m + j] = work.givens_c[i] * h0 + work.givens_s[i] * h1;
                work.h[(i + 1) * m + j] = -work.givens_s[i] * h0 + work.givens_c[i] * h1;
            }
            let hjj = work.h[j * m + j];
            let denom = hjj.hypot(work.h[(j + 1) * m + j]);
            if denom == 0.0 {
                // Exact breakdown: the Krylov space is invariant.
                k = j;
                break;
            }
            work.givens_c[j] = hjj / denom;
            work.givens_s[j] = work.h[(j + 1) * m + j] / denom;
            work.h[j * m + j] = denom;
            work.h[(j + 1) * m + j] = 0.0;
            work.g[j + 1] = -work.givens_s[j] * work.g[j];
            work.g[j] *= work.givens_c[j];

            residual = work.g[j + 1].abs();
            total_iters += 1;

            if residual <= threshold || hnext == 0.0 {
                k = j + 1;
                break;
            }

            for (dst, src) in work.v[(j + 1) * n..(j + 2) * n].iter_mut().zip(&work.w) {
                *dst = src / hnext;
            }
        }

        // Back-substitute y from the k x k triangle of H.
        for i in (0..k).rev() {
            let mut acc = work.g[i];
            for l in (i + 1)..k {
                acc -= work.h[i * m + l] * work.y[l];
            }
            work.y[i] = acc / work.h[i * m + i];
        }
        for j in 0..k {
            let yj = work.y[j];
            for (xi, vv) in x.iter_mut().zip(&work.v[j * n..(j + 1) * n]) {
                *xi += yj * vv;
            }
        }

        if residual <= threshold {
            return Ok(());
        }
    }

    Err(WaftError::NoConvergence(total_iters))
}
