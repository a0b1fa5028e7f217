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
use num_complex::Complex;
use num_traits::AsPrimitive;

use crate::complex_pass::{StageKernel, dft_small};
use crate::traits::FftSample;
use crate::util::unit_phasor;

/// Reads spectral line `j` from the half-complex block starting at
/// element `base` (block length `b_len`). Lines past the midpoint are
/// reconstructed as conjugates of their mirrors.
#[inline]
fn read_line<T: FftSample>(
    input: &[T],
    istride: usize,
    base: usize,
    j: usize,
    b_len: usize,
) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    if j == 0 {
        Complex {
            re: input[istride * base],
            im: T::zero(),
        }
    } else if 2 * j < b_len {
        Complex {
            re: input[istride * (base + 2 * j - 1)],
            im: input[istride * (base + 2 * j)],
        }
    } else if 2 * j == b_len {
        Complex {
            re: input[istride * (base + b_len - 1)],
            im: T::zero(),
        }
    } else {
        let jm = b_len - j;
        Complex {
            re: input[istride * (base + 2 * jm - 1)],
            im: -input[istride * (base + 2 * jm)],
        }
    }
}

/// One synthesis stage of the half-complex (inverse) transform, the
/// adjoint of [`crate::real_pass::real_stage`]. On entry the buffer
/// holds `product_1` half-complex blocks of length `n / product_1`;
/// on exit it holds `product` blocks of length `n / product`, each
/// input block scattering into `factor` output blocks spaced
/// `n / factor` apart.
///
/// `z` and `x` must hold at least `factor` elements each.
#[allow(clippy::too_many_arguments)]
pub(crate) fn halfcomplex_stage<T: FftSample>(
    kernel: &StageKernel<T>,
    factor: usize,
    input: &[T],
    istride: usize,
    output: &mut [T],
    ostride: usize,
    product: usize,
    n: usize,
    twiddles: &[Complex<T>],
    z: &mut [Complex<T>],
    x: &mut [Complex<T>],
) where
    f64: AsPrimitive<T>,
{
    let minus_one: T = -T::one();
    let p_1 = product / factor;
    let q = n / product;
    let m = n / factor;
    let b_len = factor * q;
    let tw_per_class = (q + 1) / 2 - 1;

    // lines that come out real
    for k1 in 0..p_1 {
        let base = k1 * b_len;
        for (s, zs) in z.iter_mut().enumerate().take(factor) {
            *zs = read_line(input, istride, base, s * q, b_len);
        }
        dft_small(kernel, z, x, minus_one);
        for (a, xa) in x.iter().enumerate().take(factor) {
            output[ostride * (k1 * q + a * m)] = xa.re;
        }
    }

    // interior lines
    for k in 1..(q + 1) / 2 {
        for k1 in 0..p_1 {
            let base = k1 * b_len;
            for (s, zs) in z.iter_mut().enumerate().take(factor) {
                *zs = read_line(input, istride, base, s * q + k, b_len);
            }
            dft_small(kernel, z, x, minus_one);
            for (a, xa) in x.iter().enumerate().take(factor) {
                let v = if a == 0 {
                    *xa
                } else {
                    twiddles[(a - 1) * tw_per_class + (k - 1)] * xa
                };
                let idx = ostride * (k1 * q + a * m + 2 * k - 1);
                output[idx] = v.re;
                output[idx + ostride] = v.im;
            }
        }
    }

    // Nyquist line of the output blocks, present when their length is even
    if q % 2 == 0 {
        let k = q / 2;
        let phase: Vec<Complex<T>> = (0..factor)
            .map(|a| unit_phasor(std::f64::consts::PI * a as f64 / factor as f64))
            .collect();
        for k1 in 0..p_1 {
            let base = k1 * b_len;
            for (s, zs) in z.iter_mut().enumerate().take(factor) {
                *zs = read_line(input, istride, base, s * q + k, b_len);
            }
            dft_small(kernel, z, x, minus_one);
            for (a, xa) in x.iter().enumerate().take(factor) {
                output[ostride * (k1 * q + a * m + q - 1)] = (phase[a] * xa).re;
            }
        }
    }
}
