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

/// One decimation stage of the real transform.
///
/// On entry the buffer holds `n / product_1` contiguous half-complex
/// blocks of length `product_1`; on exit it holds `n / product` blocks
/// of length `product`. Each output block gathers `factor` input
/// blocks spaced `n / factor` apart. Spectral lines are packed the
/// half-complex way: line 0 real at offset 0, line `j` at offsets
/// `(2j-1, 2j)`, the Nyquist line (even block lengths) real at the
/// last offset; lines past the midpoint are the conjugates of their
/// mirrors and are not stored.
///
/// `z` and `x` must hold at least `factor` elements each.
#[allow(clippy::too_many_arguments)]
pub(crate) fn real_stage<T: FftSample>(
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
    let one: T = T::one();
    let p = product;
    let p_1 = product / factor;
    let q = n / product;
    let m = n / factor;
    let half_up = factor.div_ceil(2);
    let tw_per_class = (p_1 + 1) / 2 - 1;

    // lines that are real on both sides of the stage
    for k1 in 0..q {
        for (a, za) in z.iter_mut().enumerate().take(factor) {
            *za = Complex {
                re: input[istride * (k1 * p_1 + a * m)],
                im: T::zero(),
            };
        }
        dft_small(kernel, z, x, one);
        let base = k1 * p;
        output[ostride * base] = x[0].re;
        for s in 1..half_up {
            output[ostride * (base + 2 * s * p_1 - 1)] = x[s].re;
            output[ostride * (base + 2 * s * p_1)] = x[s].im;
        }
        if factor % 2 == 0 {
            output[ostride * (base + p - 1)] = x[factor / 2].re;
        }
    }

    // interior lines, twiddled and conjugate-paired
    for k in 1..(p_1 + 1) / 2 {
        for k1 in 0..q {
            let block = k1 * p_1;
            for (a, za) in z.iter_mut().enumerate().take(factor) {
                let idx = istride * (block + a * m + 2 * k - 1);
                let v = Complex {
                    re: input[idx],
                    im: input[idx + istride],
                };
                *za = if a == 0 {
                    v
                } else {
                    twiddles[(a - 1) * tw_per_class + (k - 1)].conj() * v
                };
            }
            dft_small(kernel, z, x, one);
            let base = k1 * p;
            for (s, xs) in x.iter().enumerate().take(factor) {
                let j = s * p_1 + k;
                if s < half_up {
                    output[ostride * (base + 2 * j - 1)] = xs.re;
                    output[ostride * (base + 2 * j)] = xs.im;
                } else {
                    let jm = p - j;
                    output[ostride * (base + 2 * jm - 1)] = xs.re;
                    output[ostride * (base + 2 * jm)] = -xs.im;
                }
            }
        }
    }

    // Nyquist line of the input blocks, present when their length is even
    if p_1 % 2 == 0 {
        let phase: Vec<Complex<T>> = (0..factor)
            .map(|a| unit_phasor(-std::f64::consts::PI * a as f64 / factor as f64))
            .collect();
        for k1 in 0..q {
            let block = k1 * p_1;
            for (a, za) in z.iter_mut().enumerate().take(factor) {
                *za = phase[a] * input[istride * (block + a * m + p_1 - 1)];
            }
            dft_small(kernel, z, x, one);
            let base = k1 * p;
            let full = factor / 2;
            for (s, xs) in x.iter().enumerate().take(full) {
                let j = s * p_1 + p_1 / 2;
                output[ostride * (base + 2 * j - 1)] = xs.re;
                output[ostride * (base + 2 * j)] = xs.im;
            }
            if factor % 2 != 0 {
                output[ostride * (base + p - 1)] = x[(factor - 1) / 2].re;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex_pass::StageKernel;

    // single radix-2 stage over four samples equals the textbook
    // half-complex spectrum of each two-point pair network
    #[test]
    fn first_stage_is_plain_real_dft() {
        let input = [1.0f64, 2.0, 3.0, 4.0];
        let mut output = [0.0f64; 4];
        let mut z = [Complex::default(); 2];
        let mut x = [Complex::default(); 2];
        let kernel = StageKernel::<f64>::for_factor(2, 5);
        real_stage(
            &kernel, 2, &input, 1, &mut output, 1, 2, 4, &[], &mut z, &mut x,
        );
        // blocks (1,3) and (2,4): sums then differences
        assert_eq!(output, [4.0, -2.0, 6.0, -2.0]);
    }
}
