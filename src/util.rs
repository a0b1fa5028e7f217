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

use crate::traits::FftSample;

/// `exp(-2*pi*i*index/size)`, evaluated in `f64` and narrowed to `T`.
pub(crate) fn compute_twiddle<T: FftSample>(index: usize, size: usize) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let angle = -2. * std::f64::consts::PI * index as f64 / size as f64;
    Complex {
        re: angle.cos().as_(),
        im: angle.sin().as_(),
    }
}

/// `exp(i*theta)` for an arbitrary angle in `f64`, narrowed to `T`.
pub(crate) fn unit_phasor<T: FftSample>(theta: f64) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    Complex {
        re: theta.cos().as_(),
        im: theta.sin().as_(),
    }
}

/// Minimum slice length for `count` elements spaced `stride` apart.
pub(crate) fn strided_len(count: usize, stride: usize) -> usize {
    if count == 0 { 0 } else { stride * (count - 1) + 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twiddle_quarter_turn() {
        let w: Complex<f64> = compute_twiddle(1, 4);
        assert!((w.re - 0.0).abs() < 1e-15);
        assert!((w.im + 1.0).abs() < 1e-15);
    }

    #[test]
    fn strided_extent() {
        assert_eq!(strided_len(0, 3), 0);
        assert_eq!(strided_len(1, 3), 1);
        assert_eq!(strided_len(4, 3), 10);
    }
}
