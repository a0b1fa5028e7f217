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
//! Direct O(n^2) evaluation of the discrete Fourier sum. Slow by
//! construction; useful as an oracle and for one-off small lengths.

use num_complex::Complex;
use num_traits::AsPrimitive;

use crate::FftDirection;
use crate::err::WaftError;
use crate::traits::FftSample;
use crate::util::strided_len;

/// Computes `output[k] = sum_j input[j] exp(-2πi jk/n)` (forward) or
/// its conjugate-kernel counterpart (inverse), for `n` elements
/// spaced `stride` apart in each buffer.
pub fn complex_transform<T: FftSample>(
    input: &[Complex<T>],
    istride: usize,
    output: &mut [Complex<T>],
    ostride: usize,
    n: usize,
    direction: FftDirection,
) -> Result<(), WaftError>
where
    f64: AsPrimitive<T>,
{
    if n == 0 {
        return Err(WaftError::ZeroLength);
    }
    if istride == 0 || ostride == 0 {
        return Err(WaftError::InvalidStride);
    }
    if input.len() < strided_len(n, istride) {
        return Err(WaftError::BufferTooSmall(
            input.len(),
            strided_len(n, istride),
        ));
    }
    if output.len() < strided_len(n, ostride) {
        return Err(WaftError::BufferTooSmall(
            output.len(),
            strided_len(n, ostride),
        ));
    }

    let d_theta = match direction {
        FftDirection::Forward => -2.0 * std::f64::consts::PI / n as f64,
        FftDirection::Inverse => 2.0 * std::f64::consts::PI / n as f64,
    };

    for k in 0..n {
        let mut sum = Complex::<T>::default();
        let mut exponent = 0usize;
        for j in 0..n {
            let theta = d_theta * exponent as f64;
            let w = Complex {
                re: theta.cos().as_(),
                im: theta.sin().as_(),
            };
            sum = sum + w * input[istride * j];
            exponent = (exponent + k) % n;
        }
        output[ostride * k] = sum;
    }
    Ok(())
}

pub fn complex_forward<T: FftSample>(
    input: &[Complex<T>],
    istride: usize,
    output: &mut [Complex<T>],
    ostride: usize,
    n: usize,
) -> Result<(), WaftError>
where
    f64: AsPrimitive<T>,
{
    complex_transform(input, istride, output, ostride, n, FftDirection::Forward)
}

pub fn complex_backward<T: FftSample>(
    input: &[Complex<T>],
    istride: usize,
    output: &mut [Complex<T>],
    ostride: usize,
    n: usize,
) -> Result<(), WaftError>
where
    f64: AsPrimitive<T>,
{
    complex_transform(input, istride, output, ostride, n, FftDirection::Inverse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_transforms_to_constant() {
        let mut input = vec![Complex::<f64>::default(); 5];
        input[0] = Complex::new(1.0, 0.0);
        let mut output = vec![Complex::<f64>::default(); 5];
        complex_forward(&input, 1, &mut output, 1, 5).unwrap();
        for v in &output {
            assert!((v.re - 1.0).abs() < 1e-14);
            assert!(v.im.abs() < 1e-14);
        }
    }

    #[test]
    fn forward_then_backward_scales_by_n() {
        let input: Vec<Complex<f64>> = (0..6)
            .map(|i| Complex::new(i as f64 + 0.5, 1.0 - i as f64))
            .collect();
        let mut mid = vec![Complex::<f64>::default(); 6];
        let mut back = vec![Complex::<f64>::default(); 6];
        complex_forward(&input, 1, &mut mid, 1, 6).unwrap();
        complex_backward(&mid, 1, &mut back, 1, 6).unwrap();
        for (b, i) in back.iter().zip(input.iter()) {
            assert!((*b - *i * 6.0).norm() < 1e-12);
        }
    }
}
