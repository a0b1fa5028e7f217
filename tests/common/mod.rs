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
//! Signal constructors with known spectra, plus strided-buffer
//! helpers shared by the transform integration tests.

use num_complex::Complex;
use rand::Rng;

fn phasor(arg_num: i64, n: usize) -> Complex<f64> {
    let theta = 2.0 * std::f64::consts::PI * arg_num.rem_euclid(n as i64) as f64 / n as f64;
    Complex::new(theta.cos(), theta.sin())
}

/// A delta at position `k mod n`, scaled by `z`, and its spectrum
/// `fft[j] = z exp(-2πi jk/n)`.
pub fn pulse(k: usize, n: usize, z: Complex<f64>) -> (Vec<Complex<f64>>, Vec<Complex<f64>>) {
    let mut data = vec![Complex::default(); n];
    data[k % n] = z;
    let fft = (0..n)
        .map(|j| z * phasor(-((j * k) as i64), n))
        .collect();
    (data, fft)
}

/// `data[j] = z exp(+2πi jk/n)` and its spectrum, `n z` concentrated
/// at frequency `k mod n`.
pub fn exponential(k: i64, n: usize, z: Complex<f64>) -> (Vec<Complex<f64>>, Vec<Complex<f64>>) {
    let data = (0..n).map(|j| z * phasor(j as i64 * k, n)).collect();
    let mut fft = vec![Complex::default(); n];
    fft[k.rem_euclid(n as i64) as usize] += z * n as f64;
    (data, fft)
}

/// Sum of two complex exponentials; the spectral lines add, so the
/// pair may share a frequency.
pub fn exponential_pair(
    k1: i64,
    z1: Complex<f64>,
    k2: i64,
    z2: Complex<f64>,
    n: usize,
) -> (Vec<Complex<f64>>, Vec<Complex<f64>>) {
    let (d1, f1) = exponential(k1, n, z1);
    let (d2, f2) = exponential(k2, n, z2);
    let data = d1.iter().zip(d2.iter()).map(|(a, b)| a + b).collect();
    let fft = f1.iter().zip(f2.iter()).map(|(a, b)| a + b).collect();
    (data, fft)
}

pub fn noise(n: usize) -> Vec<Complex<f64>> {
    let mut rng = rand::rng();
    (0..n)
        .map(|_| {
            Complex::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            )
        })
        .collect()
}

pub fn real_noise(n: usize) -> Vec<f64> {
    let mut rng = rand::rng();
    (0..n).map(|_| rng.random_range(-1.0..1.0)).collect()
}

/// Lays `src` out with the given element stride, zero in the gaps.
pub fn scatter<X: Copy + Default>(src: &[X], stride: usize) -> Vec<X> {
    let mut out = vec![X::default(); stride * (src.len() - 1) + 1];
    for (i, &v) in src.iter().enumerate() {
        out[stride * i] = v;
    }
    out
}

/// Largest elementwise distance between the strided buffer and the
/// contiguous expectation.
pub fn max_error(data: &[Complex<f64>], stride: usize, expected: &[Complex<f64>]) -> f64 {
    expected
        .iter()
        .enumerate()
        .map(|(i, e)| (data[stride * i] - e).norm())
        .fold(0.0, f64::max)
}

pub fn max_error_real(data: &[f64], stride: usize, expected: &[f64]) -> f64 {
    expected
        .iter()
        .enumerate()
        .map(|(i, e)| (data[stride * i] - e).abs())
        .fold(0.0, f64::max)
}
