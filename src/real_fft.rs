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

use crate::complex_pass::StageKernel;
use crate::err::{WaftError, try_vec};
use crate::factorize::{REAL_RADIXES, factorize};
use crate::real_pass::real_stage;
use crate::traits::FftSample;
use crate::util::{strided_len, unit_phasor};

/// Tables for the forward real-to-half-complex transform of one
/// fixed length.
#[derive(Clone, Debug)]
pub struct RealWavetable<T> {
    pub(crate) n: usize,
    pub(crate) factors: Vec<usize>,
    pub(crate) twiddle_offsets: Vec<usize>,
    pub(crate) trig: Vec<Complex<T>>,
    pub(crate) kernels: Vec<StageKernel<T>>,
}

impl<T: FftSample> RealWavetable<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(n: usize) -> Result<RealWavetable<T>, WaftError> {
        let factors = factorize(n, REAL_RADIXES)?;
        let kernels: Vec<StageKernel<T>> = factors
            .iter()
            .map(|&f| StageKernel::for_factor(f, 5))
            .collect();

        let mut trig: Vec<Complex<T>> = try_vec![];
        trig.try_reserve_exact(n / 2)
            .map_err(|_| WaftError::OutOfMemory(n / 2))?;
        let mut twiddle_offsets = Vec::with_capacity(factors.len());

        let d_theta = 2.0 * std::f64::consts::PI / n as f64;
        let mut product = 1usize;
        let mut t = 0usize;
        if n != 1 {
            for &factor in factors.iter() {
                twiddle_offsets.push(t);
                let product_1 = product;
                product *= factor;
                let q = n / product;
                for j in 1..factor {
                    let mut m = 0usize;
                    for _k in 1..(product_1 + 1) / 2 {
                        m = (m + j * q) % n;
                        trig.push(unit_phasor(d_theta * m as f64));
                        t += 1;
                    }
                }
                if t > n / 2 {
                    return Err(WaftError::TrigTableOverrun);
                }
            }
        } else {
            twiddle_offsets.push(0);
        }

        Ok(RealWavetable {
            n,
            factors,
            twiddle_offsets,
            trig,
            kernels,
        })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn copy_from(&mut self, src: &RealWavetable<T>) -> Result<(), WaftError> {
        if self.n != src.n {
            return Err(WaftError::LengthMismatch(self.n, src.n));
        }
        self.factors.clone_from(&src.factors);
        self.twiddle_offsets.clone_from(&src.twiddle_offsets);
        self.trig.clone_from(&src.trig);
        self.kernels.clone_from(&src.kernels);
        Ok(())
    }

    pub fn workspace(&self) -> Result<RealWorkspace<T>, WaftError> {
        RealWorkspace::with_factors(self.n, &self.factors)
    }
}

/// Scratch for real and half-complex transforms: the ping-pong buffer
/// plus the two per-line gather buffers the stage kernels use.
#[derive(Clone, Debug)]
pub struct RealWorkspace<T> {
    pub(crate) n: usize,
    pub(crate) scratch: Vec<T>,
    pub(crate) z: Vec<Complex<T>>,
    pub(crate) x: Vec<Complex<T>>,
}

impl<T: FftSample> RealWorkspace<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(n: usize) -> Result<RealWorkspace<T>, WaftError> {
        let factors = factorize(n, REAL_RADIXES)?;
        RealWorkspace::with_factors(n, &factors)
    }

    pub(crate) fn with_factors(n: usize, factors: &[usize]) -> Result<RealWorkspace<T>, WaftError> {
        let max_factor = factors.iter().copied().max().unwrap_or(1);
        Ok(RealWorkspace {
            n,
            scratch: try_vec![T::zero(); n],
            z: try_vec![Complex::default(); max_factor],
            x: try_vec![Complex::default(); max_factor],
        })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

/// Which buffer holds the intermediate between stages.
#[derive(Clone, Copy, PartialEq)]
enum Active {
    Data,
    Scratch,
}

/// Forward transform of `n` real samples spaced `stride` apart,
/// leaving the half-complex spectrum in place.
pub fn real_transform<T: FftSample>(
    data: &mut [T],
    stride: usize,
    wavetable: &RealWavetable<T>,
    work: &mut RealWorkspace<T>,
) -> Result<(), WaftError>
where
    f64: AsPrimitive<T>,
{
    let n = wavetable.n;
    if n == 0 {
        return Err(WaftError::ZeroLength);
    }
    if stride == 0 {
        return Err(WaftError::InvalidStride);
    }
    if work.n != n {
        return Err(WaftError::LengthMismatch(n, work.n));
    }
    if data.len() < strided_len(n, stride) {
        return Err(WaftError::BufferTooSmall(data.len(), strided_len(n, stride)));
    }
    if n == 1 {
        return Ok(());
    }

    let RealWorkspace { scratch, z, x, .. } = work;

    let mut state = Active::Data;
    let mut product = 1usize;
    for (i, kernel) in wavetable.kernels.iter().enumerate() {
        let factor = wavetable.factors[i];
        product *= factor;
        let twiddles = &wavetable.trig[wavetable.twiddle_offsets[i]..];
        match state {
            Active::Data => {
                real_stage(kernel, factor, data, stride, scratch, 1, product, n, twiddles, z, x);
                state = Active::Scratch;
            }
            Active::Scratch => {
                real_stage(kernel, factor, scratch, 1, data, stride, product, n, twiddles, z, x);
                state = Active::Data;
            }
        }
    }

    if state == Active::Scratch {
        for (i, v) in scratch.iter().enumerate() {
            data[stride * i] = *v;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn trig_table_fits_half_length() {
        for n in 1..=64usize {
            let wt = RealWavetable::<f64>::new(n).unwrap();
            assert!(wt.trig.len() <= n / 2, "n = {n}");
            assert_eq!(wt.factors.iter().product::<usize>(), n);
        }
    }

    #[test]
    fn four_point_spectrum() {
        let wt = RealWavetable::<f64>::new(4).unwrap();
        let mut work = wt.workspace().unwrap();
        let mut data = [1.0f64, 2.0, 3.0, 4.0];
        real_transform(&mut data, 1, &wt, &mut work).unwrap();
        // spectrum of 1,2,3,4: X0 = 10, X1 = -2 + 2i, X2 = -2
        assert!((data[0] - 10.0).abs() < 1e-12);
        assert!((data[1] + 2.0).abs() < 1e-12);
        assert!((data[2] - 2.0).abs() < 1e-12);
        assert!((data[3] + 2.0).abs() < 1e-12);
    }

    #[test]
    fn length_one_is_identity() {
        let wt = RealWavetable::<f64>::new(1).unwrap();
        let mut work = wt.workspace().unwrap();
        let mut data = [7.75f64];
        real_transform(&mut data, 1, &wt, &mut work).unwrap();
        assert_eq!(data[0], 7.75);
    }

    #[test]
    fn matches_direct_transform() {
        let mut rng = rand::rng();
        for n in 1..=99usize {
            let wt = RealWavetable::<f64>::new(n).unwrap();
            let mut work = wt.workspace().unwrap();
            for stride in 1..=3usize {
                let signal: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();
                let complex_in: Vec<Complex<f64>> =
                    signal.iter().map(|&v| Complex::new(v, 0.0)).collect();
                let mut expected = vec![Complex::default(); n];
                crate::dft::complex_forward(&complex_in, 1, &mut expected, 1, n).unwrap();

                let mut data = vec![0.0f64; stride * (n - 1) + 1];
                for (i, &v) in signal.iter().enumerate() {
                    data[stride * i] = v;
                }
                real_transform(&mut data, stride, &wt, &mut work).unwrap();

                let tol = 1e-12 * (n as f64).max(1.0);
                assert!(
                    (data[0] - expected[0].re).abs() < tol,
                    "n = {n}, stride = {stride}, dc"
                );
                for k in 1..=(n - 1) / 2 {
                    let re = data[stride * (2 * k - 1)];
                    let im = data[stride * (2 * k)];
                    assert!(
                        (re - expected[k].re).abs() < tol,
                        "n = {n}, stride = {stride}, bin {k} re"
                    );
                    assert!(
                        (im - expected[k].im).abs() < tol,
                        "n = {n}, stride = {stride}, bin {k} im"
                    );
                }
                if n % 2 == 0 && n > 1 {
                    assert!(
                        (data[stride * (n - 1)] - expected[n / 2].re).abs() < tol,
                        "n = {n}, stride = {stride}, nyquist"
                    );
                }
            }
        }
    }

    #[test]
    fn matches_direct_transform_f32() {
        let mut rng = rand::rng();
        for n in [2usize, 3, 4, 5, 8, 10, 12, 25, 36, 99] {
            let wt = RealWavetable::<f32>::new(n).unwrap();
            let mut work = wt.workspace().unwrap();
            let signal: Vec<f32> = (0..n).map(|_| rng.random_range(-1.0f32..1.0)).collect();
            let complex_in: Vec<Complex<f32>> =
                signal.iter().map(|&v| Complex::new(v, 0.0)).collect();
            let mut expected = vec![Complex::default(); n];
            crate::dft::complex_forward(&complex_in, 1, &mut expected, 1, n).unwrap();

            let mut data = signal;
            real_transform(&mut data, 1, &wt, &mut work).unwrap();

            let tol = 1e-4 * n as f32;
            assert!((data[0] - expected[0].re).abs() < tol, "n = {n}, dc");
            for k in 1..=(n - 1) / 2 {
                assert!((data[2 * k - 1] - expected[k].re).abs() < tol, "n = {n}, bin {k}");
                assert!((data[2 * k] - expected[k].im).abs() < tol, "n = {n}, bin {k}");
            }
            if n % 2 == 0 {
                assert!((data[n - 1] - expected[n / 2].re).abs() < tol, "n = {n}, nyquist");
            }
        }
    }

    #[test]
    fn copied_table_transforms_identically() {
        let n = 30usize;
        let src = RealWavetable::<f64>::new(n).unwrap();
        let mut dst = RealWavetable::<f64>::new(n).unwrap();
        dst.copy_from(&src).unwrap();
        let mut work = src.workspace().unwrap();
        let mut rng = rand::rng();
        let signal: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();
        let mut a = signal.clone();
        let mut b = signal;
        real_transform(&mut a, 1, &src, &mut work).unwrap();
        real_transform(&mut b, 1, &dst, &mut work).unwrap();
        assert_eq!(a, b);
    }
}
