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

use crate::FftDirection;
use crate::complex_pass::{StageKernel, apply_stage};
use crate::err::{WaftError, try_vec};
use crate::factorize::{COMPLEX_RADIXES, factorize};
use crate::traits::FftSample;
use crate::util::{strided_len, unit_phasor};

/// Precomputed factorization and trigonometric tables for complex
/// transforms of one fixed length. Reusable across any number of
/// transforms of that length, in either direction.
#[derive(Clone, Debug)]
pub struct ComplexWavetable<T> {
    pub(crate) n: usize,
    pub(crate) factors: Vec<usize>,
    pub(crate) twiddle_offsets: Vec<usize>,
    pub(crate) trig: Vec<Complex<T>>,
    pub(crate) kernels: Vec<StageKernel<T>>,
}

impl<T: FftSample> ComplexWavetable<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(n: usize) -> Result<ComplexWavetable<T>, WaftError> {
        let factors = factorize(n, COMPLEX_RADIXES)?;
        let kernels: Vec<StageKernel<T>> = factors
            .iter()
            .map(|&f| StageKernel::for_factor(f, 7))
            .collect();

        let mut trig: Vec<Complex<T>> = try_vec![];
        trig.try_reserve_exact(n)
            .map_err(|_| WaftError::OutOfMemory(n))?;
        let mut twiddle_offsets = Vec::with_capacity(factors.len());

        let d_theta = -2.0 * std::f64::consts::PI / n as f64;
        let mut product = 1usize;
        let mut t = 0usize;
        for &factor in factors.iter() {
            twiddle_offsets.push(t);
            let product_1 = product;
            product *= factor;
            let q = n / product;
            for j in 1..factor {
                let mut m = 0usize;
                for _k in 1..=q {
                    m = (m + j * product_1) % n;
                    trig.push(unit_phasor(d_theta * m as f64));
                    t += 1;
                }
            }
            if t > n {
                return Err(WaftError::TrigTableOverrun);
            }
        }

        Ok(ComplexWavetable {
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

    /// Replaces this table's contents with a copy of `src`. Both
    /// tables must have been built for the same length.
    pub fn copy_from(&mut self, src: &ComplexWavetable<T>) -> Result<(), WaftError> {
        if self.n != src.n {
            return Err(WaftError::LengthMismatch(self.n, src.n));
        }
        self.factors.clone_from(&src.factors);
        self.twiddle_offsets.clone_from(&src.twiddle_offsets);
        self.trig.clone_from(&src.trig);
        self.kernels.clone_from(&src.kernels);
        Ok(())
    }

    /// Scratch storage sized for this table's length and factors.
    pub fn workspace(&self) -> Result<ComplexWorkspace<T>, WaftError> {
        let max_factor = self.factors.iter().copied().max().unwrap_or(1);
        Ok(ComplexWorkspace {
            n: self.n,
            scratch: try_vec![Complex::default(); self.n],
            stage: try_vec![Complex::default(); max_factor],
        })
    }
}

/// Per-call scratch for complex transforms. Holds the ping-pong
/// buffer and the small per-column buffer the generic kernel uses.
#[derive(Clone, Debug)]
pub struct ComplexWorkspace<T> {
    pub(crate) n: usize,
    pub(crate) scratch: Vec<Complex<T>>,
    pub(crate) stage: Vec<Complex<T>>,
}

impl<T: FftSample> ComplexWorkspace<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(n: usize) -> Result<ComplexWorkspace<T>, WaftError> {
        ComplexWavetable::<T>::new(n)?.workspace()
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

/// In-place transform of `n` elements spaced `stride` apart in `data`.
/// Unnormalized in both directions.
pub fn complex_transform<T: FftSample>(
    data: &mut [Complex<T>],
    stride: usize,
    wavetable: &ComplexWavetable<T>,
    work: &mut ComplexWorkspace<T>,
    direction: FftDirection,
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

    let ComplexWorkspace { scratch, stage, .. } = work;

    let mut state = Active::Data;
    let mut product = 1usize;
    for (i, kernel) in wavetable.kernels.iter().enumerate() {
        product *= wavetable.factors[i];
        let twiddles = &wavetable.trig[wavetable.twiddle_offsets[i]..];
        match state {
            Active::Data => {
                apply_stage(
                    kernel, data, stride, scratch, 1, direction, product, n, twiddles, stage,
                );
                state = Active::Scratch;
            }
            Active::Scratch => {
                apply_stage(
                    kernel, scratch, 1, data, stride, direction, product, n, twiddles, stage,
                );
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

pub fn complex_forward<T: FftSample>(
    data: &mut [Complex<T>],
    stride: usize,
    wavetable: &ComplexWavetable<T>,
    work: &mut ComplexWorkspace<T>,
) -> Result<(), WaftError>
where
    f64: AsPrimitive<T>,
{
    complex_transform(data, stride, wavetable, work, FftDirection::Forward)
}

pub fn complex_backward<T: FftSample>(
    data: &mut [Complex<T>],
    stride: usize,
    wavetable: &ComplexWavetable<T>,
    work: &mut ComplexWorkspace<T>,
) -> Result<(), WaftError>
where
    f64: AsPrimitive<T>,
{
    complex_transform(data, stride, wavetable, work, FftDirection::Inverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft;
    use rand::Rng;

    fn noise(n: usize) -> Vec<Complex<f64>> {
        let mut rng = rand::rng();
        (0..n)
            .map(|_| Complex {
                re: rng.random_range(-1.0..1.0),
                im: rng.random_range(-1.0..1.0),
            })
            .collect()
    }

    #[test]
    fn wavetable_rejects_zero() {
        assert!(matches!(
            ComplexWavetable::<f64>::new(0),
            Err(WaftError::ZeroLength)
        ));
    }

    #[test]
    fn trig_table_fits_length() {
        for n in 1..=64usize {
            let wt = ComplexWavetable::<f64>::new(n).unwrap();
            assert!(wt.trig.len() <= n, "n = {n}");
            assert_eq!(wt.factors.iter().product::<usize>(), n);
        }
    }

    #[test]
    fn length_one_is_identity() {
        let wt = ComplexWavetable::<f64>::new(1).unwrap();
        let mut work = wt.workspace().unwrap();
        let mut data = vec![Complex::new(3.5, -1.25)];
        complex_forward(&mut data, 1, &wt, &mut work).unwrap();
        assert_eq!(data[0], Complex::new(3.5, -1.25));
    }

    #[test]
    fn copy_from_needs_matching_length() {
        let a = ComplexWavetable::<f64>::new(12).unwrap();
        let mut b = ComplexWavetable::<f64>::new(16).unwrap();
        assert!(matches!(
            b.copy_from(&a),
            Err(WaftError::LengthMismatch(16, 12))
        ));
    }

    #[test]
    fn mismatched_workspace_is_rejected() {
        let wt = ComplexWavetable::<f64>::new(8).unwrap();
        let mut work = ComplexWorkspace::<f64>::new(9).unwrap();
        let mut data = vec![Complex::default(); 8];
        assert!(matches!(
            complex_forward(&mut data, 1, &wt, &mut work),
            Err(WaftError::LengthMismatch(8, 9))
        ));
    }

    #[test]
    fn short_buffer_is_rejected() {
        let wt = ComplexWavetable::<f64>::new(8).unwrap();
        let mut work = wt.workspace().unwrap();
        let mut data = vec![Complex::<f64>::default(); 14];
        assert!(matches!(
            complex_forward(&mut data, 2, &wt, &mut work),
            Err(WaftError::BufferTooSmall(14, 15))
        ));
    }

    #[test]
    fn forward_matches_direct_transform() {
        for n in 1..=99usize {
            let wt = ComplexWavetable::<f64>::new(n).unwrap();
            let mut work = wt.workspace().unwrap();
            for stride in 1..=3usize {
                let signal = noise(n);
                let mut expected = vec![Complex::default(); n];
                dft::complex_forward(&signal, 1, &mut expected, 1, n).unwrap();

                let pad = Complex::new(1000.0, 2000.0);
                let mut data = vec![pad; stride * (n - 1) + 1];
                for (i, &v) in signal.iter().enumerate() {
                    data[stride * i] = v;
                }
                complex_forward(&mut data, stride, &wt, &mut work).unwrap();

                let tol = 1e-12 * n as f64;
                for i in 0..n {
                    let d = data[stride * i] - expected[i];
                    assert!(
                        d.norm() < tol,
                        "n = {n}, stride = {stride}, bin {i}: {} vs {}",
                        data[stride * i],
                        expected[i]
                    );
                }
                for (i, &v) in data.iter().enumerate() {
                    if i % stride != 0 {
                        assert_eq!(v, pad, "n = {n}, stride = {stride}, slot {i}");
                    }
                }
            }
        }
    }

    #[test]
    fn forward_then_inverse_scales_by_n() {
        for n in 1..=99usize {
            let wt = ComplexWavetable::<f64>::new(n).unwrap();
            let mut work = wt.workspace().unwrap();
            let signal = noise(n);
            let mut data = signal.clone();
            complex_forward(&mut data, 1, &wt, &mut work).unwrap();
            complex_backward(&mut data, 1, &wt, &mut work).unwrap();
            let tol = 1e-11 * n as f64;
            for i in 0..n {
                let d = data[i] - signal[i] * n as f64;
                assert!(d.norm() < tol, "n = {n}, element {i}");
            }
        }
    }

    #[test]
    fn roundtrip_f32() {
        for n in [2usize, 3, 4, 5, 6, 7, 8, 9, 16, 30, 49, 60, 99] {
            let wt = ComplexWavetable::<f32>::new(n).unwrap();
            let mut work = wt.workspace().unwrap();
            let mut rng = rand::rng();
            let signal: Vec<Complex<f32>> = (0..n)
                .map(|_| Complex {
                    re: rng.random_range(-1.0f32..1.0),
                    im: rng.random_range(-1.0f32..1.0),
                })
                .collect();
            let mut data = signal.clone();
            complex_forward(&mut data, 1, &wt, &mut work).unwrap();
            complex_backward(&mut data, 1, &wt, &mut work).unwrap();
            let scale = 1.0 / n as f32;
            for i in 0..n {
                let d = data[i] * scale - signal[i];
                assert!(d.norm() < 1e-4, "n = {n}, element {i}");
            }
        }
    }

    #[test]
    fn pulse_spectrum_is_pure_phase() {
        let n = 60usize;
        let k = 17usize;
        let wt = ComplexWavetable::<f64>::new(n).unwrap();
        let mut work = wt.workspace().unwrap();
        let z = Complex::new(0.75, -0.5);
        let mut data = vec![Complex::default(); n];
        data[k] = z;
        complex_forward(&mut data, 1, &wt, &mut work).unwrap();
        let d_theta = -2.0 * std::f64::consts::PI / n as f64;
        for j in 0..n {
            let expected = z * unit_phasor::<f64>(d_theta * ((j * k) % n) as f64);
            let d = data[j] - expected;
            assert!(d.norm() < 1e-13, "bin {j}: {} vs {}", data[j], expected);
        }
    }

    #[test]
    fn constant_signal_concentrates_in_dc() {
        let n = 45usize;
        let wt = ComplexWavetable::<f64>::new(n).unwrap();
        let mut work = wt.workspace().unwrap();
        let z = Complex::new(-1.25, 2.0);
        let mut data = vec![z; n];
        complex_forward(&mut data, 1, &wt, &mut work).unwrap();
        let d0 = data[0] - z * n as f64;
        assert!(d0.norm() < 1e-12 * n as f64);
        for j in 1..n {
            assert!(data[j].norm() < 1e-12 * n as f64, "bin {j}");
        }
    }

    #[test]
    fn copied_table_transforms_identically() {
        let n = 36usize;
        let src = ComplexWavetable::<f64>::new(n).unwrap();
        let mut dst = ComplexWavetable::<f64>::new(n).unwrap();
        dst.copy_from(&src).unwrap();
        let mut work = src.workspace().unwrap();
        let signal = noise(n);
        let mut a = signal.clone();
        let mut b = signal;
        complex_forward(&mut a, 1, &src, &mut work).unwrap();
        complex_forward(&mut b, 1, &dst, &mut work).unwrap();
        assert_eq!(a, b);
    }
}
