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
use crate::traits::FftSample;
use crate::util::compute_twiddle;

/// Stage kernel resolved once at wavetable construction. Factors with
/// a dedicated butterfly dispatch to it; anything else carries its
/// precomputed roots of unity for the direct digit transform.
#[derive(Clone, Debug)]
pub(crate) enum StageKernel<T> {
    Radix2,
    Radix3,
    Radix4,
    Radix5,
    Radix6,
    Radix7,
    Generic { factor: usize, roots: Vec<Complex<T>> },
}

impl<T: FftSample> StageKernel<T>
where
    f64: AsPrimitive<T>,
{
    /// `fixed_limit` is the largest factor with a dedicated kernel in
    /// the calling transform family (7 for complex, 5 for real and
    /// half-complex).
    pub(crate) fn for_factor(factor: usize, fixed_limit: usize) -> StageKernel<T> {
        match factor {
            2 if fixed_limit >= 2 => StageKernel::Radix2,
            3 if fixed_limit >= 3 => StageKernel::Radix3,
            4 if fixed_limit >= 4 => StageKernel::Radix4,
            5 if fixed_limit >= 5 => StageKernel::Radix5,
            6 if fixed_limit >= 6 => StageKernel::Radix6,
            7 if fixed_limit >= 7 => StageKernel::Radix7,
            _ => {
                let roots = (0..factor).map(|r| compute_twiddle(r, factor)).collect();
                StageKernel::Generic { factor, roots }
            }
        }
    }
}

#[inline]
pub(crate) fn direction_sign<T: FftSample>(direction: FftDirection) -> T
where
    f64: AsPrimitive<T>,
{
    match direction {
        FftDirection::Forward => 1.0.as_(),
        FftDirection::Inverse => (-1.0).as_(),
    }
}

/// Multiplication by `i`.
#[inline]
fn rot90<T: FftSample>(z: Complex<T>) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    Complex {
        re: -z.im,
        im: z.re,
    }
}

#[inline]
pub(crate) fn bf2<T: FftSample>(z: [Complex<T>; 2]) -> [Complex<T>; 2]
where
    f64: AsPrimitive<T>,
{
    [z[0] + z[1], z[0] - z[1]]
}

#[inline]
pub(crate) fn bf3<T: FftSample>(z: [Complex<T>; 3], sigma: T) -> [Complex<T>; 3]
where
    f64: AsPrimitive<T>,
{
    let tau: T = (0.5 * 3f64.sqrt()).as_();
    let half: T = 0.5.as_();
    let t1 = z[1] + z[2];
    let t2 = z[0] - t1 * half;
    let t3 = (z[1] - z[2]) * (-sigma * tau);
    [z[0] + t1, t2 + rot90(t3), t2 - rot90(t3)]
}

#[inline]
pub(crate) fn bf4<T: FftSample>(z: [Complex<T>; 4], sigma: T) -> [Complex<T>; 4]
where
    f64: AsPrimitive<T>,
{
    let t1 = z[0] + z[2];
    let t2 = z[1] + z[3];
    let t3 = z[0] - z[2];
    let t4 = (z[1] - z[3]) * -sigma;
    [t1 + t2, t3 + rot90(t4), t1 - t2, t3 - rot90(t4)]
}

#[inline]
pub(crate) fn bf5<T: FftSample>(z: [Complex<T>; 5], sigma: T) -> [Complex<T>; 5]
where
    f64: AsPrimitive<T>,
{
    let s5: T = (2.0 * std::f64::consts::PI / 5.0).sin().as_();
    let s10: T = (std::f64::consts::PI / 5.0).sin().as_();
    let rt5_4: T = (0.25 * 5f64.sqrt()).as_();
    let quarter: T = 0.25.as_();

    let t1 = z[1] + z[4];
    let t2 = z[2] + z[3];
    let t3 = z[1] - z[4];
    let t4 = z[2] - z[3];
    let t5 = t1 + t2;
    let t6 = (t1 - t2) * rt5_4;
    let t7 = z[0] - t5 * quarter;
    let t8 = t7 + t6;
    let t9 = t7 - t6;
    let t10 = (t3 * s5 + t4 * s10) * -sigma;
    let t11 = (t3 * s10 - t4 * s5) * -sigma;
    [
        z[0] + t5,
        t8 + rot90(t10),
        t9 + rot90(t11),
        t9 - rot90(t11),
        t8 - rot90(t10),
    ]
}

#[inline]
pub(crate) fn bf6<T: FftSample>(z: [Complex<T>; 6], sigma: T) -> [Complex<T>; 6]
where
    f64: AsPrimitive<T>,
{
    // a length-6 transform as two interleaved length-3 ones
    let a = bf3([z[0], z[2], z[4]], sigma);
    let b = bf3([z[3], z[5], z[1]], sigma);
    [
        a[0] + b[0],
        a[1] - b[1],
        a[2] + b[2],
        a[0] - b[0],
        a[1] + b[1],
        a[2] - b[2],
    ]
}

#[inline]
pub(crate) fn bf7<T: FftSample>(z: [Complex<T>; 7], sigma: T) -> [Complex<T>; 7]
where
    f64: AsPrimitive<T>,
{
    let tp = 2.0 * std::f64::consts::PI / 7.0;
    let (c1, c2, c3) = (tp.cos(), (2.0 * tp).cos(), (3.0 * tp).cos());
    let (s1, s2, s3) = (tp.sin(), (2.0 * tp).sin(), (3.0 * tp).sin());

    let t0 = z[1] + z[6];
    let t1 = z[1] - z[6];
    let t2 = z[2] + z[5];
    let t3 = z[2] - z[5];
    let t4 = z[4] + z[3];
    let t5 = z[4] - z[3];
    let t6 = t2 + t0;
    let t7 = t5 + t3;

    let b0 = z[0] + t6 + t4;
    let b1 = (t6 + t4) * (((c1 + c2 + c3) / 3.0 - 1.0).as_());
    let b2 = (t0 - t4) * (((2.0 * c1 - c2 - c3) / 3.0).as_());
    let b3 = (t4 - t2) * (((c1 - 2.0 * c2 + c3) / 3.0).as_());
    let b4 = (t2 - t0) * (((c1 + c2 - 2.0 * c3) / 3.0).as_());
    let b5 = (t7 + t1) * (sigma * ((s1 + s2 - s3) / 3.0).as_());
    let b6 = (t1 - t5) * (sigma * ((2.0 * s1 - s2 + s3) / 3.0).as_());
    let b7 = (t5 - t3) * (sigma * ((s1 - 2.0 * s2 - s3) / 3.0).as_());
    let b8 = (t3 - t1) * (sigma * ((s1 + s2 + 2.0 * s3) / 3.0).as_());

    let u0 = b0 + b1;
    let u1 = b2 + b3;
    let u2 = b4 - b3;
    let u3 = -b2 - b4;
    let u4 = b6 + b7;
    let u5 = b8 - b7;
    let u6 = -b8 - b6;
    let u7 = u0 + u1;
    let u8 = u0 + u2;
    let u9 = u0 + u3;
    let u10 = u4 + b5;
    let u11 = u5 + b5;
    let u12 = u6 + b5;

    [
        b0,
        u7 - rot90(u10),
        u9 - rot90(u12),
        u8 + rot90(u11),
        u8 - rot90(u11),
        u9 + rot90(u12),
        u7 + rot90(u10),
    ]
}

/// One digit transform of arbitrary size, `z` and `x` of length
/// `kernel`'s factor. `sigma` is +1 forward, -1 inverse.
pub(crate) fn dft_small<T: FftSample>(
    kernel: &StageKernel<T>,
    z: &[Complex<T>],
    x: &mut [Complex<T>],
    sigma: T,
) where
    f64: AsPrimitive<T>,
{
    match kernel {
        StageKernel::Radix2 => x[..2].copy_from_slice(&bf2([z[0], z[1]])),
        StageKernel::Radix3 => x[..3].copy_from_slice(&bf3([z[0], z[1], z[2]], sigma)),
        StageKernel::Radix4 => x[..4].copy_from_slice(&bf4([z[0], z[1], z[2], z[3]], sigma)),
        StageKernel::Radix5 => {
            x[..5].copy_from_slice(&bf5([z[0], z[1], z[2], z[3], z[4]], sigma))
        }
        StageKernel::Radix6 => {
            x[..6].copy_from_slice(&bf6([z[0], z[1], z[2], z[3], z[4], z[5]], sigma))
        }
        StageKernel::Radix7 => {
            x[..7].copy_from_slice(&bf7([z[0], z[1], z[2], z[3], z[4], z[5], z[6]], sigma))
        }
        StageKernel::Generic { factor, roots } => {
            let inverse = sigma < T::zero();
            for s in 0..*factor {
                let mut sum = Complex::<T>::default();
                for (a, zv) in z.iter().enumerate().take(*factor) {
                    let mut w = roots[(a * s) % factor];
                    if inverse {
                        w = w.conj();
                    }
                    sum = sum + w * zv;
                }
                x[s] = sum;
            }
        }
    }
}

#[inline]
fn stage_twiddle<T: FftSample>(
    twiddles: &[Complex<T>],
    class: usize,
    q: usize,
    k: usize,
    direction: FftDirection,
) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    if k == 0 {
        return Complex {
            re: T::one(),
            im: T::zero(),
        };
    }
    let w = twiddles[class * q + (k - 1)];
    match direction {
        FftDirection::Forward => w,
        FftDirection::Inverse => w.conj(),
    }
}

macro_rules! complex_pass {
    ($name:ident, $factor:literal, $bf:expr) => {
        #[allow(clippy::too_many_arguments)]
        pub(crate) fn $name<T: FftSample>(
            input: &[Complex<T>],
            istride: usize,
            output: &mut [Complex<T>],
            ostride: usize,
            direction: FftDirection,
            product: usize,
            n: usize,
            twiddles: &[Complex<T>],
        ) where
            f64: AsPrimitive<T>,
        {
            let factor: usize = $factor;
            let sigma: T = direction_sign(direction);
            let m = n / factor;
            let q = n / product;
            let p_1 = product / factor;
            let jump = (factor - 1) * p_1;

            let mut i = 0usize;
            let mut j = 0usize;
            for k in 0..q {
                let mut w = [Complex::<T>::default(); $factor - 1];
                for (s, ws) in w.iter_mut().enumerate() {
                    *ws = stage_twiddle(twiddles, s, q, k, direction);
                }
                for _ in 0..p_1 {
                    let mut z = [Complex::<T>::default(); $factor];
                    for (a, za) in z.iter_mut().enumerate() {
                        *za = input[istride * (i + a * m)];
                    }
                    let x = $bf(z, sigma);
                    output[ostride * j] = x[0];
                    for s in 1..factor {
                        output[ostride * (j + s * p_1)] = w[s - 1] * x[s];
                    }
                    i += 1;
                    j += 1;
                }
                j += jump;
            }
        }
    };
}

complex_pass!(pass_2, 2, |z, _sigma| bf2(z));
complex_pass!(pass_3, 3, bf3);
complex_pass!(pass_4, 4, bf4);
complex_pass!(pass_5, 5, bf5);
complex_pass!(pass_6, 6, bf6);
complex_pass!(pass_7, 7, bf7);

/// Direct digit transform for factors without a dedicated butterfly.
/// `scratch` must hold at least `factor` elements.
#[allow(clippy::too_many_arguments)]
pub(crate) fn pass_generic<T: FftSample>(
    factor: usize,
    roots: &[Complex<T>],
    input: &[Complex<T>],
    istride: usize,
    output: &mut [Complex<T>],
    ostride: usize,
    direction: FftDirection,
    product: usize,
    n: usize,
    twiddles: &[Complex<T>],
    scratch: &mut [Complex<T>],
) where
    f64: AsPrimitive<T>,
{
    let inverse = matches!(direction, FftDirection::Inverse);
    let m = n / factor;
    let q = n / product;
    let p_1 = product / factor;
    let jump = (factor - 1) * p_1;

    let mut i = 0usize;
    let mut j = 0usize;
    for k in 0..q {
        for _ in 0..p_1 {
            for a in 0..factor {
                scratch[a] = input[istride * (i + a * m)];
            }
            for s in 0..factor {
                let mut sum = Complex::<T>::default();
                for a in 0..factor {
                    let mut w = roots[(a * s) % factor];
                    if inverse {
                        w = w.conj();
                    }
                    sum = sum + w * scratch[a];
                }
                if s == 0 {
                    output[ostride * j] = sum;
                } else {
                    let w = stage_twiddle(twiddles, s - 1, q, k, direction);
                    output[ostride * (j + s * p_1)] = w * sum;
                }
            }
            i += 1;
            j += 1;
        }
        j += jump;
    }
}

/// Runs one stage with whatever kernel the wavetable resolved for it.
#[allow(clippy::too_many_arguments)]
pub(crate) fn apply_stage<T: FftSample>(
    kernel: &StageKernel<T>,
    input: &[Complex<T>],
    istride: usize,
    output: &mut [Complex<T>],
    ostride: usize,
    direction: FftDirection,
    product: usize,
    n: usize,
    twiddles: &[Complex<T>],
    scratch: &mut [Complex<T>],
) where
    f64: AsPrimitive<T>,
{
    match kernel {
        StageKernel::Radix2 => pass_2(input, istride, output, ostride, direction, product, n, twiddles),
        StageKernel::Radix3 => pass_3(input, istride, output, ostride, direction, product, n, twiddles),
        StageKernel::Radix4 => pass_4(input, istride, output, ostride, direction, product, n, twiddles),
        StageKernel::Radix5 => pass_5(input, istride, output, ostride, direction, product, n, twiddles),
        StageKernel::Radix6 => pass_6(input, istride, output, ostride, direction, product, n, twiddles),
        StageKernel::Radix7 => pass_7(input, istride, output, ostride, direction, product, n, twiddles),
        StageKernel::Generic { factor, roots } => pass_generic(
            *factor, roots, input, istride, output, ostride, direction, product, n, twiddles,
            scratch,
        ),
    }
}
