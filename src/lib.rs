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
//! Mixed-radix FFT engine with companion numerical routines.
//!
//! The core is a family of Cooley-Tukey transforms over strided buffers:
//! complex ([`ComplexWavetable`] + [`complex_forward`]/[`complex_backward`]),
//! real-to-halfcomplex ([`RealWavetable`] + [`real_transform`]) and
//! halfcomplex-to-real ([`HalfComplexWavetable`] + [`halfcomplex_transform`]).
//! A wavetable is built once per transform length and is reusable and
//! shareable; each transform additionally needs a mutable workspace of
//! matching length. Fixed-radix kernels cover factors 2 through 7
//! (2 through 5 for the real variants) and a generic O(f^2) kernel
//! handles everything else, so any length works.
//!
//! Around the FFT core: a quadratic-time reference DFT ([`dft`]),
//! special functions ([`specfunc`]), moving-window statistics
//! ([`movstat`]) and a sparse GMRES solver ([`sparse`], [`gmres`]).

mod complex_fft;
mod complex_pass;
pub mod dft;
mod err;
mod factorize;
pub mod gmres;
mod halfcomplex_fft;
mod halfcomplex_pass;
pub mod movstat;
mod real_fft;
mod real_pass;
pub mod sparse;
pub mod specfunc;
mod traits;
mod util;

pub use err::WaftError;
pub use traits::FftSample;

pub use complex_fft::{
    ComplexWavetable, ComplexWorkspace, complex_backward, complex_forward, complex_transform,
};
pub use halfcomplex_fft::{HalfComplexWavetable, halfcomplex_transform};
pub use real_fft::{RealWavetable, RealWorkspace, real_transform};

/// Transform direction. `Forward` uses the e^(-2 pi i / n) convention;
/// `Inverse` conjugates the twiddles and leaves the result unscaled, so
/// a forward-then-inverse round trip multiplies the data by n.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FftDirection {
    Forward,
    Inverse,
}
