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
use std::error::Error;
use std::fmt::Formatter;

#[derive(Clone, Debug, PartialEq)]
pub enum WaftError {
    OutOfMemory(usize),
    ZeroLength,
    LengthMismatch(usize, usize),
    InvalidStride,
    BufferTooSmall(usize, usize),
    Factorization(usize),
    TrigTableOverrun,
    Domain,
    Underflow,
    Overflow,
    PrecisionLoss,
    Unsupported,
    MaxIterations(usize),
    NotSquare(usize, usize),
    NoConvergence(usize),
}

impl Error for WaftError {}

impl std::fmt::Display for WaftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WaftError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} elements to vector"))
            }
            WaftError::ZeroLength => f.write_str("Length must be positive"),
            WaftError::LengthMismatch(s0, s1) => {
                f.write_fmt(format_args!("Length expected to be {s0}, but it was {s1}"))
            }
            WaftError::InvalidStride => f.write_str("Stride must be positive"),
            WaftError::BufferTooSmall(current, required) => f.write_fmt(format_args!(
                "Buffer size must be at least {required} but it is {current}"
            )),
            WaftError::Factorization(n) => {
                f.write_fmt(format_args!("Factorization of {n} failed"))
            }
            WaftError::TrigTableOverrun => {
                f.write_str("Trigonometric table overrun during construction")
            }
            WaftError::Domain => f.write_str("Argument outside function domain"),
            WaftError::Underflow => f.write_str("Result underflowed"),
            WaftError::Overflow => f.write_str("Result overflowed"),
            WaftError::PrecisionLoss => f.write_str("Result has unacceptable precision loss"),
            WaftError::Unsupported => f.write_str("Requested evaluation is not supported"),
            WaftError::MaxIterations(n) => {
                f.write_fmt(format_args!("No convergence after {n} iterations"))
            }
            WaftError::NotSquare(r, c) => {
                f.write_fmt(format_args!("Matrix of size {r}x{c} is not square"))
            }
            WaftError::NoConvergence(n) => f.write_fmt(format_args!(
                "Solver did not reach tolerance within {n} iterations"
            )),
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::WaftError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
