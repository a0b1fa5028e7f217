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
use crate::specfunc::SfResult;

/// A Chebyshev expansion over `[a, b]`.
pub(crate) struct ChebSeries {
    pub(crate) coeffs: &'static [f64],
    pub(crate) a: f64,
    pub(crate) b: f64,
}

impl ChebSeries {
    /// Clenshaw recurrence with a running error estimate.
    pub(crate) fn eval(&self, x: f64) -> SfResult {
        let mut d = 0.0f64;
        let mut dd = 0.0f64;
        let y = (2.0 * x - self.a - self.b) / (self.b - self.a);
        let y2 = 2.0 * y;
        let mut e = 0.0f64;

        for &c in self.coeffs[1..].iter().rev() {
            let temp = d;
            d = y2 * d - dd + c;
            e += (y2 * temp).abs() + dd.abs() + c.abs();
            dd = temp;
        }

        let temp = d;
        let c0 = self.coeffs[0];
        d = y * d - dd + 0.5 * c0;
        e += (y * temp).abs() + dd.abs() + 0.5 * c0.abs();

        SfResult {
            val: d,
            err: f64::EPSILON * e + self.coeffs[self.coeffs.len() - 1].abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // T0 + T1 + T2 on [-1, 1]: 1 + y + 2y^2 - 1
    #[test]
    fn low_order_polynomial() {
        static C: [f64; 3] = [2.0, 1.0, 1.0];
        let s = ChebSeries {
            coeffs: &C,
            a: -1.0,
            b: 1.0,
        };
        for y in [-1.0, -0.25, 0.0, 0.5, 1.0] {
            let expected = 1.0 + y + 2.0 * y * y - 1.0;
            let got = s.eval(y);
            assert!((got.val - expected).abs() < 1e-14);
        }
    }
}
