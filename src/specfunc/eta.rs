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
use crate::err::WaftError;

/// Bernoulli numbers B2, B4, ..., B46.
///
/// The larger numerators round when stored as f64, but the quotients are
/// accurate to within one or two ulps, which is all the series below need.
static BERNOULLI: [f64; 23] = [
    1.0 / 6.0,
    -1.0 / 30.0,
    1.0 / 42.0,
    -1.0 / 30.0,
    5.0 / 66.0,
    -691.0 / 2730.0,
    7.0 / 6.0,
    -3617.0 / 510.0,
    43867.0 / 798.0,
    -174611.0 / 330.0,
    854513.0 / 138.0,
    -236364091.0 / 2730.0,
    8553103.0 / 6.0,
    -23749461029.0 / 870.0,
    8615841276005.0 / 14322.0,
    -7709321041217.0 / 510.0,
    2577687858367.0 / 6.0,
    -26315271553053477373.0 / 1919190.0,
    2929993913841559.0 / 6.0,
    -261082718496449122051.0 / 13530.0,
    1520097643918070802691.0 / 1806.0,
    -27833269579301024235023.0 / 690.0,
    596451111593912163277961.0 / 4140.0,
];

fn bernoulli_even(two_j: usize) -> f64 {
    BERNOULLI[two_j / 2 - 1]
}

/// Riemann zeta at an integer argument n >= 2, by Euler-Maclaurin summation.
fn zeta_int_pos(n: i32) -> f64 {
    const CUT: usize = 20;
    let s = n as f64;
    let mut sum = 0.0;
    for k in 1..CUT {
        sum += (k as f64).powi(-n);
    }
    let nf = CUT as f64;
    sum += nf.powi(1 - n) / (s - 1.0) + 0.5 * nf.powi(-n);

    let mut poch = s;
    let mut fact = 1.0;
    let mut npow = nf.powi(-n) / nf;
    let n2 = nf * nf;
    for j in 1..=15usize {
        fact *= ((2 * j - 1) * 2 * j) as f64;
        npow /= n2;
        let term = bernoulli_even(2 * j) / fact * poch * npow * n2;
        sum += term;
        if term.abs() < f64::EPSILON * sum.abs() {
            break;
        }
        poch *= (s + (2 * j - 1) as f64) * (s + (2 * j) as f64);
    }
    sum
}

/// Dirichlet eta function at an integer argument.
///
/// Negative even arguments are trivial zeros. Negative odd arguments use
/// the Bernoulli closed form and are supported down to -45, which covers
/// every interior caller.
pub(crate) fn eta_int(n: i32) -> Result<f64, WaftError> {
    if n > 54 {
        Ok(1.0)
    } else if n >= 2 {
        Ok((1.0 - (2.0f64).powi(1 - n)) * zeta_int_pos(n))
    } else if n == 1 {
        Ok(std::f64::consts::LN_2)
    } else if n == 0 {
        Ok(0.5)
    } else if n % 2 == 0 {
        Ok(0.0)
    } else if n >= -45 {
        let k = -n;
        Ok(((2.0f64).powi(k + 1) - 1.0) / (k + 1) as f64 * bernoulli_even((k + 1) as usize))
    } else {
        Err(WaftError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::eta_int;

    #[test]
    fn positive_values() {
        let pi = std::f64::consts::PI;
        assert!((eta_int(2).unwrap() - pi * pi / 12.0).abs() < 1.0e-14);
        assert!((eta_int(4).unwrap() - 7.0 * pi.powi(4) / 720.0).abs() < 1.0e-14);
        assert!((eta_int(3).unwrap() - 0.9015426773696957140).abs() < 1.0e-14);
        assert!((eta_int(1).unwrap() - std::f64::consts::LN_2).abs() < 1.0e-15);
        assert!((eta_int(100).unwrap() - 1.0).abs() < 1.0e-15);
    }

    #[test]
    fn negative_values() {
        assert_eq!(eta_int(-2).unwrap(), 0.0);
        assert_eq!(eta_int(-4).unwrap(), 0.0);
        assert!((eta_int(-1).unwrap() - 0.25).abs() < 1.0e-15);
        assert!((eta_int(-3).unwrap() + 0.125).abs() < 1.0e-15);
        assert!((eta_int(-5).unwrap() - 0.25).abs() < 1.0e-15);
    }
}
