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

/// Radixes with dedicated complex kernels, in selection order.
pub(crate) const COMPLEX_RADIXES: &[usize] = &[7, 6, 5, 4, 3, 2];

/// Radixes with dedicated real / half-complex kernels, in selection order.
pub(crate) const REAL_RADIXES: &[usize] = &[4, 2, 3, 5];

/// Splits `n` into a product of transform stages. Radixes from
/// `preferred` are peeled off first, in the order given; whatever is
/// left falls to ascending odd trial division, so the last factor may
/// be an arbitrary prime handled by the generic kernel.
pub(crate) fn factorize(n: usize, preferred: &[usize]) -> Result<Vec<usize>, WaftError> {
    if n == 0 {
        return Err(WaftError::ZeroLength);
    }
    let mut factors = Vec::new();
    if n == 1 {
        factors.push(1);
        return Ok(factors);
    }

    let mut ntest = n;
    for &factor in preferred {
        while ntest % factor == 0 {
            factors.push(factor);
            ntest /= factor;
        }
    }

    // remaining even part, when 2 is not in the preferred set
    while ntest % 2 == 0 {
        factors.push(2);
        ntest /= 2;
    }

    let mut factor = 3;
    while ntest != 1 {
        while ntest % factor != 0 {
            factor += 2;
        }
        factors.push(factor);
        ntest /= factor;
    }

    let product: usize = factors.iter().product();
    if product != n {
        return Err(WaftError::Factorization(n));
    }
    Ok(factors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_prefers_large_radixes() {
        assert_eq!(factorize(1, COMPLEX_RADIXES).unwrap(), vec![1]);
        assert_eq!(factorize(7, COMPLEX_RADIXES).unwrap(), vec![7]);
        assert_eq!(factorize(30, COMPLEX_RADIXES).unwrap(), vec![6, 5]);
        assert_eq!(factorize(60, COMPLEX_RADIXES).unwrap(), vec![6, 5, 2]);
        assert_eq!(factorize(8, COMPLEX_RADIXES).unwrap(), vec![4, 2]);
        assert_eq!(factorize(1024, COMPLEX_RADIXES).unwrap(), vec![4; 5]);
    }

    #[test]
    fn real_never_selects_six() {
        assert_eq!(factorize(6, REAL_RADIXES).unwrap(), vec![2, 3]);
        assert_eq!(factorize(12, REAL_RADIXES).unwrap(), vec![4, 3]);
        assert_eq!(factorize(36, REAL_RADIXES).unwrap(), vec![4, 3, 3]);
    }

    #[test]
    fn leftover_primes_are_kept() {
        assert_eq!(factorize(11, COMPLEX_RADIXES).unwrap(), vec![11]);
        assert_eq!(factorize(66, COMPLEX_RADIXES).unwrap(), vec![6, 11]);
        assert_eq!(factorize(13 * 13, REAL_RADIXES).unwrap(), vec![13, 13]);
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(factorize(0, COMPLEX_RADIXES), Err(WaftError::ZeroLength));
    }
}
