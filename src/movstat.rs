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
//! Moving-window statistics over a sample sequence.
//!
//! A window covers `h` samples before the current one and `j` after it,
//! `k = h + j + 1` samples in total. Near the ends of the sequence the
//! window runs off the data; the [`EndPolicy`] decides whether missing
//! samples are zeros, copies of the edge sample, or dropped entirely.
//! In-place operation (`y` aliasing would require `&mut` twice, so the
//! caller copies first) is supported by computing each output from a
//! window snapshot.

use crate::err::WaftError;
use crate::err::try_vec;

/// How a window hanging over either end of the sequence is filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndPolicy {
    /// Missing samples count as zero.
    PadZero,
    /// Missing samples repeat the nearest edge sample.
    PadValue,
    /// Missing samples are dropped; the window shrinks.
    Truncate,
}

/// Workspace for moving-window statistics of a fixed window shape.
pub struct MovStat {
    h: usize,
    j: usize,
    window: Vec<f64>,
    work: Vec<f64>,
}

impl MovStat {
    /// Workspace for a symmetric window of `k` samples (`k` odd; the
    /// current sample sits in the middle).
    pub fn new(k: usize) -> Result<MovStat, WaftError> {
        if k == 0 || k % 2 == 0 {
            return Err(WaftError::ZeroLength);
        }
        MovStat::with_shape(k / 2, k / 2)
    }

    /// Workspace for an asymmetric window: `h` samples before the
    /// current one, `j` after.
    pub fn with_shape(h: usize, j: usize) -> Result<MovStat, WaftError> {
        let k = h + j + 1;
        Ok(MovStat {
            h,
            j,
            window: try_vec![0.0; k],
            // two rows: S_n keeps a window snapshot in the first and
            // sorts pairwise differences in the second
            work: try_vec![0.0; 2 * k],
        })
    }

    /// Total window length `h + j + 1`.
    pub fn window_len(&self) -> usize {
        self.h + self.j + 1
    }

    /// Moving mean.
    pub fn mean(
        &mut self,
        policy: EndPolicy,
        x: &[f64],
        y: &mut [f64],
    ) -> Result<(), WaftError> {
        self.apply(policy, x, y, |w, _| {
            w.iter().sum::<f64>() / w.len() as f64
        })
    }

    /// Moving minimum.
    pub fn min(
        &mut self,
        policy: EndPolicy,
        x: &[f64],
        y: &mut [f64],
    ) -> Result<(), WaftError> {
        self.apply(policy, x, y, |w, _| w.iter().copied().fold(f64::MAX, f64::min))
    }

    /// Moving maximum.
    pub fn max(
        &mut self,
        policy: EndPolicy,
        x: &[f64],
        y: &mut [f64],
    ) -> Result<(), WaftError> {
        self.apply(policy, x, y, |w, _| w.iter().copied().fold(f64::MIN, f64::max))
    }

    /// Moving median.
    pub fn median(
        &mut self,
        policy: EndPolicy,
        x: &[f64],
        y: &mut [f64],
    ) -> Result<(), WaftError> {
        self.apply(policy, x, y, |w, _| {
            w.sort_unstable_by(f64::total_cmp);
            median_sorted(w)
        })
    }

    /// Moving Rousseeuw-Croux S_n scale estimate.
    pub fn sn(
        &mut self,
        policy: EndPolicy,
        x: &[f64],
        y: &mut [f64],
    ) -> Result<(), WaftError> {
        self.apply(policy, x, y, |w, work| sn_statistic(w, work))
    }

    fn apply(
        &mut self,
        policy: EndPolicy,
        x: &[f64],
        y: &mut [f64],
        stat: impl Fn(&mut [f64], &mut [f64]) -> f64,
    ) -> Result<(), WaftError> {
        if x.len() != y.len() {
            return Err(WaftError::LengthMismatch(x.len(), y.len()));
        }
        for i in 0..x.len() {
            let wsize = self.fill_window(policy, x, i);
            y[i] = stat(&mut self.window[..wsize], &mut self.work[..2 * wsize]);
        }
        Ok(())
    }

    // Gathers the window around sample i, returning the number of
    // samples materialized (always k except under Truncate).
    fn fill_window(&mut self, policy: EndPolicy, x: &[f64], i: usize) -> usize {
        let n = x.len() as isize;
        let i = i as isize;
        let lo = i - self.h as isize;
        let hi = i + self.j as isize;
        let mut wsize = 0;
        for idx in lo..=hi {
            let value = if idx >= 0 && idx < n {
                x[idx as usize]
            } else {
                match policy {
                    EndPolicy::PadZero => 0.0,
                    EndPolicy::PadValue => {
                        if idx < 0 {
                            x[0]
                        } else {
                            x[(n - 1) as usize]
                        }
                    }
                    EndPolicy::Truncate => continue,
                }
            };
            self.window[wsize] = value;
            wsize += 1;
        }
        wsize
    }
}

fn median_sorted(w: &[f64]) -> f64 {
    let n = w.len();
    if n % 2 == 1 {
        w[n / 2]
    } else {
        0.5 * (w[n / 2 - 1] + w[n / 2])
    }
}

/// S_n of one window: the low median over i of the high median over j
/// of |x_i - x_j|, times the Gaussian consistency factor 1.1926 and a
/// small-sample correction. `work` holds two window-length rows.
fn sn_statistic(w: &mut [f64], work: &mut [f64]) -> f64 {
    let n = w.len();
    if n < 2 {
        return 0.0;
    }

    // The high medians land in w, so the differences have to be taken
    // against an untouched copy of the samples.
    let (snap, diffs) = work.split_at_mut(n);
    snap.copy_from_slice(w);

    // High median: the (n/2 + 1)-th order statistic (0-based n/2).
    for i in 0..n {
        for (j, slot) in diffs.iter_mut().enumerate().take(n) {
            *slot = (snap[i] - snap[j]).abs();
        }
        diffs[..n].sort_unstable_by(f64::total_cmp);
        w[i] = diffs[n / 2];
    }
    // Low median: the ((n + 1)/2)-th order statistic (0-based (n-1)/2).
    w.sort_unstable_by(f64::total_cmp);
    let sn0 = w[(n - 1) / 2];

    let cn = match n {
        2 => 0.743,
        3 => 1.851,
        4 => 0.954,
        5 => 1.351,
        6 => 0.993,
        7 => 1.198,
        8 => 1.005,
        9 => 1.131,
        _ if n % 2 == 1 => n as f64 / (n as f64 - 0.9),
        _ => 1.0,
    };

    1.1926 * cn * sn0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn brute_window(policy: EndPolicy, x: &[f64], i: usize, h: usize, j: usize) -> Vec<f64> {
        let n = x.len() as isize;
        let mut out = Vec::new();
        for idx in (i as isize - h as isize)..=(i as isize + j as isize) {
            if idx >= 0 && idx < n {
                out.push(x[idx as usize]);
            } else {
                match policy {
                    EndPolicy::PadZero => out.push(0.0),
                    EndPolicy::PadValue => {
                        out.push(if idx < 0 { x[0] } else { x[(n - 1) as usize] })
                    }
                    EndPolicy::Truncate => {}
                }
            }
        }
        out
    }

    const POLICIES: [EndPolicy; 3] =
        [EndPolicy::PadZero, EndPolicy::PadValue, EndPolicy::Truncate];

    #[test]
    fn mean_min_max_match_brute_force() {
        let mut rng = rand::rng();
        let x: Vec<f64> = (0..57).map(|_| rng.random_range(-5.0..5.0)).collect();
        for &(h, j) in &[(0usize, 0usize), (2, 2), (4, 1), (1, 4), (10, 0)] {
            let mut w = MovStat::with_shape(h, j).unwrap();
            let mut y = vec![0.0; x.len()];
            for policy in POLICIES {
                w.mean(policy, &x, &mut y).unwrap();
                for i in 0..x.len() {
                    let win = brute_window(policy, &x, i, h, j);
                    let expected = win.iter().sum::<f64>() / win.len() as f64;
                    assert!((y[i] - expected).abs() < 1.0e-12, "mean i={i}");
                }

                w.min(policy, &x, &mut y).unwrap();
                for i in 0..x.len() {
                    let win = brute_window(policy, &x, i, h, j);
                    let expected = win.iter().copied().fold(f64::MAX, f64::min);
                    assert_eq!(y[i], expected, "min i={i}");
                }

                w.max(policy, &x, &mut y).unwrap();
                for i in 0..x.len() {
                    let win = brute_window(policy, &x, i, h, j);
                    let expected = win.iter().copied().fold(f64::MIN, f64::max);
                    assert_eq!(y[i], expected, "max i={i}");
                }
            }
        }
    }

    #[test]
    fn median_matches_brute_force() {
        let mut rng = rand::rng();
        let x: Vec<f64> = (0..41).map(|_| rng.random_range(-1.0..1.0)).collect();
        for &(h, j) in &[(3usize, 3usize), (5, 2), (0, 6)] {
            let mut w = MovStat::with_shape(h, j).unwrap();
            let mut y = vec![0.0; x.len()];
            for policy in POLICIES {
                w.median(policy, &x, &mut y).unwrap();
                for i in 0..x.len() {
                    let mut win = brute_window(policy, &x, i, h, j);
                    win.sort_unstable_by(f64::total_cmp);
                    let expected = median_sorted(&win);
                    assert_eq!(y[i], expected, "median i={i} policy={policy:?}");
                }
            }
        }
    }

    #[test]
    fn sn_known_values() {
        // A constant window has zero scale.
        let x = vec![3.0; 9];
        let mut w = MovStat::new(5).unwrap();
        let mut y = vec![1.0; x.len()];
        w.sn(EndPolicy::PadValue, &x, &mut y).unwrap();
        assert!(y.iter().all(|&v| v == 0.0));

        // Window of one sample.
        let mut w1 = MovStat::new(1).unwrap();
        let x = [1.0, -2.0, 5.0];
        let mut y = [9.0; 3];
        w1.sn(EndPolicy::Truncate, &x, &mut y).unwrap();
        assert_eq!(y, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn sn_matches_brute_force_definition() {
        let mut rng = rand::rng();
        let x: Vec<f64> = (0..35).map(|_| rng.random_range(-10.0..10.0)).collect();
        for &(h, j) in &[(2usize, 2usize), (4, 0), (1, 5)] {
            let mut w = MovStat::with_shape(h, j).unwrap();
            let mut y = vec![0.0; x.len()];
            for policy in POLICIES {
                w.sn(policy, &x, &mut y).unwrap();
                for i in 0..x.len() {
                    let win = brute_window(policy, &x, i, h, j);
                    let n = win.len();
                    let expected = if n < 2 {
                        0.0
                    } else {
                        let mut himed = Vec::with_capacity(n);
                        for a in 0..n {
                            let mut d: Vec<f64> =
                                win.iter().map(|v| (win[a] - v).abs()).collect();
                            d.sort_unstable_by(f64::total_cmp);
                            himed.push(d[n / 2]);
                        }
                        himed.sort_unstable_by(f64::total_cmp);
                        let cn = match n {
                            2 => 0.743,
                            3 => 1.851,
                            4 => 0.954,
                            5 => 1.351,
                            6 => 0.993,
                            7 => 1.198,
                            8 => 1.005,
                            9 => 1.131,
                            _ if n % 2 == 1 => n as f64 / (n as f64 - 0.9),
                            _ => 1.0,
                        };
                        1.1926 * cn * himed[(n - 1) / 2]
                    };
                    assert!(
                        (y[i] - expected).abs() < 1.0e-12,
                        "sn i={i} policy={policy:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn sn_differences_come_from_untouched_samples() {
        // Window [0, 10, 1, 5]: the high medians are [5, 9, 4, 5], low
        // median 5. Reusing a slot already holding its high median
        // would shift the result to 4 instead.
        let x = [0.0, 10.0, 1.0, 5.0];
        let mut w = MovStat::with_shape(3, 0).unwrap();
        let mut y = [0.0; 4];
        w.sn(EndPolicy::Truncate, &x, &mut y).unwrap();
        assert_eq!(y[0], 0.0);
        assert!((y[1] - 1.1926 * 0.743 * 10.0).abs() < 1.0e-12);
        assert!((y[2] - 1.1926 * 1.851 * 1.0).abs() < 1.0e-12);
        assert!((y[3] - 1.1926 * 0.954 * 5.0).abs() < 1.0e-12);
    }

    #[test]
    fn length_mismatch_rejected() {
        let mut w = MovStat::new(3).unwrap();
        let x = [1.0, 2.0, 3.0];
        let mut y = [0.0; 2];
        assert_eq!(
            w.mean(EndPolicy::PadZero, &x, &mut y),
            Err(WaftError::LengthMismatch(3, 2))
        );
    }

    #[test]
    fn even_symmetric_window_rejected() {
        assert!(MovStat::new(4).is_err());
        assert!(MovStat::new(0).is_err());
    }
}
