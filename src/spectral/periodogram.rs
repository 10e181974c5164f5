//! spectral::periodogram — raw and Daniell-smoothed spectral estimates.
//!
//! Purpose
//! -------
//! Estimate the power spectral density of a univariate series via the
//! discrete Fourier transform of the mean-removed observations, with an
//! optional modified Daniell smoothing pass to reduce the variance of the
//! raw periodogram ordinates.
//!
//! Key behaviors
//! -------------
//! - Ordinates are computed at the Fourier frequencies `fⱼ = j / n` for
//!   `j = 1..=⌊n/2⌋`, covering `(0, 0.5]` in steps of `1/n`.
//! - Power at frequency `f` is `(1/n) |Σₜ (yₜ − ȳ) e^(−2πift)|²`.
//! - Smoothing uses a modified Daniell kernel of odd span `s`: half-width
//!   `m = s/2`, interior weights `1/(2m)`, endpoint weights `1/(4m)`.
//!   `span = 1` means no smoothing.
//! - Near the boundary the kernel is truncated to in-range ordinates and
//!   the used weights are renormalized to sum to one.
//!
//! Invariants & assumptions
//! ------------------------
//! - `span` is odd and positive.
//! - Observations are finite; the pipeline guarantees this via
//!   [`crate::series::Series`].
//! - The direct O(n²) transform is intentional: diagnostic inputs are
//!   small and fully materialized, so FFT machinery is not warranted.
//!
//! Downstream usage
//! ----------------
//! - The diagnostic pipeline computes one smoothed periodogram per run and
//!   stores it in the report for the spectral plot panel.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the ordinate of a pure cosine at a Fourier frequency,
//!   confirm that `span = 1` reproduces the raw periodogram, and exercise
//!   both error branches.

use crate::spectral::errors::{SpectralError, SpectralResult};

/// Periodogram — spectral ordinates at the positive Fourier frequencies.
///
/// Purpose
/// -------
/// Hold one computed (optionally smoothed) periodogram so downstream code
/// can iterate `(frequency, power)` pairs without recomputation.
///
/// Fields
/// ------
/// - `frequencies`: `Vec<f64>`
///   Fourier frequencies `j / n` for `j = 1..=⌊n/2⌋`, strictly increasing.
/// - `power`: `Vec<f64>`
///   Spectral ordinate at the matching frequency; non-negative.
///
/// Invariants
/// ----------
/// - `frequencies.len() == power.len() == ⌊n/2⌋` for the originating
///   series length `n`.
/// - Every ordinate is finite and `>= 0` (smoothing is a convex
///   combination of non-negative raw ordinates).
#[derive(Debug, Clone, PartialEq)]
pub struct Periodogram {
    frequencies: Vec<f64>,
    power: Vec<f64>,
}

impl Periodogram {
    /// Compute the Daniell-smoothed periodogram of `data`.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Input series of finite observations with `len >= 1`.
    /// - `span`: `usize`
    ///   Odd, positive span of the modified Daniell kernel. `1` disables
    ///   smoothing; the diagnostic default is `3`.
    ///
    /// Returns
    /// -------
    /// `SpectralResult<Periodogram>`
    ///   - `Ok(Periodogram)` with `⌊n/2⌋` ordinates (zero ordinates for
    ///     `n = 1`, where no positive Fourier frequency exists).
    ///   - `Err(SpectralError)` on validation failures.
    ///
    /// Errors
    /// ------
    /// - `SpectralError::EmptySeries` when `data` is empty.
    /// - `SpectralError::InvalidSpan` when `span` is zero or even.
    ///
    /// Panics
    /// ------
    /// - Never panics on inputs accepted by validation.
    pub fn smoothed(data: &[f64], span: usize) -> SpectralResult<Self> {
        if data.is_empty() {
            return Err(SpectralError::EmptySeries);
        }
        if span == 0 || span % 2 == 0 {
            return Err(SpectralError::InvalidSpan { span });
        }

        let n = data.len();
        let mean = data.iter().sum::<f64>() / n as f64;
        let n_freq = n / 2;

        let mut frequencies = Vec::with_capacity(n_freq);
        let mut raw = Vec::with_capacity(n_freq);
        for j in 1..=n_freq {
            let freq = j as f64 / n as f64;
            let omega = 2.0 * std::f64::consts::PI * freq;

            let mut real = 0.0;
            let mut imag = 0.0;
            for (t, &y) in data.iter().enumerate() {
                let angle = omega * t as f64;
                let centered = y - mean;
                real += centered * angle.cos();
                imag -= centered * angle.sin();
            }

            frequencies.push(freq);
            raw.push((real * real + imag * imag) / n as f64);
        }

        let power = daniell_smooth(&raw, span);

        Ok(Periodogram { frequencies, power })
    }

    /// Fourier frequencies of the ordinates, strictly increasing over
    /// `(0, 0.5]`.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Spectral ordinates matching [`Periodogram::frequencies`].
    pub fn power(&self) -> &[f64] {
        &self.power
    }

    /// Number of ordinates, `⌊n/2⌋`.
    pub fn len(&self) -> usize {
        self.power.len()
    }

    /// `true` when the originating series had length 1 (no positive
    /// Fourier frequency).
    pub fn is_empty(&self) -> bool {
        self.power.is_empty()
    }

    /// Iterate over `(frequency, power)` pairs in frequency order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies.iter().copied().zip(self.power.iter().copied())
    }
}

/// Apply a modified Daniell kernel of odd span to raw ordinates.
///
/// Interior weights are `1/(2m)` and the two endpoints get `1/(4m)`,
/// where `m = span / 2`; at the boundary the kernel is truncated to
/// in-range ordinates and renormalized. `span = 1` returns the input
/// unchanged.
fn daniell_smooth(raw: &[f64], span: usize) -> Vec<f64> {
    let half = span / 2;
    if half == 0 || raw.is_empty() {
        return raw.to_vec();
    }

    let mut smoothed = Vec::with_capacity(raw.len());
    for i in 0..raw.len() {
        let mut weighted = 0.0;
        let mut weight_sum = 0.0;
        for offset in -(half as isize)..=(half as isize) {
            let j = i as isize + offset;
            if j < 0 || j >= raw.len() as isize {
                continue;
            }
            let weight = if offset.unsigned_abs() == half {
                1.0 / (4.0 * half as f64)
            } else {
                1.0 / (2.0 * half as f64)
            };
            weighted += weight * raw[j as usize];
            weight_sum += weight;
        }
        smoothed.push(weighted / weight_sum);
    }
    smoothed
}
