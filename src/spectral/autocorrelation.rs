//! spectral::autocorrelation — sample autocorrelation function.
//!
//! Purpose
//! -------
//! Compute the sample autocorrelation function (ACF) of a univariate series
//! at lags `0..=max_lag`. The ACF drives the lag-1 summary statistic in the
//! descriptive report and the autocorrelation panel of the diagnostic
//! battery.
//!
//! Key behaviors
//! -------------
//! - Coefficients share a single denominator Σₜ (yₜ − ȳ)², i.e. the
//!   population-variance scaling with divisor N, applied consistently
//!   across all lags.
//! - The lag-0 coefficient is set to exactly `1.0` rather than recomputed,
//!   so callers can rely on it bitwise.
//! - Degenerate inputs (empty series, constant series, lag bound at or
//!   beyond the series length) are reported via [`SpectralError`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `max_lag < n` where `n = data.len()`.
//! - Observations are finite; the pipeline guarantees this via
//!   [`crate::series::Series`], and direct callers are expected to uphold
//!   it.
//!
//! Conventions
//! -----------
//! - Lag `h` pairs `(yₜ, yₜ₊ₕ)` for `t = 0,…,n−h−1` (0-based storage).
//! - rₕ = Σₜ (yₜ − ȳ)(yₜ₊ₕ − ȳ) / Σₜ (yₜ − ȳ)².
//!
//! Downstream usage
//! ----------------
//! - [`crate::descriptive`] calls [`Acf::sample`] with `max_lag = 1` for
//!   the lag-1 autocorrelation entry of the descriptive summary.
//! - The diagnostic pipeline computes the full ACF up to the configured
//!   lag bound and stores it in the report for rendering.
//!
//! Testing notes
//! -------------
//! - Unit tests verify the exact lag-0 value, hand-computed coefficients
//!   on short deterministic series, and every error branch.

use crate::spectral::errors::{SpectralError, SpectralResult};

/// Acf — sample autocorrelation coefficients at lags `0..=max_lag`.
///
/// Purpose
/// -------
/// Hold the computed ACF of one series so that downstream code can query
/// individual lags or iterate over `(lag, coefficient)` pairs without
/// recomputation.
///
/// Fields
/// ------
/// - `coefficients`: `Vec<f64>`
///   Coefficient at index `h` corresponds to lag `h`; index 0 is exactly
///   `1.0`.
///
/// Invariants
/// ----------
/// - `coefficients.len() == max_lag + 1` for the originating call.
/// - `coefficients[0] == 1.0` exactly.
/// - All coefficients lie in `[-1, 1]` up to floating-point rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct Acf {
    coefficients: Vec<f64>,
}

impl Acf {
    /// Compute the sample ACF of `data` at lags `0..=max_lag`.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Input series of finite observations with `len >= 1`.
    /// - `max_lag`: `usize`
    ///   Largest lag to compute. Must satisfy `max_lag < data.len()`.
    ///
    /// Returns
    /// -------
    /// `SpectralResult<Acf>`
    ///   - `Ok(Acf)` with coefficients for lags `0..=max_lag`.
    ///   - `Err(SpectralError)` on validation or degeneracy failures.
    ///
    /// Errors
    /// ------
    /// - `SpectralError::EmptySeries` when `data` is empty.
    /// - `SpectralError::LagOutOfRange` when `max_lag >= data.len()`.
    /// - `SpectralError::ZeroVariance` when the series is constant, so
    ///   the common denominator Σ (yₜ − ȳ)² is zero.
    ///
    /// Panics
    /// ------
    /// - Never panics on inputs accepted by validation.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use series_diagnostics::spectral::Acf;
    /// let data: Vec<f64> = (1..=10).map(f64::from).collect();
    /// let acf = Acf::sample(&data, 1).unwrap();
    ///
    /// assert_eq!(acf.coefficient(0), Some(1.0));
    /// assert!((acf.coefficient(1).unwrap() - 0.7).abs() < 1e-12);
    /// ```
    pub fn sample(data: &[f64], max_lag: usize) -> SpectralResult<Self> {
        if data.is_empty() {
            return Err(SpectralError::EmptySeries);
        }
        if max_lag >= data.len() {
            return Err(SpectralError::LagOutOfRange { max_lag, len: data.len() });
        }

        let n = data.len();
        let mean = data.iter().sum::<f64>() / n as f64;
        let denominator: f64 = data.iter().map(|&y| (y - mean).powi(2)).sum();
        if denominator == 0.0 {
            return Err(SpectralError::ZeroVariance);
        }

        let mut coefficients = Vec::with_capacity(max_lag + 1);
        coefficients.push(1.0);
        for h in 1..=max_lag {
            let numerator: f64 = data[h..]
                .iter()
                .zip(data)
                .map(|(y_t_plus_h, y_t)| (y_t_plus_h - mean) * (y_t - mean))
                .sum();
            coefficients.push(numerator / denominator);
        }

        Ok(Acf { coefficients })
    }

    /// Coefficient at `lag`, or `None` when `lag` exceeds the computed
    /// range.
    pub fn coefficient(&self, lag: usize) -> Option<f64> {
        self.coefficients.get(lag).copied()
    }

    /// Largest computed lag.
    pub fn max_lag(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Iterate over `(lag, coefficient)` pairs in lag order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.coefficients.iter().copied().enumerate()
    }
}
