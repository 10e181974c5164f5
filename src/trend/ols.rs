//! trend::ols — ordinary-least-squares fit of a series against its index.
//!
//! Purpose
//! -------
//! Fit the linear drift diagnostic of the battery: regress the
//! observations on their 1-based index `t = 1..N` by ordinary least
//! squares and report the slope, its standard error, the t-statistic, the
//! residual degrees of freedom, and a two-sided Student-t p-value.
//!
//! Key behaviors
//! -------------
//! - Closed-form OLS via the centered sums `Sxx` and `Sxy`; no matrix
//!   machinery for a single regressor.
//! - `slope_std_error = sqrt(SSE / (N − 2) / Sxx)`,
//!   `t_value = slope / slope_std_error`, `residual_df = N − 2`.
//! - A perfect fit (`SSE = 0`) is reported with a zero standard error, a
//!   signed infinite `t_value` for a non-zero slope (zero for a zero
//!   slope), and the matching degenerate p-value, so callers never see
//!   `NaN`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `N >= 3`; smaller inputs fail with [`TrendError::InsufficientData`].
//! - The fit is deterministic with no side effects.
//!
//! Conventions
//! -----------
//! - The regressor is the 1-based observation index, matching the
//!   run-sequence convention of the report. Centering makes the choice of
//!   origin irrelevant for the slope and its inference; only the
//!   intercept reflects it.
//!
//! Downstream usage
//! ----------------
//! - The diagnostic pipeline calls [`TrendOutcome::ols`] once per run;
//!   renderers read the public fields directly.
//!
//! Testing notes
//! -------------
//! - Unit tests pin slope/intercept on a hand-computed noisy ramp, check
//!   the t/se identity and degrees of freedom, exercise the perfect-fit
//!   convention, and cover the error branch.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::trend::errors::{TrendError, TrendResult};

/// TrendOutcome — OLS trend fit of one series against its index.
///
/// Purpose
/// -------
/// Value object holding the trend block of the diagnostic report.
/// Computed once per series via [`TrendOutcome::ols`]; never mutated
/// afterwards.
///
/// Fields
/// ------
/// - `intercept`, `slope`: the fitted line `y = intercept + slope · t`.
/// - `slope_std_error`: standard error of the slope estimate.
/// - `t_value`: `slope / slope_std_error`.
/// - `residual_df`: `N − 2`.
/// - `p_value`: two-sided Student-t tail probability of `t_value`.
///
/// Invariants
/// ----------
/// - `residual_df >= 1` for any constructed outcome.
/// - `p_value` lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendOutcome {
    pub intercept: f64,
    pub slope: f64,
    pub slope_std_error: f64,
    pub t_value: f64,
    pub residual_df: usize,
    pub p_value: f64,
}

impl TrendOutcome {
    /// Fit `y = intercept + slope · t` for `t = 1..N` by OLS.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Input series of finite observations with `len >= 3`.
    ///
    /// Returns
    /// -------
    /// `TrendResult<TrendOutcome>`
    ///   - `Ok(outcome)` on success.
    ///   - `Err(TrendError::InsufficientData)` when `data.len() < 3`.
    ///
    /// Panics
    /// ------
    /// - Never panics on inputs accepted by validation.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use series_diagnostics::trend::TrendOutcome;
    /// let data: Vec<f64> = (1..=20).map(f64::from).collect();
    /// let fit = TrendOutcome::ols(&data).unwrap();
    ///
    /// assert!(fit.slope > 0.0);
    /// assert_eq!(fit.residual_df, 18);
    /// ```
    pub fn ols(data: &[f64]) -> TrendResult<Self> {
        let n = data.len();
        if n < 3 {
            return Err(TrendError::InsufficientData { len: n });
        }

        let n_f = n as f64;
        let x_mean = (n_f + 1.0) / 2.0;
        let y_mean = data.iter().sum::<f64>() / n_f;

        // Sxx for the index 1..N has the closed form n(n² − 1)/12.
        let sxx = n_f * (n_f * n_f - 1.0) / 12.0;
        let sxy: f64 = data
            .iter()
            .enumerate()
            .map(|(i, &y)| ((i + 1) as f64 - x_mean) * (y - y_mean))
            .sum();

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;

        let sse: f64 = data
            .iter()
            .enumerate()
            .map(|(i, &y)| {
                let fitted = intercept + slope * (i + 1) as f64;
                (y - fitted).powi(2)
            })
            .sum();

        let residual_df = n - 2;
        let slope_std_error = (sse / residual_df as f64 / sxx).sqrt();

        let (t_value, p_value) = if slope_std_error == 0.0 {
            // Perfect fit: keep the outcome finite-deterministic.
            if slope == 0.0 {
                (0.0, 1.0)
            } else {
                (f64::INFINITY * slope.signum(), 0.0)
            }
        } else {
            let t = slope / slope_std_error;
            let dist = StudentsT::new(0.0, 1.0, residual_df as f64)
                .expect("residual degrees of freedom are >= 1");
            (t, 2.0 * (1.0 - dist.cdf(t.abs())))
        };

        Ok(TrendOutcome { intercept, slope, slope_std_error, t_value, residual_df, p_value })
    }
}
