//! statistical_tests::runs — Wald–Wolfowitz runs test for randomness.
//!
//! Purpose
//! -------
//! Implement the runs test used by the diagnostic battery to check
//! whether a series fluctuates randomly around a center value. The series
//! is dichotomized into above/below signs relative to the center, ties at
//! the center are dropped, and the number of runs is compared against its
//! normal approximation under the null of random ordering.
//!
//! Key behaviors
//! -------------
//! - The center defaults to the sample median ([`RunsCenter::Median`]);
//!   the sample mean is available as an alternative.
//! - Observations exactly equal to the center are removed before runs are
//!   counted, so the sign sequence is strictly two-valued.
//! - Too many runs (rapid alternation) and too few runs (clustering) both
//!   produce small two-sided p-values; the sign of `z_statistic`
//!   distinguishes them.
//!
//! Invariants & assumptions
//! ------------------------
//! - The input passes the shared series guard (length and finiteness).
//! - The normal approximation is used regardless of the sign counts; very
//!   small samples carry the usual approximation caveats.
//!
//! Downstream usage
//! ----------------
//! - The diagnostic pipeline calls [`RunsOutcome::run`] with the default
//!   median center; renderers read the public fields, including the sign
//!   counts and the center value actually used.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the runs count, moments, and z-statistic on
//!   hand-computed sequences, verify tie removal, and exercise the
//!   degeneracy branches.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::descriptive::quantiles::median_sorted;
use crate::statistical_tests::errors::{TestError, TestResult};
use crate::statistical_tests::validation::validate_series;

/// RunsCenter — the reference value the series is dichotomized around.
///
/// Purpose
/// -------
/// Select how the above/below signs of the runs test are formed. The
/// median is the conventional, outlier-robust default; the mean is
/// provided for callers who want the dichotomy to match a mean-based
/// report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunsCenter {
    /// Dichotomize around the sample median (default).
    #[default]
    Median,
    /// Dichotomize around the sample mean.
    Mean,
}

/// RunsOutcome — result of the runs test on one series.
///
/// Purpose
/// -------
/// Value object holding the randomness block of the diagnostic report.
/// Computed once per series via [`RunsOutcome::run`]; never mutated
/// afterwards.
///
/// Fields
/// ------
/// - `runs`: observed number of runs R.
/// - `expected_runs`: `1 + 2·n₁·n₂ / n` under the null.
/// - `runs_variance`: `2·n₁·n₂·(2·n₁·n₂ − n) / (n²·(n − 1))`.
/// - `z_statistic`: `(R − E[R]) / sqrt(Var[R])`; positive means more
///   alternation than expected, negative means clustering.
/// - `p_value`: two-sided standard-normal tail probability.
/// - `n_above`, `n_below`: sign counts after removing ties at the center.
/// - `center_value`: the median or mean actually used for the dichotomy.
///
/// Invariants
/// ----------
/// - `1 <= runs <= n_above + n_below`.
/// - `p_value` lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunsOutcome {
    pub runs: usize,
    pub expected_runs: f64,
    pub runs_variance: f64,
    pub z_statistic: f64,
    pub p_value: f64,
    pub n_above: usize,
    pub n_below: usize,
    pub center_value: f64,
}

impl RunsOutcome {
    /// Run the Wald–Wolfowitz runs test around the given center.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Input series of finite observations with `len >= 2`.
    /// - `center`: `RunsCenter`
    ///   Dichotomy reference; the diagnostic default is the median.
    ///
    /// Returns
    /// -------
    /// `TestResult<RunsOutcome>`
    ///   - `Ok(outcome)` on success.
    ///   - `Err(TestError)` on validation or degeneracy failures.
    ///
    /// Errors
    /// ------
    /// - `TestError::InsufficientData` / `TestError::NonFiniteValue` from
    ///   the shared series guard.
    /// - `TestError::NoSignVariation` when, after removing ties at the
    ///   center, every observation falls on the same side.
    /// - `TestError::ZeroRunsVariance` when the normal-approximation
    ///   variance of the runs count is not strictly positive.
    ///
    /// Panics
    /// ------
    /// - Never panics on inputs accepted by validation; the standard
    ///   normal distribution has fixed, valid parameters.
    ///
    /// Notes
    /// -----
    /// - Ties at the center are *dropped*, not assigned a side; the
    ///   moments use the reduced length `n = n_above + n_below`.
    pub fn run(data: &[f64], center: RunsCenter) -> TestResult<Self> {
        validate_series(data, 2)?;

        let center_value = match center {
            RunsCenter::Median => {
                let mut sorted = data.to_vec();
                sorted.sort_by(|a, b| {
                    a.partial_cmp(b).expect("finite values are totally ordered")
                });
                median_sorted(&sorted)
            }
            RunsCenter::Mean => data.iter().sum::<f64>() / data.len() as f64,
        };

        // Drop ties at the center; keep the above/below sign sequence.
        let signs: Vec<bool> = data
            .iter()
            .filter(|&&y| y != center_value)
            .map(|&y| y > center_value)
            .collect();

        let n_above = signs.iter().filter(|&&above| above).count();
        let n_below = signs.len() - n_above;
        if n_above == 0 || n_below == 0 {
            return Err(TestError::NoSignVariation { n_above, n_below });
        }

        let runs = 1 + signs.windows(2).filter(|pair| pair[0] != pair[1]).count();

        let n = signs.len() as f64;
        let two_ab = 2.0 * n_above as f64 * n_below as f64;
        let expected_runs = 1.0 + two_ab / n;
        let runs_variance = two_ab * (two_ab - n) / (n * n * (n - 1.0));
        if runs_variance <= 0.0 {
            return Err(TestError::ZeroRunsVariance);
        }

        let z_statistic = (runs as f64 - expected_runs) / runs_variance.sqrt();
        let standard_normal = Normal::new(0.0, 1.0).expect("standard normal parameters are valid");
        let p_value = 2.0 * (1.0 - standard_normal.cdf(z_statistic.abs()));

        Ok(RunsOutcome {
            runs,
            expected_runs,
            runs_variance,
            z_statistic,
            p_value,
            n_above,
            n_below,
            center_value,
        })
    }
}
