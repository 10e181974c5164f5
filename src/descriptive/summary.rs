//! descriptive::summary — the descriptive-statistics block of the report.
//!
//! Purpose
//! -------
//! Compute the fixed set of location, spread, and shape summaries the
//! diagnostic report opens with: mean, sample variance and standard
//! deviation, standard error of the mean, range, Tukey five-number
//! summary, type-7 interquartile range, and the lag-1 autocorrelation.
//!
//! Key behaviors
//! -------------
//! - Variance uses the sample divisor `N − 1`; the standard deviation is
//!   `variance.sqrt()` so the identity `std_dev² = variance` holds
//!   exactly.
//! - The five-number summary uses Tukey's hinges while the interquartile
//!   range uses the type-7 quantile convention; the two are reported side
//!   by side and deliberately not reconciled.
//! - The lag-1 autocorrelation delegates to
//!   [`Acf::sample`](crate::spectral::Acf::sample) at `max_lag = 1`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `N >= 2` is required; smaller inputs fail with
//!   [`DescriptiveError::InsufficientData`].
//! - A constant series fails with [`DescriptiveError::ConstantSeries`]
//!   because its lag-1 autocorrelation is undefined.
//! - Observations are finite; the pipeline guarantees this via
//!   [`crate::series::Series`].
//!
//! Downstream usage
//! ----------------
//! - The diagnostic pipeline calls [`DescriptiveStats::compute`] once per
//!   run; report renderers read the public fields directly.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the mean/range of the reference sequence from the
//!   diagnostic battery, the exactness of `std_dev = sqrt(variance)`,
//!   hinge/IQR divergence, five-number monotonicity, and both error
//!   branches.

use crate::descriptive::errors::{DescriptiveError, DescriptiveResult};
use crate::descriptive::quantiles::{median_sorted, quantile_type7, tukey_hinges};
use crate::spectral::{Acf, SpectralError};

/// FiveNumberSummary — minimum, hinges, median, maximum.
///
/// Purpose
/// -------
/// Tukey's five-number summary of one series, computed with the
/// median-of-halves hinge convention (odd `N`: the median is included in
/// both halves).
///
/// Invariants
/// ----------
/// - `minimum <= lower_hinge <= median <= upper_hinge <= maximum`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumberSummary {
    pub minimum: f64,
    pub lower_hinge: f64,
    pub median: f64,
    pub upper_hinge: f64,
    pub maximum: f64,
}

/// DescriptiveStats — fixed descriptive summary of one series.
///
/// Purpose
/// -------
/// Value object holding every scalar the descriptive block of the
/// diagnostic report renders. Computed once per series via
/// [`DescriptiveStats::compute`]; never mutated afterwards.
///
/// Fields
/// ------
/// - `count`: number of observations N.
/// - `mean`: arithmetic average.
/// - `variance`: sample variance with divisor N − 1.
/// - `std_dev`: `variance.sqrt()`, exactly.
/// - `std_error`: `std_dev / sqrt(N)`.
/// - `range`: `maximum − minimum`.
/// - `five_num`: Tukey five-number summary.
/// - `interquartile_range`: type-7 upper quartile minus lower quartile;
///   generally differs from `five_num.upper_hinge − five_num.lower_hinge`.
/// - `lag1_autocorrelation`: sample ACF at lag 1.
///
/// Invariants
/// ----------
/// - `variance >= 0` and `std_dev == variance.sqrt()` bitwise.
/// - `five_num` satisfies its monotonicity invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub std_error: f64,
    pub range: f64,
    pub five_num: FiveNumberSummary,
    pub interquartile_range: f64,
    pub lag1_autocorrelation: f64,
}

impl DescriptiveStats {
    /// Compute the descriptive summary of `data`.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Input series of finite observations with `len >= 2`.
    ///
    /// Returns
    /// -------
    /// `DescriptiveResult<DescriptiveStats>`
    ///   - `Ok(stats)` on success.
    ///   - `Err(DescriptiveError)` on validation or degeneracy failures.
    ///
    /// Errors
    /// ------
    /// - `DescriptiveError::InsufficientData` when `data.len() < 2`.
    /// - `DescriptiveError::ConstantSeries` when all observations are
    ///   identical (lag-1 autocorrelation undefined).
    ///
    /// Panics
    /// ------
    /// - Never panics on inputs accepted by validation.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use series_diagnostics::descriptive::DescriptiveStats;
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 100.0, 10.0];
    /// let stats = DescriptiveStats::compute(&data).unwrap();
    ///
    /// assert!((stats.mean - 14.6).abs() < 1e-12);
    /// assert_eq!(stats.range, 99.0);
    /// ```
    pub fn compute(data: &[f64]) -> DescriptiveResult<Self> {
        let n = data.len();
        if n < 2 {
            return Err(DescriptiveError::InsufficientData { len: n });
        }

        let mean = data.iter().sum::<f64>() / n as f64;
        let variance = data.iter().map(|&y| (y - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        let std_dev = variance.sqrt();
        let std_error = std_dev / (n as f64).sqrt();

        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).expect("finite values are totally ordered"));

        let minimum = sorted[0];
        let maximum = sorted[n - 1];
        let median = median_sorted(&sorted);
        let (lower_hinge, upper_hinge) = tukey_hinges(&sorted);
        let five_num = FiveNumberSummary { minimum, lower_hinge, median, upper_hinge, maximum };

        let interquartile_range =
            quantile_type7(&sorted, 0.75) - quantile_type7(&sorted, 0.25);

        let lag1_autocorrelation = match Acf::sample(data, 1) {
            Ok(acf) => acf.coefficient(1).expect("lag 1 is within the computed range"),
            Err(SpectralError::ZeroVariance) => return Err(DescriptiveError::ConstantSeries),
            // Length and lag bounds are already enforced above (n >= 2 > 1).
            Err(_) => return Err(DescriptiveError::InsufficientData { len: n }),
        };

        Ok(DescriptiveStats {
            count: n,
            mean,
            variance,
            std_dev,
            std_error,
            range: maximum - minimum,
            five_num,
            interquartile_range,
            lag1_autocorrelation,
        })
    }
}
