//! series_diagnostics — EDA diagnostics for univariate series, with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the diagnostic battery to Python via the `_series_diagnostics`
//! extension module. The battery runs descriptive statistics, the sample
//! autocorrelation function, a smoothed periodogram, an OLS trend fit, a
//! Brown–Forsythe variance-homogeneity test, and a runs test over one
//! validated numeric sequence, assembling the outcomes into a single
//! read-only report.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`series`, `source`, `descriptive`,
//!   `spectral`, `trend`, `statistical_tests`, `pipeline`) as the public
//!   crate surface.
//! - Define the `#[pyclass]` wrapper and `#[pymodule]` initializer for
//!   the `_series_diagnostics` Python extension when the
//!   `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input conversion, and error mapping.
//! - On successful conversion from Python objects to a [`Series`], the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `PyErr` values (always `ValueError`,
//!   message preserved verbatim) at the PyO3 boundary.
//! - The Python-visible class mirrors the fields of
//!   [`DiagnosticReport`](pipeline::DiagnosticReport) through read-only
//!   properties; vectors are copied out on access.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature:
//!
//!   ```rust
//!   use series_diagnostics::pipeline::{DiagnosticConfig, DiagnosticReport};
//!   use series_diagnostics::series::Series;
//!
//!   # let observations: Vec<f64> =
//!   #     (1..=40).map(|t| (t as f64 * 0.7).sin() + 0.05 * t as f64).collect();
//!   let series = Series::from_vec(observations)?;
//!   let report = DiagnosticReport::run(&series, &DiagnosticConfig::default())?;
//!   # Ok::<(), Box<dyn std::error::Error>>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner
//!   modules and by the crate-level integration test; smoke tests for
//!   the PyO3 bindings live on the Python side.

pub mod descriptive;
pub mod pipeline;
pub mod series;
pub mod source;
pub mod spectral;
pub mod statistical_tests;
pub mod trend;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    pipeline::{DiagnosticConfig, DiagnosticReport},
    series::Series,
    utils::extract_f64_array,
};

/// SeriesDiagnostics — Python-facing wrapper for the diagnostic battery.
///
/// Purpose
/// -------
/// Run the full diagnostic pipeline on a Python array and expose the
/// report through read-only properties, forwarding all computation to
/// [`DiagnosticReport::run`].
///
/// Key behaviors
/// -------------
/// - Validate and convert Python inputs into a contiguous `f64` slice,
///   then into a [`Series`].
/// - Build a [`DiagnosticConfig`] from keyword arguments with the
///   documented defaults (4, 0.05, 100, 3).
/// - Expose scalar accessors for every stage plus vector accessors for
///   the ACF and periodogram.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `SeriesDiagnostics(data, num_groups=4, alpha=0.05, max_lag=100, smoothing_span=3)`:
/// - `data`: `&PyAny`
///   One-dimensional array-like of `f64` values; must be non-empty and
///   finite.
/// - `num_groups`, `alpha`, `max_lag`, `smoothing_span`
///   Pipeline configuration, matching [`DiagnosticConfig`] semantics.
///
/// Fields
/// ------
/// - `inner`: [`DiagnosticReport`]
///   Rust-side report holding every stage outcome used by the accessors.
///
/// Invariants
/// ----------
/// - `inner` is only constructed when every pipeline stage succeeded.
///
/// Performance
/// -----------
/// - At most one allocation is performed to copy Python data into a
///   Rust buffer when needed; scalar property access is O(1).
///
/// Notes
/// -----
/// - This type is primarily intended to be used from Python; native Rust
///   code should prefer calling [`DiagnosticReport::run`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "series_diagnostics")]
pub struct SeriesDiagnostics {
    /// The assembled diagnostic report.
    inner: DiagnosticReport,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SeriesDiagnostics {
    /// Full diagnostic report for one univariate numeric sequence.
    #[new]
    #[pyo3(
        text_signature = "(data, /, num_groups=4, alpha=0.05, max_lag=100, smoothing_span=3)",
        signature = (raw_data, num_groups = 4, alpha = 0.05, max_lag = 100, smoothing_span = 3)
    )]
    pub fn run<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, num_groups: usize, alpha: f64,
        max_lag: usize, smoothing_span: usize,
    ) -> PyResult<SeriesDiagnostics> {
        let arr = extract_f64_array(py, raw_data)?;
        let data = arr.as_slice().map_err(|_| {
            pyo3::exceptions::PyValueError::new_err(
                "data must be a 1-D contiguous float64 array or sequence",
            )
        })?;

        let series = Series::from_vec(data.to_vec())?;
        let config = DiagnosticConfig::new(num_groups, alpha, max_lag, smoothing_span)?;
        let report = DiagnosticReport::run(&series, &config)?;
        Ok(SeriesDiagnostics { inner: report })
    }

    /// Number of observations.
    #[getter]
    pub fn count(&self) -> usize {
        self.inner.descriptive.count
    }

    /// Arithmetic mean.
    #[getter]
    pub fn mean(&self) -> f64 {
        self.inner.descriptive.mean
    }

    /// Sample standard deviation (N − 1 denominator).
    #[getter]
    pub fn std_dev(&self) -> f64 {
        self.inner.descriptive.std_dev
    }

    /// Lag-1 autocorrelation coefficient.
    #[getter]
    pub fn lag1_autocorrelation(&self) -> f64 {
        self.inner.descriptive.lag1_autocorrelation
    }

    /// Sample ACF coefficients, lag 0 through the clamped maximum lag.
    #[getter]
    pub fn acf(&self) -> Vec<f64> {
        self.inner.autocorrelation.iter().map(|(_, r)| r).collect()
    }

    /// Fourier frequencies of the smoothed periodogram.
    #[getter]
    pub fn periodogram_frequencies(&self) -> Vec<f64> {
        self.inner.periodogram.frequencies().to_vec()
    }

    /// Smoothed periodogram power at each Fourier frequency.
    #[getter]
    pub fn periodogram_power(&self) -> Vec<f64> {
        self.inner.periodogram.power().to_vec()
    }

    /// Fitted OLS slope against the observation index.
    #[getter]
    pub fn trend_slope(&self) -> f64 {
        self.inner.trend.slope
    }

    /// Two-sided p-value of the trend slope.
    #[getter]
    pub fn trend_pvalue(&self) -> f64 {
        self.inner.trend.p_value
    }

    /// Brown–Forsythe F statistic.
    #[getter]
    pub fn levene_statistic(&self) -> f64 {
        self.inner.variance_homogeneity.statistic
    }

    /// Whether variance homogeneity is rejected at the configured alpha.
    #[getter]
    pub fn levene_reject(&self) -> bool {
        self.inner.variance_homogeneity.reject
    }

    /// Runs-test z statistic.
    #[getter]
    pub fn runs_z(&self) -> f64 {
        self.inner.runs.z_statistic
    }

    /// Two-sided p-value of the runs test.
    #[getter]
    pub fn runs_pvalue(&self) -> f64 {
        self.inner.runs.p_value
    }
}

/// _series_diagnostics — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_series_diagnostics` Python module imported by the public
/// `series_diagnostics` package.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _series_diagnostics<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<SeriesDiagnostics>()?;
    Ok(())
}
