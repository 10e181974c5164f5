//! pipeline::errors — stage-tagged failures of the diagnostic run.
//!
//! Purpose
//! -------
//! Wrap each component's error type in a variant that names the failing
//! stage, so a caller of the pipeline sees *where* a run broke without
//! matching on every subtree error individually. No component failure is
//! suppressed and no partial report is ever produced.
//!
//! Key behaviors
//! -------------
//! - One variant per stage, each holding the component error verbatim;
//!   `Display` prefixes the stage name, `source()` exposes the inner
//!   error for `anyhow`-style chains in downstream applications.
//! - `InvalidConfiguration` covers parameter errors caught before any
//!   stage runs.
//!
//! Conventions
//! -----------
//! - `From` impls are deliberately absent: two stages share
//!   [`TestError`], so the pipeline attaches the stage tag explicitly
//!   with `map_err` instead of letting `?` pick an ambiguous variant.
//!
//! Downstream usage
//! ----------------
//! - Callers match on the stage variant for recovery or logging, or walk
//!   `source()` for the underlying domain error.
//!
//! Testing notes
//! -------------
//! - Unit tests verify the stage prefix in `Display` and the `source()`
//!   chain.

use crate::descriptive::DescriptiveError;
use crate::spectral::SpectralError;
use crate::statistical_tests::TestError;
use crate::trend::TrendError;

pub type PipelineResult<T> = Result<T, PipelineError>;

/// PipelineError — a diagnostic run failure tagged with its stage.
///
/// Variants
/// --------
/// - `InvalidConfiguration { reason }`
///   A configuration parameter failed validation before any stage ran.
/// - `Descriptive(DescriptiveError)`
///   The summary-statistics stage failed.
/// - `Autocorrelation(SpectralError)`
///   The autocorrelation stage failed.
/// - `Periodogram(SpectralError)`
///   The smoothed-periodogram stage failed.
/// - `Trend(TrendError)`
///   The OLS trend stage failed.
/// - `VarianceHomogeneity(TestError)`
///   The Brown–Forsythe stage failed.
/// - `Runs(TestError)`
///   The runs-test stage failed.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    InvalidConfiguration { reason: String },
    Descriptive(DescriptiveError),
    Autocorrelation(SpectralError),
    Periodogram(SpectralError),
    Trend(TrendError),
    VarianceHomogeneity(TestError),
    Runs(TestError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::InvalidConfiguration { reason } => {
                write!(f, "Invalid configuration: {reason}.")
            }
            PipelineError::Descriptive(err) => {
                write!(f, "Descriptive-statistics stage failed: {err}")
            }
            PipelineError::Autocorrelation(err) => {
                write!(f, "Autocorrelation stage failed: {err}")
            }
            PipelineError::Periodogram(err) => {
                write!(f, "Periodogram stage failed: {err}")
            }
            PipelineError::Trend(err) => {
                write!(f, "Trend stage failed: {err}")
            }
            PipelineError::VarianceHomogeneity(err) => {
                write!(f, "Variance-homogeneity stage failed: {err}")
            }
            PipelineError::Runs(err) => {
                write!(f, "Runs-test stage failed: {err}")
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::InvalidConfiguration { .. } => None,
            PipelineError::Descriptive(err) => Some(err),
            PipelineError::Autocorrelation(err) | PipelineError::Periodogram(err) => Some(err),
            PipelineError::Trend(err) => Some(err),
            PipelineError::VarianceHomogeneity(err) | PipelineError::Runs(err) => Some(err),
        }
    }
}

// At the Python boundary every pipeline failure surfaces as a ValueError
// with the stage-tagged `Display` message preserved verbatim.
#[cfg(feature = "python-bindings")]
impl From<PipelineError> for pyo3::PyErr {
    fn from(err: PipelineError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
