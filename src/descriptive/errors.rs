//! descriptive::errors — error types for descriptive statistics.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the descriptive-summary
//! computations. Failures are limited to structurally invalid inputs; the
//! summary itself involves no tuning parameters.
//!
//! Downstream usage
//! ----------------
//! - [`crate::descriptive::DescriptiveStats::compute`] returns
//!   [`DescriptiveResult<T>`]; the diagnostic pipeline wraps these errors
//!   with the failing stage name attached.

pub type DescriptiveResult<T> = Result<T, DescriptiveError>;

/// DescriptiveError — failure conditions for the descriptive summary.
///
/// Variants
/// --------
/// - `InsufficientData { len }`
///   Fewer than 2 observations; the sample variance (divisor N−1) is
///   undefined.
/// - `ConstantSeries`
///   All observations are identical, so the lag-1 autocorrelation entry
///   of the summary is undefined (zero variance denominator).
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptiveError {
    InsufficientData { len: usize },
    ConstantSeries,
}

impl std::error::Error for DescriptiveError {}

impl std::fmt::Display for DescriptiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DescriptiveError::InsufficientData { len } => {
                write!(f, "Need at least 2 observations for descriptive statistics; got {len}.")
            }
            DescriptiveError::ConstantSeries => {
                write!(f, "Series is constant; lag-1 autocorrelation is undefined.")
            }
        }
    }
}
