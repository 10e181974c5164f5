//! spectral::errors — error types for autocorrelation and periodogram code.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the spectral
//! estimators in this subtree. Validation failures (empty input, lag bound
//! out of range, malformed smoothing span) and degenerate data (zero
//! variance) are all surfaced through [`SpectralError`] rather than panics.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints ("lag must
//!   satisfy h < n") rather than low-level details.
//! - Payloads carry just enough context (offending lag, span, or length)
//!   for logging and debugging without retaining data.
//!
//! Downstream usage
//! ----------------
//! - The autocorrelation and periodogram entry points return
//!   [`SpectralResult<T>`]; the diagnostic pipeline wraps these errors with
//!   the failing stage name attached.

pub type SpectralResult<T> = Result<T, SpectralError>;

/// SpectralError — failure conditions for spectral estimators.
///
/// Variants
/// --------
/// - `EmptySeries`
///   The input series contains no observations.
/// - `LagOutOfRange { max_lag, len }`
///   The requested maximum lag does not satisfy `max_lag < len`.
/// - `ZeroVariance`
///   The series is constant, so autocorrelation coefficients are
///   undefined (zero denominator).
/// - `InvalidSpan { span }`
///   The smoothing span is zero or even; the modified Daniell kernel
///   requires an odd, positive span.
#[derive(Debug, Clone, PartialEq)]
pub enum SpectralError {
    EmptySeries,
    LagOutOfRange { max_lag: usize, len: usize },
    ZeroVariance,
    InvalidSpan { span: usize },
}

impl std::error::Error for SpectralError {}

impl std::fmt::Display for SpectralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpectralError::EmptySeries => {
                write!(f, "Series must not be empty.")
            }
            SpectralError::LagOutOfRange { max_lag, len } => {
                write!(f, "Invalid max lag {max_lag}: must satisfy max_lag < n (series length {len}).")
            }
            SpectralError::ZeroVariance => {
                write!(f, "Series is constant; autocorrelation is undefined for zero variance.")
            }
            SpectralError::InvalidSpan { span } => {
                write!(f, "Invalid smoothing span {span}: must be odd and positive.")
            }
        }
    }
}
