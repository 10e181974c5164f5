//! trend::errors — error types for the linear trend fit.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the ordinary-least-squares
//! trend fit. The only failure mode is structural: too few observations
//! for the residual degrees of freedom to be positive.
//!
//! Downstream usage
//! ----------------
//! - [`crate::trend::TrendOutcome::ols`] returns [`TrendResult<T>`]; the
//!   diagnostic pipeline wraps these errors with the failing stage name
//!   attached.

pub type TrendResult<T> = Result<T, TrendError>;

/// TrendError — failure conditions for the trend fit.
///
/// Variants
/// --------
/// - `InsufficientData { len }`
///   Fewer than 3 observations; the residual degrees of freedom `N − 2`
///   would not be positive.
#[derive(Debug, Clone, PartialEq)]
pub enum TrendError {
    InsufficientData { len: usize },
}

impl std::error::Error for TrendError {}

impl std::fmt::Display for TrendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendError::InsufficientData { len } => {
                write!(f, "Need at least 3 observations for a linear trend fit; got {len}.")
            }
        }
    }
}
