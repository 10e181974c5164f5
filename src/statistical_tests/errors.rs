//! statistical_tests::errors — shared error types for hypothesis tests.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the
//! variance-homogeneity (Brown–Forsythe) and runs tests, together with
//! consistent `Display` messages phrased in terms of domain constraints.
//!
//! Key behaviors
//! -------------
//! - Define [`TestResult`] and [`TestError`] as the canonical result and
//!   error types for the test routines and their validation helpers.
//! - Keep payloads small (offending counts or values) so errors are cheap
//!   to clone and compare in tests.
//!
//! Conventions
//! -----------
//! - The three degenerate-data variants (`NoSignVariation`,
//!   `ZeroRunsVariance`, `DegenerateDeviations`) jointly realize the
//!   "degenerate input" failure class: structurally valid data on which
//!   the requested statistic is undefined.
//! - No variant suppresses a failure or substitutes defaults; the
//!   diagnostic pipeline surfaces every error with the failing stage
//!   attached.
//!
//! Downstream usage
//! ----------------
//! - Test routines return [`TestResult<T>`]; higher-level code may match
//!   on [`TestError`] variants for custom recovery or logging.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload.

pub type TestResult<T> = Result<T, TestError>;

/// TestError — error conditions for the hypothesis-test routines.
///
/// Variants
/// --------
/// - `InsufficientData { len }`
///   The series is too short for the requested test.
/// - `NonFiniteValue { index, value }`
///   A data element is `NaN` or ±∞.
/// - `InvalidGroupCount { num_groups, len }`
///   The group count violates `2 <= num_groups <= len / 2`.
/// - `InvalidAlpha { alpha }`
///   The significance level lies outside the open interval (0, 1).
/// - `NoSignVariation { n_above, n_below }`
///   After removing ties at the center, every observation falls on the
///   same side; the runs test is undefined.
/// - `ZeroRunsVariance`
///   The normal-approximation variance of the runs count is zero.
/// - `DegenerateDeviations`
///   All absolute deviations from the group medians are identical; the
///   variance-homogeneity F statistic is undefined.
#[derive(Debug, Clone, PartialEq)]
pub enum TestError {
    InsufficientData { len: usize },
    NonFiniteValue { index: usize, value: f64 },
    InvalidGroupCount { num_groups: usize, len: usize },
    InvalidAlpha { alpha: f64 },
    NoSignVariation { n_above: usize, n_below: usize },
    ZeroRunsVariance,
    DegenerateDeviations,
}

impl std::error::Error for TestError {}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestError::InsufficientData { len } => {
                write!(f, "Series too short for this test: {len} observations.")
            }
            TestError::NonFiniteValue { index, value } => {
                write!(f, "Non-finite observation {value} at index {index}. All values must be finite.")
            }
            TestError::InvalidGroupCount { num_groups, len } => {
                write!(
                    f,
                    "Invalid group count {num_groups}: must satisfy 2 ≤ k ≤ n/2 (series length {len})."
                )
            }
            TestError::InvalidAlpha { alpha } => {
                write!(f, "Invalid significance level {alpha}: must lie in (0, 1).")
            }
            TestError::NoSignVariation { n_above, n_below } => {
                write!(
                    f,
                    "No sign variation around the center ({n_above} above, {n_below} below); runs test is undefined."
                )
            }
            TestError::ZeroRunsVariance => {
                write!(f, "Runs-count variance is zero; the normal approximation is undefined.")
            }
            TestError::DegenerateDeviations => {
                write!(
                    f,
                    "All absolute deviations from the group medians are identical; the F statistic is undefined."
                )
            }
        }
    }
}
