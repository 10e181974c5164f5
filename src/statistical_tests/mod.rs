//! statistical_tests — hypothesis tests and shared helpers.
//!
//! Purpose
//! -------
//! Collect the formal hypothesis tests of the diagnostic battery and
//! their shared infrastructure. This subtree currently implements the
//! Brown–Forsythe variance-homogeneity test on contiguous blocks and the
//! Wald–Wolfowitz runs test for randomness, together with common input
//! validation and error handling.
//!
//! Key behaviors
//! -------------
//! - Expose a median-based Levene test via [`LeveneOutcome`] and its
//!   constructor [`LeveneOutcome::brown_forsythe`](levene::LeveneOutcome::brown_forsythe),
//!   with the contiguous [`GroupPartition`] it was run on.
//! - Expose a runs test via [`RunsOutcome`] and its constructor
//!   [`RunsOutcome::run`](runs::RunsOutcome::run), dichotomizing around
//!   a [`RunsCenter`] (median by default).
//! - Centralize input guards in [`validation`], ensuring series length,
//!   finiteness, significance levels, and group counts are checked once
//!   in a consistent way across test modules.
//! - Provide a dedicated error type [`TestError`] and result alias
//!   [`TestResult`] for the test routines.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs for test routines are finite, real-valued observations in
//!   original sequence order; modules call the [`validation`] guards
//!   before computing any statistic.
//! - Tests in this subtree report failures via [`TestResult`] and never
//!   panic on user-facing invalid inputs; panics indicate programming
//!   errors not caught by validation.
//! - [`TestError`] variants are small and cloneable so they can be used
//!   comfortably in both unit tests and higher-level orchestration code.
//!
//! Conventions
//! -----------
//! - This subtree is focused on *hypothesis tests*; the descriptive,
//!   spectral, and trend diagnostics live in their own subtrees with
//!   their own error types.
//! - Error messages are phrased in terms of domain constraints such as
//!   "2 ≤ k ≤ n/2" rather than low-level details.
//! - Public entry points are thin wrappers that delegate shape checks to
//!   [`validation`] and propagate [`TestError`] via [`TestResult`].
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use series_diagnostics::statistical_tests::{LeveneOutcome, RunsCenter, RunsOutcome};
//!
//!   # let observations = vec![0.3_f64, -0.1, 0.4, -0.2, 0.5, -0.3, 0.6, -0.4];
//!   let spread = LeveneOutcome::brown_forsythe(&observations, 2, 0.05)?;
//!   let randomness = RunsOutcome::run(&observations, RunsCenter::Median)?;
//!   # Ok::<(), series_diagnostics::statistical_tests::TestError>(())
//!   ```
//!
//!   and only refers to `statistical_tests::errors` or
//!   `statistical_tests::validation` directly when matching on
//!   [`TestError`] or reusing the guards.
//! - The diagnostic pipeline calls both tests once per run and stores
//!   their outcomes verbatim in the report.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` payload embedding.
//! - Unit tests in [`validation`] exercise all guard branches.
//! - Unit tests in [`levene`] and [`runs`] pin hand-computed statistics
//!   and cover every error branch of the respective entry points.

pub mod errors;
pub mod levene;
pub mod runs;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{TestError, TestResult};
pub use self::levene::{GroupPartition, LeveneOutcome};
pub use self::runs::{RunsCenter, RunsOutcome};
pub use self::validation::{validate_alpha, validate_group_count, validate_series};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use series_diagnostics::statistical_tests::prelude::*;
//
// to import the main hypothesis-testing surface in a single line.

pub mod prelude {
    pub use super::errors::{TestError, TestResult};
    pub use super::levene::{GroupPartition, LeveneOutcome};
    pub use super::runs::{RunsCenter, RunsOutcome};
}
