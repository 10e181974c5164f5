//! descriptive — location, spread, and shape summaries for one series.
//!
//! Purpose
//! -------
//! Collect the descriptive-statistics block of the diagnostic battery:
//! the scalar summaries ([`DescriptiveStats`]), Tukey's five-number
//! summary ([`FiveNumberSummary`]), and the order-statistic helpers that
//! pin the crate's quantile conventions.
//!
//! Key behaviors
//! -------------
//! - [`DescriptiveStats::compute`](summary::DescriptiveStats::compute)
//!   produces the whole block in one pass over the data plus one sort.
//! - Two quantile conventions coexist on purpose: Tukey hinges for the
//!   five-number summary and type-7 interpolation for the interquartile
//!   range. They are reported side by side, not reconciled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite observation slices with `len >= 2`; violations are
//!   reported via [`DescriptiveResult`], never panics.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use series_diagnostics::descriptive::DescriptiveStats;
//!
//!   # let observations = vec![1.0_f64, 3.0, 2.0, 4.0];
//!   let stats = DescriptiveStats::compute(&observations)?;
//!   # Ok::<(), series_diagnostics::descriptive::DescriptiveError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Quantile conventions are pinned in [`quantiles`]; summary-level
//!   identities and error branches are covered in [`summary`].

pub mod errors;
pub mod quantiles;
pub mod summary;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{DescriptiveError, DescriptiveResult};
pub use self::summary::{DescriptiveStats, FiveNumberSummary};
