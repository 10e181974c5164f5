//! trend — linear drift diagnostics.
//!
//! Purpose
//! -------
//! House the drift check of the diagnostic battery: an ordinary
//! least-squares fit of the observations against their 1-based index,
//! with the slope's standard error, t-statistic, residual degrees of
//! freedom, and two-sided p-value.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use series_diagnostics::trend::TrendOutcome;
//!
//!   # let observations = vec![1.0_f64, 3.0, 2.0, 4.0];
//!   let fit = TrendOutcome::ols(&observations)?;
//!   # Ok::<(), series_diagnostics::trend::TrendError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Hand-computed fits, inference identities, and the perfect-fit
//!   convention are pinned in [`ols`].

pub mod errors;
pub mod ols;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{TrendError, TrendResult};
pub use self::ols::TrendOutcome;
