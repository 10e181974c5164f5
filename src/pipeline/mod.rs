//! pipeline — orchestration of the full diagnostic battery.
//!
//! Purpose
//! -------
//! Tie the descriptive, spectral, trend, and hypothesis-test subtrees
//! together: one validated [`DiagnosticConfig`], one fail-fast
//! [`DiagnosticReport::run`](report::DiagnosticReport::run) entry point,
//! and one stage-tagged error type [`PipelineError`].
//!
//! Key behaviors
//! -------------
//! - Every stage runs independently on the same immutable series; any
//!   failure aborts the run with the failing stage named, and no partial
//!   report is returned.
//! - Configuration defaults are (4, 0.05, 100, 3) for group count,
//!   significance level, maximum lag, and smoothing span.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
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
//! - Unit tests per module; the crate-level integration test runs the
//!   whole battery end to end.

pub mod config;
pub mod errors;
pub mod report;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::config::DiagnosticConfig;
pub use self::errors::{PipelineError, PipelineResult};
pub use self::report::DiagnosticReport;
