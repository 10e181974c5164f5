//! spectral — autocorrelation and spectral-density estimators.
//!
//! Purpose
//! -------
//! Collect the frequency-domain and lag-domain diagnostics for a single
//! univariate series: the sample autocorrelation function and the
//! Daniell-smoothed periodogram. Both are pure functions of the input
//! slice with shared error handling via [`SpectralError`].
//!
//! Key behaviors
//! -------------
//! - [`Acf::sample`](autocorrelation::Acf::sample) computes coefficients
//!   at lags `0..=max_lag` with a common population-variance denominator
//!   and an exact `1.0` at lag zero.
//! - [`Periodogram::smoothed`](periodogram::Periodogram::smoothed)
//!   computes DFT power at the positive Fourier frequencies and applies a
//!   modified Daniell kernel of odd span.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite, real-valued observations; the diagnostic pipeline
//!   guarantees this through [`crate::series::Series`], and direct slice
//!   callers are expected to uphold it.
//! - Both estimators report failures via [`SpectralResult`] and never
//!   panic on user-facing invalid input.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use series_diagnostics::spectral::{Acf, Periodogram};
//!
//!   # let observations = vec![1.0_f64, 3.0, 2.0, 4.0];
//!   let acf = Acf::sample(&observations, 1)?;
//!   let pgram = Periodogram::smoothed(&observations, 3)?;
//!   # Ok::<(), series_diagnostics::spectral::SpectralError>(())
//!   ```
//! - [`crate::descriptive`] uses the lag-1 coefficient; the pipeline
//!   stores both estimators' outputs in the diagnostic report.
//!
//! Testing notes
//! -------------
//! - Unit tests live alongside each estimator; hand-computed coefficients
//!   and a pure-cosine spectral peak pin the numeric conventions.

pub mod autocorrelation;
pub mod errors;
pub mod periodogram;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::autocorrelation::Acf;
pub use self::errors::{SpectralError, SpectralResult};
pub use self::periodogram::Periodogram;
