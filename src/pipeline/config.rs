//! pipeline::config — validated settings for one diagnostic run.
//!
//! Purpose
//! -------
//! Define [`DiagnosticConfig`], the small value object carrying the
//! tunable parameters of the diagnostic battery: the contiguous group
//! count for the variance-homogeneity test, the significance level, the
//! maximum autocorrelation lag, and the Daniell smoothing span of the
//! periodogram.
//!
//! Key behaviors
//! -------------
//! - [`DiagnosticConfig::new`] validates every field up front and fails
//!   with [`PipelineError::InvalidConfiguration`] naming the offending
//!   parameter; [`DiagnosticConfig::default`] yields the stated defaults
//!   (4, 0.05, 100, 3).
//! - Validation is re-run at the top of each pipeline invocation, so a
//!   field edited after construction cannot smuggle an invalid value
//!   past the constructor.
//!
//! Invariants & assumptions
//! ------------------------
//! - `num_groups >= 2`, `alpha ∈ (0, 1)`, `max_lag >= 1`, and
//!   `smoothing_span` is an odd positive integer.
//! - Length-dependent constraints (`num_groups <= N/2`,
//!   `max_lag < N`) are the pipeline's concern; the config cannot know
//!   the series length.
//!
//! Downstream usage
//! ----------------
//! - Construct once, pass by reference to
//!   [`DiagnosticReport::run`](crate::pipeline::DiagnosticReport::run).
//!
//! Testing notes
//! -------------
//! - Unit tests cover the defaults, a valid custom configuration, and
//!   every rejection branch of [`DiagnosticConfig::validate`].

use crate::pipeline::errors::{PipelineError, PipelineResult};

/// Default number of contiguous blocks for the variance-homogeneity test.
pub const DEFAULT_NUM_GROUPS: usize = 4;
/// Default significance level.
pub const DEFAULT_ALPHA: f64 = 0.05;
/// Default maximum autocorrelation lag (clamped to N − 1 per run).
pub const DEFAULT_MAX_LAG: usize = 100;
/// Default modified-Daniell smoothing span for the periodogram.
pub const DEFAULT_SMOOTHING_SPAN: usize = 3;

/// DiagnosticConfig — tunable parameters of one diagnostic run.
///
/// Purpose
/// -------
/// Bundle the four knobs of the battery so the pipeline entry point
/// takes a single, pre-validated argument.
///
/// Fields
/// ------
/// - `num_groups`: contiguous blocks for the Brown–Forsythe test
///   (default 4).
/// - `alpha`: significance level in (0, 1) (default 0.05).
/// - `max_lag`: requested maximum autocorrelation lag (default 100); the
///   pipeline clamps it to `N − 1` for shorter series.
/// - `smoothing_span`: odd modified-Daniell span for the smoothed
///   periodogram (default 3).
///
/// Invariants
/// ----------
/// - A value produced by [`DiagnosticConfig::new`] or
///   [`DiagnosticConfig::default`] passes
///   [`DiagnosticConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagnosticConfig {
    pub num_groups: usize,
    pub alpha: f64,
    pub max_lag: usize,
    pub smoothing_span: usize,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            num_groups: DEFAULT_NUM_GROUPS,
            alpha: DEFAULT_ALPHA,
            max_lag: DEFAULT_MAX_LAG,
            smoothing_span: DEFAULT_SMOOTHING_SPAN,
        }
    }
}

impl DiagnosticConfig {
    /// Build a validated configuration.
    ///
    /// Parameters
    /// ----------
    /// - `num_groups`: `usize`
    ///   Contiguous blocks for the variance-homogeneity test; must be at
    ///   least 2.
    /// - `alpha`: `f64`
    ///   Significance level; must lie strictly inside (0, 1).
    /// - `max_lag`: `usize`
    ///   Requested maximum autocorrelation lag; must be at least 1.
    /// - `smoothing_span`: `usize`
    ///   Modified-Daniell span; must be odd and positive.
    ///
    /// Returns
    /// -------
    /// `PipelineResult<DiagnosticConfig>`
    ///   - `Ok(config)` when every field is admissible.
    ///   - `Err(PipelineError::InvalidConfiguration)` naming the first
    ///     offending parameter otherwise.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use series_diagnostics::pipeline::DiagnosticConfig;
    /// let config = DiagnosticConfig::new(4, 0.05, 100, 3).unwrap();
    /// assert_eq!(config, DiagnosticConfig::default());
    /// ```
    pub fn new(
        num_groups: usize,
        alpha: f64,
        max_lag: usize,
        smoothing_span: usize,
    ) -> PipelineResult<Self> {
        let config = DiagnosticConfig { num_groups, alpha, max_lag, smoothing_span };
        config.validate()?;
        Ok(config)
    }

    /// Check every length-independent constraint on the configuration.
    ///
    /// Errors
    /// ------
    /// - `PipelineError::InvalidConfiguration` describing the first
    ///   violated constraint.
    pub fn validate(&self) -> PipelineResult<()> {
        if self.num_groups < 2 {
            return Err(PipelineError::InvalidConfiguration {
                reason: format!("num_groups must be at least 2, got {}", self.num_groups),
            });
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(PipelineError::InvalidConfiguration {
                reason: format!("alpha must lie in (0, 1), got {}", self.alpha),
            });
        }
        if self.max_lag == 0 {
            return Err(PipelineError::InvalidConfiguration {
                reason: "max_lag must be at least 1".to_string(),
            });
        }
        if self.smoothing_span == 0 || self.smoothing_span % 2 == 0 {
            return Err(PipelineError::InvalidConfiguration {
                reason: format!(
                    "smoothing_span must be an odd positive integer, got {}",
                    self.smoothing_span
                ),
            });
        }
        Ok(())
    }
}
