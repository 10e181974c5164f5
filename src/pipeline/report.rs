//! pipeline::report — orchestration of the diagnostic battery.
//!
//! Purpose
//! -------
//! Run every diagnostic of the battery over one validated series and
//! assemble the outcomes into a single read-only [`DiagnosticReport`].
//! The stages are independent pure computations on the same immutable
//! input; the pipeline invokes them sequentially, fail-fast, and never
//! returns a partial report.
//!
//! Key behaviors
//! -------------
//! - Stage order: descriptive statistics, autocorrelation, smoothed
//!   periodogram, OLS trend, variance homogeneity, runs test. Order does
//!   not affect results; it only determines which error surfaces first.
//! - The configured `max_lag` is clamped to `N − 1` so the default of
//!   100 works on short series without failing the autocorrelation
//!   stage.
//! - Any component error is wrapped into the matching
//!   [`PipelineError`] variant; nothing is substituted or suppressed.
//!
//! Invariants & assumptions
//! ------------------------
//! - The input [`Series`] is already validated (non-empty, finite), so
//!   component-level finiteness errors indicate programming errors, not
//!   user input.
//! - The report owns a clone of the series, keeping it self-contained
//!   for renderers.
//!
//! Downstream usage
//! ----------------
//! - Renderers read the public fields of [`DiagnosticReport`] (tables,
//!   run-sequence/lag/autocorrelation/spectral plots); the crate itself
//!   performs no rendering.
//!
//! Testing notes
//! -------------
//! - Unit tests cover a successful end-to-end run, the max-lag clamp,
//!   and representative stage-failure wrappings; the integration test
//!   exercises the full battery on a realistic series.

use crate::descriptive::DescriptiveStats;
use crate::pipeline::config::DiagnosticConfig;
use crate::pipeline::errors::{PipelineError, PipelineResult};
use crate::series::Series;
use crate::spectral::{Acf, Periodogram};
use crate::statistical_tests::{LeveneOutcome, RunsCenter, RunsOutcome};
use crate::trend::TrendOutcome;

/// DiagnosticReport — all diagnostic outcomes for one series.
///
/// Purpose
/// -------
/// Aggregate the outcome of every stage of the battery, plus the series
/// and configuration the run used, into one read-only record. Created
/// once per pipeline run; never mutated afterwards.
///
/// Fields
/// ------
/// - `series`: the analyzed series (owned clone).
/// - `config`: the configuration the run used, with `max_lag` as
///   requested (the clamped value is `autocorrelation.max_lag()`).
/// - `descriptive`: summary statistics and five-number summary.
/// - `autocorrelation`: sample ACF up to the clamped maximum lag.
/// - `periodogram`: modified-Daniell-smoothed periodogram.
/// - `trend`: OLS fit against the observation index.
/// - `variance_homogeneity`: Brown–Forsythe outcome, including the
///   contiguous group partition.
/// - `runs`: runs-test outcome around the median.
///
/// Invariants
/// ----------
/// - Every field reflects the same input series; a report is only
///   constructed when all stages succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticReport {
    pub series: Series,
    pub config: DiagnosticConfig,
    pub descriptive: DescriptiveStats,
    pub autocorrelation: Acf,
    pub periodogram: Periodogram,
    pub trend: TrendOutcome,
    pub variance_homogeneity: LeveneOutcome,
    pub runs: RunsOutcome,
}

impl DiagnosticReport {
    /// Run the full diagnostic battery over one series.
    ///
    /// Parameters
    /// ----------
    /// - `series`: `&Series`
    ///   Validated input series in original order.
    /// - `config`: `&DiagnosticConfig`
    ///   Run parameters; re-validated before any stage executes.
    ///
    /// Returns
    /// -------
    /// `PipelineResult<DiagnosticReport>`
    ///   - `Ok(report)` when every stage succeeded.
    ///   - `Err(PipelineError)` naming the first failing stage; no
    ///     partial report is returned.
    ///
    /// Errors
    /// ------
    /// - `PipelineError::InvalidConfiguration` when the configuration
    ///   fails validation.
    /// - One stage variant per component failure, wrapping the component
    ///   error verbatim.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use series_diagnostics::pipeline::{DiagnosticConfig, DiagnosticReport};
    /// # use series_diagnostics::series::Series;
    /// let series = Series::from_vec(
    ///     (1..=40).map(|t| (t as f64 * 0.7).sin() + 0.05 * t as f64).collect(),
    /// )
    /// .unwrap();
    ///
    /// let report = DiagnosticReport::run(&series, &DiagnosticConfig::default()).unwrap();
    ///
    /// assert_eq!(report.descriptive.count, 40);
    /// assert_eq!(report.autocorrelation.max_lag(), 39); // clamped from 100
    /// ```
    pub fn run(series: &Series, config: &DiagnosticConfig) -> PipelineResult<Self> {
        config.validate()?;

        let data = series.as_slice();

        let descriptive =
            DescriptiveStats::compute(data).map_err(PipelineError::Descriptive)?;

        // The default max_lag of 100 must not fail short series.
        let effective_max_lag = config.max_lag.min(series.len() - 1);
        let autocorrelation =
            Acf::sample(data, effective_max_lag).map_err(PipelineError::Autocorrelation)?;

        let periodogram = Periodogram::smoothed(data, config.smoothing_span)
            .map_err(PipelineError::Periodogram)?;

        let trend = TrendOutcome::ols(data).map_err(PipelineError::Trend)?;

        let variance_homogeneity =
            LeveneOutcome::brown_forsythe(data, config.num_groups, config.alpha)
                .map_err(PipelineError::VarianceHomogeneity)?;

        let runs = RunsOutcome::run(data, RunsCenter::Median).map_err(PipelineError::Runs)?;

        Ok(DiagnosticReport {
            series: series.clone(),
            config: *config,
            descriptive,
            autocorrelation,
            periodogram,
            trend,
            variance_homogeneity,
            runs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistical_tests::TestError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - A successful end-to-end run with consistent fields.
    // - The max-lag clamp for series shorter than the configured lag.
    // - Stage-failure wrapping for configuration and component errors.
    //
    // They intentionally DO NOT cover:
    // - Numerical correctness of individual stages; each component
    //   module pins its own statistics.
    // -------------------------------------------------------------------------

    /// Damped oscillation with mild drift; long enough for the default
    /// four-group partition and rich enough that no stage degenerates.
    fn synthetic_series(n: usize) -> Series {
        let values = (1..=n)
            .map(|t| (t as f64 * 0.7).sin() + 0.05 * t as f64)
            .collect();
        Series::from_vec(values).expect("synthetic series is finite and non-empty")
    }

    #[test]
    // Purpose
    // -------
    // Verify a successful end-to-end run assembles every stage outcome
    // over the same series.
    //
    // Given
    // -----
    // - A 40-point synthetic series and the default configuration.
    //
    // Expect
    // ------
    // - Counts and lengths agree across report fields; the partition
    //   covers the full series.
    fn run_assembles_all_stage_outcomes() {
        let series = synthetic_series(40);

        let report = DiagnosticReport::run(&series, &DiagnosticConfig::default())
            .expect("all stages should succeed");

        assert_eq!(report.series.len(), 40);
        assert_eq!(report.descriptive.count, 40);
        assert_eq!(report.periodogram.len(), 20);
        assert_eq!(report.trend.residual_df, 38);
        assert_eq!(report.variance_homogeneity.partition.num_groups(), 4);
        assert_eq!(report.variance_homogeneity.partition.group_range(3), Some(30..40));
        assert_eq!(report.runs.n_above + report.runs.n_below, 40);
    }

    #[test]
    // Purpose
    // -------
    // Verify the configured max_lag is clamped to N − 1 instead of
    // failing the autocorrelation stage.
    //
    // Given
    // -----
    // - A 12-point series with the default max_lag of 100.
    //
    // Expect
    // ------
    // - The run succeeds and the ACF reaches lag 11 exactly.
    fn run_clamps_max_lag_to_series_length() {
        let series = synthetic_series(12);

        let report = DiagnosticReport::run(&series, &DiagnosticConfig::default())
            .expect("clamped run should succeed");

        assert_eq!(report.autocorrelation.max_lag(), 11);
        assert_eq!(report.config.max_lag, 100);
    }

    #[test]
    // Purpose
    // -------
    // Verify that an invalid configuration fails before any stage runs.
    //
    // Given
    // -----
    // - A configuration with alpha = 0 obtained by field edit.
    //
    // Expect
    // ------
    // - `PipelineError::InvalidConfiguration` naming alpha.
    fn run_rejects_invalid_configuration_up_front() {
        let series = synthetic_series(40);
        let mut config = DiagnosticConfig::default();
        config.alpha = 0.0;

        match DiagnosticReport::run(&series, &config) {
            Err(PipelineError::InvalidConfiguration { reason }) => {
                assert!(reason.contains("alpha"), "got: {reason}");
            }
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify a component failure is wrapped with its stage tag and no
    // partial report leaks out.
    //
    // Given
    // -----
    // - An 8-point series with num_groups = 5, violating k ≤ n/2 at the
    //   variance-homogeneity stage (all earlier stages succeed).
    //
    // Expect
    // ------
    // - `PipelineError::VarianceHomogeneity(InvalidGroupCount)`.
    fn run_wraps_component_failure_with_stage_tag() {
        let series = synthetic_series(8);
        let config =
            DiagnosticConfig::new(5, 0.05, 100, 3).expect("length-independent fields are valid");

        let result = DiagnosticReport::run(&series, &config);

        assert_eq!(
            result.unwrap_err(),
            PipelineError::VarianceHomogeneity(TestError::InvalidGroupCount {
                num_groups: 5,
                len: 8,
            })
        );
    }
}
