//! Integration tests for the full diagnostic pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end battery: from a validated series (including
//!   one loaded through the text reader), through every diagnostic
//!   stage, to the assembled report.
//! - Exercise realistic series regimes (drift, seasonality, regime
//!   shifts in spread) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `series` and `source`:
//!   - `Series` construction and the whitespace-delimited reader with a
//!     skipped header.
//! - `pipeline::report::DiagnosticReport`:
//!   - Successful runs with default and custom configurations, the
//!     max-lag clamp, and stage-tagged failures.
//! - Cross-stage consistency:
//!   - The descriptive lag-1 coefficient agrees with the ACF stage.
//!   - A drifting series shows a significant trend; a spread shift is
//!     flagged by the variance-homogeneity stage; a pure oscillation is
//!     flagged by the runs test and peaks at the right Fourier
//!     frequency.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of individual statistics (hinge positions,
//!   kernel weights, moment formulas) — these are covered by unit tests.
//! - Python bindings — those are expected to be tested at a higher
//!   integration or system level.
//! - Exhaustive stress testing over extreme sample sizes — those belong
//!   in targeted performance and property tests.
use series_diagnostics::{
    pipeline::{DiagnosticConfig, DiagnosticReport, PipelineError},
    series::Series,
    source::read_series,
    spectral::SpectralError,
    statistical_tests::TestError,
};

/// Purpose
/// -------
/// Construct a series with a linear drift plus a deterministic
/// oscillation, giving every diagnostic stage non-degenerate structure.
///
/// Parameters
/// ----------
/// - `n`: Length of the series; must be `> 0`.
/// - `drift`: Per-step increment of the linear component.
/// - `amplitude`: Amplitude of the sinusoidal component.
///
/// Returns
/// -------
/// - A `Series` with `y_t = drift · t + amplitude · sin(0.7 · t)` for
///   `t = 1,…,n`.
///
/// Invariants
/// ----------
/// - All values are finite for finite inputs, so creation should
///   succeed; a failure is treated as a test configuration error.
fn make_drifting_series(n: usize, drift: f64, amplitude: f64) -> Series {
    let values = (1..=n)
        .map(|t| drift * t as f64 + amplitude * (t as f64 * 0.7).sin())
        .collect();
    Series::from_vec(values).expect("Series::from_vec should accept a finite synthetic series")
}

#[test]
// Purpose
// -------
// Ensure the pipeline supports a realistic drifting series end to end
// with the default configuration, with internally consistent stage
// outcomes.
//
// Given
// -----
// - A 120-point series with drift 0.1 and oscillation amplitude 1.0.
// - `DiagnosticConfig::default()` (4 groups, alpha 0.05, max lag 100,
//   span 3).
//
// Expect
// ------
// - The run succeeds; descriptive count, partition coverage, and
//   periodogram length are all consistent with N = 120.
// - The descriptive lag-1 coefficient equals the ACF stage's lag-1
//   value exactly (same formula, same input).
// - The trend stage flags the drift: positive slope, p-value below
//   0.05.
fn pipeline_runs_end_to_end_on_drifting_series() {
    let series = make_drifting_series(120, 0.1, 1.0);

    let report = DiagnosticReport::run(&series, &DiagnosticConfig::default())
        .expect("default run should succeed on a well-behaved series");

    assert_eq!(report.descriptive.count, 120);
    assert_eq!(report.periodogram.len(), 60);
    assert_eq!(report.autocorrelation.max_lag(), 100);
    assert_eq!(report.variance_homogeneity.partition.group_range(3), Some(90..120));

    let acf_lag1 = report.autocorrelation.coefficient(1).expect("lag 1 is computed");
    assert_eq!(report.descriptive.lag1_autocorrelation, acf_lag1);

    assert!(report.trend.slope > 0.0);
    assert!(report.trend.p_value < 0.05);
}

#[test]
// Purpose
// -------
// Verify that a pure oscillation is flagged by the runs test and that
// the smoothed periodogram concentrates power at the oscillation
// frequency.
//
// Given
// -----
// - A 64-point cosine with 8 complete cycles, so the true frequency is
//   8/64 = 0.125; each half-cycle clusters same-sign observations, so
//   the series produces far fewer runs than a random ordering.
// - The default configuration.
//
// Expect
// ------
// - The runs test rejects randomness (negative z, p < 0.05).
// - The maximum periodogram power sits at frequency 0.125.
// - The variance-homogeneity stage does not reject: every quarter of a
//   stationary cosine has the same spread.
fn pipeline_flags_pure_oscillation() {
    let n = 64;
    let values: Vec<f64> = (0..n)
        .map(|t| (2.0 * std::f64::consts::PI * 8.0 * t as f64 / n as f64).cos())
        .collect();
    let series = Series::from_vec(values).expect("cosine series is finite");

    let report = DiagnosticReport::run(&series, &DiagnosticConfig::default())
        .expect("cosine run should succeed");

    assert!(report.runs.z_statistic < 0.0);
    assert!(report.runs.p_value < 0.05);

    let (peak_freq, _) = report
        .periodogram
        .iter()
        .max_by(|a, b| a.1.partial_cmp(&b.1).expect("power values are finite"))
        .expect("periodogram is non-empty");
    assert!((peak_freq - 0.125).abs() < 1e-12);

    assert!(!report.variance_homogeneity.reject);
}

#[test]
// Purpose
// -------
// Verify that a mid-series spread shift is caught by the
// variance-homogeneity stage under a custom configuration.
//
// Given
// -----
// - An 80-point oscillation whose amplitude grows tenfold in the second
//   half.
// - A custom configuration with 2 groups, alpha 0.05, max lag 10, and
//   span 3.
//
// Expect
// ------
// - The run succeeds; the Brown–Forsythe stage rejects with
//   F(1, 78) degrees of freedom, and the ACF honors the custom lag.
fn pipeline_detects_spread_shift_with_custom_config() {
    let n = 80;
    let values: Vec<f64> = (1..=n)
        .map(|t| {
            let amplitude = if t <= n / 2 { 1.0 } else { 10.0 };
            amplitude * (t as f64 * 0.9).sin()
        })
        .collect();
    let series = Series::from_vec(values).expect("shifted series is finite");
    let config = DiagnosticConfig::new(2, 0.05, 10, 3).expect("custom configuration is valid");

    let report = DiagnosticReport::run(&series, &config).expect("custom run should succeed");

    assert_eq!(report.variance_homogeneity.df_num, 1);
    assert_eq!(report.variance_homogeneity.df_denom, 78);
    assert!(report.variance_homogeneity.reject);
    assert!(report.variance_homogeneity.p_value < 0.05);
    assert_eq!(report.autocorrelation.max_lag(), 10);
}

#[test]
// Purpose
// -------
// Validate the text-reader path into the pipeline: header skipped,
// values parsed in order, report produced.
//
// Given
// -----
// - A whitespace-delimited text block with a one-line header and 24
//   values spread over several lines.
// - The default configuration (max lag clamps to 23).
//
// Expect
// ------
// - `read_series` yields a 24-point series and the pipeline runs
//   successfully on it.
fn pipeline_accepts_series_from_text_reader() {
    let mut text = String::from("synthetic measurement log\n");
    for chunk in (1..=24).collect::<Vec<i32>>().chunks(5) {
        let line: Vec<String> =
            chunk.iter().map(|t| format!("{:.3}", (*t as f64 * 0.7).sin() + 2.0)).collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }

    let series = read_series(text.as_bytes(), 1).expect("reader should parse the block");
    assert_eq!(series.len(), 24);

    let report = DiagnosticReport::run(&series, &DiagnosticConfig::default())
        .expect("run should succeed on the loaded series");
    assert_eq!(report.autocorrelation.max_lag(), 23);
}

#[test]
// Purpose
// -------
// Confirm that stage failures surface with the failing stage named and
// that no partial report is produced.
//
// Given
// -----
// - A constant 12-point series, which degenerates at the descriptive
//   stage (zero variance for the lag-1 coefficient).
// - A 16-point ±1 alternation, whose absolute deviations from every
//   group median are identical, degenerating the variance-homogeneity
//   stage.
//
// Expect
// ------
// - The constant series fails with the descriptive stage tagged; the
//   alternation fails with the variance-homogeneity stage tagged.
// - Even smoothing spans never reach the periodogram stage (rejected by
//   configuration validation), so the spectral guard is asserted at the
//   component level.
fn pipeline_surfaces_stage_failures() {
    let constant = Series::from_vec(vec![3.0; 12]).expect("constant series is structurally valid");

    match DiagnosticReport::run(&constant, &DiagnosticConfig::default()) {
        Err(PipelineError::Descriptive(_)) => (),
        other => panic!("expected a descriptive-stage failure, got {other:?}"),
    }

    // Degenerate deviations surface through the variance-homogeneity stage.
    let alternating: Vec<f64> = (0..16).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
    let series = Series::from_vec(alternating).expect("alternating series is structurally valid");

    match DiagnosticReport::run(&series, &DiagnosticConfig::default()) {
        Err(PipelineError::VarianceHomogeneity(TestError::DegenerateDeviations)) => (),
        other => panic!("expected a variance-homogeneity failure, got {other:?}"),
    }

    // The spectral guard itself still rejects even spans at the component level.
    let err = series_diagnostics::spectral::Periodogram::smoothed(&[1.0, 2.0, 3.0, 4.0], 2)
        .unwrap_err();
    assert_eq!(err, SpectralError::InvalidSpan { span: 2 });
}
