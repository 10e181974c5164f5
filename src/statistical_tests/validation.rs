//! statistical_tests::validation — shared input guards for test statistics.
//!
//! Purpose
//! -------
//! Centralize basic input validation for the hypothesis-test routines in
//! this crate. This avoids duplicating checks on series length, data
//! finiteness, significance levels, and group counts across test modules.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions before any statistic is computed.
//! - Map invalid inputs into structured [`TestError`] values for
//!   consistent handling in Rust and at the Python boundary.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input series must have at least `min_len` observations and contain
//!   only finite values.
//! - Significance levels must lie strictly inside (0, 1).
//! - Group counts must satisfy `2 <= num_groups <= len / 2`, preserving
//!   at least two observations per contiguous block on average.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and
//!   does not allocate beyond what error construction requires.
//! - Callers are responsible for any further test-specific checks
//!   (degenerate deviations, sign variation, etc.).
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_series`] at the top of each test routine; call
//!   [`validate_alpha`] and [`validate_group_count`] where the test takes
//!   those parameters. Treat `Ok(())` as a guarantee that basic shape and
//!   parameter constraints are satisfied.
//!
//! Testing notes
//! -------------
//! - Unit tests cover all error branches of each guard plus a simple
//!   success path.

use crate::statistical_tests::errors::{TestError, TestResult};

/// Validate series length and finiteness.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Input series of real-valued observations.
/// - `min_len`: `usize`
///   Minimum admissible number of observations for the calling test.
///
/// Returns
/// -------
/// `TestResult<()>`
///   `Ok(())` when `data.len() >= min_len` and every value is finite.
///
/// Errors
/// ------
/// - `TestError::InsufficientData { len }` when the series is too short.
/// - `TestError::NonFiniteValue { index, value }` for the first `NaN` or
///   ±∞ element.
pub fn validate_series(data: &[f64], min_len: usize) -> TestResult<()> {
    if data.len() < min_len {
        return Err(TestError::InsufficientData { len: data.len() });
    }

    for (index, &value) in data.iter().enumerate() {
        if !value.is_finite() {
            return Err(TestError::NonFiniteValue { index, value });
        }
    }

    Ok(())
}

/// Validate a significance level against the open interval (0, 1).
///
/// Errors
/// ------
/// - `TestError::InvalidAlpha { alpha }` when `alpha <= 0.0` or
///   `alpha >= 1.0` (non-finite values fail the same way).
pub fn validate_alpha(alpha: f64) -> TestResult<()> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(TestError::InvalidAlpha { alpha });
    }
    Ok(())
}

/// Validate a contiguous group count against the series length.
///
/// Errors
/// ------
/// - `TestError::InvalidGroupCount { num_groups, len }` when
///   `num_groups < 2` or `num_groups > len / 2`.
pub fn validate_group_count(len: usize, num_groups: usize) -> TestResult<()> {
    if num_groups < 2 || num_groups > len / 2 {
        return Err(TestError::InvalidGroupCount { num_groups, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Success paths for all three guards.
    // - Each error branch:
    //   * insufficient data length,
    //   * non-finite data value (with first-offender payload),
    //   * alpha at and outside the interval boundaries,
    //   * group counts below 2 and above n/2.
    //
    // They intentionally DO NOT cover:
    // - Test-specific degeneracy checks; those live with each test.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `validate_series` accepts a finite series meeting the
    // minimum length.
    //
    // Given
    // -----
    // - A finite series of length 3 with `min_len = 2`.
    //
    // Expect
    // ------
    // - `validate_series` returns `Ok(())`.
    fn validate_series_valid_arguments_succeeds() {
        let data = vec![0.1_f64, -0.2, 0.3];

        assert!(validate_series(&data, 2).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Ensure a too-short series is rejected with `InsufficientData`.
    //
    // Given
    // -----
    // - A series of length 3 with `min_len = 4`.
    //
    // Expect
    // ------
    // - `Err(TestError::InsufficientData { len: 3 })`.
    fn validate_series_too_short_returns_insufficient_data() {
        let data = vec![0.1_f64, -0.2, 0.3];

        let result = validate_series(&data, 4);

        assert_eq!(result.unwrap_err(), TestError::InsufficientData { len: 3 });
    }

    #[test]
    // Purpose
    // -------
    // Verify that a non-finite value is rejected with its index.
    //
    // Given
    // -----
    // - A series containing NaN at index 1.
    //
    // Expect
    // ------
    // - `Err(TestError::NonFiniteValue { index: 1, .. })`.
    fn validate_series_non_finite_value_returns_error_with_index() {
        let data = vec![0.1_f64, f64::NAN, 0.3];

        match validate_series(&data, 2) {
            Err(TestError::NonFiniteValue { index, value }) => {
                assert_eq!(index, 1);
                assert!(value.is_nan());
            }
            other => panic!("expected NonFiniteValue error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Check alpha validation at the boundaries and for an interior value.
    //
    // Given
    // -----
    // - alpha values 0.0, 1.0, NaN (invalid) and 0.05 (valid).
    //
    // Expect
    // ------
    // - Boundaries and NaN are rejected with `InvalidAlpha`; 0.05 passes.
    fn validate_alpha_rejects_boundaries_and_accepts_interior() {
        assert!(validate_alpha(0.05).is_ok());

        for bad in [0.0, 1.0, f64::NAN] {
            match validate_alpha(bad) {
                Err(TestError::InvalidAlpha { .. }) => (),
                other => panic!("expected InvalidAlpha for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Check group-count validation against both bounds.
    //
    // Given
    // -----
    // - A series length of 10 with counts 1 (too small), 6 (> n/2), and
    //   4 (valid).
    //
    // Expect
    // ------
    // - 1 and 6 are rejected with `InvalidGroupCount`; 4 passes.
    fn validate_group_count_enforces_both_bounds() {
        assert!(validate_group_count(10, 4).is_ok());

        assert_eq!(
            validate_group_count(10, 1).unwrap_err(),
            TestError::InvalidGroupCount { num_groups: 1, len: 10 }
        );
        assert_eq!(
            validate_group_count(10, 6).unwrap_err(),
            TestError::InvalidGroupCount { num_groups: 6, len: 10 }
        );
    }
}
