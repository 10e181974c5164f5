//! descriptive::quantiles — order-statistic helpers on sorted data.
//!
//! Purpose
//! -------
//! Implement the two quantile conventions the descriptive summary reports
//! side by side: Tukey's hinges (median-of-halves) for the five-number
//! summary, and the linear-interpolation type-7 quantile for the
//! interquartile range. The two generally disagree numerically and are
//! deliberately not reconciled.
//!
//! Key behaviors
//! -------------
//! - [`median_sorted`] averages the two central order statistics for even
//!   lengths.
//! - [`tukey_hinges`] splits the sorted data into halves of length
//!   `⌈n/2⌉`; for odd `n` the median belongs to **both** halves. This is
//!   the pinned tie-break convention for the whole crate.
//! - [`quantile_type7`] computes `x[⌊h⌋] + (h − ⌊h⌋)(x[⌊h⌋+1] − x[⌊h⌋])`
//!   at `h = (n − 1) p`.
//!
//! Invariants & assumptions
//! ------------------------
//! - All helpers require their input slice to be sorted ascending and
//!   non-empty; callers in this subtree sort once and reuse the buffer.
//! - `p` for [`quantile_type7`] lies in `[0, 1]`.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the hinge convention against the classical fivenum
//!   values for short ramps (odd and even lengths) and check type-7
//!   interpolation at interior and endpoint probabilities.

/// Median of a sorted, non-empty slice.
///
/// Averages the two central order statistics when the length is even.
pub fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    debug_assert!(n > 0, "median requires a non-empty slice");
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Tukey's hinges of a sorted, non-empty slice.
///
/// Returns `(lower_hinge, upper_hinge)`. Each hinge is the median of one
/// half of the data, where both halves have length `⌈n/2⌉`; for odd `n`
/// the overall median is included in both halves.
pub fn tukey_hinges(sorted: &[f64]) -> (f64, f64) {
    let n = sorted.len();
    debug_assert!(n > 0, "hinges require a non-empty slice");
    let half = (n + 1) / 2;
    let lower = median_sorted(&sorted[..half]);
    let upper = median_sorted(&sorted[n - half..]);
    (lower, upper)
}

/// Type-7 (linear interpolation) quantile of a sorted, non-empty slice.
///
/// Evaluates at position `h = (n − 1) p` and interpolates linearly between
/// the bracketing order statistics. `p` must lie in `[0, 1]`.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    debug_assert!(n > 0, "quantile requires a non-empty slice");
    debug_assert!((0.0..=1.0).contains(&p), "probability must lie in [0, 1]");

    let h = (n - 1) as f64 * p;
    let low = h.floor() as usize;
    let frac = h - low as f64;
    if low + 1 < n {
        sorted[low] + frac * (sorted[low + 1] - sorted[low])
    } else {
        sorted[n - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Median for odd and even lengths.
    // - The hinge convention (median in both halves for odd n) against the
    //   classical fivenum values for short ramps.
    // - Type-7 interpolation at interior probabilities and at p = 0, 1.
    //
    // They intentionally DO NOT cover:
    // - Unsorted input; all helpers document the sortedness precondition.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the median for odd and even lengths.
    //
    // Given
    // -----
    // - Ramps 1..=5 and 1..=6.
    //
    // Expect
    // ------
    // - Medians 3.0 and 3.5 respectively.
    fn median_sorted_handles_odd_and_even_lengths() {
        let odd: Vec<f64> = (1..=5).map(f64::from).collect();
        let even: Vec<f64> = (1..=6).map(f64::from).collect();

        assert_eq!(median_sorted(&odd), 3.0);
        assert_eq!(median_sorted(&even), 3.5);
    }

    #[test]
    // Purpose
    // -------
    // Pin the hinge convention: for odd n the median belongs to both
    // halves.
    //
    // Given
    // -----
    // - The ramp 1..=7 whose classical fivenum hinges are 2.5 and 5.5
    //   (halves [1,2,3,4] and [4,5,6,7]).
    //
    // Expect
    // ------
    // - `tukey_hinges` returns (2.5, 5.5).
    fn tukey_hinges_include_median_in_both_halves_for_odd_n() {
        let sorted: Vec<f64> = (1..=7).map(f64::from).collect();

        let (lower, upper) = tukey_hinges(&sorted);

        assert_eq!(lower, 2.5);
        assert_eq!(upper, 5.5);
    }

    #[test]
    // Purpose
    // -------
    // Verify hinges for an even length, where the halves partition the
    // data exactly.
    //
    // Given
    // -----
    // - The ramp 1..=6 with halves [1,2,3] and [4,5,6].
    //
    // Expect
    // ------
    // - `tukey_hinges` returns (2.0, 5.0).
    fn tukey_hinges_partition_exactly_for_even_n() {
        let sorted: Vec<f64> = (1..=6).map(f64::from).collect();

        let (lower, upper) = tukey_hinges(&sorted);

        assert_eq!(lower, 2.0);
        assert_eq!(upper, 5.0);
    }

    #[test]
    // Purpose
    // -------
    // Check type-7 interpolation at interior probabilities and the
    // endpoint behavior at p = 0 and p = 1.
    //
    // Given
    // -----
    // - The ramp 1..=6, where h = 5·0.25 = 1.25 gives 2.25 and
    //   h = 5·0.75 = 3.75 gives 4.75.
    //
    // Expect
    // ------
    // - quantile_type7(.., 0.25) = 2.25, quantile_type7(.., 0.75) = 4.75,
    //   and the endpoints return the extreme order statistics.
    fn quantile_type7_interpolates_linearly() {
        let sorted: Vec<f64> = (1..=6).map(f64::from).collect();

        assert!((quantile_type7(&sorted, 0.25) - 2.25).abs() < 1e-12);
        assert!((quantile_type7(&sorted, 0.75) - 4.75).abs() < 1e-12);
        assert_eq!(quantile_type7(&sorted, 0.0), 1.0);
        assert_eq!(quantile_type7(&sorted, 1.0), 6.0);
    }
}
