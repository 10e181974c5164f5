//! statistical_tests::levene — Brown–Forsythe variance-homogeneity test.
//!
//! Purpose
//! -------
//! Implement the median-based Levene test (Brown–Forsythe variant) used by
//! the diagnostic battery to check whether the spread of a time series is
//! stable across its span. The series is split into contiguous blocks in
//! original order, preserving the temporal-ordering assumption central to
//! this diagnostic, and a one-way ANOVA F-test is run on the absolute
//! deviations from each block's median.
//!
//! Key behaviors
//! -------------
//! - [`GroupPartition::contiguous`] assigns `⌊N/k⌋` observations to each
//!   of the first `k − 1` blocks and the remainder to the final block;
//!   blocks are never randomized or sorted.
//! - Deviations are taken from the group **median** (Brown–Forsythe), not
//!   the group mean.
//! - The statistic follows `F(k − 1, N − k)` under the null; the outcome
//!   reports the critical value at `1 − α`, the reject decision, and the
//!   upper-tail p-value.
//!
//! Invariants & assumptions
//! ------------------------
//! - `2 <= num_groups <= N / 2` and `alpha ∈ (0, 1)`; both enforced via
//!   the shared validation guards.
//! - Observations are finite (checked by [`validate_series`]).
//!
//! Downstream usage
//! ----------------
//! - The diagnostic pipeline calls
//!   [`LeveneOutcome::brown_forsythe`] once per run with the configured
//!   group count and significance level; renderers read the public
//!   fields and the retained [`GroupPartition`].
//!
//! Testing notes
//! -------------
//! - Unit tests pin the remainder policy of the partition, verify that
//!   identical blocks yield a zero statistic (no rejection) while a 10×
//!   spread in one block rejects at α = 0.05, and exercise every error
//!   branch.

use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::descriptive::quantiles::median_sorted;
use crate::statistical_tests::errors::{TestError, TestResult};
use crate::statistical_tests::validation::{validate_alpha, validate_group_count, validate_series};

/// GroupPartition — contiguous equal-size blocks over observation indices.
///
/// Purpose
/// -------
/// Record how a series of length `N` was split into `k` contiguous blocks
/// for the variance-homogeneity test, so the report can attribute each
/// observation to its block.
///
/// Key behaviors
/// -------------
/// - Blocks cover `0..N` without gaps or overlap, in original sequence
///   order.
/// - Remainder policy: the first `k − 1` blocks hold exactly `⌊N/k⌋`
///   observations; the final block absorbs the remaining `⌊N/k⌋ + N mod k`.
///
/// Invariants
/// ----------
/// - `ranges.len() == k >= 2`; ranges are non-empty, sorted, and
///   partition `0..N` exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPartition {
    ranges: Vec<std::ops::Range<usize>>,
}

impl GroupPartition {
    /// Partition `0..len` into `num_groups` contiguous blocks.
    ///
    /// Parameters
    /// ----------
    /// - `len`: `usize`
    ///   Number of observations to partition.
    /// - `num_groups`: `usize`
    ///   Number of contiguous blocks; must satisfy
    ///   `2 <= num_groups <= len / 2`.
    ///
    /// Returns
    /// -------
    /// `TestResult<GroupPartition>`
    ///   - `Ok(partition)` with the documented remainder policy.
    ///   - `Err(TestError::InvalidGroupCount)` otherwise.
    pub fn contiguous(len: usize, num_groups: usize) -> TestResult<Self> {
        validate_group_count(len, num_groups)?;

        let base = len / num_groups;
        let mut ranges = Vec::with_capacity(num_groups);
        for g in 0..num_groups {
            let start = g * base;
            let end = if g == num_groups - 1 { len } else { start + base };
            ranges.push(start..end);
        }

        Ok(GroupPartition { ranges })
    }

    /// Number of blocks k.
    pub fn num_groups(&self) -> usize {
        self.ranges.len()
    }

    /// Index range of block `group`, or `None` when out of range.
    pub fn group_range(&self, group: usize) -> Option<std::ops::Range<usize>> {
        self.ranges.get(group).cloned()
    }

    /// Block label of observation `index`, or `None` when `index` lies
    /// beyond the partitioned length.
    pub fn label_of(&self, index: usize) -> Option<usize> {
        self.ranges.iter().position(|r| r.contains(&index))
    }

    /// Iterate over the block index ranges in order.
    pub fn iter(&self) -> impl Iterator<Item = std::ops::Range<usize>> + '_ {
        self.ranges.iter().cloned()
    }
}

/// LeveneOutcome — result of the Brown–Forsythe test on contiguous blocks.
///
/// Purpose
/// -------
/// Value object holding the variance-homogeneity block of the diagnostic
/// report. Computed once per series via
/// [`LeveneOutcome::brown_forsythe`]; never mutated afterwards.
///
/// Fields
/// ------
/// - `statistic`: the F statistic on absolute deviations from group
///   medians.
/// - `df_num`: numerator degrees of freedom, `k − 1`.
/// - `df_denom`: denominator degrees of freedom, `N − k`.
/// - `alpha`: significance level used for the critical value.
/// - `critical_value`: F quantile at `1 − alpha`.
/// - `reject`: `statistic > critical_value`.
/// - `p_value`: upper-tail probability of `statistic`.
/// - `partition`: the contiguous [`GroupPartition`] the test used.
///
/// Invariants
/// ----------
/// - `statistic >= 0` and `p_value ∈ [0, 1]`.
/// - `reject` agrees with the critical-value comparison by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LeveneOutcome {
    pub statistic: f64,
    pub df_num: usize,
    pub df_denom: usize,
    pub alpha: f64,
    pub critical_value: f64,
    pub reject: bool,
    pub p_value: f64,
    pub partition: GroupPartition,
}

impl LeveneOutcome {
    /// Run the Brown–Forsythe test on `num_groups` contiguous blocks.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Input series of finite observations.
    /// - `num_groups`: `usize`
    ///   Number of contiguous blocks k; the diagnostic default is 4.
    /// - `alpha`: `f64`
    ///   Significance level in (0, 1); the diagnostic default is 0.05.
    ///
    /// Returns
    /// -------
    /// `TestResult<LeveneOutcome>`
    ///   - `Ok(outcome)` on success.
    ///   - `Err(TestError)` on validation or degeneracy failures.
    ///
    /// Errors
    /// ------
    /// - `TestError::InsufficientData` / `TestError::NonFiniteValue` from
    ///   the shared series guard.
    /// - `TestError::InvalidGroupCount` when
    ///   `num_groups < 2` or `num_groups > N / 2`.
    /// - `TestError::InvalidAlpha` when `alpha` lies outside (0, 1).
    /// - `TestError::DegenerateDeviations` when the within-group sum of
    ///   squared deviations is zero, so the F ratio is undefined.
    ///
    /// Panics
    /// ------
    /// - Never panics on inputs accepted by validation; the F
    ///   distribution is constructed from degrees of freedom already
    ///   known to be positive.
    ///
    /// Notes
    /// -----
    /// - Internally, this method:
    ///   - partitions `0..N` contiguously,
    ///   - computes each block's median and the absolute deviations
    ///     `z_ij = |y_ij − median_j|`,
    ///   - forms the one-way ANOVA F ratio on the `z_ij`, and
    ///   - compares it against the `F(k − 1, N − k)` quantile at
    ///     `1 − alpha`.
    pub fn brown_forsythe(data: &[f64], num_groups: usize, alpha: f64) -> TestResult<Self> {
        validate_series(data, 2)?;
        validate_alpha(alpha)?;
        let partition = GroupPartition::contiguous(data.len(), num_groups)?;

        let n = data.len();
        let k = num_groups;

        // Absolute deviations from each block's median.
        let mut deviations: Vec<Vec<f64>> = Vec::with_capacity(k);
        for range in partition.iter() {
            let mut block = data[range].to_vec();
            block.sort_by(|a, b| a.partial_cmp(b).expect("finite values are totally ordered"));
            let median = median_sorted(&block);
            deviations.push(block.iter().map(|&y| (y - median).abs()).collect());
        }

        let total: usize = deviations.iter().map(Vec::len).sum();
        let grand_mean: f64 =
            deviations.iter().flatten().sum::<f64>() / total as f64;

        let mut between = 0.0;
        let mut within = 0.0;
        for group in &deviations {
            let group_mean = group.iter().sum::<f64>() / group.len() as f64;
            between += group.len() as f64 * (group_mean - grand_mean).powi(2);
            within += group.iter().map(|&z| (z - group_mean).powi(2)).sum::<f64>();
        }

        if within == 0.0 {
            return Err(TestError::DegenerateDeviations);
        }

        let df_num = k - 1;
        let df_denom = n - k;
        let statistic = (between / df_num as f64) / (within / df_denom as f64);

        let dist = FisherSnedecor::new(df_num as f64, df_denom as f64)
            .expect("degrees of freedom are positive");
        let critical_value = dist.inverse_cdf(1.0 - alpha);
        let p_value = 1.0 - dist.cdf(statistic);

        Ok(LeveneOutcome {
            statistic,
            df_num,
            df_denom,
            alpha,
            critical_value,
            reject: statistic > critical_value,
            p_value,
            partition,
        })
    }
}
