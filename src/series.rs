//! series — validated container for univariate observation sequences.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the single numeric sequence that
//! every diagnostic in this crate operates on. This module centralizes input
//! validation (non-emptiness, finiteness) so downstream analysis code can
//! assume clean data and focus on the statistics themselves.
//!
//! Key behaviors
//! -------------
//! - [`Series`] enforces basic data invariants at construction time:
//!   the sequence is non-empty and every observation is finite.
//! - Observations are stored as an `ndarray::Array1<f64>` in standard layout
//!   so the whole sequence can be viewed as a contiguous `&[f64]`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `len() >= 1` for every constructed [`Series`].
//! - All observations are finite (no `NaN`, no ±∞).
//! - A [`Series`] is immutable after construction; no method exposes a
//!   mutable view of the underlying data.
//!
//! Conventions
//! -----------
//! - Storage is 0-based; the diagnostic literature's 1-based observation
//!   index `t = 1..N` maps to slice position `t - 1`. Modules that regress
//!   against the index (e.g., the trend fit) document the convention they
//!   apply.
//! - Individual diagnostics impose their own stricter length minima (e.g.,
//!   the trend fit requires `N >= 3`); this type only guarantees the data
//!   is well-formed.
//!
//! Downstream usage
//! ----------------
//! - Construct a [`Series`] at the crate boundary where raw observations
//!   enter (directly, via [`Series::from_vec`], or through the text reader
//!   in [`crate::source`]).
//! - Pass `&Series` to the descriptive, spectral, trend, and test modules;
//!   they rely on the invariants above and do not re-validate finiteness.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path plus both rejection branches (empty
//!   input, non-finite values) and check that the reported index/value
//!   payloads identify the first offending element.

use ndarray::Array1;

pub type SeriesResult<T> = Result<T, SeriesError>;

/// SeriesError — validation failures when constructing a [`Series`].
///
/// Variants
/// --------
/// - `EmptySeries`
///   The input contained no observations.
/// - `NonFiniteValue { index, value }`
///   An observation is `NaN` or ±∞; `index` points to the first offending
///   element.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation; payloads are small copies so the
///   enum is cheap to clone and compare in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesError {
    EmptySeries,
    NonFiniteValue { index: usize, value: f64 },
}

impl std::error::Error for SeriesError {}

// At the Python boundary every validation failure surfaces as a ValueError
// with the Rust `Display` message preserved verbatim.
#[cfg(feature = "python-bindings")]
impl From<SeriesError> for pyo3::PyErr {
    fn from(err: SeriesError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

impl std::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesError::EmptySeries => {
                write!(f, "Series must contain at least one observation.")
            }
            SeriesError::NonFiniteValue { index, value } => {
                write!(f, "Non-finite observation {value} at index {index}. All values must be finite.")
            }
        }
    }
}

/// Series — ordered, immutable sequence of real-valued observations.
///
/// Purpose
/// -------
/// Represent one validated univariate sequence for the diagnostic pipeline.
/// All analysis components borrow a `&Series`; none of them mutate it or
/// take ownership, so a single series can feed every stage.
///
/// Key behaviors
/// -------------
/// - Stores observations as an `ndarray::Array1<f64>` normalized to
///   standard layout at construction.
/// - Enforces non-emptiness and finiteness via [`Series::new`].
/// - Exposes read-only access as an array view or contiguous slice.
///
/// Invariants
/// ----------
/// - `self.len() >= 1`.
/// - Every stored value is finite.
/// - The backing array is in standard layout, so [`Series::as_slice`]
///   always succeeds.
///
/// Performance
/// -----------
/// - Validation is a single O(n) scan; afterwards the type is a plain
///   container with no hidden allocations.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    values: Array1<f64>,
}

impl Series {
    /// Construct a validated [`Series`] from raw observations.
    ///
    /// Parameters
    /// ----------
    /// - `values`: `Array1<f64>`
    ///   Raw observation sequence. Must be non-empty with all elements
    ///   finite.
    ///
    /// Returns
    /// -------
    /// `SeriesResult<Series>`
    ///   - `Ok(Series)` if all invariants are satisfied.
    ///   - `Err(SeriesError)` otherwise.
    ///
    /// Errors
    /// ------
    /// - `SeriesError::EmptySeries` when `values.len() == 0`.
    /// - `SeriesError::NonFiniteValue { index, value }` for the first
    ///   `NaN` or ±∞ element.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `SeriesError`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use series_diagnostics::series::Series;
    /// let series = Series::new(array![1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(series.len(), 3);
    /// ```
    pub fn new(values: Array1<f64>) -> SeriesResult<Self> {
        if values.is_empty() {
            return Err(SeriesError::EmptySeries);
        }

        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(SeriesError::NonFiniteValue { index, value });
            }
        }

        // Normalize to standard layout so `as_slice` is infallible.
        let values = if values.is_standard_layout() {
            values
        } else {
            values.as_standard_layout().into_owned()
        };

        Ok(Series { values })
    }

    /// Construct a [`Series`] from a plain `Vec<f64>`.
    ///
    /// Convenience wrapper over [`Series::new`]; applies the same
    /// validation.
    pub fn from_vec(values: Vec<f64>) -> SeriesResult<Self> {
        Series::new(Array1::from(values))
    }

    /// Number of observations N.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a constructed series; present for API symmetry
    /// with standard containers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the observations.
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Observations as a contiguous slice.
    pub fn as_slice(&self) -> &[f64] {
        // Standard layout is enforced at construction.
        self.values.as_slice().expect("series storage is standard layout")
    }
}
