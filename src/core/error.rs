//! Error type for LOWESS smoothing.

use thiserror::Error;

/// Errors that can occur while validating inputs or fitting local regressions.
///
/// Every error aborts the whole smoothing call: there are no partial results
/// and no internal retries. Callers that want to recover (for example by
/// widening the bandwidth) do so around the call.
#[derive(Debug, Error)]
pub enum LowessError {
    /// A series contains a value outside the real number domain (±∞).
    #[error("{series} contains a non-finite (infinite) value")]
    InvalidInputType {
        /// Which input series the offending value was found in.
        series: &'static str,
    },

    /// A series contains a missing observation encoded as NaN.
    #[error("{series} contains a missing (NaN) value")]
    MissingValue {
        /// Which input series the missing value was found in.
        series: &'static str,
    },

    /// The x and y key sets are not the same set, or a set contains duplicates.
    #[error("x and y key sets are not equivalent: {0}")]
    KeySetMismatch(String),

    /// The bandwidth is outside the open interval (0, 1).
    #[error("bandwidth must be strictly between 0 and 1, got {0}")]
    InvalidBandwidth(f64),

    /// The polynomial degree is above the largest degree the engine accepts.
    #[error("polynomial degree {got} exceeds the supported maximum {max}")]
    InvalidPolynomialDegree {
        /// The degree that was requested.
        got: u32,
        /// The largest accepted degree.
        max: u32,
    },

    /// A local window holds fewer points than the fit requires.
    #[error(
        "under-determined regression: more fit variables than data points \
         ({points} points in the window for degree {degree})"
    )]
    UnderdeterminedRegression {
        /// Number of points in the offending window.
        points: usize,
        /// Effective polynomial degree of the attempted fit.
        degree: u32,
    },

    /// The weighted least-squares solve broke down.
    #[error("least-squares regression failed: {0}")]
    RegressionFailure(String),
}
