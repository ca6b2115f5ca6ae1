//! LOWESS scatterplot smoothing with STATA 13 semantics.
//!
//! Given paired samples `(x, y)` keyed by a shared set of identifiers, this
//! crate produces a smoothed estimate of y at every observed x by fitting a
//! tricubic-weighted polynomial regression over a neighborhood of
//! rank-adjacent points, independently for each sample. The neighborhood
//! rule, the 1.0001-inflated tricubic kernel, and the single-pass
//! (non-robust) weighted fit all follow STATA 13's `lowess` command.
//!
//! # Example
//!
//! ```rust
//! use stata_lowess::prelude::*;
//!
//! // Noisy observations keyed by sample id.
//! let x: Series<u32> = (0..40).map(|i| (i, i as f64 * 0.25)).collect();
//! let y: Series<u32> = (0..40)
//!     .map(|i| {
//!         let t = i as f64 * 0.25;
//!         (i, t.sin() + 0.1 * (i as f64 * 2.7).sin())
//!     })
//!     .collect();
//!
//! let model = Lowess::builder()
//!     .bandwidth(0.5)
//!     .polynomial_degree(1)
//!     .build();
//!
//! let smoothed = model.smooth(&x, &y)?;
//! assert_eq!(smoothed.len(), x.len());
//! # Ok::<(), LowessError>(())
//! ```
//!
//! Or in one call, mirroring the classic functional interface:
//!
//! ```rust
//! use stata_lowess::{smooth, Series};
//!
//! let x: Series<&str> = [("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0),
//!     ("e", 5.0), ("f", 6.0), ("g", 7.0), ("h", 8.0)].into_iter().collect();
//! let y: Series<&str> = [("a", 1.1), ("b", 1.9), ("c", 3.2), ("d", 3.8),
//!     ("e", 5.1), ("f", 5.9), ("g", 7.2), ("h", 7.8)].into_iter().collect();
//!
//! let smoothed = smooth(&x, &y, 0.5, 1)?;
//! assert_eq!(smoothed.keys(), x.keys());
//! # Ok::<(), stata_lowess::LowessError>(())
//! ```
//!
//! # Behavior notes
//!
//! * Neighborhoods are selected by *rank* distance: the half-window is
//!   `floor((n·bandwidth − 0.5) / 2)` ranks on either side, clamped at the
//!   data boundary, so edge points see smaller neighborhoods.
//! * Smoothing is a pure function of the key→value mappings: storage order
//!   never affects the result.
//! * A neighborhood whose points all share one x value has no defined
//!   tricubic weights; such fits fail with
//!   [`LowessError::RegressionFailure`]. Known limitation.
//! * Every error aborts the whole call; there are no partial results.

pub mod core;
mod engine;
mod solvers;

pub use crate::core::{
    DegreePolicy, LowessError, LowessOptions, LowessOptionsBuilder, Series,
    MAX_POLYNOMIAL_DEGREE,
};
pub use crate::engine::{smooth, Lowess, LowessBuilder};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        DegreePolicy, LowessError, LowessOptions, LowessOptionsBuilder, Series,
        MAX_POLYNOMIAL_DEGREE,
    };
    pub use crate::engine::{smooth, Lowess, LowessBuilder};
}
