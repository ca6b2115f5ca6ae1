//! Smoothing engine: rank index, neighborhood selection, kernel weights,
//! and the orchestration loop.

mod rank;
mod smoother;
mod weights;
mod window;

pub use smoother::{smooth, Lowess, LowessBuilder};
