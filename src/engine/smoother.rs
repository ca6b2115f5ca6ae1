//! Smoother orchestration: input validation and the per-point fit loop.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::{LowessError, LowessOptions, LowessOptionsBuilder, Series};
use crate::engine::rank::RankIndex;
use crate::engine::weights::tricubic_weights;
use crate::engine::window::neighborhood;
use crate::solvers::weighted_polynomial_fit;

/// LOWESS smoother with STATA 13 semantics.
///
/// For every sample the smoother selects a neighborhood of rank-adjacent
/// points sized by the bandwidth, weights it with a tricubic kernel, fits a
/// weighted polynomial, and reads the fitted value at the sample's own x.
/// Each point's fit is independent; with the `parallel` feature (on by
/// default) the per-point loop runs on a rayon worker pool.
///
/// # Example
///
/// ```rust
/// use stata_lowess::{Lowess, Series};
///
/// let x: Series<u32> = (0..30).map(|i| (i, i as f64)).collect();
/// let y: Series<u32> = (0..30).map(|i| (i, (i as f64 * 0.3).sin())).collect();
///
/// let model = Lowess::builder().bandwidth(0.4).polynomial_degree(1).build();
/// let smoothed = model.smooth(&x, &y)?;
///
/// assert_eq!(smoothed.len(), 30);
/// # Ok::<(), stata_lowess::LowessError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lowess {
    options: LowessOptions,
}

impl Lowess {
    /// Create a smoother with the given options.
    pub fn new(options: LowessOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the smoother.
    pub fn builder() -> LowessBuilder {
        LowessBuilder::default()
    }

    /// The options this smoother was configured with.
    pub fn options(&self) -> &LowessOptions {
        &self.options
    }

    /// Smooth `y` against `x`, returning one fitted value per key.
    ///
    /// `x` and `y` must carry the same key set (in any order); the result
    /// carries that key set too, in `x`'s storage order. Values are
    /// independent of storage order: permuting both inputs consistently
    /// yields the same value for every key.
    ///
    /// Validation runs before any computation and reports the first
    /// violation found, in this order: infinite entries, NaN entries (x
    /// before y for both), key-set mismatches, bandwidth, polynomial degree.
    /// Any per-point fit failure aborts the whole call; there are no partial
    /// results.
    pub fn smooth<K>(&self, x: &Series<K>, y: &Series<K>) -> Result<Series<K>, LowessError>
    where
        K: Clone + Eq + Hash,
    {
        validate_series("x", x)?;
        validate_series("y", y)?;
        let ys = align_by_key(x, y)?;
        self.options.validate()?;

        let xs = x.values();
        let n = xs.len();
        let bandwidth = self.options.bandwidth;
        let degree = self.options.effective_degree();

        let index = RankIndex::build(xs);

        let fit_at = |pos: usize| -> Result<f64, LowessError> {
            let window = neighborhood(n, index.rank_of(pos), bandwidth);
            if window.is_empty() {
                return Err(LowessError::UnderdeterminedRegression { points: 0, degree });
            }

            let mut wx = Vec::with_capacity(window.len());
            let mut wy = Vec::with_capacity(window.len());
            for rank in window.ranks() {
                let p = index.pos_at_rank(rank);
                wx.push(xs[p]);
                wy.push(ys[p]);
            }

            let weights = tricubic_weights(&wx, xs[pos]);
            let fitted = weighted_polynomial_fit(&wx, &wy, degree, &weights)?;
            Ok(fitted[window.target_offset])
        };

        #[cfg(feature = "parallel")]
        let smoothed: Result<Vec<f64>, LowessError> =
            (0..n).into_par_iter().map(fit_at).collect();
        #[cfg(not(feature = "parallel"))]
        let smoothed: Result<Vec<f64>, LowessError> = (0..n).map(fit_at).collect();

        let smoothed = smoothed?;
        Ok(Series::from_pairs(
            x.keys().iter().cloned().zip(smoothed),
        ))
    }
}

/// Builder for a `Lowess` smoother.
#[derive(Debug, Clone, Default)]
pub struct LowessBuilder {
    options: LowessOptionsBuilder,
}

impl LowessBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighborhood bandwidth (fraction of the sample, in (0, 1)).
    pub fn bandwidth(mut self, bandwidth: f64) -> Self {
        self.options = self.options.bandwidth(bandwidth);
        self
    }

    /// Set the degree of the local polynomial.
    pub fn polynomial_degree(mut self, degree: u32) -> Self {
        self.options = self.options.polynomial_degree(degree);
        self
    }

    /// Set the degree policy.
    pub fn degree_policy(mut self, policy: crate::core::DegreePolicy) -> Self {
        self.options = self.options.degree_policy(policy);
        self
    }

    /// Build the smoother. Parameters are validated per smoothing call.
    pub fn build(self) -> Lowess {
        Lowess {
            options: self.options.build(),
        }
    }
}

/// Smooth `y` against `x` in a single call.
///
/// Convenience wrapper over [`Lowess`] with the default degree policy.
pub fn smooth<K>(
    x: &Series<K>,
    y: &Series<K>,
    bandwidth: f64,
    polynomial_degree: u32,
) -> Result<Series<K>, LowessError>
where
    K: Clone + Eq + Hash,
{
    Lowess::builder()
        .bandwidth(bandwidth)
        .polynomial_degree(polynomial_degree)
        .build()
        .smooth(x, y)
}

/// Reject series containing values outside the real domain.
///
/// Infinite entries and NaN entries are distinct failures, scanned in that
/// order so the reported error kind is deterministic.
fn validate_series<K>(name: &'static str, series: &Series<K>) -> Result<(), LowessError> {
    if series.values().iter().any(|v| v.is_infinite()) {
        return Err(LowessError::InvalidInputType { series: name });
    }
    if series.values().iter().any(|v| v.is_nan()) {
        return Err(LowessError::MissingValue { series: name });
    }
    Ok(())
}

/// Check key-set equivalence and return y's values aligned to x's key order.
fn align_by_key<K>(x: &Series<K>, y: &Series<K>) -> Result<Vec<f64>, LowessError>
where
    K: Eq + Hash,
{
    if x.len() != y.len() {
        return Err(LowessError::KeySetMismatch(format!(
            "x has {} keys but y has {}",
            x.len(),
            y.len()
        )));
    }

    let mut y_by_key: HashMap<&K, f64> = HashMap::with_capacity(y.len());
    for (key, value) in y.iter() {
        if y_by_key.insert(key, value).is_some() {
            return Err(LowessError::KeySetMismatch(
                "y contains a duplicate key".into(),
            ));
        }
    }

    let mut seen: HashSet<&K> = HashSet::with_capacity(x.len());
    let mut aligned = Vec::with_capacity(x.len());
    for (key, _) in x.iter() {
        if !seen.insert(key) {
            return Err(LowessError::KeySetMismatch(
                "x contains a duplicate key".into(),
            ));
        }
        match y_by_key.get(key) {
            Some(&value) => aligned.push(value),
            None => {
                return Err(LowessError::KeySetMismatch(
                    "a key in x has no counterpart in y".into(),
                ))
            }
        }
    }

    Ok(aligned)
}
