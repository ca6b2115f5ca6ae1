//! Smoothing options and configuration.

use crate::core::LowessError;

/// Largest polynomial degree the engine accepts.
///
/// Monomial design matrices are built directly in `f64`; their conditioning
/// degrades rapidly with degree, so degrees above this bound are rejected
/// up front rather than left to fail inside the solver.
pub const MAX_POLYNOMIAL_DEGREE: u32 = 16;

/// How the per-point fit interprets the configured polynomial degree.
///
/// `Requested` (the default) fits the configured degree at every point.
/// `FixedLinear` ignores the configured degree and always fits a local
/// line, the way STATA 13's `lowess` command smooths with running lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegreePolicy {
    /// Fit the requested polynomial degree at every point (default).
    #[default]
    Requested,

    /// Always fit a local line, regardless of the requested degree.
    FixedLinear,
}

/// Configuration for a LOWESS smoother.
///
/// Defaults follow STATA's `lowess`: bandwidth 0.2, local lines.
#[derive(Debug, Clone)]
pub struct LowessOptions {
    /// Fraction of the sample in each local neighborhood, in (0, 1) exclusive.
    pub bandwidth: f64,
    /// Degree of the local polynomial.
    pub polynomial_degree: u32,
    /// Whether per-point fits honor `polynomial_degree` or force a line.
    pub degree_policy: DegreePolicy,
}

impl Default for LowessOptions {
    fn default() -> Self {
        Self {
            bandwidth: 0.2,
            polynomial_degree: 1,
            degree_policy: DegreePolicy::default(),
        }
    }
}

impl LowessOptions {
    /// Create a new builder with default options.
    pub fn builder() -> LowessOptionsBuilder {
        LowessOptionsBuilder::default()
    }

    /// The degree actually fitted at each point under the configured policy.
    pub fn effective_degree(&self) -> u32 {
        match self.degree_policy {
            DegreePolicy::Requested => self.polynomial_degree,
            DegreePolicy::FixedLinear => 1,
        }
    }

    /// Validate the parameters.
    ///
    /// Called from `smooth` after the input series have been checked, so the
    /// reported error is always the first violation in the documented order.
    pub(crate) fn validate(&self) -> Result<(), LowessError> {
        if !(self.bandwidth > 0.0 && self.bandwidth < 1.0) {
            return Err(LowessError::InvalidBandwidth(self.bandwidth));
        }
        if self.polynomial_degree > MAX_POLYNOMIAL_DEGREE {
            return Err(LowessError::InvalidPolynomialDegree {
                got: self.polynomial_degree,
                max: MAX_POLYNOMIAL_DEGREE,
            });
        }
        Ok(())
    }
}

/// Builder for `LowessOptions`.
#[derive(Debug, Clone, Default)]
pub struct LowessOptionsBuilder {
    options: LowessOptions,
}

impl LowessOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighborhood bandwidth (fraction of the sample, in (0, 1)).
    pub fn bandwidth(mut self, bandwidth: f64) -> Self {
        self.options.bandwidth = bandwidth;
        self
    }

    /// Set the degree of the local polynomial.
    pub fn polynomial_degree(mut self, degree: u32) -> Self {
        self.options.polynomial_degree = degree;
        self
    }

    /// Set the degree policy.
    pub fn degree_policy(mut self, policy: DegreePolicy) -> Self {
        self.options.degree_policy = policy;
        self
    }

    /// Build the options.
    ///
    /// No validation happens here; parameters are checked on each smoothing
    /// call, after the input series, so error ordering is stable.
    pub fn build(self) -> LowessOptions {
        self.options
    }
}
