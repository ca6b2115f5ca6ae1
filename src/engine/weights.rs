//! Tricubic kernel weights.

/// Inflation applied to the largest neighbor distance before normalizing.
///
/// Keeps the farthest neighbor's normalized distance strictly below 1, so its
/// tricubic weight is strictly positive instead of collapsing to zero at the
/// window edge. The exact value matters for numerical parity with STATA-style
/// smoothers and must not be changed.
const MAX_DISTANCE_INFLATION: f64 = 1.0001;

/// Tricubic weights for a neighborhood, relative to the target value `xi`.
///
/// `w_j = (1 − (|x_j − xi| / (1.0001 · dmax))³)³` where `dmax` is the largest
/// distance in the window. The target itself (distance 0) gets weight exactly
/// 1.0.
///
/// If every neighbor coincides with `xi` (`dmax = 0`), the normalization
/// divides zero by zero and the weights come out NaN. That degenerate case is
/// deliberately left undefined here; the regression rejects the non-finite
/// weighted system downstream.
pub(crate) fn tricubic_weights(xs: &[f64], xi: f64) -> Vec<f64> {
    let dmax = xs.iter().map(|&x| (x - xi).abs()).fold(0.0_f64, f64::max);
    let scale = MAX_DISTANCE_INFLATION * dmax;

    xs.iter()
        .map(|&x| {
            let u = (x - xi).abs() / scale;
            (1.0 - u.powi(3)).powi(3)
        })
        .collect()
}
