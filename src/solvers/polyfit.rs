//! Weighted polynomial least-squares fit.

use faer::{Col, Index, Mat};

use crate::core::LowessError;

/// Rank tolerance for the pivoted QR decomposition.
const RANK_TOLERANCE: f64 = 1e-10;

/// Fit a polynomial of the given degree to `(xs, ys)` under observation
/// weights, and evaluate it at every `xs` entry.
///
/// The weighted problem is reduced to ordinary least squares by scaling each
/// design row and target entry by the square root of its weight, then solved
/// with a rank-truncating column-pivoted QR. Fitted values are the projection
/// of the target onto the design's column space, so rank-deficient windows
/// (duplicated x values, more unknowns than points) still evaluate to
/// well-defined numbers.
///
/// # Arguments
/// * `xs` - x values of the neighborhood
/// * `ys` - y values of the neighborhood, same length
/// * `degree` - polynomial degree; `degree + 1` coefficients are fitted
/// * `weights` - one non-negative weight per point
///
/// # Returns
/// The fitted polynomial evaluated at every `xs` entry. Callers doing local
/// smoothing consume only the target point's entry, but the whole vector is
/// the contract.
///
/// # Errors
/// * `UnderdeterminedRegression` when the window holds fewer than `degree`
///   points. The bound is deliberately loose (`degree` rather than
///   `degree + 1`, matching STATA-style smoothers): a window of exactly
///   `degree` points slips through, and the rank truncation absorbs the
///   deficiency.
/// * `RegressionFailure` when the weighted system contains non-finite values
///   (for example NaN weights from a zero-diameter neighborhood) or the
///   decomposition yields no usable pivot.
pub(crate) fn weighted_polynomial_fit(
    xs: &[f64],
    ys: &[f64],
    degree: u32,
    weights: &[f64],
) -> Result<Vec<f64>, LowessError> {
    let n = xs.len();

    if n < degree as usize {
        return Err(LowessError::UnderdeterminedRegression { points: n, degree });
    }

    let n_coeffs = degree as usize + 1;

    // Monomial design matrix, one row per point: x^0 .. x^degree.
    let design = Mat::from_fn(n, n_coeffs, |i, j| xs[i].powi(j as i32));

    // Scale rows and target by sqrt(w): weighted least squares via ordinary
    // least squares on the transformed system.
    let mut weighted = Mat::zeros(n, n_coeffs);
    let mut rhs = Col::zeros(n);
    for i in 0..n {
        let sw = weights[i].sqrt();
        rhs[i] = ys[i] * sw;
        for j in 0..n_coeffs {
            weighted[(i, j)] = design[(i, j)] * sw;
        }
    }

    for i in 0..n {
        if !rhs[i].is_finite() {
            return Err(LowessError::RegressionFailure(
                "non-finite values in the weighted target".into(),
            ));
        }
        for j in 0..n_coeffs {
            if !weighted[(i, j)].is_finite() {
                return Err(LowessError::RegressionFailure(
                    "non-finite values in the weighted design matrix".into(),
                ));
            }
        }
    }

    let coefficients = solve_least_squares(&weighted, &rhs)?;

    // Evaluate the fitted polynomial at every point of the window. Truncated
    // columns carry NaN coefficients and contribute nothing.
    let mut fitted = vec![0.0; n];
    for (i, value) in fitted.iter_mut().enumerate() {
        let mut acc = 0.0;
        for j in 0..n_coeffs {
            if !coefficients[j].is_nan() {
                acc += design[(i, j)] * coefficients[j];
            }
        }
        *value = acc;
    }

    Ok(fitted)
}

/// Solve `min ||x·β − y||²` by column-pivoted QR with rank truncation.
///
/// Columns beyond the numerical rank get NaN coefficients.
fn solve_least_squares(x: &Mat<f64>, y: &Col<f64>) -> Result<Col<f64>, LowessError> {
    let n_rows = x.nrows();
    let n_cols = x.ncols();

    let qr = x.col_piv_qr();
    let q = qr.compute_q();
    let r = qr.compute_r();
    let perm = qr.col_permutation();

    let perm_arr = perm.arrays().0;
    let mut perm_inv: Vec<usize> = vec![0; n_cols];
    for j in 0..n_cols {
        perm_inv[j] = perm_arr[j].to_signed().unsigned_abs();
    }

    // Numerical rank from the R diagonal.
    let mut rank = 0;
    for i in 0..n_cols.min(n_rows) {
        if r[(i, i)].abs() > RANK_TOLERANCE {
            rank += 1;
        } else {
            break;
        }
    }

    if rank == 0 {
        return Err(LowessError::RegressionFailure(
            "weighted design matrix has no usable pivot".into(),
        ));
    }

    // Back-substitute on the leading rank x rank block of R.
    let qty = q.transpose() * y;
    let mut beta_reduced = Col::zeros(rank);
    for i in (0..rank).rev() {
        let mut sum = qty[i];
        for j in (i + 1)..rank {
            sum -= r[(i, j)] * beta_reduced[j];
        }
        beta_reduced[i] = sum / r[(i, i)];
    }

    // Map back to original column order.
    let mut coefficients = Col::zeros(n_cols);
    for j in 0..n_cols {
        if perm_inv[j] >= rank {
            coefficients[j] = f64::NAN;
        } else {
            coefficients[j] = beta_reduced[perm_inv[j]];
        }
    }

    Ok(coefficients)
}
