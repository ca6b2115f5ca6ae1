//! Common test utilities and data generators.

use stata_lowess::Series;

/// Generate noisy sine data keyed by sample id: y = sin(x) + noise.
pub fn generate_noisy_sine(n: usize, noise_std: f64, seed: u64) -> (Series<u32>, Series<u32>) {
    // Simple deterministic "random" for reproducibility
    let mut rng_state = seed;
    let next_rand = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((*state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let mut x_pairs = Vec::with_capacity(n);
    let mut y_pairs = Vec::with_capacity(n);
    for i in 0..n {
        let xi = i as f64 * 0.2;
        let yi = xi.sin() + noise_std * next_rand(&mut rng_state);
        x_pairs.push((i as u32, xi));
        y_pairs.push((i as u32, yi));
    }

    (Series::from_pairs(x_pairs), Series::from_pairs(y_pairs))
}

/// A deterministic permutation of `0..n` (Fisher-Yates over an LCG).
pub fn permutation(n: usize, seed: u64) -> Vec<usize> {
    let mut rng_state = seed;
    let next_index = |state: &mut u64, bound: usize| -> usize {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((*state >> 33) as usize) % bound
    };

    let mut perm: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        perm.swap(i, next_index(&mut rng_state, i + 1));
    }
    perm
}

/// Reorder a series by the given permutation of its storage positions.
pub fn reorder<K: Clone>(series: &Series<K>, perm: &[usize]) -> Series<K> {
    Series::from_pairs(
        perm.iter()
            .map(|&i| (series.keys()[i].clone(), series.values()[i])),
    )
}

/// Approximate equality under the relative-difference metric used by the
/// STATA comparison suites: |a − b| / |a + b|.
pub fn relative_diff(a: f64, b: f64) -> f64 {
    if a == b {
        0.0
    } else {
        ((a - b) / (a + b)).abs()
    }
}
