//! # LOWESS bandwidth sweep
//!
//! Smooths a noisy sine signal with several bandwidths. Small bandwidths
//! chase the noise; large bandwidths flatten the oscillation away.
//!
//! Run with: `cargo run --example by_bandwidth`

use stata_lowess::{smooth, Series};

fn main() {
    println!("=== LOWESS by bandwidth ===\n");

    let n = 150;

    // Noisy sine signal on x in [-10, 5), deterministic noise.
    let mut rng_state: u64 = 123;
    let mut next_rand = || -> f64 {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((rng_state >> 33) as f64) / (u32::MAX as f64)
    };

    let x: Series<u32> = (0..n).map(|i| (i, -10.0 + i as f64 * 0.1)).collect();
    let y: Series<u32> = (0..n)
        .map(|i| {
            let t = -10.0 + i as f64 * 0.1;
            (i, t.sin() - 0.5 + next_rand())
        })
        .collect();

    let bandwidths = [0.05, 0.1, 0.3, 0.5, 0.7];

    let mut columns = Vec::new();
    for &bandwidth in &bandwidths {
        let smoothed = smooth(&x, &y, bandwidth, 1).expect("smoothing failed");
        columns.push(smoothed);
    }

    println!(
        "{:>7} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "x", "Raw", "b=0.05", "b=0.1", "b=0.3", "b=0.5", "b=0.7"
    );
    println!("{}", "-".repeat(67));

    for i in (0..n).step_by(10) {
        let key = i as u32;
        print!(
            "{:>7.2} {:>9.4}",
            x.get(&key).unwrap(),
            y.get(&key).unwrap()
        );
        for smoothed in &columns {
            print!(" {:>9.4}", smoothed.get(&key).unwrap());
        }
        println!();
    }

    println!("\nNote: smaller bandwidths fit the noise, larger ones miss the signal.");
}
