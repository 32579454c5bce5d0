//! Periodic and aperiodic wave sampling.

use std::f64::consts::{E, PI, SQRT_2, TAU};

/// Sample a sine wave.
///
/// `phase` is in cycles, so `0.25` shifts by a quarter period. A
/// non-positive `period` yields `0.0`.
pub fn periodic(t: f64, period: f64, amplitude: f64, phase: f64) -> f64 {
    if period <= 0.0 {
        return 0.0;
    }
    amplitude * (TAU * (t / period + phase)).sin()
}

// Pairwise incommensurate, so the sum never repeats.
const APERIODIC_FREQUENCIES: [f64; 3] = [1.0, SQRT_2, PI / E];

/// Sample a smooth signal in `[-1, 1]` that never repeats.
///
/// Sums sines at incommensurate frequencies; `seed` shifts each component
/// so different seeds give unrelated signals.
pub fn aperiodic(t: f64, seed: u64) -> f64 {
    let offset = (seed % 10_007) as f64;
    let sum: f64 = APERIODIC_FREQUENCIES
        .iter()
        .enumerate()
        .map(|(i, frequency)| (frequency * (t + offset * (i as f64 + 1.0))).sin())
        .sum();
    sum / APERIODIC_FREQUENCIES.len() as f64
}
