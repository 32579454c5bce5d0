//! Gradient (Perlin) noise and its fractal sum.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

/// Unit gradient directions picked per lattice corner.
pub const DIRECTIONS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (0.0, 1.0),
    (-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (-1.0, 0.0),
    (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    (0.0, -1.0),
    (FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
];

/// Octave settings for `fractal`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    pub octaves: u32,
    /// Amplitude multiplier between octaves
    pub persistence: f64,
    /// Frequency multiplier between octaves
    pub lacunarity: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

fn lattice_hash(x: i64, y: i64, seed: u64) -> u64 {
    // splitmix64 finalizer over the mixed coordinates
    let mut h = seed
        ^ (x as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (y as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    h = (h ^ (h >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    h = (h ^ (h >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    h ^ (h >> 31)
}

fn gradient(x: i64, y: i64, seed: u64) -> (f64, f64) {
    DIRECTIONS[(lattice_hash(x, y, seed) % DIRECTIONS.len() as u64) as usize]
}

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Sample 2D gradient noise.
///
/// Deterministic for a given `(x, y, seed)`, zero on integer lattice
/// points, and within `[-1, 1]`. Non-finite coordinates yield `0.0`.
///
/// Lattice coordinates saturate at the `i64` range and wrap when stepping to
/// the neighbouring corner, so very large inputs stay well defined.
pub fn perlin(x: f64, y: f64, seed: u64) -> f64 {
    if !x.is_finite() || !y.is_finite() {
        return 0.0;
    }

    let x0 = x.floor();
    let y0 = y.floor();
    let (ix, iy) = (x0 as i64, y0 as i64);
    let (fx, fy) = (x - x0, y - y0);
    let (ix1, iy1) = (ix.wrapping_add(1), iy.wrapping_add(1));

    let corner = |cx: i64, cy: i64, dx: f64, dy: f64| {
        let (gx, gy) = gradient(cx, cy, seed);
        gx * dx + gy * dy
    };

    let n00 = corner(ix, iy, fx, fy);
    let n10 = corner(ix1, iy, fx - 1.0, fy);
    let n01 = corner(ix, iy1, fx, fy - 1.0);
    let n11 = corner(ix1, iy1, fx - 1.0, fy - 1.0);

    let u = fade(fx);
    let v = fade(fy);
    lerp(lerp(n00, n10, u), lerp(n01, n11, u), v).clamp(-1.0, 1.0)
}

/// Sum `params.octaves` layers of `perlin`, normalized by total amplitude.
///
/// Each octave uses its own seed so layers are uncorrelated. Zero octaves
/// yield `0.0`.
pub fn fractal(x: f64, y: f64, seed: u64, params: FractalParams) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut norm = 0.0;

    for octave in 0..params.octaves {
        let octave_seed = seed.wrapping_add(u64::from(octave).wrapping_mul(0x2545_F491_4F6C_DD1D));
        total += amplitude * perlin(x * frequency, y * frequency, octave_seed);
        norm += amplitude;
        amplitude *= params.persistence;
        frequency *= params.lacunarity;
    }

    if norm == 0.0 {
        0.0
    } else {
        total / norm
    }
}
