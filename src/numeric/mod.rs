//! Numeric helpers for state predicates and behaviors.
//!
//! Pure functions: waves and noise are deterministic in their inputs,
//! Gaussian sampling draws from the random source it is handed.

pub mod gaussian;
pub mod noise;
pub mod waves;

pub use gaussian::{sample_gaussian, sample_gaussian_clamped, SamplingError};
pub use noise::{fractal, perlin, FractalParams, DIRECTIONS};
pub use waves::{aperiodic, periodic};
