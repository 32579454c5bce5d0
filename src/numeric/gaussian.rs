//! Gaussian sampling over a caller-supplied random source.

use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};
use thiserror::Error;

/// Errors from Gaussian sampling.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SamplingError {
    #[error("invalid normal distribution: {0}")]
    Distribution(#[from] NormalError),

    #[error("invalid clamp range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
}

/// Draw from a normal distribution.
///
/// Fails when `std_dev` is rejected by [`Normal::new`], e.g. when it is NaN.
pub fn sample_gaussian<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std_dev: f64,
) -> Result<f64, SamplingError> {
    let normal = Normal::new(mean, std_dev)?;
    Ok(normal.sample(rng))
}

/// Draw from a normal distribution, clamped into `[min, max]`.
///
/// Handy for randomized timings that must stay within sane limits. A NaN
/// bound or `min > max` is reported as [`SamplingError::InvalidRange`].
pub fn sample_gaussian_clamped<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
) -> Result<f64, SamplingError> {
    if min.is_nan() || max.is_nan() || min > max {
        return Err(SamplingError::InvalidRange { min, max });
    }
    Ok(sample_gaussian(rng, mean, std_dev)?.clamp(min, max))
}
