//! Sampling primitives over an explicit random source.
//!
//! Every function takes the generator handle as an argument; nothing here
//! touches process-wide state.

use rand::Rng;
use rand::distr::weighted::WeightedIndex;
use rand_distr::{Distribution, LogNormal, Normal};

use crate::errors::GenerationError;

/// Pick one label from ordered `(label, weight)` pairs.
///
/// Weights need not sum to one. Empty lists, negative or non-finite weights,
/// and all-zero weights are rejected.
pub fn choose_weighted<T, R>(choices: &[(T, f64)], rng: &mut R) -> Result<T, GenerationError>
where
    T: Copy,
    R: Rng + ?Sized,
{
    let index = WeightedIndex::new(choices.iter().map(|(_, weight)| *weight))
        .map_err(|err| GenerationError::InvalidWeights(err.to_string()))?;
    Ok(choices[index.sample(rng)].0)
}

/// Pick one item uniformly.
pub fn choose_uniform<T, R>(items: &[T], rng: &mut R) -> Result<T, GenerationError>
where
    T: Copy,
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Err(GenerationError::InvalidWeights(
            "cannot choose from an empty list".to_string(),
        ));
    }
    Ok(items[rng.random_range(0..items.len())])
}

/// Normal draw; a negative or NaN `sd` is rejected.
pub fn normal<R: Rng + ?Sized>(mean: f64, sd: f64, rng: &mut R) -> Result<f64, GenerationError> {
    if sd.is_nan() || sd < 0.0 {
        return Err(GenerationError::InvalidDistribution(format!(
            "normal(mean={mean}, sd={sd}): sd must be non-negative"
        )));
    }
    let dist = Normal::new(mean, sd).map_err(|err| {
        GenerationError::InvalidDistribution(format!("normal(mean={mean}, sd={sd}): {err}"))
    })?;
    Ok(dist.sample(rng))
}

/// Draw from a log-normal whose underlying normal has `mu` and `sigma`.
pub fn log_normal<R: Rng + ?Sized>(mu: f64, sigma: f64, rng: &mut R) -> Result<f64, GenerationError> {
    if sigma.is_nan() || sigma < 0.0 {
        return Err(GenerationError::InvalidDistribution(format!(
            "log_normal(mu={mu}, sigma={sigma}): sigma must be non-negative"
        )));
    }
    let dist = LogNormal::new(mu, sigma).map_err(|err| {
        GenerationError::InvalidDistribution(format!("log_normal(mu={mu}, sigma={sigma}): {err}"))
    })?;
    Ok(dist.sample(rng))
}

/// Bernoulli draw; `p` outside `[0, 1]` is rejected.
pub fn chance<R: Rng + ?Sized>(p: f64, rng: &mut R) -> Result<bool, GenerationError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GenerationError::InvalidDistribution(format!(
            "probability {p} outside [0, 1]"
        )));
    }
    Ok(rng.random::<f64>() < p)
}

/// Round half away from zero to `dp` decimal places.
pub fn round_dp(value: f64, dp: i32) -> f64 {
    let factor = 10_f64.powi(dp);
    (value * factor).round() / factor
}

/// Drop the fractional part, rounding toward zero.
pub fn truncate_int(value: f64) -> i64 {
    value.trunc() as i64
}
