//! Stochastic range sensor model.
//!
//! Models a single range reading as a three-way mixture: a Gaussian
//! "hit" around the expected distance, a uniform spurious reading
//! (multipath/reflections), and a max-range failure (sensor timeout,
//! no return). Provides the matching likelihood so a measurement can
//! be scored against a noise-free expected distance.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{DrishtiError, Result};

/// Weight of the Gaussian hit branch.
pub const P_HIT: f64 = 0.95;

/// Weight of the uniform spurious-reading branch.
pub const P_RANDOM: f64 = 0.03;

/// Weight of the max-range failure branch.
pub const P_FAILURE: f64 = 0.02;

/// Standard deviation of the hit branch in meters.
pub const SIGMA_HIT: f32 = 1.0;

/// Range sensor model with fixed mixture weights.
///
/// The three branch probabilities are invariants of the model (they
/// sum to 1), not per-call configuration; only the maximum range is
/// supplied by the caller.
#[derive(Debug, Clone)]
pub struct RangeSensorModel {
    max_range: f32,
}

impl RangeSensorModel {
    /// Create a sensor model with the given maximum range in meters.
    ///
    /// A non-positive or non-finite range is a configuration error:
    /// the uniform branch density 1/max_range would be meaningless
    /// and downstream normalization would divide by zero.
    pub fn new(max_range: f32) -> Result<Self> {
        if !max_range.is_finite() || max_range <= 0.0 {
            return Err(DrishtiError::Config(format!(
                "max_range must be positive and finite, got {max_range}"
            )));
        }
        Ok(Self { max_range })
    }

    /// Maximum range in meters.
    pub fn max_range(&self) -> f32 {
        self.max_range
    }

    /// Draw one stochastic reading given a noise-free expected distance.
    ///
    /// A single uniform draw `u ∈ [0, 1)` is compared against the
    /// cumulative thresholds 0.95 and 0.98, in that order:
    /// - `u < 0.95`: Gaussian around `expected` with σ = 1 (hit),
    /// - `u < 0.98`: uniform over [0, max_range) (spurious reading),
    /// - otherwise: exactly `max_range` (no-return failure).
    ///
    /// Readings are clamped to [0, max_range]. The generator is
    /// caller-supplied so rounds can be seeded deterministically.
    pub fn sample<R: Rng>(&self, expected: f32, rng: &mut R) -> f32 {
        let u: f64 = rng.gen();
        let reading = if u < P_HIT {
            let noise: f32 = rng.sample(StandardNormal);
            expected + noise * SIGMA_HIT
        } else if u < P_HIT + P_RANDOM {
            rng.gen_range(0.0..self.max_range)
        } else {
            self.max_range
        };
        reading.clamp(0.0, self.max_range)
    }

    /// Probability density of observing `measured` given `expected`.
    ///
    /// Mixture matching the generative model in [`sample`](Self::sample):
    ///
    /// ```text
    /// p = 0.95 · N(measured; expected, 1) + 0.03 / max_range + failure
    /// ```
    ///
    /// where `failure = 0.02` iff `measured == max_range` exactly.
    /// The failure branch emits the endpoint deliberately, so
    /// floating-point equality is the intended test; the uniform
    /// branch contributes 1/max_range everywhere in range.
    pub fn likelihood(&self, expected: f32, measured: f32) -> f64 {
        let sigma = SIGMA_HIT as f64;
        let d = (measured - expected) as f64;
        let hit = (-0.5 * d * d / (sigma * sigma)).exp()
            / (sigma * (2.0 * std::f64::consts::PI).sqrt());
        let random = 1.0 / self.max_range as f64;
        let failure = if measured == self.max_range { 1.0 } else { 0.0 };

        P_HIT * hit + P_RANDOM * random + P_FAILURE * failure
    }
}
