//! Pose scoring: ray casting, sensor model, importance weighting.

mod ray_caster;
mod sampler;
mod sensor_model;
mod weighter;

pub use ray_caster::{RayCaster, RayHit};
pub use sampler::sample_poses;
pub use sensor_model::{RangeSensorModel, P_FAILURE, P_HIT, P_RANDOM, SIGMA_HIT};
pub use weighter::ImportanceWeighter;
