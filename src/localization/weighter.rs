//! Importance weighting of candidate poses against range measurements.
//!
//! A scoring round is a pure function of (grid, measurement vector,
//! candidate list): the ground-truth pose is sensed once into `k`
//! noisy readings, then every candidate is scored by casting the same
//! `k`-ray fan from its own pose and multiplying per-ray likelihoods
//! into an unnormalized weight. Normalized weights form a discrete
//! probability distribution over the candidates.

use rand::Rng;

use crate::core::math::wrap_two_pi;
use crate::core::types::Pose2D;
use crate::error::{DrishtiError, Result};
use crate::grid::OccupancyGrid;

use super::ray_caster::RayCaster;
use super::sensor_model::RangeSensorModel;

/// Scores candidate poses against a fixed measurement vector.
///
/// Holds the ray-fan density `num_rays` so measurement generation and
/// weighting cannot silently disagree on `k`.
#[derive(Debug, Clone)]
pub struct ImportanceWeighter {
    caster: RayCaster,
    sensor: RangeSensorModel,
    num_rays: usize,
}

impl ImportanceWeighter {
    /// Create a weighter with the given sensor range and fan density.
    pub fn new(max_range: f32, num_rays: usize) -> Result<Self> {
        if num_rays == 0 {
            return Err(DrishtiError::Config(
                "num_rays must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            caster: RayCaster::new(max_range)?,
            sensor: RangeSensorModel::new(max_range)?,
            num_rays,
        })
    }

    /// Number of rays in the fan.
    pub fn num_rays(&self) -> usize {
        self.num_rays
    }

    /// The underlying sensor model.
    pub fn sensor(&self) -> &RangeSensorModel {
        &self.sensor
    }

    /// The underlying ray caster.
    pub fn caster(&self) -> &RayCaster {
        &self.caster
    }

    /// Expected noise-free distances for evenly spaced bearings around
    /// the pose's heading.
    ///
    /// Bearing `i` is at `heading + i·2π/k`, wrapped to [0, 2π).
    pub fn cast_fan(&self, grid: &OccupancyGrid, pose: &Pose2D) -> Vec<f32> {
        let step = std::f32::consts::TAU / self.num_rays as f32;
        (0..self.num_rays)
            .map(|i| {
                let bearing = wrap_two_pi(pose.theta + i as f32 * step);
                self.caster.cast(grid, pose, bearing).distance
            })
            .collect()
    }

    /// Synthesize `k` noisy measurements from a ground-truth pose.
    ///
    /// One stochastic sensor reading per fan ray. The resulting vector
    /// is held fixed for the remainder of a scoring round.
    pub fn sense<R: Rng>(&self, grid: &OccupancyGrid, pose: &Pose2D, rng: &mut R) -> Vec<f32> {
        self.cast_fan(grid, pose)
            .into_iter()
            .map(|expected| self.sensor.sample(expected, rng))
            .collect()
    }

    /// Unnormalized importance weight of one candidate pose.
    ///
    /// Per-ray likelihoods are multiplied into a running product (the
    /// joint likelihood under conditional independence of rays given
    /// the pose). Weights are f64: products of small densities
    /// underflow f32 quickly.
    pub fn importance(&self, grid: &OccupancyGrid, pose: &Pose2D, measured: &[f32]) -> Result<f64> {
        if measured.len() != self.num_rays {
            return Err(DrishtiError::DimensionMismatch {
                expected: self.num_rays,
                actual: measured.len(),
            });
        }

        let expected = self.cast_fan(grid, pose);
        Ok(expected
            .iter()
            .zip(measured)
            .map(|(&e, &m)| self.sensor.likelihood(e, m))
            .product())
    }

    /// Score all candidates and normalize into a probability distribution.
    ///
    /// Returns one weight per candidate, non-negative and summing to 1.
    /// When every candidate scores exactly zero (mutual mismatch plus
    /// float underflow) the round falls back to the uniform
    /// distribution and logs a warning; NaNs never propagate out.
    pub fn score_all(
        &self,
        grid: &OccupancyGrid,
        poses: &[Pose2D],
        measured: &[f32],
    ) -> Result<Vec<f64>> {
        let mut weights = Vec::with_capacity(poses.len());
        for pose in poses {
            weights.push(self.importance(grid, pose, measured)?);
        }

        let sum: f64 = weights.iter().sum();
        if sum > 0.0 {
            for w in &mut weights {
                *w /= sum;
            }
        } else if !weights.is_empty() {
            log::warn!(
                "all {} candidates scored zero, falling back to uniform weights",
                weights.len()
            );
            let uniform = 1.0 / weights.len() as f64;
            weights.fill(uniform);
        }

        log::debug!(
            "scored {} candidates over {} rays, max weight {:.4}",
            weights.len(),
            self.num_rays,
            weights.iter().copied().fold(0.0, f64::max)
        );

        Ok(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::OccupancyGridConfig;
    use approx::assert_relative_eq;

    fn walled_grid() -> OccupancyGrid {
        let mut grid = OccupancyGrid::new(OccupancyGridConfig {
            resolution: 1.0,
            width: 100.0,
            height: 100.0,
        })
        .unwrap();

        // Square room: walls at x = ±20, y = ±20
        grid.occupy_line(-20.0, 20.0, 20.0, 20.0);
        grid.occupy_line(-20.0, -20.0, 20.0, -20.0);
        grid.occupy_line(20.0, -20.0, 20.0, 20.0);
        grid.occupy_line(-20.0, -20.0, -20.0, 20.0);
        grid
    }

    #[test]
    fn test_zero_rays_rejected() {
        assert!(ImportanceWeighter::new(25.0, 0).is_err());
    }

    #[test]
    fn test_invalid_range_rejected() {
        assert!(ImportanceWeighter::new(-1.0, 8).is_err());
    }

    #[test]
    fn test_cast_fan_length_and_bounds() {
        let grid = walled_grid();
        let weighter = ImportanceWeighter::new(25.0, 12).unwrap();

        let fan = weighter.cast_fan(&grid, &Pose2D::identity());
        assert_eq!(fan.len(), 12);
        for d in fan {
            assert!((0.0..=25.0).contains(&d));
        }
    }

    #[test]
    fn test_cast_fan_matches_for_identical_poses() {
        let grid = walled_grid();
        let weighter = ImportanceWeighter::new(25.0, 8).unwrap();

        let truth = Pose2D::new(2.0, 3.0, 0.785);
        let candidate = Pose2D::new(2.0, 3.0, 0.785);

        assert_eq!(
            weighter.cast_fan(&grid, &truth),
            weighter.cast_fan(&grid, &candidate)
        );
    }

    #[test]
    fn test_importance_dimension_mismatch() {
        let grid = walled_grid();
        let weighter = ImportanceWeighter::new(25.0, 8).unwrap();

        let err = weighter
            .importance(&grid, &Pose2D::identity(), &[1.0; 5])
            .unwrap_err();
        assert!(matches!(
            err,
            DrishtiError::DimensionMismatch {
                expected: 8,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_score_all_normalizes() {
        let grid = walled_grid();
        let weighter = ImportanceWeighter::new(25.0, 8).unwrap();

        let truth = Pose2D::new(2.0, 3.0, 0.785);
        let measured = weighter.cast_fan(&grid, &truth);

        let poses = vec![
            truth,
            Pose2D::new(-15.0, -15.0, 0.0),
            Pose2D::new(15.0, -12.0, 2.0),
        ];
        let weights = weighter.score_all(&grid, &poses, &measured).unwrap();

        assert_eq!(weights.len(), 3);
        let sum: f64 = weights.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
        for w in weights {
            assert!(w >= 0.0);
        }
    }

    #[test]
    fn test_score_all_empty_candidates() {
        let grid = walled_grid();
        let weighter = ImportanceWeighter::new(25.0, 8).unwrap();
        let measured = vec![5.0; 8];

        let weights = weighter.score_all(&grid, &[], &measured).unwrap();
        assert!(weights.is_empty());
    }

    #[test]
    fn test_degenerate_weights_fall_back_to_uniform() {
        let grid = walled_grid();

        // Per-ray likelihoods are bounded above by ~0.42, so a dense
        // enough fan drives every candidate's product below the f64
        // subnormal range and the raw weights all become exactly 0.
        let weighter_many = ImportanceWeighter::new(25.0, 900).unwrap();
        let truth = Pose2D::new(0.0, 0.0, 0.0);
        let measured: Vec<f32> = vec![25.0; 900];

        // Every per-ray term is well below 1, so both products
        // underflow to exactly 0.
        let poses = vec![truth, Pose2D::new(1.0, 1.0, 0.5)];
        let weights = weighter_many.score_all(&grid, &poses, &measured).unwrap();

        let sum: f64 = weights.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
        for w in &weights {
            assert!(w.is_finite());
            assert_relative_eq!(*w, 0.5, epsilon = 1e-9);
        }
    }
}
