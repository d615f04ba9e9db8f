//! drishti-mcl - Range-sensor simulation and pose scoring over 2D occupancy grids
//!
//! # Architecture
//!
//! The crate is organized into 3 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 localization/                        │  ← Scoring
//! │   (ray caster, sensor model, importance weighting)  │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     grid/                            │  ← Map
//! │              (binary occupancy grid)                 │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                            │  ← Foundation
//! │                 (types, math)                        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Scoring round
//!
//! A ground-truth pose is sensed once into `k` noisy range readings
//! ([`ImportanceWeighter::sense`]). Candidate poses are then scored
//! against that fixed measurement vector: each candidate casts the
//! same `k`-ray fan from its own pose ([`ImportanceWeighter::cast_fan`]),
//! per-ray likelihoods ([`RangeSensorModel::likelihood`]) are multiplied
//! into one weight per candidate, and the weights are normalized into a
//! probability distribution ([`ImportanceWeighter::score_all`]).
//!
//! Everything is single-threaded and in-memory; the grid is read-only
//! during scoring and random draws go through a caller-supplied
//! generator so rounds can be seeded deterministically.
//!
//! ```
//! use drishti_mcl::{ImportanceWeighter, OccupancyGrid, OccupancyGridConfig, Pose2D};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut grid = OccupancyGrid::new(OccupancyGridConfig {
//!     resolution: 1.0,
//!     width: 100.0,
//!     height: 100.0,
//! })
//! .unwrap();
//! grid.occupy_line(-20.0, 20.0, 20.0, 20.0);
//!
//! let weighter = ImportanceWeighter::new(25.0, 8).unwrap();
//! let truth = Pose2D::new(2.0, 3.0, 0.785);
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let measured = weighter.sense(&grid, &truth, &mut rng);
//!
//! let candidates = vec![truth, Pose2D::new(-10.0, 5.0, 1.2)];
//! let weights = weighter.score_all(&grid, &candidates, &measured).unwrap();
//! assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
//! ```

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Occupancy grid (depends on core)
// ============================================================================
pub mod grid;

// ============================================================================
// Layer 3: Localization algorithms (depends on core, grid)
// ============================================================================
pub mod localization;

pub mod error;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use crate::core::math;
pub use crate::core::types::{Point2D, Pose2D};

pub use crate::error::{DrishtiError, Result};

pub use crate::grid::{BresenhamCells, OccupancyGrid, OccupancyGridConfig};

pub use crate::localization::{
    sample_poses, ImportanceWeighter, RangeSensorModel, RayCaster, RayHit, P_FAILURE, P_HIT,
    P_RANDOM, SIGMA_HIT,
};
