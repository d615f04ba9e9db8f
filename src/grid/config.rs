//! Occupancy grid configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the binary occupancy grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyGridConfig {
    /// Cell size in meters.
    pub resolution: f32,

    /// Map width in meters.
    pub width: f32,

    /// Map height in meters.
    pub height: f32,
}

impl Default for OccupancyGridConfig {
    fn default() -> Self {
        Self {
            resolution: 0.05, // 5cm cells
            width: 20.0,      // 20m
            height: 20.0,     // 20m
        }
    }
}
