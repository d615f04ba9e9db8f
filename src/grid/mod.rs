//! Binary occupancy grid map.
//!
//! Each cell is either free or occupied. The grid is built once from
//! obstacle data upstream of the scoring path; ray casting and
//! importance weighting only read it.

mod bresenham;
mod config;

pub use bresenham::BresenhamCells;
pub use config::OccupancyGridConfig;

use crate::error::{DrishtiError, Result};

/// 2D binary occupancy grid.
///
/// Row-major storage, origin centered on the world frame so that
/// cell (0, 0) sits at (-width/2, -height/2).
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    config: OccupancyGridConfig,

    /// Occupancy flags. Row-major: index = y * width + x.
    cells: Vec<bool>,

    /// Grid width in cells.
    width: usize,

    /// Grid height in cells.
    height: usize,

    /// World X coordinate of cell (0, 0).
    origin_x: f32,

    /// World Y coordinate of cell (0, 0).
    origin_y: f32,
}

impl OccupancyGrid {
    /// Create a new grid with all cells free.
    ///
    /// Fails fast on a non-positive or non-finite resolution, width,
    /// or height: the cell dimensions derived from them would be
    /// meaningless (a zero resolution alone asks for a near-infinite
    /// allocation).
    pub fn new(config: OccupancyGridConfig) -> Result<Self> {
        for (name, value) in [
            ("resolution", config.resolution),
            ("width", config.width),
            ("height", config.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DrishtiError::Config(format!(
                    "grid {name} must be positive and finite, got {value}"
                )));
            }
        }

        let width = (config.width / config.resolution).ceil() as usize;
        let height = (config.height / config.resolution).ceil() as usize;

        // Center the grid around the world origin
        let origin_x = -config.width / 2.0;
        let origin_y = -config.height / 2.0;

        Ok(Self {
            config,
            cells: vec![false; width * height],
            width,
            height,
            origin_x,
            origin_y,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &OccupancyGridConfig {
        &self.config
    }

    /// Get grid dimensions in cells.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get the resolution in meters per cell.
    pub fn resolution(&self) -> f32 {
        self.config.resolution
    }

    /// Get grid origin in world coordinates.
    pub fn origin(&self) -> (f32, f32) {
        (self.origin_x, self.origin_y)
    }

    /// World-frame bounds of the grid as (min_x, min_y, max_x, max_y).
    pub fn world_bounds(&self) -> (f32, f32, f32, f32) {
        (
            self.origin_x,
            self.origin_y,
            self.origin_x + self.width as f32 * self.config.resolution,
            self.origin_y + self.height as f32 * self.config.resolution,
        )
    }

    /// Convert world coordinates to cell indices.
    ///
    /// Returns `None` if outside grid bounds.
    #[inline]
    pub fn world_to_cell(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let cx = ((x - self.origin_x) / self.config.resolution).floor();
        let cy = ((y - self.origin_y) / self.config.resolution).floor();

        if cx >= 0.0 && cy >= 0.0 {
            let cx = cx as usize;
            let cy = cy as usize;
            if cx < self.width && cy < self.height {
                return Some((cx, cy));
            }
        }
        None
    }

    /// Convert world coordinates to cell indices, signed.
    ///
    /// Used for ray casting where cells outside bounds must be representable.
    #[inline]
    pub fn world_to_cell_signed(&self, x: f32, y: f32) -> (i32, i32) {
        let cx = ((x - self.origin_x) / self.config.resolution).floor() as i32;
        let cy = ((y - self.origin_y) / self.config.resolution).floor() as i32;
        (cx, cy)
    }

    /// Convert cell indices to world coordinates (center of cell).
    #[inline]
    pub fn cell_to_world(&self, cx: usize, cy: usize) -> (f32, f32) {
        let x = self.origin_x + (cx as f32 + 0.5) * self.config.resolution;
        let y = self.origin_y + (cy as f32 + 0.5) * self.config.resolution;
        (x, y)
    }

    /// Check if cell indices are valid.
    #[inline]
    pub fn is_valid_cell(&self, cx: i32, cy: i32) -> bool {
        cx >= 0 && cy >= 0 && (cx as usize) < self.width && (cy as usize) < self.height
    }

    #[inline]
    fn cell_index(&self, cx: usize, cy: usize) -> usize {
        cy * self.width + cx
    }

    /// Check whether a cell is occupied.
    ///
    /// Out-of-bounds cells read as free.
    #[inline]
    pub fn is_occupied(&self, cx: usize, cy: usize) -> bool {
        if cx < self.width && cy < self.height {
            self.cells[self.cell_index(cx, cy)]
        } else {
            false
        }
    }

    /// Check whether the cell under a world point is occupied.
    #[inline]
    pub fn is_occupied_world(&self, x: f32, y: f32) -> bool {
        match self.world_to_cell(x, y) {
            Some((cx, cy)) => self.is_occupied(cx, cy),
            None => false,
        }
    }

    /// Mark a cell as occupied. Out-of-bounds indices are ignored.
    #[inline]
    pub fn set_occupied(&mut self, cx: usize, cy: usize) {
        if cx < self.width && cy < self.height {
            let idx = self.cell_index(cx, cy);
            self.cells[idx] = true;
        }
    }

    /// Mark the cell under a world point as occupied.
    ///
    /// Returns false if the point is outside the grid.
    pub fn occupy_world(&mut self, x: f32, y: f32) -> bool {
        match self.world_to_cell(x, y) {
            Some((cx, cy)) => {
                self.set_occupied(cx, cy);
                true
            }
            None => false,
        }
    }

    /// Mark every cell along a world-frame line segment as occupied.
    ///
    /// Rasterizes the segment with Bresenham so the resulting wall has
    /// no gaps at any resolution. Cells outside the grid are skipped.
    pub fn occupy_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        let (sx, sy) = self.world_to_cell_signed(x0, y0);
        let (ex, ey) = self.world_to_cell_signed(x1, y1);

        for (cx, cy) in BresenhamCells::new(sx, sy, ex, ey) {
            if self.is_valid_cell(cx, cy) {
                self.set_occupied(cx as usize, cy as usize);
            }
        }
    }

    /// Number of occupied cells.
    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
