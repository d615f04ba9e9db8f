//! Bresenham line rasterization over grid cells.

/// Iterator over grid cells along a line (Bresenham, 8-connected).
///
/// Visits every cell from start to end exactly once, in order.
pub struct BresenhamCells {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    finished: bool,
}

impl BresenhamCells {
    /// Create an iterator from (x0, y0) to (x1, y1) inclusive.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx,
            sy,
            err: dx - dy,
            finished: false,
        }
    }
}

impl Iterator for BresenhamCells {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = (self.x, self.y);

        if self.x == self.x1 && self.y == self.y1 {
            self.finished = true;
            return Some(result);
        }

        let e2 = 2 * self.err;

        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }

        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(result)
    }
}
