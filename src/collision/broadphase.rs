use glam::Vec2;

use crate::core::body::Body;

/// Uniform grid spatial partitioning used by the broad phase.
///
/// The grid covers a fixed rectangular region with square cells stored as a
/// flat array indexed `cx + cy * cols`. Cells hold indices into the world's
/// body slice, never references, so a rebuild stays valid across body
/// appends. The grid is rebuilt from scratch every substep because positions
/// change within every substep; there is no incremental maintenance.
pub struct SpatialGrid {
    cell_size: f32,
    cols: i32,
    rows: i32,
    cells: Vec<Vec<usize>>,
}

impl SpatialGrid {
    /// Creates a grid covering `width × height` with cells of `cell_size`.
    ///
    /// `cell_size` must be at least the largest body diameter: the 3×3
    /// neighborhood query can only guarantee completeness when no overlapping
    /// pair spans more than one cell in either axis.
    pub fn new(width: f32, height: f32, cell_size: f32) -> Self {
        debug_assert!(cell_size > 0.0);
        let cols = (width / cell_size).ceil().max(1.0) as i32;
        let rows = (height / cell_size).ceil().max(1.0) as i32;
        Self {
            cell_size,
            cols,
            rows,
            cells: vec![Vec::new(); (cols * rows) as usize],
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Cell coordinates containing `position`. May fall outside the grid.
    pub fn cell_coords(&self, position: Vec2) -> (i32, i32) {
        (
            (position.x / self.cell_size).floor() as i32,
            (position.y / self.cell_size).floor() as i32,
        )
    }

    fn cell_index(&self, cx: i32, cy: i32) -> Option<usize> {
        if cx < 0 || cx >= self.cols || cy < 0 || cy >= self.rows {
            return None;
        }
        Some((cx + cy * self.cols) as usize)
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Clears the grid and re-inserts every body at its current position.
    ///
    /// A body outside the covered region is skipped, not an error: it simply
    /// stops participating in collision detection until its position comes
    /// back in range.
    pub fn rebuild(&mut self, bodies: &[Body]) {
        self.clear();
        for (index, body) in bodies.iter().enumerate() {
            let (cx, cy) = self.cell_coords(body.position);
            if let Some(cell) = self.cell_index(cx, cy) {
                self.cells[cell].push(index);
            }
        }
    }

    /// Collects body indices from the 3×3 block of cells around `position`
    /// into `out`, visiting columns in the outer loop and rows in the inner
    /// loop so the candidate order is deterministic for a fixed grid.
    ///
    /// The query cell itself is included, so callers see the query body among
    /// the candidates and must tolerate the self-pair. Collection stops once
    /// `capacity` candidates are gathered; returns `true` if candidates were
    /// dropped that way.
    pub fn query(&self, position: Vec2, capacity: usize, out: &mut Vec<usize>) -> bool {
        out.clear();
        let (qx, qy) = self.cell_coords(position);
        for cx in (qx - 1)..=(qx + 1) {
            for cy in (qy - 1)..=(qy + 1) {
                let Some(cell) = self.cell_index(cx, cy) else {
                    continue;
                };
                for &index in &self.cells[cell] {
                    if out.len() == capacity {
                        return true;
                    }
                    out.push(index);
                }
            }
        }
        false
    }
}
