//! Grid model: cell size and the playable area of the canvas.
//!
//! Coordinates are pixels. Every playable cell sits on a multiple of the cell
//! size, and the outermost ring of cells is left as a border.

use super::state::Cell;

/// Round `value` up to the next multiple of `size`, saturating at `i32::MAX`
pub fn snap_up(value: i32, size: i32) -> i32 {
    let (value, size) = (i64::from(value), i64::from(size));
    let snapped = (value + size - 1).div_euclid(size) * size;
    i32::try_from(snapped).unwrap_or(i32::MAX)
}

/// Largest aligned coordinate whose cell ends one full cell before `canvas`.
/// Zero when no cell fits, which leaves the playfield empty.
fn last_cell(canvas: i32, size: i32) -> i32 {
    let (canvas, size) = (i64::from(canvas), i64::from(size));
    let last = (canvas - 2 * size).div_euclid(size) * size;
    i32::try_from(last.max(0)).unwrap_or(0)
}

/// Inclusive min/max cell coordinates of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Cell,
    pub max: Cell,
}

impl Bounds {
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min.x && cell.x <= self.max.x && cell.y >= self.min.y && cell.y <= self.max.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub cell_width: i32,
    pub cell_height: i32,
    bounds: Bounds,
}

impl Grid {
    /// Build the grid. Cell sizes must be positive; see `GameConfig::validate`.
    pub fn new(canvas_width: i32, canvas_height: i32, cell_width: i32, cell_height: i32) -> Self {
        let max_x = last_cell(canvas_width, cell_width);
        let max_y = last_cell(canvas_height, cell_height);

        Self {
            canvas_width,
            canvas_height,
            cell_width,
            cell_height,
            bounds: Bounds {
                min: Cell::new(cell_width, cell_height),
                max: Cell::new(max_x, max_y),
            },
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.bounds.contains(cell)
    }

    pub fn is_aligned(&self, cell: Cell) -> bool {
        cell.x.rem_euclid(self.cell_width) == 0 && cell.y.rem_euclid(self.cell_height) == 0
    }

    /// Number of playable columns and rows
    pub fn dimensions(&self) -> (usize, usize) {
        let columns = (self.bounds.max.x - self.bounds.min.x) / self.cell_width + 1;
        let rows = (self.bounds.max.y - self.bounds.min.y) / self.cell_height + 1;
        (columns.max(0) as usize, rows.max(0) as usize)
    }

    pub fn cell_count(&self) -> usize {
        let (columns, rows) = self.dimensions();
        columns * rows
    }

    /// Every playable cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (columns, rows) = self.dimensions();
        (0..rows).flat_map(move |row| {
            (0..columns).map(move |column| {
                Cell::new(
                    self.bounds.min.x + column as i32 * self.cell_width,
                    self.bounds.min.y + row as i32 * self.cell_height,
                )
            })
        })
    }
}
