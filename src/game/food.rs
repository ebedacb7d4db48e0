use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::{snap_up, Grid};
use super::state::{Cell, Snake};

/// Rejected draws before falling back to picking among the free cells
const MAX_RANDOM_DRAWS: usize = 64;

/// Draw one coordinate on an axis and snap it up onto the grid.
///
/// The raw draw covers `(min - size, max]`, so each aligned cell in
/// `[min, max]` is hit by exactly `size` raw values.
fn draw_axis<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32, size: i32) -> i32 {
    snap_up(rng.gen_range(min - size + 1..=max), size)
}

/// Pick a random free cell for the next food.
///
/// Returns `None` only when the snake covers the whole playfield.
pub fn spawn_food<R: Rng + ?Sized>(rng: &mut R, grid: &Grid, occupied: &Snake) -> Option<Cell> {
    let bounds = grid.bounds();

    for _ in 0..MAX_RANDOM_DRAWS {
        let cell = Cell::new(
            draw_axis(rng, bounds.min.x, bounds.max.x, grid.cell_width),
            draw_axis(rng, bounds.min.y, bounds.max.y, grid.cell_height),
        );

        if !occupied.occupies(cell) {
            return Some(cell);
        }
    }

    let free: Vec<Cell> = grid.cells().filter(|cell| !occupied.occupies(*cell)).collect();
    free.choose(rng).copied()
}
