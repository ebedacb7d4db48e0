use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::grid::{snap_up, Grid};
use super::state::Cell;

/// Configuration for the game
///
/// Sizes are in pixels and speeds are tick intervals in milliseconds, so a
/// smaller speed is a faster game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub cell_width: i32,
    pub cell_height: i32,
    /// Initial length of the snake
    pub start_length: usize,
    /// Head position at start; the canvas centre snapped to the grid if unset
    pub start_cell: Option<Cell>,
    /// Tick interval at the start of a game
    pub initial_speed: u64,
    /// Fastest allowed tick interval
    pub max_speed: u64,
    /// Interval reduction per food eaten
    pub speed_increment: u64,
    pub score_increment: u32,
    /// Seed for food placement; random per engine if unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 500,
            canvas_height: 500,
            cell_width: 20,
            cell_height: 20,
            start_length: 3,
            start_cell: None,
            initial_speed: 150,
            max_speed: 50,
            speed_increment: 10,
            score_increment: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom canvas size
    pub fn new(canvas_width: i32, canvas_height: i32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            ..Default::default()
        }
    }

    /// Square cells of `size` pixels
    pub fn with_cell_size(mut self, size: i32) -> Self {
        self.cell_width = size;
        self.cell_height = size;
        self
    }

    /// Load a JSON config file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(
            self.canvas_width,
            self.canvas_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Where the head starts: `start_cell`, or the canvas centre snapped up
    pub fn resolved_start_cell(&self) -> Cell {
        self.start_cell.unwrap_or_else(|| {
            Cell::new(
                snap_up(self.canvas_width / 2, self.cell_width),
                snap_up(self.canvas_height / 2, self.cell_height),
            )
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_width <= 0 || self.cell_height <= 0 {
            return Err(ConfigError::ZeroCellSize {
                width: self.cell_width,
                height: self.cell_height,
            });
        }

        let grid = self.grid();
        if self.cell_width > self.canvas_width
            || self.cell_height > self.canvas_height
            || grid.cell_count() == 0
        {
            return Err(ConfigError::CanvasTooSmall {
                canvas_width: self.canvas_width,
                canvas_height: self.canvas_height,
            });
        }

        if self.start_length == 0 {
            return Err(ConfigError::ZeroStartLength);
        }

        let start = self.resolved_start_cell();
        if !grid.is_aligned(start) {
            return Err(ConfigError::MisalignedStart {
                x: start.x,
                y: start.y,
            });
        }

        // The tail hangs below the head, so both ends must be on the playfield
        let out_of_bounds = ConfigError::StartOutOfBounds {
            x: start.x,
            y: start.y,
            length: self.start_length,
        };
        if !grid.contains(start) {
            return Err(out_of_bounds);
        }
        let tail_y = i64::try_from(self.start_length - 1)
            .ok()
            .and_then(|segments| segments.checked_mul(i64::from(self.cell_height)))
            .and_then(|offset| offset.checked_add(i64::from(start.y)));
        match tail_y {
            Some(tail_y) if tail_y <= i64::from(grid.bounds().max.y) => {}
            _ => return Err(out_of_bounds),
        }

        if self.max_speed == 0 {
            return Err(ConfigError::ZeroMaxSpeed);
        }

        if self.max_speed > self.initial_speed {
            return Err(ConfigError::SpeedFloorAboveStart {
                initial_speed: self.initial_speed,
                max_speed: self.max_speed,
            });
        }

        Ok(())
    }
}
