//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Hosts drive it through [`GameEngine`] and draw from the returned [`TickResult`].

pub mod collision;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod scoring;
pub mod state;

// Re-export commonly used types
pub use collision::detect_collision;
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickResult};
pub use error::{ConfigError, EngineError};
pub use food::spawn_food;
pub use grid::{Bounds, Grid};
pub use scoring::ScoreBoard;
pub use state::{next_head_cell, Cell, Collision, GameStatus, Snake};
