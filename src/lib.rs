//! Grid Snake - Snake on a pixel grid
//!
//! This library provides:
//! - Core game engine: grid, movement, collisions, food, scoring (game module)
//! - Terminal rendering of the engine state (render module)
//! - Keyboard mapping (input module)
//! - Session statistics (metrics module)
//! - The interactive host and its tick scheduler (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
