use thiserror::Error;

/// Reasons a [`GameConfig`](super::GameConfig) cannot produce a playable game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell size must be non-zero (got {width}x{height})")]
    ZeroCellSize { width: i32, height: i32 },
    #[error("canvas {canvas_width}x{canvas_height} leaves no playable cell inside the border")]
    CanvasTooSmall {
        canvas_width: i32,
        canvas_height: i32,
    },
    #[error("start length must be at least 1")]
    ZeroStartLength,
    #[error("start cell ({x}, {y}) is not aligned to the grid")]
    MisalignedStart { x: i32, y: i32 },
    #[error("a snake of length {length} starting at ({x}, {y}) does not fit inside the playfield")]
    StartOutOfBounds { x: i32, y: i32, length: usize },
    #[error("max speed must be non-zero")]
    ZeroMaxSpeed,
    #[error("max speed {max_speed}ms is slower than the initial speed {initial_speed}ms")]
    SpeedFloorAboveStart { initial_speed: u64, max_speed: u64 },
}

/// Errors surfaced by the engine's host-facing operations
///
/// Fatal collisions are not errors; they show up as
/// [`GameStatus::Dead`](super::GameStatus::Dead) in the tick result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unrecognized direction input: {0:?}")]
    InvalidDirection(String),
    #[error("engine is running; stop it before initializing again")]
    AlreadyInitialized,
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
