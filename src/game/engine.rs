use std::time::Duration;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use super::{
    collision::detect_collision,
    config::GameConfig,
    direction::Direction,
    error::EngineError,
    food::spawn_food,
    grid::{Bounds, Grid},
    scoring::ScoreBoard,
    state::{next_head_cell, Cell, Collision, GameStatus, Snake},
};

/// Everything a host needs to draw the game after a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickResult {
    /// Segments, head first
    pub snake_body: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub length: usize,
    /// Tick interval in milliseconds the next tick should use
    pub speed: u64,
    pub status: GameStatus,
    /// What the head ran into this tick
    pub collision: Collision,
}

/// The game engine that owns one game and handles all of its rules
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    /// Direction used by the last tick
    direction: Direction,
    /// Latest requested direction, committed at the start of the next tick
    pending_direction: Option<Direction>,
    board: ScoreBoard,
    status: GameStatus,
    steps: u32,
    rng: StdRng,
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl GameEngine {
    /// Create an engine with a fresh, idle game
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let grid = config.grid();
        let rng = seeded_rng(config.seed);
        let snake = Snake::initialize(
            config.start_length,
            config.resolved_start_cell(),
            config.cell_height,
        );
        let board = ScoreBoard::new(
            config.initial_speed,
            config.max_speed,
            config.speed_increment,
            config.score_increment,
        );

        let mut engine = Self {
            config,
            grid,
            snake,
            food: None,
            direction: Direction::Up,
            pending_direction: None,
            board,
            status: GameStatus::Idle,
            steps: 0,
            rng,
        };
        engine.food = spawn_food(&mut engine.rng, &engine.grid, &engine.snake);

        Ok(engine)
    }

    /// Replace the configuration and start over with a fresh idle game.
    ///
    /// A seeded config reseeds the food generator, so the same config replays
    /// the same food sequence. Without a seed the current generator carries on.
    /// Fails with [`EngineError::AlreadyInitialized`] while a game is running.
    pub fn initialize(&mut self, config: GameConfig) -> Result<(), EngineError> {
        if self.status == GameStatus::Running {
            return Err(EngineError::AlreadyInitialized);
        }
        config.validate()?;

        if config.seed.is_some() {
            self.rng = seeded_rng(config.seed);
        }
        self.grid = config.grid();
        self.config = config;
        self.reset_state();

        Ok(())
    }

    /// Start over with the current configuration
    pub fn restart(&mut self) -> Result<(), EngineError> {
        if self.status == GameStatus::Running {
            return Err(EngineError::AlreadyInitialized);
        }
        self.reset_state();
        Ok(())
    }

    fn reset_state(&mut self) {
        self.snake = Snake::initialize(
            self.config.start_length,
            self.config.resolved_start_cell(),
            self.config.cell_height,
        );
        self.direction = Direction::Up;
        self.pending_direction = None;
        self.board = ScoreBoard::new(
            self.config.initial_speed,
            self.config.max_speed,
            self.config.speed_increment,
            self.config.score_increment,
        );
        self.status = GameStatus::Idle;
        self.steps = 0;
        self.food = spawn_food(&mut self.rng, &self.grid, &self.snake);

        info!(
            "New game: length {} at {:?}, food at {:?}",
            self.snake.len(),
            self.snake.head(),
            self.food
        );
    }

    /// Queue a direction for the next tick.
    ///
    /// Returns false, leaving the queue untouched, when `direction` reverses
    /// the committed direction.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            debug!("Ignoring reversal from {} to {}", self.direction, direction);
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Queue a direction given as text, e.g. `"up"` or `"ArrowLeft"`
    pub fn request_direction(&mut self, input: &str) -> Result<bool, EngineError> {
        match input.parse::<Direction>() {
            Ok(direction) => Ok(self.set_direction(direction)),
            Err(err) => {
                warn!("{err}");
                Err(err)
            }
        }
    }

    /// Move from idle to running.
    ///
    /// Returns the interval the host should tick at, or `None` for a dead game.
    pub fn start(&mut self) -> Option<Duration> {
        match self.status {
            GameStatus::Idle => {
                info!("Game running at {}ms per tick", self.board.speed());
                self.status = GameStatus::Running;
                Some(self.board.interval())
            }
            GameStatus::Running => Some(self.board.interval()),
            GameStatus::Dead => None,
        }
    }

    /// Pause a running game; returns false if it was not running
    pub fn stop(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        info!("Game paused after {} steps", self.steps);
        self.status = GameStatus::Idle;
        true
    }

    /// Advance the game by one cell.
    ///
    /// Only a running game changes; otherwise the current snapshot comes back.
    pub fn tick(&mut self) -> TickResult {
        if self.status != GameStatus::Running {
            return self.snapshot();
        }

        if let Some(direction) = self.pending_direction.take() {
            if !direction.is_opposite(self.direction) {
                self.direction = direction;
            }
        }

        let candidate = next_head_cell(
            &self.snake,
            self.direction,
            self.grid.cell_width,
            self.grid.cell_height,
        );
        let collision = detect_collision(candidate, &self.snake, self.food, &self.grid.bounds());

        match collision {
            Collision::Border | Collision::Body => {
                self.status = GameStatus::Dead;
                info!(
                    "Snake died ({:?}) moving {} into {:?}; score {}, length {}",
                    collision,
                    self.direction,
                    candidate,
                    self.board.score(),
                    self.snake.len()
                );
                return self.result(collision);
            }
            Collision::Food => {
                self.snake.advance(candidate, true);
                self.board.on_food_eaten();
                self.food = spawn_food(&mut self.rng, &self.grid, &self.snake);
                debug!(
                    "Ate food at {:?}: score {}, speed {}ms, next food {:?}",
                    candidate,
                    self.board.score(),
                    self.board.speed(),
                    self.food
                );
            }
            Collision::None => self.snake.advance(candidate, false),
        }

        self.steps += 1;
        self.result(collision)
    }

    /// Current state without advancing
    pub fn snapshot(&self) -> TickResult {
        self.result(Collision::None)
    }

    fn result(&self, collision: Collision) -> TickResult {
        TickResult {
            snake_body: self.snake.to_vec(),
            food: self.food,
            score: self.board.score(),
            length: self.snake.len(),
            speed: self.board.speed(),
            status: self.status,
            collision,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    /// Tick interval in milliseconds
    pub fn speed(&self) -> u64 {
        self.board.speed()
    }

    pub fn interval(&self) -> Duration {
        self.board.interval()
    }

    /// True once eating no longer speeds the game up
    pub fn at_speed_floor(&self) -> bool {
        self.board.at_speed_floor()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn bounds(&self) -> Bounds {
        self.grid.bounds()
    }

    /// Committed direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
