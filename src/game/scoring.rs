use std::time::Duration;

/// Score and tick-interval bookkeeping
///
/// `speed` is the tick interval in milliseconds, so "faster" means smaller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    score: u32,
    speed: u64,
    score_increment: u32,
    speed_increment: u64,
    max_speed: u64,
}

impl ScoreBoard {
    pub fn new(initial_speed: u64, max_speed: u64, speed_increment: u64, score_increment: u32) -> Self {
        Self {
            score: 0,
            speed: initial_speed.max(max_speed),
            score_increment,
            speed_increment,
            max_speed,
        }
    }

    /// Apply one food pickup: add to the score and speed up toward the floor
    pub fn on_food_eaten(&mut self) {
        self.score = self.score.saturating_add(self.score_increment);
        self.speed = self
            .speed
            .saturating_sub(self.speed_increment)
            .max(self.max_speed);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> u64 {
        self.speed
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.speed)
    }

    pub fn at_speed_floor(&self) -> bool {
        self.speed == self.max_speed
    }
}
