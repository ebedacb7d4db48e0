use std::time::{Duration, Instant};

use crate::game::TickResult;

/// Per-session bookkeeping shown next to the board
///
/// Play time only advances while a game is running.
pub struct SessionStats {
    running_since: Option<Instant>,
    banked_time: Duration,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub longest_snake: usize,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            running_since: None,
            banked_time: Duration::ZERO,
            elapsed_time: Duration::ZERO,
            high_score: 0,
            longest_snake: 0,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.banked_time
            + self
                .running_since
                .map(|since| since.elapsed())
                .unwrap_or(Duration::ZERO);
    }

    /// The clock starts or resumes
    pub fn on_resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    /// The clock stops, keeping the time played so far
    pub fn on_pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.banked_time += since.elapsed();
        }
        self.update();
    }

    /// A fresh game resets the clock
    pub fn on_game_start(&mut self) {
        self.running_since = None;
        self.banked_time = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, result: &TickResult) {
        self.on_pause();
        self.games_played += 1;
        self.high_score = self.high_score.max(result.score);
        self.longest_snake = self.longest_snake.max(result.length);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
