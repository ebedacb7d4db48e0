use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use super::ticker::Ticker;
use crate::game::{Collision, Direction, GameEngine, GameStatus};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// Keyboard-driven host: owns the engine and wires timing, input and drawing to it
pub struct HumanMode {
    engine: GameEngine,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    last_collision: Collision,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            last_collision: Collision::None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Armed on start, re-armed when the speed changes, disarmed on pause and death
        let mut ticker = Ticker::new();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut ticker);
                    }
                }

                // Game logic tick
                _ = ticker.tick() => {
                    self.update_game(&mut ticker);
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.engine, &self.stats, self.last_collision);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ticker: &mut Ticker) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Move(direction) => self.steer(direction, ticker),
                KeyAction::TogglePause => self.toggle_pause(ticker),
                KeyAction::Restart => self.restart_game(ticker),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    /// Queue a turn; from idle the first arrow key also starts the game
    fn steer(&mut self, direction: Direction, ticker: &mut Ticker) {
        self.engine.set_direction(direction);
        if self.engine.status() == GameStatus::Idle {
            self.start_game(ticker);
        }
    }

    fn start_game(&mut self, ticker: &mut Ticker) {
        if let Some(period) = self.engine.start() {
            ticker.arm(period);
            self.stats.on_resume();
        }
    }

    fn toggle_pause(&mut self, ticker: &mut Ticker) {
        match self.engine.status() {
            GameStatus::Running => {
                self.engine.stop();
                ticker.disarm();
                self.stats.on_pause();
            }
            GameStatus::Idle => self.start_game(ticker),
            GameStatus::Dead => {}
        }
    }

    fn update_game(&mut self, ticker: &mut Ticker) {
        let result = self.engine.tick();
        self.last_collision = result.collision;

        match result.status {
            GameStatus::Running => ticker.set_period(self.engine.interval()),
            GameStatus::Dead => {
                ticker.disarm();
                self.stats.on_game_over(&result);
                info!(
                    "Game over: score {}, length {} (best {})",
                    result.score, result.length, self.stats.high_score
                );
            }
            GameStatus::Idle => ticker.disarm(),
        }
    }

    fn restart_game(&mut self, ticker: &mut Ticker) {
        // A running engine refuses to restart, so pause it first
        self.engine.stop();
        ticker.disarm();

        if let Err(err) = self.engine.restart() {
            warn!("Restart failed: {err}");
            return;
        }
        self.last_collision = Collision::None;
        self.stats.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameConfig};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mode(config: GameConfig) -> HumanMode {
        HumanMode::new(GameEngine::new(config).unwrap())
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn edge_config() -> GameConfig {
        GameConfig {
            start_cell: Some(Cell::new(260, 20)),
            seed: Some(3),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_arrow_key_starts_game() {
        let mut mode = mode(GameConfig::default());
        let mut ticker = Ticker::new();

        mode.handle_event(key(KeyCode::Left), &mut ticker);

        assert_eq!(mode.engine.status(), GameStatus::Running);
        assert_eq!(ticker.period(), Some(Duration::from_millis(150)));
    }

    #[tokio::test]
    async fn test_pause_disarms_ticker() {
        let mut mode = mode(GameConfig::default());
        let mut ticker = Ticker::new();

        mode.handle_event(key(KeyCode::Char(' ')), &mut ticker);
        assert!(ticker.is_armed());

        mode.handle_event(key(KeyCode::Char(' ')), &mut ticker);
        assert!(!ticker.is_armed());
        assert_eq!(mode.engine.status(), GameStatus::Idle);
    }

    #[tokio::test]
    async fn test_death_disarms_ticker() {
        let mut mode = mode(edge_config());
        let mut ticker = Ticker::new();
        mode.handle_event(key(KeyCode::Up), &mut ticker);

        mode.update_game(&mut ticker);

        assert_eq!(mode.engine.status(), GameStatus::Dead);
        assert_eq!(mode.last_collision, Collision::Border);
        assert!(!ticker.is_armed());
        assert_eq!(mode.stats.games_played, 1);

        // Space does not revive a dead game
        mode.handle_event(key(KeyCode::Char(' ')), &mut ticker);
        assert!(!ticker.is_armed());
    }

    #[tokio::test]
    async fn test_meal_rearms_at_faster_speed() {
        // One column wide with the snake at the bottom, so all food lies straight ahead
        let mut mode = mode(GameConfig {
            canvas_width: 60,
            canvas_height: 200,
            start_cell: Some(Cell::new(20, 120)),
            seed: Some(3),
            ..Default::default()
        });
        let mut ticker = Ticker::new();
        mode.handle_event(key(KeyCode::Up), &mut ticker);

        while mode.engine.score() == 0 {
            assert_eq!(mode.engine.status(), GameStatus::Running);
            mode.update_game(&mut ticker);
        }

        assert_eq!(ticker.period(), Some(Duration::from_millis(140)));
        assert_eq!(ticker.period(), Some(mode.engine.interval()));
    }

    #[tokio::test]
    async fn test_restart_after_death() {
        let mut mode = mode(edge_config());
        let mut ticker = Ticker::new();
        mode.handle_event(key(KeyCode::Up), &mut ticker);
        mode.update_game(&mut ticker);

        mode.handle_event(key(KeyCode::Char('r')), &mut ticker);

        assert_eq!(mode.engine.status(), GameStatus::Idle);
        assert_eq!(mode.last_collision, Collision::None);
        assert_eq!(mode.engine.score(), 0);
    }

    #[tokio::test]
    async fn test_restart_while_running() {
        let mut mode = mode(GameConfig::default());
        let mut ticker = Ticker::new();
        mode.handle_event(key(KeyCode::Up), &mut ticker);
        mode.update_game(&mut ticker);

        mode.handle_event(key(KeyCode::Char('r')), &mut ticker);

        assert_eq!(mode.engine.status(), GameStatus::Idle);
        assert_eq!(mode.engine.steps(), 0);
        assert!(!ticker.is_armed());
    }

    #[test]
    fn test_quit_key() {
        let mut mode = mode(GameConfig::default());
        let mut ticker = Ticker::new();

        mode.handle_event(key(KeyCode::Char('q')), &mut ticker);

        assert!(mode.should_quit);
    }
}
