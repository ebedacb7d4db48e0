use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, Collision, GameEngine, GameStatus};
use crate::metrics::SessionStats;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw the board, or the game-over panel once `last_collision` killed the snake
    pub fn render(
        &self,
        frame: &mut Frame,
        engine: &GameEngine,
        stats: &SessionStats,
        last_collision: Collision,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(engine, stats), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if engine.status() == GameStatus::Dead {
            frame.render_widget(self.render_game_over(engine, last_collision), game_area);
        } else {
            frame.render_widget(self.render_grid(engine), game_area);
        }

        frame.render_widget(self.render_controls(engine.status()), chunks[2]);
    }

    fn render_grid(&self, engine: &GameEngine) -> Paragraph<'_> {
        let grid = engine.grid();
        let bounds = grid.bounds();
        let (columns, rows) = grid.dimensions();
        let snake = engine.snake();
        let head = snake.head();

        let mut lines = Vec::with_capacity(rows);
        for row in 0..rows {
            let spans: Vec<Span> = (0..columns)
                .map(|column| {
                    let cell = Cell::new(
                        bounds.min.x + column as i32 * grid.cell_width,
                        bounds.min.y + row as i32 * grid.cell_height,
                    );

                    if cell == head {
                        Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else if snake.occupies(cell) {
                        Span::styled("□ ", Style::default().fg(Color::Green))
                    } else if engine.food() == Some(cell) {
                        Span::styled(
                            "O ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled(". ", Style::default().fg(Color::DarkGray))
                    }
                })
                .collect();
            lines.push(Line::from(spans));
        }

        let title = match engine.status() {
            GameStatus::Idle if engine.steps() > 0 => " Snake (paused) ",
            _ => " Snake ",
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, engine: &GameEngine, stats: &SessionStats) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                engine.score().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(engine.snake().len().to_string(), value),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(format!("{}ms", engine.speed()), value),
            Span::styled(
                if engine.at_speed_floor() { " (max)" } else { "" },
                Style::default().fg(Color::Red),
            ),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(stats.format_time(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(stats.high_score.to_string(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, engine: &GameEngine, collision: Collision) -> Paragraph<'_> {
        let cause = match collision {
            Collision::Border => "Hit the wall",
            Collision::Body => "Bit its own tail",
            Collision::Food | Collision::None => "",
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    engine.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Length: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    engine.snake().len().to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, status: GameStatus) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
        ];
        if status == GameStatus::Idle {
            spans.push(Span::raw(" to start | "));
        } else {
            spans.push(Span::raw(" to move | "));
        }
        spans.extend([
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" pause | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_board_and_stats() {
        let engine = GameEngine::new(GameConfig {
            canvas_width: 200,
            canvas_height: 200,
            seed: Some(1),
            ..Default::default()
        })
        .unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        terminal
            .draw(|frame| {
                Renderer::new().render(frame, &engine, &SessionStats::new(), Collision::None)
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Speed: 150ms"));
        assert!(text.contains("■"));
        assert!(text.contains("O"));
    }

    #[test]
    fn test_marks_speed_floor() {
        let engine = GameEngine::new(GameConfig {
            initial_speed: 50,
            seed: Some(1),
            ..Default::default()
        })
        .unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        terminal
            .draw(|frame| {
                Renderer::new().render(frame, &engine, &SessionStats::new(), Collision::None)
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("Speed: 50ms (max)"));
    }

    #[test]
    fn test_renders_game_over() {
        let mut engine = GameEngine::new(GameConfig {
            start_cell: Some(Cell::new(260, 20)),
            seed: Some(1),
            ..Default::default()
        })
        .unwrap();
        engine.start();
        let result = engine.tick();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        terminal
            .draw(|frame| {
                Renderer::new().render(frame, &engine, &SessionStats::new(), result.collision)
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Hit the wall"));
    }
}
