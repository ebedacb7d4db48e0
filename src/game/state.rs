use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A grid-aligned position, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring cell in `direction` for a grid of `cell_width` x `cell_height`
    pub fn stepped(&self, direction: Direction, cell_width: i32, cell_height: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * cell_width, dy * cell_height)
    }
}

/// Cell one step from the snake's head in `direction`
pub fn next_head_cell(snake: &Snake, direction: Direction, cell_width: i32, cell_height: i32) -> Cell {
    snake.head().stepped(direction, cell_width, cell_height)
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at the front
    body: VecDeque<Cell>,
}

impl Snake {
    /// A vertical snake: head at `start`, each further segment one cell below.
    /// A `length` of zero still yields the head segment.
    pub fn initialize(length: usize, start: Cell, cell_height: i32) -> Self {
        let length = length.max(1);
        let body = (0..length)
            .map(|i| start.moved_by(0, i as i32 * cell_height))
            .collect();

        Self { body }
    }

    /// Build a snake from explicit segments, head first; `None` without a head
    pub fn from_segments(segments: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    pub fn to_vec(&self) -> Vec<Cell> {
        self.body.iter().copied().collect()
    }

    /// Check if position is occupied by any segment, head and tail included
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Move the head to `new_head`.
    ///
    /// Without growth the tail segment is recycled as the new head, so the
    /// length is unchanged; with growth a new segment is prepended.
    pub fn advance(&mut self, new_head: Cell, grew: bool) {
        if !grew {
            if let Some(mut segment) = self.body.pop_back() {
                segment.x = new_head.x;
                segment.y = new_head.y;
                self.body.push_front(segment);
                return;
            }
        }
        self.body.push_front(new_head);
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (never true for a constructed snake)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// What the candidate head cell runs into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collision {
    None,
    /// Outside the playfield
    Border,
    /// One of the snake's own segments
    Body,
    Food,
}

impl Collision {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Collision::Border | Collision::Body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Fresh or paused; not ticking
    Idle,
    Running,
    /// Terminal until an external restart
    Dead,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(100, 100);
        assert_eq!(cell.stepped(Direction::Up, 20, 20), Cell::new(100, 80));
        assert_eq!(cell.stepped(Direction::Down, 20, 20), Cell::new(100, 120));
        assert_eq!(cell.stepped(Direction::Left, 20, 20), Cell::new(80, 100));
        assert_eq!(cell.stepped(Direction::Right, 20, 20), Cell::new(120, 100));
    }

    #[test]
    fn test_next_head_changes_one_axis_by_one_cell() {
        let snake = Snake::initialize(3, Cell::new(260, 280), 20);
        let (cell_width, cell_height) = (20, 30);

        for direction in Direction::ALL {
            let head = snake.head();
            let next = next_head_cell(&snake, direction, cell_width, cell_height);
            let dx = (next.x - head.x).abs();
            let dy = (next.y - head.y).abs();

            assert!(
                (dx == cell_width && dy == 0) || (dx == 0 && dy == cell_height),
                "{direction} moved by ({dx}, {dy})"
            );
        }
    }

    #[test]
    fn test_snake_initialize_forms_vertical_tail() {
        let snake = Snake::initialize(3, Cell::new(260, 280), 20);
        assert_eq!(
            snake.to_vec(),
            vec![Cell::new(260, 280), Cell::new(260, 300), Cell::new(260, 320)]
        );
        assert_eq!(snake.head(), Cell::new(260, 280));
        assert_eq!(snake.tail(), Cell::new(260, 320));
    }

    #[test]
    fn test_snake_initialize_zero_length_keeps_head() {
        let snake = Snake::initialize(0, Cell::new(40, 40), 20);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_advance_without_growth_translates() {
        let mut snake = Snake::initialize(3, Cell::new(260, 280), 20);
        snake.advance(Cell::new(260, 260), false);

        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.to_vec(),
            vec![Cell::new(260, 260), Cell::new(260, 280), Cell::new(260, 300)]
        );
    }

    #[test]
    fn test_advance_with_growth_prepends() {
        let mut snake = Snake::initialize(3, Cell::new(260, 280), 20);
        snake.advance(Cell::new(280, 280), true);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(280, 280));
        assert_eq!(snake.tail(), Cell::new(260, 320));
    }

    #[test]
    fn test_occupies_includes_tail() {
        let snake = Snake::initialize(3, Cell::new(40, 40), 20);
        assert!(snake.occupies(Cell::new(40, 40)));
        assert!(snake.occupies(Cell::new(40, 80)));
        assert!(!snake.occupies(Cell::new(60, 40)));
    }

    #[test]
    fn test_fatal_collisions() {
        assert!(Collision::Border.is_fatal());
        assert!(Collision::Body.is_fatal());
        assert!(!Collision::Food.is_fatal());
        assert!(!Collision::None.is_fatal());
    }
}
