use super::grid::Bounds;
use super::state::{Cell, Collision, Snake};

/// Classify what `candidate` runs into.
///
/// Checks run border, then body, then food, and the first hit wins. The body
/// check uses the pre-move snake, so the current tail cell still counts as
/// occupied even though it would be vacated by a plain move.
pub fn detect_collision(
    candidate: Cell,
    snake: &Snake,
    food: Option<Cell>,
    bounds: &Bounds,
) -> Collision {
    if !bounds.contains(candidate) {
        return Collision::Border;
    }

    if snake.occupies(candidate) {
        return Collision::Body;
    }

    if food == Some(candidate) {
        return Collision::Food;
    }

    Collision::None
}
