use super::geometry::Bounds;
use super::snake::Snake;
use crate::consts;

/// What the snake's head ran into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    /// The head left the board
    Wall,

    /// The head landed on the snake's own body
    Body,
}

/// Classify the snake's head against the edges of the board and the rest of
/// the snake.  Walls are checked first.
///
/// Only segments from index
/// [`SELF_COLLISION_SKIP`][consts::SELF_COLLISION_SKIP] onwards count for
/// self-collision; the head cannot reach the ones before that.
pub(crate) fn check(snake: &Snake, bounds: Bounds) -> Option<Collision> {
    let head = snake.head();
    if !bounds.contains(head) {
        Some(Collision::Wall)
    } else if snake
        .segments()
        .iter()
        .skip(consts::SELF_COLLISION_SKIP)
        .any(|&p| p == head)
    {
        Some(Collision::Body)
    } else {
        None
    }
}
