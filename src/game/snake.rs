use super::geometry::Position;
use crate::consts;
use std::collections::VecDeque;

/// Snake state
///
/// The segments are stored head first: index 0 is the head and the last
/// element is the tail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    pub(super) segments: VecDeque<Position>,
}

impl Snake {
    /// Create a snake laid out as [`START_SNAKE`][consts::START_SNAKE]
    pub(crate) fn new() -> Snake {
        Snake {
            segments: consts::START_SNAKE.into_iter().map(Position::from).collect(),
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        // A snake is never empty: it starts with three segments and
        // `slither()` always pushes before `shed_tail()` pops.
        self.segments
            .front()
            .copied()
            .unwrap_or_else(|| Position::from(consts::START_SNAKE[0]))
    }

    /// Return the positions of all segments, head first
    pub(crate) fn segments(&self) -> &VecDeque<Position> {
        &self.segments
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Push a new head onto the front of the snake
    pub(super) fn slither(&mut self, head: Position) {
        debug_assert!(head.is_aligned(), "head {head:?} is off the grid");
        self.segments.push_front(head);
    }

    /// Remove the last segment
    pub(super) fn shed_tail(&mut self) {
        let _ = self.segments.pop_back();
    }
}

impl Default for Snake {
    fn default() -> Snake {
        Snake::new()
    }
}

impl FromIterator<Position> for Snake {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Snake {
        Snake {
            segments: iter.into_iter().collect(),
        }
    }
}
