use super::collision::Collision;
use super::direction::Direction;
use super::food;
use super::geometry::{Bounds, Position};
use super::input::InputController;
use super::snake::Snake;
use rand::Rng;

/// Everything that changes while a game is played
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    pub(crate) snake: Snake,

    /// The food's position.  `None` only once the snake fills the board.
    pub(crate) food: Option<Position>,

    pub(crate) score: u32,

    pub(crate) input: InputController,

    pub(crate) status: Status,
}

impl GameState {
    /// Create the state of a freshly-started game: a three-segment snake
    /// heading right, no score, and food somewhere off the snake.
    pub(crate) fn new<R: Rng>(rng: &mut R, bounds: Bounds) -> GameState {
        let snake = Snake::new();
        let food = food::spawn(rng, &snake, bounds);
        let status = if food.is_some() {
            Status::Running
        } else {
            Status::Over(Ending::BoardFull)
        };
        GameState {
            snake,
            food,
            score: 0,
            input: InputController::new(Direction::Right),
            status,
        }
    }

    pub(crate) fn direction(&self) -> Direction {
        self.input.direction()
    }

    pub(crate) fn running(&self) -> bool {
        self.status == Status::Running
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    Running,
    Over(Ending),
}

/// Why a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    Collision(Collision),

    /// The snake has filled the board and there are no more spaces to place
    /// food in.
    BoardFull,
}
