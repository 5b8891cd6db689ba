use super::direction::Direction;
use enum_map::Enum;

/// Virtual key code of the left arrow key
pub(crate) const KEY_LEFT: u16 = 37;
/// Virtual key code of the up arrow key
pub(crate) const KEY_UP: u16 = 38;
/// Virtual key code of the right arrow key
pub(crate) const KEY_RIGHT: u16 = 39;
/// Virtual key code of the down arrow key
pub(crate) const KEY_DOWN: u16 = 40;

/// An on-screen directional button
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Button {
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    pub(crate) fn direction(self) -> Direction {
        match self {
            Button::Up => Direction::Up,
            Button::Down => Direction::Down,
            Button::Left => Direction::Left,
            Button::Right => Direction::Right,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Button::Up => "▲",
            Button::Down => "▼",
            Button::Left => "◀",
            Button::Right => "▶",
        }
    }
}

/// A request to steer the snake
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Input {
    /// A key press, identified by its virtual key code
    Keyboard(u16),

    /// A click on one of the directional buttons
    Button(Button),
}

impl Input {
    /// Map the input to the direction it asks for, if any
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Input::Keyboard(KEY_LEFT) => Some(Direction::Left),
            Input::Keyboard(KEY_UP) => Some(Direction::Up),
            Input::Keyboard(KEY_RIGHT) => Some(Direction::Right),
            Input::Keyboard(KEY_DOWN) => Some(Direction::Down),
            Input::Keyboard(_) => None,
            Input::Button(b) => Some(b.direction()),
        }
    }
}

/// Tracks the snake's direction and makes sure it changes at most once per
/// tick and never flips straight back on itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct InputController {
    direction: Direction,

    /// Set once a direction change has been accepted during the current tick
    pub(super) locked: bool,
}

impl InputController {
    pub(crate) fn new(direction: Direction) -> InputController {
        InputController {
            direction,
            locked: false,
        }
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Try to steer in the direction requested by `input`.  Returns `true` if
    /// the change was accepted.
    ///
    /// Inputs that map to no direction, arrive after a change has already
    /// been accepted this tick, or ask for the reverse of the current
    /// direction are ignored and leave the lock untouched.
    pub(crate) fn propose(&mut self, input: Input) -> bool {
        let Some(direction) = input.direction() else {
            return false;
        };
        if self.locked || direction == self.direction.reverse() {
            return false;
        }
        self.direction = direction;
        self.locked = true;
        true
    }

    /// Release the lock at the start of a tick's movement step
    pub(crate) fn begin_tick(&mut self) {
        self.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Input::Keyboard(37), Some(Direction::Left))]
    #[case(Input::Keyboard(38), Some(Direction::Up))]
    #[case(Input::Keyboard(39), Some(Direction::Right))]
    #[case(Input::Keyboard(40), Some(Direction::Down))]
    #[case(Input::Keyboard(13), None)]
    #[case(Input::Keyboard(41), None)]
    #[case(Input::Button(Button::Up), Some(Direction::Up))]
    #[case(Input::Button(Button::Down), Some(Direction::Down))]
    #[case(Input::Button(Button::Left), Some(Direction::Left))]
    #[case(Input::Button(Button::Right), Some(Direction::Right))]
    fn test_input_direction(#[case] input: Input, #[case] d: Option<Direction>) {
        assert_eq!(input.direction(), d);
    }

    #[rstest]
    #[case(Direction::Up, Input::Keyboard(KEY_DOWN))]
    #[case(Direction::Down, Input::Keyboard(KEY_UP))]
    #[case(Direction::Left, Input::Button(Button::Right))]
    #[case(Direction::Right, Input::Button(Button::Left))]
    fn reversal_rejected(#[case] current: Direction, #[case] input: Input) {
        let mut ctrl = InputController::new(current);
        assert!(!ctrl.propose(input));
        assert_eq!(ctrl.direction(), current);
        assert!(!ctrl.locked);
    }

    #[test]
    fn up_while_moving_down() {
        let mut ctrl = InputController::new(Direction::Down);
        assert!(!ctrl.propose(Input::Button(Button::Up)));
        assert_eq!(ctrl.direction(), Direction::Down);
        assert!(!ctrl.locked);
        // The rejected proposal did not use up this tick's change
        assert!(ctrl.propose(Input::Button(Button::Left)));
        assert_eq!(ctrl.direction(), Direction::Left);
    }

    #[test]
    fn one_change_per_tick() {
        let mut ctrl = InputController::new(Direction::Right);
        assert!(ctrl.propose(Input::Keyboard(KEY_UP)));
        assert!(ctrl.locked);
        // Left would be legal after turning up, but only one change is
        // allowed per tick
        assert!(!ctrl.propose(Input::Keyboard(KEY_LEFT)));
        assert_eq!(ctrl.direction(), Direction::Up);
        ctrl.begin_tick();
        assert!(!ctrl.locked);
        assert!(ctrl.propose(Input::Keyboard(KEY_LEFT)));
        assert_eq!(ctrl.direction(), Direction::Left);
    }

    #[test]
    fn unknown_key_ignored() {
        let mut ctrl = InputController::new(Direction::Right);
        assert!(!ctrl.propose(Input::Keyboard(32)));
        assert!(!ctrl.locked);
        assert_eq!(ctrl.direction(), Direction::Right);
    }
}
