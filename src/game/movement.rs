use super::food;
use super::geometry::Bounds;
use super::state::GameState;
use crate::consts;
use rand::Rng;

/// What happened when the snake moved
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Movement {
    /// The snake moved without eating
    Moved,

    /// The snake ate the food and grew; new food has been placed
    Ate,

    /// The snake ate the food and grew, and there is nowhere left to put new
    /// food
    Filled,
}

/// Move the snake one cell in its current direction.
///
/// If the new head lands on the food, the snake keeps its tail (growing by
/// one), the score goes up by
/// [`SCORE_INCREMENT`][consts::SCORE_INCREMENT], and the food is respawned
/// away from the grown snake.  Otherwise the tail is dropped.  Collisions are
/// not considered here.
pub(crate) fn advance<R: Rng>(state: &mut GameState, rng: &mut R, bounds: Bounds) -> Movement {
    let head = state.snake.head().step(state.direction());
    state.snake.slither(head);
    if state.food == Some(head) {
        state.score += consts::SCORE_INCREMENT;
        state.food = food::spawn(rng, &state.snake, bounds);
        if state.food.is_some() {
            Movement::Ate
        } else {
            Movement::Filled
        }
    } else {
        state.snake.shed_tail();
        Movement::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use crate::game::geometry::Position;
    use crate::game::input::{Button, Input, KEY_DOWN};
    use crate::game::snake::Snake;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn segments(state: &GameState) -> Vec<Position> {
        state.snake.segments().iter().copied().collect()
    }

    fn fresh() -> (GameState, ChaCha12Rng) {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let state = GameState::new(&mut rng, Bounds::default());
        (state, rng)
    }

    #[test]
    fn move_without_eating() {
        let (mut state, mut rng) = fresh();
        state.food = Some(Position::new(400, 400));
        assert_eq!(advance(&mut state, &mut rng, Bounds::default()), Movement::Moved);
        assert_eq!(
            segments(&state),
            [
                Position::new(220, 200),
                Position::new(200, 200),
                Position::new(180, 200),
            ]
        );
        assert_eq!(state.score, 0);
        assert_eq!(state.food, Some(Position::new(400, 400)));
    }

    #[test]
    fn move_and_eat() {
        let (mut state, mut rng) = fresh();
        state.food = Some(Position::new(220, 200));
        assert_eq!(advance(&mut state, &mut rng, Bounds::default()), Movement::Ate);
        assert_eq!(
            segments(&state),
            [
                Position::new(220, 200),
                Position::new(200, 200),
                Position::new(180, 200),
                Position::new(160, 200),
            ]
        );
        assert_eq!(state.score, 10);
        let food = state.food.unwrap();
        assert!(!state.snake.contains(food));
        assert!(food.is_aligned());
    }

    #[test]
    fn length_and_score_invariants() {
        let (mut state, mut rng) = fresh();
        // Circle a 2×2 square in the middle of the board
        for i in 0..40 {
            let (len, score) = (state.snake.len(), state.score);
            let target = state.snake.head().step(state.direction());
            let eats = state.food == Some(target);
            let moved = advance(&mut state, &mut rng, Bounds::default());
            assert!(state.snake.head().is_aligned());
            if eats {
                assert_eq!(moved, Movement::Ate);
                assert_eq!(state.snake.len(), len + 1);
                assert_eq!(state.score, score + 10);
            } else {
                assert_eq!(moved, Movement::Moved);
                assert_eq!(state.snake.len(), len);
                assert_eq!(state.score, score);
            }
            if let Some(food) = state.food {
                assert!(!state.snake.contains(food));
            }
            state.input.begin_tick();
            if i % 2 == 1 {
                let button = match state.direction() {
                    Direction::Right => Button::Down,
                    Direction::Down => Button::Left,
                    Direction::Left => Button::Up,
                    Direction::Up => Button::Right,
                };
                assert!(state.input.propose(Input::Button(button)));
            }
        }
    }

    #[test]
    fn follows_current_direction() {
        let (mut state, mut rng) = fresh();
        state.food = Some(Position::new(0, 0));
        assert!(state.input.propose(Input::Keyboard(KEY_DOWN)));
        let _ = advance(&mut state, &mut rng, Bounds::default());
        assert_eq!(state.snake.head(), Position::new(200, 220));
    }

    #[test]
    fn eating_last_free_cell() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let bounds = Bounds::new(80, 20);
        let mut state = GameState::new(&mut rng, bounds);
        state.snake = [(40, 0), (20, 0), (0, 0)]
            .into_iter()
            .map(Position::from)
            .collect::<Snake>();
        state.food = Some(Position::new(60, 0));
        assert_eq!(advance(&mut state, &mut rng, bounds), Movement::Filled);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, 10);
        assert_eq!(state.food, None);
    }
}
