use super::geometry::{Bounds, Position};
use super::snake::Snake;
use crate::consts::{self, GRID_SIZE};
use rand::{seq::IteratorRandom, Rng};

/// Pick a grid-aligned position on the board that is not occupied by
/// `snake`, uniformly at random.
///
/// Random cells are drawn and redrawn while they land on the snake.  After
/// [`MAX_SPAWN_ATTEMPTS`][consts::MAX_SPAWN_ATTEMPTS] misses, the free cells
/// are enumerated and one of them is chosen instead, so a nearly-full board
/// cannot stall the game.  Returns `None` if the snake covers every cell.
pub(crate) fn spawn<R: Rng>(rng: &mut R, snake: &Snake, bounds: Bounds) -> Option<Position> {
    let (columns, rows) = (bounds.columns(), bounds.rows());
    if columns <= 0 || rows <= 0 {
        return None;
    }
    for _ in 0..consts::MAX_SPAWN_ATTEMPTS {
        let candidate = Position::new(
            rng.random_range(0..columns) * GRID_SIZE,
            rng.random_range(0..rows) * GRID_SIZE,
        );
        if !snake.contains(candidate) {
            return Some(candidate);
        }
    }
    log::debug!(
        "No free cell after {} draws; choosing among the remaining free cells",
        consts::MAX_SPAWN_ATTEMPTS
    );
    bounds
        .positions()
        .filter(|&p| !snake.contains(p))
        .choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn never_on_snake() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let snake = Snake::new();
        let bounds = Bounds::default();
        for _ in 0..500 {
            let food = spawn(&mut rng, &snake, bounds).unwrap();
            assert!(!snake.contains(food));
            assert!(bounds.contains(food));
            assert!(food.is_aligned());
        }
    }

    #[test]
    fn single_free_cell() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let bounds = Bounds::new(60, 60);
        let free = Position::new(40, 20);
        let snake = bounds.positions().filter(|&p| p != free).collect::<Snake>();
        for _ in 0..10 {
            assert_eq!(spawn(&mut rng, &snake, bounds), Some(free));
        }
    }

    #[test]
    fn full_board() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let bounds = Bounds::new(60, 40);
        let snake = bounds.positions().collect::<Snake>();
        assert_eq!(spawn(&mut rng, &snake, bounds), None);
    }

    #[test]
    fn empty_board() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(spawn(&mut rng, &Snake::new(), Bounds::new(0, 0)), None);
    }
}
