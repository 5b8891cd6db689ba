use super::direction::Direction;
use crate::consts::{self, GRID_SIZE};

/// A position on the board, in board units.  Positions of snake segments and
/// food are always multiples of [`GRID_SIZE`], but a freshly-moved head may
/// lie outside the board (e.g., at `x = -20`) until the wall check catches it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// Return the position one grid cell away in `direction`
    pub(crate) fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx * GRID_SIZE,
            y: self.y + dy * GRID_SIZE,
        }
    }

    pub(crate) fn is_aligned(self) -> bool {
        self.x % GRID_SIZE == 0 && self.y % GRID_SIZE == 0
    }

    /// Return the zero-based (column, row) of the grid cell at this position
    pub(crate) fn cell(self) -> (i32, i32) {
        (self.x.div_euclid(GRID_SIZE), self.y.div_euclid(GRID_SIZE))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Position {
        Position { x, y }
    }
}

/// The size of the board in board units.  Valid positions lie in
/// `[0, width) × [0, height)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl Bounds {
    pub(crate) const fn new(width: i32, height: i32) -> Bounds {
        Bounds { width, height }
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Number of grid columns
    pub(crate) fn columns(self) -> i32 {
        self.width / GRID_SIZE
    }

    /// Number of grid rows
    pub(crate) fn rows(self) -> i32 {
        self.height / GRID_SIZE
    }

    /// Total number of grid cells on the board
    pub(crate) fn cell_count(self) -> usize {
        let columns = usize::try_from(self.columns()).unwrap_or(0);
        let rows = usize::try_from(self.rows()).unwrap_or(0);
        columns.saturating_mul(rows)
    }

    /// Iterate over every grid-aligned position on the board in row-major
    /// order
    pub(crate) fn positions(self) -> impl Iterator<Item = Position> {
        let columns = self.columns();
        (0..self.rows()).flat_map(move |row| {
            (0..columns).map(move |col| Position::new(col * GRID_SIZE, row * GRID_SIZE))
        })
    }
}

impl Default for Bounds {
    fn default() -> Bounds {
        Bounds::new(consts::BOARD_WIDTH, consts::BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Bounds::new(400, 400), 400)]
    #[case(Bounds::new(80, 20), 4)]
    #[case(Bounds::new(0, 400), 0)]
    #[case(Bounds::new(-40, 400), 0)]
    #[case(Bounds::new(2_000_000_000, 2_000_000_000), 100_000_000usize.saturating_mul(100_000_000))]
    fn test_cell_count(#[case] bounds: Bounds, #[case] count: usize) {
        assert_eq!(bounds.cell_count(), count);
    }

    #[rstest]
    #[case(Direction::Up, Position::new(200, 200), Position::new(200, 180))]
    #[case(Direction::Down, Position::new(200, 200), Position::new(200, 220))]
    #[case(Direction::Left, Position::new(200, 200), Position::new(180, 200))]
    #[case(Direction::Right, Position::new(200, 200), Position::new(220, 200))]
    #[case(Direction::Left, Position::new(0, 40), Position::new(-20, 40))]
    #[case(Direction::Up, Position::new(60, 0), Position::new(60, -20))]
    fn test_step(#[case] d: Direction, #[case] before: Position, #[case] after: Position) {
        assert_eq!(before.step(d), after);
        assert!(after.is_aligned());
    }

    #[rstest]
    #[case(Position::new(0, 0), true)]
    #[case(Position::new(380, 380), true)]
    #[case(Position::new(400, 200), false)]
    #[case(Position::new(200, 400), false)]
    #[case(Position::new(-20, 200), false)]
    #[case(Position::new(200, -20), false)]
    fn test_contains(#[case] pos: Position, #[case] inside: bool) {
        assert_eq!(Bounds::new(400, 400).contains(pos), inside);
    }

    #[test]
    fn positions_cover_board() {
        let bounds = Bounds::new(60, 40);
        let positions = bounds.positions().collect::<Vec<_>>();
        assert_eq!(positions.len(), bounds.cell_count());
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(20, 0),
                Position::new(40, 0),
                Position::new(0, 20),
                Position::new(20, 20),
                Position::new(40, 20),
            ]
        );
    }

    #[test]
    fn cell_of_negative_position() {
        assert_eq!(Position::new(-20, 40).cell(), (-1, 2));
    }
}
