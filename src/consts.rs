//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Size of one grid cell in board units.  Every position on the board is a
/// multiple of this.
pub(crate) const GRID_SIZE: i32 = 20;

/// Default time between movements of the snake, in milliseconds
pub(crate) const TICK_MILLIS: u64 = 150;

/// Default time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(TICK_MILLIS);

/// Default board width in board units (20 cells)
pub(crate) const BOARD_WIDTH: i32 = 400;

/// Default board height in board units (20 cells)
pub(crate) const BOARD_HEIGHT: i32 = 400;

/// The snake's segments after a reset, head first
pub(crate) const START_SNAKE: [(i32, i32); 3] = [(200, 200), (180, 200), (160, 200)];

/// Points awarded per food eaten
pub(crate) const SCORE_INCREMENT: u32 = 10;

/// Body segments before this index are never checked for self-collision.
///
/// A head can only ever land on a segment at least four moves behind it, so
/// this is the smallest safe look-back for the fixed start length of
/// [`START_SNAKE`].
pub(crate) const SELF_COLLISION_SKIP: usize = 4;

/// How many random draws the food spawner makes before falling back to
/// enumerating the free cells
pub(crate) const MAX_SPAWN_ATTEMPTS: usize = 64;

/// Terminal columns used to draw one grid cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Glyph pair drawn for every occupied cell
pub(crate) const CELL_SYMBOL: &str = "▐▌";

/// Fill & stroke colors for the snake
pub(crate) const SNAKE_FILL: Color = Color::LightGreen;
pub(crate) const SNAKE_STROKE: Color = Color::Green;

/// Fill & stroke colors for the food
pub(crate) const FOOD_FILL: Color = Color::LightRed;
pub(crate) const FOOD_STROKE: Color = Color::Red;

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the D-pad buttons
pub(crate) const DPAD_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
