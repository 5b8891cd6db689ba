mod collision;
mod direction;
mod food;
mod geometry;
mod input;
mod movement;
mod snake;
mod state;
mod ticker;
pub(crate) use self::geometry::{Bounds, Position};
pub(crate) use self::input::{Button, Input, KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};
use self::movement::Movement;
use self::state::{Ending, GameState, Status};
use self::ticker::TickSource;
use crate::consts;
use rand::Rng;
use ratatui::style::Color;
use std::time::{Duration, Instant};

/// The outside world as seen by the game: somewhere to draw cells, show the
/// score, and offer a restart.
pub(crate) trait Frontend {
    /// Erase everything drawn by earlier `draw_cell()` calls
    fn clear_frame(&mut self);

    /// Draw one grid cell at `pos`
    fn draw_cell(&mut self, pos: Position, fill: Color, stroke: Color);

    fn set_score_text(&mut self, text: &str);

    /// Present the restart affordance
    fn show_restart(&mut self);

    fn hide_restart(&mut self);
}

/// Drives a game: owns its state and the tick source that advances it.
#[derive(Clone, Debug)]
pub(crate) struct GameLoop<R = rand::rngs::ThreadRng> {
    rng: R,
    bounds: Bounds,
    period: Duration,
    state: GameState,
    ticker: Option<TickSource>,

    /// Number of tick sources started so far; used to number them
    sources_started: u64,
}

impl GameLoop<rand::rngs::ThreadRng> {
    pub(crate) fn new(bounds: Bounds, period: Duration) -> Self {
        GameLoop::new_with_rng(bounds, period, rand::rng())
    }
}

impl<R: Rng> GameLoop<R> {
    /// Create a game loop with a fresh game state.  No ticks are scheduled
    /// until [`GameLoop::reset()`] is called.
    pub(crate) fn new_with_rng(bounds: Bounds, period: Duration, mut rng: R) -> GameLoop<R> {
        let state = GameState::new(&mut rng, bounds);
        GameLoop {
            rng,
            bounds,
            period,
            state,
            ticker: None,
            sources_started: 0,
        }
    }

    /// Start a new game.  Any tick source left over from the previous game is
    /// cancelled before the new one is started, so there is never more than
    /// one.
    pub(crate) fn reset<F: Frontend>(&mut self, frontend: &mut F, now: Instant) {
        if let Some(old) = self.ticker.take() {
            log::debug!("Cancelled tick source #{}", old.id());
        }
        self.state = GameState::new(&mut self.rng, self.bounds);
        frontend.set_score_text(&score_text(self.state.score));
        frontend.hide_restart();
        if let Status::Over(ending) = self.state.status {
            self.finish(frontend, ending);
            return;
        }
        self.sources_started += 1;
        let source = TickSource::start(self.sources_started, self.period, now);
        log::info!(
            "New game started on tick source #{} ({}×{} board, food at {:?})",
            source.id(),
            self.bounds.width,
            self.bounds.height,
            self.state.food,
        );
        self.ticker = Some(source);
    }

    /// Run one tick of the game: draw the food, move the snake, draw the
    /// snake, then check whether the game is over.  Does nothing once the
    /// game has ended.
    pub(crate) fn tick<F: Frontend>(&mut self, frontend: &mut F, now: Instant) {
        if !self.state.running() {
            return;
        }
        if let Some(source) = self.ticker.as_mut() {
            source.rearm(now);
        }
        frontend.clear_frame();
        if let Some(food) = self.state.food {
            frontend.draw_cell(food, consts::FOOD_FILL, consts::FOOD_STROKE);
        }
        self.state.input.begin_tick();
        let movement = movement::advance(&mut self.state, &mut self.rng, self.bounds);
        if movement != Movement::Moved {
            frontend.set_score_text(&score_text(self.state.score));
        }
        for &pos in self.state.snake.segments() {
            frontend.draw_cell(pos, consts::SNAKE_FILL, consts::SNAKE_STROKE);
        }
        if let Some(collision) = collision::check(&self.state.snake, self.bounds) {
            self.finish(frontend, Ending::Collision(collision));
        } else if movement == Movement::Filled {
            self.finish(frontend, Ending::BoardFull);
        }
    }
}

impl<R> GameLoop<R> {
    /// Steer the snake.  Returns `true` if the direction change was accepted.
    pub(crate) fn steer(&mut self, input: Input) -> bool {
        self.state.running() && self.state.input.propose(input)
    }

    /// Return the moment at which the next tick is due, or `None` if no tick
    /// source is running
    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.ticker.as_ref().map(TickSource::deadline)
    }

    pub(crate) fn is_over(&self) -> bool {
        !self.state.running()
    }

    fn finish<F: Frontend>(&mut self, frontend: &mut F, ending: Ending) {
        self.state.status = Status::Over(ending);
        if let Some(source) = self.ticker.take() {
            log::debug!("Stopped tick source #{}", source.id());
        }
        log::info!(
            "Game over ({ending:?}) with score {} and length {}",
            self.state.score,
            self.state.snake.len()
        );
        frontend.show_restart();
    }
}

fn score_text(score: u32) -> String {
    format!("Score: {score}")
}
