use crate::command::Command;
use crate::config::Config;
use crate::game::{GameLoop, Input};
use crate::playfield::{Playfield, StartupError};
use crossterm::event::{poll, read, Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    backend::Backend,
    layout::{Position, Rect, Size},
    Terminal,
};
use std::io;
use std::time::Instant;

#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: GameLoop<R>,
    playfield: Playfield,

    /// The terminal area the playfield was last drawn in; used to find what
    /// a mouse click landed on
    area: Rect,

    quitting: bool,
}

impl App<rand::rngs::ThreadRng> {
    /// Set up the playfield for a terminal of size `terminal` and start the
    /// first game.
    ///
    /// # Errors
    ///
    /// Fails without starting a game if the playfield does not fit in the
    /// terminal.
    pub(crate) fn new(config: &Config, terminal: Size) -> Result<App, StartupError> {
        let playfield = Playfield::new(config.board.bounds, terminal, config.controls.dpad)?;
        let game = GameLoop::new(config.board.bounds, config.board.tick_period);
        Ok(App::from_parts(game, playfield, terminal))
    }
}

impl<R: rand::Rng> App<R> {
    fn from_parts(game: GameLoop<R>, playfield: Playfield, terminal: Size) -> App<R> {
        let mut app = App {
            game,
            playfield,
            area: Rect::from((Position::ORIGIN, terminal)),
            quitting: false,
        };
        app.restart();
        app
    }

    /// Return whether the playfield shows the clickable D-pad
    pub(crate) fn wants_mouse(&self) -> bool {
        self.playfield.has_dpad()
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let completed = terminal.draw(|frame| frame.render_widget(&self.playfield, frame.area()))?;
        self.area = completed.area;
        Ok(())
    }

    /// Wait for either the next tick or an input event, whichever comes
    /// first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        if let Some(when) = self.game.deadline() {
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.game.tick(&mut self.playfield, Instant::now());
                return Ok(());
            }
        }
        self.handle_event(read()?);
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if let Some(button) = self.playfield.button_at(self.area, column, row) {
                    let _ = self.game.steer(Input::Button(button));
                } else if self.playfield.restart_at(self.area, column, row) {
                    self.restart();
                }
            }
            event => {
                let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event)
                else {
                    return;
                };
                match cmd {
                    Command::Quit => self.quitting = true,
                    Command::R => self.restart(),
                    Command::Enter if self.game.is_over() => self.restart(),
                    Command::Enter => (),
                    Command::Up | Command::Down | Command::Left | Command::Right => {
                        if let Some(code) = cmd.key_code() {
                            let _ = self.game.steer(Input::Keyboard(code));
                        }
                    }
                }
            }
        }
    }

    fn restart(&mut self) {
        self.game.reset(&mut self.playfield, Instant::now());
    }
}
