use crate::consts;
use crate::game::{Bounds, Button, Frontend, Position};
use crate::util::{center_rect, fits};
use enum_map::{enum_map, EnumMap};
use ratatui::{
    buffer::Buffer,
    layout::{self, Margin, Rect, Size},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};
use thiserror::Error;

/// Columns between the board and the D-pad
const DPAD_GAP: u16 = 2;

const DPAD_WIDTH: u16 = 9;

const DPAD_HEIGHT: u16 = 3;

/// Terminal-side picture of the game.  The game loop draws into it through
/// [`Frontend`], and it is rendered to the terminal as a widget.
///
/// Layout, top to bottom: a one-line score bar, the bordered board, and a
/// one-line restart prompt.  The D-pad, when shown, sits to the right of the
/// board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Playfield {
    bounds: Bounds,

    /// Size of the board including its border
    block: Size,

    cells: Vec<DrawnCell>,

    score_text: String,

    restart_visible: bool,

    dpad: bool,
}

impl Playfield {
    /// Lay out a playfield for a board of the given bounds in a terminal of
    /// size `terminal`.
    ///
    /// # Errors
    ///
    /// Fails if the terminal cannot show the score bar, the board, and the
    /// restart prompt.  If `dpad` is true but there is no room for the D-pad,
    /// the playfield is created without one.
    pub(crate) fn new(bounds: Bounds, terminal: Size, dpad: bool) -> Result<Playfield, StartupError> {
        let block = board_block_size(bounds).ok_or(StartupError::BoardTooLarge {
            width: bounds.width,
            height: bounds.height,
        })?;
        let needed = Size::new(block.width, block.height.saturating_add(2));
        if !fits(terminal, needed) {
            return Err(StartupError::TerminalTooSmall {
                needed_width: needed.width,
                needed_height: needed.height,
                width: terminal.width,
                height: terminal.height,
            });
        }
        let with_dpad = Size::new(
            needed.width.saturating_add(DPAD_GAP + DPAD_WIDTH),
            needed.height,
        );
        let dpad = if !dpad {
            log::info!("D-pad disabled; keyboard input only");
            false
        } else if fits(terminal, with_dpad) {
            true
        } else {
            log::warn!(
                "Terminal is {}×{} but the D-pad needs {}×{}; keyboard input only",
                terminal.width,
                terminal.height,
                with_dpad.width,
                with_dpad.height,
            );
            false
        };
        Ok(Playfield {
            bounds,
            block,
            cells: Vec::new(),
            score_text: String::new(),
            restart_visible: false,
            dpad,
        })
    }

    pub(crate) fn has_dpad(&self) -> bool {
        self.dpad
    }

    /// Return the D-pad button drawn at the given screen cell when the
    /// playfield is rendered in `area`
    pub(crate) fn button_at(&self, area: Rect, column: u16, row: u16) -> Option<Button> {
        let spot = layout::Position::new(column, row);
        self.areas(area)
            .dpad?
            .into_iter()
            .find_map(|(button, rect)| rect.contains(spot).then_some(button))
    }

    /// Return whether the given screen cell is on the restart prompt, and the
    /// prompt is showing
    pub(crate) fn restart_at(&self, area: Rect, column: u16, row: u16) -> bool {
        self.restart_visible
            && self
                .areas(area)
                .restart
                .contains(layout::Position::new(column, row))
    }

    fn display_size(&self) -> Size {
        let mut size = Size::new(self.block.width, self.block.height.saturating_add(2));
        if self.dpad {
            size.width = size.width.saturating_add(DPAD_GAP + DPAD_WIDTH);
        }
        size
    }

    fn areas(&self, area: Rect) -> Areas {
        let display = center_rect(area, self.display_size());
        let score = Rect {
            height: 1,
            ..display
        };
        let board = Rect::new(
            display.x,
            display.y.saturating_add(1),
            self.block.width,
            self.block.height,
        )
        .intersection(display);
        let restart = Rect::new(display.x, board.bottom(), display.width, 1).intersection(display);
        let dpad = self.dpad.then(|| {
            let x = board.right().saturating_add(DPAD_GAP);
            let y = board.y + board.height.saturating_sub(DPAD_HEIGHT) / 2;
            enum_map! {
                Button::Up => Rect::new(x.saturating_add(3), y, 3, 1),
                Button::Left => Rect::new(x, y.saturating_add(1), 3, 1),
                Button::Right => Rect::new(x.saturating_add(6), y.saturating_add(1), 3, 1),
                Button::Down => Rect::new(x.saturating_add(3), y.saturating_add(2), 3, 1),
            }
        });
        Areas {
            score,
            board,
            restart,
            dpad,
        }
    }

    /// Return the screen cell at which to start drawing the grid cell at
    /// `pos`, or `None` if `pos` is off the board
    fn cell_origin(&self, inner: Rect, pos: Position) -> Option<(u16, u16)> {
        if !self.bounds.contains(pos) {
            return None;
        }
        let (col, row) = pos.cell();
        let x = u16::try_from(col).ok()?.checked_mul(consts::CELL_WIDTH)?;
        let y = u16::try_from(row).ok()?;
        Some((inner.x.checked_add(x)?, inner.y.checked_add(y)?))
    }
}

impl Frontend for Playfield {
    fn clear_frame(&mut self) {
        self.cells.clear();
    }

    fn draw_cell(&mut self, pos: Position, fill: Color, stroke: Color) {
        self.cells.push(DrawnCell { pos, fill, stroke });
    }

    fn set_score_text(&mut self, text: &str) {
        text.clone_into(&mut self.score_text);
    }

    fn show_restart(&mut self) {
        self.restart_visible = true;
    }

    fn hide_restart(&mut self) {
        self.restart_visible = false;
    }
}

impl Widget for &Playfield {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = self.areas(area);
        Line::styled(format!(" {}", self.score_text), consts::SCORE_BAR_STYLE)
            .render(areas.score, buf);
        Block::bordered().render(areas.board, buf);

        let inner = areas.board.inner(Margin::new(1, 1));
        // Later cells overwrite earlier ones, so the snake is drawn over the
        // food it has just eaten.
        for &DrawnCell { pos, fill, stroke } in &self.cells {
            let Some((x, y)) = self.cell_origin(inner, pos) else {
                continue;
            };
            let style = Style::new().fg(stroke).bg(fill);
            for (dx, symbol) in (0..).zip(consts::CELL_SYMBOL.chars()) {
                let Some(cx) = x.checked_add(dx) else {
                    break;
                };
                if !inner.contains(layout::Position::new(cx, y)) {
                    break;
                }
                if let Some(cell) = buf.cell_mut((cx, y)) {
                    cell.set_char(symbol);
                    cell.set_style(style);
                }
            }
        }

        if self.restart_visible {
            Line::from_iter([
                Span::raw(" — GAME OVER — Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(areas.restart, buf);
        }

        if let Some(dpad) = areas.dpad {
            for (button, rect) in dpad {
                Line::styled(format!("[{}]", button.label()), consts::DPAD_STYLE).render(rect, buf);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DrawnCell {
    pos: Position,
    fill: Color,
    stroke: Color,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Areas {
    score: Rect,
    /// The board including its border
    board: Rect,
    restart: Rect,
    dpad: Option<EnumMap<Button, Rect>>,
}

/// Return the size of the board plus its border in terminal cells
pub(crate) fn board_block_size(bounds: Bounds) -> Option<Size> {
    let columns = u16::try_from(bounds.columns()).ok()?;
    let rows = u16::try_from(bounds.rows()).ok()?;
    Some(Size::new(
        columns.checked_mul(consts::CELL_WIDTH)?.checked_add(2)?,
        rows.checked_add(2)?,
    ))
}

#[derive(Debug, Error)]
pub(crate) enum StartupError {
    #[error("board of {width}×{height} is too large to display")]
    BoardTooLarge { width: i32, height: i32 },
    #[error("terminal is {width}×{height} but the game needs at least {needed_width}×{needed_height}")]
    TerminalTooSmall {
        needed_width: u16,
        needed_height: u16,
        width: u16,
        height: u16,
    },
}
