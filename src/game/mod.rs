mod board;
mod heading;
mod score;
mod snake;
pub(crate) use self::board::Board;
use self::heading::Heading;
use self::score::Score;
use self::snake::Snake;
use crate::command::Command;
use crate::consts;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::Line,
    widgets::Widget,
    Frame,
};
use std::time::Duration;
use thiserror::Error;

/// A game session: the board, the snake, the apple, and the score,
/// owned together and advanced one tick at a time
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    board: Board,
    snake: Snake,
    apple: Position,
    score: Score,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(board: Board) -> Self {
        Game::new_with_rng(board, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(board: Board, mut rng: R) -> Game<R> {
        let snake = Snake::new(consts::START_CELL, Heading::East);
        let apple = board.place_apple(&mut rng, &snake);
        Game {
            rng,
            board,
            snake,
            apple,
            score: Score::new(),
        }
    }

    /// Advance the game by one tick: move the head one cell along the
    /// heading, checking for self-collision against the body as it
    /// stands before the move.
    pub(crate) fn advance(&mut self) -> Advance {
        let next = self.snake.next_head(self.board);
        if self.snake.contains(next) {
            return Advance::Died(Death {
                length: self.snake.len(),
                level: self.score.level(),
            });
        }
        self.snake.push_head(next);
        if next == self.apple {
            self.score.add_point();
            self.apple = self.board.place_apple(&mut self.rng, &self.snake);
            Advance::Ate
        } else {
            self.snake.drop_tail();
            Advance::Moved
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Apply a steering command.  `Quit` is the caller's concern.
    pub(crate) fn steer(&mut self, command: Command) {
        match command {
            Command::Up => self.snake.turn(Heading::North),
            Command::Down => self.snake.turn(Heading::South),
            Command::Left => self.snake.turn(Heading::West),
            Command::Right => self.snake.turn(Heading::East),
            Command::Quit => (),
        }
    }

    /// Interval to hold the current frame for at the current level
    pub(crate) fn delay(&self) -> Duration {
        self.score.delay()
    }
}

impl<R> Widget for &Game<R> {
    /*
     * level : 1 ┃ points: [Ǒ         ]
     *
     *
     *    ┏━┓┏>┓   ╭√╮
     *    ┗━┛┗━┛   ╰─╯
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::styled(self.score.banner(), consts::LEVEL_BAR_STYLE)
            .render(Rect { height: 1, ..area }, buf);
        let mut canvas = Canvas { area, buf };
        for &cell in self.snake.body() {
            canvas.draw_block(cell, consts::SNAKE_BLOCK, consts::SNAKE_STYLE);
        }
        canvas.mark_head(self.snake.head(), self.snake.heading().glyph());
        canvas.draw_block(self.apple, consts::APPLE_BLOCK, consts::APPLE_STYLE);
    }
}

/// Outcome of a single tick's movement
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Advance {
    /// The snake crawled one cell forwards.
    Moved,
    /// The snake reached the apple and grew by one cell.
    Ate,
    /// The snake ran into its own body.
    Died(Death),
}

/// The expected end of a session: the cell the snake's head was headed
/// for was already occupied by its body.  Displays as the exit summary
/// line.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("Died at level {level} with length {length}.")]
pub(crate) struct Death {
    /// Body length at the moment of death
    pub(crate) length: usize,

    /// Level reached
    pub(crate) level: u32,
}

/// Paints board cells into a buffer, scaling each cell up to its
/// [`CELL_WIDTH`](consts::CELL_WIDTH) by
/// [`CELL_HEIGHT`](consts::CELL_HEIGHT) character block
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_block(&mut self, cell: Position, block: [&str; 2], style: Style) {
        let Some(origin) = self.block_origin(cell) else {
            return;
        };
        for (dy, half) in (0u16..).zip(block) {
            for (dx, symbol) in (0u16..).zip(half.chars()) {
                let Some(pos) = offset(origin, dx, dy) else {
                    continue;
                };
                if let Some(screen_cell) = self.buf.cell_mut(pos) {
                    screen_cell.set_char(symbol);
                    screen_cell.set_style(style);
                }
            }
        }
    }

    /// Stamp `glyph` onto the top-center character of the block for
    /// the head cell
    fn mark_head(&mut self, cell: Position, glyph: char) {
        let Some(origin) = self.block_origin(cell) else {
            return;
        };
        let Some(pos) = offset(origin, consts::CELL_WIDTH / 2, 0) else {
            return;
        };
        if let Some(screen_cell) = self.buf.cell_mut(pos) {
            screen_cell.set_char(glyph);
        }
    }

    /// Top-left character of the block for the board cell at `cell`
    fn block_origin(&self, cell: Position) -> Option<Position> {
        let x = cell
            .x
            .checked_mul(consts::CELL_WIDTH)?
            .checked_add(consts::BOARD_OFFSET)?
            .checked_add(self.area.x)?;
        let y = cell
            .y
            .checked_mul(consts::CELL_HEIGHT)?
            .checked_add(consts::BOARD_OFFSET)?
            .checked_add(self.area.y)?;
        Some(Position::new(x, y))
    }
}

fn offset(origin: Position, dx: u16, dy: u16) -> Option<Position> {
    Some(Position::new(
        origin.x.checked_add(dx)?,
        origin.y.checked_add(dy)?,
    ))
}
