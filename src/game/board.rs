use super::snake::Snake;
use crate::consts;
use rand::Rng;
use ratatui::layout::{Position, Size};
use thiserror::Error;

/// The playing field, measured in cells.
///
/// A cell is rendered as a multi-character block, so the board is
/// derived from the terminal size by [`Board::from_terminal`] rather
/// than chosen freely.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    width: u16,
    height: u16,
}

impl Board {
    pub(super) fn new(width: u16, height: u16) -> Board {
        Board { width, height }
    }

    /// Scale a terminal size down to board cells.  Each cell takes a
    /// [`CELL_WIDTH`](consts::CELL_WIDTH) by
    /// [`CELL_HEIGHT`](consts::CELL_HEIGHT) character block, less a
    /// one-cell margin along each axis.  Fails if the window cannot
    /// hold a [`MIN_BOARD_EXTENT`](consts::MIN_BOARD_EXTENT)-sized
    /// board.
    pub(crate) fn from_terminal(size: Size) -> Result<Board, TerminalSizeError> {
        let width = (size.width / consts::CELL_WIDTH).saturating_sub(1);
        let height = (size.height / consts::CELL_HEIGHT).saturating_sub(1);
        if width < consts::MIN_BOARD_EXTENT || height < consts::MIN_BOARD_EXTENT {
            Err(TerminalSizeError { width, height })
        } else {
            Ok(Board::new(width, height))
        }
    }

    pub(super) fn width(self) -> u16 {
        self.width
    }

    pub(super) fn height(self) -> u16 {
        self.height
    }

    /// Pick a uniformly random cell in the board interior (one cell in
    /// from every edge), re-rolling until it misses the snake.  The
    /// interior must not be fully occupied.
    pub(super) fn place_apple<R: Rng>(self, rng: &mut R, snake: &Snake) -> Position {
        loop {
            let apple = Position {
                x: rng.random_range(1..self.width - 1),
                y: rng.random_range(1..self.height - 1),
            };
            if !snake.contains(apple) {
                return apple;
            }
        }
    }
}

/// Error returned when the terminal window is too small to hold a
/// playable board
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error(
    "terminal too small: the board would be {width}x{height} cells, but at least {min}x{min} is needed",
    min = consts::MIN_BOARD_EXTENT
)]
pub(crate) struct TerminalSizeError {
    width: u16,
    height: u16,
}
