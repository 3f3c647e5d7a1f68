//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Position,
    style::{Color, Modifier, Style},
};

/// Terminal columns spanned by one board cell
pub(crate) const CELL_WIDTH: u16 = 3;

/// Terminal rows spanned by one board cell
pub(crate) const CELL_HEIGHT: u16 = 2;

/// Offset, along both axes, of the board's first cell block from the
/// screen origin.  Row zero is taken up by the level banner.
pub(crate) const BOARD_OFFSET: u16 = 1;

/// Points collected before the level advances and the points reset
pub(crate) const POINTS_PER_LEVEL: u16 = 10;

/// Smallest board, in cells per axis, that the game will start on.
/// Anything smaller leaves no free interior cell for the first apple.
pub(crate) const MIN_BOARD_EXTENT: u16 = 4;

/// Cell the snake's head starts on
pub(crate) const START_CELL: Position = Position::new(1, 1);

/// Top & bottom halves of the character block drawn for a snake body cell
pub(crate) const SNAKE_BLOCK: [&str; 2] = ["┏━┓", "┗━┛"];

/// Top & bottom halves of the character block drawn for the apple
pub(crate) const APPLE_BLOCK: [&str; 2] = ["╭√╮", "╰─╯"];

/// Symbol shown in the points bar for each point collected this level
pub(crate) const POINT_SYMBOL: &str = "Ǒ";

/// Style in which the snake is drawn
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style in which the apple is drawn
pub(crate) const APPLE_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the level banner at the top of the screen
pub(crate) const LEVEL_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
