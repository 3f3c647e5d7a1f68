use super::board::Board;
use ratatui::layout::Position;

/// A direction of travel across the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Returns the position one cell away from `pos` in this direction,
    /// re-entering from the opposite edge when the step would leave the
    /// board.
    pub(super) fn advance(self, pos: Position, board: Board) -> Position {
        let Position { mut x, mut y } = pos;
        match self {
            Heading::North => y = wrapping_decrement(y, board.height()),
            Heading::East => x = wrapping_increment(x, board.width()),
            Heading::South => y = wrapping_increment(y, board.height()),
            Heading::West => x = wrapping_decrement(x, board.width()),
        }
        Position { x, y }
    }

    /// Symbol marking the head cell of a snake travelling this way
    pub(super) fn glyph(self) -> char {
        match self {
            Heading::North => '^',
            Heading::East => '>',
            Heading::South => 'v',
            Heading::West => '<',
        }
    }
}

fn wrapping_increment(value: u16, extent: u16) -> u16 {
    value.checked_add(1).filter(|&v| v < extent).unwrap_or(0)
}

fn wrapping_decrement(value: u16, extent: u16) -> u16 {
    value.checked_sub(1).unwrap_or(extent.saturating_sub(1))
}
