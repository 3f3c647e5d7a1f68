use super::board::Board;
use super::heading::Heading;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.
///
/// Body cells are stored in movement order, the oldest (tail) cell at
/// the front of the queue and the head as the last element.  All cells
/// are distinct while the snake is alive, and the body is never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    pub(super) body: VecDeque<Position>,
    pub(super) heading: Heading,
}

impl Snake {
    /// Create a one-cell snake at `head`, travelling towards `heading`
    pub(super) fn new(head: Position, heading: Heading) -> Snake {
        Snake {
            body: VecDeque::from([head]),
            heading,
        }
    }

    pub(super) fn head(&self) -> Position {
        *self.body.back().expect("snake body should be nonempty")
    }

    pub(super) fn heading(&self) -> Heading {
        self.heading
    }

    pub(super) fn len(&self) -> usize {
        self.body.len()
    }

    pub(super) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Point the snake towards `heading` for the next advance.
    ///
    /// Opposite-direction turns are accepted; steering straight
    /// backwards sends the head into the neighbouring body cell on the
    /// next tick.
    pub(super) fn turn(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// The cell the head will occupy after the next advance, wrapping
    /// around the board edges
    pub(super) fn next_head(&self, board: Board) -> Position {
        self.heading.advance(self.head(), board)
    }

    pub(super) fn contains(&self, cell: Position) -> bool {
        self.body.contains(&cell)
    }

    /// Append a new head cell
    pub(super) fn push_head(&mut self, cell: Position) {
        self.body.push_back(cell);
    }

    /// Evict the oldest tail cell
    pub(super) fn drop_tail(&mut self) {
        let _ = self.body.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snake_is_one_cell() {
        let snake = Snake::new(Position::new(1, 1), Heading::East);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(1, 1));
        assert_eq!(snake.heading(), Heading::East);
    }

    #[test]
    fn tail_eviction_is_oldest_first() {
        let mut snake = Snake::new(Position::new(3, 3), Heading::East);
        snake.push_head(Position::new(4, 3));
        snake.push_head(Position::new(5, 3));
        snake.push_head(Position::new(6, 3));
        snake.drop_tail();
        let body = VecDeque::from([
            Position::new(4, 3),
            Position::new(5, 3),
            Position::new(6, 3),
        ]);
        assert_eq!(snake.body(), &body);
        assert_eq!(snake.head(), Position::new(6, 3));
    }

    #[test]
    fn reversal_is_not_rejected() {
        let mut snake = Snake::new(Position::new(5, 5), Heading::East);
        snake.turn(Heading::West);
        assert_eq!(snake.heading(), Heading::West);
    }

    #[test]
    fn next_head_wraps_at_the_edge() {
        let board = Board::new(8, 6);
        let snake = Snake::new(Position::new(0, 2), Heading::West);
        assert_eq!(snake.next_head(board), Position::new(7, 2));
    }
}
