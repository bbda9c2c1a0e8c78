use std::collections::VecDeque;

use crate::{Cell, GridInt};
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Cell },
    Crashed,
}

/// The snake body, head-first. Always holds at least one cell, and all
/// cells are distinct while the snake is alive.
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    grow_next_move: bool,
}

#[allow(clippy::len_without_is_empty)] // length >= 1, emptiness is unrepresentable
impl Snake {
    pub fn new(head: Cell, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(head);
        Snake { body, direction, grow_next_move: false }
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn head(&self) -> Cell {
        *self.body.front().unwrap()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Linear scan; the body is bounded by the grid size.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Moves one step in the current direction, wrapping each coordinate
    /// modulo the grid dimensions (leaving one edge re-enters the opposite
    /// one). The tail is popped unless a growth is pending. Returns
    /// `Crashed` when the new head lands on any remaining body cell; the
    /// cell the tail just vacated does not count.
    pub fn advance(&mut self, rows: GridInt, cols: GridInt) -> MoveResult {
        let (row, col) = self.head();

        let new_head = match self.direction {
            Up => ((row + rows - 1) % rows, col),
            Down => ((row + 1) % rows, col),
            Left => (row, (col + cols - 1) % cols),
            Right => (row, (col + 1) % cols),
        };

        if self.grow_next_move {
            self.grow_next_move = false;
        } else {
            self.body.pop_back();
        }
        self.body.push_front(new_head);

        if self.body.iter().skip(1).any(|&cell| cell == new_head) {
            Crashed
        } else {
            Moved { new_head }
        }
    }

    // Reversals are deliberately not filtered: steering 180 degrees into a
    // body of length >= 3 is a legitimate way to lose.
    pub fn set_direction(&mut self, new_direction: Direction) {
        self.direction = new_direction;
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    /// Keeps the tail on the next advance, lengthening the body by one.
    pub fn grow(&mut self) {
        self.grow_next_move = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: GridInt = 10;
    const COLS: GridInt = 20;

    fn straight_snake(len: usize) -> Snake {
        // Head ends up at (5, len), body trailing left back to (5, 1).
        let mut snake = Snake::new((5, 1), Right);
        for _ in 1..len {
            snake.grow();
            snake.advance(ROWS, COLS);
        }
        snake
    }

    #[test]
    fn new_snake_is_a_single_cell() {
        let snake = Snake::new((5, 10), Up);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), (5, 10));
        assert_eq!(snake.get_direction(), Up);
    }

    #[test]
    fn advance_keeps_length_without_growth() {
        let mut snake = straight_snake(4);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.advance(ROWS, COLS), Moved { new_head: (5, 5) });
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn grow_preserves_tail_on_next_advance() {
        let mut snake = straight_snake(2);
        let tail = *snake.body().back().unwrap();
        snake.grow();
        snake.advance(ROWS, COLS);
        assert_eq!(snake.len(), 3);
        assert_eq!(*snake.body().back().unwrap(), tail);
    }

    #[test]
    fn wraps_on_every_edge() {
        let mut snake = Snake::new((0, 7), Up);
        assert_eq!(snake.advance(ROWS, COLS), Moved { new_head: (ROWS - 1, 7) });

        let mut snake = Snake::new((ROWS - 1, 7), Down);
        assert_eq!(snake.advance(ROWS, COLS), Moved { new_head: (0, 7) });

        let mut snake = Snake::new((3, 0), Left);
        assert_eq!(snake.advance(ROWS, COLS), Moved { new_head: (3, COLS - 1) });

        let mut snake = Snake::new((3, COLS - 1), Right);
        assert_eq!(snake.advance(ROWS, COLS), Moved { new_head: (3, 0) });
    }

    #[test]
    fn head_first_ordering() {
        let mut snake = straight_snake(3);
        snake.advance(ROWS, COLS);
        let cells: Vec<Cell> = snake.body().iter().copied().collect();
        assert_eq!(cells, vec![(5, 4), (5, 3), (5, 2)]);
        assert_eq!(snake.head(), (5, 4));
    }

    #[test]
    fn curling_back_into_the_body_crashes() {
        // Length 5 heading right; hook up, left, then down into the body.
        let mut snake = straight_snake(5);
        snake.set_direction(Up);
        assert!(matches!(snake.advance(ROWS, COLS), Moved { .. }));
        snake.set_direction(Left);
        assert!(matches!(snake.advance(ROWS, COLS), Moved { .. }));
        snake.set_direction(Down);
        assert_eq!(snake.advance(ROWS, COLS), Crashed);
    }

    #[test]
    fn moving_into_the_vacated_tail_cell_is_legal() {
        // Reversing at length 2: the head steps onto the cell the tail is
        // leaving this same turn.
        let mut snake = straight_snake(2);
        let old_tail = *snake.body().back().unwrap();
        snake.set_direction(Left);
        assert_eq!(snake.advance(ROWS, COLS), Moved { new_head: old_tail });
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn reversal_at_length_three_is_fatal() {
        let mut snake = straight_snake(3);
        snake.set_direction(Left);
        assert_eq!(snake.advance(ROWS, COLS), Crashed);
    }

    #[test]
    fn set_direction_always_applies() {
        let mut snake = Snake::new((5, 10), Up);
        snake.set_direction(Down);
        assert_eq!(snake.get_direction(), Down);
    }
}
