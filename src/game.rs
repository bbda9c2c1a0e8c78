use std::io::{self, BufRead, Write};

use crate::snake::{MoveResult::*, Snake, Direction, Direction::Up};
use crate::term::{Command, Console};
use crate::{Cell, GridInt};

use rand::Rng;

pub const WIDTH: GridInt = 20;
pub const HEIGHT: GridInt = 10;

const SNAKE_CHAR: char = 'O';
const FOOD_CHAR: char = 'X';
const EMPTY_CHAR: char = '.';

/// Everything a turn mutates: the snake, the food cell and the terminal
/// flag. Owned by a single [`SnakeGame`], never shared.
pub struct GameState {
    snake: Snake,
    food: Cell,
    game_over: bool,
}

impl GameState {
    pub fn new(rng: &mut impl Rng) -> Self {
        let snake = Snake::new((HEIGHT / 2, WIDTH / 2), Up);
        let food = place_food(&snake, rng);
        GameState { snake, food, game_over: false }
    }

    pub fn steer(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    /// Runs one turn of game logic: advance the snake, detect
    /// self-collision, and on a food hit queue a growth and respawn the
    /// food off the body.
    pub fn step(&mut self, rng: &mut impl Rng) {
        match self.snake.advance(HEIGHT, WIDTH) {
            Crashed => self.game_over = true,
            Moved { new_head } => {
                if new_head == self.food {
                    self.snake.grow();
                    self.food = place_food(&self.snake, rng);
                }
            }
        }
    }

    /// Full-grid snapshot, row-major, one row per line. Snake cells win
    /// over the food cell, which only matters on the losing frame where
    /// the head overlaps the body. Pure: repeated calls yield identical
    /// strings.
    pub fn render(&self) -> String {
        let mut grid = String::with_capacity((WIDTH as usize + 1) * HEIGHT as usize);

        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let ch = if self.snake.occupies((row, col)) {
                    SNAKE_CHAR
                } else if self.food == (row, col) {
                    FOOD_CHAR
                } else {
                    EMPTY_CHAR
                };
                grid.push(ch);
            }
            grid.push('\n');
        }

        grid
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn food(&self) -> Cell {
        self.food
    }
}

/// Rejection-samples a uniformly random free cell. Loops forever on a
/// fully occupied board; with a 200-cell grid that means a finished game,
/// and the caller has already lost or won by then.
fn place_food(snake: &Snake, rng: &mut impl Rng) -> Cell {
    loop {
        let cell = (rng.gen_range(0..HEIGHT), rng.gen_range(0..WIDTH));
        if !snake.occupies(cell) {
            return cell;
        }
    }
}

/// Owns the game state and drives the turn cycle over a [`Console`]:
/// render, prompt, read one line, steer, step. Ends on self-collision
/// (final frame plus a length report) or when the input stream closes.
pub struct SnakeGame<R: BufRead, W: Write, G: Rng> {
    console: Console<R, W>,
    state: GameState,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> SnakeGame<R, W, G> {
    pub fn new(console: Console<R, W>, mut rng: G) -> Self {
        let state = GameState::new(&mut rng);
        SnakeGame { console, state, rng }
    }

    pub fn play(&mut self) -> io::Result<()> {
        while !self.state.is_over() {
            self.console.draw_frame(&self.state.render())?;
            self.console.prompt()?;

            match self.console.read_command()? {
                Command::Eof => return Ok(()),
                Command::Turn(direction) => self.state.steer(direction),
                Command::Ignored => {}
            }

            self.state.step(&mut self.rng);
        }

        self.console.draw_frame(&self.state.render())?;
        self.console.report_length(self.state.snake_len())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
