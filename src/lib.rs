pub mod game;
pub mod snake;
pub mod term;

pub type GridInt = u16;

/// A grid position as (row, column). Rows grow downwards, columns rightwards.
pub type Cell = (GridInt, GridInt);
