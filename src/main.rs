use anyhow::Result;
use rand::thread_rng;
use torus_snake::game::SnakeGame;
use torus_snake::term::Console;

fn main() -> Result<()> {
    let mut game = SnakeGame::new(Console::stdio(), thread_rng());
    game.play()?;
    Ok(())
}
