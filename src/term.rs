use std::io::{self, stdin, stdout, BufRead, BufReader, Stdin, Stdout, Write};

use crossterm::tty::IsTty;
use crossterm::{cursor, queue, terminal};

use crate::snake::Direction;

/// One turn's worth of player input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    /// Unrecognized or empty line; the current direction stands.
    Ignored,
    /// Input stream closed.
    Eof,
}

/// Line-oriented console for the game: reads one line per turn and writes
/// frames, prompts and the final report. On a real terminal the screen is
/// cleared and the cursor homed before each frame; injected readers and
/// writers get plain append-only text.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    clear_frames: bool,
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        let output = stdout();
        let clear_frames = output.is_tty();
        Console { input: BufReader::new(stdin()), output, clear_frames }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output, clear_frames: false }
    }

    pub fn draw_frame(&mut self, frame: &str) -> io::Result<()> {
        if self.clear_frames {
            queue!(
                self.output,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }
        self.output.write_all(frame.as_bytes())?;
        self.output.flush()
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        writeln!(self.output, "Enter direction (W/A/S/D): ")?;
        self.output.flush()
    }

    pub fn read_command(&mut self) -> io::Result<Command> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Command::Eof);
        }
        Ok(parse_command(&line))
    }

    pub fn report_length(&mut self, length: usize) -> io::Result<()> {
        writeln!(self.output, "Game Over! Your snake length was: {}", length)?;
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Maps the first character of a line, case-insensitively, onto a
/// direction: W up, A left, S down, D right. Anything else is ignored.
pub fn parse_command(line: &str) -> Command {
    let first = line.trim_end_matches(|c| c == '\r' || c == '\n').chars().next();

    match first.map(|c| c.to_ascii_uppercase()) {
        Some('W') => Command::Turn(Direction::Up),
        Some('A') => Command::Turn(Direction::Left),
        Some('S') => Command::Turn(Direction::Down),
        Some('D') => Command::Turn(Direction::Right),
        _ => Command::Ignored,
    }
}
