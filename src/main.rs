mod app;
mod command;
mod consts;
mod game;
use crate::app::{App, Outcome};
use crate::game::Board;
use anyhow::Context;
use lexopt::{Arg, Parser};
use ratatui::layout::Size;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

static USAGE: &str = "\
Usage: hoopsnake [-h|--help] [-V|--version]

Terminal Snake on a wraparound board.

Steer with the arrow keys, the vi keys (h j k l), or z q s d.  Eating
an apple scores a point, and enough points start the next, faster
level.  Running into your own body ends the game.  Press Ctrl-C to
quit.

Options:
  -h, --help     Show this help message and exit
  -V, --version  Show the program version and exit
";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Arguments {
    Run,
    Help,
    Version,
}

impl Arguments {
    fn from_env() -> Result<Arguments, lexopt::Error> {
        let mut parser = Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                other => return Err(other.unexpected()),
            }
        }
        Ok(Arguments::Run)
    }
}

fn main() -> ExitCode {
    match Arguments::from_env() {
        Ok(Arguments::Run) => (),
        Ok(Arguments::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Arguments::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    }
    let board = match board_from_env() {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    let r = App::new(board).run(terminal);
    ratatui::restore();
    io_exit(r)
}

/// Size a board for the terminal the process is attached to.  Checked
/// before entering the alternate screen so that a too-small window
/// produces a normal error message instead of a corrupted display.
fn board_from_env() -> anyhow::Result<Board> {
    let (width, height) =
        crossterm::terminal::size().context("failed to query the terminal size")?;
    Ok(Board::from_terminal(Size::new(width, height))?)
}

fn io_exit(r: io::Result<Outcome>) -> ExitCode {
    match r {
        Ok(Outcome::Died(death)) => {
            println!("{death}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Quit) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
