use crate::command::Command;
use crate::game::{Advance, Board, Death, Game};
use crossterm::event::{poll, read};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::thread;
use std::time::{Duration, Instant};

/// Drives a game session, one tick per loop iteration, at the cadence
/// the score dictates
#[derive(Clone, Debug)]
pub(crate) struct App {
    game: Game,
}

impl App {
    pub(crate) fn new(board: Board) -> App {
        App {
            game: Game::new(board),
        }
    }

    /// Run ticks until the snake dies or the player quits.
    ///
    /// Each tick redraws the screen, consumes at most one pending key
    /// press, advances the snake once, and then sleeps out the rest of
    /// the tick interval.  An empty input queue never delays a tick.
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<Outcome> {
        loop {
            let tick_start = Instant::now();
            terminal.draw(|frame| self.game.draw(frame))?;
            match poll_command()? {
                Some(Command::Quit) => return Ok(Outcome::Quit),
                Some(command) => self.game.steer(command),
                None => (),
            }
            if let Advance::Died(death) = self.game.advance() {
                return Ok(Outcome::Died(death));
            }
            let deadline = tick_start + self.game.delay();
            let pause = deadline.saturating_duration_since(Instant::now());
            if !pause.is_zero() {
                thread::sleep(pause);
            }
        }
    }
}

/// How a session ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The snake ran into itself.
    Died(Death),
    /// The player pressed Ctrl-C.
    Quit,
}

/// Fetch a single pending key press without blocking
fn poll_command() -> io::Result<Option<Command>> {
    if !poll(Duration::ZERO)? {
        return Ok(None);
    }
    Ok(read()?
        .as_key_press_event()
        .and_then(Command::from_key_event))
}
