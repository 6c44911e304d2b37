//! Line-oriented text front end for [`Game`]. It stands in for a graphical
//! board: it reads square pairs, forwards them to the controller and prints
//! the outcome. The shell has no knowledge of the rules.
//!
//! Protocol, one command per line:
//!
//! - `e2e4` or `move e2 e4`: attempts a move, replies `ok e2e4` or
//!   `rejected e2e4: <reason>` followed by the game status unless the game is
//!   ongoing.
//! - `d`: prints the board and the side to move.
//! - `moves`: lists legal moves of the side to move in alphabetical order.
//! - `status`: prints `ongoing`, `check <color>`, `checkmate <color>` or
//!   `stalemate <color>`.
//! - `new`: starts a new game.
//! - `quit`: exits.
use std::io::{BufRead, Write};

use itertools::Itertools;
use tracing::debug;

use crate::chess::core::Move;
use crate::chess::game::{Game, GameStatus, MoveOutcome};
use crate::shell::command::Command;

mod command;

/// Connects the game with the input and output streams.
pub struct Shell<'a, R: BufRead, W: Write> {
    game: Game,
    input: &'a mut R,
    output: &'a mut W,
    figurines: bool,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Creates a shell with a new game. If `figurines` is set, the board is
    /// drawn with Unicode chess symbols.
    #[must_use]
    pub fn new(input: &'a mut R, output: &'a mut W, figurines: bool) -> Self {
        Self {
            game: Game::new(),
            input,
            output,
            figurines,
        }
    }

    /// Reads and executes commands until "quit" or the end of input.
    ///
    /// # Errors
    ///
    /// Fails if reading the input or writing the output fails. Malformed
    /// commands and illegal moves are reported to the output instead.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let command = Command::parse(&line);
            debug!(?command, "received");
            match command {
                Command::Move(candidate) => self.handle_move(candidate)?,
                Command::Display => self.handle_display()?,
                Command::Moves => self.handle_moves()?,
                Command::Status => writeln!(self.output, "{}", self.game.status())?,
                Command::NewGame => self.game = Game::new(),
                Command::Quit => break,
                Command::Empty => {},
                Command::Unknown(input) => writeln!(self.output, "unknown command: {input}")?,
            }
            self.output.flush()?;
        }
        Ok(())
    }

    fn handle_move(&mut self, candidate: Move) -> anyhow::Result<()> {
        match self.game.attempt_move(candidate.from, candidate.to) {
            MoveOutcome::Committed { .. } => writeln!(self.output, "ok {candidate}")?,
            MoveOutcome::Rejected(rejection) => {
                writeln!(self.output, "rejected {candidate}: {rejection}")?;
            },
        }
        let status = self.game.status();
        if status != GameStatus::Ongoing {
            writeln!(self.output, "{status}")?;
        }
        Ok(())
    }

    fn handle_display(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{}", self.game.board().render(self.figurines))?;
        writeln!(self.output, "turn: {}", self.game.active_color())?;
        Ok(())
    }

    fn handle_moves(&mut self) -> anyhow::Result<()> {
        let moves = self
            .game
            .legal_moves()
            .iter()
            .map(Move::to_string)
            .sorted()
            .join(" ");
        writeln!(self.output, "{moves}")?;
        Ok(())
    }
}
