//! The engine puts all pieces together: it runs the game loop, reads the moves
//! of human players from the input stream, asks [`crate::search`] for the
//! moves of the computer opponent and reports everything to the output stream.
//!
//! [`Engine::play`] is the "main loop" of the engine.

use std::io::{BufRead, Write};

use itertools::Itertools;

use crate::draughts::board::Board;
use crate::draughts::core::Player;
use crate::draughts::moves::Move;
use crate::draughts::notation::parse_move;
use crate::engine::command::Command;
use crate::search::{search, Config};

mod command;

/// Who plays the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Both sides enter their moves.
    TwoPlayers,
    /// Red is played by the engine, Green by the human.
    Computer,
}

/// The Engine connects everything together and handles the game including
/// I/O.
pub struct Engine<'a, R: BufRead, W: Write> {
    board: Board,
    to_move: Player,
    mode: Mode,
    config: Config,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Engine<'a, R, W> {
    /// Creates a new instance of the engine with the starting position, Red to
    /// move, and provided I/O.
    #[must_use]
    pub fn new(input: &'a mut R, output: &'a mut W, mode: Mode) -> Self {
        Self {
            board: Board::starting(),
            to_move: Player::One,
            mode,
            config: Config::default(),
            input,
            output,
        }
    }

    /// Starts the game from an arbitrary position.
    #[must_use]
    pub fn with_board(mut self, board: Board, to_move: Player) -> Self {
        self.board = board;
        self.to_move = to_move;
        self
    }

    /// Overrides the search parameters of the computer opponent.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Plays the game until one of the sides wins and returns the winner.
    /// Returns `None` if the game was interrupted: the player quit or the
    /// input stream ended.
    ///
    /// Incorrect moves are reported and the player is asked again.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading the input or writing the output
    /// fails.
    pub fn play(&mut self) -> anyhow::Result<Option<Player>> {
        loop {
            if let Some(winner) = self.board.outcome(self.to_move) {
                writeln!(self.output, "{}", self.board)?;
                writeln!(self.output, "Winner: {}", winner.name())?;
                log::info!("{} wins", winner.name());
                return Ok(Some(winner));
            }
            writeln!(self.output, "{}", self.board)?;
            let next_move = if self.is_computer_turn() {
                self.computer_move()?
            } else {
                match self.read_move()? {
                    Some(next_move) => next_move,
                    None => return Ok(None),
                }
            };
            log::debug!("{next_move}");
            self.board = self.board.apply(&next_move);
            self.to_move = self.to_move.opponent();
        }
    }

    const fn is_computer_turn(&self) -> bool {
        matches!(self.mode, Mode::Computer) && matches!(self.to_move, Player::One)
    }

    /// Picks the move with the search and announces it.
    fn computer_move(&mut self) -> anyhow::Result<Move> {
        let result = search(&self.board, self.to_move, &self.config);
        // The search does not return anything at depth 0.
        let next_move = match result.best_move {
            Some(best_move) => best_move,
            None => self
                .board
                .legal_moves(self.to_move)
                .into_iter()
                .next()
                .ok_or_else(|| anyhow::anyhow!("no legal moves to play"))?,
        };
        writeln!(
            self.output,
            "{}'s move: {}",
            self.to_move.name(),
            next_move.to_standard()
        )?;
        Ok(next_move)
    }

    /// Prompts the player until a correct move is entered. Returns `None` if
    /// the player quits.
    fn read_move(&mut self) -> anyhow::Result<Option<Move>> {
        loop {
            write!(self.output, "{}'s move: ", self.to_move.name())?;
            self.output.flush()?;
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }
            // Garbled bytes end up in a move that fails to parse.
            match Command::parse(&String::from_utf8_lossy(&line)) {
                Command::Move(text) => {
                    let next_move = match parse_move(&text, self.to_move) {
                        Ok(next_move) => next_move,
                        Err(e) => {
                            writeln!(
                                self.output,
                                "\n--> incorrectly entered move; try again ({e:#})"
                            )?;
                            continue;
                        },
                    };
                    match self.board.check_move(&next_move) {
                        Ok(()) => return Ok(Some(next_move)),
                        Err(e) => {
                            log::debug!("rejected {next_move}: {e:?}");
                            writeln!(self.output, "\n--> incorrect move; try again ({e})")?;
                        },
                    }
                },
                Command::Moves => writeln!(
                    self.output,
                    "{}",
                    self.board
                        .legal_moves(self.to_move)
                        .iter()
                        .map(Move::to_standard)
                        .join(", ")
                )?,
                Command::Show => writeln!(self.output, "{}", self.board)?,
                Command::Quit => return Ok(None),
                Command::Empty => {},
            }
        }
    }
}
