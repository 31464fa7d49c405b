//! Turn loop for a single game session.
//!
//! The session owns the [`Game`] exclusively for its whole lifetime:
//! one thread of control, one board, suspension only while waiting on
//! the input source.

use crate::games::nine_holes::{Board, Command, Game, GameStatus, Player, parse};
use anyhow::Result;
use std::io;
use tracing::{debug, info, instrument};

/// Supplies one raw input token per turn.
///
/// A token is at most two characters of a whitespace-delimited word;
/// surplus characters stay buffered until read or discarded. `None`
/// signals end of input, which the session treats as an implicit quit.
pub trait InputSource {
    /// Reads the next token, blocking until one is available.
    fn next_token(&mut self) -> io::Result<Option<String>>;

    /// Drops any unread remainder of the current line.
    ///
    /// Called after a rejected move so a malformed multi-character
    /// entry cannot desynchronize the next read.
    fn discard_pending(&mut self);
}

/// Accepts board snapshots and messages for display.
pub trait OutputSink {
    /// Displays the board in its fixed three-row layout.
    fn show_board(&mut self, board: &Board) -> io::Result<()>;

    /// Prompts the active player for a move.
    fn prompt(&mut self, player: Player) -> io::Result<()>;

    /// Displays a message line.
    fn message(&mut self, text: &str) -> io::Result<()>;
}

/// Banner shown once at startup.
const INTRO: &str = "\
Nine Holes - tic-tac-toe with three pieces per player.

The numbers on the left correspond to positions on the board. The two
players are marked 'O' and 'X', and '.' is an empty position. Each
player owns three pieces. To place a piece, enter its position number.
Once all three pieces are in, enter two numbers to shift a piece.
Example: entering 38 moves your piece from position 3 to position 8.
To quit the game, enter 'q'.";

/// Farewell shown on quit or end of input.
const FAREWELL: &str = "Quitting...Bye!";

/// A single game between two players sharing one input source.
pub struct Session<I, O> {
    game: Game,
    input: I,
    output: O,
}

impl<I: InputSource, O: OutputSink> Session<I, O> {
    /// Creates a session over a fresh game.
    pub fn new(input: I, output: O) -> Self {
        Self {
            game: Game::new(),
            input,
            output,
        }
    }

    /// Runs the game to its terminal status.
    ///
    /// Malformed input is never fatal: it is reported, the rest of the
    /// offending line is discarded, and the same player is re-prompted.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the output sink or input source propagate.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<GameStatus> {
        self.output.message(INTRO)?;
        self.output.show_board(self.game.state().board())?;

        while self.game.status().is_in_progress() {
            let player = self.game.current_player();
            self.output.prompt(player)?;

            let Some(token) = self.input.next_token()? else {
                // End of input is an implicit quit.
                debug!("input source exhausted");
                self.output.message(FAREWELL)?;
                self.game.abort();
                break;
            };

            match parse(&token, self.game.state().board(), player) {
                Ok(Command::Play(mv)) => {
                    debug!(%mv, "move accepted");
                    self.game.play(mv);
                    self.output.show_board(self.game.state().board())?;
                    if let GameStatus::Won(winner) = self.game.status() {
                        info!(%winner, "game over");
                        self.output.message(&format!("Player '{winner}' wins!"))?;
                    }
                }
                Ok(Command::Quit) => {
                    self.output.message(FAREWELL)?;
                    self.game.abort();
                }
                Err(err) => {
                    debug!(%err, token, "move rejected");
                    self.output.message("Invalid move!")?;
                    self.input.discard_pending();
                }
            }
        }

        Ok(self.game.status())
    }
}
