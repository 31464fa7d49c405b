//! Core domain types for nine holes.

use super::action::Move;
use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player O (goes first).
    O,
    /// Player X (goes second).
    X,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Character mark used when rendering this player's pieces.
    pub fn mark(self) -> char {
        match self {
            Player::O => 'O',
            Player::X => 'X',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used when rendering this square.
    pub fn mark(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.mark(),
        }
    }
}

/// 3x3 nine holes board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the pieces the given player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&sq| sq == Square::Occupied(player))
            .count()
    }

    /// Returns true once the player has committed all three pieces.
    ///
    /// This is the mode switch: below three pieces a turn places a new
    /// mark, at three pieces a turn relocates an existing one.
    pub fn all_pieces_in(&self, player: Player) -> bool {
        self.count(player) == 3
    }

    /// Formats the board in the fixed three-row layout.
    ///
    /// Position numbers on the left, marks on the right, `.` for empty:
    ///
    /// ```text
    /// 1 2 3 | . . .
    /// 4 5 6 | . . .
    /// 7 8 9 | . . .
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            let base = row * 3;
            out.push_str(&format!(
                "{} {} {} | {} {} {}\n",
                base + 1,
                base + 2,
                base + 3,
                self.squares[base].mark(),
                self.squares[base + 1].mark(),
                self.squares[base + 2].mark(),
            ));
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game was abandoned by a quit or end of input.
    Aborted,
}

impl GameStatus {
    /// Returns true while the game accepts moves.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Moves accepted so far.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::O,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves accepted so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies a move (unchecked - use Game::play for validation).
    pub(super) fn apply_move(&mut self, mv: Move) {
        match mv {
            Move::Place { player, to } => {
                self.board.set(to, Square::Occupied(player));
            }
            Move::Shift { player, from, to } => {
                self.board.set(from, Square::Empty);
                self.board.set(to, Square::Occupied(player));
            }
        }
        self.history.push(mv);
    }

    /// Hands the turn to the other player.
    pub(super) fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Sets the game status.
    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
