//! First-class action types for nine holes.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// A move in nine holes.
///
/// Which shape a turn takes depends on how many pieces the player has
/// on the board: below three, a turn places a new mark; at three, a
/// turn shifts an existing mark to an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a new mark on an empty square (placement mode).
    Place {
        /// The player making the move.
        player: Player,
        /// The square receiving the mark.
        to: Position,
    },
    /// Shift an existing mark to an empty square (relocation mode).
    Shift {
        /// The player making the move.
        player: Player,
        /// The square the mark leaves.
        from: Position,
        /// The square the mark lands on.
        to: Position,
    },
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        match self {
            Move::Place { player, .. } => *player,
            Move::Shift { player, .. } => *player,
        }
    }

    /// Returns the destination square of this move.
    pub fn target(&self) -> Position {
        match self {
            Move::Place { to, .. } => *to,
            Move::Shift { to, .. } => *to,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { player, to } => write!(f, "{player} -> {to}"),
            Move::Shift { player, from, to } => write!(f, "{player} {from} -> {to}"),
        }
    }
}

/// Error that can occur when classifying raw input as a move.
///
/// The turn loop reports every variant uniformly as an invalid move;
/// the distinctions exist for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The token is not a positive number.
    #[display("input is not a positive number")]
    NotNumeric,

    /// Placement mode expects a single position digit; two-character
    /// tokens are rejected by length alone.
    #[display("expected a single position digit")]
    ExpectedPlacement,

    /// Relocation mode expects a source and target digit pair;
    /// one-character tokens are rejected by length alone.
    #[display("expected a source and target digit pair")]
    ExpectedShift,

    /// A digit decoded to a number with no square behind it.
    #[display("no position {_0} on the board")]
    NoSuchPosition(u32),

    /// The target square is already occupied.
    #[display("square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The source square does not hold the current player's mark.
    #[display("square {_0} does not hold your piece")]
    NotYourPiece(Position),
}

impl std::error::Error for MoveError {}
