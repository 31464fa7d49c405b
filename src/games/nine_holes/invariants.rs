//! First-class invariants for nine holes.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. The placement gate in the input classifier is the single
//! source of truth for the piece limit; these checks document and test
//! that guarantee, they do not enforce it.

use super::types::{Board, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: no player ever has more than three pieces on the board.
///
/// Placement is only offered while a player has fewer than three
/// pieces, so an accepted move can never push the count past three.
pub struct PieceLimitInvariant;

impl Invariant<Board> for PieceLimitInvariant {
    fn holds(board: &Board) -> bool {
        [Player::O, Player::X]
            .into_iter()
            .all(|player| board.count(player) <= 3)
    }

    fn description() -> &'static str {
        "No player has more than three pieces on the board"
    }
}

/// Free-function form of [`PieceLimitInvariant`] for debug assertions.
pub fn piece_limit_holds(board: &Board) -> bool {
    PieceLimitInvariant::holds(board)
}
