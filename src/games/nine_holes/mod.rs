//! Nine holes: tic-tac-toe where each player owns exactly three pieces.
//!
//! Placement works like the classic game until a player has all three
//! pieces on the board; from then on, a turn relocates one of their
//! marks to an empty square. Relocation keeps the board perpetually
//! playable, so the game has no draw - it ends with a win or a quit.

mod action;
mod input;
pub mod invariants;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use input::{Command, parse};
pub use position::Position;
pub use rules::{Game, winning_player};
pub use types::{Board, GameState, GameStatus, Player, Square};
