//! Game engine for nine holes.

mod win;

pub use win::winning_player;

use super::action::Move;
use super::types::{GameState, GameStatus, Player};
use tracing::{debug, instrument};

/// Nine holes game engine.
///
/// Owns the [`GameState`] and drives status transitions. Move legality
/// is established by the input classifier before a move reaches
/// [`Game::play`]; the engine applies it as-is.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a validated move.
    ///
    /// Precondition: `mv` was produced by the input classifier against
    /// the current board and player. On a win the status transitions to
    /// [`GameStatus::Won`]; otherwise the turn passes to the opponent.
    #[instrument(skip(self), fields(player = %mv.player()))]
    pub fn play(&mut self, mv: Move) {
        debug_assert!(self.state.status().is_in_progress());
        debug_assert_eq!(mv.player(), self.state.current_player());
        debug_assert!(self.state.board().is_empty(mv.target()));

        let player = mv.player();
        self.state.apply_move(mv);
        debug_assert!(
            crate::games::nine_holes::invariants::piece_limit_holds(self.state.board()),
            "a player holds more than three pieces"
        );

        if winning_player(self.state.board()) == Some(player) {
            debug!(%player, "game won");
            self.state.set_status(GameStatus::Won(player));
        } else {
            self.state.switch_player();
        }
    }

    /// Abandons the game (explicit quit or end of input).
    #[instrument(skip(self))]
    pub fn abort(&mut self) {
        debug!("game aborted");
        self.state.set_status(GameStatus::Aborted);
    }

    /// Convenience accessor for the current player.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Convenience accessor for the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }
}
