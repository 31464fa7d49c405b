//! Input classification: raw token + board + player -> command.
//!
//! Parsing is pure and deterministic. The same (token, board, player)
//! triple always yields the same result, and the returned [`Move`]
//! carries the decoded squares so the engine never re-derives them.

use super::action::{Move, MoveError};
use super::position::Position;
use super::types::{Board, Player, Square};
use tracing::instrument;

/// A classified piece of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A validated move, ready to apply.
    Play(Move),
    /// The player asked to quit.
    Quit,
}

/// Classifies one raw input token against the current board and player.
///
/// `q` (any case) quits regardless of game state. Everything else must
/// be a positive number. Which shape the number must take depends on
/// the player's mode:
///
/// - **Placement** (fewer than 3 pieces in): a single digit 1-9 naming
///   an empty square. Two-character tokens are rejected by length
///   before any numeric check.
/// - **Relocation** (all 3 pieces in): exactly two digits `ST`, moving
///   the player's own mark from square `S` to empty square `T` (so
///   `38` shifts the mark on 3 to 8). One-character tokens are
///   rejected by length.
///
/// # Errors
///
/// Returns a [`MoveError`] describing why the token was rejected.
#[instrument(skip(board))]
pub fn parse(token: &str, board: &Board, player: Player) -> Result<Command, MoveError> {
    if token.eq_ignore_ascii_case("q") {
        return Ok(Command::Quit);
    }

    let number: u32 = token.parse().map_err(|_| MoveError::NotNumeric)?;
    if number == 0 {
        return Err(MoveError::NotNumeric);
    }

    let mv = if board.all_pieces_in(player) {
        parse_shift(token, number, board, player)?
    } else {
        parse_placement(token, number, board, player)?
    };
    Ok(Command::Play(mv))
}

/// Placement mode: a single digit naming an empty square.
fn parse_placement(
    token: &str,
    number: u32,
    board: &Board,
    player: Player,
) -> Result<Move, MoveError> {
    // Length check first: a two-character token is never a placement,
    // even when its digits would decode to valid squares.
    if token.len() == 2 {
        return Err(MoveError::ExpectedPlacement);
    }
    let to = Position::from_number(number).ok_or(MoveError::NoSuchPosition(number))?;
    if !board.is_empty(to) {
        return Err(MoveError::SquareOccupied(to));
    }
    Ok(Move::Place { player, to })
}

/// Relocation mode: two digits, source then target.
fn parse_shift(
    token: &str,
    number: u32,
    board: &Board,
    player: Player,
) -> Result<Move, MoveError> {
    if token.len() == 1 {
        return Err(MoveError::ExpectedShift);
    }
    let from =
        Position::from_number(number / 10).ok_or(MoveError::NoSuchPosition(number / 10))?;
    let to = Position::from_number(number % 10).ok_or(MoveError::NoSuchPosition(number % 10))?;
    if board.get(from) != Square::Occupied(player) {
        return Err(MoveError::NotYourPiece(from));
    }
    if !board.is_empty(to) {
        return Err(MoveError::SquareOccupied(to));
    }
    Ok(Move::Shift { player, from, to })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_quit_any_case_any_state() {
        let board = Board::new();
        assert_eq!(parse("q", &board, Player::O), Ok(Command::Quit));
        assert_eq!(parse("Q", &board, Player::X), Ok(Command::Quit));
    }

    #[test]
    fn test_non_numeric_rejected() {
        let board = Board::new();
        assert_eq!(parse("x", &board, Player::O), Err(MoveError::NotNumeric));
        assert_eq!(parse("", &board, Player::O), Err(MoveError::NotNumeric));
    }

    #[test]
    fn test_zero_rejected_as_non_numeric() {
        let board = Board::new();
        assert_eq!(parse("0", &board, Player::O), Err(MoveError::NotNumeric));
    }

    #[test]
    fn test_placement_on_empty_square() {
        let board = Board::new();
        let result = parse("5", &board, Player::O);
        assert_eq!(
            result,
            Ok(Command::Play(Move::Place {
                player: Player::O,
                to: Position::Center,
            }))
        );
    }

    #[test]
    fn test_placement_on_occupied_square_rejected() {
        let board = board_with(&[(Position::Center, Player::X)]);
        assert_eq!(
            parse("5", &board, Player::O),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_two_digit_token_rejected_in_placement_mode() {
        // Rejected by length alone - both digits name open squares.
        let board = Board::new();
        assert_eq!(
            parse("12", &board, Player::O),
            Err(MoveError::ExpectedPlacement)
        );
    }

    #[test]
    fn test_single_digit_rejected_in_relocation_mode() {
        let board = board_with(&[
            (Position::TopLeft, Player::O),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::O),
        ]);
        assert_eq!(parse("5", &board, Player::O), Err(MoveError::ExpectedShift));
    }

    #[test]
    fn test_shift_decomposes_source_and_target() {
        let board = board_with(&[
            (Position::TopLeft, Player::O),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::O),
        ]);
        let result = parse("38", &board, Player::O);
        assert_eq!(
            result,
            Ok(Command::Play(Move::Shift {
                player: Player::O,
                from: Position::TopRight,
                to: Position::BottomCenter,
            }))
        );
    }

    #[test]
    fn test_shift_from_opponent_square_rejected() {
        let board = board_with(&[
            (Position::TopLeft, Player::O),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::O),
            (Position::Center, Player::X),
        ]);
        assert_eq!(
            parse("58", &board, Player::O),
            Err(MoveError::NotYourPiece(Position::Center))
        );
    }

    #[test]
    fn test_shift_onto_own_piece_rejected() {
        let board = board_with(&[
            (Position::TopLeft, Player::O),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::O),
        ]);
        assert_eq!(
            parse("41", &board, Player::O),
            Err(MoveError::NotYourPiece(Position::MiddleLeft))
        );
    }

    #[test]
    fn test_shift_target_zero_rejected() {
        let board = board_with(&[
            (Position::TopLeft, Player::O),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::O),
        ]);
        assert_eq!(
            parse("30", &board, Player::O),
            Err(MoveError::NoSuchPosition(0))
        );
    }

    #[test]
    fn test_parse_is_pure() {
        let board = board_with(&[(Position::TopLeft, Player::O)]);
        let first = parse("2", &board, Player::O);
        let second = parse("2", &board, Player::O);
        assert_eq!(first, second);
    }
}
