//! Tests for the nine holes engine and input classification.

use nine_holes::invariants::{Invariant, PieceLimitInvariant};
use nine_holes::{
    Board, Command, Game, GameStatus, Move, MoveError, Player, Position, Square, parse,
    winning_player,
};

/// Drives a game through raw tokens, asserting every one is accepted.
fn play_script(game: &mut Game, tokens: &[&str]) {
    for token in tokens {
        let command = parse(token, game.state().board(), game.current_player())
            .unwrap_or_else(|err| panic!("token {token:?} rejected: {err}"));
        match command {
            Command::Play(mv) => game.play(mv),
            Command::Quit => panic!("token {token:?} classified as quit"),
        }
    }
}

#[test]
fn test_center_placement_switches_to_second_player() {
    let mut game = Game::new();
    play_script(&mut game, &["5"]);

    assert_eq!(
        game.state().board().get(Position::Center),
        Square::Occupied(Player::O)
    );
    assert_eq!(winning_player(game.state().board()), None);
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_third_in_a_row_wins() {
    let mut game = Game::new();
    // O fills the top row while X plays the middle row.
    play_script(&mut game, &["1", "4", "2", "5", "3"]);

    assert_eq!(game.status(), GameStatus::Won(Player::O));
}

#[test]
fn test_shift_into_a_row_wins() {
    let mut game = Game::new();
    // All six pieces in, then O shifts 9 -> 3 to complete the top row.
    play_script(&mut game, &["1", "4", "2", "5", "9", "7", "93"]);

    assert_eq!(game.status(), GameStatus::Won(Player::O));
    assert!(game.state().board().is_empty(Position::BottomRight));
}

#[test]
fn test_fourth_placement_is_never_offered() {
    let mut game = Game::new();
    play_script(&mut game, &["1", "4", "2", "5", "9", "7"]);

    // Both players hold three pieces; single-digit tokens now fail.
    assert_eq!(
        parse("6", game.state().board(), game.current_player()),
        Err(MoveError::ExpectedShift)
    );
}

#[test]
fn test_piece_limit_holds_through_shifting_game() {
    let mut game = Game::new();
    let tokens = ["1", "4", "2", "5", "9", "7", "96", "58", "65", "46", "53"];
    for token in tokens {
        let command = parse(token, game.state().board(), game.current_player())
            .unwrap_or_else(|err| panic!("token {token:?} rejected: {err}"));
        if let Command::Play(mv) = command {
            game.play(mv);
        }
        assert!(PieceLimitInvariant::holds(game.state().board()));
        assert!(game.state().board().count(Player::O) <= 3);
        assert!(game.state().board().count(Player::X) <= 3);
    }
    assert_eq!(game.status(), GameStatus::Won(Player::O));
}

#[test]
fn test_quit_token_any_case_any_state() {
    let mut game = Game::new();
    assert_eq!(
        parse("q", game.state().board(), Player::O),
        Ok(Command::Quit)
    );

    play_script(&mut game, &["1", "4", "2", "5", "9", "7"]);
    assert_eq!(
        parse("Q", game.state().board(), game.current_player()),
        Ok(Command::Quit)
    );
}

#[test]
fn test_zero_token_rejected() {
    let game = Game::new();
    assert_eq!(
        parse("0", game.state().board(), Player::O),
        Err(MoveError::NotNumeric)
    );
}

#[test]
fn test_two_digit_placement_rejected_by_length() {
    let game = Game::new();
    // Both digits name open squares; the length alone disqualifies it.
    assert_eq!(
        parse("12", game.state().board(), Player::O),
        Err(MoveError::ExpectedPlacement)
    );
}

#[test]
fn test_shift_with_empty_source_rejected() {
    let mut game = Game::new();
    play_script(&mut game, &["1", "4", "2", "5", "9", "7"]);

    // O owns 1, 2, 9; square 4 belongs to X.
    assert_eq!(
        parse("41", game.state().board(), game.current_player()),
        Err(MoveError::NotYourPiece(Position::MiddleLeft))
    );
}

#[test]
fn test_shift_onto_occupied_target_rejected() {
    let mut game = Game::new();
    play_script(&mut game, &["1", "4", "2", "5", "9", "7"]);

    // Source 2 is O's own piece, but target 1 already holds O's mark.
    assert_eq!(
        parse("21", game.state().board(), game.current_player()),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
}

#[test]
fn test_all_eight_triples_win() {
    let triples = [
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
        [1, 4, 7],
        [2, 5, 8],
        [3, 6, 9],
        [1, 5, 9],
        [3, 5, 7],
    ];
    for triple in triples {
        let mut board = Board::new();
        for number in triple {
            let pos = Position::from_number(number).expect("triple numbers are 1-9");
            board.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(winning_player(&board), Some(Player::X), "triple {triple:?}");
    }
}

#[test]
fn test_game_state_json_round_trip() {
    let mut game = Game::new();
    play_script(&mut game, &["1", "4", "2", "5", "9", "7", "96"]);

    let json = serde_json::to_string(game.state()).expect("state serializes");
    let restored: nine_holes::GameState = serde_json::from_str(&json).expect("state deserializes");
    assert_eq!(&restored, game.state());
    assert_eq!(restored.history().len(), 7);
    assert!(matches!(restored.history()[6], Move::Shift { .. }));
}
