//! Tests for the JSON form handed to presentation layers.

use tictactoe_timetravel::{Board, GameState, Position};

#[test]
fn test_game_state_serializes_each_snapshot() {
    let game = GameState::replay(&[Position::Center, Position::TopLeft]).expect("Valid replay");
    let json = serde_json::to_value(&game).expect("serialize");

    let snapshots = json["history"]["snapshots"].as_array().expect("snapshots");
    assert_eq!(snapshots.len(), 3);
    assert_eq!(json["current_move"], 2);
    assert_eq!(snapshots[0]["cells"][4], "Empty");
    assert_eq!(snapshots[1]["cells"][4]["Marked"], "X");
    assert_eq!(snapshots[2]["cells"][0]["Marked"], "O");
}

#[test]
fn test_board_from_json() {
    let game = GameState::replay(&[Position::BottomRight]).expect("Valid replay");
    let json = serde_json::to_string(game.board()).expect("serialize");
    let board: Board = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(&board, game.board());
}
