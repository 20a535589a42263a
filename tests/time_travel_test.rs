//! Tests for history navigation and branch truncation.

use tictactoe_timetravel::{
    GameState, JumpError, Mark, MoveLabel, Phase, Position, engine,
};

fn three_moves() -> GameState {
    GameState::replay(&[Position::TopLeft, Position::Center, Position::TopRight])
        .expect("Valid replay")
}

#[test]
fn test_jump_then_play_discards_future() {
    let game = three_moves();
    assert_eq!(game.history().len(), 4);
    let old_future = *game.history().get(2).expect("snapshot 2");

    let rewound = game.jump_to(1).expect("In range");
    assert_eq!(rewound.history(), game.history());
    assert_eq!(rewound.next_mark(), Mark::O);

    let branched = rewound.play(Position::BottomRight).expect("Valid move");
    assert_eq!(branched.history().len(), 3);
    assert_eq!(branched.current_move(), 2);
    assert_ne!(branched.history().get(2), Some(&old_future));

    // The discarded branch is gone.
    assert_eq!(
        branched.jump_to(3),
        Err(JumpError::OutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn test_history_length_after_jump_and_move() {
    let game = three_moves();
    for k in 0..game.history().len() {
        let rewound = game.jump_to(k).expect("In range");
        let free = rewound.valid_moves()[0];
        let branched = rewound.play(free).expect("Valid move");
        assert_eq!(branched.history().len(), k + 2);
        assert_eq!(branched.history().snapshots()[..=k], game.history().snapshots()[..=k]);
    }
}

#[test]
fn test_jump_out_of_range() {
    let game = three_moves();
    let result = game.jump_to(4);
    assert_eq!(result, Err(JumpError::OutOfRange { index: 4, len: 4 }));
    assert_eq!(game.current_move(), 3);
}

#[test]
fn test_jump_from_terminal_recomputes_status() {
    let won = GameState::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ])
    .expect("Valid replay");
    assert_eq!(won.phase(), Phase::Terminal);

    let rewound = won.jump_to(4).expect("In range");
    assert_eq!(rewound.phase(), Phase::InProgress);
    assert_eq!(rewound.status().to_string(), "Next player: X");

    let forward = rewound.jump_to(5).expect("In range");
    assert_eq!(forward.phase(), Phase::Terminal);
    assert_eq!(forward.status().to_string(), "Winner: X");

    // A different fifth move replaces the winning one.
    let replaced = rewound.play(Position::BottomRight).expect("Valid move");
    assert_eq!(replaced.phase(), Phase::InProgress);
    assert_eq!(replaced.history().len(), 6);
}

#[test]
fn test_move_labels_follow_current_move() {
    let game = three_moves();
    let labels: Vec<String> = game.move_labels().iter().map(|l| l.to_string()).collect();
    assert_eq!(
        labels,
        vec!["Go to game start", "Go to #1", "Go to #2", "Currently at #3"]
    );

    let at_start = game.jump_to(0).expect("In range");
    assert_eq!(at_start.position_label(), MoveLabel::CurrentlyAtStart);
    assert_eq!(at_start.move_labels()[3], MoveLabel::GoTo(3));
    assert_eq!(at_start.move_labels().len(), 4);
}

#[test]
fn test_engine_level_jump_and_truncate() {
    let game = three_moves();
    let history = game.history();

    assert_eq!(engine::jump_to(history, 2), Ok(2));
    assert!(engine::jump_to(history, 4).is_err());

    let board = engine::apply_move(history.get(0).expect("root"), Position::Center, Mark::X)
        .expect("Valid move");
    let truncated = engine::truncate_and_append(history, 0, board);
    assert_eq!(truncated.len(), 2);
    assert_eq!(history.len(), 4);
}

#[test]
fn test_snapshots_are_independent() {
    let game = three_moves();
    let root = *game.history().get(0).expect("root");
    let next = game.play(Position::BottomLeft).expect("Valid move");

    assert_eq!(next.history().get(0), Some(&root));
    assert_eq!(game.history().len(), 4);
    assert_eq!(next.history().len(), 5);
    assert!(game.history().snapshots().iter().all(|b| b.count(Mark::O) <= 1));
}
