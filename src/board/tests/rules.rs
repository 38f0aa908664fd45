//! Turn order, check and checkmate.

use super::{play, sq, try_move};
use crate::board::{ChessMatch, Color, ErrorClass, MatchBuilder, MatchError, MatchOptions, PieceKind};

const FOOLS_MATE: [&str; 4] = ["f2f3", "e7e5", "g2g4", "d8h4"];

#[test]
fn test_new_match() {
    let game = ChessMatch::new();
    assert_eq!(game.turn(), 1);
    assert_eq!(game.current_player(), Color::White);
    assert!(!game.check());
    assert!(!game.checkmate());
    assert_eq!(game.winner(), None);
    assert_eq!(game.active_pieces().count(), 32);
    assert!(game.captured_pieces().is_empty());
}

#[test]
fn test_turns_alternate() {
    let mut game = ChessMatch::new();
    play(&mut game, &["e2e4"]);
    assert_eq!((game.turn(), game.current_player()), (2, Color::Black));
    play(&mut game, &["e7e5"]);
    assert_eq!((game.turn(), game.current_player()), (3, Color::White));
}

#[test]
fn test_source_errors() {
    let mut game = ChessMatch::new();
    assert_eq!(
        try_move(&mut game, "e4", "e5"),
        Err(MatchError::NoPieceAtSource { square: sq("e4") })
    );
    assert_eq!(
        try_move(&mut game, "e7", "e5"),
        Err(MatchError::OpponentPieceSelected { square: sq("e7") })
    );
    assert_eq!(
        try_move(&mut game, "a1", "a3"),
        Err(MatchError::NoLegalMoves { square: sq("a1") })
    );
    assert_eq!(
        try_move(&mut game, "e2", "e5"),
        Err(MatchError::IllegalTarget {
            from: sq("e2"),
            to: sq("e5"),
        })
    );
    assert_eq!(game, ChessMatch::new());
}

#[test]
fn test_error_classes() {
    let input = MatchError::NoPieceAtSource { square: sq("e4") };
    assert_eq!(input.class(), ErrorClass::Input);
    assert!(input.is_recoverable());

    let fatal = MatchError::MissingKing {
        color: Color::White,
    };
    assert_eq!(fatal.class(), ErrorClass::FatalInvariant);
    assert!(!fatal.is_recoverable());
}

#[test]
fn test_fools_mate() {
    let mut game = ChessMatch::new();
    play(&mut game, &FOOLS_MATE);

    assert!(game.check());
    assert!(game.checkmate());
    assert_eq!(game.turn(), 4);
    assert_eq!(game.current_player(), Color::Black);
    assert_eq!(game.winner(), Some(Color::Black));
    // The check flag belongs to the mated side, not the current player
    assert_eq!(game.test_check(Color::White), Ok(true));
    assert_eq!(game.test_check(Color::Black), Ok(false));
}

#[test]
fn test_moves_rejected_after_checkmate() {
    let mut game = ChessMatch::new();
    play(&mut game, &FOOLS_MATE);
    let before = game.clone();

    assert_eq!(
        try_move(&mut game, "a7", "a6"),
        Err(MatchError::GameOver {
            winner: Color::Black
        })
    );
    assert_eq!(game, before);
}

#[test]
fn test_play_continues_when_game_over_not_enforced() {
    let options = MatchOptions::default().enforce_game_over(false);
    let mut game = ChessMatch::with_options(options);
    play(&mut game, &FOOLS_MATE);
    assert!(game.checkmate());
    assert!(try_move(&mut game, "a7", "a6").is_ok());
}

#[test]
fn test_checkmate_test_leaves_match_unchanged() {
    let mut game = ChessMatch::new();
    play(&mut game, &FOOLS_MATE);
    let before = game.clone();
    assert_eq!(game.test_checkmate(Color::White), Ok(true));
    assert_eq!(game.test_checkmate(Color::Black), Ok(false));
    assert_eq!(game, before);
}

#[test]
fn test_check_without_mate() {
    let mut game = MatchBuilder::new()
        .piece("e1", Color::White, PieceKind::King)
        .piece("d1", Color::White, PieceKind::Queen)
        .piece("e8", Color::Black, PieceKind::King)
        .piece("a7", Color::Black, PieceKind::Pawn)
        .build()
        .unwrap();
    play(&mut game, &["d1h5"]);
    assert!(game.check());
    assert!(!game.checkmate());
    assert_eq!(game.current_player(), Color::Black);
    assert_eq!(game.test_check(Color::Black), Ok(true));

    // Ignoring the check is a self-check
    let before = game.clone();
    assert_eq!(
        try_move(&mut game, "a7", "a6"),
        Err(MatchError::SelfCheck {
            from: sq("a7"),
            to: sq("a6"),
        })
    );
    assert_eq!(game, before);

    play(&mut game, &["e8d8"]);
    assert!(!game.check());
}

#[test]
fn test_pinned_piece_cannot_move_off_the_line() {
    let mut game = MatchBuilder::new()
        .piece("e1", Color::White, PieceKind::King)
        .piece("e2", Color::White, PieceKind::Rook)
        .piece("e8", Color::Black, PieceKind::Rook)
        .piece("a8", Color::Black, PieceKind::King)
        .build()
        .unwrap();
    let before = game.clone();

    assert!(game.legal_moves_from(sq("e2")).unwrap().get(sq("d2").to_position()));
    assert_eq!(
        try_move(&mut game, "e2", "d2"),
        Err(MatchError::SelfCheck {
            from: sq("e2"),
            to: sq("d2"),
        })
    );
    assert_eq!(game, before);

    assert_eq!(try_move(&mut game, "e2", "e5"), Ok(None));
}

#[test]
fn test_king_cannot_step_into_check() {
    let mut game = MatchBuilder::new()
        .piece("e1", Color::White, PieceKind::King)
        .piece("d8", Color::Black, PieceKind::Rook)
        .piece("a8", Color::Black, PieceKind::King)
        .build()
        .unwrap();
    assert!(matches!(
        try_move(&mut game, "e1", "d1"),
        Err(MatchError::SelfCheck { .. })
    ));
    assert_eq!(try_move(&mut game, "e1", "f1"), Ok(None));
}

#[test]
fn test_self_check_rollback_restores_capture() {
    // Taking the rook on d2 would leave the king exposed to the e8 rook
    let mut game = MatchBuilder::new()
        .piece("e1", Color::White, PieceKind::King)
        .piece("e2", Color::White, PieceKind::Rook)
        .piece("d2", Color::Black, PieceKind::Rook)
        .piece("e8", Color::Black, PieceKind::Rook)
        .piece("a8", Color::Black, PieceKind::King)
        .build()
        .unwrap();
    let before = game.clone();
    assert!(matches!(
        try_move(&mut game, "e2", "d2"),
        Err(MatchError::SelfCheck { .. })
    ));
    assert_eq!(game, before);
    assert!(game.captured_pieces().is_empty());
}

#[test]
fn test_missing_king_is_fatal() {
    let mut game = MatchBuilder::new()
        .piece("a1", Color::White, PieceKind::Rook)
        .piece("e8", Color::Black, PieceKind::King)
        .build()
        .unwrap();
    let before = game.clone();

    let err = try_move(&mut game, "a1", "a2").unwrap_err();
    assert_eq!(
        err,
        MatchError::MissingKing {
            color: Color::White
        }
    );
    assert!(!err.is_recoverable());
    assert_eq!(game, before);
}

#[test]
fn test_scholars_mate() {
    let mut game = ChessMatch::new();
    play(
        &mut game,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert!(game.checkmate());
    assert_eq!(game.winner(), Some(Color::White));
    assert_eq!(game.turn(), 7);
    assert_eq!(game.captured_by_color(Color::Black).len(), 1);
}

#[test]
fn test_perform_move_returns_capture() {
    let mut game = ChessMatch::new();
    play(&mut game, &["e2e4", "d7d5"]);
    let captured = try_move(&mut game, "e4", "d5").unwrap().unwrap();
    assert_eq!((captured.kind(), captured.color()), (PieceKind::Pawn, Color::Black));
    assert_eq!(game.captured_pieces(), &[captured]);
}
