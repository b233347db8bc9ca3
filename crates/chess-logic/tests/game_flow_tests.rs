//! Game flow integration tests
//!
//! Whole-game flows exercised through the public API:
//! - Opening move counts
//! - Turn alternation across sequences of moves
//! - Captures during play
//! - The deliberately unenforced turn/color relationship

use chess_logic::{valid_moves, Game, MoveError, PieceColor, PieceKind};

/// Every legal move currently available to one side.
fn moves_for(game: &Game, color: PieceColor) -> Vec<((u8, u8), (u8, u8))> {
    let mut all = Vec::new();
    for row in 0..8u8 {
        for col in 0..8u8 {
            let Some(piece) = game.board().get_piece_at((row, col)) else {
                continue;
            };
            if piece.color != color {
                continue;
            }
            for target in valid_moves(piece, (row, col), game.board()) {
                all.push(((row, col), target));
            }
        }
    }
    all
}

// ============================================================================
// Opening Position Tests
// ============================================================================

#[test]
fn test_white_has_twenty_opening_moves() {
    let game = Game::new();
    // 16 pawn moves (single + double per pawn) and 4 knight jumps.
    assert_eq!(moves_for(&game, PieceColor::White).len(), 20);
}

#[test]
fn test_black_has_twenty_opening_moves() {
    let game = Game::new();
    assert_eq!(moves_for(&game, PieceColor::Black).len(), 20);
}

#[test]
fn test_back_rank_is_locked_at_start() {
    let game = Game::new();
    // Knights excluded: they are the only back-rank pieces able to move.
    for col in [0u8, 2, 3, 4, 5, 7] {
        let from = (7, col);
        let piece = game.board().get_piece_at(from).expect("back rank occupied");
        assert!(
            valid_moves(piece, from, game.board()).is_empty(),
            "{:?} on {from:?} should be boxed in at the start",
            piece.kind
        );
    }
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_turns_alternate_over_a_sequence() {
    let mut game = Game::new();
    assert_eq!(game.turn(), PieceColor::White);

    game.make_move((6, 4), (4, 4)).expect("e-pawn double step");
    assert_eq!(game.turn(), PieceColor::Black);

    game.make_move((1, 4), (3, 4)).expect("black e-pawn reply");
    assert_eq!(game.turn(), PieceColor::White);

    game.make_move((7, 6), (5, 5)).expect("knight development");
    assert_eq!(game.turn(), PieceColor::Black);
}

#[test]
fn test_rejected_move_keeps_turn_and_board() {
    let mut game = Game::new();
    game.make_move((6, 4), (4, 4)).expect("opening move");

    let before = game.board().clone();
    assert_eq!(
        game.make_move((0, 0), (4, 0)),
        Err(MoveError::IllegalDestination),
        "rook cannot pass through its own pawn"
    );
    assert_eq!(game.turn(), PieceColor::Black);
    assert_eq!(game.board(), &before);
}

#[test]
fn test_turn_is_not_enforced_against_mover() {
    // Reference behavior: the engine validates geometry only. White moving
    // twice in a row is accepted, and each accepted move flips the turn.
    // Do not "fix" this without revisiting DESIGN.md.
    let mut game = Game::new();

    game.make_move((6, 4), (4, 4)).expect("white move");
    assert_eq!(game.turn(), PieceColor::Black);

    game.make_move((6, 3), (4, 3))
        .expect("second white move is accepted despite black to move");
    assert_eq!(game.turn(), PieceColor::White);
}

// ============================================================================
// Capture Flow Tests
// ============================================================================

#[test]
fn test_pawns_capture_each_other_mid_game() {
    let mut game = Game::new();

    game.make_move((6, 4), (4, 4)).expect("white e-pawn");
    game.make_move((1, 3), (3, 3)).expect("black d-pawn");
    game.make_move((4, 4), (3, 3)).expect("pawn takes pawn");

    let capturer = game.board().get_piece_at((3, 3)).expect("square occupied");
    assert_eq!(capturer.color, PieceColor::White);
    assert_eq!(capturer.kind, PieceKind::Pawn);
    assert!(game.board().is_empty((4, 4)), "origin square not vacated");

    // One black piece gone.
    let black_count = (0..8u8)
        .flat_map(|r| (0..8u8).map(move |c| (r, c)))
        .filter(|&pos| game.board().get_piece_color(pos) == Some(PieceColor::Black))
        .count();
    assert_eq!(black_count, 15);
}

#[test]
fn test_knight_tour_out_and_back() {
    let mut game = Game::new();

    game.make_move((7, 1), (5, 2)).expect("knight out");
    game.make_move((5, 2), (7, 1)).expect("knight back");

    let knight = game.board().get_piece_at((7, 1)).expect("knight home");
    assert_eq!(knight.kind, PieceKind::Knight);
    assert_eq!(
        game.turn(),
        PieceColor::White,
        "two accepted moves return the turn to white"
    );
}
