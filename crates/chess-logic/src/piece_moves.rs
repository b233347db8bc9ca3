//! Movement rules for each chess piece type
//!
//! Pure functions with no side effects - easy to test. Given a piece, its
//! square, and a read-only board, `valid_moves` produces every destination
//! the piece could move to under plain movement geometry. Check safety is
//! deliberately not considered.
//!
//! The returned list never contains an out-of-range square, never the origin
//! itself, and never a square held by a same-color piece. Ordering carries
//! no meaning; callers do membership tests.

use crate::board::{Board, Square, BOARD_SIZE};
use crate::piece::{Piece, PieceColor, PieceKind};

type Delta = (i8, i8);

const ROOK_DIRS: [Delta; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const BISHOP_DIRS: [Delta; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const KNIGHT_JUMPS: [Delta; 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_STEPS: [Delta; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// All squares `piece`, standing on `from`, could legally move to.
pub fn valid_moves(piece: Piece, from: Square, board: &Board) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece.color, from, board),
        PieceKind::Rook => sliding_moves(piece.color, from, board, &ROOK_DIRS),
        PieceKind::Bishop => sliding_moves(piece.color, from, board, &BISHOP_DIRS),
        PieceKind::Queen => queen_moves(piece.color, from, board),
        PieceKind::Knight => jump_moves(piece.color, from, board, &KNIGHT_JUMPS),
        PieceKind::King => jump_moves(piece.color, from, board, &KING_STEPS),
    }
}

/// `from` shifted by `delta`, or `None` if that leaves the board.
fn offset(from: Square, delta: Delta) -> Option<Square> {
    let row = from.0 as i8 + delta.0;
    let col = from.1 as i8 + delta.1;
    if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
        Some((row as u8, col as u8))
    } else {
        None
    }
}

fn pawn_moves(color: PieceColor, from: Square, board: &Board) -> Vec<Square> {
    let mut moves = Vec::new();

    // White marches toward row 0, black toward row 7.
    let (forward, home_row) = match color {
        PieceColor::White => (-1, 6),
        PieceColor::Black => (1, 1),
    };

    if let Some(one_step) = offset(from, (forward, 0)) {
        if board.is_empty(one_step) {
            moves.push(one_step);

            // Double advance only from the home row, through an empty square.
            if from.0 == home_row {
                if let Some(two_step) = offset(from, (2 * forward, 0)) {
                    if board.is_empty(two_step) {
                        moves.push(two_step);
                    }
                }
            }
        }
    }

    // Diagonal steps capture only; a pawn never walks diagonally into space.
    for dc in [-1, 1] {
        if let Some(target) = offset(from, (forward, dc)) {
            if board.get_piece_color(target) == Some(color.opponent()) {
                moves.push(target);
            }
        }
    }

    moves
}

/// Walk each direction one square at a time until blocked or off the board.
///
/// An empty square is a destination and the walk continues; an opposing
/// piece is a destination and the walk stops; an own piece stops the walk
/// without being added.
fn sliding_moves(
    color: PieceColor,
    from: Square,
    board: &Board,
    directions: &[Delta],
) -> Vec<Square> {
    let mut moves = Vec::new();

    for &dir in directions {
        let mut current = from;
        while let Some(next) = offset(current, dir) {
            match board.get_piece_color(next) {
                None => {
                    moves.push(next);
                    current = next;
                }
                Some(occupant) => {
                    if occupant != color {
                        moves.push(next);
                    }
                    break;
                }
            }
        }
    }

    moves
}

/// The queen is a rook and a bishop sharing a square.
fn queen_moves(color: PieceColor, from: Square, board: &Board) -> Vec<Square> {
    let mut moves = sliding_moves(color, from, board, &ROOK_DIRS);
    moves.extend(sliding_moves(color, from, board, &BISHOP_DIRS));
    moves
}

/// Fixed-offset movers (knight, king): blocking is irrelevant, the target
/// just has to be on the board and not held by an own piece.
fn jump_moves(color: PieceColor, from: Square, board: &Board, deltas: &[Delta]) -> Vec<Square> {
    deltas
        .iter()
        .filter_map(|&delta| offset(from, delta))
        .filter(|&target| board.get_piece_color(target) != Some(color))
        .collect()
}
