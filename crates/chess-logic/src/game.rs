//! Game state: one board plus the side to move
//!
//! Two states exist, white-to-move and black-to-move, and every accepted
//! move toggles between them. There is no terminal state; win and draw
//! detection are out of scope.

use crate::board::{Board, MoveError, Square};
use crate::piece::PieceColor;

/// A running game. Created once at startup and mutated in place per move.
///
/// The struct is deliberately a plain owned value: the embedding service
/// decides how to share it (the backend wraps it in a mutex so concurrent
/// move requests serialize on the read-then-mutate sequence).
#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    turn: PieceColor,
}

impl Game {
    /// Fresh game: standard starting position, white to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: PieceColor::White,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it nominally is.
    ///
    /// Tracked but not enforced: `make_move` accepts a geometrically legal
    /// move by either color. This mirrors the reference implementation and
    /// is intentional; see DESIGN.md.
    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    /// Attempt a move. An accepted move flips the turn; a rejected move
    /// leaves board and turn untouched.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        self.board.move_piece(from, to)?;
        self.switch_turn();
        Ok(())
    }

    fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
    }
}
