//! Board representation: an 8x8 grid of optional pieces
//!
//! The board owns every piece on it. `None` is the one and only empty-cell
//! sentinel, and `move_piece` is the sole mutator: it relocates exactly one
//! piece or leaves the grid untouched.

use crate::piece::{Piece, PieceColor, PieceKind};
use crate::piece_moves::valid_moves;
use thiserror::Error;

/// Board position as `(row, col)`, each in `[0, 8)`.
///
/// Row 0 is black's back rank, row 7 is white's.
pub type Square = (u8, u8);

pub const BOARD_SIZE: u8 = 8;

/// Back rank arrangement shared by both colors.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The two recoverable, user-visible ways a move request can fail.
///
/// The `Display` strings are the messages reported to the player; the HTTP
/// layer folds these into its `(success, message)` response pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece at the origin square")]
    EmptyOrigin,
    #[error("illegal move for this piece")]
    IllegalDestination,
}

/// 8x8 grid of cell contents, `None` meaning empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board set up in the standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.initialize_pieces();
        board
    }

    /// A board with no pieces at all. Starting point for test positions.
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting arrangement: black on rows 0-1, white on rows 6-7.
    fn initialize_pieces(&mut self) {
        for (col, &kind) in BACK_ROW.iter().enumerate() {
            let col = col as u8;
            self.place((0, col), Piece::new(PieceColor::Black, kind));
            self.place((1, col), Piece::new(PieceColor::Black, PieceKind::Pawn));
            self.place((6, col), Piece::new(PieceColor::White, PieceKind::Pawn));
            self.place((7, col), Piece::new(PieceColor::White, kind));
        }
    }

    /// Put a piece on a square, replacing whatever was there.
    pub fn place(&mut self, pos: Square, piece: Piece) {
        self.squares[pos.0 as usize][pos.1 as usize] = Some(piece);
    }

    pub fn get_piece_at(&self, pos: Square) -> Option<Piece> {
        self.squares[pos.0 as usize][pos.1 as usize]
    }

    pub fn is_empty(&self, pos: Square) -> bool {
        self.get_piece_at(pos).is_none()
    }

    pub fn get_piece_color(&self, pos: Square) -> Option<PieceColor> {
        self.get_piece_at(pos).map(|piece| piece.color)
    }

    /// The raw grid, row 0 first. Read-only view for rendering.
    pub fn squares(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    /// Relocate the piece on `from` to `to` if the destination is in the
    /// piece's legal-destination set.
    ///
    /// On failure the board is byte-for-byte unchanged. Validation runs
    /// before any mutation, so there is never a partial move to roll back.
    /// Both squares must be in range; the boundary layer validates that
    /// before calling in.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        let piece = self.get_piece_at(from).ok_or(MoveError::EmptyOrigin)?;

        if !valid_moves(piece, from, self).contains(&to) {
            return Err(MoveError::IllegalDestination);
        }

        self.squares[to.0 as usize][to.1 as usize] = Some(piece);
        self.squares[from.0 as usize][from.1 as usize] = None;
        Ok(())
    }
}
