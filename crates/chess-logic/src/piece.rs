//! Piece colors, kinds, and display glyphs

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// The other side.
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// A chess piece: a kind and a color, nothing more.
///
/// Pieces carry no identity beyond these two fields; two pieces of the same
/// kind and color are interchangeable. Board position is owned by the board
/// cell holding the piece, not by the piece itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: PieceColor, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Unicode display symbol, determined solely by kind and color.
    pub fn glyph(&self) -> char {
        use PieceColor::*;
        use PieceKind::*;
        match (self.color, self.kind) {
            (White, Pawn) => '♙',
            (White, Rook) => '♖',
            (White, Knight) => '♘',
            (White, Bishop) => '♗',
            (White, Queen) => '♕',
            (White, King) => '♔',
            (Black, Pawn) => '♟',
            (Black, Rook) => '♜',
            (Black, Knight) => '♞',
            (Black, Bishop) => '♝',
            (Black, Queen) => '♛',
            (Black, King) => '♚',
        }
    }
}
