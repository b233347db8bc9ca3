//! Chess game logic - pure board state and move validation
//!
//! Implements the 8x8 board, per-piece movement rules, and the
//! turn-alternating game state machine as pure synchronous code with no I/O.
//! The HTTP boundary in the `backend` crate is the only consumer; it holds a
//! `Game` behind a mutex and serializes snapshots with the optional `serde`
//! feature.
//!
//! # Module Structure
//!
//! - `piece` - Piece colors, kinds, and display glyphs
//! - `board` - Board grid, starting position, and the `move_piece` mutator
//! - `piece_moves` - Movement rules for each piece type (pure functions)
//! - `game` - Game state combining a board with the side to move
//!
//! # Scope
//!
//! Only movement geometry is validated. There is no check, checkmate, or
//! stalemate detection, no castling, en passant, or promotion, and no rule
//! that a move must keep the mover's own king safe.

pub mod board;
pub mod game;
pub mod piece;
pub mod piece_moves;


// Re-export commonly used items
pub use board::{Board, MoveError, Square};
pub use game::Game;
pub use piece::{Piece, PieceColor, PieceKind};
pub use piece_moves::valid_moves;
