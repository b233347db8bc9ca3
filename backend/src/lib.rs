//! HTTP boundary for the chess service
//!
//! Thin presentation layer over the `chess-logic` core: one route to read
//! the board snapshot, one to attempt a move. All domain logic lives in the
//! core; this crate only validates coordinate ranges, serializes state, and
//! guards the shared game with a mutex.

pub mod api;
