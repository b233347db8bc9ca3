//! HTTP routes: board snapshot query and move command
//!
//! The boundary contract is two endpoints: `GET /board` returns the 8x8
//! grid for rendering, `POST /move` forwards a proposed move to the core
//! and reports `{success, message}` back. Coordinate ranges are validated
//! here, before the core is consulted; the core is never handed an
//! out-of-range square.

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use chess_logic::{Game, Piece, PieceColor, PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    // One shared game per process; every move serializes on this lock so the
    // core's read-then-mutate sequence stays atomic under concurrent requests.
    game: Arc<Mutex<Game>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            game: Arc::new(Mutex::new(Game::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub start: [i16; 2],
    pub end: [i16; 2],
}

#[derive(Serialize)]
pub struct MoveResponse {
    pub success: bool,
    pub message: String,
}

/// The piece occupying one rendered cell.
///
/// Empty cells appear as `null` in `BoardResponse`, not as a `SquareView`.
#[derive(Serialize)]
pub struct SquareView {
    pub kind: PieceKind,
    pub color: PieceColor,
    pub glyph: char,
}

#[derive(Serialize)]
pub struct BoardResponse {
    /// Row 0 first (black's back rank), 8 cells per row.
    pub board: Vec<Vec<Option<SquareView>>>,
    pub turn: PieceColor,
}

pub fn router() -> Router {
    Router::new()
        .route("/board", get(board_snapshot))
        .route("/move", post(attempt_move))
        .with_state(AppState::new())
}

/// Range-check one `[row, col]` pair from the wire.
fn parse_square(pair: [i16; 2]) -> Option<Square> {
    let [row, col] = pair;
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row as u8, col as u8))
    } else {
        None
    }
}

fn view(piece: Piece) -> SquareView {
    SquareView {
        kind: piece.kind,
        color: piece.color,
        glyph: piece.glyph(),
    }
}

async fn board_snapshot(State(state): State<AppState>) -> Json<BoardResponse> {
    let game = state.game.lock().unwrap();
    let board = game
        .board()
        .squares()
        .iter()
        .map(|row| row.iter().map(|cell| cell.map(view)).collect())
        .collect();

    Json(BoardResponse {
        board,
        turn: game.turn(),
    })
}

async fn attempt_move(
    State(state): State<AppState>,
    Json(payload): Json<MoveRequest>,
) -> Json<MoveResponse> {
    let (Some(from), Some(to)) = (parse_square(payload.start), parse_square(payload.end)) else {
        return Json(MoveResponse {
            success: false,
            message: "coordinates out of range".to_string(),
        });
    };

    let mut game = state.game.lock().unwrap();
    match game.make_move(from, to) {
        Ok(()) => {
            info!("move {from:?} -> {to:?} accepted, {:?} to play", game.turn());
            Json(MoveResponse {
                success: true,
                message: "move successful".to_string(),
            })
        }
        Err(err) => Json(MoveResponse {
            success: false,
            message: err.to_string(),
        }),
    }
}
