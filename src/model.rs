//! Wire types for the move-recommendation API
//!
//! Field names and value encodings match the public JSON contract: cells
//! are 0 (empty), 1 (Player 1 / X) and 2 (Player 2 / O), boards are
//! row-major, and `nextPlayer` is -1 once the game is over.

use serde::{Deserialize, Serialize};

/// A move request as posted to `/v1/tictactoe`.
///
/// Everything is optional: an empty request means "open a fresh 3×3 game
/// at Hard difficulty and make the first move".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoveRequest {
    pub board: Option<Vec<i64>>,
    pub board_size: Option<usize>,
    pub difficulty: Option<i64>,
}

/// Response describing the engine's chosen move and the resulting game
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub success: bool,
    pub message: String,
    pub board: Vec<i64>,
    pub board_size: usize,
    pub board_display: String,
    pub game_status: GameStatus,
    /// Wire value of the side due to move next, or -1 when the game is over
    pub next_player: i64,
}

/// Status of the game after the engine's move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing,
    Draw,
    Player1Wins,
    Player2Wins,
}

/// Sentinel `nextPlayer` value once the game has ended
pub const NO_NEXT_PLAYER: i64 = -1;
