//! Stateless move-recommendation API for generalized N×N tic-tac-toe
//!
//! This crate provides:
//! - A board/rules engine for boards of size 3 through 6
//! - Three difficulty-tiered move strategies: uniform random, one-ply
//!   tactical (win, then block), and minimax with alpha-beta pruning and a
//!   depth-limited positional heuristic on boards larger than 3×3
//! - Request validation, the JSON wire model, and board-to-text rendering
//! - A thin axum HTTP surface serving one move endpoint and the static
//!   plugin assets
//!
//! The caller is the sole holder of game state: every request carries the
//! full board, the engine answers with one move, and nothing survives the
//! request/response cycle.

pub mod api;
pub mod engine;
pub mod error;
pub mod http;
pub mod model;
pub mod render;

pub use engine::{Board, Cell, Difficulty, GameState, Outcome, Player};
pub use error::{Error, Result};
pub use model::{GameStatus, MoveRequest, MoveResponse};
