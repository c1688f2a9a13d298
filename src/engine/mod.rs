//! The move-selection engine: board model, rules, and the three
//! difficulty-tiered strategies.
//!
//! The engine holds no process-wide state and performs no I/O. Each request
//! builds its own [`GameState`], runs one move-selection + application
//! cycle, and discards the state once the response is assembled, so
//! concurrent requests need no locking.

pub mod board;
pub mod lines;
pub mod search;

pub use board::{Board, Cell, Outcome, Player};
pub use search::{Difficulty, GameState, MAX_DEPTH};
