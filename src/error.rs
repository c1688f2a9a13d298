//! Error types for the tic-tac-toe API crate

use thiserror::Error;

/// Main error type for the crate.
///
/// Every variant here is a request-validation failure. The engine itself
/// never constructs errors: ordinary game-flow outcomes (full board,
/// finished game) are represented as values, not error conditions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unsupported board size {size} (supported sizes are 3, 4, 5 and 6)")]
    UnsupportedBoardSize { size: usize },

    #[error("invalid board length: expected {expected} cells for a {size}x{size} board, got {got}")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        size: usize,
    },

    #[error("invalid cell value {value} at position {position} (must be 0, 1 or 2)")]
    InvalidCellValue { value: i64, position: usize },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid difficulty {code} (use 1 for Easy, 2 for Medium or 3 for Hard)")]
    InvalidDifficulty { code: i64 },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
