//! Winning line enumeration for arbitrary board sizes
//!
//! A line is a row, a column, or one of the two full diagonals. Every check
//! in the crate (win detection, the positional heuristic) walks the same
//! enumeration, parameterized by board size, so one routine serves every
//! supported dimension.

use super::board::{Board, Cell, Player};

/// One winnable line on an N×N board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl Line {
    /// All lines of a board, in stable scan order: rows, then columns,
    /// then the main diagonal, then the anti-diagonal
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Col))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    /// Cell indices of this line, in row-major traversal order
    pub fn positions(self, size: usize) -> impl Iterator<Item = usize> {
        (0..size).map(move |i| match self {
            Line::Row(row) => row * size + i,
            Line::Col(col) => i * size + col,
            Line::MainDiagonal => i * size + i,
            Line::AntiDiagonal => i * size + (size - 1 - i),
        })
    }
}

/// Count the player's potential wins: lines that contain no opposing mark
/// and have exactly one empty cell remaining, i.e. lines still winnable
/// with a single move.
pub fn potential_wins(board: &Board, player: Player) -> usize {
    let opponent = player.opponent().to_cell();
    Line::all(board.size())
        .filter(|line| {
            let mut empty = 0;
            for pos in line.positions(board.size()) {
                match board.get(pos) {
                    cell if cell == opponent => return false,
                    Cell::Empty => empty += 1,
                    _ => {}
                }
            }
            empty == 1
        })
        .count()
}
