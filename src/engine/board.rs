//! Board state representation and basic operations

use std::fmt;

use super::lines::Line;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Wire encoding: 0 (empty), 1 (Player 1 / X), 2 (Player 2 / O)
    pub fn to_int(self) -> i64 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => 2,
        }
    }

    pub fn from_int(value: i64) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::X),
            2 => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Wire encoding: 1 for X (Player 1), 2 for O (Player 2)
    pub fn to_int(self) -> i64 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }
}

/// Terminal result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// An N×N board stored row-major.
///
/// The length of `cells` is always `size * size`; the validation layer
/// rejects anything else before a board is constructed, so the engine
/// never re-checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    size: usize,
}

impl Board {
    /// Create an empty board of the given size
    pub fn empty(size: usize) -> Self {
        Board {
            cells: vec![Cell::Empty; size * size],
            size,
        }
    }

    /// Create a board from pre-validated cells.
    ///
    /// The caller guarantees `cells.len() == size * size`.
    pub fn from_cells(cells: Vec<Cell>, size: usize) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Board { cells, size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get cell at position
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Apply a player's mark at `pos`.
    ///
    /// Succeeds and mutates the cell iff `pos` is in range and the cell is
    /// empty; otherwise leaves the board untouched and returns `false`.
    /// An occupied cell is a soft failure, not an error.
    pub fn apply(&mut self, pos: usize, player: Player) -> bool {
        if pos >= self.cells.len() || self.cells[pos] != Cell::Empty {
            return false;
        }
        self.cells[pos] = player.to_cell();
        true
    }

    /// Clear a cell, reverting a speculative placement during search
    pub fn clear(&mut self, pos: usize) {
        self.cells[pos] = Cell::Empty;
    }

    /// Get all empty positions, in board order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Find the winning player, if any line is fully occupied by one mark.
    ///
    /// Lines are scanned in a stable order (rows, columns, main diagonal,
    /// anti-diagonal); the order only affects short-circuit cost, never the
    /// result, since a legal position has at most one winner.
    pub fn winner(&self) -> Option<Player> {
        for line in Line::all(self.size) {
            if let Some(player) = self.line_winner(line) {
                return Some(player);
            }
        }
        None
    }

    fn line_winner(&self, line: Line) -> Option<Player> {
        let mut positions = line.positions(self.size);
        let first = self.cells[positions.next()?];
        if first == Cell::Empty {
            return None;
        }
        if positions.all(|pos| self.cells[pos] == first) {
            match first {
                Cell::X => Some(Player::X),
                Cell::O => Some(Player::O),
                Cell::Empty => unreachable!(),
            }
        } else {
            None
        }
    }

    /// Resolve the board to a terminal outcome, or `None` while the game
    /// is still ongoing
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(player) = self.winner() {
            Some(Outcome::Win(player))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                write!(f, "{}", self.cells[row * self.size + col].to_char())?;
            }
        }
        Ok(())
    }
}
