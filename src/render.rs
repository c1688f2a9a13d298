//! Board-to-text rendering for the `boardDisplay` response field
//!
//! Empty cells show their one-based position so a client (human or
//! language model) can name its next move. The 3×3 layout is kept
//! byte-compatible with the original service; larger boards get wider
//! cells for two-digit positions.

use crate::engine::{Board, Cell};

/// Render a board as display text
pub fn board_display(board: &Board) -> String {
    if board.size() > 3 {
        display_large(board)
    } else {
        display_small(board)
    }
}

fn display_small(board: &Board) -> String {
    let size = board.size();
    let mut display = String::new();

    for i in 0..board.cell_count() {
        if i > 0 && i.is_multiple_of(size) {
            display.push_str("\n --------- \n");
        }

        match board.get(i) {
            Cell::X => display.push_str(" X "),
            Cell::O => display.push_str(" O "),
            Cell::Empty => display.push_str(&format!(" {} ", i + 1)),
        }

        if i % size != size - 1 {
            display.push('|');
        }
    }

    display
}

fn display_large(board: &Board) -> String {
    let size = board.size();
    let mut display = String::new();

    for i in 0..board.cell_count() {
        if i > 0 && i.is_multiple_of(size) {
            display.push('\n');
            display.push_str(&"-----".repeat(size));
            display.push('\n');
        }

        match board.get(i) {
            Cell::X => display.push_str("  X "),
            Cell::O => display.push_str("  O "),
            Cell::Empty => display.push_str(&format!(" {:>2} ", i + 1)),
        }

        if i % size != size - 1 {
            display.push('|');
        }
    }

    display
}
