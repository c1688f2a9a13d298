//! Move selection: the three difficulty-tiered strategies
//!
//! All strategies share one contract: given a game state, produce a single
//! cell index for the side to move, or `None` when the board is full. The
//! state is borrowed mutably because search speculatively places marks, but
//! every placement is reverted on every return path, so the board is
//! restored exactly before the strategy returns.

use rand::Rng;
use rand::prelude::IndexedRandom;

use super::board::{Board, Outcome, Player};
use super::lines::potential_wins;
use crate::error::{Error, Result};

/// Fixed heuristic cutoff for boards larger than 3×3. Search on a 3×3
/// board always runs to terminal states; exhaustive search on bigger
/// boards is combinatorially infeasible within request latency.
pub const MAX_DEPTH: u32 = 6;

/// Difficulty tier, selecting one of the three strategies.
///
/// The discriminants are the wire values of the move-request contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy = 101,
    Medium = 102,
    Hard = 103,
}

impl Difficulty {
    /// Map the public request code to a tier: 1 Easy, 2 Medium, 3 Hard,
    /// 0 (absent) defaulting to Hard.
    pub fn from_request_code(code: i64) -> Result<Difficulty> {
        match code {
            0 | 3 => Ok(Difficulty::Hard),
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            _ => Err(Error::InvalidDifficulty { code }),
        }
    }
}

/// Request-scoped game state: one board, the side about to move, and the
/// strategy tier. Built fresh per request, mutated in place during search,
/// discarded once the response is assembled.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    current_player: Player,
    difficulty: Difficulty,
}

impl GameState {
    pub fn new(board: Board, current_player: Player, difficulty: Difficulty) -> Self {
        GameState {
            board,
            current_player,
            difficulty,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Apply the chosen move for the side to move.
    ///
    /// Returns `false` without mutating anything if the cell is occupied or
    /// out of range; the caller reports that as a soft failure.
    pub fn play(&mut self, pos: usize) -> bool {
        self.board.apply(pos, self.current_player)
    }

    /// Choose a move for the current player according to the difficulty
    /// tier. Returns `None` exactly when the board is full.
    pub fn choose_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        match self.difficulty {
            Difficulty::Easy => self.random_move(rng),
            Difficulty::Medium => self.tactical_move(rng),
            Difficulty::Hard => self.best_move(),
        }
    }

    /// Uniform-random choice among the empty cells.
    ///
    /// Enumerates emptiness once instead of probing cells repeatedly, so a
    /// nearly full board costs the same as an empty one.
    fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        self.board.empty_positions().choose(rng).copied()
    }

    /// One-ply lookahead: take an immediate win, else block an immediate
    /// opponent win, else fall back to random. Both scans run in board
    /// order and return the first hit, a deliberate tie-break.
    fn tactical_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if let Some(pos) = self.first_winning_cell(self.current_player) {
            return Some(pos);
        }
        if let Some(pos) = self.first_winning_cell(self.current_player.opponent()) {
            return Some(pos);
        }
        self.random_move(rng)
    }

    /// First cell, in board order, whose occupation by `player` produces an
    /// immediate win. Each probe is reverted before the next.
    fn first_winning_cell(&mut self, player: Player) -> Option<usize> {
        for pos in 0..self.board.cell_count() {
            if !self.board.apply(pos, player) {
                continue;
            }
            let wins = self.board.winner().is_some();
            self.board.clear(pos);
            if wins {
                return Some(pos);
            }
        }
        None
    }

    /// Full minimax with alpha-beta pruning.
    ///
    /// The root iterates empty cells in board order and replaces the
    /// running best only on strict improvement, so ties keep the first
    /// scanned move and repeated invocations are fully deterministic.
    fn best_move(&mut self) -> Option<usize> {
        let mut best_score = i32::MIN;
        let mut best_move = None;

        for pos in 0..self.board.cell_count() {
            if !self.board.apply(pos, self.current_player) {
                continue;
            }
            let score = self.minimax(0, false, i32::MIN, i32::MAX);
            self.board.clear(pos);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        best_move
    }

    /// Recursive game-tree evaluation from the searching side's
    /// perspective.
    ///
    /// `alpha` is the best value the maximizer can already guarantee and
    /// `beta` the best value the minimizer can; remaining siblings are
    /// pruned as soon as `beta <= alpha`. On boards larger than 3×3 the
    /// recursion stops at [`MAX_DEPTH`] and returns the static heuristic
    /// instead of continuing to search.
    fn minimax(&mut self, depth: u32, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        if self.board.size() > 3 && depth == MAX_DEPTH {
            return self.heuristic();
        }
        if let Some(outcome) = self.board.outcome() {
            return self.terminal_score(outcome, depth);
        }

        let placing = if maximizing {
            self.current_player
        } else {
            self.current_player.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in 0..self.board.cell_count() {
            if !self.board.apply(pos, placing) {
                continue;
            }
            let score = self.minimax(depth + 1, !maximizing, alpha, beta);
            self.board.clear(pos);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }

    /// Score a genuine terminal position. Wins prefer fewer plies and
    /// losses prefer more, hence the depth adjustment.
    fn terminal_score(&self, outcome: Outcome, depth: u32) -> i32 {
        match outcome {
            Outcome::Win(player) if player == self.current_player => {
                self.terminal_base() - depth as i32
            }
            Outcome::Win(_) => depth as i32 - self.terminal_base(),
            Outcome::Draw => 0,
        }
    }

    /// Base magnitude for terminal scores.
    ///
    /// Must dominate every heuristic value even after the depth
    /// adjustment: the heuristic is bounded by the line count (2N+2 ≤ N²)
    /// and depth never exceeds N², so `2·N² + 1` keeps the weakest
    /// terminal win strictly above the strongest heuristic estimate.
    fn terminal_base(&self) -> i32 {
        2 * self.board.cell_count() as i32 + 1
    }

    /// Static positional estimate used at the depth cutoff: potential wins
    /// for the searching side minus potential wins for the opponent.
    fn heuristic(&self) -> i32 {
        let own = potential_wins(&self.board, self.current_player);
        let opponent = potential_wins(&self.board, self.current_player.opponent());
        own as i32 - opponent as i32
    }
}
