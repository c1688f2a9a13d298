//! Request validation and response assembly
//!
//! This layer owns every precondition the engine assumes: board length and
//! cell values, supported sizes, piece-count parity, difficulty codes. The
//! engine itself never re-validates. [`respond`] is a pure function from a
//! decoded request to a response; the HTTP layer only decodes, calls it,
//! and encodes.

use rand::Rng;

use crate::engine::{Board, Cell, Difficulty, GameState, Outcome, Player};
use crate::error::{Error, Result};
use crate::model::{GameStatus, MoveRequest, MoveResponse, NO_NEXT_PLAYER};
use crate::render::board_display;

/// Client-facing rejection text, kept stable for existing integrations.
pub const MISSING_BOARD: &str = "Missing board value. Must have exactly 9 (3x3) or 16 (4x4) or 25 (5x5) or 36 (6x6) numbers (0, 1, or 2); 0 (empty), 1 (Player 1), 2 (Player 2).";
pub const INVALID_DIFFICULTY: &str = "Invalid difficulty: Use 1 (Easy), 2 (Medium), or 3 (Hard). Default is 3 (Hard) if not provided.";
pub const INVALID_BOARD_SIZE: &str = "The supported boardSize values are 3, 4, 5 and 6.";
pub const INVALID_BOARD: &str = "Invalid board: Must have exactly 9 numbers (0, 1, or 2); 0 (empty), 1 (Player 1), 2 (Player 2); Player 1 moves >= Player 2 moves; max difference: 1.";

const FIRST_MOVE_NOTE: &str = " Please note: If the user is playing with 'X', disregard this move. Instead, ask the user where they would like to place their first move, then present the game board reflecting their choice.";

/// Map a validation error to its client-facing rejection text
pub fn rejection_message(error: &Error) -> &'static str {
    match error {
        Error::UnsupportedBoardSize { .. } => INVALID_BOARD_SIZE,
        Error::InvalidBoardLength { .. } | Error::InvalidCellValue { .. } => MISSING_BOARD,
        Error::InvalidPieceCounts { .. } => INVALID_BOARD,
        Error::InvalidDifficulty { .. } => INVALID_DIFFICULTY,
    }
}

/// Validate a request and compute the engine's move.
///
/// The RNG only matters for the Easy and Medium tiers; Hard is fully
/// deterministic. Each call builds a fresh [`GameState`], so concurrent
/// requests never share anything.
///
/// # Errors
///
/// Returns a validation error for an unsupported size, a malformed board,
/// inconsistent piece counts, or an unknown difficulty code. A strategy
/// picking an occupied cell is not an error: it is reported in the
/// response as `success = false`.
pub fn respond<R: Rng + ?Sized>(request: &MoveRequest, rng: &mut R) -> Result<MoveResponse> {
    let size = match request.board_size {
        None | Some(0) => 3,
        Some(size) if (3..=6).contains(&size) => size,
        Some(size) => return Err(Error::UnsupportedBoardSize { size }),
    };

    let board = parse_board(request.board.as_deref(), size)?;
    let current_player = current_player_from_counts(&board)?;
    let difficulty = Difficulty::from_request_code(request.difficulty.unwrap_or(0))?;

    let mut state = GameState::new(board, current_player, difficulty);

    let mut success = false;
    let mut message = "Game Over.".to_string();

    if let Some(pos) = state.choose_move(rng) {
        success = state.play(pos);
        if success {
            message = placement_message(current_player, pos);
            if is_first_move(state.board()) {
                message.push_str(FIRST_MOVE_NOTE);
            }
        } else {
            message = "Invalid move.".to_string();
        }
    }

    let (game_status, next_player) = match state.board().outcome() {
        Some(Outcome::Win(Player::X)) => (GameStatus::Player1Wins, NO_NEXT_PLAYER),
        Some(Outcome::Win(Player::O)) => (GameStatus::Player2Wins, NO_NEXT_PLAYER),
        Some(Outcome::Draw) => (GameStatus::Draw, NO_NEXT_PLAYER),
        None => (GameStatus::Ongoing, current_player.opponent().to_int()),
    };

    Ok(MoveResponse {
        success,
        message,
        board: state.board().cells().iter().map(|c| c.to_int()).collect(),
        board_size: size,
        board_display: board_display(state.board()),
        game_status,
        next_player,
    })
}

fn parse_board(values: Option<&[i64]>, size: usize) -> Result<Board> {
    let expected = size * size;
    let Some(values) = values else {
        return Ok(Board::empty(size));
    };

    if values.len() != expected {
        return Err(Error::InvalidBoardLength {
            expected,
            got: values.len(),
            size,
        });
    }

    let mut cells = Vec::with_capacity(expected);
    for (position, &value) in values.iter().enumerate() {
        let cell =
            Cell::from_int(value).ok_or(Error::InvalidCellValue { value, position })?;
        cells.push(cell);
    }

    Ok(Board::from_cells(cells, size))
}

/// Derive the side to move from piece-count parity: equal counts mean X is
/// due, X ahead by one means O is due, anything else is an invalid board.
fn current_player_from_counts(board: &Board) -> Result<Player> {
    let x_count = board.cells().iter().filter(|&&c| c == Cell::X).count();
    let o_count = board.cells().iter().filter(|&&c| c == Cell::O).count();

    if x_count == o_count {
        Ok(Player::X)
    } else if x_count == o_count + 1 {
        Ok(Player::O)
    } else {
        Err(Error::InvalidPieceCounts { x_count, o_count })
    }
}

fn placement_message(player: Player, pos: usize) -> String {
    let mark = match player {
        Player::X => "'X'",
        Player::O => "'O'",
    };
    format!(
        "Player {} has placed {} in position {}.",
        player.to_int(),
        mark,
        pos + 1
    )
}

/// True while the board holds at most one mark, i.e. the engine just
/// opened the game.
fn is_first_move(board: &Board) -> bool {
    board
        .cells()
        .iter()
        .filter(|&&c| c != Cell::Empty)
        .count()
        <= 1
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn request(board: Option<Vec<i64>>, size: Option<usize>, difficulty: Option<i64>) -> MoveRequest {
        MoveRequest {
            board,
            board_size: size,
            difficulty,
        }
    }

    #[test]
    fn test_empty_request_opens_hard_game() {
        let response = respond(&MoveRequest::default(), &mut rng()).unwrap();

        assert!(response.success);
        assert_eq!(response.board_size, 3);
        assert_eq!(response.board[0], 1);
        assert_eq!(response.board.iter().filter(|&&c| c != 0).count(), 1);
        assert_eq!(response.game_status, GameStatus::Ongoing);
        assert_eq!(response.next_player, 2);
        assert!(response.message.starts_with("Player 1 has placed 'X' in position 1."));
        assert!(response.message.contains("disregard this move"));
    }

    #[test]
    fn test_parity_selects_o_when_x_is_ahead() {
        // X just moved, so the engine answers as O
        let response = respond(
            &request(Some(vec![1, 0, 0, 0, 0, 0, 0, 0, 0]), None, Some(3)),
            &mut rng(),
        )
        .unwrap();

        assert!(response.success);
        assert!(response.message.starts_with("Player 2 has placed 'O'"));
        assert_eq!(response.board.iter().filter(|&&c| c == 2).count(), 1);
    }

    #[test]
    fn test_rejects_unbalanced_piece_counts() {
        let result = respond(
            &request(Some(vec![1, 1, 1, 0, 0, 0, 0, 0, 0]), None, None),
            &mut rng(),
        );
        assert!(matches!(
            result,
            Err(Error::InvalidPieceCounts {
                x_count: 3,
                o_count: 0
            })
        ));
    }

    #[test]
    fn test_rejects_wrong_board_length() {
        let result = respond(&request(Some(vec![0, 0, 0]), None, None), &mut rng());
        assert!(matches!(result, Err(Error::InvalidBoardLength { .. })));
    }

    #[test]
    fn test_rejects_unknown_cell_values() {
        let result = respond(
            &request(Some(vec![0, 0, 0, 0, 7, 0, 0, 0, 0]), None, None),
            &mut rng(),
        );
        assert!(matches!(
            result,
            Err(Error::InvalidCellValue {
                value: 7,
                position: 4
            })
        ));
    }

    #[test]
    fn test_rejects_oversized_board() {
        let result = respond(&request(None, Some(7), None), &mut rng());
        assert!(matches!(result, Err(Error::UnsupportedBoardSize { size: 7 })));
        assert_eq!(
            rejection_message(&result.unwrap_err()),
            INVALID_BOARD_SIZE
        );
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        let result = respond(&request(None, None, Some(9)), &mut rng());
        assert!(matches!(result, Err(Error::InvalidDifficulty { code: 9 })));
        assert_eq!(rejection_message(&result.unwrap_err()), INVALID_DIFFICULTY);
    }

    #[test]
    fn test_win_is_reported_for_the_winning_side() {
        // O completes the top row; the engine moves for O by parity
        let response = respond(
            &request(Some(vec![2, 2, 0, 0, 1, 0, 0, 1, 1]), None, Some(3)),
            &mut rng(),
        )
        .unwrap();

        assert!(response.success);
        assert_eq!(response.board[2], 2);
        assert_eq!(response.game_status, GameStatus::Player2Wins);
        assert_eq!(response.next_player, NO_NEXT_PLAYER);
    }

    #[test]
    fn test_full_board_reports_game_over() {
        let response = respond(
            &request(Some(vec![1, 2, 1, 1, 2, 2, 2, 1, 1]), None, Some(1)),
            &mut rng(),
        )
        .unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "Game Over.");
        assert_eq!(response.game_status, GameStatus::Draw);
        assert_eq!(response.next_player, NO_NEXT_PLAYER);
    }

    #[test]
    fn test_default_board_for_larger_sizes() {
        let response = respond(&request(None, Some(5), Some(2)), &mut rng()).unwrap();
        assert_eq!(response.board.len(), 25);
        assert_eq!(response.board_size, 5);
        assert_eq!(response.game_status, GameStatus::Ongoing);
    }

    #[test]
    fn test_reported_status_matches_reapplied_move() {
        // Round-trip: replay the reported move on the pre-move board and
        // re-derive the outcome independently.
        let before = vec![1, 0, 0, 0, 2, 0, 0, 0, 0];
        let response = respond(&request(Some(before.clone()), None, Some(3)), &mut rng()).unwrap();

        let moved_at = response
            .board
            .iter()
            .zip(before.iter())
            .position(|(after, before)| after != before)
            .expect("exactly one cell must change");

        let mut replay = parse_board(Some(&before), 3).unwrap();
        let mover = current_player_from_counts(&replay).unwrap();
        assert!(replay.apply(moved_at, mover));

        let expected = match replay.outcome() {
            Some(Outcome::Win(Player::X)) => GameStatus::Player1Wins,
            Some(Outcome::Win(Player::O)) => GameStatus::Player2Wins,
            Some(Outcome::Draw) => GameStatus::Draw,
            None => GameStatus::Ongoing,
        };
        assert_eq!(response.game_status, expected);
    }
}
