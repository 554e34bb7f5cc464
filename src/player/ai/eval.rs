//! # Evaluation Module
//!
//! Static evaluation of a non-terminal board from one mark's perspective.
//! Used only when the search reaches its depth cutoff; the search handles
//! completed lines and full boards before falling back to this heuristic.
//!
//! ## Scoring Strategy
//! 1. **Line potential**: each of the 8 winning lines contributes by how
//!    far the player has progressed along it, and penalizes an opponent
//!    line that is one move from completion.
//! 2. **Positional bonus**: the center and the four corners are worth
//!    extra since they participate in the most lines.
//!
//! The line and positional bonuses overlap deliberately (the center sits
//! on four lines); the double counting is part of the tuning.

use crate::core::{Board, Cell, Mark};
use crate::logic::WINNING_LINES;

// Line values (hand-tuned, do not retune casually)
const LINE_COMPLETE: i32 = 100;
const LINE_TWO_OPEN: i32 = 10;
const LINE_ONE_OPEN: i32 = 1;
/// Penalty when the opponent is one move from completing a line.
const OPPONENT_THREAT: i32 = 10;

// Positional bonuses
const CENTER_BONUS: i32 = 5;
const CORNER_BONUS: i32 = 3;

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Heuristic score of `board` from `player`'s perspective.
///
/// Positive favors `player`, negative favors `opponent`. Never called on
/// a board where either mark already has three in a row.
pub fn evaluate(board: &Board, player: Mark, opponent: Mark) -> i32 {
    let player_cell = Cell::from(player);
    let opponent_cell = Cell::from(opponent);
    let mut score = 0;

    for line in &WINNING_LINES {
        let mut player_count = 0;
        let mut opponent_count = 0;
        let mut empty_count = 0;

        for &idx in line {
            let cell = board.cells[idx];
            if cell == player_cell {
                player_count += 1;
            } else if cell == opponent_cell {
                opponent_count += 1;
            } else {
                empty_count += 1;
            }
        }

        if player_count == 3 {
            score += LINE_COMPLETE;
        } else if player_count == 2 && empty_count == 1 {
            score += LINE_TWO_OPEN;
        } else if player_count == 1 && empty_count == 2 {
            score += LINE_ONE_OPEN;
        }

        // Independent of the terms above; a 3-cell line cannot hold two of
        // each mark, so both can never fire on the same line.
        if opponent_count == 2 && empty_count == 1 {
            score -= OPPONENT_THREAT;
        }
    }

    if board.cells[CENTER] == player_cell {
        score += CENTER_BONUS;
    }
    for &corner in &CORNERS {
        if board.cells[corner] == player_cell {
            score += CORNER_BONUS;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    #[test]
    fn test_empty_board_is_neutral() {
        assert_eq!(evaluate(&Board::new(), Mark::X, Mark::O), 0);
    }

    #[test]
    fn test_center_bonus_and_open_lines() {
        let mut board = Board::new();
        board.place(Coord::new(1, 1), Mark::X);

        // Center sits on 4 lines (one each at +1) plus the center bonus.
        assert_eq!(evaluate(&board, Mark::X, Mark::O), 4 * LINE_ONE_OPEN + CENTER_BONUS);
    }

    #[test]
    fn test_corner_bonus() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Mark::X);

        // A corner sits on 3 lines plus the corner bonus.
        assert_eq!(evaluate(&board, Mark::X, Mark::O), 3 * LINE_ONE_OPEN + CORNER_BONUS);
    }

    #[test]
    fn test_two_in_a_row_with_open_end() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Mark::X);
        board.place(Coord::new(0, 1), Mark::X);

        // Top row: 2 + empty (+10). Columns 0 and 1 and the main diagonal
        // each hold one X with two empties (+1 each). Corner (0,0): +3.
        assert_eq!(
            evaluate(&board, Mark::X, Mark::O),
            LINE_TWO_OPEN + 3 * LINE_ONE_OPEN + CORNER_BONUS
        );
    }

    #[test]
    fn test_opponent_threat_penalty() {
        let mut board = Board::new();
        board.place(Coord::new(1, 0), Mark::O);
        board.place(Coord::new(1, 1), Mark::O);

        // From X's perspective the middle row is one O short of a loss.
        // O's other line participations contribute nothing for X.
        assert_eq!(evaluate(&board, Mark::X, Mark::O), -OPPONENT_THREAT);
    }

    #[test]
    fn test_perspective_is_antisymmetric_on_threats() {
        let mut board = Board::new();
        board.place(Coord::new(1, 0), Mark::O);
        board.place(Coord::new(1, 1), Mark::O);

        // Same position from O's perspective is a strength, not a penalty.
        assert!(evaluate(&board, Mark::O, Mark::X) > 0);
    }
}
