use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Board, Cell, Mark};

/// The 8 winning index triples: rows, columns, then the two diagonals
/// ((0,0)(1,1)(2,2) and (0,2)(1,1)(2,0)).
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// True iff any winning line is uniformly `mark`.
pub fn has_three_in_a_row(board: &Board, mark: Mark) -> bool {
    let target = Cell::from(mark);
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| board.cells[idx] == target))
}

/// The mark holding a completed line, if any. Checked for both marks so a
/// full board with a completed line still reports the win.
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_three_in_a_row(board, mark))
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Tie,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameOutcome::Win(mark) => write!(f, "{mark} wins"),
            GameOutcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Terminal check for the game loop. Winner takes precedence over
/// fullness; `None` means the game continues.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if let Some(mark) = winner(board) {
        Some(GameOutcome::Win(mark))
    } else if board.is_full() {
        Some(GameOutcome::Tie)
    } else {
        None
    }
}
