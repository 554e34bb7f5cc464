//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search walks a single board in place: place a trial mark, recurse,
//! clear it again. Terminal positions are scored by distance (faster wins
//! and slower losses score better); positions at the depth cutoff fall
//! back to the static evaluator.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::eval::evaluate;
use crate::core::{Board, Coord, Mark};
use crate::logic::has_three_in_a_row;
use crate::player::PlayerController;

/// Score of a win found at depth 0; a win at depth d scores `1000 - d`
/// and a loss `-1000 + d`, so the search prefers the fastest win and the
/// slowest loss. Always dominates the static evaluator's range.
const WIN_SCORE: i32 = 1000;

/// Plies searched exactly before falling back to the static evaluator.
const DEPTH_LIMIT: usize = 5;

/// Minimax score of `board` for `player`, `depth` plies below the root.
///
/// `maximizing` selects whose mark the next trial move places: `player`'s
/// when maximizing, `opponent`'s when minimizing. Terminal and cutoff
/// checks run in a fixed priority order: player win, opponent win, full
/// board, depth cutoff, then recursion over the empty cells in row-major
/// order.
///
/// The board is restored before every return; after the call it is
/// bit-identical to what was passed in.
pub fn search(
    board: &mut Board,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    player: Mark,
    opponent: Mark,
) -> i32 {
    if has_three_in_a_row(board, player) {
        return WIN_SCORE - depth as i32;
    }
    if has_three_in_a_row(board, opponent) {
        return -WIN_SCORE + depth as i32;
    }
    if board.is_full() {
        return 0;
    }
    if depth >= DEPTH_LIMIT {
        return evaluate(board, player, opponent);
    }

    if maximizing {
        let mut best = i32::MIN;
        for coord in board.empty_cells() {
            board.place(coord, player);
            let score = search(board, depth + 1, alpha, beta, false, player, opponent);
            board.clear(coord);
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for coord in board.empty_cells() {
            board.place(coord, opponent);
            let score = search(board, depth + 1, alpha, beta, true, player, opponent);
            board.clear(coord);
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Automated player backed by the alpha-beta search.
///
/// Ties between equally scored root moves are broken uniformly at random;
/// the RNG is owned by the player so tests can seed it.
pub struct MinimaxAI {
    mark: Mark,
    name: String,
    rng: RefCell<StdRng>,
}

impl MinimaxAI {
    pub fn new(mark: Mark, name: &str) -> Self {
        Self {
            mark,
            name: name.to_string(),
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Seeded variant for reproducible runs and tests.
    pub fn with_seed(mark: Mark, name: &str, seed: u64) -> Self {
        Self {
            mark,
            name: name.to_string(),
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Score every legal move and return the best score together with all
    /// moves tied for it (exact equality), in row-major order.
    ///
    /// Each root candidate is searched with a fresh full alpha-beta
    /// window. A shared root window would prune more but changes which
    /// moves end up tied; the per-candidate window is kept for
    /// output-compatible move choice.
    pub fn best_moves(&self, board: &Board) -> (i32, Vec<Coord>) {
        let opponent = self.mark.opponent();
        let mut scratch = *board;
        let mut best_score = i32::MIN;
        let mut best = Vec::new();

        for coord in board.empty_cells() {
            scratch.place(coord, self.mark);
            let score = search(
                &mut scratch,
                0,
                i32::MIN,
                i32::MAX,
                false,
                self.mark,
                opponent,
            );
            scratch.clear(coord);

            if score > best_score {
                best_score = score;
                best.clear();
                best.push(coord);
            } else if score == best_score {
                best.push(coord);
            }
        }

        (best_score, best)
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board, legal_moves: &[Coord]) -> Option<Coord> {
        if legal_moves.is_empty() {
            return None;
        }
        let (_, best) = self.best_moves(board);
        best.choose(&mut *self.rng.borrow_mut()).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
