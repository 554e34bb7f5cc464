//! Tic-Tac-Toe AI arena.
//!
//! Two automated players pick moves with a depth-limited minimax search
//! (alpha-beta pruning, heuristic evaluation at the cutoff) and play a
//! series of games against each other; win/tie statistics are tallied
//! across the run and rendered to the terminal.

pub mod core;
pub mod display;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;

mod logic_tests;

pub use crate::core::{Board, Cell, Coord, Mark};
pub use crate::logic::{has_three_in_a_row, winner, GameOutcome, WINNING_LINES};
pub use crate::player::{MinimaxAI, PlayerController};
