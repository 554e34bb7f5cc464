use crate::core::{Board, Coord};

/// Interface between the game loop and a player implementation.
///
/// `legal_moves` is the row-major list of empty cells; the controller
/// returns one of them, or `None` to resign (no legal move available).
pub trait PlayerController {
    fn choose_move(&self, board: &Board, legal_moves: &[Coord]) -> Option<Coord>;
    fn name(&self) -> &str;
}
