pub mod eval;
pub mod minimax;

pub use minimax::MinimaxAI;
