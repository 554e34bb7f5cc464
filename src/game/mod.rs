use std::time::Duration;

use tokio::time::sleep;

use crate::core::{Board, Mark};
use crate::display;
use crate::logic::{self, GameOutcome};
use crate::player::PlayerController;
use crate::selfplay::config::ArenaConfig;

/// Driver for a single game: alternates turns between the two
/// controllers, renders every move, and halts on the first terminal
/// result.
pub struct Game {
    pub board: Board,
    pub current_player: Mark,
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            current_player: Mark::X,
        }
    }

    /// Play one game to completion with console rendering and pacing.
    ///
    /// Returns the outcome and the number of moves played. Errors only on
    /// terminal I/O failure or a controller refusing to move.
    pub async fn play(
        &mut self,
        x: &dyn PlayerController,
        o: &dyn PlayerController,
    ) -> anyhow::Result<(GameOutcome, usize)> {
        let pacing = ArenaConfig::get().pacing;

        display::render_board(&self.board, Some("New game starting!"))?;
        sleep(Duration::from_millis(pacing.new_game_delay_ms)).await;

        let mut move_count = 0;
        loop {
            let controller: &dyn PlayerController = match self.current_player {
                Mark::X => x,
                Mark::O => o,
            };

            display::render_board(
                &self.board,
                Some(&format!("{} is thinking...", controller.name())),
            )?;
            sleep(Duration::from_millis(pacing.think_delay_ms)).await;

            // The loop only reaches this point on a non-terminal board, so
            // the list is never empty.
            let legal_moves = self.board.empty_cells();
            let coord = controller
                .choose_move(&self.board, &legal_moves)
                .ok_or_else(|| anyhow::anyhow!("{} returned no move", controller.name()))?;

            self.board.place(coord, self.current_player);
            move_count += 1;

            display::render_board(
                &self.board,
                Some(&format!("{} plays {}", controller.name(), coord)),
            )?;

            if let Some(outcome) = logic::outcome(&self.board) {
                let msg = match outcome {
                    GameOutcome::Win(mark) => format!("AI {mark} wins!"),
                    GameOutcome::Tie => "It's a tie!".to_string(),
                };
                display::render_board(&self.board, Some(&msg))?;
                return Ok((outcome, move_count));
            }

            self.current_player = self.current_player.opponent();
            sleep(Duration::from_millis(pacing.move_delay_ms)).await;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
