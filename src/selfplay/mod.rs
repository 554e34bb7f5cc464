pub mod config;

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::core::Mark;
use crate::display;
use crate::game::Game;
use crate::logic::GameOutcome;
use crate::player::{MinimaxAI, PlayerController};
use config::ArenaConfig;

#[derive(Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TournamentStats {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub ties: usize,
    pub avg_moves: f64,
    pub games: Vec<GameRecord>,
}

impl TournamentStats {
    pub fn new() -> Self {
        Self {
            total_games: 0,
            x_wins: 0,
            o_wins: 0,
            ties: 0,
            avg_moves: 0.0,
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, record: GameRecord) {
        self.total_games += 1;
        match record.outcome {
            GameOutcome::Win(Mark::X) => self.x_wins += 1,
            GameOutcome::Win(Mark::O) => self.o_wins += 1,
            GameOutcome::Tie => self.ties += 1,
        }
        self.games.push(record);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
    }

    /// Share of `count` among played games, as a percentage.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        count as f64 / self.total_games as f64 * 100.0
    }

    /// Mark with strictly more wins across the tournament, if any.
    pub fn overall_winner(&self) -> Option<Mark> {
        match self.x_wins.cmp(&self.o_wins) {
            std::cmp::Ordering::Greater => Some(Mark::X),
            std::cmp::Ordering::Less => Some(Mark::O),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for TournamentStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Play the configured number of games between two minimax players and
/// aggregate the results, rendering the scoreboard after every game.
pub async fn run_tournament() -> anyhow::Result<TournamentStats> {
    let config = ArenaConfig::get();
    let mut stats = TournamentStats::new();

    let x: Box<dyn PlayerController> = Box::new(MinimaxAI::new(Mark::X, "AI X"));
    let o: Box<dyn PlayerController> = Box::new(MinimaxAI::new(Mark::O, "AI O"));

    for game_num in 1..=config.games_to_play {
        let start_time = Instant::now();

        let mut game = Game::new();
        let (outcome, moves) = game.play(x.as_ref(), o.as_ref()).await?;

        stats.add_result(GameRecord {
            outcome,
            moves,
            time_ms: start_time.elapsed().as_millis(),
        });

        print!(
            "Game {}/{}: {} ({} moves)\r\n\r\n",
            game_num, config.games_to_play, outcome, moves
        );
        display::render_scoreboard(&stats)?;

        sleep(Duration::from_millis(config.pacing.between_games_delay_ms)).await;
    }

    if config.save_results {
        save_results(&stats)?;
    }

    Ok(stats)
}

/// Write the tournament statistics to a timestamped JSON file.
fn save_results(stats: &TournamentStats) -> anyhow::Result<()> {
    let results_dir = "arena_results";
    std::fs::create_dir_all(results_dir)?;

    let filename = format!(
        "{}/tournament_{}.json",
        results_dir,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );

    let file = std::fs::File::create(filename)?;
    serde_json::to_writer(file, stats)?;
    Ok(())
}
