use std::io;
use std::time::Duration;

use crossterm::{execute, terminal};

use tictactoe_arena::display;
use tictactoe_arena::selfplay;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(io::stdout(), terminal::EnterAlternateScreen)?;

    let res = run().await;

    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

async fn run() -> anyhow::Result<()> {
    let stats = selfplay::run_tournament().await?;
    display::render_final(&stats)?;

    // Leave the final scoreboard on screen before tearing the terminal
    // down.
    tokio::time::sleep(Duration::from_secs(5)).await;
    Ok(())
}
