use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{stdout, Write};

use crate::core::{Board, Cell, Coord, BOARD_SIZE};
use crate::selfplay::TournamentStats;

/// Clear the whole screen and home the cursor (prevents scrolling in the
/// alternate screen).
fn clear_screen() -> anyhow::Result<()> {
    execute!(
        stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    Ok(())
}

/// Redraw the board with an optional status line above it.
pub fn render_board(board: &Board, status: Option<&str>) -> anyhow::Result<()> {
    clear_screen()?;

    print!("=== Tic-Tac-Toe AI Arena ===\r\n");
    if let Some(msg) = status {
        print!("{}\r\n", msg.bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    for row in 0..BOARD_SIZE {
        print!("  ");
        for col in 0..BOARD_SIZE {
            match board.get(Coord::new(row, col)) {
                Cell::X => print!(" {} ", "X".red().bold()),
                Cell::O => print!(" {} ", "O".cyan().bold()),
                Cell::Empty => print!("   "),
            }
            if col + 1 < BOARD_SIZE {
                print!("|");
            }
        }
        print!("\r\n");
        if row + 1 < BOARD_SIZE {
            print!("  -----------\r\n");
        }
    }
    print!("\r\n");

    stdout().flush()?;
    Ok(())
}

/// Running win/tie tallies with percentages, printed below the board.
pub fn render_scoreboard(stats: &TournamentStats) -> anyhow::Result<()> {
    print!("--- Current Scoreboard ---\r\n");
    print!("Games played: {}\r\n", stats.total_games);
    print!(
        "AI X wins: {} ({:.1}%)\r\n",
        stats.x_wins,
        stats.percent(stats.x_wins)
    );
    print!(
        "AI O wins: {} ({:.1}%)\r\n",
        stats.o_wins,
        stats.percent(stats.o_wins)
    );
    print!("Ties: {} ({:.1}%)\r\n", stats.ties, stats.percent(stats.ties));
    print!("--------------------------\r\n");

    stdout().flush()?;
    Ok(())
}

/// Final tournament summary with the overall winner.
pub fn render_final(stats: &TournamentStats) -> anyhow::Result<()> {
    clear_screen()?;

    print!("{}\r\n\r\n", "=== Final Results ===".bold());
    render_scoreboard(stats)?;

    let closing = match stats.overall_winner() {
        Some(mark) => format!("AI {mark} is the overall winner!"),
        None => "The tournament ends in a tie!".to_string(),
    };
    print!("\r\n{}\r\n", closing.bold().green());

    stdout().flush()?;
    Ok(())
}
