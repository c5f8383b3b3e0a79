//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Error,
    tictactoe::{BoardState, GameOutcome, Move},
};

/// Create a progress bar for a run of self-play games
pub fn create_games_progress(total_games: u64) -> Result<ProgressBar, Error> {
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .map_err(|e| Error::ProgressBarTemplate {
            message: e.to_string(),
        })?
        .progress_chars("=>-");
    let pb = ProgressBar::new(total_games);
    pb.set_style(style);
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Line announcing a move, e.g. `O makes a move to square 4`
pub fn describe_move(mv: &Move) -> String {
    format!("{} makes a move to square {}", mv.player, mv.position)
}

/// Closing line for a finished game
pub fn describe_outcome(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Win(player) => format!("{player} wins!"),
        GameOutcome::Draw => "It's a tie!".to_string(),
    }
}

/// Print a move followed by the board it produced and a blank line
pub fn print_move(mv: &Move, state: &BoardState) {
    println!("{}", describe_move(mv));
    println!("{state}");
    println!();
}
