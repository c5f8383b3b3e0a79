//! Analyze command - search a single position and report the best move

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{print_kv, print_section},
    search::{SearchStats, Searcher},
    tictactoe::{BoardState, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Find the best move in a position")]
pub struct AnalyzeArgs {
    /// Board as 9 cells, row by row: X, O and `.` for empty (e.g. "XX.OO....")
    pub board: String,

    /// Side to move (`x` or `o`); inferred from piece counts when omitted
    #[arg(long)]
    pub to_move: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Value of a position for the side to move under perfect play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Win,
    Draw,
    Loss,
}

impl Verdict {
    fn from_score(score: i32) -> Self {
        match score {
            s if s > 0 => Verdict::Win,
            0 => Verdict::Draw,
            _ => Verdict::Loss,
        }
    }
}

/// Everything the analyze command reports about one position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub board: String,
    pub to_move: Player,
    pub terminal: bool,
    pub position: Option<usize>,
    pub score: i32,
    pub verdict: Verdict,
    pub stats: SearchStats,
}

/// Search `state` with `to_move` as the maximizing side.
pub fn analyze_board(state: &BoardState, to_move: Player) -> AnalysisReport {
    let mut scratch = *state;
    let mut searcher = Searcher::new(to_move);
    let result = searcher.best_move(&mut scratch);

    AnalysisReport {
        board: state.encode(),
        to_move,
        terminal: state.winner().is_some() || !state.has_empty_cell(),
        position: result.position,
        score: result.score,
        verdict: Verdict::from_score(result.score),
        stats: searcher.stats(),
    }
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let state = BoardState::from_string(&args.board)?;
    let to_move = match &args.to_move {
        Some(token) => Player::parse(token)?,
        None => state.side_to_move(),
    };

    let report = analyze_board(&state, to_move);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{state}");
    print_section("Analysis");
    print_kv("To move", &report.to_move.to_string());
    if report.terminal {
        print_kv("Status", "game is already over");
        return Ok(());
    }
    if let Some(position) = report.position {
        print_kv(
            "Best move",
            &format!("{position} (row {}, col {})", position / 3, position % 3),
        );
    }
    print_kv("Score", &report.score.to_string());
    print_kv("Verdict", &format!("{:?}", report.verdict).to_lowercase());
    print_kv("Nodes searched", &report.stats.nodes.to_string());
    print_kv("Cutoffs", &report.stats.cutoffs.to_string());

    Ok(())
}
