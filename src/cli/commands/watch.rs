//! Watch command - the computer plays itself

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Serialize;

use super::computer_agent;
use crate::{
    cli::{
        config::{CommonConfig, WatchConfig},
        output::{create_games_progress, describe_outcome, print_kv, print_move, print_section},
    },
    record::{GameRecord, write_records},
    tictactoe::{Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Watch the computer play against itself")]
pub struct WatchArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 10)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print every move of every game instead of a progress bar
    #[arg(long)]
    pub show_moves: bool,

    /// Export game records to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Win/draw counts over a run of games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Play `config.games` computer-vs-computer games and return their records.
///
/// `on_game` is called after each finished game with the running tally.
pub fn run_self_play(
    config: &WatchConfig,
    common: &CommonConfig,
    show_moves: bool,
    mut on_game: impl FnMut(&Tally),
) -> crate::Result<(Tally, Vec<GameRecord>)> {
    let mut x_agent = computer_agent(Player::X, common.agent_seed(0));
    let mut o_agent = computer_agent(Player::O, common.agent_seed(1));
    let mut tally = Tally::default();
    let mut records = Vec::with_capacity(config.games);

    for _ in 0..config.games {
        let mut game = Game::new();
        let outcome = game.play_out(&mut x_agent, &mut o_agent, |mv, state| {
            if show_moves {
                print_move(mv, state);
            }
        })?;
        if show_moves {
            println!("{}\n", describe_outcome(outcome));
        }

        tally.record(outcome);
        records.extend(GameRecord::from_game(&game));
        on_game(&tally);
    }

    Ok((tally, records))
}

pub fn execute(args: WatchArgs) -> Result<()> {
    if args.games == 0 {
        return Err(anyhow!("--games must be at least 1"));
    }

    let config = WatchConfig::default()
        .with_games(args.games)
        .with_progress(!args.show_moves);
    let common = CommonConfig::default().with_seed(args.seed);

    let pb = if config.progress {
        Some(create_games_progress(config.games as u64)?)
    } else {
        None
    };

    let (tally, records) = run_self_play(&config, &common, args.show_moves, |tally| {
        if let Some(pb) = &pb {
            pb.set_message(format!("{} draws", tally.draws));
            pb.inc(1);
        }
    })?;
    if let Some(pb) = pb {
        pb.finish_with_message(format!("{} draws", tally.draws));
    }

    print_section("Self-play results");
    print_kv("Games", &tally.total().to_string());
    print_kv("X wins", &tally.x_wins.to_string());
    print_kv("O wins", &tally.o_wins.to_string());
    print_kv("Draws", &tally.draws.to_string());

    if let Some(path) = &args.export {
        write_records(path, &records)?;
        println!("\nGame records exported to: {}", path.display());
    }

    Ok(())
}
