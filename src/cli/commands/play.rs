//! Play command - a human against the perfect computer opponent

use anyhow::Result;
use clap::Parser;

use super::computer_agent;
use crate::{
    adapters::HumanAgent,
    cli::{
        config::{CommonConfig, PlayConfig},
        output::{describe_outcome, print_move},
    },
    ports::Agent,
    tictactoe::{BoardState, Game, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the computer")]
pub struct PlayArgs {
    /// Mark you play (`x` or `o`); X always moves first
    #[arg(long, default_value = "x")]
    pub human: String,

    /// Random seed for the computer's opening move
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not print the square numbering before the game
    #[arg(long)]
    pub no_guide: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = PlayConfig::default()
        .with_human(Player::parse(&args.human)?)
        .with_show_guide(!args.no_guide);
    let common = CommonConfig::default().with_seed(args.seed);

    let mut human = HumanAgent::stdio(config.human);
    let mut computer = computer_agent(config.computer(), common.agent_seed(0));

    let (x_agent, o_agent): (&mut dyn Agent, &mut dyn Agent) = match config.human {
        Player::X => (&mut human, &mut computer),
        Player::O => (&mut computer, &mut human),
    };

    if config.show_guide {
        println!("{}", BoardState::position_guide());
        println!();
    }

    let mut game = Game::new();
    let outcome = game.play_out(x_agent, o_agent, print_move)?;
    println!("{}", describe_outcome(outcome));

    Ok(())
}
