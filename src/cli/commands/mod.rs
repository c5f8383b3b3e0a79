//! Subcommands of the `noughts` binary

pub mod analyze;
pub mod play;
pub mod watch;

use crate::{adapters::ComputerAgent, tictactoe::Player};

/// Computer agent seeded when a seed is configured, randomly otherwise
pub(crate) fn computer_agent(mark: Player, seed: Option<u64>) -> ComputerAgent {
    match seed {
        Some(seed) => ComputerAgent::with_seed(mark, seed),
        None => ComputerAgent::new(mark),
    }
}
