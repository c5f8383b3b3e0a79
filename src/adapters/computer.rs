//! Search-backed agent

use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    ports::Agent,
    search::select_move,
    tictactoe::{BoardState, Player},
};

/// Perfect player: random opening on an empty board, full alpha-beta search
/// everywhere else.
pub struct ComputerAgent {
    mark: Player,
    name: String,
    rng: StdRng,
}

impl ComputerAgent {
    /// Create a computer agent with a random seed
    pub fn new(mark: Player) -> Self {
        Self::with_seed(mark, random())
    }

    /// Create a computer agent whose openings are reproducible
    pub fn with_seed(mark: Player, seed: u64) -> Self {
        Self {
            mark,
            name: format!("Computer ({mark})"),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for ComputerAgent {
    fn get_move(&mut self, state: &BoardState) -> Result<usize> {
        select_move(state, self.mark, &mut self.rng)
    }

    fn mark(&self) -> Player {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
