//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Common configuration shared across commands
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducible computer openings
    pub seed: Option<u64>,

    /// Verbose diagnostics
    pub verbose: bool,
}

impl CommonConfig {
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Seed for the agent at `slot`, derived from the base seed so two
    /// computer agents in one session do not mirror each other.
    pub fn agent_seed(&self, slot: u64) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(slot))
    }
}

/// Interactive game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Mark played by the human; the computer takes the other one
    pub human: Player,

    /// Whether to print the square numbering before the first move
    pub show_guide: bool,
}

impl PlayConfig {
    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    pub fn with_show_guide(mut self, show_guide: bool) -> Self {
        self.show_guide = show_guide;
        self
    }

    pub fn computer(&self) -> Player {
        self.human.opponent()
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: Player::X,
            show_guide: true,
        }
    }
}

/// Computer self-play configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Number of games to play
    pub games: usize,

    /// Whether to show a progress bar
    pub progress: bool,
}

impl WatchConfig {
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            progress: true,
        }
    }
}
