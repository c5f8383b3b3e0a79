//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::board::{BoardState, Player};
use crate::ports::Agent;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// Where a game stands: `InProgress` until a line is completed or the grid fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Drawn,
}

impl GameStatus {
    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(GameOutcome::Win(player)),
            GameStatus::Drawn => Some(GameOutcome::Draw),
        }
    }
}

/// A game session: the board, who opened, and the moves played so far
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    state: BoardState,
    first_player: Player,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new game with X to open
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    pub fn new_with_player(first_player: Player) -> Self {
        Game {
            state: BoardState::new(),
            first_player,
            moves: Vec::new(),
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The player whose turn it is
    pub fn to_move(&self) -> Player {
        if self.moves.len().is_multiple_of(2) {
            self.first_player
        } else {
            self.first_player.opponent()
        }
    }

    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.state.winner() {
            GameStatus::Won(winner)
        } else if !self.state.has_empty_cell() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// - [`crate::Error::GameOver`] once the game has finished
    /// - [`crate::Error::InvalidPosition`] for an index outside 0-8
    /// - [`crate::Error::InvalidMove`] for an occupied cell
    pub fn play(&mut self, position: usize) -> Result<GameStatus, crate::Error> {
        if self.status() != GameStatus::InProgress {
            return Err(crate::Error::GameOver);
        }
        if position >= 9 {
            return Err(crate::Error::InvalidPosition { position });
        }

        let player = self.to_move();
        if !self.state.apply_move(position, player) {
            return Err(crate::Error::InvalidMove { position });
        }
        self.moves.push(Move { position, player });
        debug!(%player, position, "move applied");

        let status = self.status();
        if let Some(outcome) = status.outcome() {
            info!(?outcome, moves = self.moves.len(), "game finished");
        }
        Ok(status)
    }

    /// Take back the last move, reopening the game if it had finished.
    pub fn undo(&mut self) -> Option<Move> {
        let last = self.moves.pop()?;
        self.state.undo_move(last.position);
        debug!(player = %last.player, position = last.position, "move taken back");
        Some(last)
    }

    /// Alternate between two agents until the game ends.
    ///
    /// `on_move` is called after every applied move with the move and the
    /// resulting board, which lets a presentation layer render progress.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::AgentSeatMismatch`] when an agent's mark is not the
    ///   side it was seated for
    /// - agent failures, and agent moves that are not legal
    pub fn play_out<'a>(
        &mut self,
        x_agent: &'a mut dyn Agent,
        o_agent: &'a mut dyn Agent,
        mut on_move: impl FnMut(&Move, &BoardState),
    ) -> Result<GameOutcome, crate::Error> {
        for (agent, seat) in [(&*x_agent, Player::X), (&*o_agent, Player::O)] {
            if agent.mark() != seat {
                return Err(crate::Error::AgentSeatMismatch {
                    agent: agent.name().to_string(),
                    mark: agent.mark(),
                    seat,
                });
            }
        }

        loop {
            if let Some(outcome) = self.status().outcome() {
                return Ok(outcome);
            }

            let agent = match self.to_move() {
                Player::X => &mut *x_agent,
                Player::O => &mut *o_agent,
            };
            let position = agent.get_move(&self.state)?;
            debug!(agent = agent.name(), position, "agent chose move");
            self.play(position)?;

            if let Some(last) = self.moves.last() {
                on_move(last, &self.state);
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
