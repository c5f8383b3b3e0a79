//! Agent port - abstraction over where moves come from
//!
//! A game session does not care whether a move was typed by a person or
//! computed by the search; it only asks the agent for a position.

use crate::{
    Result,
    tictactoe::{BoardState, Player},
};

/// A source of moves for one side of the board.
///
/// # Examples
///
/// ```
/// use noughts::{ComputerAgent, ports::Agent, tictactoe::{BoardState, Player}};
///
/// let mut agent = ComputerAgent::with_seed(Player::O, 3);
/// let position = agent.get_move(&BoardState::new()).unwrap();
/// assert!(position < 9);
/// ```
pub trait Agent {
    /// Pick the position (0-8) to play on `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced, e.g. the board is full or
    /// the input source was closed.
    fn get_move(&mut self, state: &BoardState) -> Result<usize>;

    /// The mark this agent places
    fn mark(&self) -> Player;

    /// Display name used in logs and summaries
    fn name(&self) -> &str;
}
