//! Tic-Tac-Toe against a perfect opponent
//!
//! This crate provides:
//! - The board model with local win detection through the last-played cell
//! - Minimax search with alpha-beta pruning for the computer's moves
//! - Interactive and search-backed agents behind a single `Agent` port
//! - Game sessions, JSON game records and the `noughts` command line

pub mod adapters;
pub mod cli;
pub mod error;
pub mod ports;
pub mod record;
pub mod search;
pub mod tictactoe;

pub use adapters::{ComputerAgent, HumanAgent};
pub use error::{Error, Result};
pub use search::{SearchResult, SearchStats, Searcher, select_move};
pub use tictactoe::{BoardState, Cell, Game, GameOutcome, GameStatus, Player};
