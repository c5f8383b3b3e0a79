//! Ports (trait boundaries) between the game core and its move sources.
//!
//! The game loop owns the board and asks an [`Agent`] for each move; the
//! adapters module supplies the interactive and search-backed implementations.

pub mod agent;

pub use agent::Agent;
