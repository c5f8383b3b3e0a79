//! CLI infrastructure for the noughts game
//!
//! Console rendering, argument parsing and the play/watch/analyze commands
//! that drive the game core.

pub mod commands;
pub mod config;
pub mod output;
