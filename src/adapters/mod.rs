//! Adapters implementing domain ports.
//!
//! Each adapter here is an [`Agent`](crate::ports::Agent): one reads moves
//! from a person, the other computes them with the alpha-beta search.

pub mod computer;
pub mod human;

pub use computer::ComputerAgent;
pub use human::HumanAgent;
