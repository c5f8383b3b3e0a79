//! Minimax search with alpha-beta pruning
//!
//! The search works on a single exclusively borrowed [`BoardState`]: each
//! candidate move is placed through a [`Trial`] guard, which undoes the move
//! when it goes out of scope. Every exit from a node, pruning breaks included,
//! therefore leaves the board exactly as it found it.
//!
//! Terminal scores are `±(depth + 1)` where `depth` is the number of plies
//! still available (the count of empty cells), so quicker wins outscore slower
//! ones and slower losses outscore quicker ones.

use std::ops::{Deref, DerefMut};

use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::tictactoe::{BoardState, Player};

/// Result of searching one node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best move found at this node; `None` at terminal nodes
    pub position: Option<usize>,
    pub score: i32,
}

/// Counters gathered over one top-level search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, root included
    pub nodes: u64,
    /// Nodes where remaining moves were skipped because `beta <= alpha`
    pub cutoffs: u64,
}

/// A move placed on the board for the lifetime of the guard
struct Trial<'a> {
    state: &'a mut BoardState,
    position: usize,
}

impl<'a> Trial<'a> {
    fn place(state: &'a mut BoardState, position: usize, player: Player) -> Self {
        let placed = state.apply_move(position, player);
        debug_assert!(placed, "search tried occupied cell {position}");
        Trial { state, position }
    }
}

impl Deref for Trial<'_> {
    type Target = BoardState;

    fn deref(&self) -> &BoardState {
        self.state
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut BoardState {
        self.state
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.state.undo_move(self.position);
    }
}

/// Alpha-beta searcher playing for one fixed mark.
///
/// The `maximizer` is the side whose wins score positive; its opponent is the
/// minimizing side.
#[derive(Debug, Clone)]
pub struct Searcher {
    maximizer: Player,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(maximizer: Player) -> Self {
        Self {
            maximizer,
            stats: SearchStats::default(),
        }
    }

    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// Counters accumulated since the searcher was created or last reset
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Search from the root with the maximizer to move and an open window.
    ///
    /// Calling this on a board with no empty cells, or one that is already
    /// won, returns a result without a position.
    pub fn best_move(&mut self, state: &mut BoardState) -> SearchResult {
        let depth = state.empty_cell_count() as u32;
        self.search(state, depth, i32::MIN, i32::MAX, true)
    }

    /// Evaluate `state` with `depth` plies remaining.
    ///
    /// `maximizing` selects whose turn it is: the maximizer when `true`, the
    /// opponent otherwise. The board is restored before this returns.
    pub fn search(
        &mut self,
        state: &mut BoardState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if let Some(winner) = state.winner() {
            let magnitude = depth as i32 + 1;
            let score = if winner == self.maximizer {
                magnitude
            } else {
                -magnitude
            };
            return SearchResult {
                position: None,
                score,
            };
        }
        if !state.has_empty_cell() {
            return SearchResult {
                position: None,
                score: 0,
            };
        }

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best = SearchResult {
            position: None,
            score: if maximizing { i32::MIN } else { i32::MAX },
        };

        for position in state.available_moves() {
            let mut result = {
                let mut trial = Trial::place(state, position, mover);
                self.search(
                    &mut trial,
                    depth.saturating_sub(1),
                    alpha,
                    beta,
                    !maximizing,
                )
            };
            result.position = Some(position);

            if maximizing {
                if result.score > best.score {
                    best = result;
                }
                alpha = alpha.max(result.score);
            } else {
                if result.score < best.score {
                    best = result;
                }
                beta = beta.min(result.score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                trace!(position, alpha, beta, "pruned remaining moves");
                break;
            }
        }

        best
    }
}

/// Choose a move for `player`.
///
/// An empty board gets a uniformly random opening; any other position is
/// searched to the end with `player` as the maximizer. The caller's board is
/// not modified.
///
/// # Errors
///
/// Returns [`crate::Error::NoValidMoves`] when the board has no empty cell or
/// the game is already won.
pub fn select_move<R: Rng + ?Sized>(
    state: &BoardState,
    player: Player,
    rng: &mut R,
) -> Result<usize, crate::Error> {
    let moves = state.available_moves();
    if moves.len() == 9 {
        let position = *moves.choose(rng).ok_or(crate::Error::NoValidMoves)?;
        debug!(%player, position, "random opening");
        return Ok(position);
    }

    let mut scratch = *state;
    let mut searcher = Searcher::new(player);
    let result = searcher.best_move(&mut scratch);
    let stats = searcher.stats();
    debug!(
        %player,
        position = ?result.position,
        score = result.score,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "search complete"
    );
    result.position.ok_or(crate::Error::NoValidMoves)
}
