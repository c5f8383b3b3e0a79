//! Common test utilities for the noughts test suite.
//!
//! Provides exhaustive enumeration of reachable positions and an unpruned
//! minimax oracle that uses the same depth-biased scoring as the search.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use noughts::{
    Result,
    ports::Agent,
    tictactoe::{BoardState, Player},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Every position reachable from the empty board with X opening, paired with
/// the side to move. Positions where the game is over are excluded.
pub fn reachable_positions() -> Vec<(BoardState, Player)> {
    fn walk(
        state: &mut BoardState,
        to_move: Player,
        seen: &mut HashSet<BoardState>,
        out: &mut Vec<(BoardState, Player)>,
    ) {
        if state.winner().is_some() || !state.has_empty_cell() || !seen.insert(*state) {
            return;
        }
        out.push((*state, to_move));
        for pos in state.available_moves() {
            assert!(state.apply_move(pos, to_move));
            walk(state, to_move.opponent(), seen, out);
            state.undo_move(pos);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(&mut BoardState::new(), Player::X, &mut seen, &mut out);
    out
}

/// Exact minimax value of `state` without pruning.
///
/// Scores match the search: `±(empty cells + 1)` for a completed line, zero
/// for a full board.
pub struct Oracle {
    maximizer: Player,
    memo: HashMap<(BoardState, bool), i32>,
}

impl Oracle {
    pub fn new(maximizer: Player) -> Self {
        Self {
            maximizer,
            memo: HashMap::new(),
        }
    }

    pub fn value(&mut self, state: &BoardState, maximizing: bool) -> i32 {
        if let Some(&v) = self.memo.get(&(*state, maximizing)) {
            return v;
        }

        let value = if let Some(winner) = state.winner() {
            let magnitude = state.empty_cell_count() as i32 + 1;
            if winner == self.maximizer {
                magnitude
            } else {
                -magnitude
            }
        } else if !state.has_empty_cell() {
            0
        } else {
            let mover = if maximizing {
                self.maximizer
            } else {
                self.maximizer.opponent()
            };
            let children = state.available_moves().into_iter().map(|pos| {
                let mut child = *state;
                assert!(child.apply_move(pos, mover));
                self.value(&child, !maximizing)
            });
            let values: Vec<i32> = children.collect();
            if maximizing {
                values.into_iter().max().unwrap()
            } else {
                values.into_iter().min().unwrap()
            }
        };

        self.memo.insert((*state, maximizing), value);
        value
    }
}

/// Agent that plays uniformly random legal moves.
pub struct RandomAgent {
    mark: Player,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(mark: Player, seed: u64) -> Self {
        Self {
            mark,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn get_move(&mut self, state: &BoardState) -> Result<usize> {
        let moves = state.available_moves();
        if moves.is_empty() {
            return Err(noughts::Error::NoValidMoves);
        }
        Ok(moves[self.rng.random_range(0..moves.len())])
    }

    fn mark(&self) -> Player {
        self.mark
    }

    fn name(&self) -> &str {
        "Random"
    }
}
