//! Exhaustive checks of the search and win detection over every reachable
//! position.

mod common;

use common::{Oracle, reachable_positions};
use noughts::{
    Searcher,
    tictactoe::{BoardState, Player, WINNING_LINES},
};

#[test]
fn search_value_matches_unpruned_minimax() {
    let mut oracles = [Oracle::new(Player::X), Oracle::new(Player::O)];

    for (state, to_move) in reachable_positions() {
        let oracle = &mut oracles[to_move as usize];
        let mut scratch = state;
        let result = Searcher::new(to_move).best_move(&mut scratch);

        assert_eq!(
            result.score,
            oracle.value(&state, true),
            "wrong value for {} with {to_move} to move",
            state.encode()
        );

        let position = result.position.expect("non-terminal state must yield a move");
        let mut child = state;
        assert!(child.apply_move(position, to_move));
        assert_eq!(
            oracle.value(&child, false),
            result.score,
            "move {position} in {} does not achieve the position's value",
            state.encode()
        );
    }
}

#[test]
fn search_never_walks_into_a_forced_loss() {
    let mut oracles = [Oracle::new(Player::X), Oracle::new(Player::O)];

    for (state, to_move) in reachable_positions() {
        let oracle = &mut oracles[to_move as usize];
        let safe_exists = state.available_moves().into_iter().any(|pos| {
            let mut child = state;
            assert!(child.apply_move(pos, to_move));
            oracle.value(&child, false) >= 0
        });
        if !safe_exists {
            continue;
        }

        let mut scratch = state;
        let position = Searcher::new(to_move)
            .best_move(&mut scratch)
            .position
            .unwrap();
        let mut child = state;
        assert!(child.apply_move(position, to_move));
        assert!(
            oracle.value(&child, false) >= 0,
            "search chose losing move {position} in {}",
            state.encode()
        );
    }
}

#[test]
fn search_is_deterministic() {
    for (state, to_move) in reachable_positions() {
        let mut first = state;
        let mut second = state;
        let a = Searcher::new(to_move).best_move(&mut first);
        let b = Searcher::new(to_move).best_move(&mut second);
        assert_eq!(a, b, "different results for {}", state.encode());
    }
}

#[test]
fn search_restores_the_board() {
    for (state, to_move) in reachable_positions() {
        let mut scratch = state;
        let mut searcher = Searcher::new(to_move);
        searcher.best_move(&mut scratch);
        assert_eq!(scratch, state);

        // Also from the minimizing side with a narrow window, where cutoffs
        // happen on the first child
        searcher.search(&mut scratch, state.empty_cell_count() as u32, -1, 1, false);
        assert_eq!(scratch, state);
    }
}

#[test]
fn local_win_check_matches_full_line_scan() {
    for (state, _) in reachable_positions() {
        for pos in state.available_moves() {
            for mark in [Player::X, Player::O] {
                let mut next = state;
                assert!(next.apply_move(pos, mark));

                let expected = WINNING_LINES.iter().any(|line| {
                    line.contains(&pos) && line.iter().all(|&i| next.get(i) == mark.to_cell())
                });
                assert_eq!(
                    next.check_win(pos, mark),
                    expected,
                    "check_win({pos}, {mark}) on {}",
                    next.encode()
                );
                assert_eq!(next.winner() == Some(mark), expected);
            }
        }
    }
}

#[test]
fn winning_line_wins_the_search_at_once() {
    let mut state = BoardState::from_string("XX.OO....").unwrap();
    let result = Searcher::new(Player::X).best_move(&mut state);
    assert_eq!(result.position, Some(2));
    assert!(result.score > 0);
}
