//! Winning line geometry for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Main diagonal, top-left to bottom-right
pub const MAIN_DIAGONAL: [usize; 3] = [0, 4, 8];

/// Anti-diagonal, top-right to bottom-left
pub const ANTI_DIAGONAL: [usize; 3] = [2, 4, 6];

/// Utility for reasoning about the lines of the board
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Row containing `index`
    pub fn row(index: usize) -> [usize; 3] {
        let start = (index / 3) * 3;
        [start, start + 1, start + 2]
    }

    /// Column containing `index`
    pub fn column(index: usize) -> [usize; 3] {
        let col = index % 3;
        [col, col + 3, col + 6]
    }

    /// Every line passing through `index`.
    ///
    /// Odd cells (edges) never sit on a diagonal, so only the row and column
    /// are yielded for them.
    pub fn lines_through(index: usize) -> impl Iterator<Item = [usize; 3]> {
        let diagonals = if index.is_multiple_of(2) {
            [
                MAIN_DIAGONAL.contains(&index).then_some(MAIN_DIAGONAL),
                ANTI_DIAGONAL.contains(&index).then_some(ANTI_DIAGONAL),
            ]
        } else {
            [None, None]
        };

        [Self::row(index), Self::column(index)]
            .into_iter()
            .chain(diagonals.into_iter().flatten())
    }

    /// Check whether every cell of `line` holds the player's mark
    pub fn line_filled_by(cells: &[Cell; 9], line: &[usize; 3], player: Player) -> bool {
        let target = player.to_cell();
        line.iter().all(|&idx| cells[idx] == target)
    }

    /// Check if a player has three in a row anywhere on the board
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::line_filled_by(cells, line, player))
    }
}
