//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Compact character used in board encodings
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | ' ' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// Character drawn on the console board (blank for empty cells)
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            other => other.to_char(),
        }
    }
}

/// A player in the game, identified by the mark they place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Parse a player token such as `x`, `O` or `first`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPlayerString`] for anything else.
    pub fn parse(token: &str) -> Result<Player, crate::Error> {
        match token.trim().to_ascii_lowercase().as_str() {
            "x" | "first" => Ok(Player::X),
            "o" | "second" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayerString {
                player: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// The 3x3 grid plus the winner produced by the most recent move.
///
/// Index `i` maps to row `i / 3`, column `i % 3`. The `winner` field is set by
/// [`BoardState::apply_move`] when the placed mark completes a line and is
/// cleared by [`BoardState::undo_move`]; it is never recomputed from the whole
/// board. The type is `Copy` (10 bytes), so callers that need a scratch board
/// simply copy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub winner: Option<Player>,
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            winner: None,
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain exactly 9 cell characters once whitespace is removed
    /// (`X`, `O`, and `.`/`_`/`-` for empty). Piece counts may differ by at most
    /// one. Since a parsed board has no "last move", the winner is derived from
    /// a full scan of the lines.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Other than exactly 9 cell characters are present
    /// - Any character is not a valid cell representation
    /// - The piece counts differ by more than one
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let (x_count, o_count) = Self::count_marks(&cells);
        if x_count.abs_diff(o_count) > 1 {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }

        let winner = [Player::X, Player::O]
            .into_iter()
            .find(|&p| LineAnalyzer::has_won(&cells, p));

        Ok(BoardState { cells, winner })
    }

    fn count_marks(cells: &[Cell; 9]) -> (usize, usize) {
        cells.iter().fold((0, 0), |(x, o), cell| match cell {
            Cell::X => (x + 1, o),
            Cell::O => (x, o + 1),
            Cell::Empty => (x, o),
        })
    }

    /// Infer whose turn it is from piece counts, assuming X opens on equal counts.
    pub fn side_to_move(&self) -> Player {
        let (x_count, o_count) = Self::count_marks(&self.cells);
        if x_count > o_count {
            Player::O
        } else {
            Player::X
        }
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// All empty positions, in ascending order
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Empty).count()
    }

    /// Winner recorded by the last applied move, if any
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Place `player`'s mark at `index`.
    ///
    /// Returns `false` without touching the board when the index is off the
    /// grid or the cell is taken. On success the winner is updated if this
    /// move completed a line.
    #[must_use = "apply_move reports whether the mark was placed"]
    pub fn apply_move(&mut self, index: usize, player: Player) -> bool {
        if index >= 9 || !self.is_empty(index) {
            return false;
        }

        self.cells[index] = player.to_cell();
        if self.check_win(index, player) {
            self.winner = Some(player);
        }
        true
    }

    /// Clear the cell at `index` and forget the recorded winner.
    pub fn undo_move(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
        self.winner = None;
    }

    /// Check only the lines that pass through `index` for three of `player`.
    ///
    /// An index off the board lies on no line and never wins.
    pub fn check_win(&self, index: usize, player: Player) -> bool {
        if index >= 9 {
            return false;
        }
        LineAnalyzer::lines_through(index)
            .any(|line| LineAnalyzer::line_filled_by(&self.cells, &line, player))
    }

    /// Compact string encoding, e.g. `XO.......`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// The index layout players type moves against.
    pub fn position_guide() -> String {
        (0..3)
            .map(|row| {
                let nums: Vec<String> = (row * 3..row * 3 + 3).map(|i| i.to_string()).collect();
                format!("| {} |", nums.join(" | "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            let symbols: Vec<String> = chunk.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "| {} |", symbols.join(" | "))?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> BoardState {
        BoardState::from_string(s).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = BoardState::new();
        assert_eq!(board.cells, [Cell::Empty; 9]);
        assert_eq!(board.winner(), None);
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
        assert!(board.has_empty_cell());
        assert_eq!(board.empty_cell_count(), 9);
    }

    #[test]
    fn test_apply_move() {
        let mut board = BoardState::new();
        assert!(board.apply_move(4, Player::X));
        assert_eq!(board.get(4), Cell::X);
        assert_eq!(board.empty_cell_count(), 8);
        assert!(!board.available_moves().contains(&4));

        // Occupied cell is refused and leaves the board untouched
        let before = board;
        assert!(!board.apply_move(4, Player::O));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_out_of_range() {
        let mut board = BoardState::new();
        assert!(!board.apply_move(9, Player::X));
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn test_apply_move_records_winner() {
        let mut board = board("XX.OO....");
        assert_eq!(board.winner(), None);
        assert!(board.apply_move(2, Player::X));
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_undo_move_clears_cell_and_winner() {
        let mut board = board("XX.OO....");
        let before = board;
        assert!(board.apply_move(2, Player::X));
        board.undo_move(2);
        assert_eq!(board, before);
    }

    #[test]
    fn test_check_win_row_column_diagonal() {
        let b = board("XXX.O..O.");
        assert!(b.check_win(1, Player::X));

        let b = board("O.XO.XO..");
        assert!(b.check_win(3, Player::O));

        let b = board("XO.OX...X");
        assert!(b.check_win(8, Player::X));
        assert!(b.check_win(0, Player::X));
    }

    #[test]
    fn test_check_win_is_local_to_index() {
        // X owns the top row, but cell 7 does not lie on it
        let b = board("XXXOO..O.");
        assert!(!b.check_win(7, Player::X));
        assert!(b.check_win(0, Player::X));
    }

    #[test]
    fn test_edge_cells_skip_diagonals() {
        // Anti-diagonal full of O; edge cell 5 shares no line with it
        let b = board("X.OXO.O.X");
        assert!(!b.check_win(5, Player::O));
        assert!(b.check_win(4, Player::O));
    }

    #[test]
    fn test_winner_not_recomputed_from_whole_board() {
        let mut b = BoardState::new();
        for (pos, p) in [(0, Player::X), (3, Player::O), (1, Player::X)] {
            assert!(b.apply_move(pos, p));
        }
        // Poke the cells directly: no move completed the row, so no winner
        b.cells[2] = Cell::X;
        assert_eq!(b.winner(), None);
    }

    #[test]
    fn test_from_string() {
        let b = board("XOX......");
        assert_eq!(b.cells[0], Cell::X);
        assert_eq!(b.cells[1], Cell::O);
        assert_eq!(b.cells[2], Cell::X);
        assert_eq!(b.side_to_move(), Player::O);

        let b = board("XXX\nOO.\n...");
        assert_eq!(b.winner(), Some(Player::X));

        assert!(BoardState::from_string("XO").is_err());
        assert!(matches!(
            BoardState::from_string("XO.......X"),
            Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: 10,
                ..
            })
        ));
        assert!(BoardState::from_string("XOX\nOXO\n...\nX").is_err());

        // O may lead when O opened
        assert_eq!(board("OXO......").side_to_move(), Player::X);
        let err = BoardState::from_string("OO.O.....").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid piece counts: X=0, O=3 (must differ by at most 1)"
        );
        assert!(BoardState::from_string("XOZ......").is_err());
        assert!(matches!(
            BoardState::from_string("XXX......"),
            Err(crate::Error::InvalidPieceCounts {
                x_count: 3,
                o_count: 0
            })
        ));
    }

    #[test]
    fn test_check_win_off_board_index() {
        let b = board("XXXOO....");
        assert!(b.check_win(0, Player::X));
        assert!(!b.check_win(9, Player::X));
        assert!(!b.check_win(usize::MAX, Player::O));
    }

    #[test]
    fn test_side_to_move() {
        assert_eq!(BoardState::new().side_to_move(), Player::X);
        assert_eq!(board("X........").side_to_move(), Player::O);
        assert_eq!(board("O........").side_to_move(), Player::X);
        assert_eq!(board("XO.......").side_to_move(), Player::X);
    }

    #[test]
    fn test_encode() {
        assert_eq!(board("XO.......").encode(), "XO.......");
        assert_eq!(BoardState::new().encode(), ".........");
    }

    #[test]
    fn test_display() {
        let b = board("XOX.O.X..");
        assert_eq!(format!("{b}"), "| X | O | X |\n|   | O |   |\n| X |   |   |");
    }

    #[test]
    fn test_position_guide() {
        assert_eq!(
            BoardState::position_guide(),
            "| 0 | 1 | 2 |\n| 3 | 4 | 5 |\n| 6 | 7 | 8 |"
        );
    }

    #[test]
    fn test_player_parse() {
        assert_eq!(Player::parse("x").unwrap(), Player::X);
        assert_eq!(Player::parse(" O ").unwrap(), Player::O);
        assert_eq!(Player::parse("second").unwrap(), Player::O);
        assert!(Player::parse("z").is_err());
    }
}
