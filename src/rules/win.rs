//! Win and draw detection for Slideways
//!
//! Lines are scanned in a fixed order: rows, then columns, then the down-right
//! diagonals, then the up-right diagonals (diagonals shorter than the win
//! threshold are skipped). The first conclusive line decides the verdict.
//!
//! Within one line both players' runs are counted independently. A line where
//! both players complete a run is a draw.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Player};

use super::lines::{anti_diagonals, columns, diagonals, rows};

/// Outcome of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Ongoing,
    Win(Player),
    Draw,
}

impl Verdict {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Verdict::Ongoing
    }

    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            Verdict::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Verdict for a single line.
///
/// A player's run grows on each consecutive owned cell and resets on anything
/// else. Reaching `win_threshold` flags that player; if the other player
/// reaches it anywhere else in the same line, the line is a draw.
pub fn line_verdict(line: &[Cell], win_threshold: usize) -> Verdict {
    if line.len() < win_threshold {
        return Verdict::Ongoing;
    }

    let mut runs = [0usize; 2];
    let mut winner: Option<Player> = None;
    let mut draw = false;

    for &cell in line {
        for player in Player::ALL {
            if cell == Cell::Owned(player) {
                runs[player.index()] += 1;
            } else {
                runs[player.index()] = 0;
            }

            if runs[player.index()] == win_threshold {
                match winner {
                    Some(previous) if previous != player => draw = true,
                    _ => winner = Some(player),
                }
            }
        }
    }

    if draw {
        Verdict::Draw
    } else {
        winner.map_or(Verdict::Ongoing, Verdict::Win)
    }
}

/// Evaluate the whole board
///
/// Returns the first conclusive line verdict in scan order, or
/// `Verdict::Ongoing` if no line is conclusive.
pub fn evaluate(board: &Board, win_threshold: usize) -> Verdict {
    let scans = [
        rows(board),
        columns(board),
        diagonals(board, win_threshold),
        anti_diagonals(board, win_threshold),
    ];

    scans
        .iter()
        .flatten()
        .map(|line| line_verdict(line, win_threshold))
        .find(|verdict| verdict.is_over())
        .unwrap_or(Verdict::Ongoing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Direction, Pos};

    const ONE: Cell = Cell::Owned(Player::One);
    const TWO: Cell = Cell::Owned(Player::Two);
    const E: Cell = Cell::Empty;
    const S: Cell = Cell::Sentinel;

    fn swap_players(board: &Board) -> Board {
        let mut swapped = board.clone();
        for r in 0..board.rows() {
            for c in 0..board.cols() {
                let pos = Pos::new(r as u8, c as u8);
                if let Cell::Owned(p) = board.get(pos) {
                    swapped.set(pos, Cell::Owned(p.opponent()));
                }
            }
        }
        swapped
    }

    #[test]
    fn test_empty_board_ongoing() {
        assert_eq!(evaluate(&Board::new(4), 4), Verdict::Ongoing);
    }

    #[test]
    fn test_line_run_wins() {
        assert_eq!(line_verdict(&[S, ONE, ONE, ONE, E], 3), Verdict::Win(Player::One));
        assert_eq!(line_verdict(&[TWO, TWO, TWO], 3), Verdict::Win(Player::Two));
    }

    #[test]
    fn test_line_run_interrupted() {
        assert_eq!(line_verdict(&[ONE, ONE, E, ONE, ONE], 3), Verdict::Ongoing);
        assert_eq!(line_verdict(&[ONE, ONE, TWO, ONE], 3), Verdict::Ongoing);
        assert_eq!(line_verdict(&[ONE, ONE, S, ONE], 3), Verdict::Ongoing);
    }

    #[test]
    fn test_line_shorter_than_threshold() {
        assert_eq!(line_verdict(&[ONE, ONE], 3), Verdict::Ongoing);
    }

    #[test]
    fn test_line_both_players_draw() {
        assert_eq!(
            line_verdict(&[ONE, ONE, ONE, E, TWO, TWO, TWO], 3),
            Verdict::Draw
        );
        assert_eq!(line_verdict(&[TWO, TWO, TWO, ONE, ONE, ONE], 3), Verdict::Draw);
    }

    #[test]
    fn test_longer_run_still_wins() {
        assert_eq!(line_verdict(&[ONE; 5], 3), Verdict::Win(Player::One));
    }

    #[test]
    fn test_row_win_size_five() {
        // Five consecutive cells of player one in a single row, threshold 3
        let mut board = Board::new(5);
        for col in 4..9 {
            board.place(Pos::new(2, col), Player::One);
        }
        assert_eq!(evaluate(&board, 3), Verdict::Win(Player::One));
    }

    #[test]
    fn test_row_draw() {
        // A run of three for each player in the same row
        let board = Board::parse(&[
            "111.222######",
            "####.....####",
            "####.....####",
            "####.....####",
            "####.....####",
        ])
        .unwrap();
        assert_eq!(evaluate(&board, 3), Verdict::Draw);
    }

    #[test]
    fn test_column_win() {
        let board = Board::parse(&["###1...###", "###1...###", "###1...###", "###1...###"]).unwrap();
        assert_eq!(evaluate(&board, 4), Verdict::Win(Player::One));
    }

    #[test]
    fn test_diagonal_win_across_shifted_rows() {
        let mut board = Board::new(4);
        // Stagger the rows so a diagonal runs through the play window
        board.shift_row(0, Direction::Left);
        board.shift_row(2, Direction::Right);
        board.shift_row(3, Direction::Right);
        board.shift_row(3, Direction::Right);
        for (r, c) in [(0, 2), (1, 3), (2, 4), (3, 5)] {
            board.place(Pos::new(r, c), Player::Two);
        }
        assert_eq!(evaluate(&board, 4), Verdict::Win(Player::Two));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::parse(&["###...2###", "###..2.###", "###.2..###", "###2...###"]).unwrap();
        assert_eq!(evaluate(&board, 4), Verdict::Win(Player::Two));
    }

    #[test]
    fn test_row_verdict_precedes_column() {
        // Row 0 is a draw; the column win of player two is never reached
        let board = Board::parse(&[
            "111.222######",
            "######2....##",
            "######2....##",
            "####.....####",
            "####.....####",
        ])
        .unwrap();
        assert_eq!(evaluate(&board, 3), Verdict::Draw);
    }

    #[test]
    fn test_relabeling_symmetry() {
        let boards = [
            Board::parse(&["###1...###", "###1...###", "###1...###", "###1...###"]).unwrap(),
            Board::parse(&["###...2###", "###..2.###", "###.2..###", "###2...###"]).unwrap(),
            Board::parse(&["###12..###", "###.21.###", "###..12###", "###...2###"]).unwrap(),
        ];
        for board in &boards {
            let verdict = evaluate(board, 4);
            let expected = match verdict {
                Verdict::Win(p) => Verdict::Win(p.opponent()),
                other => other,
            };
            assert_eq!(evaluate(&swap_players(board), 4), expected);
        }
    }

    #[test]
    fn test_verdict_helpers() {
        assert!(!Verdict::Ongoing.is_over());
        assert!(Verdict::Draw.is_over());
        assert_eq!(Verdict::Win(Player::Two).winner(), Some(Player::Two));
        assert_eq!(Verdict::Draw.winner(), None);
    }
}
