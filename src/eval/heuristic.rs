//! Occupancy heuristic for Slideways board positions
//!
//! For each line family (rows, columns, diagonals of both directions) the
//! number of cells a player owns per line is counted, reduced across the
//! family by `max` or `mean`, and normalized by the win threshold. The three
//! family values are averaged into a presence score. The position score is
//! `100 * own - 80 * opponent`.
//!
//! `Reduction::Max` rewards concentration in a single line,
//! `Reduction::Mean` rewards broad presence across the board.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Player};
use crate::rules::{anti_diagonals, columns, diagonals, rows};

use super::score::OutcomeScore;

/// How per-line counts are folded into one value per line family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reduction {
    Max,
    Mean,
}

impl Reduction {
    fn reduce(self, counts: &[usize]) -> f64 {
        if counts.is_empty() {
            return 0.0;
        }
        match self {
            Reduction::Max => counts.iter().copied().max().unwrap_or(0) as f64,
            Reduction::Mean => counts.iter().sum::<usize>() as f64 / counts.len() as f64,
        }
    }
}

/// Evaluate the board from the perspective of `player`.
///
/// Positive values favor `player`. The score is not a win/loss verdict: a
/// finished line still scores by occupancy only.
#[must_use]
pub fn evaluate(board: &Board, player: Player, win_threshold: usize, reduction: Reduction) -> f64 {
    let own = presence(board, player, win_threshold, reduction);
    let opp = presence(board, player.opponent(), win_threshold, reduction);
    OutcomeScore::OWN_WEIGHT * own - OutcomeScore::OPPONENT_WEIGHT * opp
}

/// Average of the three normalized family reductions for `player`
fn presence(board: &Board, player: Player, win_threshold: usize, reduction: Reduction) -> f64 {
    let mut diagonal_lines = diagonals(board, win_threshold);
    diagonal_lines.extend(anti_diagonals(board, win_threshold));

    let families = [rows(board), columns(board), diagonal_lines];
    let threshold = win_threshold.max(1) as f64;

    let total: f64 = families
        .iter()
        .map(|lines| {
            let counts: Vec<usize> = lines.iter().map(|line| owned_in(line, player)).collect();
            reduction.reduce(&counts) / threshold
        })
        .sum();

    total / families.len() as f64
}

#[inline]
fn owned_in(line: &[Cell], player: Player) -> usize {
    line.iter().filter(|&&c| c == Cell::Owned(player)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_board_is_zero() {
        let board = Board::new(4);
        assert!(approx(evaluate(&board, Player::One, 4, Reduction::Max), 0.0));
        assert!(approx(evaluate(&board, Player::One, 4, Reduction::Mean), 0.0));
    }

    #[test]
    fn test_single_mark_max() {
        let mut board = Board::new(4);
        board.place(Pos::new(0, 3), Player::One);
        // Each family's best line holds one mark: (1/4 * 3) / 3 = 0.25
        let score = evaluate(&board, Player::One, 4, Reduction::Max);
        assert!(approx(score, 25.0), "got {score}");
        // Seen from the opponent, the same mark is weighted by 80
        let score = evaluate(&board, Player::Two, 4, Reduction::Max);
        assert!(approx(score, -20.0), "got {score}");
    }

    #[test]
    fn test_single_mark_mean() {
        let mut board = Board::new(4);
        board.place(Pos::new(0, 3), Player::One);
        // rows: 1 mark over 4 lines, columns: 1 over 10, diagonals: the cell
        // lies on one line of each family, so 2 over 14
        let expected = 100.0 * ((0.25 + 0.1 + 2.0 / 14.0) / 4.0 / 3.0);
        let score = evaluate(&board, Player::One, 4, Reduction::Mean);
        assert!(approx(score, expected), "got {score}, want {expected}");
    }

    #[test]
    fn test_max_prefers_concentration() {
        let mut concentrated = Board::new(4);
        concentrated.place(Pos::new(0, 3), Player::One);
        concentrated.place(Pos::new(0, 4), Player::One);

        let mut spread = Board::new(4);
        spread.place(Pos::new(0, 3), Player::One);
        spread.place(Pos::new(2, 6), Player::One);

        let c = evaluate(&concentrated, Player::One, 4, Reduction::Max);
        let s = evaluate(&spread, Player::One, 4, Reduction::Max);
        assert!(c > s, "concentrated {c} vs spread {s}");
    }

    #[test]
    fn test_mean_counts_every_mark() {
        let mut one = Board::new(4);
        one.place(Pos::new(1, 4), Player::One);
        let mut two = one.clone();
        two.place(Pos::new(3, 6), Player::One);

        let a = evaluate(&one, Player::One, 4, Reduction::Mean);
        let b = evaluate(&two, Player::One, 4, Reduction::Mean);
        assert!(b > a);
    }

    #[test]
    fn test_opponent_presence_lowers_score() {
        let mut board = Board::new(4);
        board.place(Pos::new(1, 4), Player::One);
        let before = evaluate(&board, Player::One, 4, Reduction::Max);
        board.place(Pos::new(2, 5), Player::Two);
        let after = evaluate(&board, Player::One, 4, Reduction::Max);
        assert!(after < before);
    }

    #[test]
    fn test_reduction_of_empty_family() {
        assert!(approx(Reduction::Max.reduce(&[]), 0.0));
        assert!(approx(Reduction::Mean.reduce(&[]), 0.0));
        assert!(approx(Reduction::Mean.reduce(&[1, 2, 3]), 2.0));
        assert!(approx(Reduction::Max.reduce(&[1, 3, 2]), 3.0));
    }
}
