//! Depth-limited minimax search
//!
//! This module implements the move search for the Slideways AI. Every node
//! enumerates the legal moves of the player to move, applies each one to a
//! scratch board, recurses, then reverts the move exactly.
//!
//! # Move selection at a node
//!
//! Moves are tried in enumeration order (placements, left shifts, right
//! shifts). A move that strictly improves on the best score so far replaces
//! the candidate set, a move that ties joins it, and the first move that is
//! strictly worse ends the exploration of that node: later siblings are not
//! tried. The returned move is drawn uniformly from the candidate set.
//!
//! Leaves (depth 0) are scored from the searching player's point of view,
//! either exactly (win / loss / draw) or with the occupancy heuristic.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use slideways::board::{Board, Player};
//! use slideways::search::{Searcher, Strategy};
//!
//! let board = Board::new(4);
//! let history = vec![board.clone()];
//! let mut searcher = Searcher::new(4, StdRng::seed_from_u64(7));
//!
//! let result = searcher.search(&board, Player::One, Strategy::HeuristicMax, 2, None, &history);
//! assert!(result.best_move.is_some());
//! ```

use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Cell, Move, Player};
use crate::eval::{self, OutcomeScore};
use crate::rules::{self, legal_moves, Verdict};

use super::Strategy;

/// Search result containing the chosen move and statistics
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Chosen move, `None` when the player to move has no legal move
    pub best_move: Option<Move>,
    /// Score of the chosen move
    pub score: f64,
    /// Depth searched (plies)
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
}

/// Fixed parameters of one search
#[derive(Clone, Copy)]
struct SearchContext {
    root: Player,
    strategy: Strategy,
}

/// Minimax searcher with an injected random source for tie-breaks
pub struct Searcher<R = StdRng> {
    rng: R,
    win_threshold: usize,
    nodes: u64,
}

impl<R: Rng> Searcher<R> {
    pub fn new(win_threshold: usize, rng: R) -> Self {
        Self {
            rng,
            win_threshold,
            nodes: 0,
        }
    }

    #[inline]
    pub fn win_threshold(&self) -> usize {
        self.win_threshold
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search for the move of `player`.
    ///
    /// `history` holds every board reached so far in the game; it is never
    /// modified. Boards reached along the search path are added to a private
    /// copy so the repetition rule also holds inside the tree. A `depth` of
    /// zero still expands the root.
    pub fn search(
        &mut self,
        board: &Board,
        player: Player,
        strategy: Strategy,
        depth: u8,
        last_move: Option<Move>,
        history: &[Board],
    ) -> SearchResult {
        self.nodes = 0;
        let depth = depth.max(1);
        let ctx = SearchContext {
            root: player,
            strategy,
        };

        let mut scratch = board.clone();
        let mut positions = history.to_vec();
        let (best_move, score) =
            self.minimax(&mut scratch, player, depth, last_move, &mut positions, ctx);
        debug_assert_eq!(&scratch, board, "search must restore the board");

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        to_move: Player,
        depth: u8,
        last_move: Option<Move>,
        positions: &mut Vec<Board>,
        ctx: SearchContext,
    ) -> (Option<Move>, f64) {
        self.nodes += 1;

        if depth == 0 {
            return (None, self.leaf_score(board, ctx));
        }

        let moves = legal_moves(board, to_move, last_move, positions);
        if moves.is_empty() {
            // No option at all: treated as a drawn terminal
            return (None, OutcomeScore::DRAW);
        }

        let maximizing = to_move == ctx.root;
        let mut best_score = if maximizing {
            -OutcomeScore::INFINITE
        } else {
            OutcomeScore::INFINITE
        };
        let mut best_moves: Vec<Move> = Vec::new();

        for mv in moves {
            let previous = make_move(board, mv, to_move);
            positions.push(board.clone());

            let (_, score) =
                self.minimax(board, to_move.opponent(), depth - 1, Some(mv), positions, ctx);

            positions.pop();
            unmake_move(board, mv, previous);

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };

            if improves {
                best_score = score;
                best_moves.clear();
                best_moves.push(mv);
            } else if score == best_score {
                best_moves.push(mv);
            } else {
                trace!("depth {depth}: {mv} scores {score}, stopping at this node");
                break;
            }
        }

        (best_moves.choose(&mut self.rng).copied(), best_score)
    }

    fn leaf_score(&self, board: &Board, ctx: SearchContext) -> f64 {
        match ctx.strategy.reduction() {
            None => match rules::evaluate(board, self.win_threshold) {
                Verdict::Win(player) if player == ctx.root => OutcomeScore::WIN,
                Verdict::Win(_) => OutcomeScore::LOSS,
                Verdict::Draw | Verdict::Ongoing => OutcomeScore::DRAW,
            },
            Some(reduction) => eval::evaluate(board, ctx.root, self.win_threshold, reduction),
        }
    }
}

/// Apply `mv`, returning what the marked cell held before (placements only)
#[inline]
fn make_move(board: &mut Board, mv: Move, player: Player) -> Cell {
    let previous = match mv {
        Move::Place(pos) => board.get(pos),
        Move::Shift { .. } => Cell::Empty,
    };
    board.apply(mv, player);
    previous
}

/// Revert `mv` exactly
#[inline]
fn unmake_move(board: &mut Board, mv: Move, previous: Cell) {
    match mv {
        Move::Place(pos) => board.set(pos, previous),
        Move::Shift { row, direction } => board.shift_row(row as usize, direction.opposite()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Direction, Pos};
    use rand::SeedableRng;

    fn searcher(seed: u64) -> Searcher {
        Searcher::new(4, StdRng::seed_from_u64(seed))
    }

    fn one_move_from_win() -> Board {
        Board::parse(&["###....###", "###111.###", "###....###", "###....###"]).unwrap()
    }

    #[test]
    fn test_exact_finds_winning_placement() {
        let board = one_move_from_win();
        let history = vec![board.clone()];
        let result = searcher(1).search(&board, Player::One, Strategy::Exact, 1, None, &history);

        assert_eq!(result.best_move, Some(Move::place(1, 6)));
        assert_eq!(result.score, OutcomeScore::WIN);
    }

    #[test]
    fn test_depth_zero_expands_root() {
        let board = one_move_from_win();
        let history = vec![board.clone()];
        let result = searcher(3).search(&board, Player::One, Strategy::Exact, 0, None, &history);

        assert_eq!(result.depth, 1);
        assert_eq!(result.best_move, Some(Move::place(1, 6)));
        assert_eq!(result.score, OutcomeScore::WIN);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new(4);
        let history = vec![board.clone()];
        for strategy in Strategy::ALL {
            let a = searcher(42).search(&board, Player::One, strategy, 2, None, &history);
            let b = searcher(42).search(&board, Player::One, strategy, 2, None, &history);
            assert_eq!(a.best_move, b.best_move);
            assert_eq!(a.score, b.score);
            assert_eq!(a.nodes, b.nodes);
        }
    }

    #[test]
    fn test_worse_sibling_stops_node() {
        // Every placement on the empty board scores 25 under the max heuristic;
        // the first shift scores 0, which ends the root after 17 children.
        let board = Board::new(4);
        let history = vec![board.clone()];
        let result =
            searcher(5).search(&board, Player::One, Strategy::HeuristicMax, 1, None, &history);

        assert_eq!(result.nodes, 1 + 16 + 1);
        assert!(matches!(result.best_move, Some(Move::Place(_))));
        assert!((result.score - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_search_restores_board_and_history() {
        let mut board = Board::new(4);
        board.place(Pos::new(0, 3), Player::One);
        board.shift_row(2, Direction::Left);
        let history = vec![Board::new(4), board.clone()];
        let before = board.clone();

        let _ = searcher(9).search(
            &board,
            Player::Two,
            Strategy::HeuristicMean,
            2,
            Some(Move::shift(2, Direction::Left)),
            &history,
        );
        assert_eq!(board, before);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_chosen_move_is_legal() {
        let mut board = Board::new(4);
        board.place(Pos::new(1, 4), Player::One);
        let last = Some(Move::place(1, 4));
        let history = vec![Board::new(4), board.clone()];

        for seed in 0..5 {
            let result =
                searcher(seed).search(&board, Player::Two, Strategy::Exact, 2, last, &history);
            let mv = result.best_move.unwrap();
            assert!(rules::is_legal(&board, Player::Two, mv, last, &history), "{mv}");
        }
    }

    #[test]
    fn test_no_legal_moves_returns_none() {
        let board = Board::parse(&["#11#", "#11#"]).unwrap();
        let mut history = vec![board.clone()];
        for row in 0..2 {
            for direction in [Direction::Left, Direction::Right] {
                history.push(board.with_move(Move::shift(row, direction), Player::One));
            }
        }

        let mut s = Searcher::new(2, StdRng::seed_from_u64(0));
        let result = s.search(&board, Player::One, Strategy::Exact, 2, None, &history);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, OutcomeScore::DRAW);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_exact_avoids_handing_over_a_line() {
        // Two threatens to complete row 1; at depth 2 every move that leaves
        // the threat open scores LOSS, so One must block or break the row.
        let board =
            Board::parse(&["###1...###", "###222.###", "###....###", "###1...###"]).unwrap();
        let history = vec![board.clone()];

        for seed in 0..4 {
            let result =
                searcher(seed).search(&board, Player::One, Strategy::Exact, 2, None, &history);
            let mv = result.best_move.unwrap();
            let after = board.with_move(mv, Player::One);
            assert_ne!(after.row(1), board.row(1), "{mv} leaves the threat untouched");
        }
    }
}
