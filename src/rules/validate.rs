//! Move legality for Slideways
//!
//! A placement at `pos` is legal when:
//! - the cell is not a sentinel,
//! - the cell is not already owned by the mover,
//! - it is not the exact cell marked by the previous move,
//! - the resulting board does not match any board already reached this game.
//!
//! A shift of `row` in `direction` is legal when:
//! - the edge cell that wraps around is a sentinel,
//! - it does not reverse the previous move (same row, opposite direction),
//! - the resulting board does not match any board already reached this game.
//!
//! The history check always compares the board *after* the candidate move.

use log::trace;

use crate::board::{Board, Cell, Direction, Move, Player, Pos};

/// True if `candidate` equals any earlier position
#[inline]
fn repeats_history(candidate: &Board, history: &[Board]) -> bool {
    history.iter().any(|previous| previous == candidate)
}

/// Check whether `player` may mark `pos`
pub fn is_legal_placement(
    board: &Board,
    player: Player,
    pos: Pos,
    last_move: Option<Move>,
    history: &[Board],
) -> bool {
    if !board.contains(pos) {
        return false;
    }

    match board.get(pos) {
        Cell::Sentinel => return false,
        Cell::Owned(owner) if owner == player => return false,
        _ => {}
    }

    if last_move == Some(Move::Place(pos)) {
        return false;
    }

    let candidate = board.with_move(Move::Place(pos), player);
    if repeats_history(&candidate, history) {
        trace!("placement {pos:?} rejected: position repeats");
        return false;
    }

    true
}

/// Check whether `row` may be shifted in `direction`
pub fn is_legal_shift(
    board: &Board,
    row: u8,
    direction: Direction,
    last_move: Option<Move>,
    history: &[Board],
) -> bool {
    if row as usize >= board.rows() {
        return false;
    }

    if !board.vacated_edge(row as usize, direction).is_sentinel() {
        return false;
    }

    let mv = Move::shift(row, direction);
    if last_move.is_some_and(|last| mv.is_inverse_of(last)) {
        return false;
    }

    // The mover is irrelevant for a rotation
    let candidate = board.with_move(mv, Player::One);
    if repeats_history(&candidate, history) {
        trace!("shift of row {row} {direction:?} rejected: position repeats");
        return false;
    }

    true
}

/// Check any move
pub fn is_legal(
    board: &Board,
    player: Player,
    mv: Move,
    last_move: Option<Move>,
    history: &[Board],
) -> bool {
    match mv {
        Move::Place(pos) => is_legal_placement(board, player, pos, last_move, history),
        Move::Shift { row, direction } => {
            is_legal_shift(board, row, direction, last_move, history)
        }
    }
}

/// All cells `player` may mark, in row-major order
pub fn legal_placements(
    board: &Board,
    player: Player,
    last_move: Option<Move>,
    history: &[Board],
) -> Vec<Pos> {
    let mut placements = Vec::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let pos = Pos::new(row as u8, col as u8);
            if is_legal_placement(board, player, pos, last_move, history) {
                placements.push(pos);
            }
        }
    }
    placements
}

/// All rows that may be shifted in `direction`, top to bottom
pub fn legal_shifts(
    board: &Board,
    direction: Direction,
    last_move: Option<Move>,
    history: &[Board],
) -> Vec<(u8, Direction)> {
    (0..board.rows() as u8)
        .filter(|&row| is_legal_shift(board, row, direction, last_move, history))
        .map(|row| (row, direction))
        .collect()
}

/// Every legal move: placements, then left shifts, then right shifts
pub fn legal_moves(
    board: &Board,
    player: Player,
    last_move: Option<Move>,
    history: &[Board],
) -> Vec<Move> {
    let mut moves: Vec<Move> = legal_placements(board, player, last_move, history)
        .into_iter()
        .map(Move::Place)
        .collect();

    for direction in [Direction::Left, Direction::Right] {
        moves.extend(
            legal_shifts(board, direction, last_move, history)
                .into_iter()
                .map(|(row, direction)| Move::shift(row, direction)),
        );
    }

    moves
}
