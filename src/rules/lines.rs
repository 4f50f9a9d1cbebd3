//! Line extraction: rows, columns and both diagonal families
//!
//! Lines come out in the order the win detector scans them. Diagonals shorter
//! than the requested minimum length are skipped.

use crate::board::{Board, Cell};

/// All rows, top to bottom
pub fn rows(board: &Board) -> Vec<Vec<Cell>> {
    (0..board.rows()).map(|r| board.row(r).to_vec()).collect()
}

/// All columns, rightmost first, each read top to bottom
pub fn columns(board: &Board) -> Vec<Vec<Cell>> {
    (0..board.cols())
        .rev()
        .map(|c| (0..board.rows()).map(|r| board.cell(r, c)).collect())
        .collect()
}

/// Down-right diagonals `(i, i + k)` of length `>= min_len`, by ascending offset `k`
pub fn diagonals(board: &Board, min_len: usize) -> Vec<Vec<Cell>> {
    diagonal_family(board, min_len, false)
}

/// Up-right diagonals, starting from the bottom row, by ascending offset
pub fn anti_diagonals(board: &Board, min_len: usize) -> Vec<Vec<Cell>> {
    diagonal_family(board, min_len, true)
}

fn diagonal_family(board: &Board, min_len: usize, flipped: bool) -> Vec<Vec<Cell>> {
    let rows = board.rows() as i64;
    let cols = board.cols() as i64;
    let min_len = min_len.max(1) as i64;
    let mut lines = Vec::new();

    // Offset k maps step i to (i, i + k); the line has min_len cells or more
    // exactly when k lies in [min_len - rows, cols - min_len].
    for k in (min_len - rows)..=(cols - min_len) {
        let line: Vec<Cell> = (0..rows)
            .filter(|&i| i + k >= 0 && i + k < cols)
            .map(|i| {
                let r = if flipped { rows - 1 - i } else { i };
                board.cell(r as usize, (i + k) as usize)
            })
            .collect();
        if line.len() as i64 >= min_len {
            lines.push(line);
        }
    }
    lines
}
