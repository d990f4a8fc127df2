//! Move generation for a whole side.

use crate::board::Board;
use crate::constants::Color;
use crate::r#move::{Move, OwnedMove};
use crate::rules;

/// Every legal move for `color`, each tagged with the piece making it.
/// Pieces are visited in row-major order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<OwnedMove> {
    let mut owned = Vec::new();
    let mut moves = Vec::new();
    for (from, piece) in board.pieces_of(color) {
        moves.clear();
        rules::push_legal_moves(piece, from, board, &mut moves);
        owned.extend(moves.iter().map(|&mv| OwnedMove { piece, mv }));
    }
    owned
}

/// Same moves as [`all_legal_moves`] without the piece tags.
pub fn generate_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces_of(color) {
        rules::push_legal_moves(piece, from, board, &mut moves);
    }
    moves
}

pub fn count_moves(board: &Board, color: Color) -> usize {
    generate_moves(board, color).len()
}
