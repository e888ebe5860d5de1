use crate::board::board::Board;
use crate::board::location::BoardLocation;
use crate::movement::bishop_moves::{is_bishop_move, is_bishop_shape};
use crate::movement::rook_moves::{is_rook_move, is_rook_shape};

/// Queen movement is the union of the rook and bishop rules; the two shapes
/// are mutually exclusive by geometry so no tie-break is needed.
pub fn is_queen_shape(from: BoardLocation, to: BoardLocation) -> bool {
    is_rook_shape(from, to) || is_bishop_shape(from, to)
}

pub fn is_queen_move(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    is_rook_move(board, from, to) || is_bishop_move(board, from, to)
}
