use crate::board::board::Board;
use crate::board::location::BoardLocation;
use crate::movement::shared::path_is_clear;

/// Purely horizontal or purely vertical displacement.
pub fn is_rook_shape(from: BoardLocation, to: BoardLocation) -> bool {
    (from.row() == to.row()) != (from.col() == to.col())
}

/// Straight-line shape with every square strictly between empty. Destination
/// occupancy is the validator's concern.
pub fn is_rook_move(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    is_rook_shape(from, to) && path_is_clear(board, from, to)
}
