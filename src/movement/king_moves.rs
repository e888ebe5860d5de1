use crate::board::location::BoardLocation;

/// King step: at most one square along each axis. Castling does not exist in
/// this rule set.
pub fn is_king_move(from: BoardLocation, to: BoardLocation) -> bool {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    d_row <= 1 && d_col <= 1
}
