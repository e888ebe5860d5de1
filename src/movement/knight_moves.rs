use crate::board::location::BoardLocation;

/// Knight leap: an absolute (2,1) or (1,2) displacement in any sign
/// combination. Occupancy along the way is irrelevant.
pub fn is_knight_move(from: BoardLocation, to: BoardLocation) -> bool {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}
