//! Pawn movement shapes.
//!
//! Pawns are the one kind whose rule depends on the owner: White advances
//! toward row 0, Black toward row 7. The shape predicates here are pure
//! geometry; occupancy requirements (push onto empty, diagonal only as a
//! capture) are applied by the validator.

use crate::board::location::BoardLocation;
use crate::board::piece::Player;

/// Row delta of a single forward step for the given side.
#[inline]
pub const fn forward_step(player: Player) -> i8 {
    match player {
        Player::White => -1,
        Player::Black => 1,
    }
}

/// Row a side's pawns start on, from which the double step is allowed.
#[inline]
pub const fn start_row(player: Player) -> i8 {
    match player {
        Player::White => 6,
        Player::Black => 1,
    }
}

pub fn is_single_push_shape(from: BoardLocation, to: BoardLocation, player: Player) -> bool {
    to.col() == from.col() && to.row() - from.row() == forward_step(player)
}

pub fn is_double_push_shape(from: BoardLocation, to: BoardLocation, player: Player) -> bool {
    to.col() == from.col()
        && from.row() == start_row(player)
        && to.row() - from.row() == 2 * forward_step(player)
}

pub fn is_capture_shape(from: BoardLocation, to: BoardLocation, player: Player) -> bool {
    (to.col() - from.col()).abs() == 1 && to.row() - from.row() == forward_step(player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: i8, col: i8) -> BoardLocation {
        BoardLocation::new(row, col).unwrap()
    }

    #[test]
    fn forward_direction_is_mirrored() {
        assert!(is_single_push_shape(loc(6, 4), loc(5, 4), Player::White));
        assert!(!is_single_push_shape(loc(6, 4), loc(7, 4), Player::White));
        assert!(is_single_push_shape(loc(1, 4), loc(2, 4), Player::Black));
        assert!(!is_single_push_shape(loc(1, 4), loc(0, 4), Player::Black));
    }

    #[test]
    fn double_push_only_from_the_start_row() {
        assert!(is_double_push_shape(loc(6, 2), loc(4, 2), Player::White));
        assert!(!is_double_push_shape(loc(5, 2), loc(3, 2), Player::White));
        assert!(is_double_push_shape(loc(1, 2), loc(3, 2), Player::Black));
        assert!(!is_double_push_shape(loc(2, 2), loc(4, 2), Player::Black));
    }

    #[test]
    fn capture_shape_is_one_diagonal_step_forward() {
        assert!(is_capture_shape(loc(6, 4), loc(5, 3), Player::White));
        assert!(is_capture_shape(loc(6, 4), loc(5, 5), Player::White));
        assert!(!is_capture_shape(loc(6, 4), loc(5, 4), Player::White));
        assert!(!is_capture_shape(loc(6, 4), loc(7, 3), Player::White));
        assert!(is_capture_shape(loc(1, 4), loc(2, 5), Player::Black));
    }
}
