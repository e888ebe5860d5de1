use crate::board::board::Board;
use crate::board::location::BoardLocation;
use crate::movement::shared::path_is_clear;

/// Strict nonzero diagonal: equal absolute row and column deltas.
pub fn is_bishop_shape(from: BoardLocation, to: BoardLocation) -> bool {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    d_row == d_col && d_row != 0
}

/// Diagonal shape with every square strictly between empty. Destination
/// occupancy is the validator's concern.
pub fn is_bishop_move(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    is_bishop_shape(from, to) && path_is_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::{Piece, PieceKind, Player};

    fn loc(row: i8, col: i8) -> BoardLocation {
        BoardLocation::new(row, col).unwrap()
    }

    #[test]
    fn diagonals_only() {
        assert!(is_bishop_shape(loc(4, 4), loc(1, 1)));
        assert!(is_bishop_shape(loc(4, 4), loc(7, 1)));
        assert!(!is_bishop_shape(loc(4, 4), loc(4, 7)));
        assert!(!is_bishop_shape(loc(4, 4), loc(2, 3)));
        assert!(!is_bishop_shape(loc(4, 4), loc(4, 4)));
    }

    #[test]
    fn blockers_cut_the_diagonal() {
        let mut board = Board::empty();
        board
            .place(Piece::new(PieceKind::Pawn, Player::White), loc(2, 2))
            .unwrap();
        assert!(is_bishop_move(&board, loc(4, 4), loc(3, 3)));
        assert!(is_bishop_move(&board, loc(4, 4), loc(2, 2)));
        assert!(!is_bishop_move(&board, loc(4, 4), loc(1, 1)));
        assert!(!is_bishop_move(&board, loc(4, 4), loc(0, 0)));
    }
}
