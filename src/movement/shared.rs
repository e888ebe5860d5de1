use crate::board::board::Board;
use crate::board::location::BoardLocation;

/// Reports whether every square strictly between `from` and `to` is empty.
///
/// Callers must have already established that the two squares share a rank,
/// file, or diagonal; this scan only walks the unit step toward `to` and
/// never inspects the endpoints themselves.
pub fn path_is_clear(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    let d_row = (to.row() - from.row()).signum();
    let d_col = (to.col() - from.col()).signum();

    let mut cursor = from;
    loop {
        cursor = match cursor.offset(d_row, d_col) {
            Ok(next) => next,
            Err(_) => return true,
        };
        if cursor == to {
            return true;
        }
        if board.get(cursor).is_some() {
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::{Piece, PieceKind, Player};

    fn loc(row: i8, col: i8) -> BoardLocation {
        BoardLocation::new(row, col).unwrap()
    }

    #[test]
    fn empty_lines_are_clear() {
        let board = Board::empty();
        assert!(path_is_clear(&board, loc(0, 0), loc(0, 7)));
        assert!(path_is_clear(&board, loc(0, 0), loc(7, 7)));
        assert!(path_is_clear(&board, loc(7, 0), loc(0, 0)));
    }

    #[test]
    fn adjacent_squares_have_nothing_between() {
        let mut board = Board::empty();
        board
            .place(Piece::new(PieceKind::Pawn, Player::White), loc(4, 4))
            .unwrap();
        // The occupied endpoint is not "between".
        assert!(path_is_clear(&board, loc(4, 3), loc(4, 4)));
        assert!(path_is_clear(&board, loc(3, 3), loc(4, 4)));
    }

    #[test]
    fn a_piece_on_the_line_blocks_it() {
        let mut board = Board::empty();
        board
            .place(Piece::new(PieceKind::Pawn, Player::Black), loc(0, 3))
            .unwrap();
        assert!(!path_is_clear(&board, loc(0, 0), loc(0, 6)));
        assert!(path_is_clear(&board, loc(0, 0), loc(0, 3)));
        assert!(path_is_clear(&board, loc(0, 0), loc(0, 2)));
    }
}
