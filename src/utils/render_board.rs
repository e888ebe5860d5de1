//! Terminal-oriented Unicode board renderer.
//!
//! Produces a human-readable view of a board for debugging, tests, and the
//! self-play runner in text environments.

use crate::board::board::Board;
use crate::board::location::BoardLocation;
use crate::board::piece::{Piece, PieceKind, Player};

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 (Black's home row, rank 8) prints at the top; files run a-h left to
/// right.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8i8 {
        let rank_label = char::from(b'8' - row as u8);
        out.push(rank_label);
        out.push(' ');

        for col in 0..8i8 {
            let at = BoardLocation::new(row, col).expect("render scan must have been corrupted");
            match board.get(at) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.owner, piece.kind) {
        (Player::White, PieceKind::Pawn) => '♙',
        (Player::White, PieceKind::Knight) => '♘',
        (Player::White, PieceKind::Bishop) => '♗',
        (Player::White, PieceKind::Rook) => '♖',
        (Player::White, PieceKind::Queen) => '♕',
        (Player::White, PieceKind::King) => '♔',
        (Player::Black, PieceKind::Pawn) => '♟',
        (Player::Black, PieceKind::Knight) => '♞',
        (Player::Black, PieceKind::Bishop) => '♝',
        (Player::Black, PieceKind::Rook) => '♜',
        (Player::Black, PieceKind::Queen) => '♛',
        (Player::Black, PieceKind::King) => '♚',
    }
}
