//! Canonical opening position.
//!
//! This module stores the fixed layout literals used to initialize and
//! validate game setup.

use crate::board::board::Board;
use crate::board::location::BoardLocation;
use crate::board::piece::{Piece, PieceKind, Player};

/// Back-rank ordering shared by both sides, left to right.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const BLACK_HOME_ROW: i8 = 0;
pub const BLACK_PAWN_ROW: i8 = 1;
pub const WHITE_PAWN_ROW: i8 = 6;
pub const WHITE_HOME_ROW: i8 = 7;

/// Builds the standard two-player opening position: sixteen pieces per side
/// on their canonical squares.
pub fn standard_opening() -> Board {
    let mut board = Board::empty();
    for (owner, home_row, pawn_row) in [
        (Player::Black, BLACK_HOME_ROW, BLACK_PAWN_ROW),
        (Player::White, WHITE_HOME_ROW, WHITE_PAWN_ROW),
    ] {
        for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let at = BoardLocation::new(home_row, col as i8)
                .expect("opening layout must have been corrupted");
            board
                .place(Piece::new(*kind, owner), at)
                .expect("opening layout must have been corrupted");
        }
        for col in 0..8 {
            let at = BoardLocation::new(pawn_row, col)
                .expect("opening layout must have been corrupted");
            board
                .place(Piece::new(PieceKind::Pawn, owner), at)
                .expect("opening layout must have been corrupted");
        }
    }
    board
}
