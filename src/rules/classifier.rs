//! Game-status classification.
//!
//! Combines the two legality gates into full-move legality, searches for any
//! legal move for a side, and derives the side-to-move's status from the
//! in-check / has-a-move pair:
//!
//! - attacked and no move: checkmate, the other side wins
//! - not attacked and no move: stalemate
//! - attacked with a move available: check
//! - otherwise: in progress
//!
//! The four outcomes are mutually exclusive by construction. The search
//! worst case inspects 64x64 candidate pairs, each with a bounded occlusion
//! scan plus a king-safety re-scan; there is no deeper lookahead.

use std::fmt;

use crate::board::board::Board;
use crate::board::location::BoardLocation;
use crate::board::piece::Player;
use crate::rules::king_safety::{is_in_check, would_expose_check};
use crate::rules::validator::is_pseudo_legal;

/// Session status as seen by the side about to move. The two checkmate
/// variants and stalemate are terminal; check and in-progress are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check,
    CheckmateWhiteWins,
    CheckmateBlackWins,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::CheckmateWhiteWins | GameStatus::CheckmateBlackWins | GameStatus::Stalemate
        )
    }

    #[inline]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::CheckmateWhiteWins => Some(Player::White),
            GameStatus::CheckmateBlackWins => Some(Player::Black),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::CheckmateWhiteWins => write!(f, "checkmate, White wins"),
            GameStatus::CheckmateBlackWins => write!(f, "checkmate, Black wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Full legality: pseudo-legal and does not leave the mover's own king
/// attacked.
#[inline]
pub fn is_legal_move(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    is_pseudo_legal(board, from, to) && !would_expose_check(board, from, to)
}

/// Short-circuits on the first legal move found for `player`.
pub fn has_any_legal_move(board: &Board, player: Player) -> bool {
    board
        .pieces_of(player)
        .any(|(from, _)| BoardLocation::all().any(|to| is_legal_move(board, from, to)))
}

/// Collects every legal `(from, to)` pair for `player`, in board-scan order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<(BoardLocation, BoardLocation)> {
    let mut moves = Vec::new();
    for (from, _) in board.pieces_of(player) {
        for to in BoardLocation::all() {
            if is_legal_move(board, from, to) {
                moves.push((from, to));
            }
        }
    }
    moves
}

/// Derives the status of `player` as the side about to move.
pub fn classify(board: &Board, player: Player) -> GameStatus {
    let in_check = is_in_check(board, player);
    let any_move = has_any_legal_move(board, player);
    match (in_check, any_move) {
        (true, false) => match player.opponent() {
            Player::White => GameStatus::CheckmateWhiteWins,
            Player::Black => GameStatus::CheckmateBlackWins,
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::{Piece, PieceKind};
    use crate::board::setup::standard_opening;

    fn loc(row: i8, col: i8) -> BoardLocation {
        BoardLocation::new(row, col).unwrap()
    }

    fn place(board: &mut Board, kind: PieceKind, owner: Player, row: i8, col: i8) {
        board.place(Piece::new(kind, owner), loc(row, col)).unwrap();
    }

    #[test]
    fn opening_position_is_in_progress_with_twenty_moves() {
        let board = standard_opening();
        assert_eq!(classify(&board, Player::White), GameStatus::InProgress);
        assert_eq!(classify(&board, Player::Black), GameStatus::InProgress);
        assert!(has_any_legal_move(&board, Player::White));
        assert_eq!(legal_moves(&board, Player::White).len(), 20);
        assert_eq!(legal_moves(&board, Player::Black).len(), 20);
    }

    #[test]
    fn boxed_corner_king_is_checkmated() {
        // White king trapped in its corner behind its own pawns; the Black
        // queen mates along the clear back rank and the rook seals row 6.
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Player::White, 7, 7);
        place(&mut board, PieceKind::Pawn, Player::White, 6, 6);
        place(&mut board, PieceKind::Pawn, Player::White, 6, 7);
        place(&mut board, PieceKind::Queen, Player::Black, 7, 0);
        place(&mut board, PieceKind::Rook, Player::Black, 6, 0);
        place(&mut board, PieceKind::King, Player::Black, 0, 4);

        assert!(is_in_check(&board, Player::White));
        assert!(!has_any_legal_move(&board, Player::White));
        let status = classify(&board, Player::White);
        assert_eq!(status, GameStatus::CheckmateBlackWins);
        assert_eq!(status.winner(), Some(Player::Black));
        assert!(status.is_terminal());
    }

    #[test]
    fn cornered_but_unattacked_king_is_stalemated() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Player::White, 0, 0);
        place(&mut board, PieceKind::King, Player::Black, 2, 1);
        place(&mut board, PieceKind::Queen, Player::Black, 1, 2);

        assert!(!is_in_check(&board, Player::White));
        assert!(!has_any_legal_move(&board, Player::White));
        let status = classify(&board, Player::White);
        assert_eq!(status, GameStatus::Stalemate);
        assert_eq!(status.winner(), None);
        assert!(status.is_terminal());
    }

    #[test]
    fn check_with_an_escape_is_not_mate() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Player::White, 7, 4);
        place(&mut board, PieceKind::Rook, Player::Black, 0, 4);
        place(&mut board, PieceKind::King, Player::Black, 0, 0);

        assert_eq!(classify(&board, Player::White), GameStatus::Check);
        assert!(!classify(&board, Player::White).is_terminal());
    }

    #[test]
    fn legal_moves_exclude_self_check() {
        // The pinned bishop may not move off the file; the king and the
        // pinning line constrain White to king steps plus bishop slides
        // along the pin.
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Player::White, 7, 4);
        place(&mut board, PieceKind::Bishop, Player::White, 4, 4);
        place(&mut board, PieceKind::Rook, Player::Black, 0, 4);
        place(&mut board, PieceKind::King, Player::Black, 0, 0);

        for (from, to) in legal_moves(&board, Player::White) {
            assert!(
                !would_expose_check(&board, from, to),
                "move {from:?}->{to:?} leaves the king attacked"
            );
        }
        // The bishop has no legal move at all: it can only slide diagonally,
        // and every diagonal departure uncovers the rook.
        assert!(legal_moves(&board, Player::White)
            .iter()
            .all(|(from, _)| *from != loc(4, 4)));
    }
}
