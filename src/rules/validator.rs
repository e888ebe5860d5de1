//! Pseudo-legality gate.
//!
//! This module answers the first of the two legality questions: does the
//! requested relocation fit the moving piece's movement rule, with a clear
//! path where one is required, without landing on a friendly piece? It is
//! deliberately turn-agnostic and king-safety-agnostic; the session applies
//! the turn-order gates and `rules::king_safety` applies the second question.
//!
//! `RejectReason` is the single play-time rejection taxonomy for the crate.
//! Every variant is a recoverable rejection returned as a value to the
//! caller; none are faults, and the library never panics on a play-time
//! path. The `Display` text is written for direct presentation to a player.

use std::error::Error;
use std::fmt;

use crate::board::board::Board;
use crate::board::location::BoardLocation;
use crate::board::piece::{PieceKind, Player};
use crate::movement::bishop_moves::is_bishop_shape;
use crate::movement::king_moves::is_king_move;
use crate::movement::knight_moves::is_knight_move;
use crate::movement::pawn_moves::{
    forward_step, is_capture_shape, is_double_push_shape, is_single_push_shape,
};
use crate::movement::queen_moves::is_queen_shape;
use crate::movement::rook_moves::is_rook_shape;
use crate::movement::shared::path_is_clear;

/// Why a requested move was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The session already reached a terminal status; no further moves are
    /// accepted.
    GameAlreadyOver,
    /// The source square is empty.
    NoPieceAtSource,
    /// The source piece belongs to the player whose turn it is not.
    NotOwnedByActivePlayer,
    /// The displacement does not fit the piece's movement rule (including a
    /// pawn diagonal onto an empty square).
    GeometricallyIllegal,
    /// A sliding piece's line of travel, or the square(s) ahead of a pawn
    /// push, is occupied.
    BlockedPath,
    /// The destination holds a piece of the mover's own color.
    SelfCapture,
    /// The move is otherwise sound but would leave the mover's own king
    /// attacked.
    ExposesOwnKingToCheck,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::GameAlreadyOver => write!(f, "the game is already over"),
            RejectReason::NoPieceAtSource => write!(f, "no piece on the selected square"),
            RejectReason::NotOwnedByActivePlayer => {
                write!(f, "that piece belongs to the other player")
            }
            RejectReason::GeometricallyIllegal => {
                write!(f, "that piece does not move that way")
            }
            RejectReason::BlockedPath => write!(f, "another piece blocks the path"),
            RejectReason::SelfCapture => write!(f, "cannot capture your own piece"),
            RejectReason::ExposesOwnKingToCheck => {
                write!(f, "invalid move: would leave your king in check")
            }
        }
    }
}

impl Error for RejectReason {}

/// First legality gate: movement shape, occlusion, and the same-color
/// exclusion, with the failure classified.
pub fn validate_pseudo_legal(
    board: &Board,
    from: BoardLocation,
    to: BoardLocation,
) -> Result<(), RejectReason> {
    let Some(piece) = board.get(from) else {
        return Err(RejectReason::NoPieceAtSource);
    };

    match piece.kind {
        PieceKind::Pawn => validate_pawn(board, from, to, piece.owner)?,
        PieceKind::Knight => {
            if !is_knight_move(from, to) {
                return Err(RejectReason::GeometricallyIllegal);
            }
        }
        PieceKind::Bishop => validate_slider(board, from, to, is_bishop_shape)?,
        PieceKind::Rook => validate_slider(board, from, to, is_rook_shape)?,
        PieceKind::Queen => validate_slider(board, from, to, is_queen_shape)?,
        PieceKind::King => {
            if !is_king_move(from, to) {
                return Err(RejectReason::GeometricallyIllegal);
            }
        }
    }

    match board.get(to) {
        Some(target) if target.owner == piece.owner => Err(RejectReason::SelfCapture),
        _ => Ok(()),
    }
}

/// Boolean view of [`validate_pseudo_legal`]; also the attack predicate the
/// king-safety checker reuses square-by-square.
#[inline]
pub fn is_pseudo_legal(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    validate_pseudo_legal(board, from, to).is_ok()
}

fn validate_slider(
    board: &Board,
    from: BoardLocation,
    to: BoardLocation,
    shape: fn(BoardLocation, BoardLocation) -> bool,
) -> Result<(), RejectReason> {
    if !shape(from, to) {
        return Err(RejectReason::GeometricallyIllegal);
    }
    if !path_is_clear(board, from, to) {
        return Err(RejectReason::BlockedPath);
    }
    Ok(())
}

fn validate_pawn(
    board: &Board,
    from: BoardLocation,
    to: BoardLocation,
    player: Player,
) -> Result<(), RejectReason> {
    if is_single_push_shape(from, to, player) {
        if board.get(to).is_some() {
            return Err(RejectReason::BlockedPath);
        }
        return Ok(());
    }
    if is_double_push_shape(from, to, player) {
        let step_clear = match from.offset(forward_step(player), 0) {
            Ok(mid) => board.get(mid).is_none(),
            Err(_) => false,
        };
        if !step_clear || board.get(to).is_some() {
            return Err(RejectReason::BlockedPath);
        }
        return Ok(());
    }
    if is_capture_shape(from, to, player) {
        // A pawn diagonal is only ever a capture; same-color landings fall
        // through to the shared self-capture gate.
        if board.get(to).is_none() {
            return Err(RejectReason::GeometricallyIllegal);
        }
        return Ok(());
    }
    Err(RejectReason::GeometricallyIllegal)
}
