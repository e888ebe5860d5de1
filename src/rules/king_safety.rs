//! King-safety checks.
//!
//! Two questions are answered here: is a side's king attacked right now, and
//! would a candidate move leave the mover's own king attacked? The attack
//! test reuses the validator's pseudo-legality predicate square-by-square:
//! the king's square is attacked exactly when some opposing piece could
//! legally capture on it. Candidate moves are tried on a scratch clone of the
//! board, so the caller's board is never mutated and no reader can observe a
//! half-applied move.

use crate::board::board::Board;
use crate::board::location::BoardLocation;
use crate::board::piece::{PieceKind, Player};
use crate::rules::validator::is_pseudo_legal;

/// Linear scan for the player's king. A well-formed game always has one; a
/// board without it reads as "not in check" by convention.
pub fn king_square(board: &Board, player: Player) -> Option<BoardLocation> {
    board
        .pieces_of(player)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(at, _)| at)
}

/// True when any opposing piece could capture the player's king where it
/// stands.
pub fn is_in_check(board: &Board, player: Player) -> bool {
    let Some(king_at) = king_square(board, player) else {
        return false;
    };
    board
        .pieces_of(player.opponent())
        .any(|(at, _)| is_pseudo_legal(board, at, king_at))
}

/// Plays the candidate move on a scratch copy of the board and reports
/// whether the mover's own king would be attacked afterwards. An empty
/// source square exposes nothing.
pub fn would_expose_check(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    let Some(mover) = board.get(from) else {
        return false;
    };
    let mut trial = board.clone();
    trial.move_piece(from, to);
    is_in_check(&trial, mover.owner)
}
