//! Raw mutable 8x8 mailbox grid.
//!
//! `Board` stores at most one piece per square and enforces no chess rules of
//! its own; legality lives in the `rules` modules. It is the single mutable
//! surface the session commits moves through.

use crate::board::location::{BoardError, BoardLocation};
use crate::board::piece::{Piece, Player};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    fn slot(&mut self, at: BoardLocation) -> &mut Option<Piece> {
        &mut self.squares[at.row() as usize][at.col() as usize]
    }

    #[inline]
    pub fn get(&self, at: BoardLocation) -> Option<Piece> {
        self.squares[at.row() as usize][at.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, at: BoardLocation, piece: Option<Piece>) {
        *self.slot(at) = piece;
    }

    /// Setup-time placement; unlike `set` it refuses to overwrite an
    /// occupant.
    pub fn place(&mut self, piece: Piece, at: BoardLocation) -> Result<(), BoardError> {
        if self.get(at).is_some() {
            return Err(BoardError::LocationOccupied(at));
        }
        *self.slot(at) = Some(piece);
        Ok(())
    }

    /// Transfers the occupant of `from` to `to`, leaving `from` empty, and
    /// returns whatever previously occupied `to` so the caller can record the
    /// capture. A move from an empty square is a no-op.
    pub fn move_piece(&mut self, from: BoardLocation, to: BoardLocation) -> Option<Piece> {
        let mover = self.slot(from).take();
        if mover.is_none() {
            return None;
        }
        std::mem::replace(self.slot(to), mover)
    }

    pub fn occupied_squares(&self) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        BoardLocation::all().filter_map(|at| self.get(at).map(|piece| (at, piece)))
    }

    pub fn pieces_of(&self, owner: Player) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        self.occupied_squares()
            .filter(move |(_, piece)| piece.owner == owner)
    }
}
