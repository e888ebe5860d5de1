//! Turn-taking session state machine.
//!
//! `Session` owns the board, the active player, the current status, and the
//! captured-piece lists, and sequences every accepted move through
//! validate -> commit -> reclassify -> switch turn. All play-time failures
//! come back as [`MoveOutcome::Rejected`] values; the session never panics
//! on a move request and a rejected request changes nothing.
//!
//! Sessions are plain owned values: construct as many independent games as
//! needed and drop them when done. `reset` rebuilds the opening state
//! wholesale.

use crate::board::board::Board;
use crate::board::location::BoardLocation;
use crate::board::piece::{Piece, Player};
use crate::board::setup::standard_opening;
use crate::rules::classifier::{classify, GameStatus};
use crate::rules::king_safety::would_expose_check;
use crate::rules::validator::{validate_pseudo_legal, RejectReason};
use crate::session::events::{EventHook, MoveOutcome, SessionEvent};

pub struct Session {
    board: Board,
    active_player: Player,
    status: GameStatus,
    // Pieces captured by each player, in capture order, indexed by
    // Player::index(). Kept for the host's captured-piece display.
    captured: [Vec<Piece>; 2],
    event_hook: Option<EventHook>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh game: standard opening position, White to move.
    pub fn new() -> Self {
        Self {
            board: standard_opening(),
            active_player: Player::White,
            status: GameStatus::InProgress,
            captured: [Vec::new(), Vec::new()],
            event_hook: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Pieces the given player has captured, in capture order.
    pub fn captured_pieces(&self, by: Player) -> &[Piece] {
        &self.captured[by.index()]
    }

    /// Registers the notification callback. Replaces any previous hook.
    pub fn set_event_hook(&mut self, hook: EventHook) {
        self.event_hook = Some(hook);
    }

    /// Requests a move for the active player.
    ///
    /// On acceptance the move is committed, any capture is recorded, the
    /// opponent's status becomes the session status, and the turn passes.
    /// If the new status is terminal the game is over and the active player
    /// stays put.
    pub fn attempt_move(&mut self, from: BoardLocation, to: BoardLocation) -> MoveOutcome {
        if let Err(reason) = self.check_move(from, to) {
            return MoveOutcome::Rejected { reason };
        }

        let mover = self.active_player;
        let captured = self.board.move_piece(from, to);
        if let Some(victim) = captured {
            self.captured[mover.index()].push(victim);
        }

        self.status = classify(&self.board, mover.opponent());
        if !self.status.is_terminal() {
            self.active_player = mover.opponent();
        }

        self.emit(SessionEvent::MoveCommitted {
            from,
            to,
            mover,
            captured,
        });
        self.emit(SessionEvent::StateChanged {
            status: self.status,
            active_player: self.active_player,
        });

        MoveOutcome::Applied {
            status: self.status,
            captured,
        }
    }

    /// Restores the opening state: standard position, empty capture lists,
    /// White to move.
    pub fn reset(&mut self) {
        self.board = standard_opening();
        self.active_player = Player::White;
        self.status = GameStatus::InProgress;
        self.captured = [Vec::new(), Vec::new()];
        self.emit(SessionEvent::StateChanged {
            status: self.status,
            active_player: self.active_player,
        });
    }

    fn check_move(&self, from: BoardLocation, to: BoardLocation) -> Result<(), RejectReason> {
        if self.status.is_terminal() {
            return Err(RejectReason::GameAlreadyOver);
        }
        let piece = self
            .board
            .get(from)
            .ok_or(RejectReason::NoPieceAtSource)?;
        if piece.owner != self.active_player {
            return Err(RejectReason::NotOwnedByActivePlayer);
        }
        validate_pseudo_legal(&self.board, from, to)?;
        if would_expose_check(&self.board, from, to) {
            return Err(RejectReason::ExposesOwnKingToCheck);
        }
        Ok(())
    }

    fn emit(&mut self, event: SessionEvent) {
        if let Some(hook) = self.event_hook.as_mut() {
            hook(&event);
        }
    }
}
