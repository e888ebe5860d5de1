//! Seeded random self-play harness.
//!
//! Drives a full `Session` from the opening position by picking uniformly
//! among the legal moves each ply, until the game reaches a terminal status
//! or a ply cap. This is integration smoke tooling, not an opponent AI: it
//! exercises the validator, king-safety checks, classifier, and session
//! bookkeeping end-to-end.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::board::Board;
use crate::board::piece::Player;
use crate::rules::classifier::{legal_moves, GameStatus};
use crate::session::events::MoveOutcome;
use crate::session::session::Session;

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub seed: u64,
    pub max_plies: u16,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_plies: 300,
        }
    }
}

/// What a finished playout looked like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoutSummary {
    pub final_status: GameStatus,
    pub plies_played: u16,
    pub white_captures: usize,
    pub black_captures: usize,
    /// True when the ply cap fired before the game reached a terminal
    /// status.
    pub reached_ply_limit: bool,
    pub final_board: Board,
}

/// Plays one seeded random game and reports how it ended.
pub fn run_random_playout(config: &PlayoutConfig) -> PlayoutSummary {
    let mut session = Session::new();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut plies_played: u16 = 0;

    while plies_played < config.max_plies && !session.status().is_terminal() {
        let candidates = legal_moves(session.board(), session.active_player());
        let Some(&(from, to)) = candidates.as_slice().choose(&mut rng) else {
            break;
        };
        match session.attempt_move(from, to) {
            MoveOutcome::Applied { .. } => plies_played += 1,
            // The legal-move list and the session gates agree by
            // construction; bail out rather than loop if they ever diverge.
            MoveOutcome::Rejected { .. } => break,
        }
    }

    PlayoutSummary {
        final_status: session.status(),
        plies_played,
        white_captures: session.captured_pieces(Player::White).len(),
        black_captures: session.captured_pieces(Player::Black).len(),
        reached_ply_limit: plies_played >= config.max_plies && !session.status().is_terminal(),
        final_board: session.board().clone(),
    }
}
