//! Standalone random self-play series runner.
//!
//! Run with:
//! `cargo run --bin random_match`
//! `cargo run --bin random_match -- --verbose`

use parlor_chess::utils::random_playout::{run_random_playout, PlayoutConfig};
use parlor_chess::utils::render_board::render_board;

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let games: u64 = 10;
    let mut terminal_games: u32 = 0;
    let mut total_plies: u64 = 0;

    for seed in 0..games {
        let summary = run_random_playout(&PlayoutConfig {
            seed,
            ..PlayoutConfig::default()
        });

        if summary.final_status.is_terminal() {
            terminal_games += 1;
        }
        total_plies += u64::from(summary.plies_played);

        println!(
            "game {} seed={} plies={} captures={}+{} result: {}",
            seed + 1,
            seed,
            summary.plies_played,
            summary.white_captures,
            summary.black_captures,
            summary.final_status
        );
        if let Some(winner) = summary.final_status.winner() {
            println!("  {winner} delivered mate");
        }
        if verbose {
            println!("{}", render_board(&summary.final_board));
        }
    }

    println!(
        "played {} games, {} decided, avg plies {:.1}",
        games,
        terminal_games,
        total_plies as f64 / games as f64
    );
}
