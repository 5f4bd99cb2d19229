//! Command-line interface for the mini-app.

use clap::{Parser, Subcommand};

use crate::ai::Difficulty;
use crate::settings::GameMode;

/// Tic-tac-toe mini-app with an unbeatable opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_miniapp")]
#[command(about = "Terminal tic-tac-toe with three opponent policies", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Opponent difficulty
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        difficulty: Difficulty,

        /// Opponent mode
        #[arg(long, value_enum, default_value_t = GameMode::VsComputer)]
        mode: GameMode,

        /// Base URL of the host platform's profile endpoint.
        /// Falls back to the MINIAPP_PROFILE_URL environment variable.
        #[arg(long)]
        profile_url: Option<String>,

        /// URL offered by the share action.
        /// Falls back to the MINIAPP_SHARE_URL environment variable.
        #[arg(long)]
        share_url: Option<String>,

        /// Delay before the computer's reply, in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
    },

    /// Pit two policies against each other and print the tallies
    Simulate {
        /// Policy playing X (moves first)
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        x: Difficulty,

        /// Policy playing O
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        o: Difficulty,

        /// Number of games to play
        #[arg(long, default_value_t = 100)]
        games: u32,

        /// Print the tally as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
