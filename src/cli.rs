//! Command-line interface for strictly_arcade.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Arcade - tic-tac-toe and a guessing game in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_arcade")]
#[command(about = "Play tic-tac-toe or guess the secret number", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "strictly_arcade.toml")]
    pub config: PathBuf,

    /// Side length of the tic-tac-toe board
    #[arg(long)]
    pub board_size: Option<usize>,

    /// Upper bound of the first guessing round
    #[arg(long)]
    pub upper_bound: Option<u32>,

    /// Scene to show at startup (main, tictactoe, guessinggame)
    #[arg(long)]
    pub scene: Option<String>,
}
