//! Strictly Arcade - console shell
//!
//! Hosts the tic-tac-toe and guessing game engines behind a scene switcher.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use strictly_arcade::{Shell, ShellConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    run(cli)
}

#[instrument(skip_all, fields(config_path = %cli.config.display()))]
fn run(cli: Cli) -> Result<()> {
    let config = ShellConfig::load_or_default(&cli.config)?.with_overrides(
        cli.board_size,
        cli.upper_bound,
        cli.scene,
    )?;

    let mut shell = Shell::new(&config)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    shell.run(stdin.lock(), &mut stdout)?;

    info!("Goodbye");
    Ok(())
}

/// Logs go to stderr so they never interleave with the game display.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_arcade=debug")),
        )
        .with_writer(std::io::stderr)
        .init();
}
