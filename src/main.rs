//! Nine Holes - shifting tic-tac-toe for the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use nine_holes::{ConsoleInput, ConsoleOutput, Session};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Logs go to stderr so stdout stays a clean game transcript.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting nine holes");

    let session = Session::new(ConsoleInput::stdin(), ConsoleOutput::stdout());
    let status = session.run()?;

    debug!(?status, "Session finished");
    Ok(())
}
