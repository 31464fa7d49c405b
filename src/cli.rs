//! Command-line interface for nine_holes.

use clap::Parser;

/// Nine Holes - shifting tic-tac-toe for the terminal.
///
/// The game itself takes no options; the CLI exists for `--help` and
/// `--version` and to reject stray arguments. Logging is controlled
/// through the standard `RUST_LOG` environment filter.
#[derive(Parser, Debug)]
#[command(name = "nine_holes")]
#[command(about = "Shifting tic-tac-toe: three pieces per player", long_about = None)]
#[command(version)]
pub struct Cli {}
