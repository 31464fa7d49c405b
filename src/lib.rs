//! Nine Holes library - a three-piece shifting tic-tac-toe variant.
//!
//! # Architecture
//!
//! - **Games**: the nine holes engine (board, input classification,
//!   rules, win detection)
//! - **Session**: the synchronous turn loop, abstracted over an input
//!   source and an output sink
//! - **Console**: stdin/stdout implementations of the session seams
//!
//! # Example
//!
//! ```no_run
//! use nine_holes::{ConsoleInput, ConsoleOutput, Session};
//!
//! # fn example() -> anyhow::Result<()> {
//! let session = Session::new(ConsoleInput::stdin(), ConsoleOutput::stdout());
//! let _status = session.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;
mod session;

// Crate-level exports - console I/O
pub use console::{ConsoleInput, ConsoleOutput};

// Crate-level exports - session management
pub use session::{InputSource, OutputSink, Session};

// Crate-level exports - game types
pub use games::nine_holes::{
    Board, Command, Game, GameState, GameStatus, Move, MoveError, Player, Position, Square,
    invariants, parse, winning_player,
};
