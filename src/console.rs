//! Console implementations of the session I/O seams.
//!
//! Both types are generic over the underlying reader/writer so tests
//! can run scripted sessions against in-memory buffers.

use crate::games::nine_holes::{Board, Player};
use crate::session::{InputSource, OutputSink};
use std::io::{self, BufRead, Write};

/// Line-buffered token reader.
///
/// Mirrors the classic `scanf("%2s")` contract: a call yields at most
/// two characters of the next whitespace-delimited word, and whatever
/// is left of the line stays buffered for the next call. The session
/// discards that remainder after a rejected move.
pub struct ConsoleInput<R> {
    reader: R,
    pending: String,
}

impl ConsoleInput<io::BufReader<io::Stdin>> {
    /// Reads from standard input.
    pub fn stdin() -> Self {
        Self::new(io::BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> ConsoleInput<R> {
    /// Wraps any buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: String::new(),
        }
    }
}

impl<R: BufRead> InputSource for ConsoleInput<R> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let lead = self.pending.len() - self.pending.trim_start().len();
            self.pending.drain(..lead);

            if self.pending.is_empty() {
                let mut line = String::new();
                if self.reader.read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                self.pending = line;
                continue;
            }

            // At most two characters of the current word; the rest of
            // the word stays buffered, exactly like scanf("%2s").
            let end = self
                .pending
                .char_indices()
                .take_while(|(_, c)| !c.is_whitespace())
                .take(2)
                .last()
                .map(|(i, c)| i + c.len_utf8())
                .unwrap_or(0);
            let token: String = self.pending.drain(..end).collect();
            return Ok(Some(token));
        }
    }

    fn discard_pending(&mut self) {
        self.pending.clear();
    }
}

/// Writer-backed output sink.
pub struct ConsoleOutput<W> {
    writer: W,
}

impl ConsoleOutput<io::Stdout> {
    /// Writes to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    /// Wraps any writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleOutput<W> {
    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        // Blank line before the rows, matching the fixed layout.
        write!(self.writer, "\n{}", board.render())?;
        self.writer.flush()
    }

    fn prompt(&mut self, player: Player) -> io::Result<()> {
        write!(self.writer, "Player '{player}' move: ")?;
        self.writer.flush()
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }
}
