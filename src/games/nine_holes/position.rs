//! Position enum for the nine cells of the board.

use serde::{Deserialize, Serialize};

/// A position on the board (indices 0-8, on-screen numbers 1-9).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (number 1)
    TopLeft,
    /// Top-center (number 2)
    TopCenter,
    /// Top-right (number 3)
    TopRight,
    /// Middle-left (number 4)
    MiddleLeft,
    /// Center (number 5)
    Center,
    /// Middle-right (number 6)
    MiddleRight,
    /// Bottom-left (number 7)
    BottomLeft,
    /// Bottom-center (number 8)
    BottomCenter,
    /// Bottom-right (number 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in board order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from the on-screen number 1-9.
    ///
    /// Anything outside 1-9 (including 0) has no position.
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1..=9 => Self::from_index(number as usize - 1),
            _ => None,
        }
    }

    /// On-screen number for this position (1-9).
    pub fn number(self) -> u32 {
        self.to_index() as u32 + 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}
