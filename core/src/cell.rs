use serde::{Deserialize, Serialize};

/// Player-visible state of one cell, together with whether it holds a mine.
///
/// A revealed safe cell carries its adjacent mine count and nothing else, so a
/// value and a mine can never coexist, and a cell is never revealed and
/// flagged at once.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Not revealed, not flagged.
    Covered { mine: bool },
    /// Not revealed, flagged by the player (or auto-flagged on a win).
    Flagged { mine: bool },
    /// Revealed safe cell with its adjacent mine count, `0..=8`.
    Open(u8),
    /// The revealed mine that ended the game.
    Exploded,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        match self {
            Self::Covered { mine } | Self::Flagged { mine } => mine,
            Self::Open(_) => false,
            Self::Exploded => true,
        }
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Open(_) | Self::Exploded)
    }

    pub const fn is_unrevealed(self) -> bool {
        !self.is_revealed()
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged { .. })
    }

    /// Adjacent mine count, only known once a safe cell is open.
    pub const fn value(self) -> Option<u8> {
        match self {
            Self::Open(value) => Some(value),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Covered { mine: false }
    }
}
