use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod session;
mod types;

/// Cells kept mine-free around the first click: the origin and its neighbors.
pub const SAFE_ZONE: CellCount = 9;

/// Board dimensions and mine count, fixed for the lifetime of one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates that the board is non-empty and that every possible first
    /// click leaves enough candidate cells for all the mines.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }

        let available = mult(size.0, size.1).saturating_sub(SAFE_ZONE);
        if mines > available {
            return Err(GameError::TooManyMines {
                requested: mines,
                available,
            });
        }

        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

/// Player actions accepted by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Discard the board and go back to an idle game with the same config.
    Reset,
    /// Place mines around `origin` without revealing anything.
    Start(Coord2),
    /// Reveal a cell, placing mines first if the game has not started.
    Uncover(Coord2),
    /// Toggle a flag on an unrevealed cell.
    Flag(Coord2),
}

/// What a single action did to the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    NoChange,
    Reset,
    Started,
    Revealed,
    HitMine,
    Won,
    FlagChanged,
}

impl Outcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(GameConfig::new((0, 5), 0), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::new((5, 0), 0), Err(GameError::InvalidSize));
    }

    #[test]
    fn config_rejects_mines_that_cannot_fit_outside_safe_zone() {
        assert_eq!(
            GameConfig::new((3, 3), 1),
            Err(GameError::TooManyMines {
                requested: 1,
                available: 0
            })
        );
        assert_eq!(
            GameConfig::new((4, 4), 8),
            Err(GameError::TooManyMines {
                requested: 8,
                available: 7
            })
        );
        assert!(GameConfig::new((4, 4), 7).is_ok());
    }

    #[test]
    fn config_accepts_mine_free_tiny_boards() {
        let config = GameConfig::new((2, 1), 0).unwrap();
        assert_eq!(config.total_cells(), 2);
        assert_eq!(config.safe_cells(), 2);
    }

    #[test]
    fn outcome_flags() {
        assert!(!Outcome::NoChange.has_update());
        assert!(Outcome::FlagChanged.has_update());
        assert!(Outcome::Won.is_final());
        assert!(Outcome::HitMine.is_final());
        assert!(!Outcome::Revealed.is_final());
    }
}
