use super::*;

/// Fixed mine layout for scripted boards. The first click is not protected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetMines {
    mines: Vec<Coord2>,
}

impl PresetMines {
    pub fn new(mut mines: Vec<Coord2>) -> Self {
        mines.sort_unstable();
        mines.dedup();
        Self { mines }
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }
}

impl MinePlacer for PresetMines {
    fn place_mines(&mut self, config: &GameConfig, _origin: Coord2) -> Result<Vec<Coord2>> {
        if self.mines.iter().any(|&coords| !in_bounds(coords, config.size)) {
            return Err(GameError::InvalidCoords);
        }

        let actual = CellCount::try_from(self.mines.len()).unwrap_or(CellCount::MAX);
        if actual != config.mines {
            log::warn!(
                "Preset layout has {} mines but the config asks for {}",
                actual,
                config.mines
            );
            return Err(GameError::MineCountMismatch {
                expected: config.mines,
                actual,
            });
        }

        Ok(self.mines.clone())
    }
}
