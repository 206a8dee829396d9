use ndarray::Array2;

use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Source of mine positions, consulted once per game when the first cell is
/// opened (or the game is explicitly started).
pub trait MinePlacer {
    fn place_mines(&mut self, config: &GameConfig, origin: Coord2) -> Result<Vec<Coord2>>;
}

/// Builds a covered, unflagged grid with mines at `mine_coords`.
pub fn build_grid(config: &GameConfig, mine_coords: &[Coord2]) -> Result<Array2<Cell>> {
    let mut grid = Array2::from_elem(grid_shape(config.size), Cell::default());

    for &coords in mine_coords {
        if !in_bounds(coords, config.size) {
            return Err(GameError::InvalidCoords);
        }
        grid[coords.to_nd_index()] = Cell::Covered { mine: true };
    }

    Ok(grid)
}
