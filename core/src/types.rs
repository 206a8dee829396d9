use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts, cell counts and linear indices.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Grids are stored row-major, `[y, x]`, so the flat slice order of an
/// `Array2` matches the linear index `y * width + x`.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

/// Shape of a `(width, height)` grid as an ndarray dimension.
pub const fn grid_shape(size: Coord2) -> (usize, usize) {
    (size.1 as usize, size.0 as usize)
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Linear index of `coords` on a board of `size`, `y * width + x`.
pub const fn linear_index(coords: Coord2, size: Coord2) -> usize {
    coords.1 as usize * size.0 as usize + coords.0 as usize
}

/// Inverse of [`linear_index`], `None` when the index is past the end.
pub fn coords_of(index: usize, size: Coord2) -> Option<Coord2> {
    let width = usize::from(size.0);
    if width == 0 || index >= width * usize::from(size.1) {
        return None;
    }
    let x = (index % width).try_into().ok()?;
    let y = (index / width).try_into().ok()?;
    Some((x, y))
}

pub const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

/// Chebyshev distance between two coordinates.
pub fn chebyshev(a: Coord2, b: Coord2) -> Coord {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        let size = (
            cols.try_into().unwrap_or(Coord::MAX),
            rows.try_into().unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, size)
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;

    let next = (x.checked_add_signed(dx)?, y.checked_add_signed(dy)?);
    in_bounds(next, bounds).then_some(next)
}

/// The up-to-8 Chebyshev neighbors of `center`, clipped to `bounds`.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_clipped_at_corners_and_edges() {
        assert_eq!(NeighborIter::new((0, 0), (3, 3)).count(), 3);
        assert_eq!(NeighborIter::new((1, 0), (3, 3)).count(), 5);
        assert_eq!(NeighborIter::new((1, 1), (3, 3)).count(), 8);
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn linear_index_is_row_major() {
        let size = (4, 3);
        assert_eq!(linear_index((0, 0), size), 0);
        assert_eq!(linear_index((3, 0), size), 3);
        assert_eq!(linear_index((0, 1), size), 4);
        assert_eq!(linear_index((3, 2), size), 11);
        assert_eq!(coords_of(11, size), Some((3, 2)));
        assert_eq!(coords_of(12, size), None);
    }

    #[test]
    fn nd_index_agrees_with_linear_index() {
        let size = (5, 2);
        let grid = Array2::from_shape_fn(grid_shape(size), |(y, x)| y * 5 + x);
        let flat = grid.as_slice().unwrap();
        for (i, value) in flat.iter().enumerate() {
            let coords = coords_of(i, size).unwrap();
            assert_eq!(grid[coords.to_nd_index()], *value);
            assert_eq!(linear_index(coords, size), i);
        }
    }
}
