use std::collections::{BTreeSet, VecDeque};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Idle -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
/// - any -> Idle, through a reset
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Mines have not been placed yet
    Idle,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_active(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Indicates the game has ended and only a reset is accepted
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// Authoritative state of one game, replaced wholesale on every action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    status: GameStatus,
    cells: Array2<Cell>,
    revealed_count: CellCount,
    flag_count: CellCount,
    triggered_mine: Option<Coord2>,
}

impl Game {
    /// Fresh idle game, mines are only placed on the first move.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            status: GameStatus::default(),
            cells: Array2::default(grid_shape(config.size)),
            revealed_count: 0,
            flag_count: 0,
            triggered_mine: None,
        }
    }

    /// Returns the state that follows `action`, leaving `self` untouched.
    pub fn reduce<P: MinePlacer + ?Sized>(&self, action: Action, placer: &mut P) -> Result<Self> {
        let mut next = self.clone();
        next.apply(action, placer)?;
        Ok(next)
    }

    /// Applies `action` in place. On error nothing has been modified.
    pub fn apply<P: MinePlacer + ?Sized>(
        &mut self,
        action: Action,
        placer: &mut P,
    ) -> Result<Outcome> {
        match action {
            Action::Reset => {
                *self = Self::new(self.config);
                Ok(Outcome::Reset)
            }
            Action::Start(origin) => self.start(origin, placer),
            Action::Uncover(target) => self.uncover(target, placer),
            Action::Flag(target) => Ok(self.toggle_flag(target)),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flag_count as isize)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        in_bounds(coords, self.size()).then(|| self.cells[coords.to_nd_index()])
    }

    /// Cell at linear index `y * width + x`.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        coords_of(index, self.size()).map(|coords| self.cells[coords.to_nd_index()])
    }

    pub fn index_of(&self, coords: Coord2) -> Option<usize> {
        in_bounds(coords, self.size()).then(|| linear_index(coords, self.size()))
    }

    pub fn coord_of(&self, index: usize) -> Option<Coord2> {
        coords_of(index, self.size())
    }

    /// Every cell with its coordinates, in linear index order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), &cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn adjacent_mines(&self, coords: Coord2) -> u8 {
        self.cells
            .iter_neighbors(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].is_mine())
            .count() as u8
    }

    /// Revealed cells plus flagged mines, equal to the cell count exactly when won.
    pub fn settled_count(&self) -> CellCount {
        let flagged_mines = self
            .cells
            .iter()
            .filter(|&&cell| cell == Cell::Flagged { mine: true })
            .count();
        self.revealed_count + flagged_mines as CellCount
    }

    fn start<P: MinePlacer + ?Sized>(&mut self, origin: Coord2, placer: &mut P) -> Result<Outcome> {
        if !in_bounds(origin, self.size()) {
            log::debug!("Ignoring start outside the board at {:?}", origin);
            return Ok(Outcome::NoChange);
        }
        if !self.status.is_idle() {
            return Ok(Outcome::NoChange);
        }

        let mines = placer.place_mines(&self.config, origin)?;
        self.cells = build_grid(&self.config, &mines)?;
        self.status = GameStatus::InProgress;
        log::debug!("Placed {} mines around {:?}", mines.len(), origin);
        Ok(Outcome::Started)
    }

    fn uncover<P: MinePlacer + ?Sized>(
        &mut self,
        target: Coord2,
        placer: &mut P,
    ) -> Result<Outcome> {
        if !in_bounds(target, self.size()) {
            log::debug!("Ignoring uncover outside the board at {:?}", target);
            return Ok(Outcome::NoChange);
        }
        if self.status.is_idle() {
            self.start(target, placer)?;
        }
        if self.status.is_finished() {
            return Ok(Outcome::NoChange);
        }

        Ok(match self.cells[target.to_nd_index()] {
            Cell::Covered { mine: true } => {
                self.cells[target.to_nd_index()] = Cell::Exploded;
                self.triggered_mine = Some(target);
                self.status = GameStatus::Lost;
                Outcome::HitMine
            }
            Cell::Covered { mine: false } => {
                self.flood_reveal(target);
                if self.revealed_count == self.config.safe_cells() {
                    self.complete();
                    Outcome::Won
                } else {
                    Outcome::Revealed
                }
            }
            Cell::Flagged { .. } | Cell::Open(_) | Cell::Exploded => Outcome::NoChange,
        })
    }

    fn toggle_flag(&mut self, target: Coord2) -> Outcome {
        if !in_bounds(target, self.size()) {
            log::debug!("Ignoring flag outside the board at {:?}", target);
            return Outcome::NoChange;
        }
        if !self.status.is_active() {
            return Outcome::NoChange;
        }

        let cell = &mut self.cells[target.to_nd_index()];
        match *cell {
            Cell::Covered { mine } => {
                *cell = Cell::Flagged { mine };
                self.flag_count += 1;
                Outcome::FlagChanged
            }
            Cell::Flagged { mine } => {
                *cell = Cell::Covered { mine };
                self.flag_count -= 1;
                Outcome::FlagChanged
            }
            Cell::Open(_) | Cell::Exploded => Outcome::NoChange,
        }
    }

    /// Opens `origin` and, through zero cells, the whole connected region
    /// plus its numbered border. Flagged cells and mines are left alone.
    fn flood_reveal(&mut self, origin: Coord2) {
        let mut visited = BTreeSet::from([origin]);
        let mut to_visit = VecDeque::from([origin]);

        while let Some(coords) = to_visit.pop_front() {
            if self.cells[coords.to_nd_index()] != (Cell::Covered { mine: false }) {
                continue;
            }

            let adjacent_mines = self.adjacent_mines(coords);
            self.cells[coords.to_nd_index()] = Cell::Open(adjacent_mines);
            self.revealed_count += 1;

            if adjacent_mines == 0 {
                to_visit.extend(
                    self.cells
                        .iter_neighbors(coords)
                        .filter(|&pos| visited.insert(pos)),
                );
            }
        }
    }

    /// Only mines remain covered: flag them all and end the game.
    fn complete(&mut self) {
        for cell in self.cells.iter_mut() {
            if let Cell::Covered { mine: true } = *cell {
                *cell = Cell::Flagged { mine: true };
            }
        }
        self.flag_count = self.config.mines;
        self.status = GameStatus::Won;
        self.triggered_mine = None;
    }
}
