use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Picks `config.mines` coordinates uniformly at random among the cells whose
/// Chebyshev distance from `origin` is greater than one.
pub fn place_mines<R: Rng + ?Sized>(
    config: &GameConfig,
    origin: Coord2,
    rng: &mut R,
) -> Result<Vec<Coord2>> {
    if !in_bounds(origin, config.size) {
        return Err(GameError::InvalidCoords);
    }

    let (width, height) = config.size;
    let mut candidates: Vec<Coord2> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .filter(|&coords| chebyshev(coords, origin) > 1)
        .collect();

    let available = CellCount::try_from(candidates.len()).unwrap_or(CellCount::MAX);
    if config.mines > available {
        log::warn!(
            "Cannot keep {:?} safe, requested {} mines but only {} candidates",
            origin,
            config.mines,
            available
        );
        return Err(GameError::TooManyMines {
            requested: config.mines,
            available,
        });
    }

    candidates.shuffle(rng);
    candidates.truncate(config.mines.into());
    Ok(candidates)
}

/// Seeded generation strategy, the same seed always yields the same boards.
#[derive(Clone, Debug)]
pub struct RandomPlacer {
    seed: u64,
    rng: SmallRng,
}

impl RandomPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinePlacer for RandomPlacer {
    fn place_mines(&mut self, config: &GameConfig, origin: Coord2) -> Result<Vec<Coord2>> {
        place_mines(config, origin, &mut self.rng)
    }
}
